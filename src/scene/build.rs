//! Build a battle into a scene
//!
//! Heightmap first (players need it), then structures sector by sector,
//! then players. Each sector is planned and dispatched before the next one
//! is looked at, so a failing sector leaves earlier ones in the scene.

use serde::Serialize;

use super::{ConfigureOutcome, ObjectHandle, SceneBuilder, SceneRoots};
use crate::battle::Battle;
use crate::core::config::{LayoutConfig, PrefabSet};
use crate::core::error::Result;
use crate::core::types::Side;
use crate::layout::heightmap::Heightmap;
use crate::layout::placement::Placement;
use crate::layout::players::plan_players;
use crate::layout::sectors::SectorPlanner;

/// Counters describing what a build did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub structures_spawned: usize,
    pub players_spawned: usize,
    pub groups_created: usize,
    /// Sectors of a type with no layout handler
    pub sectors_skipped: usize,
    /// Configure calls the spawned prefab had no component for
    pub components_missing: usize,
}

/// Output of a full build
#[derive(Debug, Clone)]
pub struct BattleBuild {
    /// Ground heights, kept for placing units after startup
    pub heightmap: Heightmap,
    pub report: BuildReport,
}

/// Build the whole battlefield: heightmap, structures, players
pub fn build_battle<S: SceneBuilder + ?Sized>(
    battle: &Battle,
    config: &LayoutConfig,
    roots: SceneRoots,
    scene: &mut S,
) -> Result<BattleBuild> {
    config.validate()?;

    let heightmap = Heightmap::build(battle)?;
    let mut report = build_structures(battle, config, roots.fort, scene)?;
    let players = place_players(battle, &heightmap, config, roots, scene)?;
    report.players_spawned = players.players_spawned;
    report.components_missing += players.components_missing;

    tracing::info!(
        "Built {}x{} battle: {} structures in {} groups, {} players, {} sectors skipped",
        battle.width,
        battle.height,
        report.structures_spawned,
        report.groups_created,
        report.players_spawned,
        report.sectors_skipped
    );
    if report.components_missing > 0 {
        tracing::warn!(
            "{} spawned objects had no component to configure",
            report.components_missing
        );
    }

    Ok(BattleBuild { heightmap, report })
}

/// Spawn every structure under `fort`
pub fn build_structures<S: SceneBuilder + ?Sized>(
    battle: &Battle,
    config: &LayoutConfig,
    fort: ObjectHandle,
    scene: &mut S,
) -> Result<BuildReport> {
    let planner = SectorPlanner::new(battle, config);
    let mut report = BuildReport::default();

    for (index, sector) in battle.sectors.iter().enumerate() {
        let Some(plan) = planner.plan(index, sector)? else {
            report.sectors_skipped += 1;
            continue;
        };

        let parent = match plan.group {
            Some(name) => {
                report.groups_created += 1;
                scene.create_group(name, fort)
            }
            None => fort,
        };

        for placement in &plan.placements {
            dispatch(scene, &config.prefabs, placement, parent, &mut report);
            report.structures_spawned += 1;
        }

        tracing::debug!(
            "Sector {} ({}): {} placements",
            index,
            sector.kind.name(),
            plan.placements.len()
        );
    }

    Ok(report)
}

/// Spawn attackers and defenders under their side's root
pub fn place_players<S: SceneBuilder + ?Sized>(
    battle: &Battle,
    heightmap: &Heightmap,
    config: &LayoutConfig,
    roots: SceneRoots,
    scene: &mut S,
) -> Result<BuildReport> {
    let mut report = BuildReport::default();

    for player in plan_players(battle, heightmap, config)? {
        let parent = match player.side {
            Side::Attack => roots.attackers,
            Side::Defense => roots.defenders,
        };
        dispatch(scene, &config.prefabs, &player.placement, parent, &mut report);
        report.players_spawned += 1;
    }

    Ok(report)
}

fn dispatch<S: SceneBuilder + ?Sized>(
    scene: &mut S,
    prefabs: &PrefabSet,
    placement: &Placement,
    parent: ObjectHandle,
    report: &mut BuildReport,
) {
    let prefab = prefabs.get(placement.kind);
    let handle = scene.spawn(prefab, placement.position, placement.rotation);

    if scene.configure(handle, &placement.params) == ConfigureOutcome::CapabilityAbsent {
        tracing::debug!(
            "Prefab '{}' has no component for {:?}, left unconfigured",
            prefab,
            placement.params
        );
        report.components_missing += 1;
    }

    scene.reparent(handle, parent);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::{Player, Sector, SectorKind};
    use crate::core::error::LayoutError;
    use crate::core::types::{Orientation, PrefabId};
    use crate::scene::SceneRecorder;
    use glam::IVec2;

    fn fort_battle() -> Battle {
        Battle::new(6, 6)
            .with_sector(Sector::wall(
                vec![IVec2::new(0, 0), IVec2::new(1, 0), IVec2::new(2, 0)],
                2,
                Orientation::Horizontal,
            ))
            .with_sector(Sector::new(SectorKind::Gate, vec![IVec2::new(3, 0)], 0))
            .with_sector(Sector::new(
                SectorKind::Tower,
                vec![IVec2::new(4, 0), IVec2::new(5, 0), IVec2::new(4, 1), IVec2::new(5, 1)],
                4,
            ))
            .with_sector(Sector::new(SectorKind::Other("moat".into()), vec![], 0))
            .with_player(Side::Attack, Player::new(0.0, 5.0))
            .with_player(Side::Defense, Player::new(4.0, 1.0))
    }

    #[test]
    fn test_build_report_counts() {
        let (mut scene, roots) = SceneRecorder::with_roots();
        let build = build_battle(&fort_battle(), &LayoutConfig::default(), roots, &mut scene)
            .unwrap();

        assert_eq!(
            build.report,
            BuildReport {
                structures_spawned: 5,
                players_spawned: 2,
                groups_created: 2,
                sectors_skipped: 1,
                components_missing: 0,
            }
        );
        assert_eq!(build.heightmap.get(4, 1), Some(4));
    }

    #[test]
    fn test_hierarchy() {
        let (mut scene, roots) = SceneRecorder::with_roots();
        build_battle(&fort_battle(), &LayoutConfig::default(), roots, &mut scene).unwrap();

        let fort_children: Vec<&str> = scene
            .children(roots.fort)
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(fort_children, vec!["Wall", "Gate", "tower"]);

        let wall_group = scene.children(roots.fort)[0].handle;
        assert_eq!(scene.children(wall_group).len(), 3);
        assert_eq!(scene.children(roots.attackers).len(), 1);
        assert_eq!(scene.children(roots.defenders).len(), 1);
    }

    #[test]
    fn test_defender_stands_on_tower() {
        let (mut scene, roots) = SceneRecorder::with_roots();
        let config = LayoutConfig::with_scaling_factor(0.5);
        build_battle(&fort_battle(), &config, roots, &mut scene).unwrap();

        let defender = scene.children(roots.defenders)[0];
        assert_eq!(defender.position.y, 4.0 * 0.5 + 0.5);
    }

    #[test]
    fn test_missing_component_is_not_fatal() {
        let (scene, roots) = SceneRecorder::with_roots();
        let mut scene = scene.without_component(PrefabId::new("wall"));
        let build = build_battle(&fort_battle(), &LayoutConfig::default(), roots, &mut scene)
            .unwrap();

        assert_eq!(build.report.components_missing, 3);
        let walls = scene.nodes_with_prefab(&PrefabId::new("wall"));
        assert_eq!(walls.len(), 3);
        assert!(walls.iter().all(|w| w.params.is_none() && w.parent.is_some()));
    }

    #[test]
    fn test_invalid_config_spawns_nothing() {
        let (mut scene, roots) = SceneRecorder::with_roots();
        let config = LayoutConfig::with_scaling_factor(0.0);
        let result = build_battle(&fort_battle(), &config, roots, &mut scene);

        assert!(matches!(result, Err(LayoutError::InvalidConfig(_))));
        assert_eq!(scene.len(), 3);
    }

    #[test]
    fn test_out_of_bounds_fails_before_spawning() {
        let battle = fort_battle().with_sector(Sector::new(
            SectorKind::Flag,
            vec![IVec2::new(6, 6)],
            1,
        ));
        let (mut scene, roots) = SceneRecorder::with_roots();
        let result = build_battle(&battle, &LayoutConfig::default(), roots, &mut scene);

        assert!(matches!(result, Err(LayoutError::OutOfBounds { x: 6, y: 6, .. })));
        assert_eq!(scene.len(), 3);
    }
}
