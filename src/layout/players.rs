//! Player spawn placement on top of the heightmap

use crate::battle::Battle;
use crate::core::config::LayoutConfig;
use crate::core::error::Result;
use crate::core::types::PrefabKind;
use crate::layout::geometry::GridMapping;
use crate::layout::heightmap::Heightmap;
use crate::layout::placement::{ComponentParams, Placement, PlayerPlacement};

/// Clearance between the ground cell and a player's origin
pub const PLAYER_CLEARANCE: f32 = 0.5;

/// Plan attackers then defenders, each standing on its ground cell
pub fn plan_players(
    battle: &Battle,
    heightmap: &Heightmap,
    config: &LayoutConfig,
) -> Result<Vec<PlayerPlacement>> {
    let mapping = GridMapping::new(battle.width, battle.height);

    battle
        .players()
        .map(|(side, player)| {
            let ground = heightmap.height_at(player.start_pos)?;
            let elevation = ground as f32 * config.scaling_factor + PLAYER_CLEARANCE;
            let position = mapping.to_world(player.start_pos, elevation);
            Ok(PlayerPlacement {
                side,
                placement: Placement::new(
                    PrefabKind::Player,
                    position,
                    ComponentParams::PlayerSide { side },
                ),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::{Player, Sector, SectorKind};
    use crate::core::error::LayoutError;
    use crate::core::types::Side;
    use glam::{IVec2, Vec3};

    #[test]
    fn test_player_elevation_from_heightmap() {
        let battle = Battle::new(4, 4)
            .with_sector(Sector::new(SectorKind::Tower, vec![IVec2::new(1, 1)], 3))
            .with_player(Side::Defense, Player::new(1.2, 0.8))
            .with_player(Side::Attack, Player::new(3.0, 3.0));
        let heightmap = Heightmap::build(&battle).unwrap();
        let config = LayoutConfig::with_scaling_factor(2.0);

        let players = plan_players(&battle, &heightmap, &config).unwrap();
        assert_eq!(players.len(), 2);

        let attacker = players[0];
        assert_eq!(attacker.side, Side::Attack);
        assert_eq!(attacker.placement.position, Vec3::new(-1.5, 0.5, 1.5));
        assert_eq!(
            attacker.placement.params,
            ComponentParams::PlayerSide { side: Side::Attack }
        );

        let defender = players[1];
        assert_eq!(defender.side, Side::Defense);
        // ground 3 * scaling 2 + clearance; x/z keep the fractional start
        let expected = Vec3::new(2.0 - 1.2 - 0.5, 6.5, 0.8 - 2.0 + 0.5);
        assert!((defender.placement.position - expected).length() < 1e-5);
    }

    #[test]
    fn test_player_out_of_bounds() {
        let battle = Battle::new(4, 4).with_player(Side::Attack, Player::new(4.0, 0.0));
        let heightmap = Heightmap::build(&battle).unwrap();
        let result = plan_players(&battle, &heightmap, &LayoutConfig::default());
        assert!(matches!(
            result,
            Err(LayoutError::OutOfBounds { x: 4, y: 0, .. })
        ));
    }

    #[test]
    fn test_no_players() {
        let battle = Battle::new(2, 2);
        let heightmap = Heightmap::build(&battle).unwrap();
        let players = plan_players(&battle, &heightmap, &LayoutConfig::default()).unwrap();
        assert!(players.is_empty());
    }
}
