#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::query::WorldQuery;
    use crate::state::GameStateSnapshot;
    use crate::types::{rects_intersect, Position, SimTime, Velocity};

    struct SingleWaterTile;

    impl WorldQuery for SingleWaterTile {
        fn tile_size(&self) -> f64 {
            32.0
        }

        fn query_tile(&self, layer: TileLayer, grid_x: i32, grid_y: i32) -> bool {
            layer == TileLayer::Water && grid_x == 1 && grid_y == 0
        }
    }

    #[test]
    fn test_powerup_max_durations() {
        assert_eq!(PowerupKind::Invulnerable.max_duration(), 10.0);
        assert_eq!(PowerupKind::RateOfFire.max_duration(), 10.0);
        assert_eq!(PowerupKind::ScoreMultiplier.max_duration(), 10.0);
        assert_eq!(PowerupKind::SuperSpeed.max_duration(), 10.0);
        assert_eq!(PowerupKind::Regeneration.max_duration(), 3.0);
    }

    #[test]
    fn test_direction_to_dominant_axis() {
        let origin = Position::new(0.0, 0.0);
        assert_eq!(origin.direction_to(&Position::new(-10.0, 2.0)), Facing::Left);
        assert_eq!(origin.direction_to(&Position::new(10.0, -2.0)), Facing::Right);
        assert_eq!(origin.direction_to(&Position::new(1.0, -10.0)), Facing::Front);
        assert_eq!(origin.direction_to(&Position::new(1.0, 10.0)), Facing::Back);
        // Exact diagonal resolves vertically
        assert_eq!(origin.direction_to(&Position::new(5.0, 5.0)), Facing::Back);
    }

    #[test]
    fn test_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_rects_intersect() {
        let size = (16.0, 16.0);
        assert!(rects_intersect(
            Position::new(0.0, 0.0),
            size,
            Position::new(15.0, 15.0),
            size
        ));
        // Touching edges do not overlap
        assert!(!rects_intersect(
            Position::new(0.0, 0.0),
            size,
            Position::new(16.0, 0.0),
            size
        ));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        t.advance(0.5);
        t.advance(0.25);
        assert_eq!(t.frame, 2);
        assert!((t.elapsed_secs - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_world_query_defaults() {
        let q = SingleWaterTile;
        assert_eq!(q.grid_cell(&Position::new(40.0, 31.9)), (1, 0));
        assert_eq!(q.grid_cell(&Position::new(-1.0, 0.0)), (-1, 0));
        assert!(q.query_at(TileLayer::Water, &Position::new(33.0, 1.0)));
        assert!(!q.query_at(TileLayer::Water, &Position::new(1.0, 1.0)));
        assert!(!q.is_blocked_at(&Position::new(33.0, 1.0)));
    }

    #[test]
    fn test_cheat_codes() {
        assert_eq!(CHEAT_CODE_POWERUP.len(), 10);
        assert_eq!(CHEAT_CODE_POWERUP[8], Key::Char('b'));
        let word: String = CHEAT_CODE_NOCLIP
            .iter()
            .map(|k| match k {
                Key::Char(c) => *c,
                _ => '?',
            })
            .collect();
        assert_eq!(word, "mallard");
    }

    #[test]
    fn test_command_serde_tagged() {
        let cmd = PlayerCommand::KeyDown { key: Key::Char('m') };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"KeyDown\""));
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, PlayerCommand::KeyDown { key: Key::Char('m') }));
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut snap = GameStateSnapshot::default();
        snap.events.push(SimEvent::CheatActivated {
            cheat: CheatKind::Noclip,
        });
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.events, snap.events);
        assert_eq!(back.phase, RoundPhase::Active);
    }

    #[test]
    fn test_velocity_zero() {
        assert!(Velocity::ZERO.is_zero());
        assert!(!Velocity::new(0.0, -1.0).is_zero());
        assert_eq!(Velocity::new(3.0, 4.0).speed(), 5.0);
    }
}
