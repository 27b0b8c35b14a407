#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::commands::{PodAction, PodCommand};
    use crate::constants::*;
    use crate::error::RaceError;
    use crate::geometry::{normalize_angle_degrees, normalize_degrees_i32, Vector};
    use crate::state::{Pod, RaceState};
    use crate::track::Track;
    use crate::types::{Point, RaceSetup};

    const EPS: f64 = 1e-8;

    fn assert_close(what: &str, expected: f64, actual: f64) {
        assert!(
            (expected - actual).abs() <= EPS,
            "{what}: expected {expected}, got {actual}"
        );
    }

    /// Smallest signed difference between two angles in degrees.
    fn angle_gap(a: f64, b: f64) -> f64 {
        normalize_angle_degrees(a - b).abs()
    }

    // ---- Geometry ----

    #[test]
    fn test_polar_known_values() {
        let s2 = 2.0_f64.sqrt();
        let cases = [
            (1.0, 0.0, 1.0, 0.0),
            (1.0, 90.0, 0.0, 1.0),
            (1.0, 180.0, -1.0, 0.0),
            (1.0, -90.0, 0.0, -1.0),
            (2.0, 45.0, s2, s2),
            (2.0, -45.0, s2, -s2),
            (2.0, 135.0, -s2, s2),
            (2.0, -135.0, -s2, -s2),
        ];
        for (length, angle, x, y) in cases {
            let v = Vector::from_polar(length, angle);
            assert_close("x", x, v.x());
            assert_close("y", y, v.y());
        }
    }

    #[test]
    fn test_polar_zero_length_has_no_direction() {
        let v = Vector::from_polar(0.0, 37.0);
        assert_eq!(v.length(), 0.0);
        assert_eq!(v.x(), 0.0);
        assert!(v.angle_degrees().is_nan());
        assert!(!v.has_direction());
    }

    #[test]
    fn test_polar_normalizes_angle() {
        let v = Vector::from_polar(10.0, 270.0);
        assert_close("angle", -90.0, v.angle_degrees());
        assert_close("y", -10.0, v.y());

        let w = Vector::from_polar(10.0, -180.0);
        assert_close("angle", 180.0, w.angle_degrees());
    }

    #[test]
    fn test_cartesian_known_angles() {
        let cases = [
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 90.0),
            (-1.0, 0.0, 180.0),
            (0.0, -1.0, -90.0),
            (1.0, 1.0, 45.0),
            (1.0, -1.0, -45.0),
            (-1.0, 1.0, 135.0),
            (-1.0, -1.0, -135.0),
        ];
        for (x, y, angle) in cases {
            let v = Vector::from_cartesian(x, y);
            assert_close("angle", angle, v.angle_degrees());
            assert_close("radians", angle.to_radians(), v.angle_radians());
        }
        assert_eq!(Vector::from_cartesian(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn test_negative_zero_component_keeps_half_plane() {
        let v = Vector::from_cartesian(-0.0, 5.0);
        assert_close("angle", 90.0, v.angle_degrees());
        let w = Vector::from_cartesian(-0.0, -5.0);
        assert_close("angle", -90.0, w.angle_degrees());
    }

    #[test]
    fn test_zero_vectors_have_undefined_angle() {
        let a = Vector::from_cartesian(12.0, -7.5);
        for v in [Vector::from_cartesian(0.0, 0.0), a.scale(0.0), a.subtract(&a), Vector::zero()] {
            assert_eq!(v.length(), 0.0);
            assert!(v.angle_degrees().is_nan());
            assert!(v.angle_radians().is_nan());
        }
        // Scaling the zero vector stays zero instead of spreading NaN into x/y.
        let z = Vector::zero().scale(5.0);
        assert_eq!(z.to_ints(), (0, 0));
        assert!(!z.has_direction());
    }

    #[test]
    fn test_cartesian_polar_round_trip_sampled() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let x: f64 = rng.gen_range(-20_000.0..20_000.0);
            let y: f64 = rng.gen_range(-20_000.0..20_000.0);
            let v = Vector::from_cartesian(x, y);
            let back = Vector::from_polar(v.length(), v.angle_degrees());
            assert_close("x", x, back.x());
            assert_close("y", y, back.y());
        }
    }

    #[test]
    fn test_negation_rotates_half_turn_sampled() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            let v = Vector::from_cartesian(
                rng.gen_range(-5_000.0..5_000.0),
                rng.gen_range(-5_000.0..5_000.0),
            );
            let flipped = v.scale(-1.0);
            let angle = flipped.angle_degrees();
            assert!(angle > -180.0 && angle <= 180.0, "angle {angle} out of range");
            let expected = normalize_angle_degrees(v.angle_degrees() + 180.0);
            assert!(angle_gap(expected, angle) < 1e-9, "expected {expected}, got {angle}");
        }
    }

    #[test]
    fn test_add_subtract_inverse_sampled() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..500 {
            let a = Vector::from_cartesian(rng.gen_range(-1e4..1e4), rng.gen_range(-1e4..1e4));
            let b = Vector::from_cartesian(rng.gen_range(-1e4..1e4), rng.gen_range(-1e4..1e4));
            let back = a.add(&b).subtract(&b);
            assert_close("x", a.x(), back.x());
            assert_close("y", a.y(), back.y());
        }
    }

    #[test]
    fn test_normalize_ranges() {
        assert_eq!(normalize_angle_degrees(190.0), -170.0);
        assert_eq!(normalize_angle_degrees(-190.0), 170.0);
        assert_eq!(normalize_angle_degrees(-180.0), 180.0);
        assert_eq!(normalize_angle_degrees(180.0), 180.0);
        assert_eq!(normalize_degrees_i32(359), -1);
        assert_eq!(normalize_degrees_i32(-181), 179);
        assert_eq!(normalize_degrees_i32(-180), 180);
    }

    #[test]
    fn test_heading_error_truncates_before_subtracting() {
        // atan2(1, 1.0001) is just under 45 degrees: truncates to 44.
        let v = Vector::from_cartesian(1.0001, 1.0);
        assert_eq!(v.heading_error(0), Some(44));
        assert_eq!(v.heading_error(350), Some(54));
        assert_eq!(Vector::zero().heading_error(0), None);
    }

    #[test]
    fn test_bearing_from_requires_both_directions() {
        let east = Vector::from_cartesian(1.0, 0.0);
        let north = Vector::from_cartesian(0.0, 1.0);
        assert_eq!(north.bearing_from(&east), Some(90));
        assert_eq!(east.bearing_from(&north), Some(-90));
        assert_eq!(east.bearing_from(&Vector::zero()), None);
    }

    // ---- Track ----

    fn square_track() -> Vec<Point> {
        vec![
            Point::new(0, 0),
            Point::new(10_000, 0),
            Point::new(10_000, 5_000),
            Point::new(0, 5_000),
        ]
    }

    #[test]
    fn test_track_next_aimpoint_wraps() {
        let centers = square_track();
        let track = Track::build(&centers).unwrap();
        assert_eq!(track.len(), 4);
        for (i, cp) in track.checkpoints().iter().enumerate() {
            assert_eq!(cp.center, centers[i]);
            assert_eq!(cp.next_aimpoint, centers[(i + 1) % centers.len()]);
        }
    }

    #[test]
    fn test_track_long_range_aimpoint() {
        let track = Track::build(&square_track()).unwrap();
        // Checkpoint 1 (10000,0) is followed by (10000,5000): overshoot goes -y.
        assert_eq!(track.checkpoints()[1].long_range_aimpoint, Point::new(10_000, -1_666));
        // Checkpoint 3 (0,5000) wraps to (0,0): overshoot goes +y.
        assert_eq!(track.checkpoints()[3].long_range_aimpoint, Point::new(0, 6_666));
    }

    #[test]
    fn test_track_build_is_idempotent() {
        let centers = square_track();
        assert_eq!(Track::build(&centers).unwrap(), Track::build(&centers).unwrap());
    }

    #[test]
    fn test_degenerate_tracks() {
        let one = Track::build(&[Point::new(500, 500)]).unwrap();
        assert_eq!(one.checkpoints()[0].next_aimpoint, Point::new(500, 500));
        assert_eq!(one.checkpoints()[0].long_range_aimpoint, Point::new(500, 500));

        let two = Track::build(&[Point::new(0, 0), Point::new(3_000, 0)]).unwrap();
        assert_eq!(two.checkpoints()[0].next_aimpoint, Point::new(3_000, 0));
        assert_eq!(two.checkpoints()[1].next_aimpoint, Point::new(0, 0));
        assert_eq!(two.checkpoints()[1].long_range_aimpoint, Point::new(4_000, 0));

        assert_eq!(Track::build(&[]), Err(RaceError::EmptyTrack));
    }

    #[test]
    fn test_track_rejects_out_of_range_ids() {
        let track = Track::build(&square_track()).unwrap();
        assert_eq!(track.validate_id(3), Ok(3));
        assert_eq!(
            track.validate_id(4),
            Err(RaceError::CheckpointOutOfRange { id: 4, count: 4 })
        );
        assert!(track.validate_id(-1).is_err());
        assert!(track.checkpoint(9).is_err());
    }

    // ---- State ----

    #[test]
    fn test_initial_pod_and_race_state() {
        let pod = Pod::default();
        assert_eq!(pod.lap, FIRST_LAP);
        assert_eq!(pod.next_checkpoint_id, 0);
        assert!(!pod.in_opening_stretch());

        let state = RaceState::new(3, 4);
        assert!(state.is_first_tick);
        assert!(!state.boost_used);
        assert_eq!(state.own[1], Pod::default());
    }

    // ---- Commands ----

    #[test]
    fn test_command_precedence_and_format() {
        let pos = Point::new(100, 200);
        let target = Vector::from_cartesian(1_000.9, -50.7);

        let boost = PodCommand::encode(pos, &target, 100, true, true).unwrap();
        assert_eq!(boost.action, PodAction::Boost);
        assert_eq!(boost.to_string(), "1100 150 BOOST");

        let shield = PodCommand::encode(pos, &target, 100, true, false).unwrap();
        assert_eq!(shield.to_string(), "1100 150 SHIELD");

        let thrust = PodCommand::encode(pos, &target, 73, false, false).unwrap();
        assert_eq!(thrust.to_string(), "1100 150 73");
        assert!(!thrust.is_boost());
    }

    #[test]
    fn test_command_clamps_thrust() {
        let pos = Point::new(0, 0);
        let target = Vector::from_cartesian(10.0, 10.0);
        assert_eq!(
            PodCommand::encode(pos, &target, 250, false, false).unwrap().action,
            PodAction::Thrust { power: 100 }
        );
        assert_eq!(
            PodCommand::encode(pos, &target, -4, false, false).unwrap().action,
            PodAction::Thrust { power: 0 }
        );
    }

    #[test]
    fn test_command_target_truncates_toward_zero() {
        let target = Vector::from_cartesian(-0.9, 2.9);
        let cmd = PodCommand::encode(Point::new(0, 0), &target, 50, false, false).unwrap();
        assert_eq!(cmd.target, Point::new(0, 2));
    }

    #[test]
    fn test_command_rejects_aimpoint_outside_board_range() {
        let pos = Point::new(i32::MAX - 10, 0);
        let err = PodCommand::encode(pos, &Vector::from_cartesian(100.0, 0.0), 50, false, false)
            .unwrap_err();
        assert_eq!(
            err,
            RaceError::CoordinateOverflow {
                x: i64::from(i32::MAX) + 90,
                y: 0,
            }
        );

        let edge = PodCommand::encode(pos, &Vector::from_cartesian(10.0, -3.0), 50, false, false)
            .unwrap();
        assert_eq!(edge.target, Point::new(i32::MAX, -3));
    }

    #[test]
    fn test_track_rejects_aimpoint_outside_board_range() {
        let err = Track::build(&[Point::new(i32::MAX, 0), Point::new(0, 0)]).unwrap_err();
        assert!(matches!(err, RaceError::CoordinateOverflow { y: 0, .. }));
    }

    #[test]
    fn test_vector_between_extreme_points_does_not_overflow() {
        let v = Point::new(i32::MIN, 0).vector_to(&Point::new(i32::MAX, 0));
        assert_eq!(v.x(), f64::from(i32::MAX) - f64::from(i32::MIN));
        assert_close("angle", 0.0, v.angle_degrees());
    }

    #[test]
    fn test_heading_error_with_extreme_facing_does_not_overflow() {
        let v = Vector::from_cartesian(-1.0, -1.0);
        assert!(v.heading_error(i32::MAX).is_some());
    }

    #[test]
    fn test_command_serde() {
        let cmd = PodCommand::encode(Point::new(5, 6), &Vector::zero(), 40, false, false).unwrap();
        let json = serde_json::to_string(&cmd).unwrap();
        let back: PodCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);
    }

    #[test]
    fn test_race_setup_serde() {
        let setup = RaceSetup {
            laps: 3,
            checkpoints: square_track(),
        };
        let json = serde_json::to_string(&setup).unwrap();
        let back: RaceSetup = serde_json::from_str(&json).unwrap();
        assert_eq!(setup, back);
    }

    // ---- Golden constants ----

    #[test]
    fn test_golden_constants() {
        assert_eq!(FRICTION, 0.85);
        assert_eq!(ARRIVAL_HORIZON_TICKS, 9);
        assert_eq!(HIT_TOLERANCE, 500.0);
        assert_eq!(LONG_RANGE_DISTANCE, 5500.0);
        assert_eq!(ADVANCEMENT_LAP_WEIGHT, 1_000_000);
        assert_eq!(ADVANCEMENT_CHECKPOINT_WEIGHT, 100_000);
        assert_eq!(DEFENSE_COLLISION_RADIUS, 1200.0);
        assert_eq!(PARTNER_DEFLECTION, 30.0);
    }
}
