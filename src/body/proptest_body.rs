//! Property-based tests for orbit kinematics using proptest.
//!
//! These tests verify the integration invariants across a wide range of
//! orbital parameters and time steps.

use proptest::prelude::*;

use crate::body::OrbitingBody;
use crate::test_utils::assertions;
use crate::types::SPIN_INCREMENT;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Two steps of t1 and t2 land on the same phase as one step of t1 + t2.
    #[test]
    fn prop_update_is_additive(
        orbit_radius in 1.0f64..1000.0,
        orbit_speed in -5.0f64..5.0,
        t1 in 0.0f64..100.0,
        t2 in 0.0f64..100.0,
    ) {
        let mut split = OrbitingBody::new(1.0, orbit_radius, orbit_speed).unwrap();
        split.update(t1).unwrap();
        split.update(t2).unwrap();

        let mut single = OrbitingBody::new(1.0, orbit_radius, orbit_speed).unwrap();
        single.update(t1 + t2).unwrap();

        let diff = assertions::angle_difference(split.orbit_angle(), single.orbit_angle()).abs();
        prop_assert!(diff < 1e-9, "phase drift {:.3e} (t1={}, t2={})", diff, t1, t2);

        let gap = (split.position() - single.position()).length();
        prop_assert!(gap < 1e-6 * orbit_radius, "position drift {:.3e}", gap);
    }

    /// The body always sits on its orbit circle in the y=0 plane.
    #[test]
    fn prop_position_stays_on_orbit(
        orbit_radius in 1.0f64..1000.0,
        orbit_speed in -5.0f64..5.0,
        steps in proptest::collection::vec(0.0f64..10.0, 1..50),
    ) {
        let mut body = OrbitingBody::new(1.0, orbit_radius, orbit_speed).unwrap();
        for dt in steps {
            body.update(dt).unwrap();
        }

        let radius_error = (body.position().length() - orbit_radius).abs();
        prop_assert!(radius_error < 1e-9 * orbit_radius);
        prop_assert!((0.0..std::f64::consts::TAU).contains(&body.orbit_angle()));
        prop_assert_eq!(body.translation().y, 0.0);
    }

    /// n activations add exactly n increments and leave the orbit alone.
    #[test]
    fn prop_activation_accumulates(n in 0usize..500) {
        let mut body = OrbitingBody::new(8.0, 90.0, 0.5).unwrap();
        body.update(1.0).unwrap();
        let angle = body.orbit_angle();

        for _ in 0..n {
            body.activate();
        }

        let expected = n as f64 * SPIN_INCREMENT;
        prop_assert!((body.spin() - expected).abs() <= 1e-12 * expected.max(1.0));
        prop_assert_eq!(body.orbit_angle(), angle);
    }

    /// Invalid elapsed values are always rejected without side effects.
    #[test]
    fn prop_negative_elapsed_rejected(elapsed in -1e6f64..-1e-12) {
        let mut body = OrbitingBody::new(8.0, 90.0, 0.5).unwrap();
        let before = body.clone();
        prop_assert!(body.update(elapsed).is_err());
        prop_assert_eq!(body, before);
    }
}
