//! Unit tests for ft-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CoverId, TargetId, TeamId};

    #[test]
    fn index_roundtrip() {
        let id = TargetId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(TargetId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(TargetId(0) < TargetId(1));
        assert!(TeamId(100) > TeamId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(TargetId::INVALID.0, u32::MAX);
        assert_eq!(TeamId::INVALID.0, u16::MAX);
        assert_eq!(CoverId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(TargetId(7).to_string(), "TargetId(7)");
    }
}

#[cfg(test)]
mod vec3 {
    use crate::Vec3;

    #[test]
    fn zero_distance() {
        let p = Vec3::new(3.5, -1.0, 12.25);
        assert_eq!(p.distance_sq(p), 0.0);
    }

    #[test]
    fn axis_aligned_distance() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 0.0, 4.0);
        assert_eq!(a.distance_sq(b), 25.0);
        assert_eq!(b.length(), 5.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 9.0);
        assert_eq!(a.distance_sq(b), b.distance_sq(a));
    }

    #[test]
    fn normalized_unit_length() {
        let v = Vec3::new(0.0, 3.0, 4.0).normalized().unwrap();
        assert!((v.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn normalized_zero_is_none() {
        assert!(Vec3::ZERO.normalized().is_none());
    }

    #[test]
    fn operators() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Vec3::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Vec3::new(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn exact_equality() {
        // Reservation release relies on exact component equality.
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(1.0, 2.0, 3.0);
        let c = Vec3::new(1.0 + f32::EPSILON, 2.0, 3.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5u64);
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig {
            total_ticks: 600,
            seed: 42,
            refresh_interval_ticks: 10,
            snapshot_interval_ticks: 0,
            engagement_radius: 30.0,
            sound_alert_ticks: 5,
        };
        assert_eq!(cfg.end_tick(), Tick(600));
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentRng, TargetId};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, TargetId(1));
        let mut r2 = AgentRng::new(12345, TargetId(1));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_targets_differ() {
        let mut r0 = AgentRng::new(1, TargetId(1));
        let mut r1 = AgentRng::new(1, TargetId(2));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent targets should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = AgentRng::new(0, TargetId(1));
        for _ in 0..1000 {
            let v = rng.gen_range(-5.0f32..5.0);
            assert!((-5.0..5.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = AgentRng::new(0, TargetId(1));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
