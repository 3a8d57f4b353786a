//! Unit tests for mf-core primitives.

#[cfg(test)]
mod ids {
    use crate::{LinkId, NodeId, ZoneId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::from_index(42), Some(id));
    }

    #[test]
    fn sentinel_is_not_a_valid_index() {
        assert!(!LinkId::INVALID.is_valid());
        assert!(ZoneId(0).is_valid());
        assert_eq!(ZoneId::from_index(u32::MAX as usize), None);
        assert_eq!(ZoneId::from_index(usize::MAX), None);
    }

    #[test]
    fn display() {
        assert_eq!(LinkId(7).to_string(), "l7");
        assert_eq!(ZoneId(3).to_string(), "z3");
        assert_eq!(NodeId::INVALID.to_string(), "n?");
    }
}

#[cfg(test)]
mod direction {
    use crate::Direction;

    #[test]
    fn ordinals_follow_all() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(d.ordinal(), i);
        }
    }

    #[test]
    fn opposite_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn opposite_deltas_cancel() {
        for d in Direction::ALL {
            let (dy, dx) = d.delta();
            let (oy, ox) = d.opposite().delta();
            assert_eq!((dy + oy, dx + ox), (0, 0));
        }
    }

    #[test]
    fn labels_parse_back() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_letter(d.as_str()), Some(d));
            assert_eq!(Direction::from_edge_label(d.edge_label()), Some(d));
        }
        assert_eq!(Direction::from_letter("N"), None);
        assert_eq!(Direction::from_letter("x"), None);
        assert_eq!(Direction::from_edge_label("middle"), None);
    }
}

#[cfg(test)]
mod config {
    use crate::{AssignmentConfig, BprParams, CoreError, LinkClass, LinkClasses, ModelConfig};

    #[test]
    fn defaults_are_valid() {
        let cfg = ModelConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.assignment.increments, vec![1.0]);
        assert_eq!(cfg.assignment.k_paths, 1);
        assert_eq!(cfg.period.key, "AM_PEAK");
    }

    #[test]
    fn free_time_in_minutes() {
        // 0.25 km at 30 km/h = 0.5 min
        let c = LinkClass::new(0.25, 500.0, 30.0);
        assert!((c.free_time_min() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn negative_capacity_rejected() {
        let mut links = LinkClasses::default();
        links.passing.capacity = -1.0;
        let err = links.validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig { field: "links.passing", .. }));
    }

    #[test]
    fn zero_speed_rejected() {
        let mut links = LinkClasses::default();
        links.connector.free_speed_kmh = 0.0;
        assert!(links.validate().is_err());
    }

    #[test]
    fn negative_beta_rejected() {
        let cfg = AssignmentConfig {
            bpr: BprParams { alpha: 0.15, beta: -1.0 },
            ..AssignmentConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(CoreError::InvalidConfig { field: "bpr.beta", .. })
        ));
    }

    #[test]
    fn zero_theta_and_k_rejected() {
        let cfg = AssignmentConfig { theta: 0.0, ..AssignmentConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = AssignmentConfig { k_paths: 0, ..AssignmentConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn increments_not_required_to_sum_to_one() {
        let cfg = AssignmentConfig { increments: vec![0.3, 0.3], ..AssignmentConfig::default() };
        assert!(cfg.validate().is_ok());
        assert!((cfg.total_fraction() - 0.6).abs() < 1e-12);

        let cfg = AssignmentConfig { increments: vec![0.5, -0.5], ..AssignmentConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn empty_increments_allowed() {
        let cfg = AssignmentConfig { increments: vec![], ..AssignmentConfig::default() };
        assert!(cfg.validate().is_ok());
    }
}
