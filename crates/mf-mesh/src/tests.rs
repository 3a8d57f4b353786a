//! Unit tests for mf-mesh.

#[cfg(test)]
mod parse {
    use crate::code::{BLOCK_10KM, BLOCK_1KM, QUADRANT, REGION};
    use crate::{MeshCode, MeshError};

    #[test]
    fn nine_digit_code() {
        let c = MeshCode::parse("513204611").unwrap();
        assert!(c.has_quadrant);
        assert_eq!(c.y[REGION], 51);
        assert_eq!(c.x[REGION], 32);
        assert_eq!(c.y[BLOCK_10KM], 0);
        assert_eq!(c.x[BLOCK_10KM], 4);
        assert_eq!(c.y[BLOCK_1KM], 6);
        assert_eq!(c.x[BLOCK_1KM], 1);
        assert_eq!((c.y[QUADRANT], c.x[QUADRANT]), (0, 0));
    }

    #[test]
    fn quadrant_digits_map_to_pairs() {
        let pairs = [("1", (0, 0)), ("2", (0, 1)), ("3", (1, 0)), ("4", (1, 1))];
        for (digit, expected) in pairs {
            let c = MeshCode::parse(&format!("51320461{digit}")).unwrap();
            assert_eq!((c.y[QUADRANT], c.x[QUADRANT]), expected, "digit {digit}");
        }
    }

    #[test]
    fn eight_digit_code_has_no_quadrant() {
        let c = MeshCode::parse("51320461").unwrap();
        assert!(!c.has_quadrant);
        assert_eq!(c.to_code(), "51320461");
    }

    #[test]
    fn short_code_unparsable() {
        assert!(matches!(
            MeshCode::parse("5132046"),
            Err(MeshError::Unparsable { .. })
        ));
        assert!(MeshCode::parse("").is_err());
    }

    #[test]
    fn malformed_codes_unparsable() {
        assert!(MeshCode::parse("51320461x").is_err());
        assert!(MeshCode::parse("5132046111").is_err()); // 10 digits
        assert!(MeshCode::parse("513284611").is_err()); // 10 km digit 8
        assert!(MeshCode::parse("513204615").is_err()); // quadrant 5
        assert!(MeshCode::parse("513204610").is_err()); // quadrant 0
    }

    #[test]
    fn to_code_roundtrip() {
        for code in ["513204611", "513204614", "503270913", "00000001"] {
            assert_eq!(MeshCode::parse(code).unwrap().to_code(), code);
        }
    }

    #[test]
    fn from_str_and_display() {
        let c: MeshCode = "513204612".parse().unwrap();
        assert_eq!(c.to_string(), "513204612");
    }
}

#[cfg(test)]
mod carry {
    use crate::{LEVEL_MODULI, carry_axis};

    #[test]
    fn moduli_table() {
        assert_eq!(LEVEL_MODULI, [Some(2), Some(10), Some(8), None]);
    }

    #[test]
    fn no_carry_inside_quadrant() {
        let mut d = [0, 5, 3, 51];
        carry_axis(&mut d, 1);
        assert_eq!(d, [1, 5, 3, 51]);
    }

    #[test]
    fn carry_into_1km_level() {
        let mut d = [1, 5, 3, 51];
        carry_axis(&mut d, 1);
        assert_eq!(d, [0, 6, 3, 51]);
    }

    #[test]
    fn borrow_from_1km_level() {
        let mut d = [0, 5, 3, 51];
        carry_axis(&mut d, -1);
        assert_eq!(d, [1, 4, 3, 51]);
    }

    #[test]
    fn carry_through_every_bounded_level() {
        let mut d = [1, 9, 7, 51];
        carry_axis(&mut d, 1);
        assert_eq!(d, [0, 0, 0, 52]);
    }

    #[test]
    fn borrow_through_every_bounded_level() {
        let mut d = [0, 0, 0, 51];
        carry_axis(&mut d, -1);
        assert_eq!(d, [1, 9, 7, 50]);
    }

    #[test]
    fn region_level_is_unbounded() {
        let mut d = [1, 9, 7, 99];
        carry_axis(&mut d, 1);
        assert_eq!(d, [0, 0, 0, 100]);

        let mut d = [0, 0, 0, 0];
        carry_axis(&mut d, -1);
        assert_eq!(d, [1, 9, 7, -1]);
    }

    #[test]
    fn zero_delta_is_identity() {
        let mut d = [1, 9, 7, 51];
        carry_axis(&mut d, 0);
        assert_eq!(d, [1, 9, 7, 51]);
    }
}

#[cfg(test)]
mod neighbor {
    use mf_core::Direction;

    use crate::{MeshError, neighbor};

    #[test]
    fn north_within_cell() {
        assert_eq!(neighbor("513204611", Direction::North).unwrap(), "513204613");
        assert_eq!(neighbor("513204612", Direction::North).unwrap(), "513204614");
    }

    #[test]
    fn east_within_cell() {
        assert_eq!(neighbor("513204611", Direction::East).unwrap(), "513204612");
        assert_eq!(neighbor("513204613", Direction::East).unwrap(), "513204614");
    }

    #[test]
    fn south_crosses_into_lower_1km_block() {
        assert_eq!(neighbor("513204611", Direction::South).unwrap(), "513204513");
    }

    #[test]
    fn west_crosses_into_left_1km_block() {
        assert_eq!(neighbor("513204611", Direction::West).unwrap(), "513204602");
    }

    #[test]
    fn south_carries_to_region() {
        assert_eq!(neighbor("513200011", Direction::South).unwrap(), "503270913");
        assert_eq!(neighbor("503270913", Direction::North).unwrap(), "513200011");
    }

    #[test]
    fn east_carries_to_region() {
        assert_eq!(neighbor("513207092", Direction::East).unwrap(), "513300001");
        assert_eq!(neighbor("513300001", Direction::West).unwrap(), "513207092");
    }

    #[test]
    fn round_trips() {
        let codes = [
            "513204611", "513204612", "513204613", "513204614",
            "513200011", "513207092", "513277994", "533945271",
        ];
        for code in codes {
            for d in Direction::ALL {
                let there = neighbor(code, d).unwrap();
                let back = neighbor(&there, d.opposite()).unwrap();
                assert_eq!(back, code, "{code} -> {d} -> back");
            }
        }
    }

    #[test]
    fn eight_digit_unsupported() {
        assert!(matches!(
            neighbor("51320461", Direction::North),
            Err(MeshError::Unsupported(_))
        ));
    }

    #[test]
    fn short_code_unparsable() {
        assert!(matches!(
            neighbor("5132", Direction::North),
            Err(MeshError::Unparsable { .. })
        ));
    }
}
