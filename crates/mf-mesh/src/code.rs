//! Parsed form of a grid-cell identifier.

use std::fmt;
use std::str::FromStr;

use crate::adjacency::LEVELS;
use crate::{MeshError, MeshResult};

/// Level indices into [`MeshCode::y`] / [`MeshCode::x`], innermost first.
pub const QUADRANT: usize = 0;
pub const BLOCK_1KM: usize = 1;
pub const BLOCK_10KM: usize = 2;
pub const REGION: usize = 3;

/// A mesh code split into per-axis digit groups.
///
/// Both axes store their groups innermost first (`[quadrant, 1 km, 10 km,
/// region]`), the order in which carries propagate.  Codes without a quadrant
/// digit hold 0 in the quadrant slot and `has_quadrant == false`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct MeshCode {
    /// Latitude-axis digit groups.  North is positive.
    pub y:            [i32; LEVELS],
    /// Longitude-axis digit groups.  East is positive.
    pub x:            [i32; LEVELS],
    pub has_quadrant: bool,
}

impl MeshCode {
    /// Parse an 8- or 9-digit identifier.
    ///
    /// Rejects anything shorter than 8 or longer than 9 characters, non-digit
    /// characters, 10 km digits above 7 and quadrant digits outside `1..=4`.
    pub fn parse(code: &str) -> MeshResult<MeshCode> {
        let bad = |reason| MeshError::Unparsable { code: code.to_owned(), reason };

        if code.len() < 8 {
            return Err(bad("shorter than 8 digits"));
        }
        if code.len() > 9 {
            return Err(bad("longer than 9 digits"));
        }
        if !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad("non-digit character"));
        }

        let d: Vec<i32> = code.bytes().map(|b| (b - b'0') as i32).collect();
        let mut y = [0; LEVELS];
        let mut x = [0; LEVELS];

        y[REGION] = d[0] * 10 + d[1];
        x[REGION] = d[2] * 10 + d[3];
        y[BLOCK_10KM] = d[4];
        x[BLOCK_10KM] = d[5];
        y[BLOCK_1KM] = d[6];
        x[BLOCK_1KM] = d[7];

        if y[BLOCK_10KM] > 7 || x[BLOCK_10KM] > 7 {
            return Err(bad("10 km block digit above 7"));
        }

        let has_quadrant = d.len() == 9;
        if has_quadrant {
            let (qy, qx) = quadrant_pair(d[8]).ok_or_else(|| bad("quadrant digit outside 1..=4"))?;
            y[QUADRANT] = qy;
            x[QUADRANT] = qx;
        }

        Ok(MeshCode { y, x, has_quadrant })
    }

    /// Re-encode to the digit string.  The region pair is zero-padded to two
    /// digits; a region pushed past 99 or below 0 by a carry is written as is.
    pub fn to_code(&self) -> String {
        let mut s = format!(
            "{:02}{:02}{}{}{}{}",
            self.y[REGION],
            self.x[REGION],
            self.y[BLOCK_10KM],
            self.x[BLOCK_10KM],
            self.y[BLOCK_1KM],
            self.x[BLOCK_1KM],
        );
        if self.has_quadrant {
            s.push(char::from(b'0' + quadrant_digit(self.y[QUADRANT], self.x[QUADRANT])));
        }
        s
    }
}

/// Quadrant digit → `(y, x)`: 1 SW, 2 SE, 3 NW, 4 NE.
fn quadrant_pair(digit: i32) -> Option<(i32, i32)> {
    match digit {
        1..=4 => Some(((digit - 1) / 2, (digit - 1) % 2)),
        _ => None,
    }
}

/// `(y, x)` → quadrant digit: (0,0)→1, (0,1)→2, (1,0)→3, (1,1)→4.
pub(crate) fn quadrant_digit(y: i32, x: i32) -> u8 {
    debug_assert!((0..2).contains(&y) && (0..2).contains(&x));
    (1 + y * 2 + x) as u8
}

impl FromStr for MeshCode {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MeshCode::parse(s)
    }
}

impl fmt::Display for MeshCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code())
    }
}
