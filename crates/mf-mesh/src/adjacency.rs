//! Cardinal neighbor computation with multi-level carry.
//!
//! A move is a ±1 step on the quadrant digit of one axis.  The step then
//! ripples outward one digit group at a time: each bounded group wraps at its
//! modulus and hands a carry of ±1 to the next group; the region group has no
//! bound and absorbs whatever reaches it.
//!
//! ```text
//! level      quadrant   1 km   10 km   region
//! modulus        2       10      8     (none)
//! ```

use mf_core::Direction;

use crate::{MeshCode, MeshError, MeshResult};

/// Number of digit groups per axis.
pub const LEVELS: usize = 4;

/// Per-level modulus, innermost first.  `None` marks the unbounded region
/// level.
pub const LEVEL_MODULI: [Option<i32>; LEVELS] = [Some(2), Some(10), Some(8), None];

/// Add `delta` to the innermost group of one axis and propagate carries.
///
/// `digits` is ordered innermost first, matching [`LEVEL_MODULI`].
pub fn carry_axis(digits: &mut [i32; LEVELS], delta: i32) {
    let mut carry = delta;
    for (digit, modulus) in digits.iter_mut().zip(LEVEL_MODULI) {
        if carry == 0 {
            break;
        }
        let v = *digit + carry;
        match modulus {
            Some(m) => {
                *digit = v.rem_euclid(m);
                carry = v.div_euclid(m);
            }
            None => {
                *digit = v;
                carry = 0;
            }
        }
    }
}

impl MeshCode {
    /// The cell adjacent to `self` on side `direction`.
    ///
    /// Only quadrant-level (9-digit) codes are supported.
    pub fn neighbor(&self, direction: Direction) -> MeshResult<MeshCode> {
        if !self.has_quadrant {
            return Err(MeshError::Unsupported(self.to_code()));
        }
        let (dy, dx) = direction.delta();
        let mut next = *self;
        carry_axis(&mut next.y, dy);
        carry_axis(&mut next.x, dx);
        Ok(next)
    }
}

/// Identifier of the cell adjacent to `code` on side `direction`.
///
/// Fails with [`MeshError::Unparsable`] or [`MeshError::Unsupported`]; callers
/// building connectivity treat either as "no neighbor".
pub fn neighbor(code: &str, direction: Direction) -> MeshResult<String> {
    MeshCode::parse(code)?.neighbor(direction).map(|n| n.to_code())
}
