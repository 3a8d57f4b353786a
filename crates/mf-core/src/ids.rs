//! Dense index types for network arenas.
//!
//! Every id is a `u32` position in one of the `FlowNetwork` column vectors
//! (`mf-network`).  The field is `pub` so builders can mint ids from loop
//! counters; readers go through `.index()`.

use std::fmt;

macro_rules! arena_id {
    ($(#[$attr:meta])* $name:ident, $tag:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            /// Placeholder for "not set" in per-node scratch arrays.
            pub const INVALID: $name = $name(u32::MAX);

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// `None` if `i` does not fit below the sentinel.
            #[inline]
            pub fn from_index(i: usize) -> Option<$name> {
                u32::try_from(i).ok().filter(|&n| n != u32::MAX).map($name)
            }

            #[inline]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, concat!($tag, "{}"), self.0)
                } else {
                    f.write_str(concat!($tag, "?"))
                }
            }
        }
    };
}

arena_id!(
    /// Index of a zone in a built network (sorted zone-code order).
    ZoneId, "z"
);

arena_id!(
    /// Index of a network node.  Zone `z` owns nodes `5z .. 5z + 5`.
    NodeId, "n"
);

arena_id!(
    /// Index of a directed link in CSR order.
    LinkId, "l"
);
