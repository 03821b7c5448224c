//! Capability traits for caller-supplied vertex and weight types.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

/// Identifies a vertex. The graph relies on identity only.
///
/// `Ord` is used to break ties, which keeps every algorithm's output
/// reproducible. Implemented for every type with the required capabilities.
pub trait Vertex: Copy + Eq + Hash + Ord + Debug {}

impl<T> Vertex for T where T: Copy + Eq + Hash + Ord + Debug {}

/// Cost attached to a directed edge.
///
/// Additions are plain `+`; callers keep path totals inside the type's range.
pub trait Weight: Copy + Ord + Add<Output = Self> + Debug {
    /// Additive identity, the weight of an empty path.
    const ZERO: Self;

    /// Weight given to edges added without one.
    const ONE: Self;

    /// Shortest-path algorithms reject graphs holding negative weights.
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }
}

macro_rules! impl_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
            }
        )*
    };
}

impl_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
