//! Compile-time dimension tags.
//!
//! One zero-sized marker type per canonical name of the standard catalogue,
//! generated by `build.rs`. Names that share a vector with a canonical name
//! are type aliases of it, so `Speed` and `Velocity` are the same type.

use std::fmt::Debug;
use std::hash::Hash;

use super::Dimension;

/// A dimension fixed at the type level.
pub trait NamedDimension: Debug + Clone + Copy + PartialEq + Eq + Hash + Default + 'static {
    const NAME: &'static str;
    const DIMENSION: Dimension;
}

macro_rules! named_dimension {
    ($name:ident, $length:expr, $mass:expr, $time:expr, $current:expr, $amount:expr, $temperature:expr) => {
        #[doc = concat!("Marker for the `", stringify!($name), "` dimension.")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name;

        impl NamedDimension for $name {
            const NAME: &'static str = stringify!($name);
            const DIMENSION: Dimension =
                Dimension::new($length, $mass, $time, $current, $amount, $temperature);
        }
    };
}

include!(concat!(env!("OUT_DIR"), "/named_dimensions.rs"));
