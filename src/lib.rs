//! Dimensional analysis with integer-exponent dimension vectors, affine
//! units, and typed quantities whose cross-dimension operators are derived
//! from a catalogue of named dimensions.

pub mod config;
pub mod dimension;
pub mod error;
pub mod export;
pub mod interop;
pub mod quantity;
pub mod unit;

pub use config::{Catalog, CatalogConfig};
pub use dimension::{
    derive_operators, named, DerivedOperatorEdge, Dimension, DimensionRegistry, NamedDimension,
    OperatorKind,
};
pub use error::{Result, UnitsError};
pub use interop::IntoUom;
pub use quantity::{DisplayQuantity, Quantity, TypedQuantity};
pub use unit::{catalog as units, prefixes, Prefix, Unit, UnitRegistry};
