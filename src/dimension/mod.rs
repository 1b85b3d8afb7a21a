mod closure;
pub mod named;
mod registry;
mod vector;

pub use closure::{derive_operators, DerivedOperatorEdge, OperatorKind};
pub use named::NamedDimension;
pub use registry::{DimensionRegistry, NamedDimensionEntry, RegistryError};
pub use vector::Dimension;
