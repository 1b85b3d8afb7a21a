mod display;
mod typed;

use std::ops::{Div, Mul, Neg};

use serde::{Deserialize, Serialize};

use crate::dimension::{Dimension, NamedDimension};
use crate::error::{Result, UnitsError};
use crate::unit::Unit;

pub use display::DisplayQuantity;
pub use typed::TypedQuantity;

/// A scalar in SI base units together with its runtime dimension.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Quantity {
    scalar: f64,
    dimension: Dimension,
}

impl Quantity {
    /// Create a quantity from a scalar already in SI base units
    pub const fn new(scalar: f64, dimension: Dimension) -> Self {
        Self { scalar, dimension }
    }

    /// `count` of `unit`, stored as `count * scalar + offset` base units.
    pub fn from_unit(count: f64, unit: &Unit) -> Self {
        Self::new(count * unit.scalar() + unit.offset(), unit.dimension())
    }

    /// Value in SI base units
    pub fn scalar(&self) -> f64 {
        self.scalar
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Sum of two quantities of the same dimension
    pub fn try_add(self, rhs: Quantity) -> Result<Quantity> {
        UnitsError::check_dimension(self.dimension, rhs.dimension)?;
        Ok(Quantity::new(self.scalar + rhs.scalar, self.dimension))
    }

    /// Difference of two quantities of the same dimension
    pub fn try_sub(self, rhs: Quantity) -> Result<Quantity> {
        UnitsError::check_dimension(self.dimension, rhs.dimension)?;
        Ok(Quantity::new(self.scalar - rhs.scalar, self.dimension))
    }

    /// Number of `unit` this quantity amounts to. The only place the unit's
    /// offset is removed again.
    pub fn in_unit(&self, unit: &Unit) -> Result<f64> {
        UnitsError::check_dimension(unit.dimension(), self.dimension)?;
        Ok((self.scalar - unit.offset()) / unit.scalar())
    }

    /// Returns the quantity unchanged if it has dimension `expected`
    pub fn assert_dimension(self, expected: Dimension) -> Result<Quantity> {
        UnitsError::check_dimension(expected, self.dimension)?;
        Ok(self)
    }

    /// Narrows to the typed form, failing unless the dimension is `D`'s.
    pub fn assert_named<D: NamedDimension>(self) -> Result<TypedQuantity<D>> {
        UnitsError::check_dimension(D::DIMENSION, self.dimension)?;
        Ok(TypedQuantity::new(self.scalar))
    }

    /// Display adapter rendering in the registry's preferred unit
    pub fn display_with<'a>(&self, registry: &'a crate::unit::UnitRegistry) -> DisplayQuantity<'a> {
        DisplayQuantity::new(*self, registry)
    }
}

impl Mul for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        Quantity::new(self.scalar * rhs.scalar, self.dimension * rhs.dimension)
    }
}

impl Div for Quantity {
    type Output = Quantity;

    fn div(self, rhs: Quantity) -> Quantity {
        Quantity::new(self.scalar / rhs.scalar, self.dimension / rhs.dimension)
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity::new(self.scalar * rhs, self.dimension)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        rhs * self
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        Quantity::new(self.scalar / rhs, self.dimension)
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        Quantity::new(-self.scalar, self.dimension)
    }
}
