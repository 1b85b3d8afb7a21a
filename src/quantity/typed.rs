use std::cmp::Ordering;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::Quantity;
use crate::dimension::named::*;
use crate::dimension::{Dimension, NamedDimension};
use crate::error::{Result, UnitsError};
use crate::unit::Unit;

/// A quantity whose dimension is the type parameter `D`.
///
/// Addition, subtraction and ordering only exist between equal tags.
/// Products and quotients of different tags exist where the standard
/// catalogue names the result, e.g. `TypedQuantity<Length> / TypedQuantity<Time>`
/// is a `TypedQuantity<Velocity>`.
///
/// ```rust
/// use dimensional::named::{Area, Length, Time, Velocity, Volume};
/// use dimensional::TypedQuantity;
///
/// let v: TypedQuantity<Velocity> = TypedQuantity::<Length>::new(6.0) / TypedQuantity::<Time>::new(2.0);
/// assert_eq!(v.scalar(), 3.0);
///
/// let total = TypedQuantity::<Length>::new(1.0) + TypedQuantity::<Length>::new(2.0);
/// assert_eq!(total.scalar(), 3.0);
///
/// let _: TypedQuantity<Volume> = TypedQuantity::<Area>::new(2.0) * TypedQuantity::<Length>::new(3.0);
/// ```
///
/// `Time / Length` names no dimension, so it has no operator:
///
/// ```compile_fail
/// # use dimensional::named::{Length, Time};
/// # use dimensional::TypedQuantity;
/// let _ = TypedQuantity::<Time>::new(1.0) / TypedQuantity::<Length>::new(1.0);
/// ```
///
/// `Area * Length` is `Volume`, which shadows the quotient, so there is no
/// `Area / Length` either:
///
/// ```compile_fail
/// # use dimensional::named::{Area, Length};
/// # use dimensional::TypedQuantity;
/// let _ = TypedQuantity::<Area>::new(1.0) / TypedQuantity::<Length>::new(1.0);
/// ```
///
/// Different tags never add or subtract:
///
/// ```compile_fail
/// # use dimensional::named::{Length, Time};
/// # use dimensional::TypedQuantity;
/// let _ = TypedQuantity::<Length>::new(1.0) + TypedQuantity::<Time>::new(1.0);
/// ```
///
/// ```compile_fail
/// # use dimensional::named::{Length, Time};
/// # use dimensional::TypedQuantity;
/// let _ = TypedQuantity::<Length>::new(1.0) - TypedQuantity::<Time>::new(1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TypedQuantity<D: NamedDimension> {
    scalar: f64,
    dimension: PhantomData<D>,
}

impl<D: NamedDimension> TypedQuantity<D> {
    /// A quantity of `scalar` SI base units.
    pub const fn new(scalar: f64) -> Self {
        Self {
            scalar,
            dimension: PhantomData,
        }
    }

    /// `count` of `unit`; fails if the unit measures another dimension.
    pub fn from_unit(count: f64, unit: &Unit) -> Result<Self> {
        UnitsError::check_dimension(D::DIMENSION, unit.dimension())?;
        Ok(Self::new(count * unit.scalar() + unit.offset()))
    }

    pub fn scalar(&self) -> f64 {
        self.scalar
    }

    pub fn dimension(&self) -> Dimension {
        D::DIMENSION
    }

    pub fn name(&self) -> &'static str {
        D::NAME
    }

    pub fn in_unit(&self, unit: &Unit) -> Result<f64> {
        self.into_quantity().in_unit(unit)
    }

    pub fn into_quantity(self) -> Quantity {
        Quantity::new(self.scalar, D::DIMENSION)
    }
}

impl<D: NamedDimension> From<TypedQuantity<D>> for Quantity {
    fn from(q: TypedQuantity<D>) -> Quantity {
        q.into_quantity()
    }
}

impl<D: NamedDimension> TryFrom<Quantity> for TypedQuantity<D> {
    type Error = UnitsError;

    fn try_from(q: Quantity) -> Result<Self> {
        q.assert_named::<D>()
    }
}

/// Compares base-unit scalars, so affine units compare on the absolute scale.
impl<D: NamedDimension> PartialOrd for TypedQuantity<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.scalar.partial_cmp(&other.scalar)
    }
}

impl<D: NamedDimension> Add for TypedQuantity<D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.scalar + rhs.scalar)
    }
}

impl<D: NamedDimension> Sub for TypedQuantity<D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.scalar - rhs.scalar)
    }
}

impl<D: NamedDimension> Neg for TypedQuantity<D> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.scalar)
    }
}

impl<D: NamedDimension> Mul<f64> for TypedQuantity<D> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.scalar * rhs)
    }
}

impl<D: NamedDimension> Mul<TypedQuantity<D>> for f64 {
    type Output = TypedQuantity<D>;

    fn mul(self, rhs: TypedQuantity<D>) -> TypedQuantity<D> {
        rhs * self
    }
}

impl<D: NamedDimension> Div<f64> for TypedQuantity<D> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.scalar / rhs)
    }
}

macro_rules! derived_operator {
    ($lhs:ident * $rhs:ident => $out:ident) => {
        impl Mul<TypedQuantity<$rhs>> for TypedQuantity<$lhs> {
            type Output = TypedQuantity<$out>;

            fn mul(self, rhs: TypedQuantity<$rhs>) -> TypedQuantity<$out> {
                TypedQuantity::new(self.scalar * rhs.scalar)
            }
        }
    };
    ($lhs:ident / $rhs:ident => $out:ident) => {
        impl Div<TypedQuantity<$rhs>> for TypedQuantity<$lhs> {
            type Output = TypedQuantity<$out>;

            fn div(self, rhs: TypedQuantity<$rhs>) -> TypedQuantity<$out> {
                TypedQuantity::new(self.scalar / rhs.scalar)
            }
        }
    };
}

include!(concat!(env!("OUT_DIR"), "/derived_operators.rs"));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::catalog::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_construct() {
        let typed = TypedQuantity::<Length>::new(4.0);
        assert_eq!(typed.dimension(), Length::DIMENSION);
        assert_eq!(typed.name(), "Length");
        assert_eq!(Quantity::from(typed), Quantity::new(4.0, Dimension::LENGTH));
    }

    #[test]
    fn test_construct_incompatible() {
        let err = TypedQuantity::<Length>::from_unit(10.0, &HOUR).unwrap_err();
        assert!(matches!(err, UnitsError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_add_and_subtract() {
        let q1 = TypedQuantity::<Length>::new(1.0);
        let q2 = TypedQuantity::<Length>::new(2.0);
        assert_eq!(q1 + q2, TypedQuantity::new(3.0));
        assert_eq!(q1 - q2, TypedQuantity::new(-1.0));
        assert_eq!(-q1, TypedQuantity::new(-1.0));
        assert_eq!(2.0 * q2, q2 * 2.0);
        assert_eq!(q2 / 2.0, q1);
    }

    #[test]
    fn test_multiply_same_tag() {
        let q1 = TypedQuantity::<Length>::new(2.0);
        let q2 = TypedQuantity::<Length>::new(3.0);
        let area: TypedQuantity<Area> = q1 * q2;
        assert_eq!(area, TypedQuantity::new(6.0));
    }

    #[test]
    fn test_generated_operators() {
        let d = TypedQuantity::<Length>::from_unit(1.0, &MILE).unwrap();
        let t = TypedQuantity::<Time>::from_unit(1.0, &MINUTE).unwrap();
        let s: TypedQuantity<Speed> = d / t;
        let mph = MILE.divide(&HOUR).unwrap();
        assert_relative_eq!(s.in_unit(&mph).unwrap(), 60.0, epsilon = 1e-10);

        let m = TypedQuantity::<Mass>::from_unit(2.0, &KILOGRAM).unwrap();
        let a = TypedQuantity::<Acceleration>::new(9.0);
        let f: TypedQuantity<Force> = m * a;
        let e: TypedQuantity<Energy> = f * TypedQuantity::<Length>::new(0.5);
        let p: TypedQuantity<Power> = e / TypedQuantity::<Time>::new(3.0);
        assert_relative_eq!(p.in_unit(&WATT).unwrap(), 3.0);
    }

    #[test]
    fn test_specific_gas_constant_typed() {
        let r = TypedQuantity::<MolarEntropy>::new(8.31451e-3);
        let m = TypedQuantity::<MolarMass>::new(18.015257e-3);
        let specific: TypedQuantity<SpecificEntropy> = r / m;
        assert_relative_eq!(specific.scalar(), 0.461526, epsilon = 1e-6);
    }

    #[test]
    fn test_ordering_uses_base_scale() {
        let freezing = TypedQuantity::<Temperature>::from_unit(0.0, &CELSIUS).unwrap();
        let cold = TypedQuantity::<Temperature>::from_unit(20.0, &FAHRENHEIT).unwrap();
        let boiling = TypedQuantity::<Temperature>::from_unit(373.15, &KELVIN).unwrap();
        assert!(cold < freezing);
        assert!(freezing <= TypedQuantity::new(273.15));
        assert!(boiling > freezing);
        assert!(boiling >= cold);
    }

    #[test]
    fn test_try_from_untyped() {
        let q = Quantity::from_unit(5.0, &NEWTON);
        let f: TypedQuantity<Force> = q.try_into().unwrap();
        assert_eq!(f.scalar(), 5.0);
        assert!(TypedQuantity::<Pressure>::try_from(q).is_err());
    }
}
