pub mod catalog;
mod prefix;
mod registry;

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::error::{Result, UnitsError};

pub use prefix::{prefixes, Prefix};
pub use registry::UnitRegistry;

/// A named affine scale for one dimension.
///
/// One of this unit is `scalar` base (SI) units, and the unit's zero sits at
/// `offset` base units: `base = count * scalar + offset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    symbol: Cow<'static, str>,
    dimension: Dimension,
    scalar: f64,
    offset: f64,
}

impl Unit {
    /// Linear unit (zero offset).
    pub const fn of(symbol: &'static str, dimension: Dimension, scalar: f64) -> Self {
        Self::affine(symbol, dimension, scalar, 0.0)
    }

    /// Unit whose zero is shifted from the base zero, e.g. degrees Celsius.
    pub const fn affine(
        symbol: &'static str,
        dimension: Dimension,
        scalar: f64,
        offset: f64,
    ) -> Self {
        Self {
            symbol: Cow::Borrowed(symbol),
            dimension,
            scalar,
            offset,
        }
    }

    pub fn new(
        symbol: impl Into<Cow<'static, str>>,
        dimension: Dimension,
        scalar: f64,
        offset: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            dimension,
            scalar,
            offset,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Base units per one of this unit.
    pub fn scalar(&self) -> f64 {
        self.scalar
    }

    /// Zero point of this unit, in base units.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_affine(&self) -> bool {
        self.offset != 0.0
    }

    /// Same unit under a different display symbol.
    pub fn with_symbol(&self, symbol: impl Into<Cow<'static, str>>) -> Self {
        Self {
            symbol: symbol.into(),
            ..self.clone()
        }
    }

    /// `self * other`. Squares render as `m²`, other products as `J*K`.
    pub fn multiply(&self, other: &Unit) -> Result<Unit> {
        self.ensure_linear()?;
        other.ensure_linear()?;
        let symbol = if self.symbol == other.symbol {
            format!("{}²", self.symbol)
        } else {
            format!("{}*{}", self.symbol, other.symbol)
        };
        Ok(Unit::new(
            symbol,
            self.dimension * other.dimension,
            self.scalar * other.scalar,
            0.0,
        ))
    }

    /// `self / other`, rendered as `km/h`.
    pub fn divide(&self, other: &Unit) -> Result<Unit> {
        self.ensure_linear()?;
        other.ensure_linear()?;
        Ok(Unit::new(
            format!("{}/{}", self.symbol, other.symbol),
            self.dimension / other.dimension,
            self.scalar / other.scalar,
            0.0,
        ))
    }

    /// A new unit worth `factor` of this one, e.g. a foot as 12 inches.
    pub fn scaled(&self, symbol: impl Into<Cow<'static, str>>, factor: f64) -> Result<Unit> {
        self.ensure_linear()?;
        Ok(Unit::new(symbol, self.dimension, self.scalar * factor, 0.0))
    }

    pub fn prefixed(&self, prefix: Prefix) -> Result<Unit> {
        prefix.apply(self)
    }

    fn ensure_linear(&self) -> Result<()> {
        if self.is_affine() {
            return Err(UnitsError::InvalidUnitCombination {
                symbol: self.symbol.to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::catalog::*;
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_symbols_include_operators() {
        assert_eq!(JOULE.multiply(&KELVIN).unwrap().symbol(), "J*K");
        assert_eq!(KILOMETER.divide(&HOUR).unwrap().symbol(), "km/h");
        assert_eq!(METER.multiply(&METER).unwrap().symbol(), "m²");
    }

    #[test]
    fn test_prefix_renders_without_space() {
        assert_eq!(KILOMETER.symbol(), "km");
        let km = METER.prefixed(prefixes::KILO).unwrap();
        assert_eq!(km.symbol(), "km");
        assert_eq!(km, KILOMETER);
    }

    #[test]
    fn test_combined_dimension_and_scalar() {
        let kmh = KILOMETER.divide(&HOUR).unwrap();
        assert_eq!(kmh.dimension(), Dimension::LENGTH / Dimension::TIME);
        assert_relative_eq!(kmh.scalar(), 1000.0 / 3600.0);

        let area = FOOT.multiply(&FOOT).unwrap();
        assert_eq!(area.dimension(), Dimension::LENGTH * Dimension::LENGTH);
        assert_relative_eq!(area.scalar(), 0.09290304, epsilon = 1e-12);
    }

    #[test]
    fn test_unit_over_itself_is_dimensionless_one() {
        for unit in [METER, FOOT, HOUR, POUND, PSI, JOULE] {
            let ratio = unit.divide(&unit).unwrap();
            assert_eq!(ratio.scalar(), 1.0);
            assert_eq!(ratio.dimension(), Dimension::DIMENSIONLESS);
        }
    }

    #[test]
    fn test_offset_units_cannot_combine() {
        let err = CELSIUS.multiply(&METER).unwrap_err();
        assert!(matches!(err, UnitsError::InvalidUnitCombination { .. }));
        assert!(err.to_string().contains("cannot combine an offset unit"));

        assert!(METER.divide(&FAHRENHEIT).is_err());
        assert!(CELSIUS.prefixed(prefixes::MILLI).is_err());
        assert!(CELSIUS.scaled("x", 2.0).is_err());
        // Kelvin has no offset.
        assert!(JOULE.divide(&KELVIN).is_ok());
    }

    #[test]
    fn test_with_symbol_keeps_scale() {
        let cubic_meter = METER.multiply(&METER).unwrap().multiply(&METER).unwrap();
        assert_eq!(cubic_meter.symbol(), "m²*m");
        let liter = cubic_meter.scaled("L", 1e-3).unwrap();
        let renamed = liter.with_symbol("l");
        assert_eq!(renamed.symbol(), "l");
        assert_eq!(renamed.scalar(), liter.scalar());
        assert_eq!(renamed.dimension(), liter.dimension());
        assert_ne!(renamed, liter);
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(FOOT, INCH.scaled("ft", 12.0).unwrap());
        assert_ne!(KELVIN, CELSIUS);
        assert_ne!(METER, METER.with_symbol("metre"));
    }

    #[test]
    fn test_display() {
        assert_eq!(METER.to_string(), "m (L^1)");
        assert_eq!(
            KILOMETER.divide(&HOUR).unwrap().to_string(),
            "km/h (L^1T^-1)"
        );
        assert_eq!(METER.divide(&METER).unwrap().to_string(), "m/m ()");
    }
}
