use std::collections::HashMap;

use super::{catalog, Unit};
use crate::dimension::{Dimension, NamedDimension};
use crate::error::{Result, UnitsError};

/// Known units grouped by dimension, plus an optional preferred unit per
/// dimension.
///
/// Units are only ever added. Populate the registry before sharing it;
/// lookups take `&self`.
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    units: HashMap<Dimension, Vec<Unit>>,
    /// Registration order across all dimensions, as (dimension, index).
    order: Vec<(Dimension, usize)>,
    preferred: HashMap<Dimension, Unit>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding [`catalog::all`], preferring the SI base units.
    pub fn with_standard_units() -> Self {
        let mut registry = Self::new();
        for unit in catalog::all() {
            registry.add(unit);
        }
        for unit in catalog::preferred() {
            registry.set_preferred_unit(unit);
        }
        registry
    }

    /// Adds `unit` unless an equal unit is already registered. Returns whether
    /// the unit was inserted.
    pub fn add(&mut self, unit: Unit) -> bool {
        let dimension = unit.dimension();
        let units = self.units.entry(dimension).or_default();
        if units.contains(&unit) {
            return false;
        }
        tracing::debug!("registered unit {}", unit);
        self.order.push((dimension, units.len()));
        units.push(unit);
        true
    }

    /// Units sharing exactly `dimension`, or `None` if none was ever added.
    pub fn units_for(&self, dimension: Dimension) -> Option<&[Unit]> {
        self.units.get(&dimension).map(Vec::as_slice)
    }

    pub fn units_of<D: NamedDimension>(&self) -> Option<&[Unit]> {
        self.units_for(D::DIMENSION)
    }

    pub fn preferred_unit(&self, dimension: Dimension) -> Option<&Unit> {
        self.preferred.get(&dimension)
    }

    pub fn preferred_unit_of<D: NamedDimension>(&self) -> Option<&Unit> {
        self.preferred_unit(D::DIMENSION)
    }

    /// Replaces any previous preference for the unit's dimension. The unit
    /// itself is not added to the registry.
    pub fn set_preferred_unit(&mut self, unit: Unit) {
        self.preferred.insert(unit.dimension(), unit);
    }

    /// First registered unit with this exact symbol.
    pub fn get_unit(&self, symbol: &str) -> Result<&Unit> {
        self.iter()
            .find(|unit| unit.symbol() == symbol)
            .ok_or_else(|| UnitsError::UnitNotFound(symbol.to_string()))
    }

    /// All units in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Unit> + '_ {
        self.order
            .iter()
            .map(|(dimension, index)| &self.units[dimension][*index])
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::named::{Length, Pressure, Velocity};
    use crate::unit::catalog::*;

    #[test]
    fn test_enumerate_units() {
        let registry = UnitRegistry::with_standard_units();
        let lengths = registry.units_of::<Length>().unwrap();
        assert!(lengths.contains(&METER));
        assert!(lengths.contains(&MILE));
        assert!(!lengths.contains(&SECOND));
        assert_eq!(registry.units_of::<Pressure>().unwrap(), &[PASCAL, PSI]);
    }

    #[test]
    fn test_missing_dimension_is_none() {
        let registry = UnitRegistry::with_standard_units();
        assert!(registry.units_of::<Velocity>().is_none());
        assert!(registry.units_for(Dimension::CURRENT).is_none());
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut registry = UnitRegistry::new();
        assert!(registry.add(FOOT));
        assert!(!registry.add(FOOT));
        assert!(!registry.add(INCH.scaled("ft", 12.0).unwrap()));
        assert_eq!(registry.units_for(Dimension::LENGTH).unwrap().len(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_preferred_unit_last_wins() {
        let mut registry = UnitRegistry::new();
        assert!(registry.preferred_unit_of::<Length>().is_none());
        registry.set_preferred_unit(METER);
        registry.set_preferred_unit(FOOT);
        assert_eq!(registry.preferred_unit_of::<Length>(), Some(&FOOT));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_get_unit_by_symbol() {
        let mut registry = UnitRegistry::with_standard_units();
        assert_eq!(registry.get_unit("psi").unwrap(), &PSI);

        registry.add(SECOND.scaled("ft", 7.0).unwrap());
        assert_eq!(registry.get_unit("ft").unwrap(), &FOOT);

        let err = registry.get_unit("furlong").unwrap_err();
        assert!(matches!(err, UnitsError::UnitNotFound(ref s) if s == "furlong"));
    }

    #[test]
    fn test_iter_in_registration_order() {
        let mut registry = UnitRegistry::new();
        registry.add(SECOND);
        registry.add(METER);
        registry.add(HOUR);
        registry.add(FOOT);
        let symbols: Vec<_> = registry.iter().map(Unit::symbol).collect();
        assert_eq!(symbols, ["s", "m", "h", "ft"]);
    }
}
