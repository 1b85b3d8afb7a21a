use std::fmt;

use super::Quantity;
use crate::unit::UnitRegistry;

/// Renders a quantity in its dimension's preferred unit, falling back to the
/// base scalar and dimension string. Honors `{:.N}` precision.
#[derive(Debug)]
pub struct DisplayQuantity<'a> {
    quantity: Quantity,
    registry: &'a UnitRegistry,
}

impl<'a> DisplayQuantity<'a> {
    pub fn new(quantity: Quantity, registry: &'a UnitRegistry) -> Self {
        Self { quantity, registry }
    }
}

impl fmt::Display for DisplayQuantity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dimension = self.quantity.dimension();
        let (value, symbol) = match self.registry.preferred_unit(dimension) {
            Some(unit) => match self.quantity.in_unit(unit) {
                Ok(value) => (value, unit.symbol().to_string()),
                Err(_) => return Err(fmt::Error),
            },
            None => (self.quantity.scalar(), format!("[{}]", dimension)),
        };
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {}", precision, value, symbol),
            None => write!(f, "{} {}", value, symbol),
        }
    }
}
