//! Machine-readable dumps for code generators and spreadsheets.

use std::io;

use serde::Serialize;

use crate::dimension::DerivedOperatorEdge;
use crate::error::Result;
use crate::unit::UnitRegistry;

/// Pretty JSON array of `{left, right, operator, result}` objects.
pub fn operators_to_json(edges: &[DerivedOperatorEdge]) -> Result<String> {
    Ok(serde_json::to_string_pretty(edges)?)
}

pub fn operators_from_json(json: &str) -> Result<Vec<DerivedOperatorEdge>> {
    Ok(serde_json::from_str(json)?)
}

#[derive(Serialize)]
struct UnitRow<'a> {
    symbol: &'a str,
    dimension: String,
    scale: f64,
    offset: f64,
    preferred: bool,
}

/// CSV with one row per registered unit, in registration order.
pub fn write_unit_table<W: io::Write>(registry: &UnitRegistry, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for unit in registry.iter() {
        csv.serialize(UnitRow {
            symbol: unit.symbol(),
            dimension: unit.dimension().to_string(),
            scale: unit.scalar(),
            offset: unit.offset(),
            preferred: registry.preferred_unit(unit.dimension()) == Some(unit),
        })?;
    }
    csv.flush()?;
    Ok(())
}
