//! TOML description of a dimension and unit catalogue.
//!
//! ```toml
//! include_standard = true
//!
//! [[dimension]]
//! name = "Frequency"
//! time = -1
//!
//! [[dimension]]
//! name = "Jerk"
//! times = ["Acceleration"]
//! per = ["Time"]
//!
//! [[unit]]
//! symbol = "Hz"
//! dimension = "Frequency"
//! scale = 1.0
//! preferred = true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dimension::{derive_operators, DerivedOperatorEdge, Dimension, DimensionRegistry};
use crate::error::{Result, UnitsError};
use crate::unit::{Unit, UnitRegistry};

/// Catalogue configuration as read from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Start from the standard dimensions and units.
    #[serde(default = "default_include_standard")]
    pub include_standard: bool,

    #[serde(default, rename = "dimension")]
    pub dimensions: Vec<DimensionDecl>,

    #[serde(default, rename = "unit")]
    pub units: Vec<UnitDecl>,
}

fn default_include_standard() -> bool {
    true
}

/// `exponents * times[0] * times[1] ... / per[0] / per[1] ...`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionDecl {
    pub name: String,

    #[serde(flatten)]
    pub exponents: Dimension,

    #[serde(default)]
    pub times: Vec<String>,

    #[serde(default)]
    pub per: Vec<String>,
}

/// A `[[unit]]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitDecl {
    pub symbol: String,

    /// Name of a declared dimension.
    pub dimension: String,

    pub scale: f64,

    #[serde(default)]
    pub offset: f64,

    #[serde(default)]
    pub preferred: bool,
}

/// Dimension and unit registries built together.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub dimensions: DimensionRegistry,
    pub units: UnitRegistry,
}

impl Catalog {
    /// Standard dimensions with the standard units
    pub fn standard() -> Self {
        Self {
            dimensions: DimensionRegistry::standard(),
            units: UnitRegistry::with_standard_units(),
        }
    }

    /// Operator edges closed over this catalogue's dimensions
    pub fn derived_operators(&self) -> Vec<DerivedOperatorEdge> {
        derive_operators(&self.dimensions)
    }

    /// Preferred unit for a dimension looked up by name.
    pub fn preferred_unit(&self, name: &str) -> Result<Option<&Unit>> {
        let dimension = lookup(&self.dimensions, name)?;
        Ok(self.units.preferred_unit(dimension))
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            include_standard: true,
            dimensions: Vec::new(),
            units: Vec::new(),
        }
    }
}

impl CatalogConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    /// Resolves declarations in order; later ones may use earlier names.
    pub fn build(&self) -> Result<Catalog> {
        let mut catalog = if self.include_standard {
            Catalog::standard()
        } else {
            Catalog::default()
        };

        for decl in &self.dimensions {
            let dimension = decl.resolve(&catalog.dimensions)?;
            catalog.dimensions.register(decl.name.clone(), dimension)?;
        }

        for decl in &self.units {
            let dimension = lookup(&catalog.dimensions, &decl.dimension)?;
            let unit = Unit::new(decl.symbol.clone(), dimension, decl.scale, decl.offset);
            if decl.preferred {
                catalog.units.set_preferred_unit(unit.clone());
            }
            catalog.units.add(unit);
        }

        tracing::info!(
            "built catalogue with {} dimensions and {} units",
            catalog.dimensions.len(),
            catalog.units.len()
        );
        Ok(catalog)
    }
}

impl DimensionDecl {
    fn resolve(&self, registry: &DimensionRegistry) -> Result<Dimension> {
        let mut dimension = self.exponents;
        for name in &self.times {
            dimension = dimension * lookup(registry, name)?;
        }
        for name in &self.per {
            dimension = dimension / lookup(registry, name)?;
        }
        Ok(dimension)
    }
}

fn lookup(registry: &DimensionRegistry, name: &str) -> Result<Dimension> {
    registry
        .lookup_by_name(name)
        .ok_or_else(|| UnitsError::DimensionNotFound(name.to_string()))
}
