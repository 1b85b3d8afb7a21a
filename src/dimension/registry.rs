//! Bidirectional map between dimension names and dimension vectors.
//!
//! Also compiled by `build.rs`; keep dependencies to `std`, `serde`,
//! `thiserror` and `tracing`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::vector::Dimension;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Dimension name already registered: {0}")]
    DuplicateName(String),
}

/// A named dimension as declared, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedDimensionEntry {
    pub name: String,
    pub dimension: Dimension,
}

/// Registry of named dimensions.
///
/// Names are unique. When two names share a vector, the reverse lookup
/// resolves to the one registered last.
#[derive(Debug, Clone, Default)]
pub struct DimensionRegistry {
    entries: Vec<NamedDimensionEntry>,
    by_name: HashMap<String, usize>,
    by_vector: HashMap<Dimension, usize>,
}

impl DimensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The reference catalogue of mechanical, thermal and molar dimensions.
    pub fn standard() -> Self {
        let length = Dimension::LENGTH;
        let area = length * length;
        let volume = area * length;
        let mass = Dimension::MASS;
        let density = mass / volume;
        let time = Dimension::TIME;
        let velocity = length / time;
        let acceleration = velocity / time;
        let temperature = Dimension::TEMPERATURE;
        let force = mass * acceleration;
        let pressure = force / area;
        let energy = force * length;
        let power = energy / time;
        let specific_energy = energy / mass;
        let specific_entropy = specific_energy / temperature;
        let amount = Dimension::AMOUNT_OF_SUBSTANCE;
        let molar_mass = mass / amount;
        let molar_energy = energy / amount;
        let molar_entropy = molar_energy / temperature;

        let mut registry = Self::new();
        for (name, dimension) in [
            ("Length", length),
            ("Area", area),
            ("Volume", volume),
            ("Mass", mass),
            ("Density", density),
            ("Time", time),
            ("Speed", velocity),
            ("Velocity", velocity),
            ("Acceleration", acceleration),
            ("Temperature", temperature),
            ("Force", force),
            ("Pressure", pressure),
            ("Energy", energy),
            ("Power", power),
            ("SpecificEnergy", specific_energy),
            ("SpecificEntropy", specific_entropy),
            ("SpecificHeatCapacity", specific_entropy),
            ("AmountOfSubstance", amount),
            ("MolarMass", molar_mass),
            ("MolarEnergy", molar_energy),
            ("MolarEntropy", molar_entropy),
            ("MolarHeatCapacity", molar_entropy),
        ] {
            // Speed, SpecificEntropy and MolarEntropy are displaced on purpose.
            let _ = registry.insert(name, dimension);
        }
        registry
    }

    /// Registers `name`, failing if the name is taken. A vector that is
    /// already named is re-pointed at `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        dimension: Dimension,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }
        if let Some(previous) = self.insert(name.clone(), dimension) {
            tracing::warn!(
                "{} shares dimension {} with {}; reverse lookup now resolves to {}",
                name,
                dimension,
                previous,
                name
            );
        }
        Ok(())
    }

    /// Returns the name the reverse lookup resolved to before, if any.
    fn insert(&mut self, name: impl Into<String>, dimension: Dimension) -> Option<String> {
        let name = name.into();
        let index = self.entries.len();
        let previous = self
            .by_vector
            .insert(dimension, index)
            .map(|i| self.entries[i].name.clone());
        tracing::debug!("registered dimension {} = {}", name, dimension);
        self.by_name.insert(name.clone(), index);
        self.entries.push(NamedDimensionEntry { name, dimension });
        previous
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<Dimension> {
        self.by_name.get(name).map(|&i| self.entries[i].dimension)
    }

    pub fn lookup_by_vector(&self, dimension: Dimension) -> Option<&str> {
        self.by_vector
            .get(&dimension)
            .map(|&i| self.entries[i].name.as_str())
    }

    /// True when the reverse lookup of `name`'s vector yields `name` itself.
    pub fn is_canonical(&self, name: &str) -> bool {
        self.lookup_by_name(name)
            .and_then(|d| self.lookup_by_vector(d))
            .is_some_and(|resolved| resolved == name)
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[NamedDimensionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_directions() {
        let registry = DimensionRegistry::standard();
        let force = registry.lookup_by_name("Force").unwrap();
        assert_eq!(force, Dimension::new(1, 1, -2, 0, 0, 0));
        assert_eq!(registry.lookup_by_vector(force), Some("Force"));
        assert_eq!(registry.lookup_by_name("Frequency"), None);
        assert_eq!(registry.lookup_by_vector(Dimension::CURRENT), None);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = DimensionRegistry::new();
        registry.register("Length", Dimension::LENGTH).unwrap();
        let err = registry.register("Length", Dimension::MASS).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName("Length".to_string()));
        assert_eq!(registry.lookup_by_name("Length"), Some(Dimension::LENGTH));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_shared_vector_resolves_to_last_registered() {
        let registry = DimensionRegistry::standard();
        let velocity = registry.lookup_by_name("Velocity").unwrap();
        assert_eq!(registry.lookup_by_name("Speed"), Some(velocity));
        assert_eq!(registry.lookup_by_vector(velocity), Some("Velocity"));
        assert!(registry.is_canonical("Velocity"));
        assert!(!registry.is_canonical("Speed"));
        assert!(!registry.is_canonical("SpecificEntropy"));
        assert!(registry.is_canonical("SpecificHeatCapacity"));
        assert!(!registry.is_canonical("MolarEntropy"));
    }

    #[test]
    fn test_insert_reports_displaced_name() {
        let mut registry = DimensionRegistry::new();
        let velocity = Dimension::LENGTH / Dimension::TIME;
        assert_eq!(registry.insert("Speed", velocity), None);
        assert_eq!(registry.insert("Velocity", velocity), Some("Speed".to_string()));
        assert_eq!(registry.insert("Time", Dimension::TIME), None);

        registry.register("Pace", velocity).unwrap();
        assert_eq!(registry.lookup_by_vector(velocity), Some("Pace"));
        assert_eq!(registry.lookup_by_name("Velocity"), Some(velocity));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_standard_catalogue_vectors() {
        let registry = DimensionRegistry::standard();
        assert_eq!(registry.len(), 22);
        assert_eq!(
            registry.lookup_by_name("Pressure"),
            Some(Dimension::new(-1, 1, -2, 0, 0, 0))
        );
        assert_eq!(
            registry.lookup_by_name("MolarEntropy"),
            Some(Dimension::new(2, 1, -2, 0, -1, -1))
        );
        assert_eq!(
            registry.lookup_by_name("Density"),
            Some(Dimension::new(-3, 1, 0, 0, 0, 0))
        );
        assert_eq!(registry.entries()[0].name, "Length");
    }
}
