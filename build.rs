//! Emits the dimension marker types and the typed operator impls for the
//! standard catalogue.
//!
//! The dimension algebra, registry and closure derivation are the library's
//! own source files, compiled here a second time.

#![allow(dead_code)]

#[path = "src/dimension/vector.rs"]
mod vector;

#[path = "src/dimension/registry.rs"]
mod registry;

#[path = "src/dimension/closure.rs"]
mod closure;

use std::env;
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use closure::{derive_operators, DerivedOperatorEdge};
use registry::DimensionRegistry;

const SOURCES: [&str; 3] = [
    "src/dimension/vector.rs",
    "src/dimension/registry.rs",
    "src/dimension/closure.rs",
];

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    for source in SOURCES {
        println!("cargo:rerun-if-changed={source}");
    }

    let registry = DimensionRegistry::standard();
    let edges = derive_operators(&registry);

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    fs::write(
        out_dir.join("named_dimensions.rs"),
        render_named_dimensions(&registry)?,
    )?;
    fs::write(
        out_dir.join("derived_operators.rs"),
        render_operators(&registry, &edges)?,
    )?;
    Ok(())
}

fn render_named_dimensions(registry: &DimensionRegistry) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    for entry in registry.entries() {
        let d = entry.dimension;
        match registry.lookup_by_vector(d) {
            Some(canonical) if canonical != entry.name => {
                writeln!(out, "#[doc = \"Alias of [`{canonical}`].\"]")?;
                writeln!(out, "pub type {} = {};", entry.name, canonical)?;
            }
            _ => writeln!(
                out,
                "named_dimension!({}, {}, {}, {}, {}, {}, {});",
                entry.name,
                d.length,
                d.mass,
                d.time,
                d.current,
                d.amount_of_substance,
                d.temperature
            )?,
        }
    }
    Ok(out)
}

fn render_operators(
    registry: &DimensionRegistry,
    edges: &[DerivedOperatorEdge],
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    for edge in edges {
        // Alias operands would duplicate the canonical impls.
        if !registry.is_canonical(&edge.left) || !registry.is_canonical(&edge.right) {
            continue;
        }
        writeln!(
            out,
            "derived_operator!({} {} {} => {});",
            edge.left,
            edge.operator.symbol(),
            edge.right,
            edge.result
        )?;
    }
    Ok(out)
}
