//! Dimension vectors over the six SI base dimensions.
//!
//! This file is also compiled by `build.rs`, so it may only depend on `std`
//! and `serde`.

use std::fmt;
use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

/// Integer exponents of length, mass, time, current, amount of substance and
/// temperature.
///
/// The zero vector is the only dimensionless dimension. Values are never
/// mutated; [`Mul`] and [`Div`] build new vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimension {
    pub length: i32,
    pub mass: i32,
    pub time: i32,
    pub current: i32,
    pub amount_of_substance: i32,
    pub temperature: i32,
}

impl Dimension {
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0, 0, 0);
    pub const LENGTH: Self = Self::new(1, 0, 0, 0, 0, 0);
    pub const MASS: Self = Self::new(0, 1, 0, 0, 0, 0);
    pub const TIME: Self = Self::new(0, 0, 1, 0, 0, 0);
    pub const CURRENT: Self = Self::new(0, 0, 0, 1, 0, 0);
    pub const AMOUNT_OF_SUBSTANCE: Self = Self::new(0, 0, 0, 0, 1, 0);
    pub const TEMPERATURE: Self = Self::new(0, 0, 0, 0, 0, 1);

    pub const fn new(
        length: i32,
        mass: i32,
        time: i32,
        current: i32,
        amount_of_substance: i32,
        temperature: i32,
    ) -> Self {
        Self {
            length,
            mass,
            time,
            current,
            amount_of_substance,
            temperature,
        }
    }

    /// Component-wise sum of exponents.
    pub const fn multiply(self, other: Self) -> Self {
        Self::new(
            self.length + other.length,
            self.mass + other.mass,
            self.time + other.time,
            self.current + other.current,
            self.amount_of_substance + other.amount_of_substance,
            self.temperature + other.temperature,
        )
    }

    /// Component-wise difference of exponents.
    pub const fn divide(self, other: Self) -> Self {
        self.multiply(other.invert())
    }

    /// Negates every exponent.
    pub const fn invert(self) -> Self {
        Self::new(
            -self.length,
            -self.mass,
            -self.time,
            -self.current,
            -self.amount_of_substance,
            -self.temperature,
        )
    }

    pub const fn is_dimensionless(&self) -> bool {
        self.length == 0
            && self.mass == 0
            && self.time == 0
            && self.current == 0
            && self.amount_of_substance == 0
            && self.temperature == 0
    }

    /// Exponents paired with their base symbol, in display order.
    pub fn components(&self) -> [(&'static str, i32); 6] {
        [
            ("L", self.length),
            ("M", self.mass),
            ("T", self.time),
            ("I", self.current),
            ("N", self.amount_of_substance),
            ("Θ", self.temperature),
        ]
    }
}

impl Mul for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Dimension) -> Dimension {
        self.multiply(rhs)
    }
}

impl Div for Dimension {
    type Output = Dimension;

    fn div(self, rhs: Dimension) -> Dimension {
        self.divide(rhs)
    }
}

/// Renders `L^1T^-1` style: non-zero components only, exponent always shown.
/// The dimensionless vector renders as an empty string.
impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, exponent) in self.components() {
            if exponent != 0 {
                write!(f, "{}^{}", symbol, exponent)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [Dimension; 5] = [
        Dimension::LENGTH,
        Dimension::new(1, 1, -2, 0, 0, 0),
        Dimension::new(2, 0, -2, 0, 0, -1),
        Dimension::new(0, 1, 0, 0, -1, 0),
        Dimension::new(-3, 2, 4, 1, 1, -1),
    ];

    #[test]
    fn test_divide_by_self_is_dimensionless() {
        for d in SAMPLES {
            assert_eq!(d / d, Dimension::DIMENSIONLESS);
            assert!((d / d).is_dimensionless());
        }
    }

    #[test]
    fn test_multiply_commutes_and_divide_undoes_it() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(a * b, b * a);
                assert_eq!((a * b) / b, a);
                assert_eq!(a / b, a * b.invert());
            }
        }
    }

    #[test]
    fn test_dimensionless_is_identity() {
        for d in SAMPLES {
            assert_eq!(d * Dimension::DIMENSIONLESS, d);
            assert_eq!(d / Dimension::DIMENSIONLESS, d);
        }
    }

    #[test]
    fn test_force_from_mass_and_acceleration() {
        let acceleration = Dimension::LENGTH / Dimension::TIME / Dimension::TIME;
        assert_eq!(Dimension::MASS * acceleration, Dimension::new(1, 1, -2, 0, 0, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Dimension::LENGTH.to_string(), "L^1");
        assert_eq!((Dimension::LENGTH / Dimension::TIME).to_string(), "L^1T^-1");
        assert_eq!(Dimension::new(2, 1, -2, 0, -1, -1).to_string(), "L^2M^1T^-2N^-1Θ^-1");
        assert_eq!(Dimension::DIMENSIONLESS.to_string(), "");
        assert_eq!((Dimension::MASS / Dimension::MASS).to_string(), "");
    }
}
