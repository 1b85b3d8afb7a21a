//! Common units, scaled against the SI base units (m, kg, s, K, mol).

use super::Unit;
use crate::dimension::Dimension;

const LENGTH: Dimension = Dimension::LENGTH;
const MASS: Dimension = Dimension::MASS;
const TIME: Dimension = Dimension::TIME;
const TEMPERATURE: Dimension = Dimension::TEMPERATURE;
const AMOUNT: Dimension = Dimension::AMOUNT_OF_SUBSTANCE;
const FORCE: Dimension = MASS.multiply(LENGTH).divide(TIME).divide(TIME);
const ENERGY: Dimension = FORCE.multiply(LENGTH);
const POWER: Dimension = ENERGY.divide(TIME);
const PRESSURE: Dimension = FORCE.divide(LENGTH.multiply(LENGTH));

const INCH_M: f64 = 0.0254;
const FOOT_M: f64 = 12.0 * INCH_M;
const YARD_M: f64 = 3.0 * FOOT_M;
const MILE_M: f64 = 1760.0 * YARD_M;
const POUND_KG: f64 = 0.45359237;
const STANDARD_GRAVITY: f64 = 9.80665;
const ZERO_CELSIUS_K: f64 = 273.15;
const RANKINE_K: f64 = 5.0 / 9.0;

pub const METER: Unit = Unit::of("m", LENGTH, 1.0);
pub const MILLIMETER: Unit = Unit::of("mm", LENGTH, 1e-3);
pub const CENTIMETER: Unit = Unit::of("cm", LENGTH, 1e-2);
pub const KILOMETER: Unit = Unit::of("km", LENGTH, 1e3);
pub const INCH: Unit = Unit::of("in", LENGTH, INCH_M);
pub const FOOT: Unit = Unit::of("ft", LENGTH, FOOT_M);
pub const YARD: Unit = Unit::of("yd", LENGTH, YARD_M);
pub const MILE: Unit = Unit::of("mi", LENGTH, MILE_M);

pub const SECOND: Unit = Unit::of("s", TIME, 1.0);
pub const MINUTE: Unit = Unit::of("min", TIME, 60.0);
pub const HOUR: Unit = Unit::of("h", TIME, 3600.0);

pub const KILOGRAM: Unit = Unit::of("kg", MASS, 1.0);
pub const GRAM: Unit = Unit::of("g", MASS, 1e-3);
pub const POUND: Unit = Unit::of("lb", MASS, POUND_KG);

pub const KELVIN: Unit = Unit::of("K", TEMPERATURE, 1.0);
pub const CELSIUS: Unit = Unit::affine("°C", TEMPERATURE, 1.0, ZERO_CELSIUS_K);
pub const FAHRENHEIT: Unit = Unit::affine(
    "°F",
    TEMPERATURE,
    RANKINE_K,
    ZERO_CELSIUS_K - 32.0 * RANKINE_K,
);

pub const MOLE: Unit = Unit::of("mol", AMOUNT, 1.0);

pub const NEWTON: Unit = Unit::of("N", FORCE, 1.0);
pub const POUND_FORCE: Unit = Unit::of("lbf", FORCE, POUND_KG * STANDARD_GRAVITY);
pub const JOULE: Unit = Unit::of("J", ENERGY, 1.0);
pub const WATT: Unit = Unit::of("W", POWER, 1.0);
pub const PASCAL: Unit = Unit::of("Pa", PRESSURE, 1.0);
pub const PSI: Unit = Unit::of(
    "psi",
    PRESSURE,
    POUND_KG * STANDARD_GRAVITY / (INCH_M * INCH_M),
);

/// Every unit above, in declaration order.
pub fn all() -> Vec<Unit> {
    vec![
        METER, MILLIMETER, CENTIMETER, KILOMETER, INCH, FOOT, YARD, MILE, SECOND, MINUTE, HOUR,
        KILOGRAM, GRAM, POUND, KELVIN, CELSIUS, FAHRENHEIT, MOLE, NEWTON, POUND_FORCE, JOULE,
        WATT, PASCAL, PSI,
    ]
}

/// Units a fresh registry displays its base dimensions in.
pub fn preferred() -> Vec<Unit> {
    vec![METER, KILOGRAM, SECOND, KELVIN, MOLE]
}
