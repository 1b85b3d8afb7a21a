use super::Unit;
use crate::error::Result;

/// A decimal SI prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix {
    symbol: &'static str,
    power_of_ten: i32,
}

impl Prefix {
    pub const fn new(symbol: &'static str, power_of_ten: i32) -> Self {
        Self {
            symbol,
            power_of_ten,
        }
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn scalar(&self) -> f64 {
        10f64.powi(self.power_of_ten)
    }

    /// Scales `unit` and prepends the prefix symbol. Fails on offset units.
    pub fn apply(&self, unit: &Unit) -> Result<Unit> {
        unit.scaled(format!("{}{}", self.symbol, unit.symbol()), self.scalar())
    }
}

pub mod prefixes {
    use super::Prefix;

    pub const YOTTA: Prefix = Prefix::new("Y", 24);
    pub const ZETTA: Prefix = Prefix::new("Z", 21);
    pub const EXA: Prefix = Prefix::new("E", 18);
    pub const PETA: Prefix = Prefix::new("P", 15);
    pub const TERA: Prefix = Prefix::new("T", 12);
    pub const GIGA: Prefix = Prefix::new("G", 9);
    pub const MEGA: Prefix = Prefix::new("M", 6);
    pub const KILO: Prefix = Prefix::new("k", 3);
    pub const HECTO: Prefix = Prefix::new("h", 2);
    pub const DECA: Prefix = Prefix::new("da", 1);
    pub const DECI: Prefix = Prefix::new("d", -1);
    pub const CENTI: Prefix = Prefix::new("c", -2);
    pub const MILLI: Prefix = Prefix::new("m", -3);
    pub const MICRO: Prefix = Prefix::new("μ", -6);
    pub const NANO: Prefix = Prefix::new("n", -9);
    pub const PICO: Prefix = Prefix::new("p", -12);
    pub const FEMTO: Prefix = Prefix::new("f", -15);
    pub const ATTO: Prefix = Prefix::new("a", -18);
    pub const ZEPTO: Prefix = Prefix::new("z", -21);
    pub const YOCTO: Prefix = Prefix::new("y", -24);

    pub const ALL: [Prefix; 20] = [
        YOTTA, ZETTA, EXA, PETA, TERA, GIGA, MEGA, KILO, HECTO, DECA, DECI, CENTI, MILLI, MICRO,
        NANO, PICO, FEMTO, ATTO, ZEPTO, YOCTO,
    ];
}
