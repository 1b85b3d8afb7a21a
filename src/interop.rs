//! Conversions between typed quantities and `uom::si::f64` quantities.
//!
//! Both store the value in SI base units, so conversion moves the raw value.

use std::marker::PhantomData;

use crate::dimension::named;
use crate::quantity::TypedQuantity;

/// Conversion of a typed quantity into its `uom` counterpart.
pub trait IntoUom {
    type Uom;

    fn into_uom(self) -> Self::Uom;
}

macro_rules! uom_interop {
    ($($marker:ident => $uom:ident),* $(,)?) => {
        $(
            impl From<uom::si::f64::$uom> for TypedQuantity<named::$marker> {
                fn from(q: uom::si::f64::$uom) -> Self {
                    TypedQuantity::new(q.value)
                }
            }

            impl IntoUom for TypedQuantity<named::$marker> {
                type Uom = uom::si::f64::$uom;

                fn into_uom(self) -> Self::Uom {
                    uom::si::f64::$uom {
                        dimension: PhantomData,
                        units: PhantomData,
                        value: self.scalar(),
                    }
                }
            }
        )*
    };
}

uom_interop! {
    Length => Length,
    Area => Area,
    Volume => Volume,
    Mass => Mass,
    Density => MassDensity,
    Time => Time,
    Velocity => Velocity,
    Acceleration => Acceleration,
    Temperature => ThermodynamicTemperature,
    Force => Force,
    Pressure => Pressure,
    Energy => Energy,
    Power => Power,
    SpecificEnergy => AvailableEnergy,
    SpecificHeatCapacity => SpecificHeatCapacity,
    AmountOfSubstance => AmountOfSubstance,
    MolarMass => MolarMass,
    MolarEnergy => MolarEnergy,
    MolarHeatCapacity => MolarHeatCapacity,
}
