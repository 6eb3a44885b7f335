//! Linear unit conversion.
//!
//! The legacy inventory stores lengths in meters (and detour distances in
//! kilometers); the state asset system stores feet and miles. All factors are
//! exact by definition of the international foot (0.3048 m), so the only
//! rounding involved is f64 arithmetic (~1e-15 relative).

/// Units the reconciliation checks convert between.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LinearUnit {
    Meters,
    Feet,
    Kilometers,
    Miles,
}

impl LinearUnit {
    /// Meters per one of this unit (exact definitions).
    fn meters_per_unit(self) -> f64 {
        match self {
            LinearUnit::Meters => 1.0,
            LinearUnit::Feet => 0.3048,
            LinearUnit::Kilometers => 1_000.0,
            LinearUnit::Miles => 1_609.344, // 5280 international feet
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LinearUnit::Meters => "m",
            LinearUnit::Feet => "ft",
            LinearUnit::Kilometers => "km",
            LinearUnit::Miles => "mi",
        }
    }
}

/// Convert `value` from one linear unit to another.
pub fn convert(value: f64, from: LinearUnit, to: LinearUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.meters_per_unit() / to.meters_per_unit()
}
