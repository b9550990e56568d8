//! Unit of distance declared by `asset/unit`.
//!
//! COLLADA stores the unit as a name plus the length of one unit in meters.
//! The common names are resolved through a compile-time table; arbitrary
//! name/scale pairs are accepted as-is.

use phf::phf_map;
use std::fmt;

/// Meters per unit for the unit names recognized by name alone.
pub static UNIT_TABLE: phf::Map<&'static str, f64> = phf_map! {
    "kilometer" => 1000.0,
    "meter" => 1.0,
    "decimeter" => 0.1,
    "centimeter" => 0.01,
    "millimeter" => 0.001,
    "mile" => 1609.34,
    "yard" => 0.9144,
    "foot" => 0.3048,
    "inch" => 0.0254,
};

/// Name of the default unit.
pub const DEFAULT_UNIT: &str = "meter";

/// A unit name together with its length in meters.
///
/// Both halves are always written to the document together.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitScale {
    /// Value of the `name` attribute
    pub name: String,
    /// Value of the `meter` attribute
    pub meter: f64,
}

impl UnitScale {
    /// Create a unit with an explicit scale. Any name and value is accepted.
    pub fn new(name: impl Into<String>, meter: f64) -> Self {
        Self {
            name: name.into(),
            meter,
        }
    }

    /// Look a unit up by name, case-insensitively.
    ///
    /// The returned name is the lowercase form.
    ///
    /// # Examples
    ///
    /// ```
    /// use colladoc::UnitScale;
    ///
    /// assert_eq!(UnitScale::lookup("Inch"), Some(UnitScale::new("inch", 0.0254)));
    /// assert_eq!(UnitScale::lookup("furlong"), None);
    /// ```
    pub fn lookup(name: &str) -> Option<Self> {
        let normalized = name.to_lowercase();
        let meter = *UNIT_TABLE.get(normalized.as_str())?;
        Some(Self::new(normalized, meter))
    }

    /// The `meter` attribute text.
    pub fn meter_text(&self) -> String {
        let mut buffer = ryu::Buffer::new();
        buffer.format(self.meter).to_string()
    }
}

impl Default for UnitScale {
    fn default() -> Self {
        Self::new(DEFAULT_UNIT, 1.0)
    }
}

impl fmt::Display for UnitScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} m)", self.name, self.meter_text())
    }
}

/// Units recognized by [`UnitScale::lookup`], smallest first.
pub fn known_units() -> Vec<(&'static str, f64)> {
    let mut units: Vec<_> = UNIT_TABLE.entries().map(|(name, meter)| (*name, *meter)).collect();
    units.sort_by(|a, b| a.1.total_cmp(&b.1));
    units
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(UnitScale::lookup("MILE"), Some(UnitScale::new("mile", 1609.34)));
        assert_eq!(UnitScale::lookup("meter"), Some(UnitScale::default()));
        assert_eq!(UnitScale::lookup("bogus-unit"), None);
        assert_eq!(UnitScale::lookup(""), None);
    }

    #[test]
    fn test_meter_text() {
        assert_eq!(UnitScale::default().meter_text(), "1.0");
        assert_eq!(UnitScale::new("cm", 0.01).meter_text(), "0.01");
        let parsec = UnitScale::new("parsec", 3.0857e16);
        assert_eq!(parsec.meter_text().parse::<f64>().unwrap(), 3.0857e16);
    }

    #[test]
    fn test_known_units_sorted() {
        let units = known_units();
        assert_eq!(units.len(), 9);
        assert_eq!(units.first(), Some(&("millimeter", 0.001)));
        assert_eq!(units.last(), Some(&("mile", 1609.34)));
    }
}
