//! Up axis declared by `asset/up_axis`.

use crate::common::Error;
use std::fmt;
use std::str::FromStr;

/// Which axis points up in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UpAxis {
    X,
    #[default]
    Y,
    Z,
}

impl UpAxis {
    /// Resolve a user-supplied axis token.
    ///
    /// Only the first character matters and case is ignored, so `"z"`,
    /// `"Z_UP"` and `"zebra"` all mean [`UpAxis::Z`]. Empty input resolves to
    /// nothing.
    pub fn from_token(token: &str) -> Option<Self> {
        let first = token.chars().next()?.to_lowercase().next()?;
        match first {
            'x' => Some(Self::X),
            'y' => Some(Self::Y),
            'z' => Some(Self::Z),
            _ => None,
        }
    }

    /// Schema value written to `up_axis`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X => "X_UP",
            Self::Y => "Y_UP",
            Self::Z => "Z_UP",
        }
    }
}

impl fmt::Display for UpAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse of a schema value (`X_UP`, `Y_UP` or `Z_UP`).
impl FromStr for UpAxis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X_UP" => Ok(Self::X),
            "Y_UP" => Ok(Self::Y),
            "Z_UP" => Ok(Self::Z),
            other => Err(Error::Schema(format!("Unknown up axis: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_uses_first_character() {
        assert_eq!(UpAxis::from_token("z"), Some(UpAxis::Z));
        assert_eq!(UpAxis::from_token("Z_UP"), Some(UpAxis::Z));
        assert_eq!(UpAxis::from_token("zebra"), Some(UpAxis::Z));
        assert_eq!(UpAxis::from_token("X"), Some(UpAxis::X));
        assert_eq!(UpAxis::from_token("xyz"), Some(UpAxis::X));
        assert_eq!(UpAxis::from_token("y"), Some(UpAxis::Y));
        assert_eq!(UpAxis::from_token(""), None);
        assert_eq!(UpAxis::from_token("q"), None);
        assert_eq!(UpAxis::from_token(" x"), None);
    }

    #[test]
    fn test_schema_values() {
        assert_eq!("Z_UP".parse::<UpAxis>().unwrap(), UpAxis::Z);
        assert_eq!(" Y_UP\n".parse::<UpAxis>().unwrap(), UpAxis::Y);
        assert!(matches!("z".parse::<UpAxis>(), Err(Error::Schema(_))));
        assert_eq!(UpAxis::X.to_string(), "X_UP");
        assert_eq!(UpAxis::default(), UpAxis::Y);
    }
}
