//! Urgency level value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::UrgencyParseError;

/// Notification urgency per the freedesktop notification spec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    Critical,
}

impl Urgency {
    /// The raw hint value sent over the bus
    pub const fn as_level(&self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Normal => 1,
            Self::Critical => 2,
        }
    }
}

impl FromStr for Urgency {
    type Err = UrgencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "critical" => Ok(Self::Critical),
            _ => Err(UrgencyParseError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Normal => write!(f, "normal"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_levels() {
        assert_eq!("low".parse::<Urgency>().unwrap(), Urgency::Low);
        assert_eq!("normal".parse::<Urgency>().unwrap(), Urgency::Normal);
        assert_eq!("critical".parse::<Urgency>().unwrap(), Urgency::Critical);
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("CRITICAL".parse::<Urgency>().unwrap(), Urgency::Critical);
    }

    #[test]
    fn parse_invalid() {
        let err = "loud".parse::<Urgency>().unwrap_err();
        assert_eq!(err.input, "loud");
    }

    #[test]
    fn levels_match_wire_values() {
        assert_eq!(Urgency::Low.as_level(), 0);
        assert_eq!(Urgency::Normal.as_level(), 1);
        assert_eq!(Urgency::Critical.as_level(), 2);
    }

    #[test]
    fn display_round_trips() {
        for u in [Urgency::Low, Urgency::Normal, Urgency::Critical] {
            assert_eq!(u.to_string().parse::<Urgency>().unwrap(), u);
        }
    }
}
