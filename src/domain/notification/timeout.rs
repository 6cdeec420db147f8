//! Expire timeout value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::TimeoutParseError;

/// How long the server should keep a notification on screen.
///
/// `Default` defers to the server's own policy, `Never` keeps the
/// notification until it is dismissed or replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpireTimeout {
    #[default]
    Default,
    Never,
    Millis(u32),
}

impl ExpireTimeout {
    /// Create a timeout from milliseconds
    pub const fn from_millis(ms: u32) -> Self {
        Self::Millis(ms)
    }

    /// Create a timeout from seconds, saturating at `u32::MAX` milliseconds
    pub const fn from_secs(secs: u32) -> Self {
        Self::Millis(secs.saturating_mul(1000))
    }
}

impl FromStr for ExpireTimeout {
    type Err = TimeoutParseError;

    /// Parse a timeout string.
    /// Supported formats: "default", "never", "500ms", "5s", "1m", "1m30s"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();

        match input.as_str() {
            "default" => return Ok(Self::Default),
            "never" => return Ok(Self::Never),
            _ => {}
        }

        // Plain milliseconds form: "500ms"
        if let Some(ms) = input.strip_suffix("ms") {
            let ms: u32 = ms
                .parse()
                .map_err(|_| TimeoutParseError { input: s.to_string() })?;
            if ms == 0 {
                return Err(TimeoutParseError { input: s.to_string() });
            }
            return Ok(Self::Millis(ms));
        }

        // Minute/second forms: "5s", "1m", "1m30s"
        let mut minutes: u32 = 0;
        let mut seconds: u32 = 0;
        let mut current_num = String::new();
        let mut found_any = false;

        for ch in input.chars() {
            if ch.is_ascii_digit() {
                current_num.push(ch);
            } else if ch == 'm' && !current_num.is_empty() {
                minutes = current_num
                    .parse()
                    .map_err(|_| TimeoutParseError { input: s.to_string() })?;
                current_num.clear();
                found_any = true;
            } else if ch == 's' && !current_num.is_empty() {
                seconds = current_num
                    .parse()
                    .map_err(|_| TimeoutParseError { input: s.to_string() })?;
                current_num.clear();
                found_any = true;
            } else {
                return Err(TimeoutParseError { input: s.to_string() });
            }
        }

        if !current_num.is_empty() || !found_any {
            return Err(TimeoutParseError { input: s.to_string() });
        }

        let total_ms = minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .and_then(|secs| secs.checked_mul(1000))
            .ok_or_else(|| TimeoutParseError { input: s.to_string() })?;
        if total_ms == 0 {
            return Err(TimeoutParseError { input: s.to_string() });
        }

        Ok(Self::Millis(total_ms))
    }
}

impl fmt::Display for ExpireTimeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Never => write!(f, "never"),
            Self::Millis(ms) => {
                if ms % 60_000 == 0 {
                    write!(f, "{}m", ms / 60_000)
                } else if ms % 1000 == 0 {
                    let total_secs = ms / 1000;
                    if total_secs >= 60 {
                        write!(f, "{}m{}s", total_secs / 60, total_secs % 60)
                    } else {
                        write!(f, "{}s", total_secs)
                    }
                } else {
                    write!(f, "{}ms", ms)
                }
            }
        }
    }
}
