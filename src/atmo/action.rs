use std::fmt;
use std::str::FromStr;

use crate::atmo::{AtmoError, Quantity};

/// What a trigger asks an adapter to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    All,
    Single(Quantity),
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::All => "all",
            Action::Single(quantity) => quantity.as_str(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = AtmoError;

    /// Keywords are matched case-insensitively; an empty action means everything.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(Action::All);
        }

        s.parse().map(Action::Single)
    }
}
