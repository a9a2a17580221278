//! The five-way solar season derived from the month branch.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Season of the month branch. Transitional earth months (chen, wei, xu,
/// chou) form their own fifth band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    EarthMonth,
}

impl Season {
    pub const ALL: [Season; 5] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
        Season::EarthMonth,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
            Season::EarthMonth => "earth_month",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_snake_case() {
        assert_eq!(serde_json::to_string(&Season::Spring).unwrap(), "\"spring\"");
        assert_eq!(
            serde_json::to_string(&Season::EarthMonth).unwrap(),
            "\"earth_month\""
        );
    }

    #[test]
    fn displays_name() {
        assert_eq!(format!("{}", Season::Winter), "winter");
    }
}
