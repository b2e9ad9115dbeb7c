use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// passenger status reported with each ping. datasets encode this as `1` for
/// a taxi carrying a passenger and `0` for a free taxi.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyStatus {
    Free,
    Occupied,
}

impl OccupancyStatus {
    pub fn is_occupied(&self) -> bool {
        matches!(self, OccupancyStatus::Occupied)
    }
}

impl TryFrom<i64> for OccupancyStatus {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OccupancyStatus::Free),
            1 => Ok(OccupancyStatus::Occupied),
            other => Err(format!("status must be 0 or 1, found {other}")),
        }
    }
}

impl FromStr for OccupancyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // some exports write integer columns as floats ("1.0")
        let value = match trimmed.parse::<i64>() {
            Ok(v) => v,
            Err(_) => match trimmed.parse::<f64>() {
                Ok(f) if f.fract() == 0.0 => f as i64,
                _ => return Err(format!("status '{trimmed}' is not an integer")),
            },
        };
        OccupancyStatus::try_from(value)
    }
}

impl Display for OccupancyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OccupancyStatus::Free => write!(f, "0"),
            OccupancyStatus::Occupied => write!(f, "1"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::OccupancyStatus;

    #[test]
    fn test_parse_status() {
        assert_eq!("1".parse::<OccupancyStatus>(), Ok(OccupancyStatus::Occupied));
        assert_eq!(" 0 ".parse::<OccupancyStatus>(), Ok(OccupancyStatus::Free));
        assert_eq!("1.0".parse::<OccupancyStatus>(), Ok(OccupancyStatus::Occupied));
    }

    #[test]
    fn test_parse_status_rejects_other_values() {
        assert!("2".parse::<OccupancyStatus>().is_err());
        assert!("0.5".parse::<OccupancyStatus>().is_err());
        assert!("".parse::<OccupancyStatus>().is_err());
        assert!("occupied".parse::<OccupancyStatus>().is_err());
    }
}
