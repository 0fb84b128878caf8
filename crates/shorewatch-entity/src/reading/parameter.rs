//! Measured water-quality parameter enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The water-quality parameter a reading measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "reading_parameter", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    /// Water temperature.
    Temperature,
    /// Acidity/alkalinity.
    Ph,
    /// Salt content.
    Salinity,
    /// Dissolved oxygen concentration.
    DissolvedOxygen,
    /// Water clarity.
    Turbidity,
    /// Nitrate concentration.
    Nitrate,
    /// Phosphate concentration.
    Phosphate,
}

impl Parameter {
    /// Return the parameter as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Ph => "ph",
            Self::Salinity => "salinity",
            Self::DissolvedOxygen => "dissolved_oxygen",
            Self::Turbidity => "turbidity",
            Self::Nitrate => "nitrate",
            Self::Phosphate => "phosphate",
        }
    }

    /// The conventional unit readings of this parameter are reported in.
    pub fn default_unit(&self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Ph => "pH",
            Self::Salinity => "ppt",
            Self::DissolvedOxygen => "mg/L",
            Self::Turbidity => "NTU",
            Self::Nitrate => "mg/L",
            Self::Phosphate => "mg/L",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Parameter {
    type Err = shorewatch_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "temperature" => Ok(Self::Temperature),
            "ph" => Ok(Self::Ph),
            "salinity" => Ok(Self::Salinity),
            "dissolved_oxygen" => Ok(Self::DissolvedOxygen),
            "turbidity" => Ok(Self::Turbidity),
            "nitrate" => Ok(Self::Nitrate),
            "phosphate" => Ok(Self::Phosphate),
            _ => Err(shorewatch_core::AppError::validation(format!(
                "Invalid parameter: '{s}'. Expected one of: temperature, ph, salinity, \
                 dissolved_oxygen, turbidity, nitrate, phosphate"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "dissolved_oxygen".parse::<Parameter>().unwrap(),
            Parameter::DissolvedOxygen
        );
        assert!("chlorophyll".parse::<Parameter>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Parameter::DissolvedOxygen).unwrap();
        assert_eq!(json, "\"dissolved_oxygen\"");
    }
}
