use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::plan_keys::PlanKeyParseError;

/// Billing period of a gallery plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlanDuration {
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "12m")]
    TwelveMonths,
}

impl PlanDuration {
    pub const ALL: [PlanDuration; 3] = [
        PlanDuration::OneMonth,
        PlanDuration::ThreeMonths,
        PlanDuration::TwelveMonths,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanDuration::OneMonth => "1m",
            PlanDuration::ThreeMonths => "3m",
            PlanDuration::TwelveMonths => "12m",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlanDuration::OneMonth => "1 month",
            PlanDuration::ThreeMonths => "3 months",
            PlanDuration::TwelveMonths => "12 months",
        }
    }

    pub const fn expiry_days(&self) -> u32 {
        match self {
            PlanDuration::OneMonth => 30,
            PlanDuration::ThreeMonths => 90,
            PlanDuration::TwelveMonths => 365,
        }
    }
}

impl FromStr for PlanDuration {
    type Err = PlanKeyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "1m" => Ok(PlanDuration::OneMonth),
            "3m" => Ok(PlanDuration::ThreeMonths),
            "12m" => Ok(PlanDuration::TwelveMonths),
            other => Err(PlanKeyParseError::UnknownDuration(other.to_string())),
        }
    }
}

impl Display for PlanDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
