use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::value_objects::enums::{
    plan_durations::PlanDuration, storage_tiers::StorageTier,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanKeyParseError {
    #[error("unrecognized storage tier: {0}")]
    UnknownStorageTier(String),
    #[error("unrecognized plan duration: {0}")]
    UnknownDuration(String),
    #[error("malformed plan key: {0}")]
    Malformed(String),
}

/// Catalog index of the form `{tier}-{duration}`, e.g. `3GB-12m`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct PlanKey {
    tier: StorageTier,
    duration: PlanDuration,
}

impl PlanKey {
    pub const fn new(tier: StorageTier, duration: PlanDuration) -> Self {
        Self { tier, duration }
    }

    pub fn tier(&self) -> StorageTier {
        self.tier
    }

    pub fn duration(&self) -> PlanDuration {
        self.duration
    }
}

impl FromStr for PlanKey {
    type Err = PlanKeyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (tier, duration) = value
            .trim()
            .split_once('-')
            .ok_or_else(|| PlanKeyParseError::Malformed(value.to_string()))?;

        Ok(Self::new(tier.parse()?, duration.parse()?))
    }
}

impl TryFrom<String> for PlanKey {
    type Error = PlanKeyParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PlanKey> for String {
    fn from(value: PlanKey) -> Self {
        value.to_string()
    }
}

impl Display for PlanKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.tier, self.duration)
    }
}
