use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::plan_keys::PlanKeyParseError;

const GIB: u64 = 1024 * 1024 * 1024;

/// Storage capacity category of a gallery plan. Ordered by capacity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StorageTier {
    #[serde(rename = "1GB")]
    OneGb,
    #[serde(rename = "3GB")]
    ThreeGb,
    #[serde(rename = "10GB")]
    TenGb,
}

impl StorageTier {
    pub const ALL: [StorageTier; 3] = [StorageTier::OneGb, StorageTier::ThreeGb, StorageTier::TenGb];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageTier::OneGb => "1GB",
            StorageTier::ThreeGb => "3GB",
            StorageTier::TenGb => "10GB",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StorageTier::OneGb => "1 GB",
            StorageTier::ThreeGb => "3 GB",
            StorageTier::TenGb => "10 GB",
        }
    }

    pub const fn limit_bytes(&self) -> u64 {
        match self {
            StorageTier::OneGb => GIB,
            StorageTier::ThreeGb => 3 * GIB,
            StorageTier::TenGb => 10 * GIB,
        }
    }
}

impl FromStr for StorageTier {
    type Err = PlanKeyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "1GB" => Ok(StorageTier::OneGb),
            "3GB" => Ok(StorageTier::ThreeGb),
            "10GB" => Ok(StorageTier::TenGb),
            other => Err(PlanKeyParseError::UnknownStorageTier(other.to_string())),
        }
    }
}

impl Display for StorageTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
