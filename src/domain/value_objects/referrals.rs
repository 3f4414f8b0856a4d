use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferralDiscountError {
    #[error("unsupported referral discount percent: {0}")]
    Unsupported(i64),
}

/// Percentage discount granted by a referral link. Only the offered rates exist.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub enum ReferralDiscount {
    TenPercent,
    FifteenPercent,
}

impl ReferralDiscount {
    pub fn percent(&self) -> u8 {
        match self {
            ReferralDiscount::TenPercent => 10,
            ReferralDiscount::FifteenPercent => 15,
        }
    }
}

impl TryFrom<i64> for ReferralDiscount {
    type Error = ReferralDiscountError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(ReferralDiscount::TenPercent),
            15 => Ok(ReferralDiscount::FifteenPercent),
            other => Err(ReferralDiscountError::Unsupported(other)),
        }
    }
}

impl TryFrom<u8> for ReferralDiscount {
    type Error = ReferralDiscountError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl From<ReferralDiscount> for u8 {
    fn from(value: ReferralDiscount) -> Self {
        value.percent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_offered_rates() {
        assert_eq!(ReferralDiscount::try_from(10u8), Ok(ReferralDiscount::TenPercent));
        assert_eq!(ReferralDiscount::try_from(15u8), Ok(ReferralDiscount::FifteenPercent));
        assert_eq!(
            ReferralDiscount::try_from(20u8),
            Err(ReferralDiscountError::Unsupported(20))
        );
        assert_eq!(
            ReferralDiscount::try_from(300i64),
            Err(ReferralDiscountError::Unsupported(300))
        );
        assert!(ReferralDiscount::try_from(-10i64).is_err());
        assert!(serde_json::from_str::<ReferralDiscount>("12").is_err());
    }
}
