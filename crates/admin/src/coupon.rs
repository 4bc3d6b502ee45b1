use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use doudou_core::{CouponId, DomainError, DomainResult, Entity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: CouponId,
    pub code: String,
    pub discount_percent: u8,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    pub is_active: bool,
    pub usage_count: u32,
    pub max_usage: Option<u32>,
    pub created_at: DateTime<Utc>,
}

/// What the coupons table shows in the status column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CouponState {
    Inactive,
    Active,
    NotStarted,
    Expired,
}

impl Coupon {
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.valid_to < today
    }

    /// Switched-off coupons read as inactive whatever their dates.
    pub fn state(&self, today: NaiveDate) -> CouponState {
        if !self.is_active {
            CouponState::Inactive
        } else if self.is_expired(today) {
            CouponState::Expired
        } else if today < self.valid_from {
            CouponState::NotStarted
        } else {
            CouponState::Active
        }
    }

    pub fn usage_exhausted(&self) -> bool {
        self.max_usage.is_some_and(|max| self.usage_count >= max)
    }
}

impl Entity for Coupon {
    type Id = CouponId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Bounds of the discount input on the coupon form. Submission does not check them.
pub const DISCOUNT_PERCENT_RANGE: core::ops::RangeInclusive<u8> = 1..=100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponDraft {
    pub code: String,
    pub discount_percent: u8,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    pub is_active: bool,
    pub max_usage: Option<u32>,
}

impl CouponDraft {
    /// Only the code is required.
    pub fn validate(&self) -> DomainResult<()> {
        if self.code.trim().is_empty() {
            return Err(DomainError::validation("coupon code cannot be empty"));
        }
        Ok(())
    }

    /// Codes are stored upper-case.
    pub fn normalized_code(&self) -> String {
        self.code.trim().to_uppercase()
    }
}
