use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::domain::Error;

/// Why a card was declined. Closed set: anything else is rejected on parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclineReason {
    CreditLimitReached,
    TravelUsage,
    LargePurchaseFlagged,
    IncorrectPaymentInfo,
    MissedPayments,
    ExpiredOrDeactivated,
    CardHold,
}

impl DeclineReason {
    pub const ALL: [DeclineReason; 7] = [
        DeclineReason::CreditLimitReached,
        DeclineReason::TravelUsage,
        DeclineReason::LargePurchaseFlagged,
        DeclineReason::IncorrectPaymentInfo,
        DeclineReason::MissedPayments,
        DeclineReason::ExpiredOrDeactivated,
        DeclineReason::CardHold,
    ];

    /// Customer-facing text, also the serialized form.
    pub fn message(&self) -> &'static str {
        match self {
            DeclineReason::CreditLimitReached => "You met your credit limit",
            DeclineReason::TravelUsage => {
                "Traveled to a new city where you never used your card before"
            }
            DeclineReason::LargePurchaseFlagged => "Your large purchase was flagged",
            DeclineReason::IncorrectPaymentInfo => "You entered incorrect payment information",
            DeclineReason::MissedPayments => "You have missed payments",
            DeclineReason::ExpiredOrDeactivated => "You're using an expired or deactivated card",
            DeclineReason::CardHold => "Your card has a hold on it",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DeclineReason::CreditLimitReached => "credit_limit_reached",
            DeclineReason::TravelUsage => "travel_usage",
            DeclineReason::LargePurchaseFlagged => "large_purchase_flagged",
            DeclineReason::IncorrectPaymentInfo => "incorrect_payment_info",
            DeclineReason::MissedPayments => "missed_payments",
            DeclineReason::ExpiredOrDeactivated => "expired_or_deactivated",
            DeclineReason::CardHold => "card_hold",
        }
    }
}

impl FromStr for DeclineReason {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        DeclineReason::ALL
            .into_iter()
            .find(|reason| reason.message() == s || reason.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidRecord(format!("Unknown decline reason: {}", s)))
    }
}

impl core::fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for DeclineReason {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.message())
    }
}
