use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::dates;
use crate::models::{Contract, ExpiryBucket};

/// Last day counted as expired.
pub const END_OF_2024: NaiveDate = match NaiveDate::from_ymd_opt(2024, 12, 31) {
    Some(date) => date,
    None => panic!("invalid cutoff date"),
};

/// Fixed "today" for dashboard statistics; never read from the clock.
pub const REFERENCE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 11, 29) {
    Some(date) => date,
    None => panic!("invalid reference date"),
};

pub fn classify(end: NaiveDate) -> ExpiryBucket {
    if end <= END_OF_2024 {
        ExpiryBucket::Expired
    } else if end.year() == 2025 && end.month() < 7 {
        ExpiryBucket::FirstHalf2025
    } else if end.year() == 2025 {
        ExpiryBucket::SecondHalf2025
    } else {
        ExpiryBucket::Year2026Plus
    }
}

/// Bucket for a contract, or `None` when its end date is missing or malformed.
pub fn classify_contract(contract: &Contract) -> Option<ExpiryBucket> {
    dates::parse_optional(contract.contract_end.as_deref()).map(classify)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryPartition<'a> {
    pub expired: Vec<&'a Contract>,
    pub first_half_2025: Vec<&'a Contract>,
    pub second_half_2025: Vec<&'a Contract>,
    pub year_2026_plus: Vec<&'a Contract>,
}

impl<'a> ExpiryPartition<'a> {
    pub fn bucket(&self, bucket: ExpiryBucket) -> &[&'a Contract] {
        match bucket {
            ExpiryBucket::Expired => &self.expired,
            ExpiryBucket::FirstHalf2025 => &self.first_half_2025,
            ExpiryBucket::SecondHalf2025 => &self.second_half_2025,
            ExpiryBucket::Year2026Plus => &self.year_2026_plus,
        }
    }

    pub fn classified_count(&self) -> usize {
        ExpiryBucket::ALL
            .iter()
            .map(|bucket| self.bucket(*bucket).len())
            .sum()
    }
}

pub fn partition(contracts: &[Contract]) -> ExpiryPartition<'_> {
    let mut buckets = ExpiryPartition::default();

    for contract in contracts {
        let Some(bucket) = classify_contract(contract) else {
            continue;
        };
        match bucket {
            ExpiryBucket::Expired => buckets.expired.push(contract),
            ExpiryBucket::FirstHalf2025 => buckets.first_half_2025.push(contract),
            ExpiryBucket::SecondHalf2025 => buckets.second_half_2025.push(contract),
            ExpiryBucket::Year2026Plus => buckets.year_2026_plus.push(contract),
        }
    }

    buckets
}
