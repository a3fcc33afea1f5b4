use std::collections::HashSet;

use crate::aggregate::{self, Groups};
use crate::expiry;
use crate::models::{Contract, Distribution, DistributionEntry, ExpiryBucket, Summary};

pub fn summarize(contracts: &[Contract]) -> Summary {
    let mut summary = Summary {
        total_contracts: contracts.len(),
        ..Summary::default()
    };

    for contract in contracts {
        match expiry::classify_contract(contract) {
            Some(ExpiryBucket::Expired) => summary.expired_count += 1,
            Some(ExpiryBucket::FirstHalf2025) => summary.first_half_2025_count += 1,
            Some(ExpiryBucket::SecondHalf2025) => summary.second_half_2025_count += 1,
            Some(ExpiryBucket::Year2026Plus) => summary.year_2026_plus_count += 1,
            None => {}
        }
    }
    summary.ending_2025_count = summary.first_half_2025_count + summary.second_half_2025_count;

    summary.university_count = contracts
        .iter()
        .map(|contract| contract.university.as_str())
        .collect::<HashSet<_>>()
        .len();

    summary.degree_distribution = degree_distribution(contracts);
    summary.completion_distribution = completion_distribution(contracts);
    summary
}

pub fn degree_distribution(contracts: &[Contract]) -> Distribution {
    distribution(aggregate::count_by(contracts, |contract| contract.degree.clone()))
}

pub fn completion_distribution(contracts: &[Contract]) -> Distribution {
    distribution(aggregate::count_by(contracts, |contract| {
        contract.completion_label().to_string()
    }))
}

/// Turns ordered counts into a distribution whose percentages share the counts' own total.
pub fn distribution(counts: Groups<String, usize>) -> Distribution {
    let total: usize = counts.iter().map(|(_, count)| *count).sum();
    let entries = counts
        .into_iter()
        .map(|(label, count)| DistributionEntry {
            label,
            count,
            percentage: percentage(count, total),
        })
        .collect();

    Distribution { total, entries }
}

/// Share of `total`, as a percentage rounded to one decimal place.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = count as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}
