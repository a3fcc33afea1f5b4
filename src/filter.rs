use chrono::NaiveDate;

use crate::dates;
use crate::models::{Contract, Criteria, UniversityGroup};

/// Criteria prepared for repeated matching: blank fields dropped, search text folded once.
#[derive(Debug, Clone)]
pub struct Matcher<'c> {
    needle: Option<String>,
    degree: Option<&'c str>,
    document_status: Option<&'c str>,
}

impl<'c> Matcher<'c> {
    pub fn new(criteria: &'c Criteria) -> Self {
        Self {
            needle: active(criteria.text.as_deref()).map(str::to_lowercase),
            degree: active(criteria.degree.as_deref()),
            document_status: active(criteria.document_status.as_deref()),
        }
    }

    pub fn matches(&self, contract: &Contract) -> bool {
        self.needle
            .as_deref()
            .map_or(true, |needle| matches_text(contract, needle))
            && self.degree.map_or(true, |degree| contract.degree == degree)
            && self
                .document_status
                .map_or(true, |status| contract.document_status == status)
    }
}

/// Returns the contracts matching every criterion that is set, in input order.
pub fn filter<'a>(contracts: &'a [Contract], criteria: &Criteria) -> Vec<&'a Contract> {
    let matcher = Matcher::new(criteria);
    contracts
        .iter()
        .filter(|contract| matcher.matches(contract))
        .collect()
}

/// Contracts that start or end on the given day.
pub fn search_by_date(contracts: &[Contract], date: NaiveDate) -> Vec<&Contract> {
    contracts
        .iter()
        .filter(|contract| {
            let starts = dates::parse_optional(contract.contract_start.as_deref());
            let ends = dates::parse_optional(contract.contract_end.as_deref());
            starts.is_some_and(|start| dates::is_same_date(start, date))
                || ends.is_some_and(|end| dates::is_same_date(end, date))
        })
        .collect()
}

/// Keeps the university groups whose name contains `text`, ignoring case.
pub fn filter_universities<'a>(
    groups: Vec<UniversityGroup<'a>>,
    text: &str,
) -> Vec<UniversityGroup<'a>> {
    let needle = text.to_lowercase();
    groups
        .into_iter()
        .filter(|group| group.university.to_lowercase().contains(&needle))
        .collect()
}

pub fn find_by_id(contracts: &[Contract], id: i64) -> Option<&Contract> {
    contracts.iter().find(|contract| contract.id == id)
}

fn active(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn matches_text(contract: &Contract, needle: &str) -> bool {
    [&contract.university, &contract.program, &contract.college]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
