use std::collections::HashSet;

use crate::aggregate;
use crate::models::{Contract, DateCount, Department, DepartmentView, UniversityGroup};

/// How many dates the date index lists.
pub const DATE_INDEX_LIMIT: usize = 50;

/// Contracts grouped per university, busiest university first.
pub fn universities(contracts: &[Contract]) -> Vec<UniversityGroup<'_>> {
    let mut groups: Vec<UniversityGroup<'_>> =
        aggregate::group_by(contracts, |contract| contract.university.clone())
            .into_iter()
            .map(|(university, contracts)| UniversityGroup {
                degree_count: contracts
                    .iter()
                    .map(|contract| contract.degree.as_str())
                    .collect::<HashSet<_>>()
                    .len(),
                university,
                contracts,
            })
            .collect();

    groups.sort_by(|a, b| b.contracts.len().cmp(&a.contracts.len()));
    groups
}

pub fn department(contracts: &[Contract], department: Department) -> DepartmentView<'_> {
    DepartmentView {
        department,
        contracts: contracts
            .iter()
            .filter(|contract| contract.known_department() == Some(department))
            .collect(),
    }
}

/// One view per known department; contracts under any other name are not shown.
pub fn departments(contracts: &[Contract]) -> Vec<DepartmentView<'_>> {
    Department::ALL
        .into_iter()
        .map(|dept| department(contracts, dept))
        .collect()
}

/// The department view behind a specialization key such as `health`.
pub fn specialization<'a>(contracts: &'a [Contract], key: &str) -> Option<DepartmentView<'a>> {
    Department::from_key(key).map(|dept| department(contracts, dept))
}

/// How many contracts start or end on each recorded date, newest text first.
pub fn date_index(contracts: &[Contract]) -> Vec<DateCount> {
    let raw_dates: Vec<&str> = contracts
        .iter()
        .flat_map(|contract| {
            [
                contract.contract_start.as_deref(),
                contract.contract_end.as_deref(),
            ]
        })
        .flatten()
        .filter(|date| !date.is_empty())
        .collect();

    let mut counts: Vec<DateCount> = aggregate::count_by(&raw_dates, |date| date.to_string())
        .into_iter()
        .map(|(date, count)| DateCount { date, count })
        .collect();

    // Ordered by the raw text, not the calendar.
    counts.sort_by(|a, b| b.date.cmp(&a.date));
    counts.truncate(DATE_INDEX_LIMIT);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ContractBuilder;

    #[test]
    fn universities_sorted_by_contract_count() {
        let contracts = vec![
            ContractBuilder::new(1).university("A").degree("بكالوريوس").build(),
            ContractBuilder::new(2).university("B").degree("بكالوريوس").build(),
            ContractBuilder::new(3).university("B").degree("ماجستير").build(),
            ContractBuilder::new(4).university("C").build(),
            ContractBuilder::new(5).university("B").degree("ماجستير").build(),
        ];

        let groups = universities(&contracts);
        let names: Vec<&str> = groups.iter().map(|g| g.university.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        assert_eq!(groups[0].contracts.len(), 3);
        assert_eq!(groups[0].degree_count, 2);
        assert_eq!(groups[1].degree_count, 1);
    }

    #[test]
    fn unknown_departments_are_invisible() {
        let contracts = vec![
            ContractBuilder::new(1).department(Department::Health.label()).build(),
            ContractBuilder::new(2).department("إدارة غير معروفة").build(),
            ContractBuilder::new(3).department(Department::Scientific.label()).build(),
        ];

        let views = departments(&contracts);
        assert_eq!(views.len(), 5);
        let shown: usize = views.iter().map(|view| view.contracts.len()).sum();
        assert_eq!(shown, 2);

        let health = specialization(&contracts, "health").unwrap();
        assert_eq!(health.contracts[0].id, 1);
        assert!(specialization(&contracts, "law").is_none());
    }

    #[test]
    fn date_index_counts_starts_and_ends() {
        let contracts = vec![
            ContractBuilder::new(1).start("01/15/23").end("01/14/26").build(),
            ContractBuilder::new(2).start("01/15/23").end("12/01/25").build(),
            ContractBuilder::new(3).build(),
        ];

        let index = date_index(&contracts);
        assert_eq!(
            index,
            vec![
                DateCount {
                    date: "12/01/25".into(),
                    count: 1,
                },
                DateCount {
                    date: "01/15/23".into(),
                    count: 2,
                },
                DateCount {
                    date: "01/14/26".into(),
                    count: 1,
                },
            ]
        );
    }

    #[test]
    fn date_index_is_capped() {
        let contracts: Vec<Contract> = (1..=40)
            .map(|id| {
                ContractBuilder::new(id)
                    .start(&format!("01/{:02}/23", id))
                    .end(&format!("02/{:02}/25", id))
                    .build()
            })
            .collect();

        let index = date_index(&contracts);
        assert_eq!(index.len(), DATE_INDEX_LIMIT);
        assert_eq!(index[0].date, "02/40/25");
    }
}
