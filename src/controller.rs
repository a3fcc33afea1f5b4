//! Host-side dashboard state and the action dispatch table.
//!
//! The engine modules are pure; everything that changes while a user clicks
//! around (active tab, filter criteria, current page) lives on [`Dashboard`].

use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::UnknownAction;
use crate::expiry::{self, ExpiryPartition};
use crate::filter::{self, Matcher};
use crate::models::{Contract, Criteria, DateCount, DepartmentView, Summary, UniversityGroup};
use crate::stats;
use crate::views;

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Pages shown on each side of the current page before an ellipsis.
const PAGE_WINDOW: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tab {
    Overview,
    Contracts,
    Dates,
    Expiry,
    Universities,
    Departments,
    Specializations,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Overview,
        Tab::Contracts,
        Tab::Dates,
        Tab::Expiry,
        Tab::Universities,
        Tab::Departments,
        Tab::Specializations,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Contracts => "contracts",
            Tab::Dates => "dates",
            Tab::Expiry => "expiry",
            Tab::Universities => "universities",
            Tab::Departments => "departments",
            Tab::Specializations => "specializations",
        }
    }
}

impl FromStr for Tab {
    type Err = UnknownAction;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.name() == name)
            .ok_or_else(|| UnknownAction(format!("switchTab:{name}")))
    }
}

/// A user interaction, named the way the dashboard's controls name it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SwitchTab(Tab),
    ApplyFilters(Criteria),
    ChangePage(usize),
    SearchByDate(NaiveDate),
    ShowAllDates,
    FilterUniversities(String),
    ShowSpecializationDetails(String),
    ShowContractDetails(i64),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SwitchTab(_) => "switchTab",
            Action::ApplyFilters(_) => "applyFilters",
            Action::ChangePage(_) => "changePage",
            Action::SearchByDate(_) => "searchByDate",
            Action::ShowAllDates => "showAllDates",
            Action::FilterUniversities(_) => "filterUniversities",
            Action::ShowSpecializationDetails(_) => "showSpecializationDetails",
            Action::ShowContractDetails(_) => "showContractDetails",
        }
    }
}

/// Parses `name` or `name:argument`, e.g. `changePage:3` or `searchByDate:2025-06-30`.
impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (name, argument) = match input.split_once(':') {
            Some((name, argument)) => (name, argument),
            None => (input, ""),
        };
        let unknown = || UnknownAction(input.to_string());

        match name {
            "switchTab" => argument.parse().map(Action::SwitchTab),
            "applyFilters" => parse_criteria(argument)
                .map(Action::ApplyFilters)
                .ok_or_else(unknown),
            "changePage" => argument.parse().map(Action::ChangePage).map_err(|_| unknown()),
            "searchByDate" => crate::dates::parse_input_date(argument)
                .map(Action::SearchByDate)
                .ok_or_else(unknown),
            "showAllDates" => Ok(Action::ShowAllDates),
            "filterUniversities" => Ok(Action::FilterUniversities(argument.to_string())),
            "showSpecializationDetails" => {
                Ok(Action::ShowSpecializationDetails(argument.to_string()))
            }
            "showContractDetails" => argument
                .parse()
                .map(Action::ShowContractDetails)
                .map_err(|_| unknown()),
            _ => Err(unknown()),
        }
    }
}

/// Reads `text=..;degree=..;status=..` (any subset, any order). A bare argument
/// without `=` is taken as the search text.
fn parse_criteria(argument: &str) -> Option<Criteria> {
    let mut criteria = Criteria::default();
    if !argument.contains('=') {
        criteria.text = Some(argument.to_string()).filter(|text| !text.is_empty());
        return Some(criteria);
    }

    for pair in argument.split(';').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=')?;
        let value = Some(value.to_string()).filter(|value| !value.is_empty());
        match key {
            "text" => criteria.text = value,
            "degree" => criteria.degree = value,
            "status" => criteria.document_status = value,
            _ => return None,
        }
    }
    Some(criteria)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PageButton {
    Previous(usize),
    Page { number: usize, active: bool },
    Ellipsis,
    Next(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a> {
    pub number: usize,
    pub total_pages: usize,
    /// One-based position of the first row within the filtered list.
    pub first_row: usize,
    pub rows: Vec<&'a Contract>,
    pub buttons: Vec<PageButton>,
}

/// What the rendering layer has to redraw after an action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ViewUpdate<'a> {
    Tab {
        tab: Tab,
    },
    Contracts {
        page: Page<'a>,
    },
    DateResults {
        date: NaiveDate,
        contracts: Vec<&'a Contract>,
    },
    DateIndex {
        dates: Vec<DateCount>,
    },
    Universities {
        groups: Vec<UniversityGroup<'a>>,
    },
    Specialization {
        name: &'static str,
        view: DepartmentView<'a>,
    },
    ContractDetails {
        contract: &'a Contract,
    },
    NotFound {
        action: &'static str,
    },
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    contracts: Vec<Contract>,
    criteria: Criteria,
    filtered: Vec<usize>,
    current_page: usize,
    page_size: usize,
    active_tab: Tab,
}

impl Dashboard {
    pub fn new(contracts: Vec<Contract>) -> Self {
        Self::with_page_size(contracts, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(contracts: Vec<Contract>, page_size: usize) -> Self {
        let filtered = (0..contracts.len()).collect();
        Self {
            contracts,
            criteria: Criteria::default(),
            filtered,
            current_page: 1,
            page_size: page_size.max(1),
            active_tab: Tab::Overview,
        }
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn summary(&self) -> Summary {
        stats::summarize(&self.contracts)
    }

    pub fn expiry(&self) -> ExpiryPartition<'_> {
        expiry::partition(&self.contracts)
    }

    pub fn universities(&self) -> Vec<UniversityGroup<'_>> {
        views::universities(&self.contracts)
    }

    pub fn departments(&self) -> Vec<DepartmentView<'_>> {
        views::departments(&self.contracts)
    }

    pub fn filtered(&self) -> Vec<&Contract> {
        self.filtered.iter().map(|&index| &self.contracts[index]).collect()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size)
    }

    pub fn apply_filters(&mut self, criteria: Criteria) {
        let matcher = Matcher::new(&criteria);
        self.filtered = self
            .contracts
            .iter()
            .enumerate()
            .filter(|(_, contract)| matcher.matches(contract))
            .map(|(index, _)| index)
            .collect();
        debug!(matches = self.filtered.len(), "filters applied");
        self.criteria = criteria;
        self.current_page = 1;
    }

    pub fn change_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn page(&self) -> Page<'_> {
        let start = (self.current_page - 1) * self.page_size;
        let rows = self
            .filtered
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|&index| &self.contracts[index])
            .collect();

        Page {
            number: self.current_page,
            total_pages: self.total_pages(),
            first_row: start + 1,
            rows,
            buttons: page_buttons(self.current_page, self.total_pages()),
        }
    }

    pub fn dispatch(&mut self, action: Action) -> ViewUpdate<'_> {
        debug!(action = action.name(), "dispatching");
        match action {
            Action::SwitchTab(tab) => {
                self.active_tab = tab;
                ViewUpdate::Tab { tab }
            }
            Action::ApplyFilters(criteria) => {
                self.apply_filters(criteria);
                ViewUpdate::Contracts { page: self.page() }
            }
            Action::ChangePage(page) => {
                self.change_page(page);
                ViewUpdate::Contracts { page: self.page() }
            }
            Action::SearchByDate(date) => ViewUpdate::DateResults {
                date,
                contracts: filter::search_by_date(&self.contracts, date),
            },
            Action::ShowAllDates => ViewUpdate::DateIndex {
                dates: views::date_index(&self.contracts),
            },
            Action::FilterUniversities(text) => ViewUpdate::Universities {
                groups: filter::filter_universities(views::universities(&self.contracts), &text),
            },
            Action::ShowSpecializationDetails(key) => {
                match views::specialization(&self.contracts, &key) {
                    Some(view) => ViewUpdate::Specialization {
                        name: view.department.specialization_name(),
                        view,
                    },
                    None => {
                        warn!(key = %key, "unknown specialization");
                        ViewUpdate::NotFound {
                            action: "showSpecializationDetails",
                        }
                    }
                }
            }
            Action::ShowContractDetails(id) => match filter::find_by_id(&self.contracts, id) {
                Some(contract) => ViewUpdate::ContractDetails { contract },
                None => {
                    warn!(id, "contract not found");
                    ViewUpdate::NotFound {
                        action: "showContractDetails",
                    }
                }
            },
        }
    }
}

/// Pagination controls: first, last and current±2 pages, with an ellipsis at current±3.
pub fn page_buttons(current: usize, total_pages: usize) -> Vec<PageButton> {
    let mut buttons = Vec::new();

    if current > 1 {
        buttons.push(PageButton::Previous(current - 1));
    }

    for number in 1..=total_pages {
        let near = number + PAGE_WINDOW >= current && number <= current + PAGE_WINDOW;
        if number == 1 || number == total_pages || near {
            buttons.push(PageButton::Page {
                number,
                active: number == current,
            });
        } else if number + PAGE_WINDOW + 1 == current || number == current + PAGE_WINDOW + 1 {
            buttons.push(PageButton::Ellipsis);
        }
    }

    if current < total_pages {
        buttons.push(PageButton::Next(current + 1));
    }

    buttons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ContractBuilder;
    use pretty_assertions::assert_eq;

    fn dashboard(count: i64) -> Dashboard {
        let contracts = (1..=count)
            .map(|id| {
                let university = if id % 2 == 0 { "جامعة طيبة" } else { "جامعة القصيم" };
                ContractBuilder::new(id).university(university).build()
            })
            .collect();
        Dashboard::new(contracts)
    }

    fn numbers(buttons: &[PageButton]) -> Vec<String> {
        buttons
            .iter()
            .map(|button| match button {
                PageButton::Previous(_) => "<".to_string(),
                PageButton::Next(_) => ">".to_string(),
                PageButton::Ellipsis => "...".to_string(),
                PageButton::Page { number, active: true } => format!("[{number}]"),
                PageButton::Page { number, .. } => number.to_string(),
            })
            .collect()
    }

    #[test]
    fn page_window_collapses_far_pages() {
        assert_eq!(
            numbers(&page_buttons(1, 10)),
            vec!["[1]", "2", "3", "...", "10", ">"]
        );
        assert_eq!(
            numbers(&page_buttons(6, 10)),
            vec!["<", "1", "...", "4", "5", "[6]", "7", "8", "...", "10", ">"]
        );
        assert_eq!(
            numbers(&page_buttons(10, 10)),
            vec!["<", "1", "...", "8", "9", "[10]"]
        );
        assert_eq!(numbers(&page_buttons(1, 1)), vec!["[1]"]);
        assert!(page_buttons(1, 0).is_empty());
    }

    #[test]
    fn pages_slice_the_filtered_list() {
        let mut board = dashboard(45);
        assert_eq!(board.total_pages(), 3);

        let first = board.page();
        assert_eq!(first.rows.len(), 20);
        assert_eq!(first.first_row, 1);

        board.change_page(3);
        let last = board.page();
        assert_eq!(last.rows.len(), 5);
        assert_eq!(last.first_row, 41);
        assert_eq!(last.rows[0].id, 41);

        board.change_page(99);
        assert_eq!(board.current_page(), 3);
        board.change_page(0);
        assert_eq!(board.current_page(), 1);
    }

    #[test]
    fn filtering_resets_to_first_page() {
        let mut board = dashboard(45);
        board.change_page(2);

        let update = board.dispatch(Action::ApplyFilters(Criteria {
            text: Some("طيبة".into()),
            ..Criteria::default()
        }));
        let ViewUpdate::Contracts { page } = update else {
            panic!("expected contracts page");
        };
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 2);
        assert!(page.rows.iter().all(|contract| contract.id % 2 == 0));
        assert_eq!(board.filtered().len(), 22);
        assert_eq!(board.criteria().text.as_deref(), Some("طيبة"));
    }

    #[test]
    fn empty_dashboard_has_one_empty_page() {
        let mut board = Dashboard::new(Vec::new());
        board.change_page(4);
        let page = board.page();
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.rows.is_empty());
        assert_eq!(board.summary(), Summary::default());
    }

    #[test]
    fn unknown_contract_is_reported_not_found() {
        let mut board = dashboard(3);
        assert!(matches!(
            board.dispatch(Action::ShowContractDetails(2)),
            ViewUpdate::ContractDetails { contract } if contract.id == 2
        ));
        assert_eq!(
            board.dispatch(Action::ShowContractDetails(42)),
            ViewUpdate::NotFound {
                action: "showContractDetails"
            }
        );
    }

    #[test]
    fn specialization_and_university_actions() {
        let mut board = dashboard(4);
        match board.dispatch(Action::ShowSpecializationDetails("engineering".into())) {
            ViewUpdate::Specialization { name, view } => {
                assert_eq!(name, "التخصصات الهندسية وعلوم الحاسب");
                assert_eq!(view.contracts.len(), 4);
            }
            other => panic!("unexpected update: {other:?}"),
        }

        match board.dispatch(Action::FilterUniversities("القصيم".into())) {
            ViewUpdate::Universities { groups } => {
                assert_eq!(groups.len(), 1);
                assert_eq!(groups[0].contracts.len(), 2);
            }
            other => panic!("unexpected update: {other:?}"),
        }
    }

    #[test]
    fn actions_parse_from_their_names() {
        assert_eq!("changePage:3".parse::<Action>(), Ok(Action::ChangePage(3)));
        assert_eq!("showAllDates".parse::<Action>(), Ok(Action::ShowAllDates));
        assert_eq!(
            "switchTab:expiry".parse::<Action>(),
            Ok(Action::SwitchTab(Tab::Expiry))
        );
        assert_eq!(
            "searchByDate:2025-06-30".parse::<Action>(),
            Ok(Action::SearchByDate(
                NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
            ))
        );
        assert_eq!(
            "closeEverything".parse::<Action>(),
            Err(UnknownAction("closeEverything".into()))
        );
        assert!("changePage:two".parse::<Action>().is_err());
        assert_eq!(Action::ShowContractDetails(1).name(), "showContractDetails");
    }

    #[test]
    fn apply_filters_action_carries_every_criterion() {
        assert_eq!(
            "applyFilters:text=king;degree=BSc;status=تم التسليم".parse::<Action>(),
            Ok(Action::ApplyFilters(Criteria {
                text: Some("king".into()),
                degree: Some("BSc".into()),
                document_status: Some("تم التسليم".into()),
            }))
        );
        assert_eq!(
            "applyFilters:degree=MSc".parse::<Action>(),
            Ok(Action::ApplyFilters(Criteria {
                degree: Some("MSc".into()),
                ..Criteria::default()
            }))
        );
        assert_eq!(
            "applyFilters:طيبة".parse::<Action>(),
            Ok(Action::ApplyFilters(Criteria {
                text: Some("طيبة".into()),
                ..Criteria::default()
            }))
        );
        assert_eq!(
            "applyFilters".parse::<Action>(),
            Ok(Action::ApplyFilters(Criteria::default()))
        );
        assert!("applyFilters:college=Science".parse::<Action>().is_err());
        assert!("applyFilters:text=a;degree".parse::<Action>().is_err());

        let mut board = dashboard(6);
        let action = "applyFilters:text=طيبة;degree=بكالوريوس".parse::<Action>().unwrap();
        let ViewUpdate::Contracts { page } = board.dispatch(action) else {
            panic!("expected contracts page");
        };
        let ids: Vec<i64> = page.rows.iter().map(|contract| contract.id).collect();
        assert_eq!(ids, vec![2, 4, 6]);
    }

    #[test]
    fn switching_tabs_updates_state() {
        let mut board = dashboard(1);
        assert_eq!(board.active_tab(), Tab::Overview);
        board.dispatch(Action::SwitchTab(Tab::Universities));
        assert_eq!(board.active_tab(), Tab::Universities);
    }
}
