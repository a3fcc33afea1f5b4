use std::fmt::Write;

use chrono::NaiveDate;

use crate::controller::{Page, PageButton};
use crate::dates;
use crate::expiry::{ExpiryPartition, REFERENCE_DATE};
use crate::models::{
    Contract, DateCount, DepartmentView, Distribution, ExpiryBucket, Summary, UniversityGroup,
};
use crate::status::status_bucket;

const NOT_DELIVERED_YET: &str = "لم يتم التسليم";
const NOT_SCHEDULED_YET: &str = "لم تتم الجدولة";

pub fn render_summary(summary: &Summary) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "## Statistics (as of {})", REFERENCE_DATE);
    let _ = writeln!(output, "- Contracts: {}", summary.total_contracts);
    let _ = writeln!(output, "- Universities: {}", summary.university_count);
    let _ = writeln!(output, "- Ended by end of 2024: {}", summary.expired_count);
    let _ = writeln!(
        output,
        "- Ending in 2025: {} ({} first half, {} second half)",
        summary.ending_2025_count, summary.first_half_2025_count, summary.second_half_2025_count
    );
    let _ = writeln!(output, "- Ending 2026 or later: {}", summary.year_2026_plus_count);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Degree Distribution");
    write_distribution(&mut output, &summary.degree_distribution);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Completion Distribution");
    write_distribution(&mut output, &summary.completion_distribution);

    output
}

fn write_distribution(output: &mut String, distribution: &Distribution) {
    if distribution.is_empty() {
        let _ = writeln!(output, "No contracts loaded.");
        return;
    }

    for entry in &distribution.entries {
        let _ = writeln!(
            output,
            "- {}: {} contracts ({:.1}%)",
            entry.label, entry.count, entry.percentage
        );
    }
}

pub fn render_expiry(partition: &ExpiryPartition<'_>) -> String {
    let mut output = String::new();

    for bucket in ExpiryBucket::ALL {
        let contracts = partition.bucket(bucket);
        let _ = writeln!(output, "## {} ({})", bucket.title(), contracts.len());
        write_cards(&mut output, contracts, "No contracts in this category.");
        let _ = writeln!(output);
    }

    output
}

pub fn render_universities(groups: &[UniversityGroup<'_>]) -> String {
    let mut output = String::new();

    if groups.is_empty() {
        let _ = writeln!(output, "No universities match.");
        return output;
    }

    for group in groups {
        let _ = writeln!(
            output,
            "## {} ({} contracts, {} degrees)",
            group.university,
            group.contracts.len(),
            group.degree_count
        );
        for contract in &group.contracts {
            let _ = writeln!(
                output,
                "- {} - {} | {} | {} -> {} | {}",
                contract.program,
                contract.degree,
                contract.college,
                display_or(contract.contract_start.as_deref(), "-"),
                display_or(contract.contract_end.as_deref(), "-"),
                contract.completion_label()
            );
        }
        let _ = writeln!(output);
    }

    output
}

pub fn render_department(view: &DepartmentView<'_>, title: &str) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "## {} ({})", title, view.contracts.len());
    write_cards(&mut output, &view.contracts, "No contracts for this department.");
    output
}

pub fn render_departments(views: &[DepartmentView<'_>]) -> String {
    views
        .iter()
        .map(|view| render_department(view, view.department.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_page(page: &Page<'_>) -> String {
    let mut output = String::new();

    if page.rows.is_empty() {
        let _ = writeln!(output, "No contracts match the current filters.");
        return output;
    }

    let _ = writeln!(
        output,
        "| # | ID | University | Program | Degree | Status | Start | End | Completion | Department |"
    );
    let _ = writeln!(output, "|---|---|---|---|---|---|---|---|---|---|");
    for (offset, contract) in page.rows.iter().enumerate() {
        let _ = writeln!(
            output,
            "| {} | {} | {} | {} | {} | {} [{}] | {} | {} | {} | {} |",
            page.first_row + offset,
            contract.id,
            contract.university,
            contract.program,
            contract.degree,
            contract.contract_status,
            status_bucket(&contract.document_status).badge_class(),
            display_or(contract.contract_start.as_deref(), "-"),
            display_or(contract.contract_end.as_deref(), "-"),
            contract.completion_label(),
            contract.department
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "Page {} of {}: {}",
        page.number,
        page.total_pages,
        pager(&page.buttons)
    );
    output
}

fn pager(buttons: &[PageButton]) -> String {
    buttons
        .iter()
        .map(|button| match button {
            PageButton::Previous(_) => "<".to_string(),
            PageButton::Next(_) => ">".to_string(),
            PageButton::Ellipsis => "...".to_string(),
            PageButton::Page { number, active: true } => format!("[{number}]"),
            PageButton::Page { number, .. } => number.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_contract(contract: &Contract) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# {} (#{})", contract.program, contract.id);
    let _ = writeln!(output, "- University: {}", contract.university);
    let _ = writeln!(output, "- College: {}", contract.college);
    let _ = writeln!(output, "- Degree: {}", contract.degree);
    let _ = writeln!(output, "- Contract status: {}", contract.contract_status);
    let _ = writeln!(
        output,
        "- Contract start: {}",
        display_or(contract.contract_start.as_deref(), "-")
    );
    let _ = writeln!(
        output,
        "- Contract end: {}",
        display_or(contract.contract_end.as_deref(), "-")
    );
    let _ = writeln!(output, "- Completion: {}", contract.completion_label());
    let _ = writeln!(
        output,
        "- Document status: {} [{}]",
        contract.document_status,
        status_bucket(&contract.document_status).badge_class()
    );
    let _ = writeln!(
        output,
        "- Documents received: {}",
        display_or(contract.document_received.as_deref(), NOT_DELIVERED_YET)
    );
    let _ = writeln!(
        output,
        "- Scheduled visit: {}",
        display_or(contract.scheduled_visit.as_deref(), NOT_SCHEDULED_YET)
    );
    let _ = writeln!(output, "- Department: {}", contract.department);
    if let Some(notes) = contract.notes.as_deref().filter(|notes| !notes.is_empty()) {
        let _ = writeln!(output, "- Notes: {}", notes);
    }

    output
}

pub fn render_date_results(date: NaiveDate, contracts: &[&Contract]) -> String {
    let mut output = String::new();

    if contracts.is_empty() {
        let _ = writeln!(output, "No contracts on {}.", date);
        return output;
    }

    let _ = writeln!(output, "## Contracts on {} ({})", date, contracts.len());
    write_cards(&mut output, contracts, "");
    output
}

pub fn render_date_index(index: &[DateCount]) -> String {
    let mut output = String::new();
    for entry in index {
        let _ = writeln!(
            output,
            "- {} ({}): {} contracts",
            entry.date,
            dates::to_input_date(&entry.date),
            entry.count
        );
    }
    output
}

/// Full markdown dashboard: statistics, expiry windows, universities and departments.
pub fn build_report(
    summary: &Summary,
    partition: &ExpiryPartition<'_>,
    universities: &[UniversityGroup<'_>],
    departments: &[DepartmentView<'_>],
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Accreditation Contracts Dashboard");
    let _ = writeln!(output);
    output.push_str(&render_summary(summary));
    let _ = writeln!(output);
    let _ = writeln!(output, "# Expiry Windows");
    output.push_str(&render_expiry(partition));
    let _ = writeln!(output, "# Universities");
    output.push_str(&render_universities(universities));
    let _ = writeln!(output, "# Departments");
    output.push_str(&render_departments(departments));

    output
}

fn write_cards(output: &mut String, contracts: &[&Contract], empty_message: &str) {
    if contracts.is_empty() {
        if !empty_message.is_empty() {
            let _ = writeln!(output, "{}", empty_message);
        }
        return;
    }

    for contract in contracts {
        let _ = writeln!(
            output,
            "- #{} {} ({}, {}) ends {} | completion {} | {}",
            contract.id,
            contract.program,
            contract.university,
            contract.degree,
            display_or(contract.contract_end.as_deref(), "-"),
            contract.completion_label(),
            status_bucket(&contract.document_status).badge_class()
        );
    }
}

fn display_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.filter(|value| !value.is_empty()).unwrap_or(fallback)
}
