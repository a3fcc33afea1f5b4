use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use contract_dashboard::controller::{Action, Dashboard, ViewUpdate, DEFAULT_PAGE_SIZE};
use contract_dashboard::models::Criteria;
use contract_dashboard::{dates, loader, report};

#[derive(Parser)]
#[command(name = "contract-dashboard")]
#[command(about = "Accreditation contract dashboard over a static record file", long_about = None)]
struct Cli {
    /// Contract records as a .json array or a .csv file with a header row
    #[arg(long, env = "CONTRACTS_DATA", global = true)]
    data: Option<PathBuf>,
    #[arg(long, env = "DASHBOARD_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE, global = true)]
    page_size: usize,
    /// Emit logs as JSON lines on stderr
    #[arg(long, env = "DASHBOARD_LOG_JSON", global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print headline statistics and distributions
    Summary {
        #[arg(long)]
        json: bool,
    },
    /// List contracts a page at a time, optionally filtered
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        degree: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Contracts grouped by expiry window
    Expiry,
    /// Contracts grouped by university
    Universities {
        #[arg(long)]
        search: Option<String>,
    },
    /// Contracts per department
    Departments,
    /// Contracts for one specialization (engineering, health, humanities, islamic, scientific)
    Specialization { key: String },
    /// Contracts starting or ending on a date, or every recorded date
    Dates {
        /// YYYY-MM-DD or MM/DD/YY
        #[arg(long)]
        on: Option<String>,
    },
    /// Details for a single contract
    Show { id: i64 },
    /// Run a named dashboard action such as `changePage:2`, `switchTab:expiry`
    /// or `applyFilters:text=..;degree=..;status=..`
    Action { name: String },
    /// Write the full markdown dashboard
    Report {
        #[arg(long, default_value = "dashboard.md")]
        out: PathBuf,
    },
}

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let data = cli
        .data
        .context("CONTRACTS_DATA or --data must point at a contract record file")?;
    let contracts = loader::load_path(&data)
        .with_context(|| format!("failed to load contracts from {}", data.display()))?;
    let mut dashboard = Dashboard::with_page_size(contracts, cli.page_size);

    match cli.command {
        Commands::Summary { json } => {
            let summary = dashboard.summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", report::render_summary(&summary));
            }
        }
        Commands::List {
            search,
            degree,
            status,
            page,
        } => {
            dashboard.dispatch(Action::ApplyFilters(Criteria {
                text: search,
                degree,
                document_status: status,
            }));
            if let ViewUpdate::Contracts { page } = dashboard.dispatch(Action::ChangePage(page)) {
                print!("{}", report::render_page(&page));
            }
        }
        Commands::Expiry => {
            print!("{}", report::render_expiry(&dashboard.expiry()));
        }
        Commands::Universities { search } => {
            let action = Action::FilterUniversities(search.unwrap_or_default());
            if let ViewUpdate::Universities { groups } = dashboard.dispatch(action) {
                print!("{}", report::render_universities(&groups));
            }
        }
        Commands::Departments => {
            print!("{}", report::render_departments(&dashboard.departments()));
        }
        Commands::Specialization { key } => {
            print_update(dashboard.dispatch(Action::ShowSpecializationDetails(key)));
        }
        Commands::Dates { on } => {
            let action = match on {
                Some(text) => {
                    let date = dates::parse_input_date(&text)
                        .or_else(|| dates::parse_date(&text))
                        .with_context(|| format!("unrecognized date: {text}"))?;
                    Action::SearchByDate(date)
                }
                None => Action::ShowAllDates,
            };
            print_update(dashboard.dispatch(action));
        }
        Commands::Show { id } => {
            print_update(dashboard.dispatch(Action::ShowContractDetails(id)));
        }
        Commands::Action { name } => {
            let action: Action = name.parse()?;
            print_update(dashboard.dispatch(action));
        }
        Commands::Report { out } => {
            let output = report::build_report(
                &dashboard.summary(),
                &dashboard.expiry(),
                &dashboard.universities(),
                &dashboard.departments(),
            );
            std::fs::write(&out, output)?;
            info!(path = %out.display(), "report written");
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}

fn print_update(update: ViewUpdate<'_>) {
    match update {
        ViewUpdate::Tab { tab } => println!("Active tab: {}", tab.name()),
        ViewUpdate::Contracts { page } => print!("{}", report::render_page(&page)),
        ViewUpdate::DateResults { date, contracts } => {
            print!("{}", report::render_date_results(date, &contracts))
        }
        ViewUpdate::DateIndex { dates } => print!("{}", report::render_date_index(&dates)),
        ViewUpdate::Universities { groups } => {
            print!("{}", report::render_universities(&groups))
        }
        ViewUpdate::Specialization { name, view } => {
            print!("{}", report::render_department(&view, name))
        }
        ViewUpdate::ContractDetails { contract } => print!("{}", report::render_contract(contract)),
        ViewUpdate::NotFound { action } => println!("Nothing found for {action}."),
    }
}

