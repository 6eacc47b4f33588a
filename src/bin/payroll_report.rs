use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand, ValueEnum};
use fractic_payroll_dashboard::{
    config::DashboardConfig,
    entities::{KpiMonth, PayrollReport},
    errors::{InvalidPayrollPeriod, ReadError},
    util::{export_salary_csv, payroll_report_from_json, render_salary_table, PayrollDashboardUtil},
};
use fractic_server_error::{CriticalError, ServerError};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "payroll-report", about = "Payroll and accounting dashboard reports")]
struct Cli {
    /// RON file with the upstream API settings.
    #[arg(short, long, global = true, default_value = "dashboard.ron")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Per-employee salaries and contributions for one month.
    Salaries {
        /// Month as YYYYMM.
        #[arg(short, long, required_unless_present = "input")]
        period: Option<String>,

        /// Read a saved `{"rawData": ...}` payload instead of calling the API.
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Treasury, breakdowns and fiscal years as JSON.
    Dashboard {
        #[arg(long)]
        fiscal_year: Option<String>,
    },
    /// Monthly KPIs as JSON.
    Kpis {
        /// Month as YYYY-MM.
        month: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, ServerError> {
    match cli.command {
        Command::Salaries {
            period,
            input,
            format,
        } => {
            let report = match (input, period) {
                (Some(input), period) => {
                    if period.is_some() {
                        tracing::warn!("--period is ignored when --input is given");
                    }
                    let json = tokio::fs::read_to_string(&input)
                        .await
                        .map_err(|e| ReadError::with_debug(&e))?;
                    payroll_report_from_json(&json)?
                }
                (None, Some(period)) => {
                    let util = connect(&cli.config).await?;
                    util.employee_salaries(period.parse()?).await?.0
                }
                (None, None) => return Err(InvalidPayrollPeriod::new("")),
            };
            render(&report, format)
        }
        Command::Dashboard { fiscal_year } => {
            let util = connect(&cli.config).await?;
            let snapshot = util.dashboard_snapshot(fiscal_year.as_deref()).await?;
            to_json(&snapshot)
        }
        Command::Kpis { month } => {
            let month: KpiMonth = month.parse()?;
            let util = connect(&cli.config).await?;
            to_json(&util.kpis(month).await?)
        }
    }
}

async fn connect(config_path: &Path) -> Result<PayrollDashboardUtil, ServerError> {
    let config = DashboardConfig::from_file(config_path).await?;
    PayrollDashboardUtil::new(&config)
}

fn render(report: &PayrollReport, format: OutputFormat) -> Result<String, ServerError> {
    match format {
        OutputFormat::Table => Ok(render_salary_table(report)),
        OutputFormat::Csv => export_salary_csv(&report.records),
        OutputFormat::Json => to_json(report),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ServerError> {
    serde_json::to_string_pretty(value)
        .map(|s| s + "\n")
        .map_err(|e| CriticalError::with_debug("failed to serialize output", &e))
}
