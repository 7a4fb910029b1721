use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use mortgage_predictor::config::AppConfig;
use mortgage_predictor::error::AppError;
use mortgage_predictor::screening::{
    AssessmentView, EstimationEngine, MortgageApplication, ScoringRubric, StatementPeriod,
};
use mortgage_predictor::statements::{template_csv, StatementImporter};
use mortgage_predictor::telemetry;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Self-Employed Mortgage Approval Predictor",
    about = "Estimate approval likelihood and affordable home price from self-reported figures",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an assessment for a completed application file
    Estimate(EstimateArgs),
    /// Work with bank-statement CSV exports
    Statements {
        #[command(subcommand)]
        command: StatementsCommand,
    },
}

#[derive(Args, Debug)]
struct EstimateArgs {
    /// Application snapshot (JSON)
    #[arg(long)]
    application: PathBuf,
    /// Replace the application's revenue history with a statement CSV export
    #[arg(long)]
    statements: Option<PathBuf>,
    /// Assessment date stamped on the report (defaults to today)
    #[arg(long, value_parser = parse_date)]
    as_of: Option<NaiveDate>,
    /// Include the per-factor point breakdown
    #[arg(long)]
    breakdown: bool,
}

#[derive(Subcommand, Debug)]
enum StatementsCommand {
    /// Produce a blank deposit template for one statement period
    Template(TemplateArgs),
}

#[derive(Args, Debug)]
struct TemplateArgs {
    /// Months the template should cover (12 or 24)
    #[arg(long, default_value = "12", value_parser = parse_period)]
    months: StatementPeriod,
    /// Write the template here instead of printing it
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Estimate(args) => run_estimate(args),
        Command::Statements {
            command: StatementsCommand::Template(args),
        } => run_template(args),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn parse_period(raw: &str) -> Result<StatementPeriod, String> {
    match raw.trim() {
        "12" => Ok(StatementPeriod::TwelveMonths),
        "24" => Ok(StatementPeriod::TwentyFourMonths),
        other => Err(format!("statement period must be 12 or 24, got '{other}'")),
    }
}

fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let EstimateArgs {
        application: application_path,
        statements,
        as_of,
        breakdown,
    } = args;

    let raw = fs::read_to_string(&application_path)?;
    let mut application: MortgageApplication = serde_json::from_str(&raw)?;

    if let Some(path) = statements {
        application.monthly_revenue = StatementImporter::from_path(path)?;
    }

    let engine = EstimationEngine::new(ScoringRubric::default());
    let outcome = engine.estimate(&application)?;
    let view = AssessmentView::from_outcome(
        &outcome,
        application.loan_type,
        application.statement_period,
    );

    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    render_assessment(&view, as_of, breakdown);

    info!(score = outcome.approval_score, "assessment complete");
    Ok(())
}

fn run_template(args: TemplateArgs) -> Result<(), AppError> {
    let TemplateArgs { months, out } = args;
    let template = template_csv(months);

    match out {
        Some(path) => {
            fs::write(&path, template)?;
            info!(path = %path.display(), "statement template written");
        }
        None => print!("{template}"),
    }

    Ok(())
}

fn render_assessment(view: &AssessmentView, as_of: NaiveDate, breakdown: bool) {
    println!("Mortgage assessment");
    println!(
        "Loan type: {} | statements: {} | evaluated {}",
        view.loan_type_label, view.statement_period_label, as_of
    );

    println!(
        "\nApproval likelihood: {}% ({})",
        view.approval_score, view.outlook_label
    );
    println!("Average monthly revenue: {}", view.average_monthly_revenue);
    println!("Estimated max home price: {}", view.max_home_price);

    println!(
        "\nPayment capacity {} ({}), debt-to-income {}",
        view.payment_capacity, view.capacity_source_label, view.debt_to_income
    );

    if breakdown {
        println!("\nScore breakdown");
        for component in &view.components {
            println!(
                "- {}: +{} ({})",
                component.factor_label, component.points, component.notes
            );
        }
    }
}
