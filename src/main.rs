use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::{info, warn};
use uveitis_screen::config::AppConfig;
use uveitis_screen::dates::{format_date, parse_date};
use uveitis_screen::error::AppError;
use uveitis_screen::telemetry;
use uveitis_screen::{
    evaluate, get_guideline, list_guidelines, regions, validate_answers, GuidelineDefinition,
    GuidelineKey, PatientRecord, Region, RiskResult,
};

#[derive(Parser, Debug)]
#[command(
    name = "uveitis-screen",
    about = "Assess uveitis screening risk for JIA patients against regional guidelines",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the supported regions and the guideline each applies (default command)
    Regions(ListArgs),
    /// List the guidelines with their questions and answer options
    Guidelines(ListArgs),
    /// Assess one patient against a region's guideline
    Assess(AssessArgs),
}

#[derive(Args, Debug, Default)]
struct ListArgs {
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// Region selector value or label (e.g. "slovakia", "UK"); defaults to APP_DEFAULT_REGION
    #[arg(long, conflicts_with = "guideline")]
    region: Option<String>,
    /// Guideline key (e.g. "czech_slovak") instead of a region
    #[arg(long)]
    guideline: Option<GuidelineKey>,
    /// Patient record as JSON (camelCase fields) instead of answer flags
    #[arg(long, conflicts_with_all = ["dob", "diagnosed", "sub_diagnosis"])]
    input: Option<PathBuf>,
    /// Date of birth (DD/MM/YYYY)
    #[arg(long)]
    dob: Option<String>,
    /// Date of diagnosis (DD/MM/YYYY)
    #[arg(long)]
    diagnosed: Option<String>,
    /// Sub-diagnosis exactly as listed by the guideline
    #[arg(long)]
    sub_diagnosis: Option<String>,
    /// Antinuclear antibody positive
    #[arg(long)]
    ana_positive: bool,
    /// Currently on methotrexate
    #[arg(long)]
    methotrexate: bool,
    /// Biological treatment exactly as listed by the guideline
    #[arg(long)]
    biological: Option<String>,
    /// Assessment date (DD/MM/YYYY); defaults to APP_REFERENCE_DATE, then today
    #[arg(long, value_parser = parse_cli_date)]
    today: Option<NaiveDate>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AssessmentResponse<'a> {
    guideline: GuidelineKey,
    guideline_name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<&'static str>,
    assessed_on: String,
    inputs: &'a PatientRecord,
    result: &'a RiskResult,
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
    info!(environment = ?config.environment, "uveitis-screen starting");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Regions(ListArgs::default()));

    match command {
        Command::Regions(args) => print_regions(args),
        Command::Guidelines(args) => print_guidelines(args),
        Command::Assess(args) => run_assessment(args, &config),
    }
}

fn parse_cli_date(raw: &str) -> Result<NaiveDate, String> {
    parse_date(raw.trim()).ok_or_else(|| format!("failed to parse '{raw}' as DD/MM/YYYY"))
}

fn print_regions(args: ListArgs) -> Result<(), AppError> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(regions())?);
        return Ok(());
    }

    println!("Supported regions");
    for region in regions() {
        let definition = get_guideline(region.guideline).definition();
        println!("- {} [{}]: {}", region.label, region.value, definition.name);
    }
    Ok(())
}

fn print_guidelines(args: ListArgs) -> Result<(), AppError> {
    let definitions: Vec<&GuidelineDefinition> = list_guidelines()
        .into_iter()
        .map(|summary| get_guideline(summary.key).definition())
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&definitions)?);
        return Ok(());
    }

    for definition in definitions {
        print!("{}", describe_guideline(definition));
    }
    Ok(())
}

fn describe_guideline(definition: &GuidelineDefinition) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", definition.name, definition.key);
    if let Some(max_age) = definition.max_age {
        let _ = writeln!(out, "  applies until {max_age} years of age");
    }
    let questions: Vec<_> = definition
        .questions
        .iter()
        .map(|question| question.label())
        .collect();
    let _ = writeln!(out, "  questions: {}", questions.join(", "));
    let _ = writeln!(
        out,
        "  sub-diagnoses: {}",
        definition.sub_diagnosis_options.join(", ")
    );
    if let Some(options) = definition.biological_treatment_options {
        let _ = writeln!(out, "  biological treatments: {}", options.join(", "));
    }
    out
}

fn run_assessment(args: AssessArgs, config: &AppConfig) -> Result<(), AppError> {
    let (key, region) = resolve_selection(&args, config)?;
    let definition = get_guideline(key).definition();
    let today = args
        .today
        .unwrap_or_else(|| config.assessment.today_or(Local::now().date_naive()));

    let record = match &args.input {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str(&raw)?
        }
        None => record_from_args(&args),
    };

    if let Err(err) = validate_answers(definition, &record, today) {
        warn!(guideline = %key, error = %err, "assessment rejected at intake");
        return Err(err.into());
    }

    let result = evaluate(key, &record, today);
    info!(
        guideline = %key,
        risk_level = %result.risk_level,
        assessed_on = %today,
        "assessment complete"
    );

    if args.json {
        let response = AssessmentResponse {
            guideline: key,
            guideline_name: definition.name,
            region: region.map(|region| region.value),
            assessed_on: format_date(today),
            inputs: &record,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render_assessment(definition, &record, &result, today));
    }
    Ok(())
}

fn resolve_selection(
    args: &AssessArgs,
    config: &AppConfig,
) -> Result<(GuidelineKey, Option<&'static Region>), AppError> {
    if let Some(key) = args.guideline {
        return Ok((key, None));
    }

    let selector = args
        .region
        .as_deref()
        .or(config.assessment.default_region.as_deref())
        .ok_or_else(|| {
            AppError::Usage(
                "no region selected: pass --region or --guideline, or set APP_DEFAULT_REGION"
                    .to_string(),
            )
        })?;
    let region = Region::from_value(selector)?;
    Ok((region.guideline, Some(region)))
}

fn record_from_args(args: &AssessArgs) -> PatientRecord {
    PatientRecord {
        date_of_birth: args.dob.clone().unwrap_or_default(),
        date_of_diagnosis: args.diagnosed.clone().unwrap_or_default(),
        sub_diagnosis: args.sub_diagnosis.clone().unwrap_or_default(),
        ana_positive: args.ana_positive,
        on_methotrexate: args.methotrexate,
        biological_treatment: args.biological.clone(),
    }
}

fn render_assessment(
    definition: &GuidelineDefinition,
    record: &PatientRecord,
    result: &RiskResult,
    today: NaiveDate,
) -> String {
    let or_na = |value: &str| {
        if value.is_empty() {
            "N/A".to_string()
        } else {
            value.to_string()
        }
    };

    let mut out = String::new();
    let _ = writeln!(out, "{} (assessed {})", definition.name, format_date(today));
    let _ = writeln!(out, "\nRisk level: {}", result.risk_level);
    let _ = writeln!(out, "Recommendation: {}", or_na(&result.recommendation));
    let _ = writeln!(out, "Follow up: {}", or_na(&result.followup));
    let _ = writeln!(out, "Justification: {}", or_na(&result.justification));

    let _ = writeln!(out, "\nInput summary");
    for (idx, question) in definition.questions.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {}: {}",
            idx + 1,
            question.label(),
            record.display_answer(*question)
        );
    }
    out
}
