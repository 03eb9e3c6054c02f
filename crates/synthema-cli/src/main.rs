mod config;
mod logging;
mod survey;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use jsonschema::JSONSchema;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::Value;
use synthema_core::{GenerationError, SchemaGenerator};
use thiserror::Error;
use tracing::info;

use config::load_options;
use logging::init_logging;
use survey::survey_dir;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("config encoding error: {0}")]
    ConfigEncode(#[from] toml::ser::Error),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("schema cannot be compiled for validation: {0}")]
    Validator(String),
    #[error("sample {index} failed validation: {}", .messages.join("; "))]
    Validation { index: u64, messages: Vec<String> },
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "synthema", version, about = "Generate sample values from JSON Schemas")]
struct Cli {
    /// Log output format (level comes from RUST_LOG).
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print samples generated from a schema file.
    Sample(SampleArgs),
    /// Try every schema in a directory and tally the outcomes.
    Survey(SurveyArgs),
    /// Print the effective generation options as TOML.
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
struct SampleArgs {
    /// Path to a JSON Schema document.
    #[arg(value_name = "SCHEMA")]
    schema: PathBuf,
    /// Number of samples to print.
    #[arg(long, short = 'n', default_value_t = 1)]
    count: u64,
    /// Seed for reproducible output; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// TOML file with generation options.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Validate every sample against the schema.
    #[arg(long, default_value_t = false)]
    validate: bool,
    /// Pretty-print each sample.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct SurveyArgs {
    /// Directory containing `*.json` schemas.
    #[arg(value_name = "DIR")]
    dir: PathBuf,
    /// Seed for reproducible output; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// TOML file with generation options.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// TOML file to merge over the defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_format)?;

    match cli.command {
        Command::Sample(args) => run_sample(args),
        Command::Survey(args) => run_survey(args),
        Command::Config(args) => run_config(args),
    }
}

fn run_sample(args: SampleArgs) -> Result<(), CliError> {
    let SampleArgs {
        schema,
        count,
        seed,
        config,
        validate,
        pretty,
    } = args;

    let generator = SchemaGenerator::new(load_options(config.as_deref())?);
    let schema_path = schema;
    let schema = read_schema(&schema_path)?;
    let validator = if validate {
        Some(compile_validator(&schema)?)
    } else {
        None
    };
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    info!(
        schema = %schema_path.display(),
        count,
        seed,
        validate,
        "sampling started"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for index in 0..count {
        let value = generator.generate(&schema, &mut rng)?;
        if let Some(validator) = &validator {
            ensure_valid(validator, &value, index)?;
        }
        let line = if pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    info!(count, "sampling completed");
    Ok(())
}

fn run_survey(args: SurveyArgs) -> Result<(), CliError> {
    let generator = SchemaGenerator::new(load_options(args.config.as_deref())?);
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    info!(dir = %args.dir.display(), seed, "survey started");
    let report = survey_dir(&args.dir, &generator, &mut rng)?;
    info!(
        total = report.total,
        success = report.success,
        invalid = report.invalid,
        "survey completed"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_config(args: ConfigArgs) -> Result<(), CliError> {
    let options = load_options(args.config.as_deref())?;
    print!("{}", toml::to_string_pretty(&options)?);
    Ok(())
}

pub(crate) fn read_schema(path: &Path) -> Result<Value, CliError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

pub(crate) fn compile_validator(schema: &Value) -> Result<JSONSchema, CliError> {
    JSONSchema::compile(schema).map_err(|err| CliError::Validator(err.to_string()))
}

pub(crate) fn validation_errors(validator: &JSONSchema, value: &Value) -> Vec<String> {
    match validator.validate(value) {
        Ok(()) => Vec::new(),
        Err(errors) => errors.map(|err| err.to_string()).collect(),
    }
}

fn ensure_valid(validator: &JSONSchema, value: &Value, index: u64) -> Result<(), CliError> {
    let messages = validation_errors(validator, value);
    if messages.is_empty() {
        Ok(())
    } else {
        Err(CliError::Validation { index, messages })
    }
}
