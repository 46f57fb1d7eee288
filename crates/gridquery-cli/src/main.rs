//! Gridquery CLI - spreadsheet knowledge extraction shell

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use gridquery::prelude::*;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gq")]
#[command(
    author,
    version,
    about = "Extract SQL knowledge bases from spreadsheets with a chat-completion API"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about a spreadsheet
    Info {
        /// Input spreadsheet file (xlsx, csv)
        input: PathBuf,
    },

    /// Print a sheet region as tab-delimited prompt text
    Serialize {
        /// Input spreadsheet file (xlsx, csv)
        input: PathBuf,

        /// Sheet index (0-based, default: 0)
        #[arg(short, long, default_value = "0")]
        sheet: usize,

        /// Region in A1:B2 notation (default: the sheet's used range)
        #[arg(short, long)]
        range: Option<String>,
    },

    /// Answer a question from the canned template catalog (no model call)
    Ask {
        /// The question text
        question: String,
    },

    /// Extract a knowledge base from a spreadsheet via the model
    Extract {
        /// Input spreadsheet file (xlsx, csv)
        input: PathBuf,

        /// Output JSON file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        llm: LlmOpts,
    },

    /// Generate SQL for a question over a stored knowledge base
    Sql {
        /// Knowledge base JSON file (from `gq extract`)
        knowledge: PathBuf,

        /// The question text
        question: String,

        #[command(flatten)]
        llm: LlmOpts,
    },
}

/// Chat endpoint parameters
///
/// The API key comes from GRIDQUERY_API_KEY and is optional (local
/// OpenAI-compatible endpoints run without one).
#[derive(Args)]
struct LlmOpts {
    /// Base URL of an OpenAI-compatible API
    #[arg(long, default_value = "http://localhost:1234/v1")]
    base_url: String,

    /// Model identifier
    #[arg(long, default_value = "local-model")]
    model: String,

    /// Sampling temperature
    #[arg(long, default_value = "0.7")]
    temperature: f32,

    /// Maximum tokens to generate
    #[arg(long, default_value = "1024")]
    max_tokens: u32,
}

impl LlmOpts {
    fn into_config(self) -> LlmConfig {
        let mut config = LlmConfig::new(self.base_url, self.model)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens);
        if let Ok(key) = std::env::var("GRIDQUERY_API_KEY") {
            config = config.with_api_key(key);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info { input } => show_info(&input),
        Commands::Serialize {
            input,
            sheet,
            range,
        } => serialize(&input, sheet, range.as_deref()),
        Commands::Ask { question } => ask(&question),
        Commands::Extract { input, output, llm } => {
            extract(&input, output.as_deref(), llm.into_config()).await
        }
        Commands::Sql {
            knowledge,
            question,
            llm,
        } => sql(&knowledge, &question, llm.into_config()).await,
    }
}

fn show_info(input: &PathBuf) -> Result<()> {
    let workbook =
        Workbook::open(input).with_context(|| format!("Failed to open '{}'", input.display()))?;

    println!("File: {}", input.display());
    println!("Sheets: {}", workbook.sheet_count());

    for (i, sheet) in workbook.sheets().enumerate() {
        println!();
        println!("  Sheet {}: \"{}\"", i, sheet.name());

        match sheet.used_range() {
            Some(range) => println!("    Used range: {}", range),
            None => println!("    Used range: empty"),
        }
        println!("    Occupied cells: {}", sheet.len());
    }

    Ok(())
}

fn serialize(input: &PathBuf, sheet_idx: usize, range: Option<&str>) -> Result<()> {
    let workbook =
        Workbook::open(input).with_context(|| format!("Failed to open '{}'", input.display()))?;

    let sheet = workbook
        .sheet(sheet_idx)
        .with_context(|| format!("Sheet index {} not found", sheet_idx))?;

    let text = match range {
        Some(range) => {
            let range = CellRange::parse(range)
                .with_context(|| format!("Invalid range '{}'", range))?;
            serialize_range(sheet, &range).context("Failed to serialize range")?
        }
        None => match serialize_used_range(sheet).context("Failed to serialize sheet")? {
            Some(text) => text,
            None => {
                eprintln!("Warning: sheet appears to be empty");
                return Ok(());
            }
        },
    };

    io::stdout()
        .write_all(text.as_bytes())
        .context("Failed to write to stdout")?;

    Ok(())
}

fn ask(question: &str) -> Result<()> {
    let catalog = TemplateCatalog::default_catalog();

    match catalog.find_match(question) {
        Some(template) => {
            println!("-- {}", template.title);
            println!("{}", template.sql);
        }
        None => {
            println!("No canned template matches; try `gq sql` with an extracted knowledge base.");
        }
    }

    Ok(())
}

async fn extract(input: &PathBuf, output: Option<&std::path::Path>, config: LlmConfig) -> Result<()> {
    let workbook =
        Workbook::open(input).with_context(|| format!("Failed to open '{}'", input.display()))?;

    let extractor = KnowledgeExtractor::new(HttpChatClient::new(config));
    let kb = extractor
        .extract(&workbook)
        .await
        .context("Knowledge extraction failed")?;

    if kb.is_empty() {
        eprintln!("Warning: the model returned an empty knowledge base");
    }

    let json = serde_json::to_string_pretty(&kb)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, &json)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!(
            "Wrote {} tables, {} rules, {} scenarios to '{}'",
            kb.tables.len(),
            kb.rules.len(),
            kb.scenarios.len(),
            output_path.display()
        );
    } else {
        println!("{}", json);
    }

    Ok(())
}

async fn sql(knowledge: &PathBuf, question: &str, config: LlmConfig) -> Result<()> {
    let json = std::fs::read_to_string(knowledge)
        .with_context(|| format!("Failed to read '{}'", knowledge.display()))?;
    let kb: KnowledgeBase =
        serde_json::from_str(&json).context("Knowledge base file is not valid")?;

    if kb.tables.is_empty() {
        bail!("Knowledge base has no tables; re-run `gq extract` first");
    }

    let generator = SqlGenerator::new(HttpChatClient::new(config));
    let queries = generator
        .generate(&kb, question)
        .await
        .context("SQL generation failed")?;

    for query in &queries {
        println!("-- {}", query.title);
        if !query.explanation.is_empty() {
            println!("-- {}", query.explanation);
        }
        println!("{}", query.sql);
        println!();
    }

    Ok(())
}
