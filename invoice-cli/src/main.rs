//! `invoice`: compute, render and export GST tax invoices

mod commands;
mod config;
mod logger;

use clap::{Parser, Subcommand, ValueEnum};
use config::Config;
use invoice_printer::ExportFormat;
use shared::{AppError, ErrorCode};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "invoice")]
#[command(about = "GST tax invoice totals, amount in words, text and spreadsheet output")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an amount in words (Indian numbering)
    #[command(after_help = "\
Examples:
  invoice words 28743.75
  invoice words 1234567.89")]
    Words {
        /// Amount in rupees
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Print subtotal, CGST, SGST, total tax and grand total
    Totals {
        /// Invoice JSON file (sample invoice when omitted)
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,

        /// Print unrounded totals as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the invoice as fixed-width text
    Render {
        /// Invoice JSON file (sample invoice when omitted)
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,

        /// Page width in characters [env: INVOICE_PAPER_WIDTH]
        #[arg(long, short = 'w')]
        width: Option<usize>,
    },

    /// Write the invoice as a spreadsheet
    #[command(after_help = "\
Examples:
  invoice export --format xlsx
  invoice export -f invoice.json --format csv --out exports/")]
    Export {
        /// Invoice JSON file (sample invoice when omitted)
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long)]
        format: FormatArg,

        /// Output directory [env: INVOICE_OUTPUT_DIR]
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },

    /// Print the sample invoice as JSON
    Sample,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum FormatArg {
    Csv,
    Xlsx,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Xlsx => ExportFormat::Xlsx,
        }
    }
}

fn run(command: Commands, config: Config) -> anyhow::Result<()> {
    match command {
        Commands::Words { amount } => println!("{}", commands::words(amount)?),
        Commands::Totals { file, json } => {
            let invoice = commands::load_invoice(file.as_deref())?;
            print!("{}", commands::totals(&invoice, json)?);
            if json {
                println!();
            }
        }
        Commands::Render { file, width } => {
            let config = config.with_overrides(width, None);
            let invoice = commands::load_invoice(file.as_deref())?;
            print!("{}", commands::render(&invoice, config.paper_width)?);
        }
        Commands::Export { file, format, out } => {
            let config = config.with_overrides(None, out);
            let invoice = commands::load_invoice(file.as_deref())?;
            let path = commands::export_to(&invoice, format.into(), &config.output_dir)?;
            println!("{}", path.display());
        }
        Commands::Sample => println!("{}", commands::sample()?),
    }
    Ok(())
}

fn main() -> ExitCode {
    let _ = dotenv::dotenv();
    let cli = Cli::parse();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Logger is not initialized yet
            eprintln!("Error [{}]: {} {:?}", e.code, e.message, e.details.unwrap_or_default());
            return ExitCode::FAILURE;
        }
    };

    logger::init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref());
    tracing::debug!(?config, "Configuration loaded");

    match run(cli.command, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e
                .downcast_ref::<AppError>()
                .map(|app| app.code)
                .unwrap_or(ErrorCode::Unknown);
            tracing::error!(code = %code, error = %format!("{:#}", e), "Command failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
