use clap::Parser;
use marketing_planner::normalize_markdown;
use marketing_planner::utils::logger;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "normalize-markdown")]
#[command(about = "Repair Markdown tables in generated text")]
struct Args {
    /// Input file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Leave table_json blocks and bare table objects as they are
    #[arg(long)]
    no_json_tables: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let text = match &args.input {
        Some(path) => {
            tracing::debug!("Reading {}", path.display());
            std::fs::read_to_string(path)?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let normalized = normalize_markdown(&text, !args.no_json_tables);
    tracing::debug!(
        "Normalized {} lines ({} bytes in, {} bytes out)",
        normalized.lines().count(),
        text.len(),
        normalized.len()
    );

    print!("{}", normalized);
    Ok(())
}
