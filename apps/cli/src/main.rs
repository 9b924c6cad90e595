use anyhow::Result;
use clap::Parser;
use lesson_core::{convert_file, ParserMode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Create Quizlet import files from a vocabulary export.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The input filename
    filename: String,

    /// The output prefix
    prefix: String,

    /// Accept only the double-space separator
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let mode = if args.strict {
        ParserMode::DoubleSpaceOnly
    } else {
        ParserMode::Full
    };

    convert_file(&args.filename, &args.prefix, mode)?;
    Ok(())
}
