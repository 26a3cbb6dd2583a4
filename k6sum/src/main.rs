use clap::Parser;
use k6sum::config::SummaryConfig;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "k6sum", version, about = "Summarize k6 JSON results as a markdown report")]
struct Args {
    /// Newline-delimited JSON written by `k6 run --out json=<file>`
    path: PathBuf,
}

fn main() {
    let args = Args::parse();
    k6sum::logging::init_tracing();

    let summary = k6sum::summarize(&args.path, &SummaryConfig::default()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(e.exit_code());
    });

    println!("{summary}");
}
