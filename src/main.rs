// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging and build the validated config
// 3. Run the checker over the whole sheet
// 4. Exit with proper code (0 = saved, 1 = anything went wrong)
//
// The runtime is single-threaded: rows are checked one after another,
// never in parallel.
// =============================================================================

mod checker;  // src/checker/ - request dispatch and result classification
mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - validated settings and defaults
mod error;    // src/error.rs - fatal error types
mod logging;  // src/logging.rs - tracing setup
mod progress; // src/progress.rs - progress lines and final summary
mod run;      // src/run.rs - the run driver
mod sheet;    // src/sheet/ - workbook I/O and row iteration
mod writer;   // src/writer.rs - writes results into the output columns

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version print to stdout and exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let exit_code = match try_main(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn try_main(cli: Cli) -> Result<()> {
    logging::init_logging(cli.verbose);

    let config = Config::from_cli(cli)?;
    tracing::debug!(?config, "starting run");

    let summary = run::run(&config).await?;

    if config.json_summary {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}
