// crates/bytehist-cli/src/main.rs

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use bytehist_cli::cmd;

#[derive(Parser)]
#[command(name = "bytehist")]
#[command(
    about = "Byte histogram as a scaled ASCII bar chart",
    long_about = "Use log scaling (default) for identifying an encrypted file. All bars should \
                  be maxed and relative std. dev. low. Change the scaling (several can \
                  be combined) for other views."
)]
pub struct Cli {
    #[command(flatten)]
    pub hist: cmd::hist::HistArgs,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.hist.verbose);

    match cmd::hist::run(cli.hist) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(cmd::hist::exit_status(&err))
        }
    }
}
