use anyhow::{Context, Result};
use clap::Parser;
use std::io;

use simplefin_summary::{process_accounts, BuildInfo, Cli, Command};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let build = BuildInfo::current();

    match cli.command {
        Some(Command::Version) => {
            println!("{}", build);
        }
        None => {
            // clap enforces --url / SF_URL unless a subcommand was given
            let settings = cli.settings().context("missing SimpleFIN access URL")?;

            let stdout = io::stdout();
            let mut out = stdout.lock();
            process_accounts(&settings, &mut out).context("failed to process accounts")?;
        }
    }

    Ok(())
}
