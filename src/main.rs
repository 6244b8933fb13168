mod cli;
mod output;

use accesslog::{AccessEvent, AccessType, Reporter};
use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Report { server, access_type, path, size, pid, timeout_ms } => {
            run_report(&server, access_type, &path, size, pid, timeout_ms);
            Ok(())
        }
        Commands::Decode { input, format } => run_decode(input, &format),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run_report(
    server: &str,
    access_type: AccessType,
    path: &str,
    size: Option<u64>,
    pid: Option<u32>,
    timeout_ms: u64,
) {
    let size = size.unwrap_or_else(|| std::fs::metadata(path).map(|m| m.len()).unwrap_or(0));
    let pid = pid.unwrap_or_else(|| nix::unistd::getpid().as_raw() as u32);

    Reporter::new()
        .with_timeout(Duration::from_millis(timeout_ms))
        .report_access(server, access_type, path, size, pid);
}

fn run_decode(input: Option<PathBuf>, format: &str) -> anyhow::Result<()> {
    let payload = match &input {
        Some(file) => std::fs::read(file)
            .with_context(|| format!("cannot read {}", file.display()))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("cannot read stdin")?;
            buf
        }
    };

    let event = AccessEvent::decode_payload(&payload)?;
    output::display(&event, format)?;
    Ok(())
}
