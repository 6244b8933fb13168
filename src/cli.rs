use accesslog::AccessType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "accesslog")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_TIME"), ")"))]
#[command(about = "Best-effort file access event reporter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report one file access to a collector
    #[command(arg_required_else_help = true)]
    Report {
        /// Collector address (host:port); empty only logs locally
        #[arg(short, long, default_value = "")]
        server: String,

        /// Kind of access
        #[arg(short, long, value_enum)]
        access_type: AccessType,

        /// Accessed file
        #[arg(short, long)]
        path: String,

        /// File size in bytes (defaults to the file's current size)
        #[arg(long)]
        size: Option<u64>,

        /// Accessing process (defaults to this process)
        #[arg(long)]
        pid: Option<u32>,

        /// Connect and write timeout in milliseconds (0 uses the OS default)
        #[arg(short, long, default_value = "3000")]
        timeout_ms: u64,
    },

    /// Decode a captured access payload
    Decode {
        /// Payload file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format (text or json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}
