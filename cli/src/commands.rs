pub mod listen;
pub mod number;
pub mod octets;
pub mod resolve;

use clap::{ArgAction, Parser, Subcommand};


#[derive(Parser)]
#[command(name = "spokr")]
#[command(about = "Turns spoken IP addresses into scan-ready targets.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output, repeat for even less
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a full spoken utterance into a dotted-quad address
    #[command(alias = "r")]
    Resolve { utterance: String },
    /// Resolve four separately spoken octets
    #[command(alias = "o")]
    Octets {
        first: Option<String>,
        second: Option<String>,
        third: Option<String>,
        fourth: Option<String>,
    },
    /// Convert a single spoken number phrase
    #[command(alias = "n")]
    Number { phrase: String },
    /// Resolve utterances line by line from standard input
    #[command(alias = "l")]
    Listen,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
