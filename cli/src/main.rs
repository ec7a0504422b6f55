mod commands;
mod terminal;

use commands::{CommandLine, Commands, listen, number, octets, resolve};
use spokr_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.quiet);
    print::initialize();
    print::banner(commands.no_banner, commands.quiet);

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
    };

    match commands.command {
        Commands::Resolve { utterance } => {
            print::header("resolving spoken target", cfg.quiet);
            resolve::resolve(&utterance, &cfg)
        }
        Commands::Octets {
            first,
            second,
            third,
            fourth,
        } => {
            print::header("resolving octet slots", cfg.quiet);
            octets::octets(first, second, third, fourth, &cfg)
        }
        Commands::Number { phrase } => {
            print::header("converting numeral phrase", cfg.quiet);
            number::number(&phrase, &cfg)
        }
        Commands::Listen => {
            print::header("reading utterances from stdin", cfg.quiet);
            listen::listen(&cfg)
        }
    }
}
