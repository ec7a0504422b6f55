use colored::*;

use crate::terminal::{colors, print};
use spokr_common::{config::Config, success, warn};
use spokr_core::numeral::{self, Conversion};

pub fn number(phrase: &str, cfg: &Config) -> anyhow::Result<()> {
    match numeral::convert(phrase) {
        Conversion::Converted(value) => {
            match cfg.quiet {
                0 => {
                    print::aligned_line("Phrase", phrase.italic());
                    print::aligned_line("Value", value.as_str().color(colors::ACCENT));
                    success!("phrase converted");
                }
                1 => success!("converted {phrase:?} to {value}"),
                _ => print::print(&value),
            }
            Ok(())
        }
        Conversion::Unchanged(original) => {
            warn!("phrase {original:?} passed through unconverted");
            anyhow::bail!("phrase could not be converted")
        }
    }
}
