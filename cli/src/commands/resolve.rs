use colored::*;

use crate::terminal::{colors, format, print};
use crate::tprint;
use spokr_common::address::DottedQuad;
use spokr_common::error::ResolveError;
use spokr_common::{config::Config, error, success};
use spokr_core::resolver;

pub fn resolve(utterance: &str, cfg: &Config) -> anyhow::Result<()> {
    match resolver::resolve_utterance(utterance) {
        Ok(quad) => {
            print_resolved(&quad, utterance, cfg);
            Ok(())
        }
        Err(failure) => Err(report_failure(failure, cfg)),
    }
}

pub(crate) fn print_resolved(quad: &DottedQuad, spoken: &str, cfg: &Config) {
    if cfg.quiet >= 2 {
        print::print(quad.as_str());
        return;
    }

    print::tree_head(0, spoken);
    print::as_tree_one_level(format::quad_details(quad));
    print_summary(quad, cfg);
}

fn print_summary(quad: &DottedQuad, cfg: &Config) {
    let address: ColoredString = quad.as_str().bold().green();
    let output: ColoredString = format!("Resolution Complete: {address} is ready for handoff")
        .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => {
            tprint!();
            success!("{}", output)
        }
    }
}

pub(crate) fn report_failure(failure: ResolveError, cfg: &Config) -> anyhow::Error {
    error!("{failure}");
    if cfg.quiet == 0 {
        print::print_status(failure.spoken_hint());
    }
    anyhow::Error::new(failure)
}
