use std::io::{self, BufRead};

use crate::terminal::print;
use spokr_common::{config::Config, success, warn};
use spokr_core::resolver;

/// Transcript-feed mode: one utterance per stdin line, resolved as they
/// arrive. Blank lines are skipped, EOF ends the session.
pub fn listen(cfg: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut resolved: usize = 0;
    let mut failed: usize = 0;

    for line in stdin.lock().lines() {
        let line = line?;
        let utterance = line.trim();
        if utterance.is_empty() {
            continue;
        }

        match resolver::resolve_utterance(utterance) {
            Ok(quad) => {
                resolved += 1;
                match cfg.quiet {
                    0 => print::print_status(format!("{utterance} -> {quad}")),
                    _ => print::print(quad.as_str()),
                }
            }
            Err(failure) => {
                failed += 1;
                warn!("{utterance}: {failure}");
            }
        }
    }

    if resolved == 0 {
        if cfg.quiet == 0 {
            print::no_results();
        }
        anyhow::bail!("no utterance resolved to an address ({failed} failed)");
    }

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&format!(
                "Session Complete: {resolved} resolved, {failed} failed"
            ));
            print::end_of_program();
        }
        _ => success!("{resolved} resolved, {failed} failed"),
    }

    Ok(())
}
