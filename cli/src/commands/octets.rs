use super::resolve;
use spokr_common::address::OctetSlots;
use spokr_common::config::Config;
use spokr_core::resolver;

pub fn octets(
    first: Option<String>,
    second: Option<String>,
    third: Option<String>,
    fourth: Option<String>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let slots = OctetSlots {
        first,
        second,
        third,
        fourth,
    };

    let spoken: String = slots.spoken_values().join(" point ");

    match resolver::resolve_slots(&slots) {
        Ok(quad) => {
            resolve::print_resolved(&quad, &spoken, cfg);
            Ok(())
        }
        Err(failure) => Err(resolve::report_failure(failure, cfg)),
    }
}
