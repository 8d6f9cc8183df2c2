//! The sequential press-to-trigger loop.

use futures_util::{Stream, StreamExt};
use milkbutton_domain::Debouncer;

use crate::input::KeyDown;
use crate::trigger::TriggerPort;

/// Counts for one run of the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub presses: u64,
    pub triggers: u64,
    pub failed: u64,
}

/// Run until `presses` ends.
///
/// Each accepted press is forwarded and awaited before the next press is
/// pulled, so a slow sender delays later presses by up to the trigger timeout.
pub async fn run<S>(mut presses: S, mut debouncer: Debouncer, trigger: &dyn TriggerPort) -> LoopStats
where
    S: Stream<Item = KeyDown> + Unpin,
{
    let mut stats = LoopStats::default();
    while let Some(press) = presses.next().await {
        stats.presses += 1;
        if !debouncer.accept(press.at) {
            tracing::debug!("Press debounced");
            continue;
        }

        stats.triggers += 1;
        match trigger.fire().await {
            Ok(()) => tracing::info!("Trigger sent"),
            Err(e) => {
                stats.failed += 1;
                tracing::warn!(error = %e, "Trigger not delivered");
            }
        }
    }
    stats
}
