use crate::state::task::PeriodicTask;
use std::ops::ControlFlow;
use std::time::Duration;

pub const BOOT_INTERVAL: Duration = Duration::from_millis(500);

pub const BOOT_SCRIPT: [&str; 9] = [
    "Current version: 0.0.3 - made with <3 by PulseNode Team",
    "[Website Info]: Welcome to pulsenode.net! Currently running on latest version (0.0.3)",
    "[Website Info]: Wrapping everything up...",
    "[Website Info]: Loading landing page",
    "[Website Info]: Loading assets",
    "[Website Info]: Starting web server on 0.0.0.0:443",
    "[Website Info]: Preparing web server: 62%",
    "[Website Info]: Preparing web server: 84%",
    "[Website Info]: Done (0.231s)! Type \"help\" or \"?\" for help",
];

/// Replay the boot script, one line per `interval`.
///
/// `emit` returns `Break` when the destination is gone; replay stops there.
pub fn play<F>(interval: Duration, mut emit: F) -> PeriodicTask
where
    F: FnMut(&'static str) -> ControlFlow<()> + Send + 'static,
{
    let mut lines = BOOT_SCRIPT.iter();
    PeriodicTask::spawn("boot", interval, move || {
        let Some(line) = lines.next() else {
            return ControlFlow::Break(());
        };
        tracing::trace!(remaining = lines.len(), "boot line");
        if emit(line).is_break() {
            return ControlFlow::Break(());
        }

        if lines.len() == 0 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
}
