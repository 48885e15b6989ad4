//! Progress reporting for the long-running pipeline phases

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:>9} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar for one pipeline phase
///
/// Returns a hidden bar when `quiet` is set, so call sites tick
/// unconditionally. The bar is safe to tick from worker threads.
pub fn phase_bar(label: &'static str, len: u64, quiet: bool) -> ProgressBar {
    let bar = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(len)
    };
    bar.set_style(PHASE_STYLE.clone());
    bar.set_message(label);
    bar
}
