use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Progress for resolving `total` ARP entries. Draws on stderr and stays hidden when stderr
/// is not a terminal.
pub fn arp_progress(total: usize) -> ProgressBar {
    let pb: ProgressBar = ProgressBar::new(total as u64);
    let style: ProgressStyle = ProgressStyle::with_template("{spinner:.blue} [{pos}/{len}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICK_STRINGS);

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
