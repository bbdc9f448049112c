//! Console progress bar for the per-slice synthesis loop.

use std::io::Write;

use colored::Colorize;
use skysweep_core::ProgressSink;

const BAR_WIDTH: usize = 40;

/// Prints an in-place progress bar to stdout.
#[derive(Debug, Default)]
pub(crate) struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn update(&mut self, current: usize, total: usize) {
        if total == 0 {
            return;
        }
        let filled = current * BAR_WIDTH / total;
        let bar: String = "#".repeat(filled) + &"-".repeat(BAR_WIDTH - filled);
        print!(
            "\r{} [{}] {}/{}",
            "Sonifying:".cyan().bold(),
            bar,
            current,
            total
        );
        if current == total {
            println!();
        }
        // Progress is purely observational; a failed flush is not an error.
        let _ = std::io::stdout().flush();
    }
}
