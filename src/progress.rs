//! Progress bar for timed dashboard sessions
//!
//! Gives visual feedback during `arb-dash run --seconds N` using the
//! indicatif crate.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Countdown bar for a timed session, one position per elapsed second
pub struct SessionProgress {
    pub progress: ProgressBar,
    pub total_seconds: u64,
}

impl SessionProgress {
    pub fn new(duration: Duration) -> Self {
        let total_seconds = duration.as_secs().max(1);
        let progress = ProgressBar::new(total_seconds);
        progress.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}s\n{msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
        );

        Self {
            progress,
            total_seconds,
        }
    }

    /// Hidden bar, used when output is not a terminal or in tests
    pub fn hidden(duration: Duration) -> Self {
        Self {
            progress: ProgressBar::hidden(),
            total_seconds: duration.as_secs().max(1),
        }
    }

    /// Move to `elapsed` and show the best opportunity seen on this update
    pub fn update(&self, elapsed: Duration, best_profit_percent: Option<f64>) {
        self.progress.set_position(elapsed.as_secs().min(self.total_seconds));
        match best_profit_percent {
            Some(pct) => self.progress.set_message(format!("🎯 Best opportunity: +{:.2}%", pct)),
            None => self.progress.set_message("⏳ Waiting for opportunities"),
        }
    }

    pub fn finish(&self, updates: u64) {
        self.progress.finish_with_message(format!(
            "✅ Session complete, {} updates received",
            updates
        ));
    }

    pub fn abandon(&self, reason: &str) {
        self.progress.abandon_with_message(format!("🛑 Stopped: {}", reason));
    }
}
