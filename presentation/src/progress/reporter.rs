//! Progress reporting for council rounds

use colored::Colorize;
use council_application::ProgressNotifier;
use council_domain::{FusionStatus, Lineage};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress during council execution with progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    round_bar: Mutex<Option<ProgressBar>>,
    fusion_spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            round_bar: Mutex::new(None),
            fusion_spinner: Mutex::new(None),
        }
    }

    fn round_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// `Round 2/3`
fn round_label(round: u8, total_rounds: u8) -> String {
    format!("Round {}/{}", round, total_rounds)
}

fn lineage_status(lineage: Lineage, success: bool) -> String {
    if success {
        format!("{} {}", "v".green(), lineage)
    } else {
        format!("{} {}", "x".red(), lineage)
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_round_start(&self, round: u8, total_rounds: u8, lineages: usize) {
        let pb = self.multi.add(ProgressBar::new(lineages as u64));
        pb.set_style(Self::round_style());
        pb.set_prefix(round_label(round, total_rounds));
        pb.set_message("Consulting lineages...");

        if let Ok(mut slot) = self.round_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_lineage_complete(&self, _round: u8, lineage: Lineage, success: bool) {
        if let Ok(slot) = self.round_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(lineage_status(lineage, success));
            pb.inc(1);
        }
    }

    fn on_round_complete(&self, round: u8) {
        if let Ok(mut slot) = self.round_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(format!("{}", format!("Round {} complete", round).green()));
        }
    }

    fn on_rounds_cut_short(&self, completed: u8) {
        if let Ok(mut slot) = self.round_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.abandon_with_message(format!("{}", "abandoned".yellow()));
        }
        let _ = self.multi.println(format!(
            "{} remaining rounds abandoned after {} completed",
            "!".yellow().bold(),
            completed
        ));
    }

    fn on_fusion_start(&self) {
        let spinner = self.multi.add(ProgressBar::new_spinner());
        spinner.set_style(Self::spinner_style());
        spinner.set_prefix("Fusion");
        spinner.set_message("Kairos is writing the verdict...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.fusion_spinner.lock() {
            *slot = Some(spinner);
        }
    }

    fn on_fusion_complete(&self, status: FusionStatus) {
        if let Ok(mut slot) = self.fusion_spinner.lock()
            && let Some(spinner) = slot.take()
        {
            spinner.finish_with_message(format!("{}", status.as_str().green()));
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_round_start(&self, round: u8, total_rounds: u8, lineages: usize) {
        eprintln!(
            "{} {} ({} lineages)",
            "->".cyan(),
            round_label(round, total_rounds).bold(),
            lineages
        );
    }

    fn on_lineage_complete(&self, _round: u8, lineage: Lineage, success: bool) {
        if success {
            eprintln!("  {}", lineage_status(lineage, success));
        } else {
            eprintln!("  {} (failed)", lineage_status(lineage, success));
        }
    }

    fn on_round_complete(&self, _round: u8) {
        eprintln!();
    }

    fn on_rounds_cut_short(&self, completed: u8) {
        eprintln!(
            "{} remaining rounds abandoned after {} completed",
            "!".yellow(),
            completed
        );
    }

    fn on_fusion_complete(&self, status: FusionStatus) {
        eprintln!("{} {}", "Fusion:".bold(), status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_label() {
        assert_eq!(round_label(2, 3), "Round 2/3");
    }

    #[test]
    fn test_lineage_status_names_lineage() {
        assert!(lineage_status(Lineage::Sophia, true).contains("Sophia"));
        assert!(lineage_status(Lineage::Kairos, false).contains("Kairos"));
    }

    #[test]
    fn test_reporter_survives_out_of_order_callbacks() {
        let reporter = ProgressReporter::new();
        // Completion before any round started is ignored
        reporter.on_lineage_complete(1, Lineage::Alethea, true);
        reporter.on_round_complete(1);

        reporter.on_round_start(1, 2, 4);
        reporter.on_lineage_complete(1, Lineage::Alethea, true);
        reporter.on_rounds_cut_short(0);
        reporter.on_fusion_complete(FusionStatus::Insufficient);
    }
}
