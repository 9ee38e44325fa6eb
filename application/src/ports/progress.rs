//! Progress notification port
//!
//! Defines the interface for reporting progress during a council request.

use council_domain::{FusionStatus, Lineage};

/// Callback for progress updates during council execution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a round starts
    fn on_round_start(&self, round: u8, total_rounds: u8, lineages: usize);

    /// Called when one lineage returns within a round
    fn on_lineage_complete(&self, round: u8, lineage: Lineage, success: bool);

    /// Called when a round completes
    fn on_round_complete(&self, round: u8);

    /// Called when the remaining rounds are abandoned
    fn on_rounds_cut_short(&self, _completed: u8) {}

    /// Called before the verdict synthesizer is consulted
    fn on_fusion_start(&self) {}

    /// Called once the verdict is settled
    fn on_fusion_complete(&self, _status: FusionStatus) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_round_start(&self, _round: u8, _total_rounds: u8, _lineages: usize) {}
    fn on_lineage_complete(&self, _round: u8, _lineage: Lineage, _success: bool) {}
    fn on_round_complete(&self, _round: u8) {}
}
