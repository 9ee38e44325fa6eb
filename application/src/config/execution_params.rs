//! Execution parameters: timeouts for the round loop.
//!
//! [`ExecutionParams`] groups the static limits that control
//! [`RunRoundsUseCase`](crate::use_cases::run_rounds::RunRoundsUseCase)
//! and the synthesizer call. These are application-layer concerns, not
//! domain policy.

use council_domain::UrgencyClass;
use std::time::Duration;

/// Overall time budget for all rounds of a request, per urgency class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrgencyDeadlines {
    pub override_class: Duration,
    pub critical: Duration,
    pub elevated: Duration,
    pub routine: Duration,
}

impl Default for UrgencyDeadlines {
    fn default() -> Self {
        Self {
            override_class: Duration::from_secs(60),
            critical: Duration::from_secs(90),
            elevated: Duration::from_secs(120),
            routine: Duration::from_secs(180),
        }
    }
}

impl UrgencyDeadlines {
    pub fn for_class(&self, urgency: UrgencyClass) -> Duration {
        match urgency {
            UrgencyClass::Override => self.override_class,
            UrgencyClass::Critical => self.critical,
            UrgencyClass::Elevated => self.elevated,
            UrgencyClass::Routine => self.routine,
        }
    }
}

/// Round loop control parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionParams {
    /// Timeout applied to every single lineage call (and the synthesizer).
    pub call_timeout: Duration,
    /// Deadline covering every round of one request.
    pub deadlines: UrgencyDeadlines,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            call_timeout: Duration::from_secs(30),
            deadlines: UrgencyDeadlines::default(),
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    pub fn with_deadlines(mut self, deadlines: UrgencyDeadlines) -> Self {
        self.deadlines = deadlines;
        self
    }

    /// Deadline for a request of the given urgency
    pub fn deadline_for(&self, urgency: UrgencyClass) -> Duration {
        self.deadlines.for_class(urgency)
    }
}
