// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Scan lifecycle gate.
//!
//! The lifecycle is a single enumerated [`Phase`] that only moves forward
//! along a fixed order, or jumps back to [`Phase::Unstarted`] on reset.
//! Each forward step is triggered by exactly one external [`Call`]
//! completing. [`WorkflowState::can_access`] answers which operator views
//! are reachable in the current phase.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::errors::WorkflowError;

/// Step reached in the scan -> interpret -> advanced-scan lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Phase {
    #[default]
    Unstarted,
    ScanSubmitted,
    ScanComplete,
    InterpretationFetched,
    AdvancedScanComplete,
}

impl Phase {
    /// All phases in lifecycle order.
    pub const ALL: [Phase; 5] = [
        Phase::Unstarted,
        Phase::ScanSubmitted,
        Phase::ScanComplete,
        Phase::InterpretationFetched,
        Phase::AdvancedScanComplete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Unstarted => "Unstarted",
            Phase::ScanSubmitted => "ScanSubmitted",
            Phase::ScanComplete => "ScanComplete",
            Phase::InterpretationFetched => "InterpretationFetched",
            Phase::AdvancedScanComplete => "AdvancedScanComplete",
        }
    }

    /// Phase reached when `call` completes successfully in this phase.
    ///
    /// Re-fetching an interpretation while one is already held is accepted
    /// and keeps the phase.
    pub fn next(self, call: Call) -> Result<Phase, WorkflowError> {
        match (self, call) {
            (Phase::Unstarted, Call::SubmitScan) => Ok(Phase::ScanSubmitted),
            (Phase::ScanSubmitted, Call::RetrieveResults) => Ok(Phase::ScanComplete),
            (Phase::ScanComplete, Call::RetrieveInterpretation) => Ok(Phase::InterpretationFetched),
            (Phase::InterpretationFetched, Call::RetrieveInterpretation) => {
                Ok(Phase::InterpretationFetched)
            }
            (Phase::InterpretationFetched, Call::RetrieveAdvancedScan) => {
                Ok(Phase::AdvancedScanComplete)
            }
            (phase, call) => Err(WorkflowError::OutOfOrder { phase, call }),
        }
    }

    /// Phase left behind when `call` fails in this phase.
    ///
    /// Submission and result retrieval form one logical step, so a failed
    /// retrieval drops back to `Unstarted` and the operator resubmits.
    pub fn after_failure(self, call: Call) -> Result<Phase, WorkflowError> {
        match (self, call) {
            (Phase::Unstarted, Call::SubmitScan) => Ok(Phase::Unstarted),
            (Phase::ScanSubmitted, Call::RetrieveResults) => Ok(Phase::Unstarted),
            (Phase::ScanComplete, Call::RetrieveInterpretation) => Ok(Phase::ScanComplete),
            (Phase::InterpretationFetched, Call::RetrieveInterpretation) => {
                Ok(Phase::InterpretationFetched)
            }
            (Phase::InterpretationFetched, Call::RetrieveAdvancedScan) => {
                Ok(Phase::InterpretationFetched)
            }
            (phase, call) => Err(WorkflowError::OutOfOrder { phase, call }),
        }
    }

    /// Whether a completed scan exists in this phase.
    pub fn has_scan(&self) -> bool {
        *self >= Phase::ScanComplete
    }

    /// Whether an interpretation has been fetched in this phase.
    pub fn has_interpretation(&self) -> bool {
        *self >= Phase::InterpretationFetched
    }

    /// Reachability of `view` in this phase.
    pub fn access(&self, view: View) -> Access {
        match view {
            View::Scan => Access::Granted,
            View::Results if self.has_scan() => Access::Granted,
            View::Results => Access::Blocked(BlockReason::NoScanResults),
            View::AdvancedScan if self.has_interpretation() => Access::Granted,
            View::AdvancedScan if self.has_scan() => {
                Access::Blocked(BlockReason::InterpretationMissing)
            }
            View::AdvancedScan => Access::Blocked(BlockReason::ScanRequired),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Phase {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_', ' '], "").to_lowercase();
        Phase::ALL
            .into_iter()
            .find(|p| p.as_str().to_lowercase() == wanted)
            .ok_or_else(|| WorkflowError::UnknownPhase(s.to_string()))
    }
}

/// External call whose completion drives a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Call {
    SubmitScan,
    RetrieveResults,
    RetrieveInterpretation,
    RetrieveAdvancedScan,
}

impl Call {
    pub const ALL: [Call; 4] = [
        Call::SubmitScan,
        Call::RetrieveResults,
        Call::RetrieveInterpretation,
        Call::RetrieveAdvancedScan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Call::SubmitScan => "submit scan",
            Call::RetrieveResults => "retrieve scan results",
            Call::RetrieveInterpretation => "retrieve interpretation",
            Call::RetrieveAdvancedScan => "retrieve advanced scan",
        }
    }

    /// Operator-facing text shown when this call fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Call::SubmitScan | Call::RetrieveResults => {
                "Something went wrong. Please try again later."
            }
            Call::RetrieveInterpretation => "An error occurred while fetching results.",
            Call::RetrieveAdvancedScan => "Failed to fetch advanced scan results.",
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator-facing views gated by the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Scan,
    Results,
    AdvancedScan,
}

impl View {
    pub const ALL: [View; 3] = [View::Scan, View::Results, View::AdvancedScan];
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            View::Scan => "Scan",
            View::Results => "Results",
            View::AdvancedScan => "AdvancedScan",
        };
        f.pad(name)
    }
}

/// Why a view cannot be shown yet. Callers render a block message, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockReason {
    /// Results view requested before any scan completed.
    NoScanResults,
    /// Advanced scan requested before any scan completed.
    ScanRequired,
    /// Advanced scan requested with a scan but no interpretation.
    InterpretationMissing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Access {
    Granted,
    Blocked(BlockReason),
}

impl Access {
    pub fn is_granted(&self) -> bool {
        matches!(self, Access::Granted)
    }

    pub fn block_reason(&self) -> Option<BlockReason> {
        match self {
            Access::Granted => None,
            Access::Blocked(reason) => Some(*reason),
        }
    }
}

/// Lifecycle tracker for one operator session.
///
/// Never issues calls itself; the caller reports each call's outcome.
#[derive(Debug, Clone, Default)]
pub struct WorkflowState {
    phase: Phase,
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Record a successful `call`. On error the phase is unchanged.
    pub fn advance(&mut self, call: Call) -> Result<Phase, WorkflowError> {
        match self.phase.next(call) {
            Ok(next) => {
                debug!(from = %self.phase, to = %next, call = %call, "workflow advanced");
                self.phase = next;
                Ok(next)
            }
            Err(e) => {
                warn!(phase = %self.phase, call = %call, "rejected out-of-order completion");
                Err(e)
            }
        }
    }

    /// Record a failed `call`, applying its fallback.
    pub fn fail(&mut self, call: Call) -> Result<Phase, WorkflowError> {
        match self.phase.after_failure(call) {
            Ok(next) => {
                debug!(from = %self.phase, to = %next, call = %call, "workflow call failed");
                self.phase = next;
                Ok(next)
            }
            Err(e) => {
                warn!(phase = %self.phase, call = %call, "rejected out-of-order failure");
                Err(e)
            }
        }
    }

    /// Return to `Unstarted` from any phase.
    pub fn reset(&mut self) -> Phase {
        debug!(from = %self.phase, "workflow reset");
        self.phase = Phase::Unstarted;
        self.phase
    }

    pub fn can_access(&self, view: View) -> Access {
        self.phase.access(view)
    }
}
