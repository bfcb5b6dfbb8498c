// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Presentation helpers shared by every front end: route paths, block
//! screens, and per-item expand/collapse state.

use std::collections::BTreeSet;

use crate::workflow::{BlockReason, View};

impl View {
    pub fn path(&self) -> &'static str {
        match self {
            View::Scan => "/scan",
            View::Results => "/results",
            View::AdvancedScan => "/advanced",
        }
    }

    /// Resolve a route. The root path redirects to the scan form.
    pub fn from_path(path: &str) -> Option<View> {
        match path.trim_end_matches('/') {
            "" | "/scan" => Some(View::Scan),
            "/results" => Some(View::Results),
            "/advanced" => Some(View::AdvancedScan),
            _ => None,
        }
    }
}

impl BlockReason {
    pub fn title(&self) -> &'static str {
        match self {
            BlockReason::NoScanResults => "No Scan Results Found",
            BlockReason::InterpretationMissing => "Interpreter Results Missing",
            BlockReason::ScanRequired => "Advanced Scan Blocked",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            BlockReason::NoScanResults => "Please go to New Scan and run a scan first.",
            BlockReason::InterpretationMissing => {
                "Please go to AI Interpreter and fetch results before launching an Advanced Scan."
            }
            BlockReason::ScanRequired => "Please run a New Scan before launching an Advanced Scan.",
        }
    }
}

/// Set of expanded items, keyed by a stable item identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: BTreeSet<String>,
}

impl Disclosure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip `id` and return whether it is now open.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.open.remove(id) {
            false
        } else {
            self.open.insert(id.to_string());
            true
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    pub fn clear(&mut self) {
        self.open.clear();
    }
}
