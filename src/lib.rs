// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Nessus Interpreter Library
 * Scan workflow gate and AI interpretation report segmentation
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

// Lifecycle gate and report segmentation
pub mod report;
pub mod workflow;

// Scan data and service collaborators
pub mod findings;
pub mod interpreter;
pub mod scan_request;
pub mod service;

// Session controller and presentation helpers
pub mod session;
pub mod view;

pub mod config;
pub mod errors;

pub use errors::{SessionError, TransportFailure, WorkflowError};
pub use report::{segment, ParsedReport, RawReport};
pub use session::ScanSession;
pub use workflow::{Access, BlockReason, Call, Phase, View, WorkflowState};
