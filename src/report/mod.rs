// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Interpretation reports.
//!
//! An interpreter returns one free-text report. [`segment`] splits it into an
//! introductory summary plus one section per bolded heading line.

pub mod segmenter;
pub mod types;

pub use segmenter::{segment, HEADING_MARKER};
pub use types::{ParsedReport, RawReport};
