// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::segmenter::segment;

/// Report text exactly as the interpreter returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawReport(String);

impl RawReport {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parse(&self) -> ParsedReport {
        segment(&self.0)
    }
}

impl From<String> for RawReport {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for RawReport {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl fmt::Display for RawReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Segmented view of a [`RawReport`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReport {
    /// Lines before the first heading, trimmed.
    pub intro: String,

    /// One block per heading line, heading included, in encounter order.
    pub sections: Vec<String>,
}

impl ParsedReport {
    pub fn is_empty(&self) -> bool {
        self.intro.is_empty() && self.sections.is_empty()
    }

    /// First line of each section.
    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .map(|s| s.lines().next().unwrap_or_default())
    }

    /// Intro followed by every section, separated by line breaks.
    pub fn to_text(&self) -> String {
        std::iter::once(self.intro.as_str())
            .chain(self.sections.iter().map(String::as_str))
            .filter(|block| !block.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        let report = RawReport::from("Intro\n**Plugin 10180**\nPing host\n**Plugin 19506**").parse();
        let headings: Vec<&str> = report.headings().collect();
        assert_eq!(headings, vec!["**Plugin 10180**", "**Plugin 19506**"]);
    }

    #[test]
    fn test_to_text_restores_content() {
        let raw = "Summary text.\n**Finding A**\nDetail A\n**Finding B**\nDetail B";
        assert_eq!(RawReport::from(raw).parse().to_text(), raw);
        assert_eq!(ParsedReport::default().to_text(), "");
    }

    #[test]
    fn test_raw_report_serializes_as_string() {
        let report: RawReport = serde_json::from_str("\"**A**\\nbody\"").unwrap();
        assert_eq!(report.as_str(), "**A**\nbody");
        assert_eq!(serde_json::to_string(&report).unwrap(), "\"**A**\\nbody\"");
    }
}
