// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Heading-based report segmentation.
//!
//! Lines are folded through a small parser state. A line opens a new section
//! only when it starts with [`HEADING_MARKER`]; a marker anywhere else in the
//! line is ordinary text. Segmentation is total: every input, the empty
//! string included, yields a report.

use super::types::ParsedReport;

/// Bold-open marker that starts a section heading line.
pub const HEADING_MARKER: &str = "**";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    CollectingIntro,
    CollectingSection,
}

#[derive(Debug)]
struct Segmenter<'a> {
    state: ParserState,
    intro: Vec<&'a str>,
    current: Vec<&'a str>,
    sections: Vec<Vec<&'a str>>,
}

impl<'a> Segmenter<'a> {
    fn new() -> Self {
        Self {
            state: ParserState::CollectingIntro,
            intro: Vec::new(),
            current: Vec::new(),
            sections: Vec::new(),
        }
    }

    fn step(mut self, line: &'a str) -> Self {
        if is_heading(line) {
            if !self.current.is_empty() {
                self.sections.push(std::mem::take(&mut self.current));
            }
            self.current.push(line);
            self.state = ParserState::CollectingSection;
            return self;
        }

        match self.state {
            ParserState::CollectingIntro => self.intro.push(line),
            ParserState::CollectingSection => self.current.push(line),
        }
        self
    }

    fn finish(mut self) -> ParsedReport {
        if !self.current.is_empty() {
            self.sections.push(self.current);
        }

        ParsedReport {
            intro: join_block(&self.intro),
            sections: self.sections.iter().map(|block| join_block(block)).collect(),
        }
    }
}

fn is_heading(line: &str) -> bool {
    line.starts_with(HEADING_MARKER)
}

fn join_block(lines: &[&str]) -> String {
    lines.join("\n").trim().to_string()
}

/// Split `raw` into an intro and one section per heading line.
pub fn segment(raw: &str) -> ParsedReport {
    raw.split('\n').fold(Segmenter::new(), Segmenter::step).finish()
}
