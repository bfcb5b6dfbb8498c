// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Report Segmentation Properties
 * Property tests for splitting interpretation reports into sections
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use nessus_interpreter::report::{segment, HEADING_MARKER};
use proptest::prelude::*;

/// Report lines: headings, markers mid-line, blank lines and plain text.
fn report_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9 .,:-]{0,30}".prop_map(|body| format!("**{}", body)),
        "[A-Za-z0-9 ]{1,20}".prop_map(|body| format!("see **{}** here", body)),
        Just(String::new()),
        Just("   ".to_string()),
        "[A-Za-z0-9 .,:()-]{1,40}",
    ]
}

fn report_text() -> impl Strategy<Value = String> {
    prop::collection::vec(report_line(), 0..40).prop_map(|lines| lines.join("\n"))
}

fn non_blank_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

proptest! {
    #[test]
    fn segmentation_is_deterministic(raw in report_text()) {
        prop_assert_eq!(segment(&raw), segment(&raw));
    }

    #[test]
    fn section_count_matches_heading_lines(raw in report_text()) {
        let headings = raw.split('\n').filter(|l| l.starts_with(HEADING_MARKER)).count();
        prop_assert_eq!(segment(&raw).sections.len(), headings);
    }

    #[test]
    fn every_section_starts_with_its_heading(raw in report_text()) {
        for section in segment(&raw).sections {
            prop_assert!(section.starts_with(HEADING_MARKER));
        }
    }

    #[test]
    fn no_content_lost_or_reordered(raw in report_text()) {
        let report = segment(&raw);
        let mut rebuilt = vec![report.intro.clone()];
        rebuilt.extend(report.sections.iter().cloned());
        let rebuilt = rebuilt.join("\n");

        prop_assert_eq!(non_blank_lines(&rebuilt), non_blank_lines(&raw));
    }

    #[test]
    fn blocks_are_trimmed(raw in report_text()) {
        let report = segment(&raw);
        prop_assert_eq!(report.intro.trim(), report.intro.as_str());
        for section in &report.sections {
            prop_assert_eq!(section.trim(), section.as_str());
        }
    }

    #[test]
    fn arbitrary_text_never_panics(raw in ".*") {
        let report = segment(&raw);
        prop_assert!(report.sections.len() <= raw.split('\n').count());
    }
}
