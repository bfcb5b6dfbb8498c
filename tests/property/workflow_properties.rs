// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Workflow Lifecycle Properties
 * Property tests for phase transitions, reset and view gating
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use nessus_interpreter::{Access, BlockReason, Call, Phase, View, WorkflowState};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Event {
    Success(Call),
    Failure(Call),
    Reset,
}

fn call() -> impl Strategy<Value = Call> {
    prop::sample::select(Call::ALL.to_vec())
}

fn event() -> impl Strategy<Value = Event> {
    prop_oneof![
        4 => call().prop_map(Event::Success),
        2 => call().prop_map(Event::Failure),
        1 => Just(Event::Reset),
    ]
}

fn step_index(phase: Phase) -> usize {
    Phase::ALL.iter().position(|p| *p == phase).unwrap()
}

proptest! {
    #[test]
    fn successful_calls_only_move_forward_one_step(calls in prop::collection::vec(call(), 0..30)) {
        let mut state = WorkflowState::new();
        for call in calls {
            let before = state.phase();
            match state.advance(call) {
                Ok(after) => {
                    let (b, a) = (step_index(before), step_index(after));
                    prop_assert!(a == b || a == b + 1, "{} -> {}", before, after);
                }
                Err(_) => prop_assert_eq!(state.phase(), before),
            }
        }
    }

    #[test]
    fn failures_never_advance(events in prop::collection::vec(event(), 0..40)) {
        let mut state = WorkflowState::new();
        for event in events {
            let before = state.phase();
            match event {
                Event::Success(call) => { let _ = state.advance(call); }
                Event::Failure(call) => {
                    let _ = state.fail(call);
                    prop_assert!(state.phase() <= before);
                }
                Event::Reset => {
                    state.reset();
                    prop_assert_eq!(state.phase(), Phase::Unstarted);
                }
            }
        }
    }

    #[test]
    fn reset_blocks_every_gated_view(events in prop::collection::vec(event(), 0..40)) {
        let mut state = WorkflowState::new();
        for event in events {
            match event {
                Event::Success(call) => { let _ = state.advance(call); }
                Event::Failure(call) => { let _ = state.fail(call); }
                Event::Reset => { state.reset(); }
            }
        }
        state.reset();

        prop_assert!(state.can_access(View::Scan).is_granted());
        prop_assert_eq!(state.can_access(View::Results), Access::Blocked(BlockReason::NoScanResults));
        prop_assert_eq!(state.can_access(View::AdvancedScan), Access::Blocked(BlockReason::ScanRequired));
    }

    #[test]
    fn advanced_scan_gate_matches_phase(events in prop::collection::vec(event(), 0..40)) {
        let mut state = WorkflowState::new();
        for event in events {
            match event {
                Event::Success(call) => { let _ = state.advance(call); }
                Event::Failure(call) => { let _ = state.fail(call); }
                Event::Reset => { state.reset(); }
            }

            let phase = state.phase();
            let access = state.can_access(View::AdvancedScan);
            let expected_granted = matches!(
                phase,
                Phase::InterpretationFetched | Phase::AdvancedScanComplete
            );
            prop_assert_eq!(access.is_granted(), expected_granted);
            if phase == Phase::ScanComplete {
                prop_assert_eq!(access, Access::Blocked(BlockReason::InterpretationMissing));
            } else if phase < Phase::ScanComplete {
                prop_assert_eq!(access, Access::Blocked(BlockReason::ScanRequired));
            }
        }
    }
}
