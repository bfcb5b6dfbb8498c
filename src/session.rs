// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Session controller.
//!
//! Sequences the external calls of one operator session, feeds each outcome
//! into the [`WorkflowState`], and owns the data fetched along the way.
//! Methods take `&mut self`, so a session has at most one call in flight and
//! transitions are applied in completion order.

use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

use crate::errors::{SessionError, TransportFailure};
use crate::findings::{AdvancedResults, ScanResults};
use crate::interpreter::Interpreter;
use crate::report::{ParsedReport, RawReport};
use crate::scan_request::ScanRequest;
use crate::service::ScanService;
use crate::workflow::{Access, Call, Phase, View, WorkflowState};

/// An interpretation together with its segmentation.
#[derive(Debug, Clone, Serialize)]
pub struct Interpretation {
    pub interpreter: Interpreter,
    pub raw: RawReport,
    pub parsed: ParsedReport,
}

impl Interpretation {
    pub fn new(interpreter: Interpreter, raw: RawReport) -> Self {
        let parsed = raw.parse();
        Self {
            interpreter,
            raw,
            parsed,
        }
    }
}

pub struct ScanSession {
    service: Arc<dyn ScanService>,
    workflow: WorkflowState,
    scan_results: Option<ScanResults>,
    interpretation: Option<Interpretation>,
    advanced_results: Option<AdvancedResults>,
}

impl ScanSession {
    pub fn new(service: Arc<dyn ScanService>) -> Self {
        Self {
            service,
            workflow: WorkflowState::new(),
            scan_results: None,
            interpretation: None,
            advanced_results: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.workflow.phase()
    }

    pub fn can_access(&self, view: View) -> Access {
        self.workflow.can_access(view)
    }

    pub fn scan_results(&self) -> Option<&ScanResults> {
        self.scan_results.as_ref()
    }

    pub fn interpretation(&self) -> Option<&Interpretation> {
        self.interpretation.as_ref()
    }

    pub fn advanced_results(&self) -> Option<&AdvancedResults> {
        self.advanced_results.as_ref()
    }

    /// Drop every cached result and return to `Unstarted`.
    pub fn reset(&mut self) {
        self.scan_results = None;
        self.interpretation = None;
        self.advanced_results = None;
        self.workflow.reset();
        info!(service = self.service.name(), "session reset");
    }

    /// Start a fresh scan: reset, submit, then retrieve results.
    pub async fn start_scan(&mut self, request: &ScanRequest) -> Result<&ScanResults, SessionError> {
        let request = request.trimmed();
        request.validate()?;

        self.reset();

        if let Err(failure) = self.service.submit_scan(&request).await {
            return Err(self.record_failure(failure));
        }
        self.workflow.advance(Call::SubmitScan)?;
        info!(scan = %request.scan_name, target = %request.scan_ip, "scan submitted");

        let results = match self.service.scan_results().await {
            Ok(results) => results,
            Err(failure) => return Err(self.record_failure(failure)),
        };
        self.workflow.advance(Call::RetrieveResults)?;
        info!(findings = results.len(), "scan complete");

        Ok(self.scan_results.insert(results))
    }

    /// Fetch an interpretation of the current scan from `interpreter`.
    ///
    /// A failed fetch keeps any interpretation fetched earlier.
    pub async fn fetch_interpretation(
        &mut self,
        interpreter: Interpreter,
    ) -> Result<&Interpretation, SessionError> {
        if let Access::Blocked(reason) = self.can_access(View::Results) {
            return Err(SessionError::Blocked(reason));
        }
        // An interpretation is not replaced once the advanced scan has run.
        self.phase().next(Call::RetrieveInterpretation)?;

        let raw = match self.service.interpretation(interpreter).await {
            Ok(raw) => raw,
            Err(failure) => return Err(self.record_failure(failure)),
        };
        self.workflow.advance(Call::RetrieveInterpretation)?;

        let interpretation = Interpretation::new(interpreter, raw);
        info!(
            interpreter = %interpreter,
            sections = interpretation.parsed.sections.len(),
            "interpretation fetched"
        );

        Ok(self.interpretation.insert(interpretation))
    }

    /// Run the advanced scan. Requires an interpretation.
    pub async fn launch_advanced_scan(&mut self) -> Result<&AdvancedResults, SessionError> {
        if let Access::Blocked(reason) = self.can_access(View::AdvancedScan) {
            return Err(SessionError::Blocked(reason));
        }
        // A completed advanced scan is not relaunched.
        self.phase().next(Call::RetrieveAdvancedScan)?;

        let results = match self.service.advanced_scan().await {
            Ok(results) => results,
            Err(failure) => return Err(self.record_failure(failure)),
        };
        self.workflow.advance(Call::RetrieveAdvancedScan)?;
        info!(findings = results.len(), "advanced scan complete");

        Ok(self.advanced_results.insert(results))
    }

    fn record_failure(&mut self, failure: TransportFailure) -> SessionError {
        warn!(call = %failure.call, reason = %failure.reason, "external call failed");
        if let Err(e) = self.workflow.fail(failure.call) {
            return e.into();
        }
        failure.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::findings::Finding;
    use crate::workflow::BlockReason;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct StubService {
        fail_on: Option<Call>,
        advanced_calls: AtomicUsize,
    }

    impl StubService {
        fn failing(call: Call) -> Self {
            Self {
                fail_on: Some(call),
                ..Default::default()
            }
        }

        fn check(&self, call: Call) -> Result<(), TransportFailure> {
            if self.fail_on == Some(call) {
                return Err(TransportFailure::new(call, "HTTP 500"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ScanService for StubService {
        async fn submit_scan(&self, _request: &ScanRequest) -> Result<(), TransportFailure> {
            self.check(Call::SubmitScan)
        }

        async fn scan_results(&self) -> Result<ScanResults, TransportFailure> {
            self.check(Call::RetrieveResults)?;
            let mut results = ScanResults::new();
            results.insert("0", Finding::from(json!({"Plugin ID": "10180", "Risk": "None"})));
            Ok(results)
        }

        async fn interpretation(&self, interpreter: Interpreter) -> Result<RawReport, TransportFailure> {
            self.check(Call::RetrieveInterpretation)?;
            Ok(RawReport::new(format!("By {}\n**Plugin 10180**\nHost is alive", interpreter)))
        }

        async fn advanced_scan(&self) -> Result<AdvancedResults, TransportFailure> {
            self.advanced_calls.fetch_add(1, Ordering::SeqCst);
            self.check(Call::RetrieveAdvancedScan)?;
            Ok(vec![Finding::from(json!({"plugin_id": "22964", "risk": "Medium"}))])
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    fn request() -> ScanRequest {
        ScanRequest::new("alice", "pw", "weekly", Default::default(), "10.0.0.1")
    }

    #[tokio::test]
    async fn test_interpretation_replaces_previous() {
        let mut session = ScanSession::new(Arc::new(StubService::default()));
        session.start_scan(&request()).await.unwrap();

        session.fetch_interpretation(Interpreter::Gemini).await.unwrap();
        let second = session.fetch_interpretation(Interpreter::Cohere).await.unwrap();
        assert_eq!(second.interpreter, Interpreter::Cohere);
        assert_eq!(second.parsed.intro, "By Cohere");
        assert_eq!(session.phase(), Phase::InterpretationFetched);
    }

    #[tokio::test]
    async fn test_repeat_advanced_scan_does_not_call_service() {
        let service = Arc::new(StubService::default());
        let mut session = ScanSession::new(service.clone());
        session.start_scan(&request()).await.unwrap();
        session.fetch_interpretation(Interpreter::Gemini).await.unwrap();
        session.launch_advanced_scan().await.unwrap();

        let err = session.launch_advanced_scan().await.unwrap_err();
        assert!(matches!(err, SessionError::Workflow(_)));
        assert_eq!(service.advanced_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_interpretation_failure_keeps_phase() {
        let mut session = ScanSession::new(Arc::new(StubService::failing(Call::RetrieveInterpretation)));
        session.start_scan(&request()).await.unwrap();

        let err = session.fetch_interpretation(Interpreter::Gemini).await.unwrap_err();
        assert_eq!(err.user_message(), "An error occurred while fetching results.");
        assert_eq!(session.phase(), Phase::ScanComplete);
        assert_eq!(
            session.can_access(View::AdvancedScan),
            Access::Blocked(BlockReason::InterpretationMissing)
        );
    }

    #[tokio::test]
    async fn test_invalid_request_never_reaches_service() {
        let mut session = ScanSession::new(Arc::new(StubService::default()));
        let mut req = request();
        req.scan_name = "  ".to_string();

        let err = session.start_scan(&req).await.unwrap_err();
        assert!(matches!(err, SessionError::InvalidRequest(_)));
        assert_eq!(session.phase(), Phase::Unstarted);
    }
}
