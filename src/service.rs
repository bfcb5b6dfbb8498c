// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Scanning and interpretation service abstraction.
//!
//! The session controller only talks to the remote services through
//! [`ScanService`]. Transport is the implementor's concern; every failure is
//! reported as a [`TransportFailure`] for the call that failed.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;
use validator::Validate;

use crate::errors::TransportFailure;
use crate::findings::{AdvancedResults, ScanResults};
use crate::interpreter::Interpreter;
use crate::report::RawReport;
use crate::scan_request::ScanRequest;
use crate::workflow::Call;

#[async_trait]
pub trait ScanService: Send + Sync {
    /// Submit a scan configuration. Success is a bare acknowledgement.
    async fn submit_scan(&self, request: &ScanRequest) -> Result<(), TransportFailure>;

    /// Fetch the results of the submitted scan.
    async fn scan_results(&self) -> Result<ScanResults, TransportFailure>;

    /// Fetch a free-text interpretation of the results from `interpreter`.
    async fn interpretation(&self, interpreter: Interpreter) -> Result<RawReport, TransportFailure>;

    /// Run the follow-up advanced scan and fetch its results.
    async fn advanced_scan(&self) -> Result<AdvancedResults, TransportFailure>;

    /// Service name for display
    fn name(&self) -> &str;
}

/// Offline service that answers every call from local files.
///
/// Useful for replaying a captured session. A missing or unparsable file
/// fails the corresponding call.
#[derive(Debug, Clone)]
pub struct FileService {
    results_path: PathBuf,
    interpretation_path: PathBuf,
    advanced_path: Option<PathBuf>,
}

impl FileService {
    pub fn new(results_path: impl Into<PathBuf>, interpretation_path: impl Into<PathBuf>) -> Self {
        Self {
            results_path: results_path.into(),
            interpretation_path: interpretation_path.into(),
            advanced_path: None,
        }
    }

    pub fn with_advanced(mut self, advanced_path: impl Into<PathBuf>) -> Self {
        self.advanced_path = Some(advanced_path.into());
        self
    }

    async fn read(call: Call, path: &Path) -> Result<String, TransportFailure> {
        debug!(call = %call, path = %path.display(), "reading fixture");
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| TransportFailure::new(call, format!("{}: {}", path.display(), e)))
    }
}

#[async_trait]
impl ScanService for FileService {
    async fn submit_scan(&self, request: &ScanRequest) -> Result<(), TransportFailure> {
        request
            .validate()
            .map_err(|e| TransportFailure::new(Call::SubmitScan, e.to_string()))
    }

    async fn scan_results(&self) -> Result<ScanResults, TransportFailure> {
        let content = Self::read(Call::RetrieveResults, &self.results_path).await?;
        serde_json::from_str(&content)
            .map_err(|e| TransportFailure::new(Call::RetrieveResults, e.to_string()))
    }

    async fn interpretation(&self, interpreter: Interpreter) -> Result<RawReport, TransportFailure> {
        debug!(interpreter = %interpreter, "serving interpretation from file");
        let content = Self::read(Call::RetrieveInterpretation, &self.interpretation_path).await?;
        Ok(RawReport::from(content))
    }

    async fn advanced_scan(&self) -> Result<AdvancedResults, TransportFailure> {
        let path = self.advanced_path.as_deref().ok_or_else(|| {
            TransportFailure::new(Call::RetrieveAdvancedScan, "no advanced results file configured")
        })?;
        let content = Self::read(Call::RetrieveAdvancedScan, path).await?;
        serde_json::from_str(&content)
            .map_err(|e| TransportFailure::new(Call::RetrieveAdvancedScan, e.to_string()))
    }

    fn name(&self) -> &str {
        "file"
    }
}
