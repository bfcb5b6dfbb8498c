// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Nessus scan template selected by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScanType {
    #[default]
    #[serde(rename = "Basic Network Scan")]
    BasicNetworkScan,
    #[serde(rename = "Host Discovery")]
    HostDiscovery,
    #[serde(rename = "Ping-Only Discovery")]
    PingOnlyDiscovery,
}

impl ScanType {
    pub const ALL: [ScanType; 3] = [
        ScanType::BasicNetworkScan,
        ScanType::HostDiscovery,
        ScanType::PingOnlyDiscovery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScanType::BasicNetworkScan => "Basic Network Scan",
            ScanType::HostDiscovery => "Host Discovery",
            ScanType::PingOnlyDiscovery => "Ping-Only Discovery",
        }
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ScanType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let wanted = s.trim();
        ScanType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| anyhow::anyhow!("Unknown scan type: {}", s))
    }
}

/// Scan configuration submitted to start a scan.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct ScanRequest {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub password: String,

    #[validate(length(min = 1))]
    pub scan_name: String,

    #[serde(default)]
    pub scan_type: ScanType,

    /// Target address
    #[validate(length(min = 1))]
    pub scan_ip: String,
}

impl ScanRequest {
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        scan_name: impl Into<String>,
        scan_type: ScanType,
        scan_ip: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            scan_name: scan_name.into(),
            scan_type,
            scan_ip: scan_ip.into(),
        }
    }

    /// Copy with surrounding whitespace removed from the text fields.
    /// The password is kept verbatim.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            password: self.password.clone(),
            scan_name: self.scan_name.trim().to_string(),
            scan_type: self.scan_type,
            scan_ip: self.scan_ip.trim().to_string(),
        }
    }
}

impl fmt::Debug for ScanRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanRequest")
            .field("name", &self.name)
            .field("password", &"[REDACTED]")
            .field("scan_name", &self.scan_name)
            .field("scan_type", &self.scan_type)
            .field("scan_ip", &self.scan_ip)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ScanRequest {
        ScanRequest::new("alice", "s3cret", "weekly", ScanType::HostDiscovery, "10.0.0.5")
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_blank_fields_rejected_after_trim() {
        let mut req = request();
        req.scan_ip = "   ".to_string();
        assert!(req.validate().is_ok());

        let errors = req.trimmed().validate().unwrap_err();
        assert!(errors.field_errors().contains_key("scan_ip"));
    }

    #[test]
    fn test_wire_format() {
        let value = serde_json::to_value(request()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "alice",
                "password": "s3cret",
                "scan_name": "weekly",
                "scan_type": "Host Discovery",
                "scan_ip": "10.0.0.5",
            })
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", request());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("s3cret"));
    }

    #[test]
    fn test_scan_type_parse() {
        assert_eq!("host discovery".parse::<ScanType>().unwrap(), ScanType::HostDiscovery);
        assert_eq!(ScanType::default().as_str(), "Basic Network Scan");
        assert!("Full Audit".parse::<ScanType>().is_err());
    }
}
