// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Language-model interpreters that turn raw findings into a report.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Interpreter {
    #[default]
    Gemini,
    Cohere,
    WhiterabbitNeo,
}

impl Interpreter {
    pub const ALL: [Interpreter; 3] = [
        Interpreter::Gemini,
        Interpreter::Cohere,
        Interpreter::WhiterabbitNeo,
    ];

    /// Name as sent to the interpretation service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interpreter::Gemini => "Gemini",
            Interpreter::Cohere => "Cohere",
            Interpreter::WhiterabbitNeo => "WhiterabbitNeo",
        }
    }
}

impl fmt::Display for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Interpreter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(Interpreter::Gemini),
            "cohere" => Ok(Interpreter::Cohere),
            "whiterabbitneo" | "whiterabbit-neo" | "whiterabbit_neo" => {
                Ok(Interpreter::WhiterabbitNeo)
            }
            _ => anyhow::bail!(
                "Unknown interpreter '{}'. Use 'Gemini', 'Cohere' or 'WhiterabbitNeo'.",
                s
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("gemini".parse::<Interpreter>().unwrap(), Interpreter::Gemini);
        assert_eq!("COHERE".parse::<Interpreter>().unwrap(), Interpreter::Cohere);
        assert_eq!(
            "WhiteRabbitNeo".parse::<Interpreter>().unwrap(),
            Interpreter::WhiterabbitNeo
        );
        assert!("gpt".parse::<Interpreter>().is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for interpreter in Interpreter::ALL {
            assert_eq!(interpreter.as_str().parse::<Interpreter>().unwrap(), interpreter);
            assert_eq!(
                serde_json::to_string(&interpreter).unwrap(),
                format!("\"{}\"", interpreter)
            );
        }
    }

    #[test]
    fn test_default_is_gemini() {
        assert_eq!(Interpreter::default(), Interpreter::Gemini);
    }
}
