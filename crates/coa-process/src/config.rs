//! Virtual-server configuration scope
//!
//! Holds the raw, named policy sections of one virtual server, exactly as
//! loaded from the configuration file. Section bodies are opaque to this
//! crate; the interpreter engine's compiler is the only thing that reads
//! them.

use crate::sections::SectionDirection;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One uncompiled policy section body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSection {
    /// Policy instructions, opaque to everything but the section compiler
    #[serde(default)]
    pub instructions: Vec<String>,
}

/// One virtual server's worth of named policy sections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerScope {
    /// Virtual server name, for diagnostics only
    #[serde(default)]
    pub name: String,

    /// "recv" sections, keyed by packet-type alias
    #[serde(default)]
    pub recv: HashMap<String, RawSection>,

    /// "send" sections, keyed by packet-type alias
    #[serde(default)]
    pub send: HashMap<String, RawSection>,
}

impl ServerScope {
    /// Load a scope from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Parse a scope from a JSON string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Raw section for a (direction, alias) pair, if configured
    pub fn section(&self, direction: SectionDirection, alias: &str) -> Option<&RawSection> {
        match direction {
            SectionDirection::Recv => self.recv.get(alias),
            SectionDirection::Send => self.send.get(alias),
        }
    }

    /// A minimal scope handling CoA-Request, suitable as a starting point
    /// for a new deployment
    pub fn example() -> Self {
        let mut recv = HashMap::new();
        recv.insert(
            "CoA-Request".to_string(),
            RawSection {
                instructions: vec!["ok".to_string()],
            },
        );

        let mut send = HashMap::new();
        send.insert(
            "CoA-ACK".to_string(),
            RawSection {
                instructions: vec!["ok".to_string()],
            },
        );
        send.insert(
            "CoA-NAK".to_string(),
            RawSection {
                instructions: vec!["ok".to_string()],
            },
        );

        ServerScope {
            name: "coa".to_string(),
            recv,
            send,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scope() {
        let json = r#"{
            "name": "coa",
            "recv": {
                "CoA-Request": { "instructions": ["update session", "ok"] }
            },
            "send": {
                "CoA-ACK": { "instructions": ["ok"] },
                "CoA-NAK": { "instructions": ["ok"] }
            }
        }"#;

        let scope = ServerScope::from_str(json).unwrap();
        assert_eq!(scope.name, "coa");
        let recv = scope
            .section(SectionDirection::Recv, "CoA-Request")
            .unwrap();
        assert_eq!(recv.instructions.len(), 2);
        assert!(scope.section(SectionDirection::Recv, "Disconnect-Request").is_none());
    }

    #[test]
    fn test_empty_scope_parses() {
        let scope = ServerScope::from_str("{}").unwrap();
        assert!(scope.recv.is_empty());
        assert!(scope.send.is_empty());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let result = ServerScope::from_str("not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_example_round_trips() {
        let scope = ServerScope::example();
        let json = serde_json::to_string(&scope).unwrap();
        let parsed = ServerScope::from_str(&json).unwrap();
        assert!(parsed.section(SectionDirection::Recv, "CoA-Request").is_some());
        assert!(parsed.section(SectionDirection::Send, "CoA-NAK").is_some());
    }
}
