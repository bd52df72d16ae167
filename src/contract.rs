//! Contract Model
//!
//! Serde model of a recorded consumer/provider interaction contract plus the
//! checks the verification harness runs against a live provider response.
//! The file format is a minimal subset of the pact interchange format: the
//! participants, a list of interactions, and the specification metadata.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// == Contract Errors ==
/// Errors raised while loading a contract file.
#[derive(Error, Debug)]
pub enum ContractError {
    /// The contract file could not be read
    #[error("failed to read contract file: {0}")]
    Io(#[from] std::io::Error),

    /// The contract file is not valid JSON or has the wrong shape
    #[error("failed to parse contract file: {0}")]
    Parse(#[from] serde_json::Error),
}

// == Contract File Model ==
/// A participant in the contract (consumer or provider).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// Participant name as recorded by the consumer test
    pub name: String,
}

/// The recorded request shape of an interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRequest {
    /// HTTP method (e.g. "GET")
    pub method: String,
    /// Request path (e.g. "/sample/27")
    pub path: String,
}

/// The expected response shape of an interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionResponse {
    /// Expected HTTP status code
    pub status: u16,
    /// Headers the provider must send with the declared values
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Expected JSON body; `None` means the body is not checked
    #[serde(default)]
    pub body: Option<Value>,
}

/// A single recorded request/response pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Human-readable description (e.g. "A request to get sample data")
    pub description: String,
    /// The request the consumer sends
    pub request: InteractionRequest,
    /// The response the provider must produce
    pub response: InteractionResponse,
}

/// A recorded contract between one consumer and one provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pact {
    /// The consumer that recorded the contract
    pub consumer: Participant,
    /// The provider being verified
    pub provider: Participant,
    /// All recorded interactions
    pub interactions: Vec<Interaction>,
    /// Format metadata (e.g. pact specification version)
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

impl Pact {
    /// Loads a contract from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContractError> {
        let raw = fs::read_to_string(path)?;
        let pact = serde_json::from_str(&raw)?;
        Ok(pact)
    }
}

// == Interaction Verification ==
impl Interaction {
    /// Checks an actual provider response against this interaction's
    /// expected response.
    ///
    /// Headers are compared case-insensitively by name and only the headers
    /// declared in the contract are checked. The body is compared as parsed
    /// JSON, so key order and whitespace do not matter.
    ///
    /// Returns a list of human-readable mismatches; empty means the response
    /// honours the contract.
    pub fn verify(
        &self,
        actual_status: u16,
        actual_headers: &HashMap<String, String>,
        actual_body: &[u8],
    ) -> Vec<String> {
        let mut mismatches = Vec::new();

        if actual_status != self.response.status {
            mismatches.push(format!(
                "status: expected {}, got {}",
                self.response.status, actual_status
            ));
        }

        for (name, expected) in &self.response.headers {
            let actual = actual_headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str());

            match actual {
                Some(v) if v == expected => {}
                Some(v) => mismatches.push(format!(
                    "header '{}': expected '{}', got '{}'",
                    name, expected, v
                )),
                None => mismatches.push(format!("header '{}': missing", name)),
            }
        }

        if let Some(expected_body) = &self.response.body {
            match serde_json::from_slice::<Value>(actual_body) {
                Ok(actual_json) if &actual_json == expected_body => {}
                Ok(actual_json) => mismatches.push(format!(
                    "body: expected {}, got {}",
                    expected_body, actual_json
                )),
                Err(e) => mismatches.push(format!("body: not valid JSON: {}", e)),
            }
        }

        mismatches
    }
}
