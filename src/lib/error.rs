// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A referenced resource could not be found by name.
    ResourceNotFound,
    /// An enumerated property holds a value outside of its accepted set.
    InvalidValue,
    /// Failure reported by the OneView client: transport, authentication or
    /// appliance side validation.
    ExternalError,
    /// Malformed desired state document or task file.
    InvalidArgument,
    Bug,
}

impl Default for ErrorKind {
    fn default() -> Self {
        Self::Bug
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::fmt::Display for OneViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl Error for OneViewError {}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct OneViewError {
    kind: ErrorKind,
    msg: String,
}

impl OneViewError {
    pub fn new(kind: ErrorKind, msg: String) -> Self {
        Self { kind, msg }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The human readable message without the error kind prefix, this is
    /// what should be shown to the user on failure.
    pub fn msg(&self) -> &str {
        self.msg.as_str()
    }
}

impl From<serde_json::Error> for OneViewError {
    fn from(e: serde_json::Error) -> Self {
        OneViewError::new(
            ErrorKind::InvalidArgument,
            format!("Invalid property: {e}"),
        )
    }
}

impl From<serde_yaml::Error> for OneViewError {
    fn from(e: serde_yaml::Error) -> Self {
        OneViewError::new(
            ErrorKind::InvalidArgument,
            format!("Invalid YAML document: {e}"),
        )
    }
}
