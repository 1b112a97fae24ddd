//! Errors returned to the presentation layer.

use crate::forms::ValidationError;
use crate::gateway::GatewayError;
use crate::store::OperationKind;
use thiserror::Error;

/// Why an operation did not produce its value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OperationError {
    /// The input was rejected locally; nothing was dispatched or sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The operation ran and failed. The message is the one placed in the store.
    #[error("{0}")]
    Rejected(String),
}

/// Turns a gateway failure into the message shown to the user.
///
/// Prefers the server's own message, then the message the error carries, then
/// the operation's default text.
pub fn failure_message(kind: OperationKind, err: &GatewayError) -> String {
    err.server_message()
        .map(str::to_string)
        .or_else(|| err.error_message())
        .unwrap_or_else(|| kind.default_failure_message().to_string())
}
