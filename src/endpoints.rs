//! Errors reported by a chain connection. The return values of the
//! [connections](crate::chain) are parsed and wrapped in structured values,
//! and failures are reported with the types in this module.
use thiserror::Error;
pub use tonic::transport::Endpoint;

#[derive(Error, Debug)]
/// Authentication, connection, or response parsing error.
pub enum RPCError {
    #[error("Call failed: {0}")]
    CallError(#[from] tonic::Status),
    #[error("Could not connect: {0}")]
    Transport(#[from] tonic::transport::Error),
    #[error("Error parsing JSON result: {0}")]
    ParseError(#[from] anyhow::Error),
}

impl From<serde_json::Error> for RPCError {
    fn from(x: serde_json::Error) -> Self { Self::ParseError(x.into()) }
}

impl RPCError {
    /// Return whether the error indicates the request is invalid, for example
    /// a malformed query or a query the contract rejected.
    /// Retrying a request in this case will likely not succeed.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            RPCError::CallError(e) => {
                matches!(e.code(), tonic::Code::InvalidArgument)
            }
            RPCError::Transport(_) => false,
            RPCError::ParseError(_) => false,
        }
    }

    /// Return whether the request timed out at the node or in the transport.
    pub fn is_timeout(&self) -> bool {
        match self {
            RPCError::CallError(e) => {
                matches!(e.code(), tonic::Code::DeadlineExceeded)
            }
            RPCError::Transport(_) => false,
            RPCError::ParseError(_) => false,
        }
    }
}

#[derive(Error, Debug)]
/// Errors that can occur when making queries. This can either be a general
/// connection/authentication error, or the requested item is not found.
pub enum QueryError {
    #[error("RPC error: {0}")]
    /// A general RPC error occurred.
    RPCError(#[from] RPCError),
    #[error("Requested object not found.")]
    /// The requested item was not found, e.g., there is no contract at the
    /// queried address.
    NotFound,
}

impl QueryError {
    /// Whether this error indicates an object was not found.
    pub fn is_not_found(&self) -> bool { matches!(self, QueryError::NotFound) }
}

impl From<tonic::Status> for QueryError {
    fn from(s: tonic::Status) -> Self {
        if s.code() == tonic::Code::NotFound {
            Self::NotFound
        } else {
            Self::RPCError(s.into())
        }
    }
}

impl From<tonic::transport::Error> for QueryError {
    fn from(s: tonic::transport::Error) -> Self { Self::RPCError(s.into()) }
}

/// Result a GRPC query where the item lookup might fail.
/// This is a simple alias for [std::Result](https://doc.rust-lang.org/std/result/enum.Result.html) that fixes the error type to be [`QueryError`].
pub type QueryResult<A> = Result<A, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_detected_from_status() {
        let err = QueryError::from(tonic::Status::not_found("no such contract"));
        assert!(matches!(err, QueryError::NotFound));
        assert!(err.is_not_found());
        let err = QueryError::from(tonic::Status::invalid_argument("unknown variant"));
        assert!(!err.is_not_found());
        assert!(QueryError::NotFound.is_not_found());
    }

    #[test]
    fn invalid_argument_and_timeout() {
        let err = RPCError::from(tonic::Status::invalid_argument("bad query"));
        assert!(err.is_invalid_argument());
        assert!(!err.is_timeout());
        let err = RPCError::from(tonic::Status::deadline_exceeded("slow"));
        assert!(err.is_timeout());
    }
}
