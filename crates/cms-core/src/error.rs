//! Domain-level error types.

use thiserror::Error;

/// Wire message for [`SubmissionError::MissingRequiredFields`].
pub const MISSING_REQUIRED_FIELDS_MESSAGE: &str = "Missing required fields";

/// Wire message for [`SubmissionError::HeadingTooShort`].
pub const HEADING_TOO_SHORT_MESSAGE: &str = "Heading must be at least 3 characters long";

/// Wire message for [`SubmissionError::Processing`].
pub const PROCESSING_FAILURE_MESSAGE: &str = "Internal server error";

/// Discriminant of a failed submission, for callers that branch on the kind
/// rather than the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingRequiredFields,
    HeadingTooShort,
    ProcessingFailure,
    TransportFailure,
}

/// Submission failures - the `Failure(kind, message)` half of a submission.
///
/// The `Display` output of each variant is the human-readable message
/// surfaced to the user verbatim.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Missing required fields")]
    MissingRequiredFields,

    #[error("Heading must be at least 3 characters long")]
    HeadingTooShort,

    /// Unexpected internal fault. The detail is for logs only.
    #[error("Internal server error")]
    Processing(String),

    /// The request never reached the handler.
    #[error("Unable to reach the content service: {0}")]
    Transport(String),
}

impl SubmissionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SubmissionError::MissingRequiredFields => ErrorKind::MissingRequiredFields,
            SubmissionError::HeadingTooShort => ErrorKind::HeadingTooShort,
            SubmissionError::Processing(_) => ErrorKind::ProcessingFailure,
            SubmissionError::Transport(_) => ErrorKind::TransportFailure,
        }
    }

    /// Validation failures are the caller's to fix; the handler rejected them
    /// before deriving anything.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SubmissionError::MissingRequiredFields | SubmissionError::HeadingTooShort
        )
    }

    /// Only connectivity failures are worth retrying unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmissionError::Transport(_))
    }

    /// Rebuild an error from the message carried in an error envelope.
    ///
    /// Unknown messages collapse to [`SubmissionError::Processing`].
    pub fn from_wire_message(message: &str) -> Self {
        match message {
            MISSING_REQUIRED_FIELDS_MESSAGE => SubmissionError::MissingRequiredFields,
            HEADING_TOO_SHORT_MESSAGE => SubmissionError::HeadingTooShort,
            other => SubmissionError::Processing(other.to_string()),
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<RepoError> for SubmissionError {
    fn from(err: RepoError) -> Self {
        SubmissionError::Processing(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_wire_constants() {
        assert_eq!(
            SubmissionError::MissingRequiredFields.to_string(),
            MISSING_REQUIRED_FIELDS_MESSAGE
        );
        assert_eq!(
            SubmissionError::HeadingTooShort.to_string(),
            HEADING_TOO_SHORT_MESSAGE
        );
        assert_eq!(
            SubmissionError::Processing("disk on fire".into()).to_string(),
            PROCESSING_FAILURE_MESSAGE
        );
    }

    #[test]
    fn wire_message_round_trips_kind() {
        for err in [
            SubmissionError::MissingRequiredFields,
            SubmissionError::HeadingTooShort,
            SubmissionError::Processing("x".into()),
        ] {
            let rebuilt = SubmissionError::from_wire_message(&err.to_string());
            assert_eq!(rebuilt.kind(), err.kind());
        }
    }

    #[test]
    fn only_transport_is_retryable() {
        assert!(SubmissionError::Transport("refused".into()).is_retryable());
        assert!(!SubmissionError::Processing("x".into()).is_retryable());
        assert!(!SubmissionError::HeadingTooShort.is_retryable());
        assert!(SubmissionError::HeadingTooShort.is_validation());
        assert!(!SubmissionError::Transport("refused".into()).is_validation());
    }

    #[test]
    fn repo_error_becomes_processing_failure() {
        let err: SubmissionError = RepoError::Unavailable("store offline".into()).into();
        assert_eq!(err.kind(), ErrorKind::ProcessingFailure);
    }
}
