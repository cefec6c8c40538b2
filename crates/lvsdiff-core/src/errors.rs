use thiserror::Error;

/// Result type alias using LvsError
pub type Result<T> = std::result::Result<T, LvsError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every fatal failure of a report parse maps to exactly one kind, and each
/// kind maps to a stable error code usable by callers and tests without
/// matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Source
    /// The report source could not be opened or read
    Io,

    // Document
    /// The report bytes are not valid JSON
    InvalidJson,
    /// The JSON root is not an array
    InvalidShape,
    /// The JSON root array holds no entries
    EmptyReport,

    // Output
    /// The finished report could not be encoded
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::InvalidJson => "ERR_INVALID_JSON",
            ExErrorKind::InvalidShape => "ERR_INVALID_SHAPE",
            ExErrorKind::EmptyReport => "ERR_EMPTY_REPORT",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus the context a caller needs to explain a
/// failed parse: the operation that failed and the source path, if any.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add source path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Failure taxonomy of a report parse
///
/// Only top-level failures are represented here. Malformed individual
/// circuit entries are skipped during extraction and never surface as
/// errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LvsError {
    /// The source could not be opened or read
    #[error("Failed to open file: {path} ({message})")]
    Open { path: String, message: String },

    /// The bytes are not valid JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The JSON root is something other than an array
    #[error("Root JSON is not an array")]
    RootNotArray,

    /// The JSON root array is empty
    #[error("Root JSON array is empty")]
    EmptyRoot,

    /// The finished report could not be serialized
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from LvsError to ExError
impl From<LvsError> for ExError {
    fn from(err: LvsError) -> Self {
        let message = err.to_string();
        match err {
            LvsError::Open { path, .. } => ExError::new(ExErrorKind::Io)
                .with_op("read_source")
                .with_path(path)
                .with_message(message),

            LvsError::Json { .. } => ExError::new(ExErrorKind::InvalidJson)
                .with_op("parse_document")
                .with_message(message),

            LvsError::RootNotArray => ExError::new(ExErrorKind::InvalidShape)
                .with_op("parse_document")
                .with_message(message),

            LvsError::EmptyRoot => ExError::new(ExErrorKind::EmptyReport)
                .with_op("parse_document")
                .with_message(message),

            LvsError::Serialization { .. } => ExError::new(ExErrorKind::Serialization)
                .with_op("to_json")
                .with_message(message),
        }
    }
}

impl From<serde_json::Error> for LvsError {
    fn from(err: serde_json::Error) -> Self {
        LvsError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_error_codes() {
        assert_eq!(ExErrorKind::InvalidJson.code(), "ERR_INVALID_JSON");
        assert_eq!(ExErrorKind::InvalidShape.code(), "ERR_INVALID_SHAPE");
        assert_eq!(ExErrorKind::EmptyReport.code(), "ERR_EMPTY_REPORT");
    }

    #[test]
    fn test_open_error_carries_path() {
        let err = LvsError::Open {
            path: "/tmp/missing.json".to_string(),
            message: "No such file or directory".to_string(),
        };
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::Io);
        assert_eq!(ex.path(), Some("/tmp/missing.json"));
        assert!(ex.message().contains("/tmp/missing.json"));
    }

    #[test]
    fn test_display_includes_code_and_op() {
        let ex: ExError = LvsError::EmptyRoot.into();
        let rendered = ex.to_string();
        assert!(rendered.starts_with("[ERR_EMPTY_REPORT]"));
        assert!(rendered.contains("parse_document"));
    }
}
