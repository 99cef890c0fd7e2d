use quip_catalog::CatalogError;

/// Errors from catalog storage operations.
///
/// All three variants are flavors of "storage unreadable or malformed":
/// a missing or unreadable file, content that is not the expected JSON
/// shape, or a parsed catalog violating a structural invariant.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O failure reading or writing the data file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The file content is not a JSON array of category objects.
    #[error("parse error: {0}")]
    Parse(String),

    /// The parsed catalog violates a structural invariant.
    #[error("invalid catalog: {0}")]
    Invalid(#[from] CatalogError),
}

impl StoreError {
    /// Stable lowercase label naming the failure class.
    ///
    /// Reported by the validator next to the error message.
    pub fn classification(&self) -> &'static str {
        match self {
            StoreError::Io(_) => "io",
            StoreError::Parse(_) => "parse",
            StoreError::Invalid(_) => "invalid",
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_labels() {
        let io = StoreError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.classification(), "io");

        let parse = StoreError::Parse("expected an array".into());
        assert_eq!(parse.classification(), "parse");

        let invalid = StoreError::Invalid(CatalogError::DuplicateCategoryId { id: "x".into() });
        assert_eq!(invalid.classification(), "invalid");
    }

    #[test]
    fn messages_are_descriptive() {
        let parse = StoreError::Parse("expected an array at line 1".into());
        assert_eq!(parse.to_string(), "parse error: expected an array at line 1");

        let invalid = StoreError::Invalid(CatalogError::DuplicateCategoryId { id: "sweet".into() });
        assert_eq!(invalid.to_string(), "invalid catalog: duplicate category id: sweet");
    }
}
