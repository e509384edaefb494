use std::path::PathBuf;

/// A single upstream request that did not produce a usable body.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    HttpStatus(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Malformed(err.to_string())
    }
}

/// An upstream record rejected while mapping it onto a `FeedItem`.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("missing or empty field `{0}`")]
    MissingField(&'static str),
}

/// Failure to write a generated document. This is the only fatal error of a run.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_from_json_error() {
        let err = serde_json::from_str::<Vec<u64>>("{not json").unwrap_err();
        let fetch_err: FetchError = err.into();
        assert!(matches!(fetch_err, FetchError::Malformed(_)));
    }

    #[test]
    fn test_write_error_names_path() {
        let err = PersistError::Write {
            path: PathBuf::from("/readonly/feeds-data.json"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("/readonly/feeds-data.json"));
    }

    #[test]
    fn test_record_error_message() {
        let err = RecordError::MissingField("title");
        assert_eq!(err.to_string(), "missing or empty field `title`");
    }
}
