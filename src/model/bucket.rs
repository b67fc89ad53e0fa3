use std::time::SystemTime;

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectSummary {
    pub key: String,
    pub size: i64,
    pub modified_time: SystemTime,
}

impl ObjectSummary {
    /// Zero-byte placeholders some consoles create for "folders".
    pub fn is_directory_marker(&self) -> bool {
        self.key.ends_with('/')
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BucketState {
    Unconnected,
    Present,
    Absent,
}

#[derive(Debug, thiserror::Error)]
pub enum BucketError {
    #[error("bucket '{0}' does not exist")]
    NotFound(String),
    #[error("failed to {operation}: {message}")]
    Service { operation: String, message: String },
    #[error("failed to parse bucket uri: {0}")]
    InvalidUri(String),
    #[error("failed to configure storage client: {0}")]
    Config(String),
}

impl BucketError {
    pub fn service(operation: &str, err: impl std::fmt::Display) -> Self {
        BucketError::Service {
            operation: operation.to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_directory_marker() {
        let cases = vec![
            ("img/", true),
            ("img/a.png", false),
            ("a/b/c/", true),
            ("notes.txt", false),
        ];

        for (key, expected) in cases {
            let object = ObjectSummary {
                key: key.to_string(),
                size: 0,
                modified_time: SystemTime::UNIX_EPOCH,
            };
            assert_eq!(
                object.is_directory_marker(),
                expected,
                "failed for case: {}",
                key
            );
        }
    }

    #[test]
    fn test_service_error_message() {
        let err = BucketError::service("list_objects", "access denied");
        assert_eq!(err.to_string(), "failed to list_objects: access denied");
    }
}
