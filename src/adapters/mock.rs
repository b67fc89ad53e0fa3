use std::{cell::Cell, time::SystemTime};

use crate::{adapters, model};

/// In-memory bucket. `objects: None` means the bucket does not exist.
pub struct MockClient {
    pub objects: Option<Vec<&'static str>>,
    pub fail: bool,
    /// Listing calls that succeed before every later one fails.
    pub fail_after: Option<usize>,
    pub list_calls: Cell<usize>,
}

impl MockClient {
    pub fn with_keys(keys: Vec<&'static str>) -> Self {
        Self {
            objects: Some(keys),
            fail: false,
            fail_after: None,
            list_calls: Cell::new(0),
        }
    }

    pub fn absent() -> Self {
        Self {
            objects: None,
            fail: false,
            fail_after: None,
            list_calls: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            objects: None,
            fail: true,
            fail_after: None,
            list_calls: Cell::new(0),
        }
    }

    pub fn failing_after(mut self, calls: usize) -> Self {
        self.fail_after = Some(calls);
        self
    }
}

impl adapters::ObjectAdapter for MockClient {
    fn bucket_exists(&self, bucket: &str) -> Result<bool, model::bucket::BucketError> {
        if self.fail {
            return Err(model::bucket::BucketError::service(
                &format!("head_bucket: {}", bucket),
                "access denied",
            ));
        }

        Ok(self.objects.is_some())
    }

    fn list_bucket_objects(
        &self,
        bucket: &str,
        prefix: &str,
    ) -> Result<Vec<model::bucket::ObjectSummary>, model::bucket::BucketError> {
        let calls = self.list_calls.get();
        self.list_calls.set(calls + 1);

        if self.fail || self.fail_after.is_some_and(|after| calls >= after) {
            return Err(model::bucket::BucketError::service(
                &format!("list_objects: {}", bucket),
                "slow down",
            ));
        }

        let keys = self
            .objects
            .as_ref()
            .ok_or_else(|| model::bucket::BucketError::NotFound(bucket.to_string()))?;

        Ok(keys
            .iter()
            .filter(|key| key.starts_with(prefix))
            .map(|key| model::bucket::ObjectSummary {
                key: key.to_string(),
                size: if key.ends_with('/') { 0 } else { 1 },
                modified_time: SystemTime::UNIX_EPOCH,
            })
            .collect())
    }
}
