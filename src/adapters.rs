use crate::model;

pub mod gcs;
#[cfg(test)]
pub mod mock;
pub mod s3;

/// Read-only view of a storage service, as far as a bucket facade needs one.
pub trait ObjectAdapter {
    /// `Ok(false)` only when the service reports the bucket as not found.
    fn bucket_exists(&self, bucket: &str) -> Result<bool, model::bucket::BucketError>;

    /// Every object under `prefix`, following continuation tokens to the end.
    fn list_bucket_objects(
        &self,
        bucket: &str,
        prefix: &str,
    ) -> Result<Vec<model::bucket::ObjectSummary>, model::bucket::BucketError>;
}
