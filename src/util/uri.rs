use crate::model::bucket::BucketError;

#[derive(Debug, PartialEq, Eq)]
pub enum Provider {
    AWS,
    GCS,
}

/// Splits `s3://name`, `gs://name` or a bare `name` (S3) into provider and bucket.
pub fn parse_bucket_uri(bucket_uri: &str) -> Result<(Provider, &str), BucketError> {
    let (provider, bucket) = match bucket_uri.split_once("://") {
        Some(("s3", rest)) => (Provider::AWS, rest),
        Some(("gs", rest)) => (Provider::GCS, rest),
        Some(_) => return Err(BucketError::InvalidUri(bucket_uri.to_string())),
        None => (Provider::AWS, bucket_uri),
    };

    let bucket = bucket.trim_end_matches('/');
    if bucket.is_empty() || bucket.contains('/') {
        return Err(BucketError::InvalidUri(bucket_uri.to_string()));
    }

    Ok((provider, bucket))
}
