use std::time::{Duration, SystemTime};

use aws_sdk_s3::error::DisplayErrorContext;
use tracing::debug;

use crate::{
    adapters,
    model::{self, s3::ObjectS3},
    util,
};

pub struct S3Adapter<C: ObjectS3> {
    client: C,
}

impl<C: ObjectS3> S3Adapter<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

fn to_system_time(dt: Option<&aws_sdk_s3::primitives::DateTime>) -> SystemTime {
    match dt {
        Some(dt) if dt.secs() >= 0 => {
            SystemTime::UNIX_EPOCH + Duration::new(dt.secs() as u64, dt.subsec_nanos())
        }
        _ => SystemTime::UNIX_EPOCH,
    }
}

impl<C: ObjectS3> adapters::ObjectAdapter for S3Adapter<C> {
    fn bucket_exists(&self, bucket: &str) -> Result<bool, model::bucket::BucketError> {
        match util::poll::wait(self.client.head_bucket(bucket)) {
            Ok(_) => Ok(true),
            Err(err) => {
                if let Some(svc_err) = err.as_service_error() {
                    if svc_err.is_not_found() {
                        return Ok(false);
                    }
                }

                Err(model::bucket::BucketError::service(
                    &format!("head_bucket: {}", bucket),
                    DisplayErrorContext(&err),
                ))
            }
        }
    }

    fn list_bucket_objects(
        &self,
        bucket: &str,
        prefix: &str,
    ) -> Result<Vec<model::bucket::ObjectSummary>, model::bucket::BucketError> {
        let mut objects = Vec::new();
        let mut continuation_token: Option<String> = None;
        let mut pages = 0;

        loop {
            let lo = util::poll::wait(self.client.list_objects_v2(
                bucket,
                prefix,
                continuation_token,
            ))
            .map_err(|err| {
                model::bucket::BucketError::service(
                    &format!("list_objects: {}", bucket),
                    DisplayErrorContext(&err),
                )
            })?;
            pages += 1;

            for o in lo.contents() {
                objects.push(model::bucket::ObjectSummary {
                    key: o.key().unwrap_or("").to_string(),
                    size: o.size().unwrap_or(0),
                    modified_time: to_system_time(o.last_modified()),
                });
            }

            continuation_token = lo.next_continuation_token().map(|tok| tok.to_string());
            if continuation_token.is_none() {
                break;
            }
        }

        debug!(bucket = bucket, pages = pages, objects = objects.len(), "listed");
        Ok(objects)
    }
}
