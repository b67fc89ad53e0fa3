use std::time::SystemTime;

use google_cloud_storage::http::{buckets::get::GetBucketRequest, objects::list::ListObjectsRequest};
use tracing::debug;

use crate::{adapters, model, util};

impl adapters::ObjectAdapter for google_cloud_storage::client::Client {
    fn bucket_exists(&self, bucket: &str) -> Result<bool, model::bucket::BucketError> {
        let req = GetBucketRequest {
            bucket: bucket.to_string(),
            ..Default::default()
        };

        match util::poll::wait(self.get_bucket(&req)) {
            Ok(_) => Ok(true),
            Err(google_cloud_storage::http::Error::Response(err)) if err.code == 404 => Ok(false),
            Err(err) => Err(model::bucket::BucketError::service(
                &format!("get_bucket: {}", bucket),
                err,
            )),
        }
    }

    fn list_bucket_objects(
        &self,
        bucket: &str,
        prefix: &str,
    ) -> Result<Vec<model::bucket::ObjectSummary>, model::bucket::BucketError> {
        let mut objects = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let req = ListObjectsRequest {
                bucket: bucket.to_string(),
                prefix: (!prefix.is_empty()).then(|| prefix.to_string()),
                page_token,
                ..Default::default()
            };

            let lo = util::poll::wait(self.list_objects(&req)).map_err(|err| {
                model::bucket::BucketError::service(&format!("list_objects: {}", bucket), err)
            })?;

            for obj in lo.items.unwrap_or_default() {
                let modified_time = obj
                    .updated
                    .map(SystemTime::from)
                    .unwrap_or(SystemTime::UNIX_EPOCH);

                objects.push(model::bucket::ObjectSummary {
                    key: obj.name,
                    size: obj.size,
                    modified_time,
                });
            }

            page_token = lo.next_page_token;
            if page_token.is_none() {
                break;
            }
        }

        debug!(bucket = bucket, objects = objects.len(), "listed");
        Ok(objects)
    }
}
