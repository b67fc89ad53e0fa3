use std::{future::Future, pin::Pin};

use aws_sdk_s3::{
    error::SdkError,
    operation::{
        head_bucket::{HeadBucketError, HeadBucketOutput},
        list_objects_v2::{ListObjectsV2Error, ListObjectsV2Output},
    },
};

pub type S3Future<T, E> = Pin<Box<dyn Future<Output = Result<T, SdkError<E>>> + Send>>;

/// The S3 calls the bucket facade needs, boxed so a scripted client can stand in.
pub trait ObjectS3 {
    fn head_bucket(&self, bucket: &str) -> S3Future<HeadBucketOutput, HeadBucketError>;

    fn list_objects_v2(
        &self,
        bucket: &str,
        prefix: &str,
        continuation_token: Option<String>,
    ) -> S3Future<ListObjectsV2Output, ListObjectsV2Error>;
}

impl ObjectS3 for aws_sdk_s3::Client {
    fn head_bucket(&self, bucket: &str) -> S3Future<HeadBucketOutput, HeadBucketError> {
        Box::pin(self.head_bucket().bucket(bucket).send())
    }

    fn list_objects_v2(
        &self,
        bucket: &str,
        prefix: &str,
        continuation_token: Option<String>,
    ) -> S3Future<ListObjectsV2Output, ListObjectsV2Error> {
        let mut req = self.list_objects_v2().bucket(bucket);

        if !prefix.is_empty() {
            req = req.prefix(prefix);
        }

        if let Some(token) = continuation_token {
            req = req.continuation_token(token);
        }

        Box::pin(req.send())
    }
}

#[cfg(test)]
#[derive(Clone, Copy, Debug)]
pub enum HeadBucketReply {
    Found,
    NotFound,
    AccessDenied,
    Unreachable,
}

/// Serves `pages` in order, handing out `page-<n>` continuation tokens.
#[cfg(test)]
pub struct MockS3Client {
    pub pages: Vec<Vec<&'static str>>,
    pub head: HeadBucketReply,
    pub fail_listing: bool,
    pub requested_tokens: std::sync::Mutex<Vec<Option<String>>>,
}

#[cfg(test)]
impl MockS3Client {
    pub fn with_pages(pages: Vec<Vec<&'static str>>) -> Self {
        Self {
            pages,
            head: HeadBucketReply::Found,
            fail_listing: false,
            requested_tokens: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[cfg(test)]
impl ObjectS3 for MockS3Client {
    fn head_bucket(&self, _bucket: &str) -> S3Future<HeadBucketOutput, HeadBucketError> {
        fn raw(status: u16) -> aws_smithy_runtime_api::http::Response {
            aws_smithy_runtime_api::http::Response::new(
                status.try_into().unwrap(),
                aws_smithy_types::body::SdkBody::empty(),
            )
        }

        let reply = match self.head {
            HeadBucketReply::Found => Ok(HeadBucketOutput::builder().build()),
            HeadBucketReply::NotFound => Err(SdkError::service_error(
                HeadBucketError::NotFound(aws_sdk_s3::types::error::NotFound::builder().build()),
                raw(404),
            )),
            HeadBucketReply::AccessDenied => Err(SdkError::service_error(
                HeadBucketError::generic(
                    aws_sdk_s3::error::ErrorMetadata::builder()
                        .code("AccessDenied")
                        .message("access denied")
                        .build(),
                ),
                raw(403),
            )),
            HeadBucketReply::Unreachable => {
                Err(SdkError::construction_failure("scripted connect failure"))
            }
        };

        Box::pin(std::future::ready(reply))
    }

    fn list_objects_v2(
        &self,
        _bucket: &str,
        prefix: &str,
        continuation_token: Option<String>,
    ) -> S3Future<ListObjectsV2Output, ListObjectsV2Error> {
        self.requested_tokens
            .lock()
            .unwrap()
            .push(continuation_token.clone());

        if self.fail_listing {
            return Box::pin(std::future::ready(Err(SdkError::construction_failure(
                "scripted listing failure",
            ))));
        }

        let page = continuation_token
            .as_deref()
            .and_then(|tok| tok.strip_prefix("page-"))
            .and_then(|n| n.parse::<usize>().ok())
            .unwrap_or(0);

        let mut output = ListObjectsV2Output::builder();
        if let Some(keys) = self.pages.get(page) {
            for key in keys.iter().filter(|key| key.starts_with(prefix)) {
                output = output.contents(
                    aws_sdk_s3::types::Object::builder()
                        .key(*key)
                        .size(1)
                        .build(),
                );
            }
        }

        if page + 1 < self.pages.len() {
            output = output
                .is_truncated(true)
                .next_continuation_token(format!("page-{}", page + 1));
        }

        Box::pin(std::future::ready(Ok(output.build())))
    }
}
