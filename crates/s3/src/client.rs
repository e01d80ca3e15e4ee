//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the ObjectStore trait from
//! sitepush-core.

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;

use sitepush_core::{Config, Error, ObjectStore, Result, UploadTask};

/// Region assumed when the config does not name one
const DEFAULT_REGION: &str = "us-east-1";

/// S3 client wrapper
pub struct S3Client {
    inner: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Client {
    /// Create a new S3 client from an environment config
    pub async fn new(config: &Config) -> Result<Self> {
        // Build credentials provider
        let credentials = aws_credential_types::Credentials::new(
            config.access.clone(),
            config.secret.clone(),
            None, // session token
            None, // expiry
            "sitepush-static-credentials",
        );

        let region = config
            .region
            .clone()
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        // Build SDK config
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(aws_config::Region::new(region));

        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;

        // Path-style addressing for custom endpoints (MinIO and friends)
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.endpoint.is_some())
            .build();

        let client = aws_sdk_s3::Client::from_conf(s3_config);

        Ok(Self {
            inner: client,
            bucket: config.bucket.clone(),
        })
    }

    /// Get the underlying aws-sdk-s3 client
    pub fn inner(&self) -> &aws_sdk_s3::Client {
        &self.inner
    }
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn put_object(&self, task: &UploadTask) -> Result<()> {
        let body = ByteStream::from_path(&task.path)
            .await
            .map_err(|e| Error::Upload(DisplayErrorContext(e).to_string()))?;

        let mut request = self
            .inner
            .put_object()
            .bucket(&self.bucket)
            .key(&task.key)
            .body(body)
            .content_length(task.size as i64)
            // Deploys are public sites
            .acl(ObjectCannedAcl::PublicRead);

        if let Some(content_type) = &task.content_type {
            request = request.content_type(content_type);
        }

        request
            .send()
            .await
            .map_err(|e| Error::Upload(DisplayErrorContext(e).to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint_config() -> Config {
        Config {
            access: "accesskey".into(),
            secret: "secretkey".into(),
            bucket: "my-site".into(),
            endpoint: Some("http://localhost:9000".into()),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_region_defaults_to_us_east_1() {
        let client = S3Client::new(&endpoint_config()).await.unwrap();
        let region = client.inner().config().region().map(|r| r.as_ref());
        assert_eq!(region, Some(DEFAULT_REGION));
    }

    #[tokio::test]
    async fn test_configured_region_is_used() {
        let mut config = endpoint_config();
        config.endpoint = None;
        config.region = Some("eu-west-1".into());

        let client = S3Client::new(&config).await.unwrap();
        let region = client.inner().config().region().map(|r| r.as_ref());
        assert_eq!(region, Some("eu-west-1"));
    }
}
