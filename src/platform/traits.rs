use async_trait::async_trait;

use super::{FetchOutcome, PlatformError, ResolvedVideo};

#[async_trait]
pub trait VideoResolver: Send + Sync {
    /// Turns a share link into a direct media URL plus metadata.
    ///
    /// Never fails: transport and payload problems are logged and reported as `None`.
    async fn resolve(&self, link: &str) -> Option<ResolvedVideo>;
}

#[async_trait]
pub trait MediaFetcher: Send + Sync {
    /// Downloads the file behind `url`. Only transport failures are errors; an
    /// unexpected HTTP status is a regular [`FetchOutcome::Status`].
    async fn fetch(&self, url: &str) -> Result<FetchOutcome, PlatformError>;
}
