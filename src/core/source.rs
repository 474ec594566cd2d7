//! Where asset records come from

use super::asset::AssetRecord;
use super::error::FetchError;
use async_trait::async_trait;

#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Fetches the full list of asset records in one request.
    async fn fetch_assets(&self) -> Result<Vec<AssetRecord>, FetchError>;
}
