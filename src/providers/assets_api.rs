use crate::core::{
    asset::{AssetRecord, decode_payload},
    error::FetchError,
    source::AssetSource,
};
use async_trait::async_trait;
use tracing::{debug, error, instrument};

/// Reads asset records from `{base_url}/assets/`.
pub struct AssetsApiProvider {
    base_url: String,
    client: reqwest::Client,
}

impl AssetsApiProvider {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn assets_url(&self) -> String {
        format!("{}/assets/", self.base_url)
    }
}

#[async_trait]
impl AssetSource for AssetsApiProvider {
    #[instrument(name = "AssetsFetch", skip(self), fields(base_url = %self.base_url))]
    async fn fetch_assets(&self) -> Result<Vec<AssetRecord>, FetchError> {
        let url = self.assets_url();
        debug!("Requesting assets from {}", url);

        let response = self.client.get(&url).send().await?;
        debug!(status = %response.status(), "Received assets response");

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        let response_text = response.text().await?;

        match decode_payload(&response_text) {
            Ok(records) => Ok(records),
            Err(e) => {
                error!(
                    error = ?e,
                    response = %response_text,
                    "Failed to parse assets response"
                );
                Err(e)
            }
        }
    }
}
