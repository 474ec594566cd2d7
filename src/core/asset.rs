//! Asset records as served by the assets endpoint.

use super::error::FetchError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Transaction kind that counts as a holding.
pub const BUY: &str = "buy";

/// One transaction-like entry from the remote data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub asset_type: String,
    pub amount: f64,
    pub price_per_unit: f64,
    pub name: String,
}

impl AssetRecord {
    pub fn is_buy(&self) -> bool {
        self.kind == BUY
    }

    /// Value of this record, `amount * price_per_unit`.
    pub fn value(&self) -> f64 {
        self.amount * self.price_per_unit
    }
}

#[derive(Debug, Deserialize)]
struct AssetsPayload {
    items: Vec<AssetRecord>,
}

/// Decodes a `{ "items": [...] }` body into typed records.
///
/// Any shape mismatch (missing `items`, non-array, missing or non-numeric
/// record fields) is reported as [`FetchError::Malformed`].
pub fn decode_payload(body: &str) -> Result<Vec<AssetRecord>, FetchError> {
    let payload: AssetsPayload = serde_json::from_str(body)?;
    debug!(count = payload.items.len(), "Decoded asset payload");
    Ok(payload.items)
}
