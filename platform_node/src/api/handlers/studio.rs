//! NFT studio endpoints: on-demand metadata from the weighted trait
//! generator and whole-collection previews.

use axum::{
    extract::{Path, Query},
    response::Json,
};
use serde::Deserialize;

use crate::api::errors::{ApiError, ApiResult};
use crate::nft::traits::{self, CollectionPreview, GeneratorConfig, NftMetadata};

/// Freshly rolled metadata for a token id. Every call re-rolls the
/// traits; nothing is persisted.
pub async fn token_metadata(Path(token_id): Path<u32>) -> ApiResult<Json<NftMetadata>> {
    if token_id == 0 {
        return Err(ApiError::validation_error("token id starts at 1"));
    }
    let metadata = {
        let mut rng = rand::thread_rng();
        traits::generate_metadata(&GeneratorConfig::default(), token_id, &mut rng)
    };
    Ok(Json(metadata))
}

#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    pub size: Option<u32>,
    pub name: Option<String>,
}

/// Generate a batch and report its rarity distribution.
pub async fn collection_preview(Query(params): Query<PreviewParams>) -> Json<CollectionPreview> {
    let mut config = GeneratorConfig::default();
    if let Some(name) = params.name {
        config.collection_name = name;
    }
    let preview = {
        let mut rng = rand::thread_rng();
        traits::generate_preview(&config, params.size.unwrap_or(100), &mut rng)
    };
    Json(preview)
}
