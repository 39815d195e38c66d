//! NFT marketplace endpoints: collections, listings, activities and
//! the launchpad carousel.

use axum::{
    extract::{Path, Query},
    response::Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::api::errors::{ApiError, ApiResult};
use crate::nft::collections::{
    self, Activity, CollectionSummary, LaunchpadProject, NftListing,
};

pub async fn list_collections() -> Json<Vec<CollectionSummary>> {
    Json(
        collections::COLLECTIONS
            .iter()
            .map(collections::summary)
            .collect(),
    )
}

/// Collections ordered by 24h volume, busiest first.
pub async fn trending_collections() -> Json<Vec<CollectionSummary>> {
    let mut summaries: Vec<CollectionSummary> = collections::COLLECTIONS
        .iter()
        .map(collections::summary)
        .collect();
    summaries.sort_by(|a, b| {
        b.volume_24h
            .0
            .partial_cmp(&a.volume_24h.0)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Json(summaries)
}

pub async fn get_collection(Path(collection_id): Path<String>) -> ApiResult<Json<CollectionSummary>> {
    let collection = collections::by_id(&collection_id)
        .ok_or_else(|| ApiError::collection_not_found(&collection_id))?;
    Ok(Json(collections::summary(collection)))
}

#[derive(Debug, Deserialize)]
pub struct BrowseParams {
    pub collection: Option<String>,
    pub count: Option<usize>,
}

/// A page of listings. Unknown collections 404; `count` is clamped to
/// the page cap, defaulting to 20.
pub async fn collection_nfts(Query(params): Query<BrowseParams>) -> ApiResult<Json<Vec<NftListing>>> {
    let collection_id = params
        .collection
        .unwrap_or_else(|| collections::HYPIO.id.to_string());
    let collection = collections::by_id(&collection_id)
        .ok_or_else(|| ApiError::collection_not_found(&collection_id))?;
    let count = params.count.unwrap_or(20);

    let page = {
        let mut rng = rand::thread_rng();
        collections::browse(collection, count, &mut rng)
    };
    Ok(Json(page))
}

pub async fn nft_detail(
    Path((collection_id, token_id)): Path<(String, u32)>,
) -> ApiResult<Json<NftListing>> {
    let collection = collections::by_id(&collection_id)
        .ok_or_else(|| ApiError::collection_not_found(&collection_id))?;
    if token_id == 0 || token_id > collection.total_supply {
        return Err(ApiError::token_out_of_range(token_id, collection.total_supply));
    }
    Ok(Json(collections::listing(collection, token_id)))
}

pub async fn activities() -> Json<Vec<Activity>> {
    let feed = {
        let mut rng = rand::thread_rng();
        collections::activities(Utc::now(), &mut rng)
    };
    Json(feed)
}

pub async fn launchpad_projects() -> Json<Vec<LaunchpadProject>> {
    Json(collections::launchpad_projects(Utc::now()))
}
