use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};

use crate::api::GeocodingAPI;
use crate::entities::{Coordinates, GeocodingResult};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct SearchParams {
    q: String,
}

pub async fn search(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<GeocodingResult>>, Error> {
    let results = api.search(params.q).await?;

    Ok(results.into())
}

pub async fn reverse(
    Extension(api): Extension<DynAPI>,
    Query(coordinates): Query<Coordinates>,
) -> Result<Json<Option<GeocodingResult>>, Error> {
    let result = api.reverse(coordinates).await?;

    Ok(result.into())
}

pub async fn suggestions(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<GeocodingResult>>, Error> {
    let results = api.suggest(params.q).await?;

    Ok(results.into())
}
