use axum::extract::{Extension, Json, Path};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::PlaceAPI;
use crate::entities::{Coordinates, Place};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    label: String,
    coordinates: Coordinates,
}

pub async fn list_favorites(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Place>>, Error> {
    let favorites = api.list_favorites().await?;

    Ok(favorites.into())
}

pub async fn add_favorite(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<(StatusCode, Json<Place>), Error> {
    let place = api.add_favorite(params.label, params.coordinates).await?;

    Ok((StatusCode::CREATED, place.into()))
}

pub async fn remove_favorite(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Place>, Error> {
    let place = api.remove_favorite(id).await?;

    Ok(place.into())
}

pub async fn list_history(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Place>>, Error> {
    let history = api.list_history().await?;

    Ok(history.into())
}

pub async fn push_history(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<(StatusCode, Json<Place>), Error> {
    let place = api.push_history(params.label, params.coordinates).await?;

    Ok((StatusCode::CREATED, place.into()))
}
