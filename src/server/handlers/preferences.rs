use axum::extract::{Extension, Json};

use crate::api::PreferenceAPI;
use crate::entities::{Preferences, PreferencesUpdate};
use crate::error::Error;
use crate::server::DynAPI;

pub async fn find(Extension(api): Extension<DynAPI>) -> Result<Json<Preferences>, Error> {
    let preferences = api.find_preferences().await?;

    Ok(preferences.into())
}

pub async fn update(
    Extension(api): Extension<DynAPI>,
    Json(update): Json<PreferencesUpdate>,
) -> Result<Json<Preferences>, Error> {
    let preferences = api.update_preferences(update).await?;

    Ok(preferences.into())
}
