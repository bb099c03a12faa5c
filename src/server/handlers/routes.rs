use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::RouteAPI;
use crate::entities::{Profile, RoutePlan, VehicleType};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct PlanParams {
    origin: String,
    destination: String,
    #[serde(default)]
    vehicle_type: VehicleType,
    #[serde(default)]
    profile: Profile,
}

pub async fn plan(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<PlanParams>,
) -> Result<Json<RoutePlan>, Error> {
    let plan = api
        .plan_routes(
            params.origin,
            params.destination,
            params.vehicle_type,
            params.profile,
        )
        .await?;

    Ok(plan.into())
}
