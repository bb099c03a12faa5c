use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;

use super::{instructions, RouteOptions, RouteProvider};
use crate::{
    entities::{Coordinates, RawRoute, RouteStep},
    error::{unreachable_error, upstream_error, Error},
};

#[derive(Clone, Debug, Deserialize)]
struct Response {
    code: String,
    routes: Option<Vec<Route>>,
}

#[derive(Clone, Debug, Deserialize)]
struct Route {
    distance: f64,
    duration: f64,
    geometry: Geometry,
    #[serde(default)]
    legs: Vec<Leg>,
}

#[derive(Clone, Debug, Deserialize)]
struct Geometry {
    coordinates: Vec<[f64; 2]>,
}

#[derive(Clone, Debug, Deserialize)]
struct Leg {
    summary: Option<String>,
    #[serde(default)]
    steps: Vec<Step>,
}

#[derive(Clone, Debug, Deserialize)]
struct Step {
    distance: Option<f64>,
    duration: Option<f64>,
    name: Option<String>,
    #[serde(default)]
    maneuver: Maneuver,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct Maneuver {
    #[serde(rename = "type")]
    kind: Option<String>,
    modifier: Option<String>,
    location: Option<[f64; 2]>,
}

impl From<Route> for RawRoute {
    fn from(route: Route) -> Self {
        let summary = route.legs.first().and_then(|leg| leg.summary.clone());

        let steps = route
            .legs
            .iter()
            .flat_map(|leg| leg.steps.iter())
            .map(|step| RouteStep {
                instruction: instructions::synthesize(
                    step.maneuver.kind.as_deref(),
                    step.maneuver.modifier.as_deref(),
                    step.name.as_deref(),
                ),
                distance_meters: step.distance.unwrap_or(0.0),
                duration_seconds: step.duration.unwrap_or(0.0),
                location: Coordinates::from_lon_lat(step.maneuver.location.unwrap_or([0.0, 0.0])),
            })
            .collect();

        RawRoute {
            summary,
            distance_meters: route.distance,
            duration_seconds: route.duration,
            geometry: route
                .geometry
                .coordinates
                .into_iter()
                .map(Coordinates::from_lon_lat)
                .collect(),
            steps,
        }
    }
}

/// OSRM route service client.
#[derive(Clone, Debug)]
pub struct OsrmClient {
    client: Client,
    base_url: String,
}

impl OsrmClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RouteProvider for OsrmClient {
    #[tracing::instrument(skip(self))]
    async fn routes(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        options: RouteOptions,
    ) -> Result<Vec<RawRoute>, Error> {
        let origin = origin.validate()?;
        let destination = destination.validate()?;

        let url = format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.base_url,
            options.profile.name(),
            origin.longitude,
            origin.latitude,
            destination.longitude,
            destination.latitude
        );

        let res = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .query(&[
                ("overview", "full"),
                ("geometries", "geojson"),
                ("alternatives", if options.alternatives { "true" } else { "false" }),
                ("steps", "true"),
                ("annotations", "false"),
            ])
            .send()
            .await
            .map_err(|err| unreachable_error("Routing", err))?;

        let status = res.status();
        if !status.is_success() {
            return Err(upstream_error(format!("Routing failed: {}", status.as_u16())));
        }

        let data: Response = res
            .json()
            .await
            .map_err(|_| upstream_error("Routing response invalid"))?;

        match data.routes {
            Some(routes) if data.code == "Ok" => Ok(routes.into_iter().map(RawRoute::from).collect()),
            _ => Err(upstream_error("Routing response invalid")),
        }
    }
}
