use super::Engine;

use async_trait::async_trait;

use crate::{
    api::{PlaceAPI, PreferenceAPI, RouteAPI},
    entities::{PlannedRoute, Profile, RoutePlan, RouteResult, VehicleType},
    error::{invalid_field_error, not_found_error, Error},
    external::RouteOptions,
};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn plan_routes(
        &self,
        origin: String,
        destination: String,
        vehicle: VehicleType,
        profile: Profile,
    ) -> Result<RoutePlan, Error> {
        let (origin, destination) = (origin.trim(), destination.trim());
        if origin.is_empty() {
            return Err(invalid_field_error("origin"));
        }
        if destination.is_empty() {
            return Err(invalid_field_error("destination"));
        }

        let (origin_hits, destination_hits) = futures::try_join!(
            self.geocoder.search(origin),
            self.geocoder.search(destination)
        )?;

        let (origin, destination) = match (
            origin_hits.into_iter().next(),
            destination_hits.into_iter().next(),
        ) {
            (Some(origin), Some(destination)) => (origin, destination),
            _ => return Err(not_found_error("origin or destination")),
        };

        let options = RouteOptions {
            profile,
            alternatives: true,
        };
        let raw_routes = self
            .router
            .routes(origin.coordinates, destination.coordinates, options)
            .await?;

        let preferences = self.find_preferences().await?;

        let routes = raw_routes
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let route = RouteResult::new(index + 1, raw);
                let cost = self.cost(route.distance_km(), &route.geometry, &preferences, vehicle);
                PlannedRoute { route, cost }
            })
            .collect::<Vec<_>>();

        tracing::info!(routes = routes.len(), "planned routes");

        for place in [&origin, &destination] {
            if let Err(err) = self
                .push_history(place.display_name.clone(), place.coordinates)
                .await
            {
                tracing::warn!(%err, label = %place.display_name, "could not record history");
            }
        }

        Ok(RoutePlan {
            origin,
            destination,
            routes,
        })
    }
}
