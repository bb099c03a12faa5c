use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;

use super::Geocoder;
use crate::{
    entities::{Coordinates, GeocodingResult},
    error::{unreachable_error, upstream_error, Error},
};

#[derive(Clone, Debug, Deserialize)]
struct SearchHit {
    display_name: String,
    lat: String,
    lon: String,
}

#[derive(Clone, Debug, Deserialize)]
struct ReverseHit {
    display_name: Option<String>,
}

/// OpenStreetMap Nominatim geocoder.
#[derive(Clone, Debug)]
pub struct NominatimClient {
    client: Client,
    base_url: String,
    user_agent: String,
}

impl NominatimClient {
    pub fn new(client: Client, base_url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user_agent: user_agent.into(),
        }
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}/{}", self.base_url, path))
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, &self.user_agent)
    }

    async fn fetch_reverse(&self, coordinates: Coordinates) -> Result<Option<GeocodingResult>, Error> {
        let res = self
            .get("reverse")
            .query(&[
                ("lat", coordinates.latitude.to_string()),
                ("lon", coordinates.longitude.to_string()),
            ])
            .query(&[("format", "json"), ("zoom", "14")])
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(upstream_error(format!(
                "Reverse geocoding failed: {}",
                res.status().as_u16()
            )));
        }

        let data: ReverseHit = res.json().await?;

        Ok(data.display_name.map(|display_name| GeocodingResult {
            display_name,
            coordinates,
        }))
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    #[tracing::instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<GeocodingResult>, Error> {
        let res = self
            .get("search")
            .query(&[("q", query)])
            .query(&[("format", "json"), ("addressdetails", "1"), ("limit", "5")])
            .send()
            .await
            .map_err(|err| unreachable_error("Geocoding", err))?;

        let status = res.status();
        if !status.is_success() {
            return Err(upstream_error(format!("Geocoding failed: {}", status.as_u16())));
        }

        let hits: Vec<SearchHit> = res
            .json()
            .await
            .map_err(|err| unreachable_error("Geocoding", err))?;

        Ok(hits
            .into_iter()
            .filter_map(|hit| {
                let latitude = hit.lat.trim().parse().ok()?;
                let longitude = hit.lon.trim().parse().ok()?;
                Some(GeocodingResult {
                    display_name: hit.display_name,
                    coordinates: Coordinates::new(latitude, longitude),
                })
            })
            .collect())
    }

    #[tracing::instrument(skip(self))]
    async fn reverse(&self, coordinates: Coordinates) -> Result<Option<GeocodingResult>, Error> {
        let coordinates = coordinates.validate()?;

        match self.fetch_reverse(coordinates).await {
            Ok(result) => Ok(result),
            Err(err) => {
                tracing::debug!(%err, "reverse geocoding unavailable");
                Ok(None)
            }
        }
    }
}
