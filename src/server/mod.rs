mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{delete, get, post},
    Router,
};

use crate::api::API;
use crate::error::{server_error, Error};
use crate::server::handlers::{estimates, geocoding, places, preferences, routes};

type DynAPI = Arc<dyn API + Send + Sync>;

pub fn router<T: API + Sync + Send + 'static>(api: T) -> Router {
    let api = Arc::new(api) as DynAPI;

    Router::new()
        .route("/geocode/search", get(geocoding::search))
        .route("/geocode/reverse", get(geocoding::reverse))
        .route("/geocode/suggestions", get(geocoding::suggestions))
        .route("/routes", post(routes::plan))
        .route("/estimates", post(estimates::create))
        .route("/tolls", get(estimates::list_tolls))
        .route(
            "/preferences",
            get(preferences::find).patch(preferences::update),
        )
        .route(
            "/favorites",
            get(places::list_favorites).post(places::add_favorite),
        )
        .route("/favorites/:id", delete(places::remove_favorite))
        .route(
            "/history",
            get(places::list_history).post(places::push_history),
        )
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|err| {
            tracing::error!(%err, "server error");
            server_error()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::engine;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = hyper::body::to_bytes(response.into_body())
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("parse json")
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn plan_routes_endpoint() {
        let app = router(engine().await);

        let res = app
            .oneshot(json_request(
                "POST",
                "/routes",
                json!({ "origin": "Monas", "destination": "Blok M", "vehicle_type": "car" }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body = read_json(res).await;
        assert_eq!(body["routes"].as_array().unwrap().len(), 2);
        assert_eq!(body["routes"][0]["route"]["congestion"]["level"], "Lancar");
        assert_eq!(body["routes"][0]["cost"]["toll_cost"], 11000.0);
    }

    #[tokio::test]
    async fn unknown_place_is_not_found() {
        let app = router(engine().await);

        let res = app
            .oneshot(json_request(
                "POST",
                "/routes",
                json!({ "origin": "Monas", "destination": "Atlantis" }),
            ))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = read_json(res).await;
        assert_eq!(body["code"], 102);
        assert_eq!(body["error"], "origin or destination not found");
    }

    #[tokio::test]
    async fn estimate_endpoint() {
        let app = router(engine().await);

        let res = app
            .oneshot(json_request("POST", "/estimates", json!({ "distance_km": 100.0 })))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body = read_json(res).await;
        assert_eq!(body["fuel_cost"], 100000.0);
        assert_eq!(body["total"], 200000.0);
    }

    #[tokio::test]
    async fn reverse_endpoint_returns_null_when_unknown() {
        let app = router(engine().await);

        let res = app
            .oneshot(get_request("/geocode/reverse?latitude=1.5&longitude=2.5"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(read_json(res).await, Value::Null);
    }

    #[tokio::test]
    async fn blank_search_is_bad_request() {
        let app = router(engine().await);

        let res = app.oneshot(get_request("/geocode/search?q=")).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn preferences_round_trip_through_patch() {
        let app = router(engine().await);

        let res = app
            .clone()
            .oneshot(json_request(
                "PATCH",
                "/preferences",
                json!({ "fuel_type": "diesel", "use_toll": false }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let res = app.oneshot(get_request("/preferences")).await.unwrap();
        let body = read_json(res).await;
        assert_eq!(body["fuel_type"], "diesel");
        assert_eq!(body["fuel_price"], 15000.0);
        assert_eq!(body["use_toll"], false);
    }

    #[tokio::test]
    async fn favorites_add_list_remove() {
        let app = router(engine().await);

        let res = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/favorites",
                json!({ "label": "Monas", "coordinates": { "latitude": -6.1754, "longitude": 106.8272 } }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        let id = read_json(res).await["id"].as_str().unwrap().to_string();

        let res = app.clone().oneshot(get_request("/favorites")).await.unwrap();
        assert_eq!(read_json(res).await.as_array().unwrap().len(), 1);

        let req = Request::builder()
            .method("DELETE")
            .uri(format!("/favorites/{}", id))
            .body(Body::empty())
            .unwrap();
        let res = app.clone().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let res = app.oneshot(get_request("/favorites")).await.unwrap();
        assert!(read_json(res).await.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_history_entry_is_rejected() {
        let app = router(engine().await);

        let res = app
            .oneshot(json_request(
                "POST",
                "/history",
                json!({ "label": "Nowhere", "coordinates": { "latitude": 123.0, "longitude": 0.0 } }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
