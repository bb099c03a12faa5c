use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, CostEstimate, GeocodingResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    Driving,
    Cycling,
    Foot,
}

impl Default for Profile {
    fn default() -> Self {
        Self::Driving
    }
}

impl Profile {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Cycling => "cycling",
            Self::Foot => "foot",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub instruction: String,
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub location: Coordinates,
}

/// A route as returned by the routing provider, before any derived metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawRoute {
    pub summary: Option<String>,
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub geometry: Vec<Coordinates>,
    pub steps: Vec<RouteStep>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CongestionLevel {
    Lancar,
    Sedang,
    Padat,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Congestion {
    pub score: f64,
    pub level: CongestionLevel,
}

impl Congestion {
    /// Heuristic bucket from average speed in km/h. Slower is never less congested.
    pub fn from_speed(speed_kmh: f64) -> Self {
        let score = if speed_kmh < 20.0 {
            0.8
        } else if speed_kmh < 30.0 {
            0.65
        } else if speed_kmh < 40.0 {
            0.5
        } else {
            0.35
        };

        Self {
            score,
            level: CongestionLevel::from_score(score),
        }
    }
}

impl CongestionLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            Self::Padat
        } else if score >= 0.5 {
            Self::Sedang
        } else {
            Self::Lancar
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub id: usize,
    pub name: String,
    pub distance_meters: f64,
    pub duration_minutes: i64,
    pub average_speed_kmh: i64,
    pub congestion: Congestion,
    pub geometry: Vec<Coordinates>,
    pub steps: Vec<RouteStep>,
}

impl RouteResult {
    /// `id` is 1-based and also names unnamed routes.
    pub fn new(id: usize, raw: RawRoute) -> Self {
        let km = raw.distance_meters / 1000.0;
        let hours = raw.duration_seconds / 3600.0;
        let hours = if hours > 0.0 { hours } else { 1e-6 };
        let speed = km / hours;

        let name = match raw.summary {
            Some(summary) if !summary.trim().is_empty() => summary,
            _ => format!("Rute {}", id),
        };

        Self {
            id,
            name,
            distance_meters: raw.distance_meters,
            duration_minutes: (raw.duration_seconds / 60.0).round() as i64,
            average_speed_kmh: speed.round() as i64,
            congestion: Congestion::from_speed(speed),
            geometry: raw.geometry,
            steps: raw.steps,
        }
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannedRoute {
    pub route: RouteResult,
    pub cost: CostEstimate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub origin: GeocodingResult,
    pub destination: GeocodingResult,
    pub routes: Vec<PlannedRoute>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn raw(distance_meters: f64, duration_seconds: f64, summary: Option<&str>) -> RawRoute {
        RawRoute {
            summary: summary.map(String::from),
            distance_meters,
            duration_seconds,
            geometry: vec![],
            steps: vec![],
        }
    }

    #[test]
    fn congestion_buckets() {
        assert_eq!(Congestion::from_speed(10.0).score, 0.8);
        assert_eq!(Congestion::from_speed(20.0).score, 0.65);
        assert_eq!(Congestion::from_speed(35.0).score, 0.5);
        assert_eq!(Congestion::from_speed(40.0).score, 0.35);
        assert_eq!(Congestion::from_speed(10.0).level, CongestionLevel::Padat);
        assert_eq!(Congestion::from_speed(25.0).level, CongestionLevel::Sedang);
        assert_eq!(Congestion::from_speed(80.0).level, CongestionLevel::Lancar);
    }

    #[test]
    fn slower_is_never_less_congested() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let a: f64 = rng.gen_range(0.0..150.0);
            let b: f64 = rng.gen_range(0.0..150.0);
            let (slow, fast) = if a <= b { (a, b) } else { (b, a) };
            assert!(Congestion::from_speed(slow).score >= Congestion::from_speed(fast).score);
        }
    }

    #[test]
    fn derives_metrics_from_raw_route() {
        // 30 km in 45 minutes is 40 km/h
        let route = RouteResult::new(1, raw(30_000.0, 2_700.0, Some("Jalan Sudirman")));
        assert_eq!(route.name, "Jalan Sudirman");
        assert_eq!(route.duration_minutes, 45);
        assert_eq!(route.average_speed_kmh, 40);
        assert_eq!(route.congestion.score, 0.35);
        assert_eq!(route.distance_km(), 30.0);
    }

    #[test]
    fn unnamed_routes_use_their_index() {
        assert_eq!(RouteResult::new(2, raw(1000.0, 60.0, None)).name, "Rute 2");
        assert_eq!(RouteResult::new(3, raw(1000.0, 60.0, Some("  "))).name, "Rute 3");
    }

    #[test]
    fn zero_duration_does_not_divide_by_zero() {
        let route = RouteResult::new(1, raw(1000.0, 0.0, None));
        assert_eq!(route.congestion.score, 0.35);
        assert!(route.average_speed_kmh > 0);
    }
}
