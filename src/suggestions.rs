//! Address suggestions for partially typed input.

use async_channel::{Receiver, Sender};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::{entities::GeocodingResult, error::Error, external::Geocoder};

pub const MIN_QUERY_CHARS: usize = 3;
pub const CACHE_TTL: Duration = Duration::from_secs(60);
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

type Suggestions = Vec<GeocodingResult>;

pub struct Suggester {
    geocoder: Arc<dyn Geocoder + Send + Sync>,
    ttl: Duration,
    cache: Mutex<HashMap<String, (Instant, Suggestions)>>,
}

impl Suggester {
    pub fn new(geocoder: Arc<dyn Geocoder + Send + Sync>) -> Self {
        Self::with_ttl(geocoder, CACHE_TTL)
    }

    pub fn with_ttl(geocoder: Arc<dyn Geocoder + Send + Sync>, ttl: Duration) -> Self {
        Self {
            geocoder,
            ttl,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Inputs shorter than three characters get no suggestions and no upstream call.
    #[tracing::instrument(skip(self))]
    pub async fn suggest(&self, input: &str) -> Result<Suggestions, Error> {
        let query = input.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            return Ok(vec![]);
        }

        if let Some((fetched_at, hits)) = self.cache.lock().await.get(query) {
            if fetched_at.elapsed() < self.ttl {
                return Ok(hits.clone());
            }
        }

        let hits = self.geocoder.search(query).await?;

        let mut cache = self.cache.lock().await;
        cache.retain(|_, (fetched_at, _)| fetched_at.elapsed() < self.ttl);
        cache.insert(query.to_string(), (Instant::now(), hits.clone()));

        Ok(hits)
    }
}

/// Forwards the latest value once `delay` passes without a newer one.
/// A pending value is flushed when the input closes.
pub fn debounce(input: Receiver<String>, delay: Duration) -> Receiver<String> {
    let (tx, rx) = async_channel::unbounded();

    tokio::spawn(async move {
        while let Ok(mut latest) = input.recv().await {
            let closed = loop {
                match tokio::time::timeout(delay, input.recv()).await {
                    Ok(Ok(value)) => latest = value,
                    Ok(Err(_)) => break true,
                    Err(_) => break false,
                }
            };

            if tx.send(latest).await.is_err() || closed {
                return;
            }
        }
    });

    rx
}

/// Keystrokes in, debounced suggestion results out.
pub fn spawn_suggestion_session(
    suggester: Arc<Suggester>,
    delay: Duration,
) -> (Sender<String>, Receiver<Result<Suggestions, Error>>) {
    let (input_tx, input_rx) = async_channel::unbounded();
    let (output_tx, output_rx) = async_channel::unbounded();
    let debounced = debounce(input_rx, delay);

    tokio::spawn(async move {
        while let Ok(query) = debounced.recv().await {
            let result = suggester.suggest(&query).await;
            if output_tx.send(result).await.is_err() {
                return;
            }
        }
    });

    (input_tx, output_rx)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::entities::Coordinates;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    pub struct CountingGeocoder {
        pub searches: AtomicUsize,
    }

    #[async_trait]
    impl Geocoder for CountingGeocoder {
        async fn search(&self, query: &str) -> Result<Vec<GeocodingResult>, Error> {
            self.searches.fetch_add(1, Ordering::SeqCst);
            Ok(vec![GeocodingResult {
                display_name: format!("{}, Jakarta", query),
                coordinates: Coordinates::new(-6.2, 106.8),
            }])
        }

        async fn reverse(&self, _: Coordinates) -> Result<Option<GeocodingResult>, Error> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn short_input_skips_upstream() {
        let geocoder = Arc::new(CountingGeocoder::default());
        let suggester = Suggester::new(geocoder.clone());

        assert!(suggester.suggest("ab").await.unwrap().is_empty());
        assert!(suggester.suggest("  a  ").await.unwrap().is_empty());
        assert_eq!(geocoder.searches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn results_are_cached_until_ttl() {
        let geocoder = Arc::new(CountingGeocoder::default());
        let suggester = Suggester::new(geocoder.clone());

        let first = suggester.suggest("monas").await.unwrap();
        let second = suggester.suggest(" monas ").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(geocoder.searches.load(Ordering::SeqCst), 1);

        tokio::time::advance(CACHE_TTL + Duration::from_secs(1)).await;
        suggester.suggest("monas").await.unwrap();
        assert_eq!(geocoder.searches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn debounce_emits_only_latest_value() {
        let (tx, rx) = async_channel::unbounded();
        let out = debounce(rx, DEBOUNCE_DELAY);

        for input in ["m", "mo", "mon", "mona", "monas"] {
            tx.send(input.to_string()).await.unwrap();
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        assert_eq!(out.recv().await.unwrap(), "monas");

        tx.send("blok m".to_string()).await.unwrap();
        assert_eq!(out.recv().await.unwrap(), "blok m");
    }

    #[tokio::test(start_paused = true)]
    async fn debounce_flushes_on_close() {
        let (tx, rx) = async_channel::unbounded();
        let out = debounce(rx, DEBOUNCE_DELAY);

        tx.send("kota tua".to_string()).await.unwrap();
        drop(tx);

        assert_eq!(out.recv().await.unwrap(), "kota tua");
        assert!(out.recv().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn session_looks_up_debounced_input_once() {
        let geocoder = Arc::new(CountingGeocoder::default());
        let suggester = Arc::new(Suggester::new(geocoder.clone()));
        let (keys, results) = spawn_suggestion_session(suggester, DEBOUNCE_DELAY);

        for input in ["gam", "gamb", "gambir"] {
            keys.send(input.to_string()).await.unwrap();
        }

        let hits = results.recv().await.unwrap().unwrap();
        assert_eq!(hits[0].display_name, "gambir, Jakarta");
        assert_eq!(geocoder.searches.load(Ordering::SeqCst), 1);
    }
}
