use super::Engine;

use async_trait::async_trait;

use crate::{
    api::PreferenceAPI,
    db::PREFERENCES_KEY,
    entities::{Preferences, PreferencesUpdate},
    error::Error,
};

#[async_trait]
impl PreferenceAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_preferences(&self) -> Result<Preferences, Error> {
        Ok(self
            .store
            .get::<Preferences>(PREFERENCES_KEY)
            .await?
            .unwrap_or_default())
    }

    #[tracing::instrument(skip(self))]
    async fn update_preferences(&self, update: PreferencesUpdate) -> Result<Preferences, Error> {
        let _guard = self.preferences_lock.lock().await;

        let mut preferences = self.find_preferences().await?;
        preferences.apply(update)?;

        self.store.put(PREFERENCES_KEY, &preferences).await?;

        Ok(preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::engine;
    use crate::entities::{FuelType, PaymentMethod};

    #[tokio::test]
    async fn defaults_until_updated() {
        let engine = engine().await;
        assert_eq!(engine.find_preferences().await.unwrap(), Preferences::default());

        let updated = engine
            .update_preferences(PreferencesUpdate {
                fuel_type: Some(FuelType::Pertamax),
                toll_rate_per_km: Some(1_500.0),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.fuel_price, 13_500.0);
        assert_eq!(engine.find_preferences().await.unwrap(), updated);
    }

    #[tokio::test]
    async fn invalid_update_is_not_persisted() {
        let engine = engine().await;

        let err = engine
            .update_preferences(PreferencesUpdate {
                fuel_price: Some(-10.0),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(err.is_invalid_input_error());
        assert_eq!(engine.find_preferences().await.unwrap(), Preferences::default());
    }

    #[tokio::test]
    async fn concurrent_updates_both_persist() {
        let engine = engine().await;

        let (first, second) = tokio::join!(
            engine.update_preferences(PreferencesUpdate {
                use_toll: Some(false),
                ..Default::default()
            }),
            engine.update_preferences(PreferencesUpdate {
                toll_rate_per_km: Some(2_500.0),
                payment_method: Some(PaymentMethod::Cash),
                ..Default::default()
            }),
        );
        first.unwrap();
        second.unwrap();

        let stored = engine.find_preferences().await.unwrap();
        assert!(!stored.use_toll);
        assert_eq!(stored.toll_rate_per_km, 2_500.0);
        assert_eq!(stored.payment_method, PaymentMethod::Cash);
    }
}
