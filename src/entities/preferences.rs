use serde::{Deserialize, Serialize};

use crate::error::{invalid_field_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Pertalite,
    Pertamax,
    Diesel,
}

impl FuelType {
    /// Pump price in IDR per liter.
    pub fn default_price(&self) -> f64 {
        match self {
            Self::Pertalite => 10_000.0,
            Self::Pertamax => 13_500.0,
            Self::Diesel => 15_000.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Car,
    Motorcycle,
}

impl Default for VehicleType {
    fn default() -> Self {
        Self::Car
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Cashless,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub fuel_type: FuelType,
    pub fuel_price: f64,
    pub efficiency_car: f64,
    pub efficiency_motorcycle: f64,
    pub toll_rate_per_km: f64,
    pub use_toll: bool,
    pub payment_method: PaymentMethod,
    pub cashless_fee_rate: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            fuel_type: FuelType::Pertalite,
            fuel_price: FuelType::Pertalite.default_price(),
            efficiency_car: 10.0,
            efficiency_motorcycle: 30.0,
            toll_rate_per_km: 1_000.0,
            use_toll: true,
            payment_method: PaymentMethod::Cashless,
            cashless_fee_rate: 0.0,
        }
    }
}

/// Inputs of the trip cost estimator for one vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostParameters {
    pub fuel_price: f64,
    pub efficiency_km_per_liter: f64,
    pub toll_rate_per_km: f64,
    pub use_toll: bool,
    pub payment_method: PaymentMethod,
    pub cashless_fee_rate: f64,
}

impl Preferences {
    pub fn efficiency(&self, vehicle: VehicleType) -> f64 {
        match vehicle {
            VehicleType::Car => self.efficiency_car,
            VehicleType::Motorcycle => self.efficiency_motorcycle,
        }
    }

    pub fn cost_parameters(&self, vehicle: VehicleType) -> CostParameters {
        CostParameters {
            fuel_price: self.fuel_price,
            efficiency_km_per_liter: self.efficiency(vehicle),
            toll_rate_per_km: self.toll_rate_per_km,
            use_toll: self.use_toll,
            payment_method: self.payment_method,
            cashless_fee_rate: self.cashless_fee_rate,
        }
    }

    /// Applies a partial update. Nothing is changed when any field is invalid.
    pub fn apply(&mut self, update: PreferencesUpdate) -> Result<(), Error> {
        update.validate()?;

        if let Some(fuel_type) = update.fuel_type {
            if fuel_type != self.fuel_type && update.fuel_price.is_none() {
                self.fuel_price = fuel_type.default_price();
            }
            self.fuel_type = fuel_type;
        }
        if let Some(fuel_price) = update.fuel_price {
            self.fuel_price = fuel_price;
        }
        if let Some(efficiency) = update.efficiency_car {
            self.efficiency_car = efficiency;
        }
        if let Some(efficiency) = update.efficiency_motorcycle {
            self.efficiency_motorcycle = efficiency;
        }
        if let Some(rate) = update.toll_rate_per_km {
            self.toll_rate_per_km = rate;
        }
        if let Some(use_toll) = update.use_toll {
            self.use_toll = use_toll;
        }
        if let Some(payment_method) = update.payment_method {
            self.payment_method = payment_method;
        }
        if let Some(rate) = update.cashless_fee_rate {
            self.cashless_fee_rate = rate;
        }

        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferencesUpdate {
    pub fuel_type: Option<FuelType>,
    pub fuel_price: Option<f64>,
    pub efficiency_car: Option<f64>,
    pub efficiency_motorcycle: Option<f64>,
    pub toll_rate_per_km: Option<f64>,
    pub use_toll: Option<bool>,
    pub payment_method: Option<PaymentMethod>,
    pub cashless_fee_rate: Option<f64>,
}

fn check_amount(field: &str, value: Option<f64>) -> Result<(), Error> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(invalid_field_error(field)),
        _ => Ok(()),
    }
}

impl PreferencesUpdate {
    pub fn validate(&self) -> Result<(), Error> {
        check_amount("fuel_price", self.fuel_price)?;
        check_amount("efficiency_car", self.efficiency_car)?;
        check_amount("efficiency_motorcycle", self.efficiency_motorcycle)?;
        check_amount("toll_rate_per_km", self.toll_rate_per_km)?;
        check_amount("cashless_fee_rate", self.cashless_fee_rate)?;

        if matches!(self.cashless_fee_rate, Some(rate) if rate > 1.0) {
            return Err(invalid_field_error("cashless_fee_rate"));
        }

        Ok(())
    }
}
