//! Trip cost estimation.
//!
//! All amounts are IDR. The estimator is pure: the same distance and
//! parameters always give the same costs.

use crate::entities::{CostEstimate, CostParameters, PaymentMethod};

fn method_fee(params: &CostParameters, base_total: f64) -> f64 {
    match params.payment_method {
        PaymentMethod::Cashless => base_total * params.cashless_fee_rate,
        PaymentMethod::Cash => 0.0,
    }
}

/// Estimates fuel, toll and total cost for `distance_km`.
///
/// A non-positive efficiency yields zero fuel cost.
pub fn estimate(distance_km: f64, params: &CostParameters) -> CostEstimate {
    let efficiency = params.efficiency_km_per_liter;
    let fuel_liters = if efficiency > 0.0 && efficiency.is_finite() {
        distance_km / efficiency
    } else {
        0.0
    };

    let fuel_cost = fuel_liters * params.fuel_price;
    let toll_cost = if params.use_toll {
        distance_km * params.toll_rate_per_km
    } else {
        0.0
    };

    let base_total = fuel_cost + toll_cost;

    CostEstimate {
        fuel_cost,
        toll_cost,
        total: base_total + method_fee(params, base_total),
        matched_segments: vec![],
    }
}

/// Replaces the per-km toll cost with a dataset charge when the charge is positive.
pub fn with_toll_override(
    base: CostEstimate,
    charge: f64,
    matched_segments: Vec<String>,
    params: &CostParameters,
) -> CostEstimate {
    if charge <= 0.0 {
        return base;
    }

    let base_total = base.fuel_cost + charge;

    CostEstimate {
        fuel_cost: base.fuel_cost,
        toll_cost: charge,
        total: base_total + method_fee(params, base_total),
        matched_segments,
    }
}
