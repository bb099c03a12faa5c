use serde::{Deserialize, Serialize};

/// Trip cost in IDR.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub fuel_cost: f64,
    pub toll_cost: f64,
    pub total: f64,
    pub matched_segments: Vec<String>,
}
