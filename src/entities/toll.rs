use geo_types::Coord;
use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, PaymentMethod};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// A box whose min exceeds its max on either axis contains nothing.
    pub fn is_inverted(&self) -> bool {
        self.min_lat > self.max_lat || self.min_lon > self.max_lon
    }

    /// Edges count as inside. Corners are taken as given, never swapped.
    pub fn contains(&self, point: &Coordinates) -> bool {
        let p: Coord<f64> = (*point).into();

        p.x >= self.min_lon && p.x <= self.max_lon && p.y >= self.min_lat && p.y <= self.max_lat
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TollSegment {
    pub name: String,
    pub bbox: BoundingBox,
    pub cash: f64,
    pub cashless: f64,
}

impl TollSegment {
    pub fn price(&self, payment_method: PaymentMethod) -> f64 {
        match payment_method {
            PaymentMethod::Cash => self.cash,
            PaymentMethod::Cashless => self.cashless,
        }
    }
}
