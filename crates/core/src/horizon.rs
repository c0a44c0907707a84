use serde::{Deserialize, Serialize};

/// Day counts from purchase to a predicted event.
///
/// `shelf_life_days` predicts spoilage, `restock_days` predicts repurchase.
/// The unsigned type is what keeps horizons non-negative; capping happens
/// later, when the pair is projected onto a purchase date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizonPair {
    pub shelf_life_days: u32,
    pub restock_days: u32,
}

impl HorizonPair {
    pub const fn new(shelf_life_days: u32, restock_days: u32) -> Self {
        Self {
            shelf_life_days,
            restock_days,
        }
    }
}

impl core::fmt::Display for HorizonPair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "shelf_life={}d restock={}d",
            self.shelf_life_days, self.restock_days
        )
    }
}
