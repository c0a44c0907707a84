//! Calendar math for turning horizons into dates.
//!
//! Everything here is date-only (`NaiveDate`); no time of day or offset takes
//! part in the arithmetic.

use chrono::{Days, NaiveDate};

use crate::horizon::HorizonPair;

/// Hard cap on how far past the purchase date an expiration may land.
pub const MAX_SHELF_LIFE_DAYS: u32 = 365;

/// Expiration and restock dates projected from a purchase date.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProjectedDates {
    pub expiration: NaiveDate,
    pub restock: NaiveDate,
}

/// `date + days`, or `None` past the end of the representable calendar.
pub fn add_days(date: NaiveDate, days: u32) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(days)))
}

/// Project a horizon onto a purchase date, applying the shelf-life cap and the
/// restock clamp.
///
/// - expiration = min(purchase + shelf_life, purchase + 365)
/// - restock = min(expiration, purchase + restock)
///
/// Restock is compared against the *capped* expiration, so it never lands
/// after the hard cutoff.
pub fn project(purchased_at: NaiveDate, horizon: HorizonPair) -> ProjectedDates {
    // min(raw, cap) == purchase + min(shelf_life, 365) since adding days is monotonic.
    let capped_days = horizon.shelf_life_days.min(MAX_SHELF_LIFE_DAYS);
    let expiration = add_days(purchased_at, capped_days).unwrap_or(NaiveDate::MAX);

    // An unrepresentable raw restock date is later than anything we could return.
    let restock = match add_days(purchased_at, horizon.restock_days) {
        Some(raw) if raw < expiration => raw,
        _ => expiration,
    };

    ProjectedDates {
        expiration,
        restock,
    }
}
