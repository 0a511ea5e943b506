use chrono::NaiveDate;

use crate::core::error::Result;
use crate::core::person::date_components;
use crate::core::reduction::{digit_sum, reduce};
use crate::models::UniversalCycle;

/// Fold one finer date component into the figure of the coarser cycle
#[inline]
fn cascade(coarser: u8, component: u64) -> Result<u8> {
    reduce(u64::from(coarser) + digit_sum(component))
}

/// Derive the universal cycle for a match date
///
/// The stages run in order year -> month -> day and each consumes the
/// previous stage's figure, so the month and day figures are never computed
/// from raw date digits alone.
pub fn derive_universal_cycle(match_date: NaiveDate) -> Result<UniversalCycle> {
    let (year, month, day) = date_components(match_date)?;

    let universal_year = reduce(digit_sum(year))?;
    let universal_month = cascade(universal_year, month)?;
    let universal_day = cascade(universal_month, day)?;

    Ok(UniversalCycle {
        universal_year,
        universal_month,
        universal_day,
    })
}
