//! Trip generation from zone statistics (unit-rate method).

use mf_core::{UnitRates, Zone, ZoneCode};

use crate::DemandResult;

/// Resident and employee counts of one grid cell.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneStatistics {
    pub code:       ZoneCode,
    pub population: f64,
    pub employment: f64,
}

impl ZoneStatistics {
    pub fn new(code: impl Into<ZoneCode>, population: f64, employment: f64) -> Self {
        Self { code: code.into(), population, employment }
    }
}

/// Convert statistics to production/attraction potentials.
///
/// Missing, negative or non-finite counts contribute nothing.  Zones whose
/// production and attraction are both zero are left out.
pub fn zones_from_statistics(stats: &[ZoneStatistics], rates: &UnitRates) -> DemandResult<Vec<Zone>> {
    rates.validate()?;

    let zones = stats
        .iter()
        .filter_map(|s| {
            let pop = non_negative(s.population);
            let emp = non_negative(s.employment);
            let production = pop * rates.production_per_resident + emp * rates.production_per_employee;
            let attraction = pop * rates.attraction_per_resident + emp * rates.attraction_per_employee;
            (production > 0.0 || attraction > 0.0)
                .then(|| Zone::new(s.code.clone(), production, attraction))
        })
        .collect();
    Ok(zones)
}

#[inline]
pub(crate) fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}
