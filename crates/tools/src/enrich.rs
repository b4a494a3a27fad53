use std::fmt;

use formats::{RawTrip, TripPoint, TripRecord};
use foundation::Aabb2;
use tracing::debug;

use crate::config::{ModelRule, NameTable};
use crate::palette::{PaletteCursor, PaletteExhausted};

/// Spacing of the `t` channel between consecutive input trips.
pub const ELEVATION_STEP: i64 = 40;

#[derive(Debug, Clone, PartialEq)]
pub enum EnrichError {
    TooManyTrips { count: usize, capacity: usize },
    Palette(PaletteExhausted),
}

impl fmt::Display for EnrichError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnrichError::TooManyTrips { count, capacity } => write!(
                f,
                "input has {count} trips but the name table only covers {capacity}"
            ),
            EnrichError::Palette(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for EnrichError {}

impl From<PaletteExhausted> for EnrichError {
    fn from(err: PaletteExhausted) -> Self {
        EnrichError::Palette(err)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enriched {
    pub records: Vec<TripRecord>,
    /// Bounds over the input trips only.
    pub bounds: Aabb2,
}

/// Attaches name, flag, `t` channel, color and model to each input trip, and
/// folds every trip's own bounds into the returned total.
///
/// A trip without points still gets a record (with empty `coords`) and leaves
/// the bounds untouched.
pub fn enrich_trips(
    trips: &[RawTrip],
    names: &NameTable,
    models: &ModelRule,
    cursor: &mut PaletteCursor<'_>,
) -> Result<Enriched, EnrichError> {
    if trips.len() > names.len() {
        return Err(EnrichError::TooManyTrips {
            count: trips.len(),
            capacity: names.len(),
        });
    }

    let mut records = Vec::with_capacity(trips.len());
    let mut bounds = Aabb2::empty();

    for (i, (trip, name)) in trips.iter().zip(names.names()).enumerate() {
        let flag = names.flag_for(name).unwrap_or_default();
        let t = i as i64 * ELEVATION_STEP;
        let coords = trip.iter().map(|&[x, y]| TripPoint(x, y, t)).collect();

        records.push(TripRecord {
            name: name.to_string(),
            flag: flag.to_string(),
            coords,
            color: cursor.next_color()?,
            model: models.select(i),
        });

        let local = Aabb2::from_points(trip);
        debug!(index = i, trip = name, bounds = ?local.to_array(), "enriched trip");
        bounds = bounds.union(&local);
    }

    Ok(Enriched { records, bounds })
}
