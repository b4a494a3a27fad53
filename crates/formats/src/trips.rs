use std::fmt;

use serde::{Deserialize, Serialize};

/// One input trip: an ordered run of `[lon, lat]` pairs.
pub type RawTrip = Vec<[f64; 2]>;

/// A trip coordinate with its elevation/time channel.
/// Serialized as a `[x, y, t]` array.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPoint(pub f64, pub f64, pub i64);

impl TripPoint {
    pub fn t(&self) -> i64 {
        self.2
    }
}

/// 3D model rendered for a trip by the viewer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Box,
    CesiumMan,
    Truck,
    Duck,
    Airplane,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Box => "box",
            ModelKind::CesiumMan => "cesiumman",
            ModelKind::Truck => "truck",
            ModelKind::Duck => "duck",
            ModelKind::Airplane => "airplane",
        }
    }

    /// Viewer asset backing this model.
    pub fn asset_path(&self) -> &'static str {
        match self {
            ModelKind::Box => "data/BoxAnimated.glb",
            ModelKind::CesiumMan => "data/CesiumMan.glb",
            ModelKind::Truck => "data/truck.gltf",
            ModelKind::Duck => "data/Duck.glb",
            ModelKind::Airplane => "data/airplane.glb",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An enriched trip as written to the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub name: String,
    pub flag: String,
    pub coords: Vec<TripPoint>,
    /// RGBA, 0..=255.
    pub color: [u8; 4],
    pub model: ModelKind,
}
