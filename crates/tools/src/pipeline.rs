use std::fmt;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use formats::{RawTrip, TripFileError, TripRecord};
use foundation::Aabb2;
use foundation::math::Vec2;
use tracing::info;

use crate::config::GeneratorConfig;
use crate::enrich::{EnrichError, enrich_trips};
use crate::orbit::synthesize_orbits;
use crate::palette::{PaletteCursor, PaletteExhausted};

#[derive(Debug)]
pub enum PipelineError {
    File(TripFileError),
    TooManyTrips { count: usize, capacity: usize },
    Palette(PaletteExhausted),
    EmptyBounds,
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::File(err) => write!(f, "{err}"),
            PipelineError::TooManyTrips { count, capacity } => write!(
                f,
                "input has {count} trips but the name table only covers {capacity}"
            ),
            PipelineError::Palette(err) => write!(f, "{err}"),
            PipelineError::EmptyBounds => write!(f, "input trips contain no coordinates"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::File(err) => Some(err),
            PipelineError::Palette(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TripFileError> for PipelineError {
    fn from(err: TripFileError) -> Self {
        PipelineError::File(err)
    }
}

impl From<PaletteExhausted> for PipelineError {
    fn from(err: PaletteExhausted) -> Self {
        PipelineError::Palette(err)
    }
}

impl From<EnrichError> for PipelineError {
    fn from(err: EnrichError) -> Self {
        match err {
            EnrichError::TooManyTrips { count, capacity } => {
                PipelineError::TooManyTrips { count, capacity }
            }
            EnrichError::Palette(err) => PipelineError::Palette(err),
        }
    }
}

/// Reported bounds when the input holds no trips at all: the inverted
/// whole-world box, whose midpoint (0, 0) anchors the orbits.
pub const NO_TRIPS_BOUNDS: Aabb2 = Aabb2 {
    min: [180.0, 90.0],
    max: [-180.0, -90.0],
};

/// Input records first, then one record per orbit.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub records: Vec<TripRecord>,
    pub bounds: Aabb2,
    pub center: Vec2,
}

pub fn generate(trips: &[RawTrip], config: &GeneratorConfig<'_>) -> Result<Generated, PipelineError> {
    if trips.len() > config.names.len() {
        return Err(PipelineError::TooManyTrips {
            count: trips.len(),
            capacity: config.names.len(),
        });
    }
    let needed = trips.len() + config.orbits.len();
    if needed > config.palette.len() {
        return Err(PipelineError::Palette(PaletteExhausted {
            offset: needed - 1,
            len: config.palette.len(),
        }));
    }

    let mut cursor = PaletteCursor::new(config.palette);
    let enriched = enrich_trips(trips, &config.names, &config.models, &mut cursor)?;
    let (bounds, center) = if trips.is_empty() {
        (NO_TRIPS_BOUNDS, NO_TRIPS_BOUNDS.midpoint())
    } else {
        let center = enriched.bounds.center().ok_or(PipelineError::EmptyBounds)?;
        (enriched.bounds, center)
    };
    info!(
        bounds = ?bounds.to_array(),
        center = ?(center.x, center.y),
        "computed trip bounds"
    );

    let mut records = enriched.records;
    records.extend(synthesize_orbits(center, &config.orbits, &mut cursor)?);

    Ok(Generated {
        records,
        bounds,
        center,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub input_trips: usize,
    pub records: usize,
    pub bounds: Aabb2,
    pub center: Vec2,
    /// blake3 of the written document, hex.
    pub content_hash: String,
    pub bytes_written: u64,
}

/// Reads `input`, generates the enriched document and writes it to `output`.
/// Nothing is written unless generation succeeds.
pub fn run(
    input: &Path,
    output: &Path,
    config: &GeneratorConfig<'_>,
) -> Result<RunSummary, PipelineError> {
    let trips = formats::read_raw_trips(input)?;
    info!("read {} trips from {}", trips.len(), input.display());

    let generated = generate(&trips, config)?;
    let digest = write_records(output, &generated.records)?;
    info!(
        "wrote {} ({} records, {} bytes, blake3={})",
        output.display(),
        generated.records.len(),
        digest.bytes,
        digest.content_hash
    );

    Ok(RunSummary {
        input_trips: trips.len(),
        records: generated.records.len(),
        bounds: generated.bounds,
        center: generated.center,
        content_hash: digest.content_hash,
        bytes_written: digest.bytes,
    })
}

/// Identity of a written trip document.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DocumentDigest {
    content_hash: String,
    bytes: u64,
}

fn write_records(path: &Path, records: &[TripRecord]) -> Result<DocumentDigest, TripFileError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err(parent))?;
    }

    let file = fs::File::create(path).map_err(io_err(path))?;
    let mut writer = DigestWriter::new(BufWriter::new(file));
    formats::write_trip_records_to(&mut writer, records).map_err(TripFileError::Encode)?;
    writer.finish().map_err(io_err(path))
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> TripFileError + use<> {
    let path: PathBuf = path.to_path_buf();
    move |source| TripFileError::Io { path, source }
}

/// Tees the serialized document into blake3 and a byte count on its way
/// to `inner`, so the run can report what landed on disk without reading it back.
struct DigestWriter<W> {
    inner: W,
    hasher: blake3::Hasher,
    bytes: u64,
}

impl<W: Write> DigestWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: blake3::Hasher::new(),
            bytes: 0,
        }
    }

    /// Flushes `inner` and yields the digest of everything written.
    fn finish(mut self) -> std::io::Result<DocumentDigest> {
        self.inner.flush()?;
        Ok(DocumentDigest {
            content_hash: self.hasher.finalize().to_hex().to_string(),
            bytes: self.bytes,
        })
    }
}

impl<W: Write> Write for DigestWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        self.bytes += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
