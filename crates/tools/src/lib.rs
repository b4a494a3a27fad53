pub mod config;
pub mod enrich;
pub mod orbit;
pub mod palette;
pub mod pipeline;
pub mod playback;

pub use config::*;
pub use enrich::*;
pub use orbit::*;
pub use palette::*;
pub use pipeline::*;
pub use playback::*;
