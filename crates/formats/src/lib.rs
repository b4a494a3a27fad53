pub mod trip_file;
pub mod trips;

pub use trip_file::*;
pub use trips::*;
