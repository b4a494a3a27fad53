pub mod rhumb;
pub mod vec;

pub use rhumb::*;
pub use vec::*;
