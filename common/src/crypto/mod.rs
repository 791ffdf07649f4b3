mod address;
mod hash;

pub mod random;

pub use address::*;
pub use hash::*;
