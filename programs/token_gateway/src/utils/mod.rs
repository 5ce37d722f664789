pub mod decimals;
pub mod hash;
pub mod signature;

pub use decimals::*;
pub use hash::*;
pub use signature::*;
