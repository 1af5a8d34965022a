mod fee;
mod params;
mod tracker;

pub use fee::*;
pub use params::*;
pub use tracker::*;
