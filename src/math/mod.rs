mod average;
mod deviation_fee;

pub use average::*;
pub use deviation_fee::*;
