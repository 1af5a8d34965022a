mod deviation;
mod fee;

pub use deviation::*;
pub use fee::*;
