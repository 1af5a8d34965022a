mod controller;
mod tracker;

pub use controller::*;
pub use tracker::*;
