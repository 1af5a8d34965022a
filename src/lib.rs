mod constants;
mod errors;
mod manager;
mod math;
mod state;
mod types;

pub use constants::*;
pub use errors::*;
pub use manager::*;
pub use math::*;
pub use state::*;
pub use types::*;
