mod fee_rate_manager;

pub use fee_rate_manager::*;
