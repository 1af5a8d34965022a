use thiserror::Error;

/// Failure conditions surfaced to the pool engine.
///
/// Every error aborts the enclosing trade; no controller state is mutated
/// by a call that returns one of these.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    #[error("Controller already initialized")]
    AlreadyInitialized,

    #[error("Controller not initialized")]
    InitializationRequired,

    #[error("Invalid base fee rate")]
    InvalidBaseFee,

    #[error("Invalid deviation fee constants")]
    InvalidFeeConstants,

    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
}
