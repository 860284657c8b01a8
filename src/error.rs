use thiserror::Error;

/// Why a caregiver operation was rejected. A rejected operation never changes state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CareError {
    #[error("Not enough eco-credits: costs {cost}, balance is {balance}")]
    InsufficientFunds { cost: u32, balance: u32 },

    #[error("Item already owned: {0}")]
    AlreadyOwned(String),

    #[error("Item not owned: {0}")]
    NotOwned(String),

    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("{0} requires a premium caregiver")]
    PremiumRequired(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type CareResult<T> = std::result::Result<T, CareError>;
