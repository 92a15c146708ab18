use custody_common::{AccessError, TransferError};
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION ERRORS (10-15)
    // ============================================
    /// Caller lacks the owner or admin role required
    Unauthorized = 10,
    /// The owner cannot be stripped of admin rights
    CannotRemoveOwner = 11,

    // ============================================
    // AMOUNT/BALANCE ERRORS (40-49)
    // ============================================
    /// Amount must be positive, and batch totals must not overflow
    InvalidAmount = 40,
    /// Source account holds less than the amount
    InsufficientBalance = 41,

    // ============================================
    // BATCH ERRORS (50-59)
    // ============================================
    /// customers, amounts and descs differ in length
    LengthMismatch = 50,
}

impl From<AccessError> for Error {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::NotInitialized => Error::NotInitialized,
            AccessError::Unauthorized => Error::Unauthorized,
            AccessError::CannotRemoveOwner => Error::CannotRemoveOwner,
        }
    }
}

impl From<TransferError> for Error {
    fn from(err: TransferError) -> Self {
        match err {
            TransferError::InvalidAmount => Error::InvalidAmount,
            TransferError::InsufficientBalance => Error::InsufficientBalance,
        }
    }
}
