//! Error types for the TimeLockr contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized access")]
    UnauthorizedAccess,

    // ========================================================================
    // Lock Errors
    // ========================================================================

    #[error("Insufficient funds: fee is {required}, paid {paid}")]
    InsufficientFunds { required: Uint128, paid: Uint128 },

    #[error("Invalid lock time: {reason}")]
    InvalidLockTime { reason: String },

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Message too long: {len} bytes exceeds max {max}")]
    MessageTooLong { len: usize, max: usize },

    #[error("Invalid funds: {reason}")]
    InvalidFunds { reason: String },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    // ========================================================================
    // Unlock Errors
    // ========================================================================

    #[error("Message still locked until {unlock_time}")]
    MessageStillLocked { unlock_time: u64 },

    #[error("Message not found")]
    MessageNotFound,

    #[error("Invalid message id: {reason}")]
    InvalidMessageId { reason: String },

    // ========================================================================
    // Fee Withdrawal Errors
    // ========================================================================

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },
}
