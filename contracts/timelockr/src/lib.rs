//! TimeLockr Contract - Time-Locked Messages
//!
//! Senders lock a text payload for a recipient until an absolute unlock time.
//! Only the recipient can unlock it, once, after that time has passed.
//!
//! # Lock
//! 1. Sender calls `LockMessage` with the fee attached (owner and
//!    whitelisted senders may attach nothing)
//! 2. The contract derives a message id from a global nonce and stores the
//!    message under `(recipient, message_id)`
//!
//! # Unlock
//! 1. Recipient calls `UnlockMessage` at or after the unlock time
//! 2. The message is removed and its content returned as response data
//!
//! # Policy
//! - Owner sets the fee and the minimum lock duration
//! - Owner manages the fee whitelist and can transfer ownership
//! - Owner withdraws collected fees

pub mod access;
pub mod contract;
pub mod error;
pub mod events;
mod execute;
pub mod fee_policy;
pub mod hash;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::events::TimeLockrEvent;
pub use crate::hash::{compute_message_id, keccak256};
