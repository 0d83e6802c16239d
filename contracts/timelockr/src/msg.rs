//! Message types for the TimeLockr contract
//!
//! Instantiation, execution and query messages plus every query response.
//! Message ids travel as 32-byte `Binary` values.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};

use crate::state::Stats;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message. The instantiating sender becomes the owner.
#[cw_serde]
pub struct InstantiateMsg {
    /// Minimum payment to lock a message
    pub fee: Uint128,
    /// Native denom the fee is paid in (e.g. "uluna")
    pub fee_denom: String,
    /// Minimum lock duration in seconds (defaults to 24 hours)
    pub min_lock_time_seconds: Option<u64>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Message Ledger
    // ========================================================================
    /// Lock `content` for `recipient` for at least `duration_seconds`.
    /// Attach the fee in `fee_denom` unless the sender is owner or whitelisted.
    /// Response data: `LockMessageResponse`.
    LockMessage {
        recipient: String,
        content: String,
        duration_seconds: u64,
    },

    /// Unlock a message addressed to the sender once its unlock time passed.
    /// Response data: `UnlockMessageResponse`.
    UnlockMessage { message_id: Binary },

    // ========================================================================
    // Fee & Timing Policy (owner only)
    // ========================================================================
    SetFee { fee: Uint128 },

    SetMinimumLockTime { seconds: u64 },

    /// Send collected fees out of the contract.
    /// `amount` defaults to the full balance, `recipient` to the owner.
    WithdrawFees {
        amount: Option<Uint128>,
        recipient: Option<String>,
    },

    // ========================================================================
    // Access Control (owner only)
    // ========================================================================
    AddToWhitelist { address: String },

    RemoveFromWhitelist { address: String },

    TransferOwnership { new_owner: String },
}

/// Data returned by `LockMessage`
#[cw_serde]
pub struct LockMessageResponse {
    pub message_id: Binary,
    pub unlock_time: Timestamp,
}

/// Data returned by `UnlockMessage`
#[cw_serde]
pub struct UnlockMessageResponse {
    pub message_id: Binary,
    pub content: String,
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Full contract configuration
    #[returns(ConfigResponse)]
    Config {},

    #[returns(OwnerResponse)]
    Owner {},

    /// Current lock fee
    #[returns(FeeResponse)]
    Fee {},

    /// Current minimum lock duration
    #[returns(MinLockTimeResponse)]
    MinLockTime {},

    #[returns(IsWhitelistedResponse)]
    IsWhitelisted { address: String },

    /// Whitelisted addresses, ascending
    #[returns(WhitelistResponse)]
    Whitelist {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// A still-locked message; `None` once unlocked or if it never existed
    #[returns(Option<MessageResponse>)]
    Message {
        recipient: String,
        message_id: Binary,
    },

    /// Locked messages addressed to `recipient`, oldest first.
    /// `start_after` is a message nonce.
    #[returns(MessagesResponse)]
    MessagesByRecipient {
        recipient: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(Stats)]
    Stats {},

    /// Nonce the next lock will consume
    #[returns(NextNonceResponse)]
    NextNonce {},

    /// Recompute a message id off the ledger
    #[returns(ComputeMessageIdResponse)]
    ComputeMessageId {
        sender: String,
        recipient: String,
        content: String,
        nonce: u64,
        timestamp: u64,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub fee: Uint128,
    pub fee_denom: String,
    pub min_lock_time_seconds: u64,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct FeeResponse {
    pub fee: Uint128,
    pub denom: String,
}

#[cw_serde]
pub struct MinLockTimeResponse {
    pub seconds: u64,
}

#[cw_serde]
pub struct IsWhitelistedResponse {
    pub is_whitelisted: bool,
}

#[cw_serde]
pub struct WhitelistResponse {
    pub addresses: Vec<Addr>,
}

#[cw_serde]
pub struct MessageResponse {
    pub message_id: Binary,
    pub nonce: u64,
    pub sender: Addr,
    pub recipient: Addr,
    pub content: String,
    pub created_at: Timestamp,
    pub unlock_time: Timestamp,
    pub locked: bool,
    pub fee_paid: Uint128,
}

#[cw_serde]
pub struct MessagesResponse {
    pub messages: Vec<MessageResponse>,
}

#[cw_serde]
pub struct NextNonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct ComputeMessageIdResponse {
    pub message_id: Binary,
}
