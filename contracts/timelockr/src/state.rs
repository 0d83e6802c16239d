//! State definitions for the TimeLockr contract
//!
//! Configuration, the message ledger and its recipient index, and counters.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:timelockr";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Protocol Constants
// ============================================================================

/// Minimum lock duration used when instantiation does not provide one (24 hours)
pub const DEFAULT_MIN_LOCK_TIME_SECONDS: u64 = 86_400;

/// Upper bound for any lock duration (100 years)
pub const MAX_LOCK_TIME_SECONDS: u64 = 100 * 365 * 86_400;

/// Maximum message payload size in bytes
pub const MAX_CONTENT_BYTES: usize = 16_384;

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Owner address: manages fee, lock time and whitelist
    pub owner: Addr,
    /// Minimum payment required to lock a message
    pub fee: Uint128,
    /// Native denom the fee is paid in
    pub fee_denom: String,
    /// Minimum lock duration in seconds
    pub min_lock_time_seconds: u64,
}

/// A message held by the ledger until its recipient unlocks it
#[cw_serde]
pub struct LockedMessage {
    /// 32-byte identifier (see `hash::compute_message_id`)
    pub message_id: [u8; 32],
    /// Nonce consumed at creation
    pub nonce: u64,
    /// Address that created the lock
    pub sender: Addr,
    /// Only address allowed to unlock
    pub recipient: Addr,
    /// Opaque payload, returned unchanged on unlock
    pub content: String,
    /// Block time at creation
    pub created_at: Timestamp,
    /// Earliest block time at which unlocking is allowed
    pub unlock_time: Timestamp,
    /// Always true while stored; unlocked messages are removed
    pub locked: bool,
    /// Amount of the fee denom attached to the lock call
    pub fee_paid: Uint128,
}

/// Ledger statistics
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    /// Number of messages ever locked
    pub total_locked: u64,
    /// Number of messages unlocked
    pub total_unlocked: u64,
    /// Fees received by lock calls
    pub total_fees_collected: Uint128,
    /// Fees sent out by the owner
    pub total_fees_withdrawn: Uint128,
}

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

pub const STATS: Item<Stats> = Item::new("stats");

/// Next nonce handed out by `LockMessage`
pub const MESSAGE_NONCE: Item<u64> = Item::new("message_nonce");

/// (recipient, nonce) => locked message, in submission order per recipient
pub const MESSAGES: Map<(&Addr, u64), LockedMessage> = Map::new("messages");

/// message_id => (recipient, nonce), for every message still locked
pub const MESSAGE_RECIPIENTS: Map<&[u8], (Addr, u64)> = Map::new("message_recipients");
