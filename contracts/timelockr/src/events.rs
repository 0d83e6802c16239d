//! Events announced by the contract.
//!
//! Each state change is rendered as `wasm` event attributes: an `action`
//! attribute naming the event, followed by its fields in a fixed order.
//! Indexers and front-ends key off these names, so they must stay stable.

use cosmwasm_std::{Addr, Attribute, Response, Timestamp, Uint128};

use crate::hash::bytes32_to_hex;

pub const MESSAGE_LOCKED: &str = "message_locked";
pub const MESSAGE_UNLOCKED: &str = "message_unlocked";
pub const FEE_UPDATED: &str = "fee_updated";
pub const MINIMUM_LOCK_UP_TIME_UPDATED: &str = "minimum_lock_up_time_updated";
pub const ADDED_TO_WHITELIST: &str = "added_to_whitelist";
pub const REMOVED_FROM_WHITELIST: &str = "removed_from_whitelist";
pub const OWNERSHIP_TRANSFERRED: &str = "ownership_transferred";
pub const FEES_WITHDRAWN: &str = "fees_withdrawn";

#[derive(Clone, Debug, PartialEq)]
pub enum TimeLockrEvent {
    MessageLocked {
        recipient: Addr,
        message_id: [u8; 32],
        timestamp: Timestamp,
    },
    MessageUnlocked {
        user: Addr,
        message_id: [u8; 32],
        timestamp: Timestamp,
    },
    FeeUpdated {
        old_fee: Uint128,
        new_fee: Uint128,
    },
    MinimumLockUpTimeUpdated {
        old_time: u64,
        new_time: u64,
    },
    AddedToWhitelist {
        address: Addr,
    },
    RemovedFromWhitelist {
        address: Addr,
    },
    OwnershipTransferred {
        previous_owner: Addr,
        new_owner: Addr,
    },
    FeesWithdrawn {
        recipient: Addr,
        amount: Uint128,
    },
}

impl TimeLockrEvent {
    pub fn action(&self) -> &'static str {
        match self {
            TimeLockrEvent::MessageLocked { .. } => MESSAGE_LOCKED,
            TimeLockrEvent::MessageUnlocked { .. } => MESSAGE_UNLOCKED,
            TimeLockrEvent::FeeUpdated { .. } => FEE_UPDATED,
            TimeLockrEvent::MinimumLockUpTimeUpdated { .. } => MINIMUM_LOCK_UP_TIME_UPDATED,
            TimeLockrEvent::AddedToWhitelist { .. } => ADDED_TO_WHITELIST,
            TimeLockrEvent::RemovedFromWhitelist { .. } => REMOVED_FROM_WHITELIST,
            TimeLockrEvent::OwnershipTransferred { .. } => OWNERSHIP_TRANSFERRED,
            TimeLockrEvent::FeesWithdrawn { .. } => FEES_WITHDRAWN,
        }
    }

    /// `action` first, then the event fields.
    pub fn attributes(&self) -> Vec<Attribute> {
        let mut attrs = vec![Attribute::new("action", self.action())];
        match self {
            TimeLockrEvent::MessageLocked {
                recipient,
                message_id,
                timestamp,
            } => {
                attrs.push(Attribute::new("recipient", recipient));
                attrs.push(Attribute::new("message_id", bytes32_to_hex(message_id)));
                attrs.push(Attribute::new("timestamp", timestamp.seconds().to_string()));
            }
            TimeLockrEvent::MessageUnlocked {
                user,
                message_id,
                timestamp,
            } => {
                attrs.push(Attribute::new("user", user));
                attrs.push(Attribute::new("message_id", bytes32_to_hex(message_id)));
                attrs.push(Attribute::new("timestamp", timestamp.seconds().to_string()));
            }
            TimeLockrEvent::FeeUpdated { old_fee, new_fee } => {
                attrs.push(Attribute::new("old_fee", old_fee.to_string()));
                attrs.push(Attribute::new("new_fee", new_fee.to_string()));
            }
            TimeLockrEvent::MinimumLockUpTimeUpdated { old_time, new_time } => {
                attrs.push(Attribute::new("old_time", old_time.to_string()));
                attrs.push(Attribute::new("new_time", new_time.to_string()));
            }
            TimeLockrEvent::AddedToWhitelist { address }
            | TimeLockrEvent::RemovedFromWhitelist { address } => {
                attrs.push(Attribute::new("address", address));
            }
            TimeLockrEvent::OwnershipTransferred {
                previous_owner,
                new_owner,
            } => {
                attrs.push(Attribute::new("previous_owner", previous_owner));
                attrs.push(Attribute::new("new_owner", new_owner));
            }
            TimeLockrEvent::FeesWithdrawn { recipient, amount } => {
                attrs.push(Attribute::new("recipient", recipient));
                attrs.push(Attribute::new("amount", amount.to_string()));
            }
        }
        attrs
    }

    /// Start a response announcing this event.
    pub fn into_response(self) -> Response {
        Response::new().add_attributes(self.attributes())
    }
}
