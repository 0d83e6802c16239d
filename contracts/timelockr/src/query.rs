//! Query handlers for the TimeLockr contract.

use cosmwasm_std::{Binary, Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::access::{is_whitelisted, list_whitelist};
use crate::hash::{bytes_to_message_id, compute_message_id};
use crate::msg::{
    ComputeMessageIdResponse, ConfigResponse, FeeResponse, IsWhitelistedResponse,
    MessageResponse, MessagesResponse, MinLockTimeResponse, NextNonceResponse, OwnerResponse,
    WhitelistResponse,
};
use crate::state::{
    LockedMessage, Stats, CONFIG, MESSAGES, MESSAGE_NONCE, MESSAGE_RECIPIENTS, STATS,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

// ============================================================================
// Configuration Queries
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        fee: config.fee,
        fee_denom: config.fee_denom,
        min_lock_time_seconds: config.min_lock_time_seconds,
    })
}

pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(OwnerResponse {
        owner: config.owner,
    })
}

pub fn query_fee(deps: Deps) -> StdResult<FeeResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(FeeResponse {
        fee: config.fee,
        denom: config.fee_denom,
    })
}

pub fn query_min_lock_time(deps: Deps) -> StdResult<MinLockTimeResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(MinLockTimeResponse {
        seconds: config.min_lock_time_seconds,
    })
}

// ============================================================================
// Whitelist Queries
// ============================================================================

pub fn query_is_whitelisted(deps: Deps, address: String) -> StdResult<IsWhitelistedResponse> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(IsWhitelistedResponse {
        is_whitelisted: is_whitelisted(deps.storage, &addr)?,
    })
}

pub fn query_whitelist(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<WhitelistResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;

    let addresses = list_whitelist(deps.storage, start.as_ref(), limit)?;
    Ok(WhitelistResponse { addresses })
}

// ============================================================================
// Ledger Queries
// ============================================================================

fn to_message_response(message: LockedMessage) -> MessageResponse {
    MessageResponse {
        message_id: Binary::from(message.message_id.to_vec()),
        nonce: message.nonce,
        sender: message.sender,
        recipient: message.recipient,
        content: message.content,
        created_at: message.created_at,
        unlock_time: message.unlock_time,
        locked: message.locked,
        fee_paid: message.fee_paid,
    }
}

/// Look up a locked message by `(recipient, message_id)`.
pub fn query_message(
    deps: Deps,
    recipient: String,
    message_id: Binary,
) -> StdResult<Option<MessageResponse>> {
    let recipient = deps.api.addr_validate(&recipient)?;
    let message_id = bytes_to_message_id(message_id.as_slice()).map_err(StdError::generic_err)?;

    let nonce = match MESSAGE_RECIPIENTS.may_load(deps.storage, message_id.as_slice())? {
        Some((indexed, nonce)) if indexed == recipient => nonce,
        _ => return Ok(None),
    };

    let message = MESSAGES.may_load(deps.storage, (&recipient, nonce))?;
    Ok(message.map(to_message_response))
}

/// List locked messages addressed to `recipient` in submission order.
///
/// `start_after` is the nonce of the last message of the previous page.
pub fn query_messages_by_recipient(
    deps: Deps,
    recipient: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<MessagesResponse> {
    let recipient = deps.api.addr_validate(&recipient)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let messages = MESSAGES
        .prefix(&recipient)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (_, message) = item?;
            Ok(to_message_response(message))
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(MessagesResponse { messages })
}

pub fn query_stats(deps: Deps) -> StdResult<Stats> {
    STATS.load(deps.storage)
}

pub fn query_next_nonce(deps: Deps) -> StdResult<NextNonceResponse> {
    Ok(NextNonceResponse {
        nonce: MESSAGE_NONCE.load(deps.storage)?,
    })
}

/// Recompute a message id from its inputs without touching storage.
pub fn query_compute_message_id(
    sender: String,
    recipient: String,
    content: String,
    nonce: u64,
    timestamp: u64,
) -> StdResult<ComputeMessageIdResponse> {
    let message_id = compute_message_id(&sender, &recipient, nonce, timestamp, &content);
    Ok(ComputeMessageIdResponse {
        message_id: Binary::from(message_id.to_vec()),
    })
}
