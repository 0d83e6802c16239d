//! Message ledger handlers (LockMessage and UnlockMessage).
//!
//! A message moves Nonexistent -> Locked -> Unlocked. Unlocking removes it,
//! so an unlocked message is indistinguishable from one that never existed.

use cosmwasm_std::{to_json_binary, Binary, DepsMut, Env, MessageInfo, Response, StdError};

use crate::access::{is_fee_exempt, validate_address};
use crate::error::ContractError;
use crate::events::TimeLockrEvent;
use crate::fee_policy::{ensure_fee_paid, paid_amount, validate_content, validate_lock_duration};
use crate::hash::{bytes_to_message_id, compute_message_id};
use crate::msg::{LockMessageResponse, UnlockMessageResponse};
use crate::state::{LockedMessage, CONFIG, MESSAGES, MESSAGE_NONCE, MESSAGE_RECIPIENTS, STATS};

/// Lock a message for `recipient`.
///
/// Checks run in order: recipient address, content, lock duration, attached
/// funds, fee. Any failure reverts the call with nothing stored.
pub fn execute_lock_message(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    content: String,
    duration_seconds: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let recipient = validate_address(deps.api, &recipient)?;
    validate_content(&content)?;
    validate_lock_duration(&config, duration_seconds)?;

    let paid = paid_amount(&info.funds, &config.fee_denom)?;
    let exempt = is_fee_exempt(deps.as_ref(), &config, &info.sender)?;
    ensure_fee_paid(&config, paid, exempt)?;

    // Consume a nonce
    let nonce = MESSAGE_NONCE.load(deps.storage)?;
    let next_nonce = nonce
        .checked_add(1)
        .ok_or_else(|| StdError::generic_err("message nonce overflow"))?;
    MESSAGE_NONCE.save(deps.storage, &next_nonce)?;

    let created_at = env.block.time;
    let unlock_time = created_at.plus_seconds(duration_seconds);
    let message_id = compute_message_id(
        info.sender.as_str(),
        recipient.as_str(),
        nonce,
        created_at.seconds(),
        &content,
    );

    if MESSAGE_RECIPIENTS.has(deps.storage, message_id.as_slice()) {
        return Err(StdError::generic_err("message id collision").into());
    }

    let message = LockedMessage {
        message_id,
        nonce,
        sender: info.sender.clone(),
        recipient: recipient.clone(),
        content,
        created_at,
        unlock_time,
        locked: true,
        fee_paid: paid,
    };
    MESSAGES.save(deps.storage, (&recipient, nonce), &message)?;
    MESSAGE_RECIPIENTS.save(
        deps.storage,
        message_id.as_slice(),
        &(recipient.clone(), nonce),
    )?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_locked += 1;
    stats.total_fees_collected = stats
        .total_fees_collected
        .checked_add(paid)
        .map_err(StdError::from)?;
    STATS.save(deps.storage, &stats)?;

    let data = LockMessageResponse {
        message_id: Binary::from(message_id.to_vec()),
        unlock_time,
    };

    Ok(TimeLockrEvent::MessageLocked {
        recipient,
        message_id,
        timestamp: created_at,
    }
    .into_response()
    .add_attribute("sender", info.sender)
    .add_attribute("unlock_time", unlock_time.seconds().to_string())
    .add_attribute("fee_paid", paid.to_string())
    .set_data(to_json_binary(&data)?))
}

/// Unlock a message addressed to the sender.
///
/// The message is removed before the response is built; no external
/// interaction happens while it is still in storage.
pub fn execute_unlock_message(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    message_id: Binary,
) -> Result<Response, ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::InvalidFunds {
            reason: "unlock does not accept funds".to_string(),
        });
    }

    let message_id = bytes_to_message_id(message_id.as_slice())
        .map_err(|reason| ContractError::InvalidMessageId { reason })?;

    let (recipient, nonce) = MESSAGE_RECIPIENTS
        .may_load(deps.storage, message_id.as_slice())?
        .ok_or(ContractError::MessageNotFound)?;

    if recipient != info.sender {
        return Err(ContractError::UnauthorizedAccess);
    }

    let message = MESSAGES
        .may_load(deps.storage, (&recipient, nonce))?
        .ok_or(ContractError::MessageNotFound)?;

    if env.block.time < message.unlock_time {
        return Err(ContractError::MessageStillLocked {
            unlock_time: message.unlock_time.seconds(),
        });
    }

    MESSAGES.remove(deps.storage, (&recipient, nonce));
    MESSAGE_RECIPIENTS.remove(deps.storage, message_id.as_slice());

    let mut stats = STATS.load(deps.storage)?;
    stats.total_unlocked += 1;
    STATS.save(deps.storage, &stats)?;

    let data = UnlockMessageResponse {
        message_id: Binary::from(message_id.to_vec()),
        content: message.content,
    };

    Ok(TimeLockrEvent::MessageUnlocked {
        user: recipient,
        message_id,
        timestamp: env.block.time,
    }
    .into_response()
    .set_data(to_json_binary(&data)?))
}
