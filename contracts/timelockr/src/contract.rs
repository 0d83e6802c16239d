//! TimeLockr Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_add_to_whitelist, execute_lock_message, execute_remove_from_whitelist,
    execute_set_fee, execute_set_minimum_lock_time, execute_transfer_ownership,
    execute_unlock_message, execute_withdraw_fees,
};
use crate::fee_policy::{validate_fee_denom, validate_min_lock_time};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_compute_message_id, query_config, query_fee, query_is_whitelisted, query_message,
    query_messages_by_recipient, query_min_lock_time, query_next_nonce, query_owner, query_stats,
    query_whitelist,
};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_MIN_LOCK_TIME_SECONDS,
    MESSAGE_NONCE, STATS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    validate_fee_denom(&msg.fee_denom)?;
    let min_lock_time_seconds = msg
        .min_lock_time_seconds
        .unwrap_or(DEFAULT_MIN_LOCK_TIME_SECONDS);
    validate_min_lock_time(min_lock_time_seconds)?;

    // Deployer owns the contract
    let config = Config {
        owner: info.sender,
        fee: msg.fee,
        fee_denom: msg.fee_denom,
        min_lock_time_seconds,
    };
    CONFIG.save(deps.storage, &config)?;

    STATS.save(deps.storage, &Stats::default())?;
    MESSAGE_NONCE.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("fee", config.fee.to_string())
        .add_attribute("fee_denom", config.fee_denom)
        .add_attribute(
            "min_lock_time_seconds",
            config.min_lock_time_seconds.to_string(),
        ))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Message ledger
        ExecuteMsg::LockMessage {
            recipient,
            content,
            duration_seconds,
        } => execute_lock_message(deps, env, info, recipient, content, duration_seconds),
        ExecuteMsg::UnlockMessage { message_id } => {
            execute_unlock_message(deps, env, info, message_id)
        }

        // Fee & timing policy
        ExecuteMsg::SetFee { fee } => execute_set_fee(deps, info, fee),
        ExecuteMsg::SetMinimumLockTime { seconds } => {
            execute_set_minimum_lock_time(deps, info, seconds)
        }
        ExecuteMsg::WithdrawFees { amount, recipient } => {
            execute_withdraw_fees(deps, env, info, amount, recipient)
        }

        // Access control
        ExecuteMsg::AddToWhitelist { address } => execute_add_to_whitelist(deps, info, address),
        ExecuteMsg::RemoveFromWhitelist { address } => {
            execute_remove_from_whitelist(deps, info, address)
        }
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
        QueryMsg::Fee {} => to_json_binary(&query_fee(deps)?),
        QueryMsg::MinLockTime {} => to_json_binary(&query_min_lock_time(deps)?),
        QueryMsg::IsWhitelisted { address } => {
            to_json_binary(&query_is_whitelisted(deps, address)?)
        }
        QueryMsg::Whitelist { start_after, limit } => {
            to_json_binary(&query_whitelist(deps, start_after, limit)?)
        }
        QueryMsg::Message {
            recipient,
            message_id,
        } => to_json_binary(&query_message(deps, recipient, message_id)?),
        QueryMsg::MessagesByRecipient {
            recipient,
            start_after,
            limit,
        } => to_json_binary(&query_messages_by_recipient(
            deps,
            recipient,
            start_after,
            limit,
        )?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
        QueryMsg::NextNonce {} => to_json_binary(&query_next_nonce(deps)?),
        QueryMsg::ComputeMessageId {
            sender,
            recipient,
            content,
            nonce,
            timestamp,
        } => to_json_binary(&query_compute_message_id(
            sender, recipient, content, nonce, timestamp,
        )?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if STATS.may_load(deps.storage)?.is_none() {
        STATS.save(deps.storage, &Stats::default())?;
    }
    if MESSAGE_NONCE.may_load(deps.storage)?.is_none() {
        MESSAGE_NONCE.save(deps.storage, &0u64)?;
    }

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
