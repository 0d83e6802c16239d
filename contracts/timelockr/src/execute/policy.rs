//! Fee and lock-time policy handlers (owner only).

use cosmwasm_std::{coins, BankMsg, DepsMut, Env, MessageInfo, Response, StdError, Uint128};

use crate::access::{ensure_owner, validate_address};
use crate::error::ContractError;
use crate::events::TimeLockrEvent;
use crate::fee_policy::validate_min_lock_time;
use crate::state::{CONFIG, STATS};

/// Set the fee required from non-exempt callers.
pub fn execute_set_fee(
    deps: DepsMut,
    info: MessageInfo,
    fee: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let old_fee = config.fee;
    config.fee = fee;
    CONFIG.save(deps.storage, &config)?;

    Ok(TimeLockrEvent::FeeUpdated {
        old_fee,
        new_fee: fee,
    }
    .into_response())
}

/// Set the minimum lock duration for new messages.
///
/// Already locked messages keep their unlock time.
pub fn execute_set_minimum_lock_time(
    deps: DepsMut,
    info: MessageInfo,
    seconds: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;
    validate_min_lock_time(seconds)?;

    let old_time = config.min_lock_time_seconds;
    config.min_lock_time_seconds = seconds;
    CONFIG.save(deps.storage, &config)?;

    Ok(TimeLockrEvent::MinimumLockUpTimeUpdated {
        old_time,
        new_time: seconds,
    }
    .into_response())
}

/// Send collected fees out of the contract.
///
/// Stats are recorded before the bank message is attached.
pub fn execute_withdraw_fees(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Option<Uint128>,
    recipient: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let recipient = match recipient {
        Some(r) => validate_address(deps.api, &r)?,
        None => config.owner.clone(),
    };

    let balance = deps
        .querier
        .query_balance(&env.contract.address, &config.fee_denom)?
        .amount;
    let amount = amount.unwrap_or(balance);

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "nothing to withdraw".to_string(),
        });
    }
    if amount > balance {
        return Err(ContractError::InvalidAmount {
            reason: format!("requested {} exceeds balance {}", amount, balance),
        });
    }

    let mut stats = STATS.load(deps.storage)?;
    stats.total_fees_withdrawn = stats
        .total_fees_withdrawn
        .checked_add(amount)
        .map_err(StdError::from)?;
    STATS.save(deps.storage, &stats)?;

    let send = BankMsg::Send {
        to_address: recipient.to_string(),
        amount: coins(amount.u128(), &config.fee_denom),
    };

    Ok(TimeLockrEvent::FeesWithdrawn { recipient, amount }
        .into_response()
        .add_message(send))
}
