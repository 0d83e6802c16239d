//! Fee & Timing Policy
//!
//! Validation for the owner-tunable fee and minimum lock duration, and
//! extraction of the paid amount from the funds attached to a lock call.
//!
//! | Caller            | Required payment |
//! |-------------------|------------------|
//! | Owner             | none             |
//! | Whitelisted       | none             |
//! | Everyone else     | `>= fee`         |
//!
//! Payments above the fee are not refunded; they count as collected fees.

use cosmwasm_std::{Coin, Uint128};

use crate::error::ContractError;
use crate::state::{Config, MAX_CONTENT_BYTES, MAX_LOCK_TIME_SECONDS};

/// Sum the attached funds in the fee denom. Any other denom is rejected.
pub fn paid_amount(funds: &[Coin], fee_denom: &str) -> Result<Uint128, ContractError> {
    let mut paid = Uint128::zero();
    for coin in funds {
        if coin.denom != fee_denom {
            return Err(ContractError::InvalidFunds {
                reason: format!("only {} accepted, got {}", fee_denom, coin.denom),
            });
        }
        paid = paid.checked_add(coin.amount).map_err(cosmwasm_std::StdError::from)?;
    }
    Ok(paid)
}

/// Enforce the fee for non-exempt callers.
pub fn ensure_fee_paid(config: &Config, paid: Uint128, exempt: bool) -> Result<(), ContractError> {
    if !exempt && paid < config.fee {
        return Err(ContractError::InsufficientFunds {
            required: config.fee,
            paid,
        });
    }
    Ok(())
}

/// A requested lock duration must meet the configured minimum and stay
/// within `MAX_LOCK_TIME_SECONDS`.
pub fn validate_lock_duration(config: &Config, duration_seconds: u64) -> Result<(), ContractError> {
    if duration_seconds < config.min_lock_time_seconds {
        return Err(ContractError::InvalidLockTime {
            reason: format!(
                "duration {}s is below minimum {}s",
                duration_seconds, config.min_lock_time_seconds
            ),
        });
    }
    if duration_seconds > MAX_LOCK_TIME_SECONDS {
        return Err(ContractError::InvalidLockTime {
            reason: format!(
                "duration {}s exceeds maximum {}s",
                duration_seconds, MAX_LOCK_TIME_SECONDS
            ),
        });
    }
    Ok(())
}

/// Validate a new minimum lock time set by the owner.
pub fn validate_min_lock_time(seconds: u64) -> Result<(), ContractError> {
    if seconds > MAX_LOCK_TIME_SECONDS {
        return Err(ContractError::InvalidLockTime {
            reason: format!(
                "minimum {}s exceeds maximum {}s",
                seconds, MAX_LOCK_TIME_SECONDS
            ),
        });
    }
    Ok(())
}

pub fn validate_content(content: &str) -> Result<(), ContractError> {
    if content.is_empty() {
        return Err(ContractError::EmptyMessage);
    }
    if content.len() > MAX_CONTENT_BYTES {
        return Err(ContractError::MessageTooLong {
            len: content.len(),
            max: MAX_CONTENT_BYTES,
        });
    }
    Ok(())
}

pub fn validate_fee_denom(denom: &str) -> Result<(), ContractError> {
    if denom.trim().is_empty() {
        return Err(ContractError::InvalidFunds {
            reason: "fee denom cannot be empty".to_string(),
        });
    }
    Ok(())
}
