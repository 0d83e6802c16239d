//! Access Control Module
//!
//! Owner checks and the fee whitelist. The owner and whitelisted addresses
//! lock messages without paying the fee.

use cosmwasm_std::{Addr, Api, Deps, Order, StdResult, Storage};
use cw_storage_plus::{Bound, Map};

use crate::error::ContractError;
use crate::state::Config;

// ============================================================================
// Storage
// ============================================================================

/// Addresses exempt from the lock fee
pub const WHITELIST: Map<&Addr, bool> = Map::new("whitelist");

// ============================================================================
// Owner
// ============================================================================

/// Reject the call unless `sender` is the configured owner.
pub fn ensure_owner(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if *sender != config.owner {
        return Err(ContractError::UnauthorizedAccess);
    }
    Ok(())
}

/// Validate a user-supplied address, rejecting the empty string explicitly.
pub fn validate_address(api: &dyn Api, address: &str) -> Result<Addr, ContractError> {
    if address.trim().is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "address cannot be empty".to_string(),
        });
    }
    Ok(api.addr_validate(address)?)
}

// ============================================================================
// Whitelist
// ============================================================================

pub fn is_whitelisted(storage: &dyn Storage, account: &Addr) -> StdResult<bool> {
    Ok(WHITELIST.may_load(storage, account)?.unwrap_or(false))
}

/// Add an account to the whitelist. Returns whether it was newly added.
pub fn add_to_whitelist(storage: &mut dyn Storage, account: &Addr) -> StdResult<bool> {
    let existed = is_whitelisted(storage, account)?;
    WHITELIST.save(storage, account, &true)?;
    Ok(!existed)
}

/// Remove an account from the whitelist. Returns whether it was present.
pub fn remove_from_whitelist(storage: &mut dyn Storage, account: &Addr) -> StdResult<bool> {
    let existed = is_whitelisted(storage, account)?;
    WHITELIST.remove(storage, account);
    Ok(existed)
}

/// Owner and whitelisted accounts bypass the fee
pub fn is_fee_exempt(deps: Deps, config: &Config, account: &Addr) -> StdResult<bool> {
    if *account == config.owner {
        return Ok(true);
    }
    is_whitelisted(deps.storage, account)
}

/// Enumerate whitelisted accounts in ascending order.
pub fn list_whitelist(
    storage: &dyn Storage,
    start_after: Option<&Addr>,
    limit: usize,
) -> StdResult<Vec<Addr>> {
    let start = start_after.map(Bound::exclusive);
    WHITELIST
        .keys(storage, start, None, Order::Ascending)
        .take(limit)
        .collect()
}
