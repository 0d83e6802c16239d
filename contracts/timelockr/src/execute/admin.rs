//! Access control handlers (owner only).
//!
//! - Whitelist add/remove (idempotent)
//! - Ownership transfer

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::access::{add_to_whitelist, ensure_owner, remove_from_whitelist, validate_address};
use crate::error::ContractError;
use crate::events::TimeLockrEvent;
use crate::state::CONFIG;

// ============================================================================
// Whitelist
// ============================================================================

/// Exempt an address from the lock fee. Re-adding is a successful no-op.
pub fn execute_add_to_whitelist(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let address = validate_address(deps.api, &address)?;
    add_to_whitelist(deps.storage, &address)?;

    Ok(TimeLockrEvent::AddedToWhitelist { address }.into_response())
}

/// Remove a fee exemption. Removing an unknown address is a successful no-op.
pub fn execute_remove_from_whitelist(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let address = validate_address(deps.api, &address)?;
    remove_from_whitelist(deps.storage, &address)?;

    Ok(TimeLockrEvent::RemovedFromWhitelist { address }.into_response())
}

// ============================================================================
// Ownership
// ============================================================================

/// Hand every owner privilege, including the fee exemption, to `new_owner`.
pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let new_owner = validate_address(deps.api, &new_owner)?;
    let previous_owner = config.owner;
    config.owner = new_owner.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(TimeLockrEvent::OwnershipTransferred {
        previous_owner,
        new_owner,
    }
    .into_response())
}
