//! Integration tests for access control.
//!
//! Whitelist add/remove (idempotence, events, enumeration) and ownership
//! transfer.

use cosmwasm_std::{coins, Addr, Uint128};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use timelockr::msg::{
    ExecuteMsg, InstantiateMsg, IsWhitelistedResponse, OwnerResponse, QueryMsg, WhitelistResponse,
};
use timelockr::ContractError;

const FEE: u128 = 1_000;
const MIN_LOCK: u64 = 60;

// ============================================================================
// Test Setup
// ============================================================================

fn contract_timelockr() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        timelockr::contract::execute,
        timelockr::contract::instantiate,
        timelockr::contract::query,
    );
    Box::new(contract)
}

fn setup() -> (App, Addr, Addr, Addr) {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let user = Addr::unchecked("terra1user");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &user, coins(10_000_000_000, "uluna"))
            .unwrap();
    });

    let code_id = app.store_code(contract_timelockr());
    let contract_addr = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                fee: Uint128::from(FEE),
                fee_denom: "uluna".to_string(),
                min_lock_time_seconds: Some(MIN_LOCK),
            },
            &[],
            "timelockr",
            None,
        )
        .unwrap();

    (app, contract_addr, owner, user)
}

fn wasm_attr(res: &AppResponse, key: &str) -> Option<String> {
    res.events
        .iter()
        .filter(|e| e.ty == "wasm")
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

fn wasm_keys(res: &AppResponse) -> Vec<String> {
    res.events
        .iter()
        .filter(|e| e.ty == "wasm")
        .flat_map(|e| e.attributes.iter())
        .filter(|a| !a.key.starts_with('_'))
        .map(|a| a.key.clone())
        .collect()
}

fn is_whitelisted(app: &App, contract_addr: &Addr, address: &Addr) -> bool {
    let res: IsWhitelistedResponse = app
        .wrap()
        .query_wasm_smart(
            contract_addr,
            &QueryMsg::IsWhitelisted {
                address: address.to_string(),
            },
        )
        .unwrap();
    res.is_whitelisted
}

fn free_lock(app: &mut App, contract_addr: &Addr, sender: &Addr) -> bool {
    app.execute_contract(
        sender.clone(),
        contract_addr.clone(),
        &ExecuteMsg::LockMessage {
            recipient: sender.to_string(),
            content: "free".to_string(),
            duration_seconds: MIN_LOCK,
        },
        &[],
    )
    .is_ok()
}

// ============================================================================
// Whitelist Tests
// ============================================================================

#[test]
fn test_add_to_whitelist() {
    let (mut app, contract_addr, owner, user) = setup();
    assert!(!is_whitelisted(&app, &contract_addr, &user));

    let res = app
        .execute_contract(
            owner,
            contract_addr.clone(),
            &ExecuteMsg::AddToWhitelist {
                address: user.to_string(),
            },
            &[],
        )
        .unwrap();

    assert_eq!(wasm_attr(&res, "action").unwrap(), "added_to_whitelist");
    assert_eq!(wasm_attr(&res, "address").unwrap(), user.to_string());
    assert!(is_whitelisted(&app, &contract_addr, &user));
}

#[test]
fn test_add_to_whitelist_is_idempotent() {
    let (mut app, contract_addr, owner, user) = setup();

    for _ in 0..2 {
        let res = app
            .execute_contract(
                owner.clone(),
                contract_addr.clone(),
                &ExecuteMsg::AddToWhitelist {
                    address: user.to_string(),
                },
                &[],
            )
            .unwrap();
        assert_eq!(wasm_attr(&res, "action").unwrap(), "added_to_whitelist");
        assert_eq!(wasm_keys(&res), vec!["action", "address"]);
    }

    let list: WhitelistResponse = app
        .wrap()
        .query_wasm_smart(
            &contract_addr,
            &QueryMsg::Whitelist {
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(list.addresses, vec![user]);
}

#[test]
fn test_remove_from_whitelist_restores_fee() {
    let (mut app, contract_addr, owner, user) = setup();

    app.execute_contract(
        owner.clone(),
        contract_addr.clone(),
        &ExecuteMsg::AddToWhitelist {
            address: user.to_string(),
        },
        &[],
    )
    .unwrap();
    assert!(free_lock(&mut app, &contract_addr, &user));

    let res = app
        .execute_contract(
            owner.clone(),
            contract_addr.clone(),
            &ExecuteMsg::RemoveFromWhitelist {
                address: user.to_string(),
            },
            &[],
        )
        .unwrap();
    assert_eq!(wasm_attr(&res, "action").unwrap(), "removed_from_whitelist");
    assert!(!is_whitelisted(&app, &contract_addr, &user));
    assert!(!free_lock(&mut app, &contract_addr, &user));

    // Removing again is a successful no-op
    let res = app
        .execute_contract(
            owner,
            contract_addr.clone(),
            &ExecuteMsg::RemoveFromWhitelist {
                address: user.to_string(),
            },
            &[],
        )
        .unwrap();
    assert_eq!(wasm_attr(&res, "action").unwrap(), "removed_from_whitelist");
    assert_eq!(wasm_keys(&res), vec!["action", "address"]);
}

#[test]
fn test_whitelist_non_owner_rejected() {
    let (mut app, contract_addr, _owner, user) = setup();

    for msg in [
        ExecuteMsg::AddToWhitelist {
            address: user.to_string(),
        },
        ExecuteMsg::RemoveFromWhitelist {
            address: user.to_string(),
        },
    ] {
        let err = app
            .execute_contract(user.clone(), contract_addr.clone(), &msg, &[])
            .unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            ContractError::UnauthorizedAccess.to_string()
        );
    }

    assert!(!is_whitelisted(&app, &contract_addr, &user));
}

#[test]
fn test_whitelist_pagination() {
    let (mut app, contract_addr, owner, _user) = setup();

    for name in ["terra1aaa", "terra1bbb", "terra1ccc"] {
        app.execute_contract(
            owner.clone(),
            contract_addr.clone(),
            &ExecuteMsg::AddToWhitelist {
                address: name.to_string(),
            },
            &[],
        )
        .unwrap();
    }

    let first: WhitelistResponse = app
        .wrap()
        .query_wasm_smart(
            &contract_addr,
            &QueryMsg::Whitelist {
                start_after: None,
                limit: Some(2),
            },
        )
        .unwrap();
    assert_eq!(
        first.addresses,
        vec![Addr::unchecked("terra1aaa"), Addr::unchecked("terra1bbb")]
    );

    let rest: WhitelistResponse = app
        .wrap()
        .query_wasm_smart(
            &contract_addr,
            &QueryMsg::Whitelist {
                start_after: Some("terra1bbb".to_string()),
                limit: Some(2),
            },
        )
        .unwrap();
    assert_eq!(rest.addresses, vec![Addr::unchecked("terra1ccc")]);
}

// ============================================================================
// Ownership Tests
// ============================================================================

#[test]
fn test_transfer_ownership() {
    let (mut app, contract_addr, owner, user) = setup();

    let res = app
        .execute_contract(
            owner.clone(),
            contract_addr.clone(),
            &ExecuteMsg::TransferOwnership {
                new_owner: user.to_string(),
            },
            &[],
        )
        .unwrap();

    assert_eq!(wasm_attr(&res, "action").unwrap(), "ownership_transferred");
    assert_eq!(
        wasm_attr(&res, "previous_owner").unwrap(),
        owner.to_string()
    );
    assert_eq!(wasm_attr(&res, "new_owner").unwrap(), user.to_string());

    let res: OwnerResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::Owner {})
        .unwrap();
    assert_eq!(res.owner, user);

    // New owner holds every privilege, including the fee exemption
    assert!(free_lock(&mut app, &contract_addr, &user));
    app.execute_contract(
        user.clone(),
        contract_addr.clone(),
        &ExecuteMsg::SetFee {
            fee: Uint128::from(5u128),
        },
        &[],
    )
    .unwrap();

    // Previous owner has none
    let err = app
        .execute_contract(
            owner.clone(),
            contract_addr.clone(),
            &ExecuteMsg::AddToWhitelist {
                address: owner.to_string(),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        ContractError::UnauthorizedAccess.to_string()
    );
    assert!(!free_lock(&mut app, &contract_addr, &owner));
}

#[test]
fn test_transfer_ownership_non_owner_rejected() {
    let (mut app, contract_addr, owner, user) = setup();

    let err = app
        .execute_contract(
            user.clone(),
            contract_addr.clone(),
            &ExecuteMsg::TransferOwnership {
                new_owner: user.to_string(),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        ContractError::UnauthorizedAccess.to_string()
    );

    let res: OwnerResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::Owner {})
        .unwrap();
    assert_eq!(res.owner, owner);
}

#[test]
fn test_transfer_ownership_rejects_empty_address() {
    let (mut app, contract_addr, owner, _user) = setup();

    let err = app
        .execute_contract(
            owner,
            contract_addr,
            &ExecuteMsg::TransferOwnership {
                new_owner: "".to_string(),
            },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().starts_with("Invalid address"));
}
