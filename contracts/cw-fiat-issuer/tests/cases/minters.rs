use cosmwasm_std::{Addr, Uint128};
use cw_fiat_issuer::ContractError;

use crate::test_env::{TestEnv, OWNER};

const MASTER: &str = "minter_admin";

fn env_with_master_minter() -> TestEnv {
    let mut env = TestEnv::default();
    env.update_master_minter(OWNER, MASTER).unwrap();
    env
}

#[test]
fn configure_controller_requires_master_minter() {
    let mut env = env_with_master_minter();

    let err = env
        .configure_minter_controller("mallory", "controller", "minter")
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::Unauthorized {
            role: "master minter".to_string(),
            sender: "mallory".to_string(),
        }
    );
}

#[test]
fn configure_controller_should_work() {
    let mut env = env_with_master_minter();

    env.configure_minter_controller(MASTER, "controller", "minter")
        .unwrap();

    assert_eq!(
        env.query_minter_controller("controller").minter,
        Some(Addr::unchecked("minter"))
    );

    let controllers = env.query_minter_controllers(None, None).controllers;
    assert_eq!(controllers.len(), 1);
    assert_eq!(controllers[0].controller, Addr::unchecked("controller"));
    assert_eq!(controllers[0].minter, Addr::unchecked("minter"));
}

#[test]
fn a_minter_has_at_most_one_controller() {
    let mut env = env_with_master_minter();

    env.configure_minter_controller(MASTER, "controller_a", "minter")
        .unwrap();

    let err = env
        .configure_minter_controller(MASTER, "controller_b", "minter")
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::MinterAlreadyAssigned {
            minter: "minter".to_string(),
            controller: "controller_a".to_string(),
        }
    );

    // Reassigning the same controller to another minter is fine.
    env.configure_minter_controller(MASTER, "controller_a", "other_minter")
        .unwrap();
    assert_eq!(
        env.query_minter_controller("controller_a").minter,
        Some(Addr::unchecked("other_minter"))
    );
}

#[test]
fn remove_controller_by_master_minter_and_by_itself() {
    let mut env = env_with_master_minter();

    env.configure_minter_controller(MASTER, "controller_a", "minter_a")
        .unwrap();
    env.configure_minter_controller(MASTER, "controller_b", "minter_b")
        .unwrap();

    // Revoked by the master minter.
    env.remove_minter_controller(MASTER, "controller_a").unwrap();
    assert_eq!(env.query_minter_controller("controller_a").minter, None);

    // Self-revocation.
    env.remove_minter_controller("controller_b", "controller_b")
        .unwrap();
    assert_eq!(env.query_minter_controller("controller_b").minter, None);

    // Anyone else is rejected.
    let err = env
        .remove_minter_controller("mallory", "controller_a")
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::Unauthorized {
            role: "master minter".to_string(),
            sender: "mallory".to_string(),
        }
    );
}

#[test]
fn remove_absent_controller_is_a_noop() {
    let mut env = env_with_master_minter();

    env.remove_minter_controller(MASTER, "controller").unwrap();
}

#[test]
fn configure_minter_by_its_controller() {
    let mut env = env_with_master_minter();
    env.configure_minter_controller(MASTER, "controller", "minter")
        .unwrap();

    env.configure_minter("controller", "minter", 1000).unwrap();
    assert_eq!(
        env.query_mint_allowance("minter").allowance,
        Uint128::new(1000)
    );

    // A controller only administers its own minter.
    let err = env
        .configure_minter("controller", "other_minter", 1000)
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::Unauthorized {
            role: "controller of other_minter".to_string(),
            sender: "controller".to_string(),
        }
    );

    // Non-controllers cannot configure minters at all.
    let err = env.configure_minter("mallory", "minter", 1000).unwrap_err();
    assert_eq!(
        err,
        ContractError::Unauthorized {
            role: "minter controller".to_string(),
            sender: "mallory".to_string(),
        }
    );
}

#[test]
fn configure_minter_is_rejected_while_paused() {
    let mut env = env_with_master_minter();
    env.configure_minter_controller(MASTER, "controller", "minter")
        .unwrap();
    env.update_pauser(OWNER, "pauser").unwrap();
    env.pause("pauser").unwrap();

    let err = env.configure_minter("controller", "minter", 1000).unwrap_err();
    assert_eq!(err, ContractError::Paused {});

    env.unpause("pauser").unwrap();
    env.configure_minter("controller", "minter", 1000).unwrap();
}

#[test]
fn remove_minter_by_its_controller() {
    let mut env = env_with_master_minter();
    env.configure_minter_controller(MASTER, "controller", "minter")
        .unwrap();
    env.configure_minter("controller", "minter", 1000).unwrap();

    env.remove_minter("controller", "minter").unwrap();
    assert_eq!(env.query_mint_allowance("minter").allowance, Uint128::zero());
    assert!(env.query_mint_allowances(None, None).allowances.is_empty());

    // Removing again reports the missing minter.
    let err = env.remove_minter("controller", "minter").unwrap_err();
    assert_eq!(
        err,
        ContractError::UserNotFound {
            role: "minter".to_string(),
        }
    );
}
