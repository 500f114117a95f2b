use cosmwasm_std::Addr;
use cw_fiat_issuer::ContractError;

use crate::test_env::{TestEnv, OWNER};

#[test]
fn update_role_by_non_owner_should_fail() {
    let mut env = TestEnv::default();

    for result in [
        env.update_master_minter("mallory", "minter_admin"),
        env.update_pauser("mallory", "pauser"),
        env.update_blacklister("mallory", "blacklister"),
    ] {
        assert_eq!(
            result.unwrap_err(),
            ContractError::Unauthorized {
                role: "owner".to_string(),
                sender: "mallory".to_string(),
            }
        );
    }
}

#[test]
fn update_roles_should_work() {
    let mut env = TestEnv::default();

    env.update_master_minter(OWNER, "minter_admin").unwrap();
    env.update_pauser(OWNER, "pauser").unwrap();
    env.update_blacklister(OWNER, "blacklister").unwrap();

    assert_eq!(
        env.query_master_minter().address,
        Some(Addr::unchecked("minter_admin"))
    );
    assert_eq!(env.query_pauser().address, Some(Addr::unchecked("pauser")));
    assert_eq!(
        env.query_blacklister().address,
        Some(Addr::unchecked("blacklister"))
    );
}

#[test]
fn roles_are_mutually_exclusive() {
    let mut env = TestEnv::default();
    env.update_pauser(OWNER, "pauser").unwrap();

    // A pauser cannot also become the blacklister.
    let err = env.update_blacklister(OWNER, "pauser").unwrap_err();
    assert_eq!(
        err,
        ContractError::AlreadyPrivileged {
            address: "pauser".to_string(),
            role: "pauser".to_string(),
        }
    );

    // The owner cannot grant an operational role to itself.
    let err = env.update_pauser(OWNER, OWNER).unwrap_err();
    assert_eq!(
        err,
        ContractError::AlreadyPrivileged {
            address: OWNER.to_string(),
            role: "owner".to_string(),
        }
    );

    // Nor to a candidate mid-way through an ownership handoff.
    env.update_owner(OWNER, "new_owner").unwrap();
    let err = env.update_blacklister(OWNER, "new_owner").unwrap_err();
    assert_eq!(
        err,
        ContractError::AlreadyPrivileged {
            address: "new_owner".to_string(),
            role: "pending owner".to_string(),
        }
    );
}

#[test]
fn reassigning_a_role_strips_the_previous_holder() {
    let mut env = TestEnv::default();

    env.update_pauser(OWNER, "first").unwrap();
    env.update_pauser(OWNER, "second").unwrap();

    assert_eq!(env.query_pauser().address, Some(Addr::unchecked("second")));

    let err = env.pause("first").unwrap_err();
    assert_eq!(
        err,
        ContractError::Unauthorized {
            role: "pauser".to_string(),
            sender: "first".to_string(),
        }
    );
    env.pause("second").unwrap();
}

#[test]
fn reassigning_the_current_holder_should_fail() {
    let mut env = TestEnv::default();
    env.update_pauser(OWNER, "pauser").unwrap();

    // The holder already holds the role it would be granted.
    let err = env.update_pauser(OWNER, "pauser").unwrap_err();
    assert_eq!(
        err,
        ContractError::AlreadyPrivileged {
            address: "pauser".to_string(),
            role: "pauser".to_string(),
        }
    );
}

#[test]
fn acting_on_an_unset_role_reports_user_not_found() {
    let mut env = TestEnv::default();

    let err = env.pause("anyone").unwrap_err();
    assert_eq!(
        err,
        ContractError::UserNotFound {
            role: "pauser".to_string(),
        }
    );

    let err = env
        .configure_minter_controller("anyone", "controller", "minter")
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::UserNotFound {
            role: "master minter".to_string(),
        }
    );

    let err = env.blacklist("anyone", "noble1abc").unwrap_err();
    assert_eq!(
        err,
        ContractError::UserNotFound {
            role: "blacklister".to_string(),
        }
    );
}
