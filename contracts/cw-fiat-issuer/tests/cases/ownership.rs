use cosmwasm_std::Addr;
use cw_fiat_issuer::ContractError;

use crate::test_env::{TestEnv, OWNER};

#[test]
fn propose_transfer_by_non_owner_should_fail() {
    let mut env = TestEnv::default();

    let err = env.update_owner("mallory", "new_owner").unwrap_err();
    assert_eq!(
        err,
        ContractError::Unauthorized {
            role: "owner".to_string(),
            sender: "mallory".to_string(),
        }
    );
}

#[test]
fn propose_transfer_to_privileged_address_should_fail() {
    let mut env = TestEnv::default();
    env.update_pauser(OWNER, "pauser").unwrap();

    let err = env.update_owner(OWNER, "pauser").unwrap_err();
    assert_eq!(
        err,
        ContractError::AlreadyPrivileged {
            address: "pauser".to_string(),
            role: "pauser".to_string(),
        }
    );
}

#[test]
fn accept_without_pending_transfer_should_fail() {
    let mut env = TestEnv::default();

    let err = env.accept_owner("anyone").unwrap_err();
    assert_eq!(err, ContractError::NoPendingTransfer {});
}

#[test]
fn accept_by_wrong_candidate_should_fail() {
    let mut env = TestEnv::default();
    env.update_owner(OWNER, "new_owner").unwrap();

    let err = env.accept_owner("mallory").unwrap_err();
    assert_eq!(
        err,
        ContractError::Unauthorized {
            role: "pending owner".to_string(),
            sender: "mallory".to_string(),
        }
    );

    // The proposal itself grants nothing until accepted.
    let ownership = env.query_owner();
    assert_eq!(ownership.owner, Addr::unchecked(OWNER));
    assert_eq!(ownership.pending_owner, Some(Addr::unchecked("new_owner")));
}

#[test]
fn two_phase_transfer_should_work() {
    let mut env = TestEnv::default();

    env.update_owner(OWNER, "new_owner").unwrap();
    env.accept_owner("new_owner").unwrap();

    let ownership = env.query_owner();
    assert_eq!(ownership.owner, Addr::unchecked("new_owner"));
    assert_eq!(ownership.pending_owner, None);

    // The previous owner keeps no privilege, the new one has it all.
    let err = env.update_pauser(OWNER, "pauser").unwrap_err();
    assert_eq!(
        err,
        ContractError::Unauthorized {
            role: "owner".to_string(),
            sender: OWNER.to_string(),
        }
    );
    env.update_pauser("new_owner", "pauser").unwrap();
}

#[test]
fn repropose_replaces_candidate() {
    let mut env = TestEnv::default();

    env.update_owner(OWNER, "first").unwrap();
    env.update_owner(OWNER, "second").unwrap();

    let err = env.accept_owner("first").unwrap_err();
    assert_eq!(
        err,
        ContractError::Unauthorized {
            role: "pending owner".to_string(),
            sender: "first".to_string(),
        }
    );

    env.accept_owner("second").unwrap();
    assert_eq!(env.query_owner().owner, Addr::unchecked("second"));
}

#[test]
fn cancel_clears_pending_transfer() {
    let mut env = TestEnv::default();
    env.update_owner(OWNER, "new_owner").unwrap();

    // Only the owner may retract the proposal.
    let err = env.cancel_owner_transfer("new_owner").unwrap_err();
    assert_eq!(
        err,
        ContractError::Unauthorized {
            role: "owner".to_string(),
            sender: "new_owner".to_string(),
        }
    );

    env.cancel_owner_transfer(OWNER).unwrap();
    assert_eq!(env.query_owner().pending_owner, None);

    let err = env.accept_owner("new_owner").unwrap_err();
    assert_eq!(err, ContractError::NoPendingTransfer {});

    // Nothing left to cancel either.
    let err = env.cancel_owner_transfer(OWNER).unwrap_err();
    assert_eq!(err, ContractError::NoPendingTransfer {});
}
