use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
use cosmwasm_std::{from_json, Timestamp};

use incentive_registry::contract::{execute, query};
use incentive_registry::ContractError;
use incentives_std::incentive_registry::{
    Epoch, EpochChangedHookMsg, ExecuteMsg, IncentiveResponse, IncentivesResponse, QueryMsg,
};

use crate::common::{mock_instantiation, mock_registration, CONTRACT_ADDR, EPOCH_MANAGER};

mod common;

fn hook_msg(epoch_id: u64) -> ExecuteMsg {
    ExecuteMsg::EpochChangedHook(EpochChangedHookMsg {
        current_epoch: Epoch {
            id: epoch_id,
            start_time: Timestamp::from_seconds(1_678_802_400),
        },
    })
}

#[test]
fn epoch_hook_decrements_and_purges() {
    let mut deps = mock_dependencies();
    mock_instantiation(deps.as_mut(), false).unwrap();
    mock_registration(deps.as_mut(), CONTRACT_ADDR, 2).unwrap();

    // first tick, one epoch left
    execute(
        deps.as_mut(),
        mock_env(),
        mock_info(EPOCH_MANAGER, &[]),
        hook_msg(124),
    )
    .unwrap();

    let query_res = query(
        deps.as_ref(),
        mock_env(),
        QueryMsg::Incentive {
            contract: CONTRACT_ADDR.to_string(),
        },
    )
    .unwrap();
    let incentive_response: IncentiveResponse = from_json(query_res).unwrap();

    assert_eq!(incentive_response.incentive.epochs, 1);
    assert!(incentive_response.incentive.is_active());

    // second tick exhausts the incentive, the record is purged
    execute(
        deps.as_mut(),
        mock_env(),
        mock_info(EPOCH_MANAGER, &[]),
        hook_msg(125),
    )
    .unwrap();

    query(
        deps.as_ref(),
        mock_env(),
        QueryMsg::Incentive {
            contract: CONTRACT_ADDR.to_string(),
        },
    )
    .unwrap_err();
}

#[test]
fn epoch_hook_ticks_every_incentive() {
    let mut deps = mock_dependencies();
    mock_instantiation(deps.as_mut(), false).unwrap();

    let long_lived = "0x0000000000000000000000000000000000000001";
    let short_lived = "0x0000000000000000000000000000000000000002";
    mock_registration(deps.as_mut(), long_lived, 10).unwrap();
    mock_registration(deps.as_mut(), short_lived, 1).unwrap();

    execute(
        deps.as_mut(),
        mock_env(),
        mock_info(EPOCH_MANAGER, &[]),
        hook_msg(124),
    )
    .unwrap();

    let query_res = query(
        deps.as_ref(),
        mock_env(),
        QueryMsg::Incentives {
            start_after: None,
            limit: None,
        },
    )
    .unwrap();
    let incentives_response: IncentivesResponse = from_json(query_res).unwrap();

    // the short lived incentive got purged, the long lived one survived with one tick less
    assert_eq!(incentives_response.incentives.len(), 1);
    assert_eq!(incentives_response.incentives[0].contract, long_lived);
    assert_eq!(incentives_response.incentives[0].epochs, 9);
}

#[test]
fn epoch_hook_unauthorized() {
    let mut deps = mock_dependencies();
    mock_instantiation(deps.as_mut(), false).unwrap();
    mock_registration(deps.as_mut(), CONTRACT_ADDR, 2).unwrap();

    let err = execute(
        deps.as_mut(),
        mock_env(),
        mock_info("unauthorized", &[]),
        hook_msg(124),
    )
    .unwrap_err();

    match err {
        ContractError::Unauthorized => {}
        _ => panic!("should return ContractError::Unauthorized"),
    }
}

#[test]
fn hook_message_matches_execute_variant() {
    let hook = EpochChangedHookMsg {
        current_epoch: Epoch {
            id: 124,
            start_time: Timestamp::from_seconds(1_678_802_400),
        },
    };

    // the binary the epoch manager sends deserializes into the registry's execute message
    let msg: ExecuteMsg = from_json(hook.clone().into_json_binary().unwrap()).unwrap();
    assert_eq!(msg, ExecuteMsg::EpochChangedHook(hook));
}
