use cosmwasm_std::testing::{mock_env, mock_info};
use cosmwasm_std::{Decimal, DepsMut, Response};

use incentive_registry::contract::{execute, instantiate};
use incentive_registry::ContractError;
use incentives_std::incentive::Allocation;
use incentives_std::incentive_registry::{ExecuteMsg, InstantiateMsg};

pub(crate) const OWNER: &str = "owner";
pub(crate) const EPOCH_MANAGER: &str = "epoch_manager";
pub(crate) const CONTRACT_ADDR: &str = "0x5dCA2483280D9727c80b5518faC4556617fb194F";

/// Mocks contract instantiation.
pub(crate) fn mock_instantiation(
    deps: DepsMut,
    allow_empty_allocations: bool,
) -> Result<Response, ContractError> {
    let msg = InstantiateMsg {
        owner: OWNER.to_string(),
        epoch_manager_addr: EPOCH_MANAGER.to_string(),
        allow_empty_allocations,
    };

    instantiate(deps, mock_env(), mock_info(OWNER, &[]), msg)
}

/// Mocks the registration of an incentive with a single valid allocation.
pub(crate) fn mock_registration(
    deps: DepsMut,
    contract: &str,
    epochs: u32,
) -> Result<Response, ContractError> {
    let msg = ExecuteMsg::RegisterIncentive {
        contract: contract.to_string(),
        allocations: vec![Allocation::new("aphoton", Decimal::one())],
        epochs,
    };

    execute(deps, mock_env(), mock_info(OWNER, &[]), msg)
}
