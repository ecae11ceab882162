use cosmwasm_std::{entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response};
use cw2::{get_contract_version, set_contract_version};
use semver::Version;

use incentives_std::incentive_registry::{
    Config, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg,
};

use crate::error::ContractError;
use crate::state::{ADMIN, CONFIG};
use crate::{commands, queries};

// version info for migration info
const CONTRACT_NAME: &str = "incentives-hub_incentive-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        epoch_manager_addr: deps.api.addr_validate(&msg.epoch_manager_addr)?,
        allow_empty_allocations: msg.allow_empty_allocations,
    };

    CONFIG.save(deps.storage, &config)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    ADMIN.set(deps.branch(), Some(owner))?;

    Ok(Response::default().add_attributes(vec![
        ("action", "instantiate".to_string()),
        ("owner", msg.owner),
        ("epoch_manager_addr", config.epoch_manager_addr.to_string()),
        (
            "allow_empty_allocations",
            config.allow_empty_allocations.to_string(),
        ),
    ]))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RegisterIncentive {
            contract,
            allocations,
            epochs,
        } => commands::register_incentive(deps, env, info, contract, allocations, epochs),
        ExecuteMsg::CancelIncentive { contract } => {
            commands::cancel_incentive(deps, info, contract)
        }
        ExecuteMsg::EpochChangedHook(msg) => commands::on_epoch_changed(deps, info, msg),
        ExecuteMsg::UpdateConfig {
            owner,
            epoch_manager_addr,
            allow_empty_allocations,
        } => commands::update_config(deps, info, owner, epoch_manager_addr, allow_empty_allocations),
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Config {} => Ok(to_json_binary(&queries::query_config(deps)?)?),
        QueryMsg::Incentive { contract } => {
            Ok(to_json_binary(&queries::query_incentive(deps, contract)?)?)
        }
        QueryMsg::Incentives { start_after, limit } => Ok(to_json_binary(
            &queries::query_incentives(deps, start_after, limit)?,
        )?),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let contract_info = get_contract_version(deps.storage)?;

    // prevent accidentally migrating a different contract to this registry
    if contract_info.contract != CONTRACT_NAME {
        return Err(ContractError::ContractNameMismatch {
            expected: CONTRACT_NAME.to_string(),
            actual: contract_info.contract,
        });
    }

    let version: Version = CONTRACT_VERSION.parse()?;
    let storage_version: Version = contract_info.version.parse()?;

    if storage_version >= version {
        return Err(ContractError::MigrateInvalidVersion {
            current_version: storage_version,
            new_version: version,
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
