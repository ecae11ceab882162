use cosmwasm_std::{Addr, Deps, StdResult};

use incentives_std::incentive_registry::{ConfigResponse, IncentiveResponse, IncentivesResponse};

use crate::state::{get_incentive_by_contract, get_incentives, ADMIN, CONFIG};
use crate::ContractError;

/// Queries the config. Returns a [ConfigResponse].
pub(crate) fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let owner = ADMIN.get(deps)?.unwrap_or(Addr::unchecked(""));
    let config = CONFIG.load(deps.storage)?;

    Ok(ConfigResponse {
        owner,
        epoch_manager_addr: config.epoch_manager_addr,
        allow_empty_allocations: config.allow_empty_allocations,
    })
}

/// Queries the incentive registered for the given contract address. Returns an
/// [IncentiveResponse].
pub(crate) fn query_incentive(
    deps: Deps,
    contract: String,
) -> Result<IncentiveResponse, ContractError> {
    Ok(IncentiveResponse {
        incentive: get_incentive_by_contract(deps.storage, &contract)?,
    })
}

/// Queries the registered incentives, paginated by contract address. Returns an
/// [IncentivesResponse].
pub(crate) fn query_incentives(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<IncentivesResponse> {
    Ok(IncentivesResponse {
        incentives: get_incentives(deps.storage, start_after, limit)?,
    })
}
