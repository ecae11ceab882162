use cosmwasm_std::{Order, StdResult, Storage};
use cw_controllers::Admin;
use cw_storage_plus::{Bound, Item, Map};

use incentives_std::incentive::Incentive;
use incentives_std::incentive_registry::Config;

use crate::ContractError;

// Contract's config
pub const CONFIG: Item<Config> = Item::new("config");

pub const ADMIN: Admin = Admin::new("admin");

/// Registered incentives, keyed by the contract address they are tied to
pub const INCENTIVES: Map<&str, Incentive> = Map::new("incentives");

// settings for pagination
pub(crate) const MAX_LIMIT: u32 = 100;
const DEFAULT_LIMIT: u32 = 10;

/// Gets the incentives registered in the contract
pub fn get_incentives(
    storage: &dyn Storage,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Vec<Incentive>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    INCENTIVES
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (_, incentive) = item?;

            Ok(incentive)
        })
        .collect()
}

/// Gets the incentive registered for the given contract address
pub fn get_incentive_by_contract(
    storage: &dyn Storage,
    contract: &str,
) -> Result<Incentive, ContractError> {
    INCENTIVES
        .may_load(storage, contract)?
        .ok_or(ContractError::NonExistentIncentive {
            contract: contract.to_string(),
        })
}
