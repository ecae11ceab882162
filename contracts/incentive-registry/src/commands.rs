use std::collections::HashSet;

use cosmwasm_std::{ensure, DepsMut, Env, MessageInfo, Order, Response, StdResult};

use incentives_std::incentive::{Allocation, Incentive};
use incentives_std::incentive_registry::EpochChangedHookMsg;

use crate::state::{get_incentive_by_contract, ADMIN, CONFIG, INCENTIVES};
use crate::ContractError;

/// Registers an incentive for the given contract address. This is the registration boundary:
/// business rules the entity validator deliberately leaves out, i.e. epoch positivity,
/// allocation presence and denom uniqueness, are enforced here before the stateless
/// validation runs.
pub(crate) fn register_incentive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    contract: String,
    allocations: Vec<Allocation>,
    epochs: u32,
) -> Result<Response, ContractError> {
    // the registry never escrows funds, distribution is external
    cw_utils::nonpayable(&info)?;

    // an incentive with no rounds left would be born exhausted
    ensure!(epochs > 0, ContractError::ZeroEpochs);

    let config = CONFIG.load(deps.storage)?;
    if !config.allow_empty_allocations {
        ensure!(!allocations.is_empty(), ContractError::EmptyAllocations);
    }

    let mut seen_denoms: HashSet<&str> = HashSet::new();
    for allocation in &allocations {
        if !seen_denoms.insert(allocation.denom.as_str()) {
            return Err(ContractError::DuplicateAllocationDenom {
                denom: allocation.denom.clone(),
            });
        }
    }

    let mut incentive = Incentive::new(contract, allocations, epochs);
    incentive.validate()?;

    if INCENTIVES
        .may_load(deps.storage, &incentive.contract)?
        .is_some()
    {
        return Err(ContractError::IncentiveAlreadyExists {
            contract: incentive.contract,
        });
    }

    incentive.start_time = env.block.time;
    INCENTIVES.save(deps.storage, &incentive.contract, &incentive)?;

    Ok(Response::default().add_attributes(vec![
        ("action", "register_incentive".to_string()),
        ("contract", incentive.contract.clone()),
        (
            "allocations",
            incentive
                .allocations
                .iter()
                .map(|allocation| allocation.to_string())
                .collect::<Vec<_>>()
                .join(","),
        ),
        ("epochs", incentive.epochs.to_string()),
        ("start_time", incentive.start_time.to_string()),
    ]))
}

/// Cancels the incentive registered for the given contract address. Only the owner of the
/// contract can cancel an incentive.
pub(crate) fn cancel_incentive(
    deps: DepsMut,
    info: MessageInfo,
    contract: String,
) -> Result<Response, ContractError> {
    cw_utils::nonpayable(&info)?;
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;

    // make sure the incentive exists before removing it
    get_incentive_by_contract(deps.storage, &contract)?;
    INCENTIVES.remove(deps.storage, &contract);

    Ok(Response::default().add_attributes(vec![
        ("action", "cancel_incentive".to_string()),
        ("contract", contract),
    ]))
}

/// Ticks every registered incentive when the epoch manager reports a new epoch: the epoch
/// counter is decremented by one and incentives that become inactive are purged.
pub(crate) fn on_epoch_changed(
    deps: DepsMut,
    info: MessageInfo,
    msg: EpochChangedHookMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // only the epoch manager is allowed to trigger the hook
    ensure!(
        info.sender == config.epoch_manager_addr,
        ContractError::Unauthorized
    );

    let incentives: Vec<Incentive> = INCENTIVES
        .range(deps.storage, None, None, Order::Ascending)
        .map(|item| {
            let (_, incentive) = item?;

            Ok(incentive)
        })
        .collect::<StdResult<_>>()?;

    let mut purged = 0usize;
    for mut incentive in incentives {
        incentive.epochs = incentive.epochs.saturating_sub(1u32);

        if incentive.is_active() {
            INCENTIVES.save(deps.storage, &incentive.contract, &incentive)?;
        } else {
            INCENTIVES.remove(deps.storage, &incentive.contract);
            purged += 1;
        }
    }

    Ok(Response::default().add_attributes(vec![
        ("action", "epoch_changed_hook".to_string()),
        ("current_epoch", msg.current_epoch.id.to_string()),
        ("purged_incentives", purged.to_string()),
    ]))
}

/// Updates the contract config. Only the owner can execute this.
pub(crate) fn update_config(
    mut deps: DepsMut,
    info: MessageInfo,
    owner: Option<String>,
    epoch_manager_addr: Option<String>,
    allow_empty_allocations: Option<bool>,
) -> Result<Response, ContractError> {
    cw_utils::nonpayable(&info)?;
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;

    if let Some(owner) = owner.clone() {
        let owner = deps.api.addr_validate(&owner)?;
        ADMIN.set(deps.branch(), Some(owner))?;
    }

    let mut config = CONFIG.load(deps.storage)?;

    if let Some(epoch_manager_addr) = epoch_manager_addr {
        config.epoch_manager_addr = deps.api.addr_validate(&epoch_manager_addr)?;
    }

    if let Some(allow_empty_allocations) = allow_empty_allocations {
        config.allow_empty_allocations = allow_empty_allocations;
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::default().add_attributes(vec![
        ("action", "update_config".to_string()),
        ("owner", owner.unwrap_or_else(|| info.sender.to_string())),
        (
            "epoch_manager_addr",
            config.epoch_manager_addr.to_string(),
        ),
        (
            "allow_empty_allocations",
            config.allow_empty_allocations.to_string(),
        ),
    ]))
}
