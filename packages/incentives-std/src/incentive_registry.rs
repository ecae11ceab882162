use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Addr, Binary, CosmosMsg, StdResult, Timestamp, WasmMsg};

use crate::incentive::{Allocation, Incentive};

/// The instantiation message
#[cw_serde]
pub struct InstantiateMsg {
    /// The owner of the contract
    pub owner: String,
    /// The epoch manager address, the only account allowed to trigger the epoch changed hook
    pub epoch_manager_addr: String,
    /// Whether incentives may be registered with an empty allocation list
    pub allow_empty_allocations: bool,
}

/// The execution messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Registers an incentive for the given contract address. Rejected if the incentive is
    /// malformed, a record for the contract already exists, or `epochs` is zero.
    RegisterIncentive {
        /// The contract address the rewards are tied to.
        contract: String,
        /// The reward pot per token type for the full incentive period.
        allocations: Vec<Allocation>,
        /// The amount of distribution rounds the incentive lasts for.
        epochs: u32,
    },
    /// Cancels the incentive registered for the given contract address. Owner only.
    CancelIncentive {
        /// The contract address the incentive is registered for.
        contract: String,
    },
    /// Gets triggered by the epoch manager when a new epoch is created
    EpochChangedHook(EpochChangedHookMsg),
    /// Updates the config of the contract
    UpdateConfig {
        /// The new owner of the contract
        owner: Option<String>,
        /// The epoch manager address, the only account allowed to trigger the epoch changed hook
        epoch_manager_addr: Option<String>,
        /// Whether incentives may be registered with an empty allocation list
        allow_empty_allocations: Option<bool>,
    },
}

/// The migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// The query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the configuration of the registry.
    #[returns(ConfigResponse)]
    Config {},

    /// Returns the incentive registered for the given contract address.
    #[returns(IncentiveResponse)]
    Incentive { contract: String },

    /// Returns the registered incentives, paginated by contract address.
    #[returns(IncentivesResponse)]
    Incentives {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

/// Configuration for the contract (registry)
#[cw_serde]
pub struct Config {
    /// The epoch manager address, the only account allowed to trigger the epoch changed hook
    pub epoch_manager_addr: Addr,
    /// Whether incentives may be registered with an empty allocation list
    pub allow_empty_allocations: bool,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub epoch_manager_addr: Addr,
    pub allow_empty_allocations: bool,
}

#[cw_serde]
pub struct IncentiveResponse {
    pub incentive: Incentive,
}

#[cw_serde]
pub struct IncentivesResponse {
    pub incentives: Vec<Incentive>,
}

/// An epoch as reported by the epoch manager.
#[cw_serde]
pub struct Epoch {
    pub id: u64,
    pub start_time: Timestamp,
}

#[cw_serde]
pub struct EpochChangedHookMsg {
    pub current_epoch: Epoch,
}

impl EpochChangedHookMsg {
    /// serializes the message
    pub fn into_json_binary(self) -> StdResult<Binary> {
        let msg = EpochChangedExecuteMsg::EpochChangedHook(self);
        to_json_binary(&msg)
    }

    /// creates a cosmos_msg sending this struct to the named contract
    pub fn into_cosmos_msg<T: Into<String>>(self, contract_addr: T) -> StdResult<CosmosMsg> {
        let msg = self.into_json_binary()?;
        let execute = WasmMsg::Execute {
            contract_addr: contract_addr.into(),
            msg,
            funds: vec![],
        };
        Ok(execute.into())
    }
}

#[cw_serde]
enum EpochChangedExecuteMsg {
    EpochChangedHook(EpochChangedHookMsg),
}
