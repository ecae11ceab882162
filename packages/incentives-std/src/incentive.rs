use std::fmt;
use std::fmt::Display;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, Timestamp};

use crate::error::IncentiveError;
use crate::validators::{validate_amount, validate_contract_address, validate_denom};

/// A (denom, amount) pair describing the total reward pot for one token type over the full
/// incentive period.
#[cw_serde]
pub struct Allocation {
    pub denom: String,
    pub amount: Decimal,
}

impl Allocation {
    pub fn new<T: Into<String>>(denom: T, amount: Decimal) -> Self {
        Allocation {
            denom: denom.into(),
            amount,
        }
    }
}

impl Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// An epoch-bounded token-allocation program tied to a contract address. The registry
/// decrements `epochs` on every epoch change; the entity itself never mutates it.
#[cw_serde]
pub struct Incentive {
    /// The contract address the rewards are tied to, in canonical textual form.
    pub contract: String,
    /// The reward pot per token type for the full incentive period. Denoms are unique
    /// within the collection, which the registry enforces at registration time.
    pub allocations: Vec<Allocation>,
    /// The amount of distribution rounds left.
    pub epochs: u32,
    /// When the incentive was registered. Bookkeeping only, not validated.
    pub start_time: Timestamp,
}

impl Incentive {
    /// Assembles an incentive without validating it. Call [Incentive::validate] explicitly,
    /// so deserialization paths can choose when to validate.
    pub fn new<T: Into<String>>(contract: T, allocations: Vec<Allocation>, epochs: u32) -> Self {
        Incentive {
            contract: contract.into(),
            allocations,
            epochs,
            start_time: Timestamp::from_nanos(0u64),
        }
    }

    /// Performs a stateless validation of the incentive, returning the first failure
    /// encountered: the contract address first, then denom and amount of every allocation in
    /// order. Note `epochs` is deliberately not checked here, an exhausted incentive is still
    /// a structurally valid record. The registration boundary rejects zero epochs instead.
    pub fn validate(&self) -> Result<(), IncentiveError> {
        validate_contract_address(&self.contract)?;

        for allocation in &self.allocations {
            validate_denom(&allocation.denom)?;
            validate_amount(allocation.amount)?;
        }

        Ok(())
    }

    /// Returns true if the incentive has remaining epochs.
    pub fn is_active(&self) -> bool {
        self.epochs > 0
    }
}
