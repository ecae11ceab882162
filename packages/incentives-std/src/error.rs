use cosmwasm_std::Decimal;
use thiserror::Error;

/// Validation failures for an [crate::incentive::Incentive]. Each variant maps 1:1 to one of
/// the validators in [crate::validators]; `Incentive::validate` returns the first failure it
/// encounters and does not accumulate.
#[derive(Error, Debug, PartialEq)]
pub enum IncentiveError {
    #[error("Invalid contract address {address}: {reason}")]
    InvalidContractAddress { address: String, reason: String },

    #[error("Invalid allocation denom {denom}")]
    InvalidDenom { denom: String },

    #[error("Invalid allocation amount {amount}, must be greater than zero")]
    InvalidAmount { amount: Decimal },
}
