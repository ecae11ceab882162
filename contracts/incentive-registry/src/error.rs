use cosmwasm_std::StdError;
use cw_controllers::AdminError;
use cw_utils::PaymentError;
use semver::Version;
use thiserror::Error;

use incentives_std::error::IncentiveError;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    AdminError(#[from] AdminError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("{0}")]
    IncentiveError(#[from] IncentiveError),

    #[error("Semver parsing error: {0}")]
    SemVer(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("An incentive is already registered for contract {contract}")]
    IncentiveAlreadyExists { contract: String },

    #[error("No incentive registered for contract {contract}")]
    NonExistentIncentive { contract: String },

    #[error("epochs cannot be set to zero")]
    ZeroEpochs,

    #[error("Attempt to register an incentive without allocations")]
    EmptyAllocations,

    #[error("Duplicate allocation denom {denom}")]
    DuplicateAllocationDenom { denom: String },

    #[error("Attempt to migrate to version {new_version}, but contract is on a higher version {current_version}")]
    MigrateInvalidVersion {
        new_version: Version,
        current_version: Version,
    },

    #[error("Attempt to migrate contract {actual}, the incentive registry expects {expected}")]
    ContractNameMismatch { expected: String, actual: String },
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        Self::SemVer(err.to_string())
    }
}
