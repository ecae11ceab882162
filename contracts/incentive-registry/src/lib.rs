pub use crate::error::ContractError;

pub mod commands;
pub mod contract;
mod error;
pub mod queries;
pub mod state;
