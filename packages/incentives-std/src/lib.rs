pub mod error;
pub mod incentive;
pub mod incentive_registry;
pub mod validators;
