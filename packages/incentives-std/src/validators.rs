use cosmwasm_std::Decimal;

use crate::error::IncentiveError;

const CONTRACT_ADDR_PREFIX: &str = "0x";
/// Length of the hex payload of a contract address, without the `0x` prefix.
const CONTRACT_ADDR_HEX_SIZE: usize = 40usize;

const MIN_DENOM_SIZE: usize = 3usize;
const MAX_DENOM_SIZE: usize = 128usize;

/// Verifies the given contract address is well-formed, i.e. `0x` followed by 40 hex digits.
/// It does not check that the contract actually exists on chain.
pub fn validate_contract_address(address: &str) -> Result<(), IncentiveError> {
    let hex_payload = address.strip_prefix(CONTRACT_ADDR_PREFIX).ok_or_else(|| {
        IncentiveError::InvalidContractAddress {
            address: address.to_string(),
            reason: format!("missing {CONTRACT_ADDR_PREFIX} prefix"),
        }
    })?;

    if hex_payload.len() != CONTRACT_ADDR_HEX_SIZE {
        return Err(IncentiveError::InvalidContractAddress {
            address: address.to_string(),
            reason: format!(
                "expected {} hex digits, got {}",
                CONTRACT_ADDR_HEX_SIZE,
                hex_payload.len()
            ),
        });
    }

    if !hex_payload.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(IncentiveError::InvalidContractAddress {
            address: address.to_string(),
            reason: "non-hex character in address".to_string(),
        });
    }

    Ok(())
}

/// Verifies the given denom conforms to the chain's naming grammar: between 3 and 128
/// characters, starting with a letter, the rest alphanumeric or one of `/`, `:`, `.`, `_`, `-`.
pub fn validate_denom(denom: &str) -> Result<(), IncentiveError> {
    let invalid = || IncentiveError::InvalidDenom {
        denom: denom.to_string(),
    };

    if denom.len() < MIN_DENOM_SIZE || denom.len() > MAX_DENOM_SIZE {
        return Err(invalid());
    }

    let mut chars = denom.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err(invalid());
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-')) {
        return Err(invalid());
    }

    Ok(())
}

/// Verifies the given allocation amount is strictly positive. Canonical decimal form is
/// guaranteed by [Decimal] itself, which only parses unsigned, noise-free decimal strings.
pub fn validate_amount(amount: Decimal) -> Result<(), IncentiveError> {
    if amount.is_zero() {
        return Err(IncentiveError::InvalidAmount { amount });
    }

    Ok(())
}
