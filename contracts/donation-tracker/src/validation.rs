//! Validation utilities for the donation tracker

use soroban_sdk::{Address, String};

use crate::types::{Project, MAX_DESCRIPTION_LEN, MAX_NAME_LEN};
use crate::DonationError;

/// Checks that `text` is non-empty, ASCII, and at most `max_len` bytes.
fn is_bounded_ascii(text: &String, max_len: u32) -> bool {
    let len = text.len();
    if len == 0 || len > max_len {
        return false;
    }

    let mut buf = [0u8; MAX_DESCRIPTION_LEN as usize];
    let bytes = &mut buf[..len as usize];
    text.copy_into_slice(bytes);
    bytes.is_ascii()
}

/// Validates a project name
pub fn validate_name(name: &String) -> Result<(), DonationError> {
    if !is_bounded_ascii(name, MAX_NAME_LEN) {
        return Err(DonationError::InvalidName);
    }
    Ok(())
}

/// Validates a project description
pub fn validate_description(description: &String) -> Result<(), DonationError> {
    if !is_bounded_ascii(description, MAX_DESCRIPTION_LEN) {
        return Err(DonationError::InvalidDescription);
    }
    Ok(())
}

pub fn require_active(project: &Project) -> Result<(), DonationError> {
    if !project.is_active {
        return Err(DonationError::ProjectInactive);
    }
    Ok(())
}

pub fn require_owner(project: &Project, caller: &Address) -> Result<(), DonationError> {
    if project.owner != *caller {
        return Err(DonationError::Unauthorized);
    }
    Ok(())
}

/// Validates a donation against the target project.
///
/// The project must be active and the amount strictly positive.
pub fn validate_donation(project: &Project, amount: u128) -> Result<(), DonationError> {
    require_active(project)?;
    if amount == 0 {
        return Err(DonationError::DonationTooLow);
    }
    Ok(())
}

/// Validates a spend by `caller` against the project's unspent funds.
pub fn validate_spend(
    project: &Project,
    caller: &Address,
    amount: u128,
) -> Result<(), DonationError> {
    require_owner(project, caller)?;
    if amount == 0 {
        return Err(DonationError::InvalidSpendAmount);
    }
    if amount > project.available() {
        return Err(DonationError::InsufficientFunds);
    }
    Ok(())
}
