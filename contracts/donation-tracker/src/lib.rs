//! # Donation Tracker Contract
//!
//! A Soroban smart contract that keeps the books for fundraising projects.
//!
//! ## Features
//!
//! - **Project Registry**: Projects get sequential ids starting at 0 and are never deleted
//! - **Donation Ledger**: Tracks total donated and total spent per project, plus per-donor totals
//! - **Owner Spending**: Only the project owner can record spending, never beyond unspent funds
//! - **Deactivation**: Owners can close a project to further donations
//! - **Stable Error Codes**: Every rejected call maps to one numeric `DonationError` code
//!
//! Donations are pure accounting: no tokens move through this contract.

#![no_std]

mod storage;
mod types;
mod validation;


use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Env, String};

pub use crate::types::{
    DataKey, DonationEvents, Project, MAX_DESCRIPTION_LEN, MAX_NAME_LEN,
};
use crate::validation::{
    require_active, require_owner, validate_description, validate_donation, validate_name,
    validate_spend,
};

/// Error codes for the donation tracker contract.
///
/// Code 101 is reserved and never returned.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DonationError {
    /// No project with the given id
    ProjectNotFound = 100,
    /// Donation amount must be greater than zero
    DonationTooLow = 102,
    /// Project has been deactivated
    ProjectInactive = 103,
    /// Spend exceeds donated minus spent
    InsufficientFunds = 104,
    /// Caller is not the project owner
    Unauthorized = 105,
    /// Spend amount must be greater than zero
    InvalidSpendAmount = 106,
    /// Name is empty, non-ASCII or longer than `MAX_NAME_LEN`
    InvalidName = 107,
    /// Description is empty, non-ASCII or longer than `MAX_DESCRIPTION_LEN`
    InvalidDescription = 108,
    /// Accumulator would overflow
    Overflow = 109,
}

#[contract]
pub struct DonationTrackerContract;

#[contractimpl]
impl DonationTrackerContract {
    /// Creates a new project owned by `owner`.
    ///
    /// # Arguments
    /// * `env` - The contract environment
    /// * `owner` - The address creating the project
    /// * `name` - Project name, ASCII, at most `MAX_NAME_LEN` bytes
    /// * `description` - Project description, ASCII, at most `MAX_DESCRIPTION_LEN` bytes
    ///
    /// # Returns
    /// * `u64` - The id assigned to the project
    ///
    /// # Errors
    /// * `InvalidName` - If the name is empty, non-ASCII or too long
    /// * `InvalidDescription` - If the description is empty, non-ASCII or too long
    pub fn create_project(
        env: Env,
        owner: Address,
        name: String,
        description: String,
    ) -> Result<u64, DonationError> {
        owner.require_auth();

        validate_name(&name)?;
        validate_description(&description)?;

        let project_id = storage::project_count(&env);
        let next_id = project_id.checked_add(1).ok_or(DonationError::Overflow)?;

        let project = Project {
            id: project_id,
            name,
            description,
            owner: owner.clone(),
            total_donated: 0,
            total_spent: 0,
            is_active: true,
        };

        storage::save_project(&env, &project);
        storage::set_project_count(&env, next_id);
        storage::bump_instance(&env);

        log!(&env, "project created", project_id, owner);
        DonationEvents::project_created(&env, project_id, &owner);

        Ok(project_id)
    }

    /// Returns the full record of a project.
    ///
    /// # Errors
    /// * `ProjectNotFound` - If no project has this id
    pub fn get_project(env: Env, project_id: u64) -> Result<Project, DonationError> {
        storage::load_project(&env, project_id).ok_or(DonationError::ProjectNotFound)
    }

    /// Records a donation of `amount` from `donor` to a project.
    ///
    /// Checks run before any write, so a rejected donation leaves the project untouched.
    ///
    /// # Errors
    /// * `ProjectNotFound` - If no project has this id
    /// * `ProjectInactive` - If the project was deactivated
    /// * `DonationTooLow` - If `amount` is zero
    /// * `Overflow` - If a running total would overflow
    pub fn donate_to_project(
        env: Env,
        donor: Address,
        project_id: u64,
        amount: u128,
    ) -> Result<bool, DonationError> {
        donor.require_auth();

        let mut project = Self::get_project(env.clone(), project_id)?;
        validate_donation(&project, amount)?;

        let total_donated = project
            .total_donated
            .checked_add(amount)
            .ok_or(DonationError::Overflow)?;
        let donor_total = storage::donation_of(&env, project_id, &donor)
            .checked_add(amount)
            .ok_or(DonationError::Overflow)?;

        project.total_donated = total_donated;
        storage::save_project(&env, &project);
        storage::set_donation_of(&env, project_id, &donor, donor_total);
        storage::bump_instance(&env);

        log!(&env, "donation recorded", project_id, amount);
        DonationEvents::donation_received(&env, project_id, &donor, amount);

        Ok(true)
    }

    /// Records spending of `amount` from a project's donated funds.
    ///
    /// Only the owner may spend, and never more than has been donated and not yet spent.
    /// Spending stays allowed after deactivation.
    ///
    /// # Errors
    /// * `ProjectNotFound` - If no project has this id
    /// * `Unauthorized` - If `caller` is not the project owner
    /// * `InvalidSpendAmount` - If `amount` is zero
    /// * `InsufficientFunds` - If `amount` exceeds the unspent funds
    /// * `Overflow` - If the spent total would overflow
    pub fn spend_from_project(
        env: Env,
        caller: Address,
        project_id: u64,
        amount: u128,
    ) -> Result<bool, DonationError> {
        caller.require_auth();

        let mut project = Self::get_project(env.clone(), project_id)?;
        validate_spend(&project, &caller, amount)?;

        project.total_spent = project
            .total_spent
            .checked_add(amount)
            .ok_or(DonationError::Overflow)?;
        storage::save_project(&env, &project);
        storage::bump_instance(&env);

        log!(&env, "spending recorded", project_id, amount);
        DonationEvents::funds_spent(&env, project_id, &caller, amount);

        Ok(true)
    }

    /// Deactivates a project so it no longer accepts donations. One-way.
    ///
    /// # Errors
    /// * `ProjectNotFound` - If no project has this id
    /// * `Unauthorized` - If `caller` is not the project owner
    /// * `ProjectInactive` - If the project is already inactive
    pub fn deactivate_project(
        env: Env,
        caller: Address,
        project_id: u64,
    ) -> Result<bool, DonationError> {
        caller.require_auth();

        let mut project = Self::get_project(env.clone(), project_id)?;
        require_owner(&project, &caller)?;
        require_active(&project)?;

        project.is_active = false;
        storage::save_project(&env, &project);
        storage::bump_instance(&env);

        DonationEvents::project_closed(&env, project_id, &caller);

        Ok(true)
    }

    /// Returns the number of projects created so far.
    pub fn get_project_count(env: Env) -> u64 {
        storage::project_count(&env)
    }

    /// Returns how much `donor` has given to a project in total.
    pub fn get_donation(
        env: Env,
        project_id: u64,
        donor: Address,
    ) -> Result<u128, DonationError> {
        Self::get_project(env.clone(), project_id)?;
        Ok(storage::donation_of(&env, project_id, &donor))
    }

    /// Returns the donated funds of a project that have not been spent.
    pub fn get_available_funds(env: Env, project_id: u64) -> Result<u128, DonationError> {
        let project = Self::get_project(env, project_id)?;
        Ok(project.available())
    }
}
