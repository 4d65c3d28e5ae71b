//! Type definitions for the donation tracker contract

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

/// Maximum length of a project name, in bytes.
pub const MAX_NAME_LEN: u32 = 50;

/// Maximum length of a project description, in bytes.
pub const MAX_DESCRIPTION_LEN: u32 = 500;

/// Ledgers below which a persistent entry gets its TTL extended (~30 days).
pub const PROJECT_TTL_THRESHOLD: u32 = 518_400;
/// TTL a persistent entry is extended to (~150 days).
pub const PROJECT_TTL_EXTEND: u32 = 2_592_000;

/// Ledgers below which the instance entry gets its TTL extended (~1 day).
pub const INSTANCE_TTL_THRESHOLD: u32 = 17_280;
/// TTL the instance entry is extended to (~30 days).
pub const INSTANCE_TTL_EXTEND: u32 = 518_400;

/// Storage keys for the contract
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Next project id to allocate, equal to the number of projects created
    ProjectCount,
    /// Project record by id
    Project(u64),
    /// Cumulative amount donated to a project by one donor
    Donation(u64, Address),
}

/// A fundraising project and its accounting state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    /// Sequential id, starting at 0
    pub id: u64,
    pub name: String,
    pub description: String,
    /// Address that created the project; the only one allowed to spend from it
    pub owner: Address,
    pub total_donated: u128,
    pub total_spent: u128,
    pub is_active: bool,
}

impl Project {
    /// Funds donated but not yet spent.
    pub fn available(&self) -> u128 {
        self.total_donated - self.total_spent
    }
}

/// Events emitted by the donation tracker
pub struct DonationEvents;

impl DonationEvents {
    /// Emit event when a project is created
    pub fn project_created(env: &Env, project_id: u64, owner: &Address) {
        let topics = (symbol_short!("project"), symbol_short!("created"), project_id);
        env.events().publish(topics, owner.clone());
    }

    /// Emit event when a donation is recorded
    pub fn donation_received(env: &Env, project_id: u64, donor: &Address, amount: u128) {
        let topics = (symbol_short!("project"), symbol_short!("donated"), project_id);
        env.events().publish(topics, (donor.clone(), amount));
    }

    /// Emit event when the owner records spending
    pub fn funds_spent(env: &Env, project_id: u64, owner: &Address, amount: u128) {
        let topics = (symbol_short!("project"), symbol_short!("spent"), project_id);
        env.events().publish(topics, (owner.clone(), amount));
    }

    /// Emit event when a project is deactivated
    pub fn project_closed(env: &Env, project_id: u64, owner: &Address) {
        let topics = (symbol_short!("project"), symbol_short!("closed"), project_id);
        env.events()
            .publish(topics, (owner.clone(), env.ledger().timestamp()));
    }
}
