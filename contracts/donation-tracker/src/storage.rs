//! Storage accessors for the donation tracker contract.

use soroban_sdk::{Address, Env};

use crate::types::{
    DataKey, Project, INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD, PROJECT_TTL_EXTEND,
    PROJECT_TTL_THRESHOLD,
};

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Returns the next id to allocate.
pub fn project_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProjectCount)
        .unwrap_or(0)
}

pub fn set_project_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::ProjectCount, &count);
}

pub fn load_project(env: &Env, project_id: u64) -> Option<Project> {
    env.storage()
        .persistent()
        .get(&DataKey::Project(project_id))
}

/// Writes a project record and refreshes its TTL.
pub fn save_project(env: &Env, project: &Project) {
    let key = DataKey::Project(project.id);
    env.storage().persistent().set(&key, project);
    env.storage()
        .persistent()
        .extend_ttl(&key, PROJECT_TTL_THRESHOLD, PROJECT_TTL_EXTEND);
}

pub fn donation_of(env: &Env, project_id: u64, donor: &Address) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::Donation(project_id, donor.clone()))
        .unwrap_or(0)
}

pub fn set_donation_of(env: &Env, project_id: u64, donor: &Address, amount: u128) {
    let key = DataKey::Donation(project_id, donor.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, PROJECT_TTL_THRESHOLD, PROJECT_TTL_EXTEND);
}
