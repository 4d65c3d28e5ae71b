#![cfg(test)]

use soroban_sdk::{testutils::Address as _, Address, Env, String};

use donation_tracker::{DonationError, DonationTrackerContract, DonationTrackerContractClient};

fn setup_test_env() -> (
    Env,
    Address, // wallet_1
    Address, // wallet_2
    DonationTrackerContractClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(DonationTrackerContract, ());
    let client = DonationTrackerContractClient::new(&env, &contract_id);

    let wallet_1 = Address::generate(&env);
    let wallet_2 = Address::generate(&env);

    (env, wallet_1, wallet_2, client)
}

fn text(env: &Env, s: &str) -> String {
    String::from_str(env, s)
}

#[test]
fn test_create_project_returns_first_id() {
    let (env, wallet_1, _wallet_2, client) = setup_test_env();

    let id = client.create_project(
        &wallet_1,
        &text(&env, "Education Fund"),
        &text(&env, "Providing education for underprivileged children"),
    );

    assert_eq!(id, 0);
}

#[test]
fn test_retrieve_project_details_after_creation() {
    let (env, wallet_1, _wallet_2, client) = setup_test_env();

    client.create_project(
        &wallet_1,
        &text(&env, "Health Initiative"),
        &text(&env, "Medical aid for rural communities"),
    );

    let project = client.get_project(&0);
    assert_eq!(project.name, text(&env, "Health Initiative"));
    assert_eq!(
        project.description,
        text(&env, "Medical aid for rural communities")
    );
    assert_eq!(project.owner, wallet_1);
    assert_eq!(project.total_donated, 0);
    assert_eq!(project.total_spent, 0);
    assert!(project.is_active);
}

#[test]
fn test_donation_to_active_project() {
    let (env, ngo, donor, client) = setup_test_env();

    client.create_project(
        &ngo,
        &text(&env, "Clean Water"),
        &text(&env, "Providing clean water access"),
    );

    assert_eq!(client.try_donate_to_project(&donor, &0, &1_000_000), Ok(Ok(true)));
    assert_eq!(client.get_project(&0).total_donated, 1_000_000);
}

#[test]
fn test_donation_to_missing_project_is_rejected() {
    let (_env, wallet_1, _wallet_2, client) = setup_test_env();

    let result = client.try_donate_to_project(&wallet_1, &999, &1_000_000);
    assert_eq!(result, Err(Ok(DonationError::ProjectNotFound)));
}

#[test]
fn test_zero_donation_is_rejected() {
    let (env, wallet_1, wallet_2, client) = setup_test_env();

    client.create_project(
        &wallet_1,
        &text(&env, "Zero Test"),
        &text(&env, "Testing zero donations"),
    );

    let result = client.try_donate_to_project(&wallet_2, &0, &0);
    assert_eq!(result, Err(Ok(DonationError::DonationTooLow)));
    assert_eq!(client.get_project(&0).total_donated, 0);
}

#[test]
fn test_retrieve_missing_project_is_rejected() {
    let (_env, _wallet_1, _wallet_2, client) = setup_test_env();

    assert_eq!(
        client.try_get_project(&999),
        Err(Ok(DonationError::ProjectNotFound))
    );
}

#[test]
fn test_full_project_lifecycle() {
    let (env, ngo, donor, client) = setup_test_env();
    let second_donor = Address::generate(&env);

    let id = client.create_project(
        &ngo,
        &text(&env, "Food Bank"),
        &text(&env, "Weekly meals for families"),
    );

    client.donate_to_project(&donor, &id, &3_000);
    client.donate_to_project(&second_donor, &id, &2_000);
    client.spend_from_project(&ngo, &id, &4_500);

    assert_eq!(
        client.try_spend_from_project(&ngo, &id, &501),
        Err(Ok(DonationError::InsufficientFunds))
    );

    client.deactivate_project(&ngo, &id);
    assert_eq!(
        client.try_donate_to_project(&donor, &id, &1),
        Err(Ok(DonationError::ProjectInactive))
    );

    client.spend_from_project(&ngo, &id, &500);

    let project = client.get_project(&id);
    assert_eq!(project.total_donated, 5_000);
    assert_eq!(project.total_spent, 5_000);
    assert!(!project.is_active);
    assert_eq!(
        client.get_donation(&id, &donor) + client.get_donation(&id, &second_donor),
        project.total_donated
    );
}

#[test]
fn test_instances_are_isolated() {
    let (env, wallet_1, _wallet_2, client) = setup_test_env();
    let (_other_env, _, _, other_client) = setup_test_env();

    client.create_project(&wallet_1, &text(&env, "One"), &text(&env, "First registry"));

    assert_eq!(client.get_project_count(), 1);
    assert_eq!(other_client.get_project_count(), 0);
}
