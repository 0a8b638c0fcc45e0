mod common;

use soroban_sdk::Env;

#[test]
fn test_empty_registry_lookup() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_factory(&env);
    let token_a = common::create_token(&env);
    let token_b = common::create_token(&env);

    assert_eq!(client.get_pair(&token_a, &token_b), None);
    assert_eq!(client.get_pair(&token_b, &token_a), None);
}

#[test]
fn test_lookup_is_order_independent() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_factory(&env);
    let token_a = common::create_token(&env);
    let token_b = common::create_token(&env);

    assert_eq!(
        client.get_pair(&token_a, &token_b),
        client.get_pair(&token_b, &token_a)
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #10)")] // IdenticalAssets
fn test_create_pair_identical_assets() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_factory(&env);
    let token = common::create_token(&env);

    client.create_pair(&token, &token);
}
