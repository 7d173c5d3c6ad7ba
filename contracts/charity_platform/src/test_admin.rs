// Admin-surface tests: one-time initialization, the deployer-only gates on
// configuration and campaign lifecycle, and the paused-state behavior.

extern crate std;

use soroban_sdk::{testutils::Address as _, token, Address, Env, String};

use crate::{CharityPlatform, CharityPlatformClient, Error};

// ─── Helpers ─────────────────────────────────────────────

fn setup() -> (Env, CharityPlatformClient<'static>, Address, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(CharityPlatform, ());
    let client = CharityPlatformClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let charity = Address::generate(&env);
    let token_address = env
        .register_stellar_asset_contract_v2(admin.clone())
        .address();

    client.initialize(&admin, &token_address, &charity);

    (env, client, admin, charity, token_address)
}

fn create_campaign(env: &Env, client: &CharityPlatformClient, admin: &Address) -> u64 {
    client.create_charity_campaign(
        admin,
        &String::from_str(env, "Test Campaign"),
        &String::from_str(env, "Description"),
        &10_000i128,
        &100u32,
    )
}

// ─── Initialization ──────────────────────────────────────

#[test]
fn test_initialize_seeds_config() {
    let (_env, client, admin, charity, token_address) = setup();

    let config = client.get_config();
    assert_eq!(config.admin, admin);
    assert_eq!(config.charity, charity);
    assert_eq!(config.donation_token, token_address);
    assert_eq!(config.donation_percentage, 10);
    assert!(!config.paused);
}

#[test]
fn test_initialize_twice_fails() {
    let (_env, client, admin, charity, token_address) = setup();

    let result = client.try_initialize(&admin, &token_address, &charity);
    assert_eq!(result, Err(Ok(Error::AlreadyInitialized)));
}

#[test]
fn test_mint_before_initialize_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(CharityPlatform, ());
    let client = CharityPlatformClient::new(&env, &contract_id);
    let wallet1 = Address::generate(&env);

    let result = client.try_mint(
        &wallet1,
        &String::from_str(&env, "ipfs://test-uri"),
        &String::from_str(&env, "art"),
    );
    assert_eq!(result, Err(Ok(Error::NotInitialized)));
}

// ─── Charity address ─────────────────────────────────────

#[test]
fn test_set_charity_address() {
    let (env, client, admin, _, _) = setup();
    let new_charity = Address::generate(&env);

    client.set_charity_address(&admin, &new_charity);
    assert_eq!(client.get_config().charity, new_charity);
}

#[test]
fn test_set_charity_address_non_admin_fails() {
    let (env, client, _, charity, _) = setup();
    let wallet1 = Address::generate(&env);

    let result = client.try_set_charity_address(&wallet1, &wallet1);
    assert_eq!(result, Err(Ok(Error::NotAuthorized)));
    assert_eq!(client.get_config().charity, charity);
}

#[test]
fn test_new_charity_receives_fee_share() {
    let (env, client, admin, _, token_address) = setup();
    let new_charity = Address::generate(&env);
    let wallet1 = Address::generate(&env);

    create_campaign(&env, &client, &admin);
    client.set_charity_address(&admin, &new_charity);
    client.set_donation_percentage(&admin, &30u32);

    token::StellarAssetClient::new(&env, &token_address).mint(&wallet1, &1_000);
    client.donate_to_campaign(&wallet1, &1, &1_000i128);

    assert_eq!(token::Client::new(&env, &token_address).balance(&new_charity), 300);
}

// ─── Donation percentage ─────────────────────────────────

#[test]
fn test_set_donation_percentage() {
    let (_env, client, admin, _, _) = setup();

    client.set_donation_percentage(&admin, &30u32);
    assert_eq!(client.get_config().donation_percentage, 30);
}

#[test]
fn test_set_donation_percentage_bounds() {
    let (_env, client, admin, _, _) = setup();

    // 0 and 100 are both valid.
    client.set_donation_percentage(&admin, &0u32);
    client.set_donation_percentage(&admin, &100u32);

    let result = client.try_set_donation_percentage(&admin, &101u32);
    assert_eq!(result, Err(Ok(Error::InvalidPercentage)));
    assert_eq!(client.get_config().donation_percentage, 100);
}

#[test]
fn test_set_donation_percentage_non_admin_fails() {
    let (env, client, _, _, _) = setup();
    let wallet1 = Address::generate(&env);

    let result = client.try_set_donation_percentage(&wallet1, &30u32);
    assert_eq!(result, Err(Ok(Error::NotAuthorized)));
}

#[test]
fn test_zero_percentage_sends_everything_to_escrow() {
    let (env, client, admin, charity, token_address) = setup();
    let wallet1 = Address::generate(&env);

    create_campaign(&env, &client, &admin);
    client.set_donation_percentage(&admin, &0u32);

    token::StellarAssetClient::new(&env, &token_address).mint(&wallet1, &1_000);
    client.donate_to_campaign(&wallet1, &1, &1_000i128);

    let token_client = token::Client::new(&env, &token_address);
    assert_eq!(token_client.balance(&charity), 0);
    assert_eq!(token_client.balance(&client.address), 1_000);
}

// ─── Pause ───────────────────────────────────────────────

#[test]
fn test_toggle_pause_flips_flag() {
    let (_env, client, admin, _, _) = setup();

    assert!(!client.is_paused());
    client.toggle_pause(&admin);
    assert!(client.is_paused());
    client.toggle_pause(&admin);
    assert!(!client.is_paused());
}

#[test]
fn test_toggle_pause_non_admin_fails() {
    let (env, client, _, _, _) = setup();
    let wallet1 = Address::generate(&env);

    let result = client.try_toggle_pause(&wallet1);
    assert_eq!(result, Err(Ok(Error::NotAuthorized)));
    assert!(!client.is_paused());
}

#[test]
fn test_pause_blocks_mint_and_donations() {
    let (env, client, admin, _, token_address) = setup();
    let wallet1 = Address::generate(&env);

    create_campaign(&env, &client, &admin);
    client.mint(&wallet1, &String::from_str(&env, "ipfs://test-uri"), &String::from_str(&env, "art"));
    client.list_for_sale(&wallet1, &1, &1_000i128);
    token::StellarAssetClient::new(&env, &token_address).mint(&wallet1, &1_000);

    client.toggle_pause(&admin);

    let result = client.try_mint(
        &wallet1,
        &String::from_str(&env, "ipfs://test-uri"),
        &String::from_str(&env, "art"),
    );
    assert_eq!(result, Err(Ok(Error::ContractPaused)));

    let result = client.try_donate_to_campaign(&wallet1, &1, &1_000i128);
    assert_eq!(result, Err(Ok(Error::ContractPaused)));

    let result = client.try_donate_nft_to_campaign(&wallet1, &1, &1);
    assert_eq!(result, Err(Ok(Error::ContractPaused)));
}

#[test]
fn test_unpause_restores_minting() {
    let (env, client, admin, _, _) = setup();
    let wallet1 = Address::generate(&env);

    client.toggle_pause(&admin);
    client.toggle_pause(&admin);

    let id = client.mint(
        &wallet1,
        &String::from_str(&env, "ipfs://test-uri"),
        &String::from_str(&env, "art"),
    );
    assert_eq!(id, 1);
}

// ─── Campaign lifecycle ──────────────────────────────────

#[test]
fn test_end_campaign() {
    let (env, client, admin, _, _) = setup();

    create_campaign(&env, &client, &admin);
    client.end_campaign(&admin, &1);

    assert!(client.get_campaign_details(&1).ended);
}

#[test]
fn test_end_campaign_non_admin_fails() {
    let (env, client, admin, _, _) = setup();
    let wallet1 = Address::generate(&env);

    create_campaign(&env, &client, &admin);

    let result = client.try_end_campaign(&wallet1, &1);
    assert_eq!(result, Err(Ok(Error::NotAuthorized)));
    assert!(!client.get_campaign_details(&1).ended);
}

#[test]
fn test_end_campaign_twice_fails() {
    let (env, client, admin, _, _) = setup();

    create_campaign(&env, &client, &admin);
    client.end_campaign(&admin, &1);

    // The ended flag is one-way; a second end is rejected rather than
    // silently succeeding.
    let result = client.try_end_campaign(&admin, &1);
    assert_eq!(result, Err(Ok(Error::CampaignEnded)));
}

#[test]
fn test_donate_to_ended_campaign_fails() {
    let (env, client, admin, _, token_address) = setup();
    let wallet1 = Address::generate(&env);

    create_campaign(&env, &client, &admin);
    client.end_campaign(&admin, &1);

    token::StellarAssetClient::new(&env, &token_address).mint(&wallet1, &1_000);
    let result = client.try_donate_to_campaign(&wallet1, &1, &1_000i128);
    assert_eq!(result, Err(Ok(Error::CampaignEnded)));
}

#[test]
fn test_end_unknown_campaign_fails() {
    let (_env, client, admin, _, _) = setup();

    let result = client.try_end_campaign(&admin, &999);
    assert_eq!(result, Err(Ok(Error::CampaignNotFound)));
}
