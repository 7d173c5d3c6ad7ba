// contracts/charity_platform/src/storage.rs
//
// Storage keys and typed helpers for CharityPlatform.
//
// Layout:
//   instance   DataKey::Config                     → Config
//   persistent DataKey::NftCount                   → u64
//   persistent DataKey::Nft(id)                    → Nft
//   persistent DataKey::CampaignCount              → u64
//   persistent DataKey::Campaign(id)               → Campaign
//   persistent DataKey::CampaignNfts(id)           → Vec<u64>
//   persistent DataKey::Milestone(campaign, id)    → Milestone

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::{
    types::{Campaign, Config, Milestone, Nft},
    Error,
};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Platform configuration (instance storage).
    Config,
    /// Number of NFTs minted so far; the next id is count + 1.
    NftCount,
    /// An NFT record by id.
    Nft(u64),
    /// Number of campaigns created so far.
    CampaignCount,
    /// A campaign record by id.
    Campaign(u64),
    /// Ids of NFTs donated into a campaign.
    CampaignNfts(u64),
    /// A milestone keyed by (campaign id, milestone id).
    Milestone(u64, u64),
}

// ─────────────────────────────────────────────────────────
// Config
// ─────────────────────────────────────────────────────────

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

/// Load the config written by `initialize`. Fails with `NotInitialized`
/// if the contract has never been initialized.
pub fn load_config(env: &Env) -> Result<Config, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

// ─────────────────────────────────────────────────────────
// Id counters
// ─────────────────────────────────────────────────────────

/// Allocate the next NFT id. Ids are sequential and start at 1.
pub fn next_nft_id(env: &Env) -> u64 {
    let count: u64 = env
        .storage()
        .persistent()
        .get(&DataKey::NftCount)
        .unwrap_or(0);
    let id = count + 1;
    env.storage().persistent().set(&DataKey::NftCount, &id);
    id
}

/// Allocate the next campaign id. Ids are sequential and start at 1.
pub fn next_campaign_id(env: &Env) -> u64 {
    let count: u64 = env
        .storage()
        .persistent()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0);
    let id = count + 1;
    env.storage().persistent().set(&DataKey::CampaignCount, &id);
    id
}

// ─────────────────────────────────────────────────────────
// NFT records
// ─────────────────────────────────────────────────────────

/// Persist an NFT. Overwrites any existing record at the same id.
pub fn save_nft(env: &Env, nft: &Nft) {
    env.storage().persistent().set(&DataKey::Nft(nft.id), nft);
}

/// Load an NFT by id. Fails with `TokenNotFound` if missing.
pub fn load_nft(env: &Env, id: u64) -> Result<Nft, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Nft(id))
        .ok_or(Error::TokenNotFound)
}

/// Read an NFT's owner without treating a missing record as an error.
pub fn nft_owner(env: &Env, id: u64) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Nft(id))
        .map(|nft: Nft| nft.owner)
}

// ─────────────────────────────────────────────────────────
// Campaign records
// ─────────────────────────────────────────────────────────

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    env.storage()
        .persistent()
        .set(&DataKey::Campaign(campaign.id), campaign);
}

/// Load a campaign by id. Fails with `CampaignNotFound` if missing.
pub fn load_campaign(env: &Env, id: u64) -> Result<Campaign, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Campaign(id))
        .ok_or(Error::CampaignNotFound)
}

/// Ids of NFTs donated into `campaign_id`. Empty if none yet.
pub fn load_campaign_nfts(env: &Env, campaign_id: u64) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::CampaignNfts(campaign_id))
        .unwrap_or_else(|| Vec::new(env))
}

/// Append a donated NFT id to a campaign's escrow list.
pub fn push_campaign_nft(env: &Env, campaign_id: u64, token_id: u64) {
    let mut ids = load_campaign_nfts(env, campaign_id);
    ids.push_back(token_id);
    env.storage()
        .persistent()
        .set(&DataKey::CampaignNfts(campaign_id), &ids);
}

// ─────────────────────────────────────────────────────────
// Milestones
// ─────────────────────────────────────────────────────────

pub fn has_milestone(env: &Env, campaign_id: u64, milestone_id: u64) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Milestone(campaign_id, milestone_id))
}

pub fn save_milestone(env: &Env, campaign_id: u64, milestone_id: u64, milestone: &Milestone) {
    env.storage()
        .persistent()
        .set(&DataKey::Milestone(campaign_id, milestone_id), milestone);
}

/// Load a milestone. Fails with `MilestoneNotFound` if missing.
pub fn load_milestone(env: &Env, campaign_id: u64, milestone_id: u64) -> Result<Milestone, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Milestone(campaign_id, milestone_id))
        .ok_or(Error::MilestoneNotFound)
}
