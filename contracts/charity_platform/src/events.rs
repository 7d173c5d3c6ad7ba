// contracts/charity_platform/src/events.rs
//
// Contract events. Each state transition publishes a short-symbol topic
// paired with the entity id, and a typed payload struct.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NftMinted {
    pub token_id: u64,
    pub owner: Address,
    pub uri: String,
    pub category: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NftTransferred {
    pub token_id: u64,
    pub from: Address,
    pub to: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NftListed {
    pub token_id: u64,
    pub seller: Address,
    pub price: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: u64,
    pub goal: i128,
    pub duration: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationReceived {
    pub campaign_id: u64,
    pub donor: Address,
    pub amount: i128,
    /// Share forwarded to the charity payout address.
    pub fee: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NftDonated {
    pub campaign_id: u64,
    pub token_id: u64,
    pub donor: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MilestoneAdded {
    pub campaign_id: u64,
    pub milestone_id: u64,
    pub threshold: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MilestoneClaimed {
    pub campaign_id: u64,
    pub milestone_id: u64,
    pub claimer: Address,
    pub reward_token_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignClosed {
    pub campaign_id: u64,
    pub raised: i128,
}

pub fn emit_nft_minted(env: &Env, token_id: u64, owner: Address, uri: String, category: String) {
    let topics = (symbol_short!("minted"), token_id);
    let data = NftMinted {
        token_id,
        owner,
        uri,
        category,
    };
    env.events().publish(topics, data);
}

pub fn emit_nft_transferred(env: &Env, token_id: u64, from: Address, to: Address) {
    let topics = (symbol_short!("xfer"), token_id);
    let data = NftTransferred { token_id, from, to };
    env.events().publish(topics, data);
}

pub fn emit_nft_listed(env: &Env, token_id: u64, seller: Address, price: i128) {
    let topics = (symbol_short!("listed"), token_id);
    let data = NftListed {
        token_id,
        seller,
        price,
    };
    env.events().publish(topics, data);
}

pub fn emit_campaign_created(env: &Env, campaign_id: u64, goal: i128, duration: u32) {
    let topics = (symbol_short!("created"), campaign_id);
    let data = CampaignCreated {
        campaign_id,
        goal,
        duration,
    };
    env.events().publish(topics, data);
}

pub fn emit_donation_received(env: &Env, campaign_id: u64, donor: Address, amount: i128, fee: i128) {
    let topics = (symbol_short!("donation"), campaign_id);
    let data = DonationReceived {
        campaign_id,
        donor,
        amount,
        fee,
    };
    env.events().publish(topics, data);
}

pub fn emit_nft_donated(env: &Env, campaign_id: u64, token_id: u64, donor: Address) {
    let topics = (symbol_short!("nftgiven"), campaign_id);
    let data = NftDonated {
        campaign_id,
        token_id,
        donor,
    };
    env.events().publish(topics, data);
}

pub fn emit_milestone_added(env: &Env, campaign_id: u64, milestone_id: u64, threshold: i128) {
    let topics = (symbol_short!("mstone"), campaign_id);
    let data = MilestoneAdded {
        campaign_id,
        milestone_id,
        threshold,
    };
    env.events().publish(topics, data);
}

pub fn emit_milestone_claimed(
    env: &Env,
    campaign_id: u64,
    milestone_id: u64,
    claimer: Address,
    reward_token_id: u64,
) {
    let topics = (symbol_short!("claimed"), campaign_id);
    let data = MilestoneClaimed {
        campaign_id,
        milestone_id,
        claimer,
        reward_token_id,
    };
    env.events().publish(topics, data);
}

pub fn emit_campaign_closed(env: &Env, campaign_id: u64, raised: i128) {
    let topics = (symbol_short!("ended"), campaign_id);
    let data = CampaignClosed { campaign_id, raised };
    env.events().publish(topics, data);
}

pub fn emit_charity_updated(env: &Env, charity: Address) {
    env.events()
        .publish((symbol_short!("charity"),), charity);
}

pub fn emit_percentage_updated(env: &Env, percentage: u32) {
    env.events()
        .publish((symbol_short!("fee_pct"),), percentage);
}

pub fn emit_pause_toggled(env: &Env, paused: bool) {
    env.events().publish((symbol_short!("paused"),), paused);
}
