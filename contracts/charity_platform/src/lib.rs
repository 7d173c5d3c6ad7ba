#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, token, Address, Env, String, Vec};

mod events;
mod storage;
mod types;

#[cfg(test)]
mod test_admin;

use storage::{
    has_config, has_milestone, load_campaign, load_campaign_nfts, load_config, load_milestone,
    load_nft, next_campaign_id, next_nft_id, nft_owner, push_campaign_nft, save_campaign,
    save_config, save_milestone, save_nft,
};
pub use types::{Campaign, Config, Milestone, Nft};

/// Stable numeric error codes. The discriminants are part of the contract's
/// wire surface and must not be renumbered.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    TokenNotFound = 1,
    AlreadyInitialized = 2,
    NotInitialized = 3,
    NotAuthorized = 100,
    NotTokenOwner = 101,
    ContractPaused = 102,
    InvalidPercentage = 103,
    CampaignNotFound = 104,
    CampaignEnded = 105,
    TokenNotListed = 106,
    MilestoneNotFound = 107,
    MilestoneAlreadyClaimed = 108,
    MilestoneThresholdNotMet = 109,
    MilestoneAlreadyExists = 110,
    InvalidAmount = 111,
}

/// Share of each donation forwarded to the charity address until the admin
/// sets a different percentage.
const DEFAULT_DONATION_PERCENTAGE: u32 = 10;

#[contract]
pub struct CharityPlatform;

#[contractimpl]
impl CharityPlatform {
    /// One-time setup, the deployment step of the platform.
    ///
    /// - `admin` must authorize the call and becomes the sole holder of
    ///   admin privileges (campaign creation, milestones, configuration).
    /// - `donation_token` is the SAC token donations are denominated in.
    /// - `charity` receives the fee share of every donation.
    pub fn initialize(
        env: Env,
        admin: Address,
        donation_token: Address,
        charity: Address,
    ) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        save_config(
            &env,
            &Config {
                admin,
                charity,
                donation_token,
                donation_percentage: DEFAULT_DONATION_PERCENTAGE,
                paused: false,
            },
        );
        Ok(())
    }

    // ─────────────────────────────────────────────────────
    // Token registry
    // ─────────────────────────────────────────────────────

    /// Mint a new NFT owned by `minter`.
    ///
    /// Rejected while the platform is paused. Returns the newly assigned
    /// sequential id (the first mint returns 1).
    pub fn mint(env: Env, minter: Address, uri: String, category: String) -> Result<u64, Error> {
        minter.require_auth();
        let config = load_config(&env)?;
        if config.paused {
            return Err(Error::ContractPaused);
        }

        let id = next_nft_id(&env);
        let nft = Nft {
            id,
            owner: minter.clone(),
            uri: uri.clone(),
            category: category.clone(),
            price: None,
        };
        save_nft(&env, &nft);

        events::emit_nft_minted(&env, id, minter, uri, category);
        Ok(id)
    }

    /// Transfer an NFT to a new owner. Only the current owner may transfer;
    /// any active sale listing is cleared.
    pub fn transfer(env: Env, from: Address, token_id: u64, to: Address) -> Result<(), Error> {
        from.require_auth();

        let mut nft = load_nft(&env, token_id)?;
        if nft.owner != from {
            return Err(Error::NotTokenOwner);
        }

        nft.owner = to.clone();
        nft.price = None;
        save_nft(&env, &nft);

        events::emit_nft_transferred(&env, token_id, from, to);
        Ok(())
    }

    /// Put an NFT up for sale at `price`. Only the current owner may list.
    pub fn list_for_sale(
        env: Env,
        seller: Address,
        token_id: u64,
        price: i128,
    ) -> Result<(), Error> {
        seller.require_auth();

        if price <= 0 {
            return Err(Error::InvalidAmount);
        }

        let mut nft = load_nft(&env, token_id)?;
        if nft.owner != seller {
            return Err(Error::NotTokenOwner);
        }

        nft.price = Some(price);
        save_nft(&env, &nft);

        events::emit_nft_listed(&env, token_id, seller, price);
        Ok(())
    }

    /// Current owner of a token, or `None` if the id was never minted.
    pub fn get_owner(env: Env, token_id: u64) -> Option<Address> {
        nft_owner(&env, token_id)
    }

    /// Retrieve a token record by id.
    pub fn get_token(env: Env, token_id: u64) -> Result<Nft, Error> {
        load_nft(&env, token_id)
    }

    // ─────────────────────────────────────────────────────
    // Campaign registry
    // ─────────────────────────────────────────────────────

    /// Create a fundraising campaign. Admin-only.
    ///
    /// - `goal` is the target amount (must be > 0).
    /// - `duration` is the donation window in ledgers, counted from the
    ///   current ledger sequence.
    ///
    /// Returns the newly assigned sequential campaign id.
    pub fn create_charity_campaign(
        env: Env,
        creator: Address,
        title: String,
        description: String,
        goal: i128,
        duration: u32,
    ) -> Result<u64, Error> {
        Self::require_admin(&env, &creator)?;

        if goal <= 0 {
            return Err(Error::InvalidAmount);
        }

        let id = next_campaign_id(&env);
        let campaign = Campaign {
            id,
            title,
            description,
            goal,
            raised: 0,
            start: env.ledger().sequence(),
            duration,
            ended: false,
        };
        save_campaign(&env, &campaign);

        events::emit_campaign_created(&env, id, goal, duration);
        Ok(id)
    }

    /// Donate tokens to a campaign.
    ///
    /// The configured fee share of `amount` is transferred directly to the
    /// charity payout address; the remainder is held by the contract as
    /// campaign escrow. The campaign's raised total increases by the full
    /// `amount`. Rejected while paused, after the campaign has been ended,
    /// or once its donation window has elapsed.
    pub fn donate_to_campaign(
        env: Env,
        donor: Address,
        campaign_id: u64,
        amount: i128,
    ) -> Result<(), Error> {
        donor.require_auth();

        let config = load_config(&env)?;
        if config.paused {
            return Err(Error::ContractPaused);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let mut campaign = load_campaign(&env, campaign_id)?;
        if !campaign.is_active(env.ledger().sequence()) {
            return Err(Error::CampaignEnded);
        }

        // All checks passed; move the tokens, then record the donation.
        let fee = amount * i128::from(config.donation_percentage) / 100;
        let token_client = token::Client::new(&env, &config.donation_token);
        if fee > 0 {
            token_client.transfer(&donor, &config.charity, &fee);
        }
        if amount - fee > 0 {
            token_client.transfer(&donor, &env.current_contract_address(), &(amount - fee));
        }

        campaign.raised += amount;
        save_campaign(&env, &campaign);

        events::emit_donation_received(&env, campaign_id, donor, amount, fee);
        Ok(())
    }

    /// Donate a listed NFT into a campaign's escrow.
    ///
    /// The donor must own the token and it must have an active sale
    /// listing. Ownership moves to the contract and the listing is
    /// cleared; the token id is recorded against the campaign.
    pub fn donate_nft_to_campaign(
        env: Env,
        donor: Address,
        campaign_id: u64,
        token_id: u64,
    ) -> Result<(), Error> {
        donor.require_auth();

        let config = load_config(&env)?;
        if config.paused {
            return Err(Error::ContractPaused);
        }

        let campaign = load_campaign(&env, campaign_id)?;
        if !campaign.is_active(env.ledger().sequence()) {
            return Err(Error::CampaignEnded);
        }

        let mut nft = load_nft(&env, token_id)?;
        if nft.owner != donor {
            return Err(Error::NotTokenOwner);
        }
        if !nft.is_listed() {
            return Err(Error::TokenNotListed);
        }

        nft.owner = env.current_contract_address();
        nft.price = None;
        save_nft(&env, &nft);
        push_campaign_nft(&env, campaign_id, token_id);

        events::emit_nft_donated(&env, campaign_id, token_id, donor);
        Ok(())
    }

    /// Retrieve a campaign record by id.
    pub fn get_campaign_details(env: Env, campaign_id: u64) -> Result<Campaign, Error> {
        load_campaign(&env, campaign_id)
    }

    /// Ids of NFTs donated into a campaign, in donation order.
    pub fn get_campaign_nfts(env: Env, campaign_id: u64) -> Result<Vec<u64>, Error> {
        load_campaign(&env, campaign_id)?;
        Ok(load_campaign_nfts(&env, campaign_id))
    }

    /// End a campaign. Admin-only; the ended flag is one-way, so ending an
    /// already-ended campaign fails with `CampaignEnded`.
    pub fn end_campaign(env: Env, caller: Address, campaign_id: u64) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;

        let mut campaign = load_campaign(&env, campaign_id)?;
        if campaign.ended {
            return Err(Error::CampaignEnded);
        }

        campaign.ended = true;
        save_campaign(&env, &campaign);

        events::emit_campaign_closed(&env, campaign_id, campaign.raised);
        Ok(())
    }

    // ─────────────────────────────────────────────────────
    // Milestone tracker
    // ─────────────────────────────────────────────────────

    /// Attach a reward milestone to a campaign. Admin-only. The milestone
    /// id is caller-chosen and must be unused for this campaign.
    pub fn add_campaign_milestone(
        env: Env,
        caller: Address,
        campaign_id: u64,
        milestone_id: u64,
        description: String,
        threshold: i128,
        reward_uri: String,
    ) -> Result<(), Error> {
        Self::require_admin(&env, &caller)?;

        if threshold <= 0 {
            return Err(Error::InvalidAmount);
        }

        load_campaign(&env, campaign_id)?;
        if has_milestone(&env, campaign_id, milestone_id) {
            return Err(Error::MilestoneAlreadyExists);
        }

        let milestone = Milestone {
            description,
            threshold,
            reward_uri,
            claimed: false,
        };
        save_milestone(&env, campaign_id, milestone_id, &milestone);

        events::emit_milestone_added(&env, campaign_id, milestone_id, threshold);
        Ok(())
    }

    /// Claim a milestone reward once the campaign's raised total has
    /// reached the milestone threshold.
    ///
    /// Each milestone can be claimed at most once. On success a reward NFT
    /// is minted to the claimer and its new token id returned.
    pub fn check_and_claim_milestone_reward(
        env: Env,
        claimer: Address,
        campaign_id: u64,
        milestone_id: u64,
    ) -> Result<u64, Error> {
        claimer.require_auth();

        let config = load_config(&env)?;
        if config.paused {
            return Err(Error::ContractPaused);
        }

        let campaign = load_campaign(&env, campaign_id)?;
        let mut milestone = load_milestone(&env, campaign_id, milestone_id)?;
        if milestone.claimed {
            return Err(Error::MilestoneAlreadyClaimed);
        }
        if campaign.raised < milestone.threshold {
            return Err(Error::MilestoneThresholdNotMet);
        }

        let reward_id = next_nft_id(&env);
        let reward = Nft {
            id: reward_id,
            owner: claimer.clone(),
            uri: milestone.reward_uri.clone(),
            category: String::from_str(&env, "milestone-reward"),
            price: None,
        };
        save_nft(&env, &reward);

        milestone.claimed = true;
        save_milestone(&env, campaign_id, milestone_id, &milestone);

        events::emit_milestone_claimed(&env, campaign_id, milestone_id, claimer, reward_id);
        Ok(reward_id)
    }

    /// Retrieve a milestone record.
    pub fn get_milestone(env: Env, campaign_id: u64, milestone_id: u64) -> Result<Milestone, Error> {
        load_milestone(&env, campaign_id, milestone_id)
    }

    // ─────────────────────────────────────────────────────
    // Admin controls
    // ─────────────────────────────────────────────────────

    /// Change the charity payout address. Admin-only.
    pub fn set_charity_address(env: Env, caller: Address, charity: Address) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &caller)?;
        config.charity = charity.clone();
        save_config(&env, &config);

        events::emit_charity_updated(&env, charity);
        Ok(())
    }

    /// Change the donation fee percentage (0–100). Admin-only.
    pub fn set_donation_percentage(env: Env, caller: Address, percentage: u32) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &caller)?;
        if percentage > 100 {
            return Err(Error::InvalidPercentage);
        }
        config.donation_percentage = percentage;
        save_config(&env, &config);

        events::emit_percentage_updated(&env, percentage);
        Ok(())
    }

    /// Flip the paused flag. Admin-only. While paused, minting, donating
    /// and milestone claims are rejected.
    pub fn toggle_pause(env: Env, caller: Address) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &caller)?;
        config.paused = !config.paused;
        save_config(&env, &config);

        events::emit_pause_toggled(&env, config.paused);
        Ok(())
    }

    /// Current platform configuration.
    pub fn get_config(env: Env) -> Result<Config, Error> {
        load_config(&env)
    }

    /// Whether the platform is paused. `false` before initialization.
    pub fn is_paused(env: Env) -> bool {
        load_config(&env).map(|c| c.paused).unwrap_or(false)
    }

    /// Authorize `caller` and check it against the stored admin identity.
    fn require_admin(env: &Env, caller: &Address) -> Result<Config, Error> {
        caller.require_auth();
        let config = load_config(env)?;
        if &config.admin != caller {
            return Err(Error::NotAuthorized);
        }
        Ok(config)
    }
}
