// contracts/charity_platform/src/types.rs
//
// On-chain records for the charity platform.
//
// Nft and Campaign live under per-id persistent keys so each record stays a
// fixed size; the list of NFTs donated into a campaign grows over time and
// is stored separately under DataKey::CampaignNfts(campaign_id).

use soroban_sdk::{contracttype, Address, String};

/// A minted NFT.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Nft {
    /// Auto-incremented unique ID, starting at 1.
    pub id: u64,
    /// Current owner. NFTs donated to a campaign are owned by the contract.
    pub owner: Address,
    /// Metadata URI (e.g. an IPFS link).
    pub uri: String,
    /// Free-form category label ("art", "music", ...).
    pub category: String,
    /// Sale listing price. `None` while unlisted; cleared on every
    /// ownership change.
    pub price: Option<i128>,
}

impl Nft {
    /// Whether the token has an active sale listing.
    pub fn is_listed(&self) -> bool {
        self.price.is_some()
    }
}

/// A fundraising campaign stored on-chain.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Auto-incremented unique ID, starting at 1.
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Target amount in the donation token's smallest unit.
    pub goal: i128,
    /// Total donated so far. Only ever increases.
    pub raised: i128,
    /// Ledger sequence at creation.
    pub start: u32,
    /// Donation window in ledgers, counted from `start`.
    pub duration: u32,
    /// One-way flag set by `end_campaign`.
    pub ended: bool,
}

impl Campaign {
    /// A campaign accepts donations until it is explicitly ended or its
    /// donation window has elapsed.
    pub fn is_active(&self, current_sequence: u32) -> bool {
        !self.ended && current_sequence < self.start.saturating_add(self.duration)
    }
}

/// A reward threshold attached to a campaign. Keyed by
/// `(campaign_id, milestone_id)`; the milestone id is chosen by the admin.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Milestone {
    pub description: String,
    /// Raised amount that must be reached before the reward can be claimed.
    pub threshold: i128,
    /// Metadata URI for the reward NFT minted on claim.
    pub reward_uri: String,
    /// One-way flag set by a successful claim.
    pub claimed: bool,
}

/// Platform configuration, written once by `initialize` and mutated only
/// through the admin entry points.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// The deployer-equivalent address; sole holder of admin privileges.
    pub admin: Address,
    /// Charity payout address receiving the fee share of each donation.
    pub charity: Address,
    /// SAC token address donations are denominated in.
    pub donation_token: Address,
    /// Share of each donation (0–100) forwarded to `charity`.
    pub donation_percentage: u32,
    /// While true, minting and donating are rejected.
    pub paused: bool,
}
