//! Marketplace collection registry and fabricated listing data.
//!
//! The two flagship HyperEVM collections are described statically; all
//! per-token figures are derived from the token id, so a token always
//! renders with the same price, traits and rank no matter how often it
//! is requested.

use crate::types::{round2, Address, Hype, TxHash};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;
use sha3::{Digest, Keccak256};

#[derive(Debug, Clone, Copy)]
pub struct Collection {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub contract: &'static str,
    pub total_supply: u32,
    pub floor_price: f64,
    pub volume_24h: f64,
    pub volume_total: f64,
    pub volume_change: f64,
    pub owners: u32,
    pub items_listed: u32,
    pub creator: &'static str,
    pub created_date: &'static str,
    pub featured_token_ids: &'static [u32],
    pub palette: &'static [&'static str],
    pub trait_backgrounds: &'static [&'static str],
    pub trait_bodies: &'static [&'static str],
    pub trait_eyes: &'static [&'static str],
}

pub const HYPIO: Collection = Collection {
    id: "hypio-babies",
    name: "Wealthy Hypio Babies",
    description: "The most exclusive NFT collection on HyperEVM blockchain",
    contract: "0x63eb9d77D083cA10C304E28d5191321977fd0Bfb",
    total_supply: 5555,
    floor_price: 60.0,
    volume_24h: 2847.5,
    volume_total: 543_514.2,
    volume_change: 15.3,
    owners: 2770,
    items_listed: 1667,
    creator: "0x742d35Cc6644C4532B1d8d40Cfc6aA907e8d9c1",
    created_date: "2024-03-15T10:00:00Z",
    featured_token_ids: &[1, 42, 123, 456, 789, 1234, 2888, 4321],
    palette: &["2dd4bf", "06b6d4", "3b82f6", "8b5cf6", "ec4899"],
    trait_backgrounds: &["Ocean", "Forest", "Galaxy", "Desert", "City", "Mountain", "Sunset"],
    trait_bodies: &["Gold", "Silver", "Bronze", "Diamond", "Platinum", "Ruby", "Emerald"],
    trait_eyes: &["Blue", "Green", "Red", "Purple", "Yellow", "Orange", "Pink"],
};

pub const PIPF: Collection = Collection {
    id: "pip-friends",
    name: "PiP & Friends",
    description: "PiP & Friends NFT collection on HyperEVM with 7,777 unique items",
    contract: "0xbc4a26ba78ce05E8bCbF069Bbb87FB3E1dAC8DF8",
    total_supply: 7777,
    floor_price: 25.0,
    volume_24h: 1247.8,
    volume_total: 89_234.5,
    volume_change: 8.7,
    owners: 1607,
    items_listed: 945,
    creator: "0x8fa3b4c27e65f123a9f4d5c6b1e8a3f2d7c9e4b",
    created_date: "2024-05-20T15:30:00Z",
    featured_token_ids: &[7777, 7776, 7775, 7774, 7773, 7772, 7771, 7770],
    palette: &["f59e0b", "10b981", "f97316", "ef4444", "a855f7"],
    trait_backgrounds: &["Neon", "Cyber", "Space", "Urban", "Nature", "Abstract", "Digital"],
    trait_bodies: &["Robot", "Alien", "Human", "Cyborg", "Spirit", "Energy", "Plasma"],
    trait_eyes: &["Laser", "Glowing", "Digital", "Crystal", "Fire", "Ice", "Electric"],
};

pub const COLLECTIONS: &[Collection] = &[HYPIO, PIPF];

/// Browse responses cap out here for snappy pages.
pub const MAX_PAGE: usize = 50;

pub fn by_id(id: &str) -> Option<&'static Collection> {
    COLLECTIONS.iter().find(|collection| collection.id == id)
}

/// Stable color pick for a token's placeholder artwork.
pub fn color_for(collection: &Collection, token_id: u32) -> &'static str {
    let mut hasher = Keccak256::new();
    hasher.update(collection.id.as_bytes());
    hasher.update(b"_");
    hasher.update(token_id.to_be_bytes());
    let digest = hasher.finalize();
    let seed = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    collection.palette[seed as usize % collection.palette.len()]
}

#[derive(Debug, Clone, Serialize)]
pub struct TraitValue {
    pub trait_type: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NftListing {
    pub id: String,
    pub token_id: u32,
    pub name: String,
    pub image: String,
    pub price: Hype,
    pub last_sale: Hype,
    pub listed: bool,
    pub rarity_rank: u32,
    pub traits: Vec<TraitValue>,
    pub contract_address: String,
    pub blockchain: String,
    pub chain_id: u64,
    pub marketplace_url: String,
    pub explorer_url: String,
}

/// Deterministic listing data for one token.
pub fn listing(collection: &Collection, token_id: u32) -> NftListing {
    let color = color_for(collection, token_id);
    let short = &collection.name[..collection.name.len().min(4)];
    NftListing {
        id: token_id.to_string(),
        token_id,
        name: format!("{} #{}", collection.name, token_id),
        image: format!(
            "https://via.placeholder.com/400x400/{}/ffffff?text={}+{}",
            color, short, token_id
        ),
        price: Hype(collection.floor_price + (token_id % 100) as f64 * 0.5),
        last_sale: Hype((collection.floor_price - 2.0) + (token_id % 80) as f64 * 0.3),
        listed: token_id % 3 == 0,
        rarity_rank: token_id,
        traits: vec![
            TraitValue {
                trait_type: "Background".to_string(),
                value: collection.trait_backgrounds
                    [token_id as usize % collection.trait_backgrounds.len()]
                .to_string(),
            },
            TraitValue {
                trait_type: "Body".to_string(),
                value: collection.trait_bodies[token_id as usize % collection.trait_bodies.len()]
                    .to_string(),
            },
            TraitValue {
                trait_type: "Eyes".to_string(),
                value: collection.trait_eyes[token_id as usize % collection.trait_eyes.len()]
                    .to_string(),
            },
        ],
        contract_address: collection.contract.to_string(),
        blockchain: "HyperEVM".to_string(),
        chain_id: crate::config::CHAIN_ID,
        marketplace_url: format!("https://drip.trade/collections/{}/{}", collection.id, token_id),
        explorer_url: format!(
            "https://hyperliquid.cloud.blockscout.com/token/{}/instance/{}",
            collection.contract, token_id
        ),
    }
}

/// A window of listings starting at a random token id, wrapping at the
/// supply boundary. `count` is clamped to [`MAX_PAGE`].
pub fn browse(collection: &Collection, count: usize, rng: &mut impl Rng) -> Vec<NftListing> {
    let fetch = count.clamp(1, MAX_PAGE) as u32;
    let upper = collection.total_supply.saturating_sub(fetch).max(1);
    let start = rng.gen_range(1..=upper);
    (0..fetch)
        .map(|offset| {
            let mut token_id = start + offset;
            if token_id > collection.total_supply {
                token_id = (token_id % collection.total_supply) + 1;
            }
            listing(collection, token_id)
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewNft {
    pub token_id: u32,
    pub image: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub floor_price: Hype,
    pub volume_24h: Hype,
    pub volume_total: Hype,
    pub volume_change: f64,
    pub total_supply: u32,
    pub owners: u32,
    pub items_listed: u32,
    pub creator: String,
    pub preview_nfts: Vec<PreviewNft>,
    pub banner_image: String,
    pub featured_image: String,
    pub verified: bool,
    pub chain: String,
    pub contract_address: String,
    pub created_date: String,
    pub marketplace_links: MarketplaceLinks,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketplaceLinks {
    pub drip_trade: String,
    pub hyperliquid_explorer: String,
}

pub fn summary(collection: &Collection) -> CollectionSummary {
    let preview_nfts = collection
        .featured_token_ids
        .iter()
        .map(|&token_id| {
            let color = color_for(collection, token_id);
            let short = &collection.name[..collection.name.len().min(4)];
            PreviewNft {
                token_id,
                image: format!(
                    "https://via.placeholder.com/200x200/{}/ffffff?text={}+{}",
                    color, short, token_id
                ),
                name: format!("{} #{}", collection.name, token_id),
            }
        })
        .collect();

    CollectionSummary {
        id: collection.id.to_string(),
        name: collection.name.to_string(),
        description: collection.description.to_string(),
        floor_price: Hype(collection.floor_price),
        volume_24h: Hype(collection.volume_24h),
        volume_total: Hype(collection.volume_total),
        volume_change: collection.volume_change,
        total_supply: collection.total_supply,
        owners: collection.owners,
        items_listed: collection.items_listed,
        creator: collection.creator.to_string(),
        preview_nfts,
        banner_image: format!(
            "https://via.placeholder.com/1200x400/2dd4bf/ffffff?text={}+Collection",
            collection.name.replace(' ', "+")
        ),
        featured_image: format!(
            "https://via.placeholder.com/400x400/2dd4bf/ffffff?text={}+NFT",
            &collection.name[..collection.name.len().min(4)]
        ),
        verified: true,
        chain: "HyperEVM".to_string(),
        contract_address: collection.contract.to_string(),
        created_date: collection.created_date.to_string(),
        marketplace_links: MarketplaceLinks {
            drip_trade: format!("https://drip.trade/collections/{}", collection.id),
            hyperliquid_explorer: format!(
                "https://hyperliquid.cloud.blockscout.com/token/{}",
                collection.contract
            ),
        },
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityNft {
    pub name: String,
    pub image: String,
    pub collection: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub nft: ActivityNft,
    pub price: Hype,
    pub from_address: String,
    pub to_address: String,
    pub timestamp: String,
    pub tx_hash: String,
}

const ACTIVITY_KINDS: &[&str] = &["Sale", "Listing", "Transfer", "Mint", "Offer"];

/// Fabricate a feed of recent marketplace events across the flagship
/// collection.
pub fn activities(now: DateTime<Utc>, rng: &mut impl Rng) -> Vec<Activity> {
    (0..50)
        .map(|index| {
            let token_id = rng.gen_range(1..=HYPIO.total_supply);
            let color = color_for(&HYPIO, token_id);
            Activity {
                id: format!("activity_{index}"),
                kind: ACTIVITY_KINDS[rng.gen_range(0..ACTIVITY_KINDS.len())].to_string(),
                nft: ActivityNft {
                    name: format!("{} #{}", HYPIO.name, token_id),
                    image: format!(
                        "https://via.placeholder.com/100x100/{}/ffffff?text={}",
                        color, token_id
                    ),
                    collection: HYPIO.name.to_string(),
                },
                price: Hype(round2(rng.gen_range(45.0..150.0))),
                from_address: Address::random(rng).to_string(),
                to_address: Address::random(rng).to_string(),
                timestamp: (now - Duration::minutes(rng.gen_range(1..=1440))).to_rfc3339(),
                tx_hash: TxHash::random(rng).to_string(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct LaunchpadProject {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub mint_price: Hype,
    pub total_supply: u32,
    pub minted: u32,
    pub launch_date: String,
    pub status: String,
    pub creator: String,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whitelist_spots: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whitelist_filled: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_price: Option<Hype>,
}

/// The launchpad carousel: one upcoming, one live, one sold out.
pub fn launchpad_projects(now: DateTime<Utc>) -> Vec<LaunchpadProject> {
    vec![
        LaunchpadProject {
            id: "quantum-beings".to_string(),
            name: "Quantum Beings".to_string(),
            description: "AI-generated quantum entities living on HyperEVM".to_string(),
            image: "https://gateway.pinata.cloud/ipfs/QmDEF789/quantum1.png".to_string(),
            mint_price: Hype(0.5),
            total_supply: 8888,
            minted: 3247,
            launch_date: (now + Duration::days(2)).to_rfc3339(),
            status: "upcoming".to_string(),
            creator: "0x742d35Cc6644C4532B1d8d40Cfc6aA907e8d9c1".to_string(),
            verified: true,
            whitelist_spots: Some(2000),
            whitelist_filled: Some(1567),
            floor_price: None,
        },
        LaunchpadProject {
            id: "hyperliquid-spirits".to_string(),
            name: "HyperLiquid Spirits".to_string(),
            description: "Mystical spirits of the HyperLiquid protocol".to_string(),
            image: "https://gateway.pinata.cloud/ipfs/QmJKL345/spirit1.png".to_string(),
            mint_price: Hype(0.8),
            total_supply: 3333,
            minted: 1892,
            launch_date: now.to_rfc3339(),
            status: "live".to_string(),
            creator: "0x1a2b3c4d5e6f7890abcdef1234567890abcdef12".to_string(),
            verified: true,
            whitelist_spots: Some(1000),
            whitelist_filled: Some(743),
            floor_price: None,
        },
        LaunchpadProject {
            id: "defi-warriors".to_string(),
            name: "DeFi Warriors".to_string(),
            description: "Elite warriors protecting the DeFi ecosystem".to_string(),
            image: "https://gateway.pinata.cloud/ipfs/QmGHI012/warrior1.png".to_string(),
            mint_price: Hype(0.25),
            total_supply: 5000,
            minted: 5000,
            launch_date: (now - Duration::days(7)).to_rfc3339(),
            status: "sold_out".to_string(),
            creator: "0x8fa3b4c27e65f123a9f4d5c6b1e8a3f2d7c9e4b".to_string(),
            verified: true,
            whitelist_spots: None,
            whitelist_filled: None,
            floor_price: Some(Hype(2.1)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn registry_has_both_collections() {
        assert_eq!(COLLECTIONS.len(), 2);
        assert!(by_id("hypio-babies").is_some());
        assert!(by_id("pip-friends").is_some());
        assert!(by_id("nope").is_none());
    }

    #[test]
    fn listing_is_deterministic() {
        let first = listing(&HYPIO, 42);
        let second = listing(&HYPIO, 42);
        assert_eq!(first.image, second.image);
        assert_eq!(first.price.0, second.price.0);
        assert_eq!(first.traits[0].value, second.traits[0].value);
    }

    #[test]
    fn listing_prices_derive_from_token_id() {
        let item = listing(&HYPIO, 42);
        assert_eq!(item.price.0, 60.0 + 42.0 * 0.5);
        assert_eq!(item.last_sale.0, 58.0 + 42.0 * 0.3);
        assert!(item.listed); // 42 % 3 == 0
        let odd = listing(&HYPIO, 43);
        assert!(!odd.listed);
    }

    #[test]
    fn browse_clamps_count_and_wraps_ids() {
        let mut rng = rng();
        let page = browse(&PIPF, 500, &mut rng);
        assert_eq!(page.len(), MAX_PAGE);
        for item in &page {
            assert!(item.token_id >= 1 && item.token_id <= PIPF.total_supply);
        }
    }

    #[test]
    fn color_is_stable_per_token() {
        assert_eq!(color_for(&HYPIO, 7), color_for(&HYPIO, 7));
        assert!(HYPIO.palette.contains(&color_for(&HYPIO, 7)));
    }

    #[test]
    fn summary_carries_previews() {
        let summary = summary(&HYPIO);
        assert_eq!(summary.preview_nfts.len(), 8);
        assert!(summary.verified);
        assert_eq!(summary.contract_address, HYPIO.contract);
    }

    #[test]
    fn activities_are_bounded() {
        let mut rng = rng();
        let feed = activities(Utc::now(), &mut rng);
        assert_eq!(feed.len(), 50);
        for event in &feed {
            assert!(event.price.0 >= 45.0 && event.price.0 <= 150.0);
            assert!(ACTIVITY_KINDS.contains(&event.kind.as_str()));
            assert_eq!(event.tx_hash.len(), 66);
        }
    }

    #[test]
    fn launchpad_has_all_three_states() {
        let projects = launchpad_projects(Utc::now());
        let states: Vec<&str> = projects.iter().map(|p| p.status.as_str()).collect();
        assert!(states.contains(&"upcoming"));
        assert!(states.contains(&"live"));
        assert!(states.contains(&"sold_out"));
    }
}
