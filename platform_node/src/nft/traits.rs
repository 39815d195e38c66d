//! Weighted trait system and rarity scoring for generated collections.
//!
//! Trait tables mirror the flagship HyperEVM drop: six visual trait
//! groups plus a rarity tier, each option carrying an integer weight.
//! Lower weight means rarer; the rarity score of a token is the sum of
//! `100 / weight` over its visual traits, multiplied by the tier
//! multiplier.

use lazy_static::lazy_static;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;

use crate::types::round2;

#[derive(Debug, Clone, Copy)]
pub struct TraitOption {
    pub name: &'static str,
    pub weight: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct TraitGroup {
    pub name: &'static str,
    pub options: &'static [TraitOption],
}

const fn opt(name: &'static str, weight: u32) -> TraitOption {
    TraitOption { name, weight }
}

pub const BACKGROUND: TraitGroup = TraitGroup {
    name: "Background",
    options: &[
        opt("Cosmic Purple", 5),
        opt("Deep Space", 10),
        opt("Neon City", 15),
        opt("Electric Blue", 20),
        opt("Cyber Green", 25),
        opt("Golden Hour", 15),
        opt("Midnight Black", 10),
    ],
};

pub const BODY: TraitGroup = TraitGroup {
    name: "Body",
    options: &[
        opt("Diamond Body", 1),
        opt("Golden Body", 3),
        opt("Silver Body", 5),
        opt("Crystal Body", 8),
        opt("Neon Body", 12),
        opt("Electric Body", 15),
        opt("Plasma Body", 20),
        opt("Standard Body", 36),
    ],
};

pub const EYES: TraitGroup = TraitGroup {
    name: "Eyes",
    options: &[
        opt("Sharingan Eyes", 1),
        opt("Byakugan Eyes", 2),
        opt("Saiyan Eyes", 3),
        opt("Demon Slayer Eyes", 5),
        opt("Geass Eyes", 8),
        opt("Shinigami Eyes", 10),
        opt("All Might Eyes", 12),
        opt("Jotaro Eyes", 15),
        opt("Pikachu Eyes", 20),
        opt("Kawaii Eyes", 24),
    ],
};

pub const MOUTH: TraitGroup = TraitGroup {
    name: "Mouth",
    options: &[
        opt("Diamond Grill", 1),
        opt("Gold Teeth", 5),
        opt("Laser Mouth", 8),
        opt("Cyber Smile", 12),
        opt("Electric Grin", 15),
        opt("Plasma Mouth", 20),
        opt("Standard Smile", 39),
    ],
};

pub const HEAD_ACCESSORY: TraitGroup = TraitGroup {
    name: "Head Accessory",
    options: &[
        opt("Hokage Hat", 1),
        opt("Saiyan Hair", 2),
        opt("Straw Hat", 3),
        opt("Survey Corps Badge", 5),
        opt("Demon Slayer Headband", 8),
        opt("UA School Badge", 10),
        opt("Ichigo Headband", 12),
        opt("Anime Cat Ears", 15),
        opt("Sailor Moon Tiara", 18),
        opt("None", 26),
    ],
};

pub const SPECIAL_EFFECT: TraitGroup = TraitGroup {
    name: "Special Effect",
    options: &[
        opt("Kamehameha Wave", 1),
        opt("Rasengan Orb", 2),
        opt("Thunder Breathing", 3),
        opt("Stand Power", 5),
        opt("Titan Steam", 8),
        opt("Quirk Manifestation", 10),
        opt("Spirit Bomb Aura", 12),
        opt("Chakra Flow", 15),
        opt("Anime Sparkles", 20),
        opt("None", 24),
    ],
};

pub const RARITY_LEVEL: TraitGroup = TraitGroup {
    name: "Rarity Level",
    options: &[
        opt("Legendary", 1),
        opt("Epic", 4),
        opt("Rare", 15),
        opt("Uncommon", 30),
        opt("Common", 50),
    ],
};

/// The six visual groups, in attribute order.
pub const VISUAL_GROUPS: [TraitGroup; 6] = [
    BACKGROUND,
    BODY,
    EYES,
    MOUTH,
    HEAD_ACCESSORY,
    SPECIAL_EFFECT,
];

/// Score multiplier per rarity tier.
pub fn rarity_multiplier(tier: &str) -> u32 {
    match tier {
        "Legendary" => 10,
        "Epic" => 5,
        "Rare" => 3,
        "Uncommon" => 2,
        _ => 1,
    }
}

lazy_static! {
    static ref VISUAL_DISTS: Vec<WeightedIndex<u32>> = VISUAL_GROUPS
        .iter()
        .map(|group| {
            WeightedIndex::new(group.options.iter().map(|option| option.weight))
                .expect("trait weights are positive")
        })
        .collect();
    static ref RARITY_DIST: WeightedIndex<u32> = WeightedIndex::new(
        RARITY_LEVEL.options.iter().map(|option| option.weight)
    )
    .expect("trait weights are positive");
}

/// Pick one option from `group` according to its weights.
pub fn weighted_pick(group: &TraitGroup, dist: &WeightedIndex<u32>, rng: &mut impl Rng) -> TraitOption {
    group.options[dist.sample(rng)]
}

#[derive(Debug, Clone, Serialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_type: Option<String>,
}

/// OpenSea-style metadata for a generated token.
#[derive(Debug, Clone, Serialize)]
pub struct NftMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    pub external_url: String,
    pub animation_url: String,
    pub attributes: Vec<Attribute>,
    pub blockchain: String,
    pub chain_id: u64,
    pub contract_address: String,
    #[serde(skip)]
    pub rarity_tier: String,
    #[serde(skip)]
    pub rarity_score: f64,
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub collection_name: String,
    pub contract_address: String,
    pub chain_id: u64,
    pub image_base: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            collection_name: "HyperEVM NFT".to_string(),
            contract_address: "0x63eb9d77D083cA10C304E28d5191321977fd0Bfb".to_string(),
            chain_id: crate::config::CHAIN_ID,
            image_base: "https://hypernft.art".to_string(),
        }
    }
}

/// Generate metadata for one token id.
pub fn generate_metadata(config: &GeneratorConfig, token_id: u32, rng: &mut impl Rng) -> NftMetadata {
    let picks: Vec<TraitOption> = VISUAL_GROUPS
        .iter()
        .zip(VISUAL_DISTS.iter())
        .map(|(group, dist)| weighted_pick(group, dist, rng))
        .collect();
    let tier = weighted_pick(&RARITY_LEVEL, &RARITY_DIST, rng);

    let score = rarity_score(&picks, tier.name);

    let mut attributes: Vec<Attribute> = VISUAL_GROUPS
        .iter()
        .zip(picks.iter())
        .map(|(group, pick)| Attribute {
            trait_type: group.name.to_string(),
            value: serde_json::Value::String(pick.name.to_string()),
            rarity: Some(format!("{:.1}%", pick.weight as f64)),
            display_type: None,
        })
        .collect();
    attributes.push(Attribute {
        trait_type: "Rarity Level".to_string(),
        value: serde_json::Value::String(tier.name.to_string()),
        rarity: Some(format!("{:.1}%", tier.weight as f64)),
        display_type: None,
    });
    attributes.push(Attribute {
        trait_type: "Rarity Score".to_string(),
        value: serde_json::json!(round2(score)),
        rarity: None,
        display_type: Some("number".to_string()),
    });
    attributes.push(Attribute {
        trait_type: "Generation".to_string(),
        value: serde_json::json!(1),
        rarity: None,
        display_type: Some("number".to_string()),
    });

    NftMetadata {
        name: format!("{} #{}", config.collection_name, token_id),
        description: format!(
            "Unique digital collectible on {} blockchain. Rarity Score: {:.2}",
            "HyperEVM", score
        ),
        image: format!("{}/api/image/{}", config.image_base, token_id),
        external_url: format!("{}/token/{}", config.image_base, token_id),
        animation_url: format!("{}/api/animation/{}", config.image_base, token_id),
        attributes,
        blockchain: "HyperEVM".to_string(),
        chain_id: config.chain_id,
        contract_address: config.contract_address.clone(),
        rarity_tier: tier.name.to_string(),
        rarity_score: score,
    }
}

/// Rarity score: `sum(100 / weight)` over visual traits, times the
/// tier multiplier. Rarer picks dominate the sum.
pub fn rarity_score(picks: &[TraitOption], tier: &str) -> f64 {
    let base: f64 = picks
        .iter()
        .map(|pick| 100.0 / pick.weight as f64)
        .sum();
    base * rarity_multiplier(tier) as f64
}

/// Summary of a generated preview batch.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionPreview {
    pub name: String,
    pub total_supply: u32,
    pub seller_fee_basis_points: u32,
    pub blockchain: String,
    pub chain_id: u64,
    pub contract_address: String,
    pub created_at: String,
    pub rarity_distribution: HashMap<String, u32>,
    pub sample: Vec<NftMetadata>,
}

/// Generate `size` tokens and tally tier distribution; the first few
/// metadata records ride along as a sample.
pub fn generate_preview(
    config: &GeneratorConfig,
    size: u32,
    rng: &mut impl Rng,
) -> CollectionPreview {
    let size = size.clamp(1, 10_000);
    let mut rarity_distribution: HashMap<String, u32> = HashMap::new();
    let mut sample = Vec::new();

    for token_id in 1..=size {
        let metadata = generate_metadata(config, token_id, rng);
        *rarity_distribution
            .entry(metadata.rarity_tier.clone())
            .or_insert(0) += 1;
        if sample.len() < 5 {
            sample.push(metadata);
        }
    }

    CollectionPreview {
        name: config.collection_name.clone(),
        total_supply: size,
        seller_fee_basis_points: 500,
        blockchain: "HyperEVM".to_string(),
        chain_id: config.chain_id,
        contract_address: config.contract_address.clone(),
        created_at: chrono::Utc::now().to_rfc3339(),
        rarity_distribution,
        sample,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    #[test]
    fn all_weights_are_positive() {
        for group in VISUAL_GROUPS.iter().chain([RARITY_LEVEL].iter()) {
            for option in group.options {
                assert!(option.weight > 0, "{} / {}", group.name, option.name);
            }
        }
    }

    #[test]
    fn picks_belong_to_their_group() {
        let mut rng = rng();
        for (group, dist) in VISUAL_GROUPS.iter().zip(VISUAL_DISTS.iter()) {
            for _ in 0..200 {
                let pick = weighted_pick(group, dist, &mut rng);
                assert!(group.options.iter().any(|option| option.name == pick.name));
            }
        }
    }

    #[test]
    fn common_traits_dominate() {
        let mut rng = rng();
        let dist = &VISUAL_DISTS[1]; // Body
        let mut diamond = 0;
        let mut standard = 0;
        for _ in 0..10_000 {
            match weighted_pick(&BODY, dist, &mut rng).name {
                "Diamond Body" => diamond += 1,
                "Standard Body" => standard += 1,
                _ => {}
            }
        }
        assert!(standard > diamond * 5, "standard {standard} diamond {diamond}");
    }

    #[test]
    fn rarity_score_rewards_rare_picks() {
        let rarest: Vec<TraitOption> = VISUAL_GROUPS
            .iter()
            .map(|group| {
                *group
                    .options
                    .iter()
                    .min_by_key(|option| option.weight)
                    .unwrap()
            })
            .collect();
        let commonest: Vec<TraitOption> = VISUAL_GROUPS
            .iter()
            .map(|group| {
                *group
                    .options
                    .iter()
                    .max_by_key(|option| option.weight)
                    .unwrap()
            })
            .collect();
        let top = rarity_score(&rarest, "Legendary");
        let bottom = rarity_score(&commonest, "Common");
        assert!(top > bottom * 10.0);
        assert!(bottom > 0.0);
    }

    #[test]
    fn metadata_has_expected_attributes() {
        let mut rng = rng();
        let config = GeneratorConfig::default();
        let metadata = generate_metadata(&config, 7, &mut rng);
        assert_eq!(metadata.name, "HyperEVM NFT #7");
        // Six visual traits + Rarity Level + Rarity Score + Generation.
        assert_eq!(metadata.attributes.len(), 9);
        assert_eq!(metadata.chain_id, 999);
        assert!(metadata.rarity_score > 0.0);
    }

    #[test]
    fn preview_tallies_sum_to_size() {
        let mut rng = rng();
        let config = GeneratorConfig::default();
        let preview = generate_preview(&config, 500, &mut rng);
        let total: u32 = preview.rarity_distribution.values().sum();
        assert_eq!(total, 500);
        assert_eq!(preview.sample.len(), 5);
    }

    #[test]
    fn preview_size_is_clamped() {
        let mut rng = rng();
        let config = GeneratorConfig::default();
        let preview = generate_preview(&config, 0, &mut rng);
        assert_eq!(preview.total_supply, 1);
    }
}
