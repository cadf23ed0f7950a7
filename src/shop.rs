//! Shop inventory generation and pricing.
//!
//! A shop is a priced inventory snapshot; purchases are resolved by
//! the run state, which owns the gold and the deck.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::battle::types::{Card, CardRarity, Character};
use crate::content::cards::random_card_choices;
use crate::content::potions::{random_potion, Potion};
use crate::content::relics::{random_non_boss_relic, Relic};
use crate::core::constants::{
    SHOP_CARD_COUNT_MIN, SHOP_CARD_COUNT_SPREAD, SHOP_CARD_PRICE_COMMON, SHOP_CARD_PRICE_RARE,
    SHOP_CARD_PRICE_UNCOMMON, SHOP_POTION_PRICE, SHOP_RELIC_PRICE,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopCard {
    pub card: Card,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopRelic {
    pub relic: Relic,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopPotion {
    pub potion: Potion,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub cards: Vec<ShopCard>,
    pub relics: Vec<ShopRelic>,
    pub potions: Vec<ShopPotion>,
}

pub fn card_price(rarity: CardRarity) -> u32 {
    match rarity {
        CardRarity::Rare => SHOP_CARD_PRICE_RARE,
        CardRarity::Uncommon => SHOP_CARD_PRICE_UNCOMMON,
        _ => SHOP_CARD_PRICE_COMMON,
    }
}

impl Shop {
    /// Rolls a fresh inventory for the character's card pool.
    pub fn generate(character: Character, rng: &mut impl Rng) -> Self {
        let card_count = SHOP_CARD_COUNT_MIN + rng.gen_range(0..SHOP_CARD_COUNT_SPREAD);
        let cards = random_card_choices(character, card_count, rng)
            .into_iter()
            .map(|card| ShopCard {
                price: card_price(card.rarity),
                card,
            })
            .collect();

        let relics = random_non_boss_relic(rng)
            .into_iter()
            .map(|relic| ShopRelic {
                relic,
                price: SHOP_RELIC_PRICE,
            })
            .collect();

        let potions = random_potion(rng)
            .into_iter()
            .map(|potion| ShopPotion {
                potion,
                price: SHOP_POTION_PRICE,
            })
            .collect();

        Shop {
            cards,
            relics,
            potions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generate_stocks_all_sections() {
        for seed in 0..10u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let shop = Shop::generate(Character::Ironclad, &mut rng);
            assert!(shop.cards.len() >= SHOP_CARD_COUNT_MIN);
            assert!(shop.cards.len() < SHOP_CARD_COUNT_MIN + SHOP_CARD_COUNT_SPREAD);
            assert_eq!(shop.relics.len(), 1);
            assert_eq!(shop.potions.len(), 1);
        }
    }

    #[test]
    fn test_prices_follow_rarity() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let shop = Shop::generate(Character::Ironclad, &mut rng);
        for entry in &shop.cards {
            assert_eq!(entry.price, card_price(entry.card.rarity));
        }
    }

    #[test]
    fn test_card_price_table() {
        assert_eq!(card_price(CardRarity::Rare), 150);
        assert_eq!(card_price(CardRarity::Uncommon), 75);
        assert_eq!(card_price(CardRarity::Common), 50);
    }

    #[test]
    fn test_shop_excludes_basic_cards() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let shop = Shop::generate(Character::Ironclad, &mut rng);
        for entry in &shop.cards {
            assert_ne!(entry.card.rarity, CardRarity::Basic);
        }
    }
}
