//! Trivia facts for the sidebar surface.
//!
//! Selection is two-stage: pick a category with equal weight, then pick
//! uniformly within the category's fixed list.

use rand::seq::SliceRandom;
use rand::Rng;

/// Fun food facts.
pub const FOOD_FACTS: &[&str] = &[
    "Honey never spoils. Archaeologists have found pots of honey in ancient Egyptian tombs that are over 3,000 years old and still perfectly edible!",
    "Apples float in water because 25% of their volume is air.",
    "The world's most expensive coffee, Kopi Luwak, comes from civet cat poop!",
    "Carrots were originally purple before they were bred to be orange.",
];

/// Nutrition tips.
pub const NUTRITION_FACTS: &[&str] = &[
    "Pairing iron-rich foods like spinach with vitamin C helps your body absorb the iron.",
    "Protein eaten within an hour of a workout supports muscle recovery.",
    "Whole grains keep you full longer than refined grains thanks to their fiber.",
    "Most adults need around two liters of water a day, and soup counts!",
];

const CATEGORIES: &[&[&str]] = &[FOOD_FACTS, NUTRITION_FACTS];

/// Pick a random trivia fact.
pub fn random_fact() -> &'static str {
    random_fact_with(&mut rand::thread_rng())
}

/// Pick a random trivia fact using the provided RNG.
pub fn random_fact_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    let category = CATEGORIES
        .choose(rng)
        .expect("fact categories are non-empty");
    category
        .choose(rng)
        .copied()
        .expect("fact lists are non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_comes_from_a_known_list() {
        for _ in 0..50 {
            let fact = random_fact();
            assert!(FOOD_FACTS.contains(&fact) || NUTRITION_FACTS.contains(&fact));
        }
    }

    #[test]
    fn test_both_categories_reachable() {
        let mut saw_food = false;
        let mut saw_nutrition = false;
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let fact = random_fact_with(&mut rng);
            saw_food |= FOOD_FACTS.contains(&fact);
            saw_nutrition |= NUTRITION_FACTS.contains(&fact);
        }
        assert!(saw_food && saw_nutrition);
    }
}
