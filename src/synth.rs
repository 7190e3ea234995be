use crate::model::{Dataset, Page, PageId, User, UserId};
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashSet;

pub struct UsernameGenerator {
    prefixes: Vec<&'static str>,
    suffixes: Vec<&'static str>,
}

impl Default for UsernameGenerator {
    fn default() -> Self {
        UsernameGenerator {
            prefixes: vec![
                "dark", "shadow", "light", "blue", "red", "green", "gold", "silver",
                "phantom", "ninja", "stealth", "epic", "legend", "super", "mega",
            ],
            suffixes: vec![
                "warrior", "hunter", "mage", "slayer", "knight", "rogue", "wizard",
                "assassin", "lord", "king", "queen", "master", "pro", "noob", "gamer",
            ],
        }
    }
}

impl UsernameGenerator {
    // Generated in parallel, deduplicated in index order, so the same seed
    // always yields the same names. May return fewer than `count`.
    pub fn generate_unique_batch(&self, count: usize, seed: u64) -> Vec<String> {
        let candidates: Vec<String> = (0..count)
            .into_par_iter()
            .map(|i| {
                let mut rng = StdRng::seed_from_u64(seed ^ (i as u64).rotate_left(32));
                let prefix = self.prefixes.choose(&mut rng).copied().unwrap_or("user");
                let suffix = self.suffixes.choose(&mut rng).copied().unwrap_or("");
                let num = rng.gen_range(1..999);
                format!("{}{}{}", prefix, suffix, num)
            })
            .collect();

        let mut used = HashSet::new();
        candidates
            .into_iter()
            .filter(|name| used.insert(name.clone()))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct SynthConfig {
    pub users: usize,
    pub pages: usize,
    pub max_friends: usize,
    pub max_likes: usize,
    pub seed: u64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        SynthConfig {
            users: 50,
            pages: 20,
            max_friends: 6,
            max_likes: 4,
            seed: 0,
        }
    }
}

/// Builds a messy dataset for the cleaner to chew on: some users have blank
/// names or no connections, friend lists repeat ids, and some page ids appear
/// twice with different names.
pub fn generate_dataset(config: &SynthConfig) -> Dataset {
    let names = UsernameGenerator::default().generate_unique_batch(config.users, config.seed);

    let users: Vec<User> = (0..config.users)
        .into_par_iter()
        .map(|i| {
            let id = i as i64 + 1;
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(id as u64));
            let name = if rng.gen_bool(0.05) {
                "  ".to_string()
            } else {
                names.get(i).cloned().unwrap_or_default()
            };
            if rng.gen_bool(0.05) {
                return User {
                    id: UserId::from(id),
                    name,
                    friends: Vec::new(),
                    liked_pages: Vec::new(),
                };
            }
            let friends = random_ids(&mut rng, config.max_friends, config.users)
                .map(UserId::from)
                .collect();
            let liked_pages = random_ids(&mut rng, config.max_likes, config.pages)
                .map(PageId::from)
                .collect();
            User {
                id: UserId::from(id),
                name,
                friends,
                liked_pages,
            }
        })
        .collect();

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut pages = Vec::with_capacity(config.pages);
    for id in 1..=config.pages as i64 {
        pages.push(Page {
            id: PageId::from(id),
            name: format!("Page {}", id),
        });
        if rng.gen_bool(0.1) {
            pages.push(Page {
                id: PageId::from(id),
                name: format!("Page {} (renamed)", id),
            });
        }
    }

    info!(
        "generated {} users and {} pages (seed {})",
        users.len(),
        pages.len(),
        config.seed
    );
    Dataset { users, pages }
}

// Up to `max` ids drawn from 1..=upper, repeats allowed.
fn random_ids(rng: &mut StdRng, max: usize, upper: usize) -> impl Iterator<Item = i64> + '_ {
    let count = if upper == 0 { 0 } else { rng.gen_range(0..=max) };
    (0..count).map(move |_| rng.gen_range(1..=upper as i64))
}
