use crate::model::{Dataset, Page, User};
use crate::ordered::OrderedMap;
use log::{debug, info};
use std::collections::BTreeSet;

/// Normalizes a raw dataset. The input is left untouched.
///
/// The steps run in a fixed order, since the degree filter has to see the
/// deduplicated friend lists:
/// 1. drop users without a name (missing, empty or whitespace only)
/// 2. deduplicate each user's friends and liked pages
/// 3. drop users left with no friends and no liked pages
/// 4. keep one page per id, the last occurrence winning
///
/// Friend and page ids are not checked against the dataset, so self-loops
/// and dangling references pass through.
pub fn clean(raw: &Dataset) -> Dataset {
    let named: Vec<&User> = raw.users.iter().filter(|u| u.has_name()).collect();
    debug!("dropped {} unnamed users", raw.users.len() - named.len());

    let deduped = named.into_iter().map(dedup_user).collect::<Vec<_>>();

    let before = deduped.len();
    let users: Vec<User> = deduped.into_iter().filter(|u| !u.is_isolated()).collect();
    debug!("dropped {} isolated users", before - users.len());

    let pages = dedup_pages(&raw.pages);
    debug!("dropped {} duplicate pages", raw.pages.len() - pages.len());

    info!(
        "cleaned dataset: {} -> {} users, {} -> {} pages",
        raw.users.len(),
        users.len(),
        raw.pages.len(),
        pages.len()
    );
    Dataset { users, pages }
}

fn dedup_user(user: &User) -> User {
    User {
        id: user.id.clone(),
        name: user.name.clone(),
        friends: sorted_unique(&user.friends),
        liked_pages: sorted_unique(&user.liked_pages),
    }
}

fn sorted_unique<T: Ord + Clone>(ids: &[T]) -> Vec<T> {
    ids.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect()
}

// A later page replaces an earlier one with the same id but keeps its slot.
fn dedup_pages(pages: &[Page]) -> Vec<Page> {
    let mut unique = OrderedMap::new();
    for page in pages {
        unique.insert(page.id.clone(), page.clone());
    }
    unique.into_values().collect()
}
