use crate::model::{Dataset, PageId, User, UserId};
use crate::ordered::OrderedMap;
use log::debug;
use std::collections::{BTreeSet, HashSet};

fn sets_by_user<T, F>(users: &[User], field: F) -> OrderedMap<UserId, BTreeSet<T>>
where
    T: Ord + Clone,
    F: Fn(&User) -> &[T],
{
    let mut map = OrderedMap::new();
    for user in users {
        map.insert(user.id.clone(), field(user).iter().cloned().collect());
    }
    map
}

/// Ranks people the target may know by the number of mutual friends.
///
/// Each path target -> friend -> candidate counts once, so a candidate
/// reachable through three friends scores 3. Existing friends and the target
/// itself are never suggested. Friend ids with no user record are skipped.
pub fn suggest_friends_scored(target: UserId, dataset: &Dataset) -> Vec<(UserId, u64)> {
    let friends_of = sets_by_user(&dataset.users, |u| u.friends.as_slice());
    let Some(my_friends) = friends_of.get(&target) else {
        return Vec::new();
    };

    let mut mutual = OrderedMap::new();
    for friend in my_friends {
        let Some(their_friends) = friends_of.get(friend) else {
            continue;
        };
        for candidate in their_friends {
            if *candidate != target && !my_friends.contains(candidate) {
                mutual.add(candidate.clone(), 1);
            }
        }
    }
    let ranked = mutual.into_ranked();
    debug!("{} friend suggestions for user {}", ranked.len(), target);
    ranked
}

pub fn suggest_friends(target: UserId, dataset: &Dataset) -> Vec<UserId> {
    suggest_friends_scored(target, dataset)
        .into_iter()
        .map(|(id, _)| id)
        .collect()
}

/// Ranks pages the target does not like yet.
///
/// Every other user contributes the size of their like overlap with the
/// target to each page they like that the target does not. A user with no
/// overlap still registers their pages, with a score of 0.
pub fn suggest_pages_scored(target: UserId, dataset: &Dataset) -> Vec<(PageId, u64)> {
    let likes_of = sets_by_user(&dataset.users, |u| u.liked_pages.as_slice());
    let Some(my_likes) = likes_of.get(&target) else {
        return Vec::new();
    };

    let mut scores = OrderedMap::new();
    for (other, likes) in likes_of.iter() {
        if *other == target {
            continue;
        }
        let shared = my_likes.intersection(likes).count() as u64;
        for page in likes {
            if !my_likes.contains(page) {
                scores.add(page.clone(), shared);
            }
        }
    }
    let ranked = scores.into_ranked();
    debug!("{} page suggestions for user {}", ranked.len(), target);
    ranked
}

pub fn suggest_pages(target: UserId, dataset: &Dataset) -> Vec<PageId> {
    suggest_pages_scored(target, dataset)
        .into_iter()
        .map(|(id, _)| id)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendations {
    pub user: UserId,
    pub friends: Vec<(UserId, u64)>,
    pub pages: Vec<(PageId, u64)>,
}

impl Recommendations {
    pub fn for_user(user: UserId, dataset: &Dataset, top: Option<usize>) -> Self {
        let mut friends = suggest_friends_scored(user.clone(), dataset);
        let mut pages = suggest_pages_scored(user.clone(), dataset);
        if let Some(top) = top {
            friends.truncate(top);
            pages.truncate(top);
        }
        Recommendations {
            user,
            friends,
            pages,
        }
    }
}

/// Recommendations for every distinct user, in dataset order.
pub fn recommend_all(dataset: &Dataset, top: Option<usize>) -> Vec<Recommendations> {
    let mut seen = HashSet::new();
    dataset
        .users
        .iter()
        .filter(|u| seen.insert(u.id.clone()))
        .map(|u| Recommendations::for_user(u.id.clone(), dataset, top))
        .collect()
}
