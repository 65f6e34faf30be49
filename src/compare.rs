use crate::types::{FollowList, Report};

/// Computes the two asymmetric differences between the lists.
///
/// Pure set arithmetic over the in-memory lists; cannot fail. Each derived
/// listing keeps the insertion order of the list it was subtracted from, so
/// identical inputs always render identically. The raw list fields are left
/// empty here; the caller attaches them when verbose output is requested.
pub fn compare(following: &FollowList, followers: &FollowList) -> Report {
    let not_following_back: Vec<String> = following.difference(followers).cloned().collect();
    let not_followed_back: Vec<String> = followers.difference(following).cloned().collect();
    let mutual_total = following.intersection(followers).count();

    Report {
        following_total: following.len(),
        followers_total: followers.len(),
        mutual_total,
        not_following_back,
        not_followed_back,
        following: FollowList::new(),
        followers: FollowList::new(),
    }
}
