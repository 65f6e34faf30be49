use indexmap::IndexSet;
use serde::Serialize;

/// Deduplicated set of account handles, preserving first-seen order.
pub type FollowList = IndexSet<String>;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub following_total: usize,
    pub followers_total: usize,
    pub mutual_total: usize,
    pub not_following_back: Vec<String>,
    pub not_followed_back: Vec<String>,
    #[serde(skip_serializing_if = "IndexSet::is_empty")]
    pub following: FollowList,
    #[serde(skip_serializing_if = "IndexSet::is_empty")]
    pub followers: FollowList,
}
