use crate::types::Report;

pub fn format(r: &Report) -> String {
    let mut out = String::new();
    out.push_str("handle,category\n");
    for handle in &r.not_following_back {
        push_row(&mut out, handle, "not_following_back");
    }
    for handle in &r.not_followed_back {
        push_row(&mut out, handle, "not_followed_back");
    }
    // Raw lists are only attached in verbose mode; when present, the mutuals
    // get classified as well.
    for handle in r.following.intersection(&r.followers) {
        push_row(&mut out, handle, "mutual");
    }
    out
}

fn push_row(out: &mut String, handle: &str, category: &str) {
    use std::fmt::Write as _;
    let _ = writeln!(out, "{},{}", handle, category);
}
