use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;

use crate::types::FollowList;

/// Action words the web UI renders next to each account row. A raw copy-paste
/// of the follower dialog carries them along; they are never valid handles.
static ACTION_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["Remove", "Entfernen", "Search", "Suchen"]));

/// Avatar alt-text markers, same origin as the action words.
const AVATAR_MARKERS: [&str; 2] = ["profile picture", "Profilbild"];

/// Reads a follow list file into an order-preserving set of handles.
///
/// Each line is trimmed of surrounding whitespace; empty lines and leftover
/// web-UI chrome are discarded. Duplicate handles collapse, first occurrence
/// wins. Handles are kept as raw trimmed strings with no case folding.
///
/// # Errors
/// Returns an error naming the path if the file cannot be opened or read.
pub fn load_list(path: &Path) -> Result<FollowList> {
    let file = File::open(path).with_context(|| format!("open list file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut handles = FollowList::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("read list file: {}", path.display()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || is_chrome(trimmed) {
            continue;
        }
        handles.insert(trimmed.to_string());
    }
    Ok(handles)
}

fn is_chrome(line: &str) -> bool {
    ACTION_WORDS.contains(line) || AVATAR_MARKERS.iter().any(|m| line.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_list(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn trims_and_skips_empty_lines() {
        let (_dir, path) = write_list("  alice  \n\n\t\nbob\n");
        let list = load_list(&path).unwrap();
        assert_eq!(
            list.iter().collect::<Vec<_>>(),
            vec!["alice", "bob"]
        );
    }

    #[test]
    fn duplicates_collapse_to_one_handle() {
        let (_dir, path) = write_list("alice\nalice\nbob\n");
        let list = load_list(&path).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains("alice"));
        assert!(list.contains("bob"));
    }

    #[test]
    fn discards_exported_ui_chrome() {
        let content = "alice's profile picture\nalice\nRemove\n\
                       Profilbild von bob\nbob\nEntfernen\nSearch\nSuchen\n";
        let (_dir, path) = write_list(content);
        let list = load_list(&path).unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["alice", "bob"]);
    }

    #[test]
    fn handles_stay_case_sensitive() {
        let (_dir, path) = write_list("Alice\nalice\n");
        let list = load_list(&path).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = load_list(&path).unwrap_err();
        assert!(format!("{err:#}").contains("nope.txt"));
    }
}
