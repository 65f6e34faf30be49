use std::io::IsTerminal;

use crate::types::Report;

// Bright ANSI hues, one per category.
const COUNT: &str = "96"; // bright cyan
const MUTUAL: &str = "92"; // bright green
const NOT_FOLLOWING_BACK: &str = "91"; // bright red
const NOT_FOLLOWED_BACK: &str = "93"; // bright yellow
const FOLLOWING: &str = "94"; // bright blue
const FOLLOWERS: &str = "95"; // bright magenta

pub fn format(r: &Report, verbose: bool) -> String {
    let colors = Colors::enabled();
    let mut lines = Vec::new();

    lines.push(format!(
        "You follow {} accounts and {} accounts follow you ({} mutual).",
        colors.paint(&r.following_total.to_string(), COUNT),
        colors.paint(&r.followers_total.to_string(), COUNT),
        colors.paint(&r.mutual_total.to_string(), MUTUAL),
    ));

    if verbose {
        let following: Vec<&str> = r.following.iter().map(String::as_str).collect();
        let followers: Vec<&str> = r.followers.iter().map(String::as_str).collect();
        push_section(&mut lines, &colors, "Accounts you follow", &following, FOLLOWING);
        push_section(&mut lines, &colors, "Accounts following you", &followers, FOLLOWERS);
    }

    let not_following_back: Vec<&str> =
        r.not_following_back.iter().map(String::as_str).collect();
    let not_followed_back: Vec<&str> =
        r.not_followed_back.iter().map(String::as_str).collect();
    push_section(
        &mut lines,
        &colors,
        "Not following you back",
        &not_following_back,
        NOT_FOLLOWING_BACK,
    );
    push_section(
        &mut lines,
        &colors,
        "You are not following back",
        &not_followed_back,
        NOT_FOLLOWED_BACK,
    );

    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, colors: &Colors, title: &str, handles: &[&str], hue: &str) {
    lines.push(String::new());
    lines.push(format!(
        "{} ({}):",
        colors.bold(title),
        colors.paint(&handles.len().to_string(), COUNT)
    ));
    for handle in handles {
        lines.push(format!("  - {}", colors.paint(handle, hue)));
    }
}

struct Colors {
    enabled: bool,
}

impl Colors {
    fn enabled() -> Self {
        let force = std::env::var("CLICOLOR_FORCE")
            .ok()
            .filter(|v| v != "0")
            .is_some();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let clicolor_zero = std::env::var("CLICOLOR")
            .ok()
            .map(|v| v == "0")
            .unwrap_or(false);
        let term = std::io::stdout().is_terminal();
        let enabled = if force {
            true
        } else if no_color || clicolor_zero {
            false
        } else {
            term
        };
        Colors { enabled }
    }

    fn paint(&self, s: &str, code: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", code, s)
        } else {
            s.to_string()
        }
    }

    fn bold(&self, s: &str) -> String {
        if self.enabled {
            format!("\x1b[1m{}\x1b[0m", s)
        } else {
            s.to_string()
        }
    }
}
