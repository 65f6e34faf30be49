use std::io::ErrorKind;
use std::path::Path;

use anyhow::Result;

use crate::compare::compare;
use crate::formatters;
use crate::loader::load_list;
use crate::types::FollowList;

use super::Args;

pub fn run_with_args(args: &Args) -> Result<()> {
    let following = load_named(&args.following_file, "following", args.verbose)?;
    let followers = load_named(&args.followers_file, "followers", args.verbose)?;

    let mut report = compare(&following, &followers);
    if args.verbose > 0 {
        eprintln!(
            "Loaded {} following / {} followers",
            report.following_total, report.followers_total
        );
        report.following = following;
        report.followers = followers;
    }

    if args.json {
        let s = serde_json::to_string_pretty(&report)?;
        println!("{s}");
        return Ok(());
    }
    if args.csv {
        let s = formatters::csv::format(&report);
        print!("{s}");
        return Ok(());
    }

    let s = formatters::report::format(&report, args.verbose > 0);
    println!("{s}");
    Ok(())
}

fn load_named(path: &Path, which: &str, verbose: u8) -> Result<FollowList> {
    if verbose > 0 {
        eprintln!("Reading {which} list: {}", path.display());
    }
    load_list(path).map_err(|err| {
        if is_not_found(&err) {
            print_missing_file_hint();
        }
        err.context(format!("load {which} list"))
    })
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.root_cause()
        .downcast_ref::<std::io::Error>()
        .is_some_and(|io_err| io_err.kind() == ErrorKind::NotFound)
}

fn print_missing_file_hint() {
    eprintln!("Copy the follow/follower lists from the platform's website into two text files:");
    eprintln!("  following.txt -> accounts you follow");
    eprintln!("  followers.txt -> accounts following you");
}
