use std::fs;
use std::process::Command;

// A raw copy-paste of the follower dialog carries avatar alt-text and action
// words in whichever language the UI was set to. Only the handles survive.
#[test]
fn raw_web_ui_paste_loads_only_handles() {
    let dir = tempfile::tempdir().unwrap();
    let following = "\
alice's profile picture
alice
Remove
Profilbild von bob
bob
Entfernen
Search
Suchen
";
    fs::write(dir.path().join("following.txt"), following).unwrap();
    fs::write(dir.path().join("followers.txt"), "alice\n").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_followcheck"))
        .arg("--json")
        .current_dir(dir.path())
        .output()
        .expect("run binary");
    assert!(out.status.success());
    let v: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&out.stdout)).unwrap();
    assert_eq!(v["following_total"], 2);
    assert_eq!(v["not_following_back"], serde_json::json!(["bob"]));
}
