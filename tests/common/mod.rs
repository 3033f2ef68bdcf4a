#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub const OWNER: &str = "ada";

pub fn jotcal_cmd() -> Command {
    let mut cmd = Command::cargo_bin("jotcal").unwrap();
    cmd.env_remove("JOTCAL_ROOT");
    cmd.env_remove("JOTCAL_USER");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command run inside `root` as the journal owner
pub fn owner_cmd(root: &Path) -> Command {
    let mut cmd = jotcal_cmd();
    cmd.current_dir(root).env("JOTCAL_USER", OWNER);
    cmd
}

pub fn init_journal(root: &Path) {
    jotcal_cmd()
        .arg("init")
        .arg(root)
        .arg("--owner")
        .arg(OWNER)
        .assert()
        .success();
}

/// Write an entry file directly, bypassing the clock
pub fn write_entry(root: &Path, id: u64, title: &str, created: &str) {
    let contents = format!(
        "id = {}\ntitle = \"{}\"\ncontent = \"Written on {}\"\ncreated = \"{}\"\n",
        id, title, created, created
    );
    fs::write(root.join("entries").join(format!("{}.toml", id)), contents).unwrap();
}
