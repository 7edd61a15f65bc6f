//! Build script that stamps `PONZU_VERSION` for `ponzu --version`.
//!
//! Release builds report the package version; builds from a git checkout
//! append the commit, e.g. `0.1.0+g1a2b3c4-dirty`.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let package = env!("CARGO_PKG_VERSION");
    let version = match commit_suffix() {
        Some(suffix) => format!("{package}+{suffix}"),
        None => package.to_string(),
    };

    println!("cargo:rustc-env=PONZU_VERSION={version}");
}

/// Short commit hash, marked `-dirty` when the worktree has local changes.
fn commit_suffix() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=7", "--exclude=*"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let described = String::from_utf8(output.stdout).ok()?;
    match described.trim() {
        "" => None,
        hash => Some(format!("g{hash}")),
    }
}
