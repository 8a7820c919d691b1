use std::env;
use std::path::Path;
use std::process::Command;
use std::str;

fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| {
            str::from_utf8(&output.stdout)
                .ok()
                .map(|s| s.trim().to_string())
        })
        .filter(|s| !s.is_empty())
}

fn main() {
    println!("cargo:rerun-if-env-changed=POAC_VERSION");

    if Path::new(".git").exists() {
        println!("cargo:rerun-if-changed=.git/HEAD");

        if let Some(hash) = git(&["rev-parse", "HEAD"]) {
            println!("cargo:rustc-env=POAC_COMMIT_HASH={}", hash);
        }
        if let Some(short_hash) = git(&["rev-parse", "--short", "HEAD"]) {
            println!("cargo:rustc-env=POAC_COMMIT_SHORT_HASH={}", short_hash);
        }
        if let Some(date) = git(&["log", "-1", "--format=%cd", "--date=short"]) {
            println!("cargo:rustc-env=POAC_COMMIT_DATE={}", date);
        }
    }

    let host = env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=POAC_HOST={}", host);
    println!("cargo:rustc-env=POAC_PROFILE={}", profile);
}
