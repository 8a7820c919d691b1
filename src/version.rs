//! Version and build metadata baked in at compile time.
//!
//! `POAC_VERSION` is read from the build environment; every other value is
//! exported by `build.rs`.

use std::fmt;

pub const FALLBACK_VERSION: &str = "0.7.0";

pub const POAC_VERSION: &str = match option_env!("POAC_VERSION") {
    Some(version) => version,
    None => FALLBACK_VERSION,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitInfo {
    pub hash: &'static str,
    pub short_hash: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    pub version: &'static str,
    pub commit: Option<CommitInfo>,
    pub host: &'static str,
    pub os: &'static str,
    pub profile: &'static str,
}

impl VersionInfo {
    pub const fn current() -> Self {
        let commit = match (
            option_env!("POAC_COMMIT_HASH"),
            option_env!("POAC_COMMIT_SHORT_HASH"),
            option_env!("POAC_COMMIT_DATE"),
        ) {
            (Some(hash), Some(short_hash), Some(date)) => Some(CommitInfo {
                hash,
                short_hash,
                date,
            }),
            _ => None,
        };

        Self {
            version: POAC_VERSION,
            commit,
            host: match option_env!("POAC_HOST") {
                Some(host) => host,
                None => "unknown",
            },
            os: std::env::consts::OS,
            profile: match option_env!("POAC_PROFILE") {
                Some(profile) => profile,
                None => "unknown",
            },
        }
    }

    /// The `poac <version>` line.
    pub fn short(&self) -> String {
        format!("poac {}", self.version)
    }

    /// The version line followed by `key: value` build details.
    pub fn verbose(&self) -> String {
        let mut lines = vec![self.short(), format!("release: {}", self.version)];
        if let Some(commit) = &self.commit {
            lines.push(format!("commit-hash: {}", commit.hash));
            lines.push(format!("commit-date: {}", commit.date));
        }
        lines.push(format!("host: {}", self.host));
        lines.push(format!("os: {}", self.os));
        lines.push(format!("profile: {}", self.profile));
        lines.join("\n")
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short())?;
        if let Some(commit) = &self.commit {
            write!(f, " ({} {})", commit.short_hash, commit.date)?;
        }
        Ok(())
    }
}
