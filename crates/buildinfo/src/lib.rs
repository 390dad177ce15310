// SPDX-FileCopyrightText: Copyright © 2025 VerFlag Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Accessors for the build metadata embedded by this crate's build script.

use chrono::DateTime;

mod values;

/// Returns the version of the project, as defined in the top-level Cargo.toml
///
/// This will look like "0.1.0"
pub const fn version() -> &'static str {
    values::VERSION
}

/// Returns the build time of the project in RFC 3339 UTC format
///
/// If SOURCE_DATE_EPOCH was set during the build then that is the timestamp
/// returned, making the value reproducible.
///
/// This will look like "2025-07-09T19:20:40+00:00"
pub fn build_time() -> String {
    if let Ok(time) = values::BUILD_TIME.parse::<i64>() {
        if let Some(build_time) = DateTime::from_timestamp(time, 0) {
            return build_time.to_rfc3339();
        }
    }
    "unknown".to_owned()
}

/// Returns the version string of the rustc that compiled this build
///
/// This will look like "rustc 1.80.0 (051478957 2024-07-21)"
pub const fn rustc_version() -> &'static str {
    values::RUSTC_VERSION
}

/// Returns `true` if the project was built from a git checkout, `false`
/// otherwise (e.g. a release archive)
pub const fn is_git_build() -> bool {
    cfg!(BUILDINFO_IS_GIT_BUILD)
}

/// Returns `true` if the project was built from a dirty working tree
pub const fn is_dirty() -> bool {
    cfg!(BUILDINFO_IS_DIRTY)
}

/// Returns the full git hash the project was built from
///
/// If built from a non-git source this returns "unknown"
#[cfg(BUILDINFO_IS_GIT_BUILD)]
pub const fn git_full_hash() -> &'static str {
    values::GIT_FULL_HASH
}

/// Returns the full git hash the project was built from
///
/// If built from a non-git source this returns "unknown"
#[cfg(not(BUILDINFO_IS_GIT_BUILD))]
pub const fn git_full_hash() -> &'static str {
    "unknown"
}

/// Returns the shortened git hash the project was built from
///
/// If built from a non-git source this returns "unknown"
#[cfg(BUILDINFO_IS_GIT_BUILD)]
pub const fn git_short_hash() -> &'static str {
    values::GIT_SHORT_HASH
}

/// Returns the shortened git hash the project was built from
///
/// If built from a non-git source this returns "unknown"
#[cfg(not(BUILDINFO_IS_GIT_BUILD))]
pub const fn git_short_hash() -> &'static str {
    "unknown"
}

#[cfg(test)]
mod tests {
    use super::{build_time, git_full_hash, git_short_hash, is_git_build, rustc_version, version};

    #[test]
    fn version_matches_manifest() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn build_time_is_rfc3339() {
        let time = build_time();
        assert!(chrono::DateTime::parse_from_rfc3339(&time).is_ok(), "bad build time: {time}");
    }

    #[test]
    fn rustc_version_names_the_compiler() {
        assert!(rustc_version().starts_with("rustc"));
    }

    #[test]
    fn hashes_follow_git_detection() {
        if is_git_build() {
            assert_eq!(git_full_hash().len(), 40);
            assert!(git_full_hash().starts_with(git_short_hash()));
        } else {
            assert_eq!(git_full_hash(), "unknown");
            assert_eq!(git_short_hash(), "unknown");
        }
    }
}
