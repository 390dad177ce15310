// SPDX-FileCopyrightText: Copyright © 2025 VerFlag Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Collection and rendering of build/version metadata.

use std::{env::consts, fmt};

use serde::{Deserialize, Serialize};

const UNKNOWN: &str = "unknown";

/// Raw build metadata as reported by a [`MetadataSource`]
#[derive(Debug, Clone)]
pub struct BuildMetadata {
    pub version: String,
    pub vcs: String,
    pub revision: String,
    pub build_time: String,
    pub dirty: bool,
}

/// Source of embedded build metadata.
///
/// Production wiring reads the values the `buildinfo` build script embedded;
/// tests substitute stubs. Returning `None` means no metadata is available,
/// e.g. when built from a release archive.
pub trait MetadataSource {
    fn read(&self) -> Option<BuildMetadata>;
}

/// Reads the metadata embedded by the `buildinfo` build script
#[derive(Debug, Clone, Copy)]
pub struct Embedded;

impl MetadataSource for Embedded {
    fn read(&self) -> Option<BuildMetadata> {
        if !buildinfo::is_git_build() {
            return None;
        }
        Some(BuildMetadata {
            version: buildinfo::version().to_owned(),
            vcs: "git".to_owned(),
            revision: buildinfo::git_full_hash().to_owned(),
            build_time: buildinfo::build_time(),
            dirty: buildinfo::is_dirty(),
        })
    }
}

/// Versioning information describing the running binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub version: String,
    pub vcs: String,
    pub revision: String,
    pub build_time: String,
    pub tree_state: String,
    pub toolchain: String,
    pub compiler: String,
    pub platform: String,
}

impl Info {
    /// Collect version info from the metadata embedded at build time
    pub fn collect() -> Self {
        Self::from_source(&Embedded)
    }

    /// Build an `Info` from an arbitrary metadata source.
    ///
    /// Fields the source cannot provide degrade to `"unknown"`. Toolchain,
    /// compiler and platform always describe the binary itself and never
    /// come from the source.
    pub fn from_source(source: &impl MetadataSource) -> Self {
        let (version, vcs, revision, build_time, tree_state) = match source.read() {
            Some(meta) => (
                meta.version,
                meta.vcs,
                meta.revision,
                meta.build_time,
                if meta.dirty { "dirty" } else { "clean" }.to_owned(),
            ),
            None => (
                UNKNOWN.to_owned(),
                UNKNOWN.to_owned(),
                UNKNOWN.to_owned(),
                UNKNOWN.to_owned(),
                UNKNOWN.to_owned(),
            ),
        };
        Self {
            version,
            vcs,
            revision,
            build_time,
            tree_state,
            toolchain: buildinfo::rustc_version().to_owned(),
            compiler: "rustc".to_owned(),
            platform: format!("{}/{}", consts::OS, consts::ARCH),
        }
    }

    /// Serialize to a JSON object.
    ///
    /// Marshalling a fully-populated `Info` cannot fail; the unreachable
    /// failure path yields an empty string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl fmt::Display for Info {
    /// Renders the aligned key/value table, without a trailing newline
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>9}: {}", "version", self.version)?;
        writeln!(f, "{:>9}: {}", "vcs", self.vcs)?;
        writeln!(f, "{:>9}: {}", "revision", self.revision)?;
        writeln!(f, "{:>9}: {}", "buildTime", self.build_time)?;
        writeln!(f, "{:>9}: {}", "treeState", self.tree_state)?;
        writeln!(f, "{:>9}: {}", "toolchain", self.toolchain)?;
        writeln!(f, "{:>9}: {}", "compiler", self.compiler)?;
        write!(f, "{:>9}: {}", "platform", self.platform)
    }
}
