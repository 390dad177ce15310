// SPDX-FileCopyrightText: Copyright © 2025 VerFlag Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Version reporting utilities for command line programs.
//!
//! [`flag`] provides a tri-state `--version[=true|false|raw]` flag that
//! registers onto any [`clap::Command`], plus a post-parse check telling the
//! caller whether to exit. [`info`] collects the build metadata embedded by
//! the `buildinfo` crate and renders it as an aligned table or as JSON.

pub mod flag;
pub mod info;

pub use self::flag::{add_to_command, check, VersionValue};
pub use self::info::{BuildMetadata, Info, MetadataSource};
