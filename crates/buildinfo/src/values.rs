// SPDX-FileCopyrightText: Copyright © 2025 VerFlag Developers
//
// SPDX-License-Identifier: MPL-2.0

pub(crate) const VERSION: &str = env!("BUILDINFO_VERSION");

pub(crate) const BUILD_TIME: &str = env!("BUILDINFO_BUILD_TIME");

pub(crate) const RUSTC_VERSION: &str = env!("BUILDINFO_RUSTC_VERSION");

#[cfg(BUILDINFO_IS_GIT_BUILD)]
pub(crate) const GIT_FULL_HASH: &str = env!("BUILDINFO_GIT_FULL_HASH");

#[cfg(BUILDINFO_IS_GIT_BUILD)]
pub(crate) const GIT_SHORT_HASH: &str = env!("BUILDINFO_GIT_SHORT_HASH");
