// SPDX-FileCopyrightText: Copyright © 2025 VerFlag Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Embeds package version, build time, compiler version and git revision
//! information into the crate via `cargo:rustc-env` / `cargo:rustc-cfg`.

use std::{
    io,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
enum Error {
    #[error("missing `{0}` environment variable")]
    MissingEnv(&'static str),
    #[error("{0}: terminated with exit code {1}")]
    CommandFailed(String, i32),
    #[error("{0}: killed by signal")]
    CommandKilled(String),
    #[error("{0}: produced non-utf8 output")]
    CommandOutput(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Returns the value of the given environment variable, registering a
/// `rerun-if-env-changed` hint so the script reruns when it changes.
fn env(key: &'static str) -> Result<String, Error> {
    println!("cargo:rerun-if-env-changed={key}");
    std::env::var(key).map_err(|_| Error::MissingEnv(key))
}

/// Runs a program and returns its trimmed standard output.
fn command(prog: &str, args: &[&str], cwd: Option<&Path>) -> Result<String, Error> {
    println!("cargo:rerun-if-env-changed=PATH");
    let mut cmd = Command::new(prog);
    cmd.args(args);
    cmd.stderr(Stdio::inherit());
    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }
    let out = cmd.output()?;
    if !out.status.success() {
        return Err(match out.status.code() {
            Some(code) => Error::CommandFailed(prog.to_owned(), code),
            None => Error::CommandKilled(prog.to_owned()),
        });
    }
    let stdout = String::from_utf8(out.stdout).map_err(|_| Error::CommandOutput(prog.to_owned()))?;
    Ok(stdout.trim_end().to_owned())
}

/// Embeds the build timestamp, honoring `SOURCE_DATE_EPOCH` for
/// reproducible builds.
fn embed_build_time() {
    if let Ok(epoch) = env("SOURCE_DATE_EPOCH") {
        if let Ok(seconds) = epoch.parse::<i64>() {
            if DateTime::from_timestamp(seconds, 0).is_some() {
                println!("cargo:rustc-env=BUILDINFO_BUILD_TIME={seconds}");
                return;
            }
        }
    }
    println!("cargo:rustc-env=BUILDINFO_BUILD_TIME={}", Utc::now().timestamp());
}

/// Embeds the version string of the compiler performing this build.
fn embed_rustc_version() -> Result<(), Error> {
    let rustc = env("RUSTC").unwrap_or_else(|_| "rustc".to_owned());
    let version = command(&rustc, &["--version"], None)?;
    println!("cargo:rustc-env=BUILDINFO_RUSTC_VERSION={version}");
    Ok(())
}

/// Checks whether we're building from a git checkout and if so embeds the
/// revision hashes and working tree state.
fn embed_git_info() -> Result<(), Error> {
    // The cfgs this script may set. Declared unconditionally so check-cfg
    // stays happy on non-git builds.
    println!("cargo:rustc-check-cfg=cfg(BUILDINFO_IS_GIT_BUILD)");
    println!("cargo:rustc-check-cfg=cfg(BUILDINFO_IS_DIRTY)");

    let pkg_dir = PathBuf::from(env("CARGO_MANIFEST_DIR")?);
    let git_dir = match command("git", &["rev-parse", "--git-dir"], Some(&pkg_dir)) {
        Ok(dir) => PathBuf::from(dir),
        Err(err) => {
            // Not in a git repository, most likely a source archive build.
            println!("cargo:warning=unable to determine git revision (not in a git repository?)");
            println!("cargo:warning={err}");

            // Someone could still run git init under us, catch that.
            println!("cargo:rerun-if-changed={}/.git", pkg_dir.display());
            return Ok(());
        }
    };
    println!("cargo:rustc-cfg=BUILDINFO_IS_GIT_BUILD");

    // Rerun when the checked out commit or the state of the working tree
    // changes. Watching these state files may produce false negatives but
    // it's the best hint git gives us.
    for subpath in ["HEAD", "logs/HEAD", "index"] {
        if let Ok(path) = git_dir.join(subpath).canonicalize() {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }

    let full_hash = command("git", &["rev-parse", "HEAD"], Some(&pkg_dir))?;
    println!("cargo:rustc-env=BUILDINFO_GIT_FULL_HASH={full_hash}");

    let short_hash = command("git", &["rev-parse", "--short", "HEAD"], Some(&pkg_dir))?;
    println!("cargo:rustc-env=BUILDINFO_GIT_SHORT_HASH={short_hash}");

    let status = command("git", &["status", "--porcelain"], Some(&pkg_dir))?;
    if !status.is_empty() {
        println!("cargo:rustc-cfg=BUILDINFO_IS_DIRTY");
    }

    Ok(())
}

fn main() -> Result<(), Error> {
    println!("cargo:rustc-env=BUILDINFO_VERSION={}", env("CARGO_PKG_VERSION")?);

    embed_build_time();
    embed_rustc_version()?;
    embed_git_info()?;

    Ok(())
}
