//! Clone request derivation
//!
//! Merges positional arguments, a possibly parsed GitHub URL and the CLI
//! overrides into one validated [`CloneRequest`].

use crate::cli::CloneArgs;
use crate::error::GitsubError;
use crate::git::{parse_github_dir_url, validate_repository_url};
use crate::system::System;
use crate::utils::path::{clean_path, normalize_directory, repository_name};
use anyhow::Result;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Branch used when neither an override nor a GitHub URL names one
pub const DEFAULT_BRANCH: &str = "main";

/// Defaults applied while building a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDefaults {
    pub branch: String,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_owned(),
        }
    }
}

/// A validated sparse clone
///
/// `directories` is non-empty, normalized and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneRequest {
    pub repository_url: String,
    pub directories: Vec<String>,
    pub branch: String,
    pub output_directory: String,
}

impl CloneRequest {
    /// Build a request from `clone` arguments
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Fewer than two positional arguments are given and the single one is
    ///   not a GitHub tree/blob URL (`Usage`)
    /// - The branch starts with `-` (`Usage`)
    /// - The repository URL has an unsupported transport (`InvalidUrl`)
    /// - A directory normalizes to nothing (`InvalidDirectory`)
    /// - No output directory can be derived (`MissingOutputDirectory`)
    /// - The output path already exists (`OutputExists`)
    pub fn build(args: &CloneArgs, defaults: &RequestDefaults, system: &dyn System) -> Result<Self> {
        let branch_override = non_empty(args.branch.as_deref());
        let output_override = non_empty(args.output.as_deref());

        let (repository_url, raw_directories, parsed_branch) =
            if let Some(parsed) = parse_github_dir_url(&args.targets) {
                debug!("Recognized GitHub URL: {parsed:?}");
                (parsed.repository_url, vec![parsed.sub_path], Some(parsed.branch))
            } else {
                match args.targets.as_slice() {
                    [repository, directories @ ..] if !directories.is_empty() => {
                        (repository.clone(), directories.to_vec(), None)
                    }
                    _ => {
                        return Err(GitsubError::usage(
                            "expected <repo-url> <directory> [directory...] or a single GitHub tree/blob URL",
                        )
                        .into());
                    }
                }
            };

        validate_repository_url(&repository_url)?;

        let directories = normalize_directories(&raw_directories)?;

        let branch = branch_override
            .map(ToOwned::to_owned)
            .or(parsed_branch)
            .unwrap_or_else(|| defaults.branch.clone());
        if branch.starts_with('-') {
            return Err(GitsubError::usage(format!("branch must not start with '-': {branch}")).into());
        }

        let output = match output_override {
            Some(output) => output.to_owned(),
            None => repository_name(&repository_url)
                .ok_or_else(|| GitsubError::missing_output_directory(&repository_url))?,
        };
        let output_directory = clean_path(&output);

        if system.exists(Path::new(&output_directory)) {
            return Err(GitsubError::output_exists(output_directory).into());
        }

        Ok(Self {
            repository_url,
            directories,
            branch,
            output_directory,
        })
    }
}

/// Normalize directories and drop duplicates, keeping first-seen order
///
/// # Errors
///
/// Returns `GitsubError::InvalidDirectory` naming the first raw value that
/// normalizes to nothing.
pub fn normalize_directories(raw: &[String]) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut normalized = Vec::with_capacity(raw.len());

    for dir in raw {
        let nd = normalize_directory(dir).ok_or_else(|| GitsubError::invalid_directory(dir))?;
        if seen.insert(nd.clone()) {
            normalized.push(nd);
        }
    }

    Ok(normalized)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
