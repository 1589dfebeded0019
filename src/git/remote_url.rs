//! Repository URL validation and GitHub tree/blob URL parsing

use crate::error::GitsubError;
use crate::utils::path::{clean_path, escapes_base, parent_dir};
use anyhow::Result;
use tracing::debug;
use url::Url;

/// Canonical GitHub web host
pub const GITHUB_HOST: &str = "github.com";

/// Transport prefixes accepted for a repository URL
const ACCEPTED_PREFIXES: &[&str] = &["https://", "ssh://", "git@"];

/// Components decomposed from a GitHub web URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGitHubUrl {
    /// Synthesized `https://github.com/{owner}/{repo}` URL
    pub repository_url: String,
    /// Branch segment of the link
    pub branch: String,
    /// Directory inside the repository, cleaned and relative
    pub sub_path: String,
}

/// Whether a link points at a directory or a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkMode {
    Tree,
    Blob,
}

impl LinkMode {
    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "tree" => Some(Self::Tree),
            "blob" => Some(Self::Blob),
            _ => None,
        }
    }
}

/// Shallow syntactic check of a repository URL's transport
///
/// Accepts `https://`, `ssh://` and scp-like `git@host:path` forms.
/// The host is never contacted.
///
/// # Errors
///
/// Returns `GitsubError::InvalidUrl` for any other shape.
pub fn validate_repository_url(url: &str) -> Result<()> {
    if ACCEPTED_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
    {
        return Ok(());
    }

    Err(GitsubError::invalid_url(url).into())
}

/// Try to read the positional arguments as a single GitHub tree/blob URL
///
/// Only a lone argument is considered; any other count is "not matched".
#[must_use]
pub fn parse_github_dir_url(args: &[String]) -> Option<ParsedGitHubUrl> {
    match args {
        [single] => parse_github_url(single),
        _ => None,
    }
}

/// Decompose `https://github.com/{owner}/{repo}/{tree|blob}/{branch}/{path...}`
///
/// Returns `None` whenever the input does not have that shape. A blob link
/// resolves to the directory containing the file; a file at the branch root
/// has no such directory and is not matched.
#[must_use]
pub fn parse_github_url(raw: &str) -> Option<ParsedGitHubUrl> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let parsed = Url::parse(raw).ok()?;
    if parsed.host_str() != Some(GITHUB_HOST) {
        debug!("Not a GitHub URL: {raw}");
        return None;
    }

    // Decoded as a whole before splitting: an encoded slash separates
    // segments like a literal one
    let path = urlencoding::decode(parsed.path()).ok()?;
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    let [owner, repo, mode, branch, rest @ ..] = segments.as_slice() else {
        return None;
    };

    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    if owner.is_empty() || repo.is_empty() || branch.is_empty() {
        return None;
    }
    if branch.starts_with('-') {
        debug!("Branch looks like an option: {branch}");
        return None;
    }

    let mode = LinkMode::from_segment(mode)?;

    let rest: Vec<&str> = rest
        .iter()
        .copied()
        .filter(|segment| !segment.is_empty())
        .collect();
    if rest.is_empty() {
        return None;
    }

    let mut sub_path = clean_path(&rest.join("/"));
    if mode == LinkMode::Blob {
        sub_path = parent_dir(&sub_path);
    }

    if sub_path == "." || sub_path == "/" || escapes_base(&sub_path) {
        return None;
    }

    Some(ParsedGitHubUrl {
        repository_url: format!("https://{GITHUB_HOST}/{owner}/{repo}"),
        branch: (*branch).to_owned(),
        sub_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(repository_url: &str, branch: &str, sub_path: &str) -> Option<ParsedGitHubUrl> {
        Some(ParsedGitHubUrl {
            repository_url: repository_url.to_owned(),
            branch: branch.to_owned(),
            sub_path: sub_path.to_owned(),
        })
    }

    #[test]
    fn test_validate_repository_url() {
        validate_repository_url("https://github.com/owner/repo").unwrap();
        validate_repository_url("git@github.com:owner/repo.git").unwrap();
        validate_repository_url("ssh://git@github.com/owner/repo.git").unwrap();

        assert!(validate_repository_url("http://github.com/owner/repo").is_err());
        assert!(validate_repository_url("owner/repo").is_err());
        assert!(validate_repository_url("").is_err());
    }

    #[test]
    fn test_invalid_url_error_kind() {
        let err = validate_repository_url("ftp://example.com/repo").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GitsubError>(),
            Some(GitsubError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_parse_tree_url() {
        assert_eq!(
            parse_github_url("https://github.com/owner/repo/tree/main/src/lib"),
            parsed("https://github.com/owner/repo", "main", "src/lib")
        );
    }

    #[test]
    fn test_parse_blob_url_uses_parent() {
        assert_eq!(
            parse_github_url("https://github.com/owner/repo/blob/main/src/lib/file.go"),
            parsed("https://github.com/owner/repo", "main", "src/lib")
        );
    }

    #[test]
    fn test_parse_blob_at_root_not_matched() {
        assert_eq!(
            parse_github_url("https://github.com/owner/repo/blob/main/file.go"),
            None
        );
    }

    #[test]
    fn test_parse_strips_git_suffix() {
        assert_eq!(
            parse_github_url("https://github.com/owner/repo.git/tree/dev/docs"),
            parsed("https://github.com/owner/repo", "dev", "docs")
        );
    }

    #[test]
    fn test_parse_cleans_sub_path() {
        assert_eq!(
            parse_github_url("https://github.com/owner/repo/tree/main/src/./lib//core/"),
            parsed("https://github.com/owner/repo", "main", "src/lib/core")
        );
        assert_eq!(
            parse_github_url("https://github.com/owner/repo/tree/main/src/../docs"),
            parsed("https://github.com/owner/repo", "main", "docs")
        );
    }

    #[test]
    fn test_parse_decodes_segments() {
        assert_eq!(
            parse_github_url("https://github.com/owner/repo/tree/main/my%20docs"),
            parsed("https://github.com/owner/repo", "main", "my docs")
        );
        // %2F splits like a literal slash
        assert_eq!(
            parse_github_url("https://github.com/owner/repo/tree/feature%2Fx/my%20docs"),
            parsed("https://github.com/owner/repo", "feature", "x/my docs")
        );
    }

    #[test]
    fn test_parse_ignores_query_and_fragment() {
        assert_eq!(
            parse_github_url("https://github.com/owner/repo/tree/main/src?plain=1#L10"),
            parsed("https://github.com/owner/repo", "main", "src")
        );
    }

    #[test]
    fn test_parse_not_matched() {
        let inputs = [
            "",
            "not a url",
            "https://gitlab.com/owner/repo/tree/main/src",
            "https://github.com/owner/repo",
            "https://github.com/owner/repo/tree/main",
            "https://github.com/owner/repo/tree/main/",
            "https://github.com/owner/repo/commits/main/src",
            "https://github.com/owner//tree/main/src",
            "https://github.com/owner/.git/tree/main/src",
            "https://github.com/owner/repo/tree/main/.",
            "https://github.com/owner/repo/tree/main/src/../..",
            "https://github.com/owner/repo/tree/--no-write-fetch-head/src",
            "https://github.com/owner/repo/blob/-q/src/file.go",
            "github.com/owner/repo/tree/main/src",
        ];
        for input in inputs {
            assert_eq!(parse_github_url(input), None, "{input:?}");
        }
    }

    #[test]
    fn test_parse_dir_url_requires_single_argument() {
        let url = "https://github.com/owner/repo/tree/main/src".to_owned();
        assert!(parse_github_dir_url(std::slice::from_ref(&url)).is_some());
        assert!(parse_github_dir_url(&[url.clone(), "docs".to_owned()]).is_none());
        assert!(parse_github_dir_url(&[]).is_none());
    }
}
