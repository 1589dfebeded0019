//! Path manipulation and validation utilities

/// Convert backslashes to forward slashes (for cross-platform compatibility)
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Canonicalize a user-supplied directory into a sparse-checkout path
///
/// Separators are rewritten to `/` first, then surrounding whitespace and
/// slashes are stripped together so that the result is a fixed point.
/// Returns `None` when nothing is left.
#[must_use]
pub fn normalize_directory(raw: &str) -> Option<String> {
    let separated = normalize_separators(raw);
    let trimmed = separated.trim_matches(|c: char| c == '/' || c.is_whitespace());

    if trimmed.is_empty() {
        return None;
    }

    Some(trimmed.to_owned())
}

/// Lexically clean a slash-separated path
///
/// Collapses repeated separators, drops `.` segments and resolves `..`
/// against preceding segments. A rooted path stays rooted and `..` cannot
/// climb above the root. An empty result is reported as `.`.
#[must_use]
pub fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !rooted {
                    // Keep leading '..' components
                    segments.push(segment);
                }
            }
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    if rooted {
        return format!("/{joined}");
    }
    if joined.is_empty() {
        return ".".to_owned();
    }
    joined
}

/// Parent directory of a slash-separated path, cleaned
///
/// A path without a separator has `.` as its parent.
#[must_use]
pub fn parent_dir(path: &str) -> String {
    let cleaned = clean_path(path);
    match cleaned.rfind('/') {
        Some(0) => "/".to_owned(),
        Some(index) => cleaned[..index].to_owned(),
        None => ".".to_owned(),
    }
}

/// Check whether a cleaned relative path climbs out of its base
#[must_use]
pub fn escapes_base(cleaned: &str) -> bool {
    cleaned == ".." || cleaned.starts_with("../")
}

/// Derive a local directory name from a repository URL
///
/// Takes the last `/` or `:` separated segment with any `.git` suffix removed,
/// so `git@host:owner/repo.git` and `https://host/owner/repo` both yield `repo`.
#[must_use]
pub fn repository_name(url: &str) -> Option<String> {
    let trimmed = url.trim();
    let without_suffix = trimmed.strip_suffix(".git").unwrap_or(trimmed);
    let name = without_suffix
        .rsplit(['/', ':'])
        .next()
        .unwrap_or_default();

    if name.is_empty() {
        return None;
    }

    Some(name.to_owned())
}
