use std::path::{Path, PathBuf};

/// Collapse runs of `/` and drop any trailing slash, as the server does before
/// verifying a signature.
pub fn squeeze_path(path: &str) -> String {
    let mut squeezed = String::with_capacity(path.len());
    let mut last_slash = false;
    for c in path.chars() {
        if c == '/' {
            if !last_slash {
                squeezed.push(c);
            }
            last_slash = true;
        } else {
            squeezed.push(c);
            last_slash = false;
        }
    }
    if squeezed.len() > 1 && squeezed.ends_with('/') {
        squeezed.pop();
    }
    if squeezed.is_empty() {
        squeezed.push('/');
    }
    squeezed
}

pub fn expand_string(val: &Option<String>) -> String {
    match *val {
        None => "".into(),
        Some(ref x) => x.to_owned(),
    }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Resolve `path` against `base` unless it is already absolute. A leading `~`
/// wins over `base`.
pub fn resolve_path(path: &str, base: Option<&Path>) -> PathBuf {
    let expanded = expand_home(path);
    match base {
        Some(base) if expanded.is_relative() => base.join(expanded),
        _ => expanded,
    }
}
