//! Path normalization helpers.
//!
//! All functions are pure and total: they never touch the file system and
//! never fail, whatever the input looks like.

/// Convert a windows-style path to posix separators.
///
/// Backslashes become forward slashes; drive letters and every other
/// character are preserved. Paths that are already posix come back
/// unchanged.
pub fn convert_path_to_posix(path: &str) -> String {
    path.replace('\\', "/")
}

/// Return the containing directory of a posix path, without a trailing
/// slash. A bare filename has an empty containing directory.
pub fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Resolve a relative reference against a base directory.
///
/// Leading `./` and `/` markers on the reference are stripped, then the
/// reference is joined below `base_dir` with posix separators. An empty
/// or `.` base directory yields the stripped reference itself.
pub fn resolve_relative(base_dir: &str, reference: &str) -> String {
    let mut reference = reference;
    while let Some(rest) = reference.strip_prefix("./") {
        reference = rest;
    }
    let reference = reference.trim_start_matches('/');

    if base_dir.is_empty() || base_dir == "." {
        reference.to_string()
    } else {
        format!("{}/{}", base_dir.trim_end_matches('/'), reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_windows_path() {
        assert_eq!(convert_path_to_posix("c:\\test\\path"), "c:/test/path");
    }

    #[test]
    fn test_posix_path_unchanged() {
        assert_eq!(convert_path_to_posix("./posix/path"), "./posix/path");
    }

    #[test]
    fn test_convert_output_has_no_backslashes() {
        let inputs = ["a\\b\\c.md", "C:\\Users\\me\\posts\\draft.md", "\\\\share\\dir"];
        for input in inputs {
            assert!(!convert_path_to_posix(input).contains('\\'));
        }
    }

    #[test]
    fn test_parent_dir_of_bare_filename() {
        assert_eq!(parent_dir("test.md"), "");
    }

    #[test]
    fn test_parent_dir_of_nested_path() {
        assert_eq!(parent_dir("posts/2024/test.md"), "posts/2024");
    }

    #[test]
    fn test_resolve_relative_with_empty_base() {
        assert_eq!(resolve_relative("", "image.png"), "image.png");
        assert_eq!(resolve_relative("", "./image.gif"), "image.gif");
        assert_eq!(resolve_relative("", "/image.png"), "image.png");
    }

    #[test]
    fn test_resolve_relative_with_base_dir() {
        assert_eq!(resolve_relative("posts", "local/image.jpg"), "posts/local/image.jpg");
        assert_eq!(resolve_relative("posts", "./cover.png"), "posts/cover.png");
    }

    #[test]
    fn test_resolve_relative_dot_base() {
        assert_eq!(resolve_relative(".", "image.png"), "image.png");
    }
}
