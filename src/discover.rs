//! Markdown file discovery.
//!
//! Directories are walked recursively and every file whose *name contains*
//! the configured pattern is selected. The match is a substring test, so with
//! the default `.md` pattern `notes.mdx` and `readme.md.bak` are picked up too.

use std::path::{Component, Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::config::Config;

/// Check whether a file name qualifies for processing
#[must_use]
pub fn matches_name(path: &Path, name_pattern: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().contains(name_pattern))
}

/// Compile exclude globs, dropping (and logging) invalid ones
#[must_use]
pub fn compile_excludes(patterns: &[String]) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                log::warn!("Ignoring invalid exclude pattern '{p}': {e}");
                None
            }
        })
        .collect()
}

/// Check if a path matches any exclusion pattern
#[must_use]
pub fn is_excluded(path: &Path, patterns: &[Pattern]) -> bool {
    if patterns.is_empty() {
        return false;
    }

    let path_str = path.to_string_lossy();

    for pattern in patterns {
        // Full path
        if pattern.matches(&path_str) {
            return true;
        }

        // Any single component, which also covers the file name
        for component in path.components() {
            if let Component::Normal(c) = component {
                if pattern.matches(&c.to_string_lossy()) {
                    return true;
                }
            }
        }
    }

    false
}

/// Collect all files to process under the given roots
///
/// Explicit file roots are taken as-is (subject to excludes). Directory roots
/// are walked recursively in file-name order. Roots that do not exist yield
/// nothing.
#[must_use]
pub fn collect_files(roots: &[PathBuf], config: &Config) -> Vec<PathBuf> {
    let exclude_patterns = compile_excludes(&config.exclude);
    let mut files = Vec::new();

    for root in roots {
        if root.is_file() {
            if !is_excluded(root, &exclude_patterns) {
                files.push(root.clone());
            }
        } else if root.is_dir() {
            for entry in WalkDir::new(root).sort_by_file_name() {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        log::debug!("Skipping unreadable entry: {e}");
                        continue;
                    }
                };
                let path = entry.path();
                if path.is_file()
                    && matches_name(path, &config.name_pattern)
                    && !is_excluded(path, &exclude_patterns)
                {
                    files.push(path.to_path_buf());
                }
            }
        } else {
            log::debug!("Root {} does not exist, nothing to do", root.display());
        }
    }

    files
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_matches_name_is_substring() {
        assert!(matches_name(Path::new("docs/a.md"), ".md"));
        assert!(matches_name(Path::new("notes.mdx"), ".md"));
        assert!(matches_name(Path::new("readme.md.bak"), ".md"));
        assert!(!matches_name(Path::new("readme.txt"), ".md"));
        assert!(!matches_name(Path::new("md/readme"), ".md"));
    }

    #[test]
    fn test_collect_recursive_substring_match() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("a.md"));
        touch(&root.join("notes.mdx"));
        touch(&root.join("sub/deeper/readme.md.bak"));
        touch(&root.join("sub/code.rs"));

        let files = collect_files(&[root.to_path_buf()], &Config::default());
        assert_eq!(
            files,
            vec![
                root.join("a.md"),
                root.join("notes.mdx"),
                root.join("sub/deeper/readme.md.bak"),
            ]
        );
    }

    #[test]
    fn test_directories_are_never_selected() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("guide.md")).unwrap();
        touch(&root.join("guide.md/page.md"));

        let files = collect_files(&[root.to_path_buf()], &Config::default());
        assert_eq!(files, vec![root.join("guide.md/page.md")]);
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let files = collect_files(&[dir.path().join("docs")], &Config::default());
        assert!(files.is_empty());
    }

    #[test]
    fn test_explicit_file_ignores_name_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("api.txt");
        touch(&file);

        let files = collect_files(&[file.clone()], &Config::default());
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_exclude_patterns() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("keep.md"));
        touch(&root.join("vendor/skip.md"));
        touch(&root.join("CHANGELOG.md"));

        let config = Config {
            exclude: vec!["vendor".to_string(), "CHANGELOG*".to_string()],
            ..Default::default()
        };
        let files = collect_files(&[root.to_path_buf()], &config);
        assert_eq!(files, vec![root.join("keep.md")]);
    }

    #[test]
    fn test_invalid_exclude_pattern_dropped() {
        let patterns = compile_excludes(&["[".to_string(), "*.bak".to_string()]);
        assert_eq!(patterns.len(), 1);
        assert!(is_excluded(Path::new("x/readme.md.bak"), &patterns));
    }
}
