use crate::error::{AppError, Result};
use globset::{GlobBuilder, GlobMatcher};
use std::fs;
use std::path::{Component, Path};

/// A single parsed gitignore-style rule.
///
/// Rules are immutable once parsed. Matching semantics follow the `.gitignore`
/// conventions: `*`, `?` and `[...]` never cross a `/` boundary, `**` may,
/// unanchored patterns match their basename at any depth, and anchored
/// patterns only match relative to the walk root.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    negated: bool,
    anchored: bool,
    dir_only: bool,
    matcher: GlobMatcher,
}

impl Pattern {
    /// Parses one line from an ignore file.
    ///
    /// Returns `Ok(None)` for blank lines, comments and patterns the glob
    /// compiler rejects (best effort, logged). A line ending in a bare
    /// backslash is a malformed escape and fails hard.
    fn parse(line: &str) -> Result<Option<Pattern>> {
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            return Ok(None);
        }

        let trailing_backslashes = text.len() - text.trim_end_matches('\\').len();
        if trailing_backslashes % 2 == 1 {
            return Err(AppError::PatternSyntax(format!(
                "Malformed escape at end of pattern \"{}\"",
                text
            )));
        }

        // A leading `!` negates; `\!` and `\#` stay in the glob text where the
        // backslash escape keeps them literal.
        let (negated, body) = match text.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (dir_only, body) = match body.strip_suffix('/') {
            Some(rest) if !rest.ends_with('\\') => (true, rest),
            _ => (false, body),
        };

        let (leading_slash, body) = match body.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (false, body),
        };
        let anchored = leading_slash || body.contains('/');

        if body.is_empty() {
            return Ok(None);
        }

        let glob_text = if anchored {
            body.to_string()
        } else {
            format!("**/{}", body)
        };

        let glob = match GlobBuilder::new(&glob_text)
            .literal_separator(true)
            .backslash_escape(true)
            .build()
        {
            Ok(glob) => glob,
            Err(e) => {
                log::warn!("Skipping unsupported ignore pattern \"{}\": {}", text, e);
                return Ok(None);
            }
        };

        log::trace!(
            "Parsed pattern \"{}\" (negated: {}, anchored: {}, dir_only: {}, glob: \"{}\")",
            text,
            negated,
            anchored,
            dir_only,
            glob_text
        );

        Ok(Some(Pattern {
            raw: text.to_string(),
            negated,
            anchored,
            dir_only,
            matcher: glob.compile_matcher(),
        }))
    }

    fn matches(&self, rel_path: &str, is_dir: bool) -> bool {
        if self.dir_only && !is_dir {
            return false;
        }
        self.matcher.is_match(rel_path)
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    pub fn is_dir_only(&self) -> bool {
        self.dir_only
    }
}

/// An ordered rule set assembled from one or more pattern sources.
///
/// Later patterns override earlier ones for the same path (last-match-wins).
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    pub fn compile<I, S>(lines: I) -> Result<PatternSet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        for line in lines {
            if let Some(pattern) = Pattern::parse(line.as_ref())? {
                patterns.push(pattern);
            }
        }
        log::debug!("Compiled pattern set with {} rules", patterns.len());
        Ok(PatternSet { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Final ignored/not-ignored verdict for one path, without considering
    /// its ancestors. `None` means no rule matched at all.
    fn verdict(&self, rel_path: &str, is_dir: bool) -> Option<bool> {
        let mut state = None;
        for pattern in &self.patterns {
            if pattern.matches(rel_path, is_dir) {
                state = Some(!pattern.negated);
            }
        }
        state
    }

    /// Whether `rel_path` (relative to the walk root) is excluded.
    ///
    /// Evaluates the path itself and every ancestor directory: once a
    /// directory's final verdict is "excluded", nothing below it can be
    /// re-included by a later negation on a descendant.
    pub fn is_ignored(&self, rel_path: &Path, is_dir: bool) -> bool {
        if self.patterns.is_empty() {
            return false;
        }

        let components: Vec<&str> = rel_path
            .components()
            .filter_map(|c| match c {
                Component::Normal(name) => name.to_str(),
                _ => None,
            })
            .collect();

        let mut prefix = String::new();
        for (i, component) in components.iter().enumerate() {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(component);

            let prefix_is_dir = i + 1 < components.len() || is_dir;
            if self.verdict(&prefix, prefix_is_dir) == Some(true) {
                log::trace!("Path {} excluded at prefix {}", rel_path.display(), prefix);
                return true;
            }
        }
        false
    }
}

/// Builds the effective [`PatternSet`] for a walk root from the configured
/// ignore files plus the explicit default-ignore list.
///
/// A missing ignore file contributes zero patterns; a present but unreadable
/// one is a fatal initialization error. The defaults are appended after all
/// file-sourced lines, mirroring how they were layered originally.
pub fn build_path_specification(
    root: &Path,
    ignore_file_names: &[String],
    default_ignores: &[String],
    use_default_ignores: bool,
) -> Result<PatternSet> {
    let mut lines: Vec<String> = Vec::new();

    for name in ignore_file_names {
        let path = root.join(name);
        if !path.exists() {
            log::debug!("Ignore file {} not present, skipping", path.display());
            continue;
        }
        let content = fs::read_to_string(&path).map_err(|source| AppError::FileRead {
            path: path.clone(),
            source,
        })?;
        log::info!("Loaded ignore patterns from {}", path.display());
        lines.extend(content.lines().map(String::from));
    }

    for default in default_ignores {
        if !lines.iter().any(|line| line.trim() == default) && root.join(default).exists() {
            log::warn!(
                "`{}` exists in `{}` but no ignore file covers it",
                default,
                root.display()
            );
        }
        if use_default_ignores {
            log::debug!("Appending default ignore `{}`", default);
            lines.push(default.clone());
        }
    }

    log::debug!("Path specification lines: {:?}", lines);
    PatternSet::compile(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(lines: &[&str]) -> PatternSet {
        PatternSet::compile(lines.iter().copied()).unwrap()
    }

    fn ignored_file(set: &PatternSet, path: &str) -> bool {
        set.is_ignored(Path::new(path), false)
    }

    #[test]
    fn blank_lines_and_comments_are_skipped() {
        let set = set(&["", "   ", "# a comment", "*.log"]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn escaped_hash_is_a_literal_pattern() {
        let set = set(&["\\#notes"]);
        assert_eq!(set.len(), 1);
        assert!(ignored_file(&set, "#notes"));
        assert!(!ignored_file(&set, "notes"));
    }

    #[test]
    fn escaped_bang_is_not_a_negation() {
        let set = set(&["\\!important"]);
        assert!(ignored_file(&set, "!important"));
    }

    #[test]
    fn trailing_backslash_is_a_syntax_error() {
        assert!(matches!(
            PatternSet::compile(["foo\\"]),
            Err(AppError::PatternSyntax(_))
        ));
    }

    #[test]
    fn basename_pattern_matches_at_any_depth() {
        let set = set(&["build-anywhere"]);
        assert!(ignored_file(&set, "build-anywhere"));
        assert!(ignored_file(&set, "src/build-anywhere"));
        assert!(ignored_file(&set, "src/deep/build-anywhere/file.txt"));
    }

    #[test]
    fn leading_slash_anchors_to_root() {
        let set = set(&["/build"]);
        assert!(ignored_file(&set, "build"));
        assert!(ignored_file(&set, "build/x.txt"));
        assert!(!ignored_file(&set, "src/build"));
        assert!(!ignored_file(&set, "src/build/x.txt"));
    }

    #[test]
    fn internal_slash_anchors_to_root() {
        let set = set(&["src/*.log"]);
        assert!(ignored_file(&set, "src/x.log"));
        assert!(!ignored_file(&set, "src/sub/x.log"));
        assert!(!ignored_file(&set, "other/src/x.log"));
    }

    #[test]
    fn star_does_not_cross_directories() {
        let set = set(&["/a*b"]);
        assert!(ignored_file(&set, "axxb"));
        assert!(!ignored_file(&set, "a/b"));
    }

    #[test]
    fn double_star_crosses_directories() {
        let set = set(&["docs/**/draft.md"]);
        assert!(ignored_file(&set, "docs/draft.md"));
        assert!(ignored_file(&set, "docs/a/b/draft.md"));
        assert!(!ignored_file(&set, "other/draft.md"));
    }

    #[test]
    fn bracket_classes_are_supported() {
        let set = set(&["file[0-2].txt"]);
        assert!(ignored_file(&set, "file1.txt"));
        assert!(!ignored_file(&set, "file9.txt"));
    }

    #[test]
    fn directory_only_pattern_ignores_directories_and_contents() {
        let set = set(&["target/"]);
        assert!(set.is_ignored(Path::new("target"), true));
        assert!(ignored_file(&set, "target/debug/app"));
        // A plain file with the same name is not a directory match.
        assert!(!set.is_ignored(Path::new("target"), false));
    }

    #[test]
    fn negation_re_includes_a_file() {
        let set = set(&["*.log", "!keep.log"]);
        assert!(ignored_file(&set, "a.log"));
        assert!(!ignored_file(&set, "keep.log"));
        assert!(!ignored_file(&set, "b.txt"));
    }

    #[test]
    fn negation_cannot_rescue_files_inside_an_ignored_directory() {
        let set = set(&["logs/", "!logs/keep.txt"]);
        assert!(ignored_file(&set, "logs/keep.txt"));
        assert!(ignored_file(&set, "logs/drop.txt"));
    }

    #[test]
    fn negating_the_directory_itself_re_includes_descendants() {
        let set = set(&["build*", "!build"]);
        assert!(ignored_file(&set, "build-cache/x"));
        assert!(!ignored_file(&set, "build/x"));
    }

    #[test]
    fn last_match_wins_in_declaration_order() {
        let set = set(&["!keep.log", "*.log"]);
        // The negation comes first, so the later exclude wins.
        assert!(ignored_file(&set, "keep.log"));
    }

    #[test]
    fn unsupported_glob_is_skipped_not_fatal() {
        let set = set(&["[unclosed", "*.log"]);
        assert_eq!(set.len(), 1);
        assert!(ignored_file(&set, "a.log"));
    }

    #[test]
    fn empty_set_ignores_nothing() {
        let set = PatternSet::default();
        assert!(!ignored_file(&set, "anything/at/all.txt"));
    }

    #[test]
    fn build_path_specification_appends_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        std::fs::write(dir.path().join(".gitignore"), "*.log\n").unwrap();

        let spec = build_path_specification(
            dir.path(),
            &[".gitignore".to_string()],
            &[".git".to_string()],
            true,
        )
        .unwrap();
        assert!(spec.is_ignored(Path::new(".git"), true));
        assert!(spec.is_ignored(Path::new("a.log"), false));
    }

    #[test]
    fn missing_ignore_file_contributes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let spec =
            build_path_specification(dir.path(), &[".gitignore".to_string()], &[], true).unwrap();
        assert!(spec.is_empty());
    }
}
