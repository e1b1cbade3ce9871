use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;

/// File whose rules hide matching entries from the tree entirely.
pub const IGNORE_FILE: &str = ".gitignore";

/// File whose rules print matching directories but suppress their contents.
pub const COLLAPSE_FILE: &str = ".dtignore";

/// A single rule parsed from an ignore file.
///
/// Wildcard rules compile to an anchored regex once at load time; rules
/// without wildcards match by plain string equality.
#[derive(Debug)]
struct Pattern {
    text: String,
    dir_only: bool,
    anchored: bool,
    glob: Option<Regex>,
}

impl Pattern {
    fn matches(&self, candidate: &str) -> bool {
        match &self.glob {
            Some(regex) => regex.is_match(candidate),
            None => candidate == self.text,
        }
    }
}

/// Ordered ignore rules loaded from one file in the root directory.
///
/// The syntax is a simplified gitignore dialect: one glob per line
/// (`*`, `?` and `[...]` classes), `#` comments and blank lines skipped,
/// a trailing `/` restricting the rule to directories, and an internal
/// `/` anchoring the rule to the path relative to the root instead of the
/// basename. Evaluation is first-match-wins over the file order; `!`
/// re-inclusion lines are dropped rather than honored, so a match is
/// always final.
#[derive(Debug)]
pub struct IgnoreRules {
    root: PathBuf,
    patterns: Vec<Pattern>,
}

impl IgnoreRules {
    /// Load rules from `file_name` directly inside `root`.
    ///
    /// A missing rule file is not an error; it yields a matcher that
    /// excludes nothing. An unreadable or non-UTF-8 file is.
    pub fn load(root: &Path, file_name: &str) -> Result<Self> {
        let path = root.join(file_name);
        if !path.is_file() {
            return Self::parse(root, "");
        }
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        Self::parse(root, &text)
    }

    /// Parse rule lines against a root directory.
    ///
    /// `root` may be relative; matching always happens against the
    /// resolved absolute form.
    pub fn parse(root: &Path, text: &str) -> Result<Self> {
        let root = std::path::absolute(root)
            .with_context(|| format!("cannot resolve {}", root.display()))?;

        let mut patterns = Vec::new();
        for line in text.lines() {
            let line = line.trim_end();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            // Exactly one trailing separator marks a directory-only rule.
            let (text, dir_only) = match line.strip_suffix('/') {
                Some(stripped) => (stripped, true),
                None => (line, false),
            };
            let anchored = text.contains('/');

            let glob = if text.contains('*') || text.contains('?') || text.contains('[') {
                let regex = Regex::new(&glob_to_regex(text))
                    .with_context(|| format!("invalid ignore pattern `{line}`"))?;
                Some(regex)
            } else {
                None
            };

            patterns.push(Pattern {
                text: text.to_owned(),
                dir_only,
                anchored,
                glob,
            });
        }

        Ok(Self { root, patterns })
    }

    /// Whether `path` is excluded by these rules.
    ///
    /// Anchored rules run against the slash-joined path relative to the
    /// root, everything else against the basename. Directory-only rules
    /// never match files.
    pub fn matches(&self, path: &Path, is_dir: bool) -> bool {
        let rel = relative_to(path, &self.root);
        let name = match rel.rfind('/') {
            Some(index) => &rel[index + 1..],
            None => rel.as_str(),
        };

        for pattern in &self.patterns {
            if pattern.dir_only && !is_dir {
                continue;
            }
            let candidate = if pattern.anchored { rel.as_str() } else { name };
            if pattern.matches(candidate) {
                return true;
            }
        }
        false
    }
}

/// Path relative to `root`, joined with forward slashes on every platform.
fn relative_to(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let segments: Vec<_> = rel
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect();
    segments.join("/")
}

/// Convert a shell glob to an anchored regex.
///
/// `*` matches any sequence (including separators in an anchored
/// candidate), `?` any single character, and `[...]` one character from a
/// class, with `!` negation and `-` ranges. An unterminated class matches
/// a literal `[`.
fn glob_to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut regex = String::with_capacity(pattern.len() * 2 + 6);
    regex.push_str("(?s)^");

    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => regex.push_str(".*"),
            '?' => regex.push('.'),
            '[' => {
                // A `]` directly after `[` or `[!` is class content, not
                // the terminator.
                let mut j = i + 1;
                if j < chars.len() && chars[j] == '!' {
                    j += 1;
                }
                if j < chars.len() && chars[j] == ']' {
                    j += 1;
                }
                while j < chars.len() && chars[j] != ']' {
                    j += 1;
                }
                if j == chars.len() {
                    regex.push_str(r"\[");
                } else {
                    push_class(&mut regex, &chars[i + 1..j]);
                    i = j;
                }
            }
            // Escape regex special characters
            '.' | '+' | '(' | ')' | ']' | '{' | '}' | '^' | '$' | '\\' | '|' => {
                regex.push('\\');
                regex.push(chars[i]);
            }
            c => regex.push(c),
        }
        i += 1;
    }

    regex.push('$');
    regex
}

/// Append one `[...]` class, mapping `!` negation to `^` and escaping
/// everything the regex engine treats specially inside a class.
fn push_class(regex: &mut String, inner: &[char]) {
    regex.push('[');
    let mut rest = inner;
    if let Some((&'!', tail)) = rest.split_first() {
        regex.push('^');
        rest = tail;
    }
    for &c in rest {
        match c {
            '\\' | '[' | ']' | '^' | '&' | '~' | '|' => {
                regex.push('\\');
                regex.push(c);
            }
            _ => regex.push(c),
        }
    }
    regex.push(']');
}
