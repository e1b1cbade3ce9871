use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::ignore::{COLLAPSE_FILE, IGNORE_FILE, IgnoreRules};
use crate::fs::FileSystem;
use crate::models::FsEntry;

/// Names dropped from every listing before any ignore rules run.
pub const ALWAYS_SKIP: &[&str] = &[".git", "__pycache__", "node_modules"];

const CONNECTOR_MID: &str = "├── ";
const CONNECTOR_LAST: &str = "└── ";
const CONTINUE_BAR: &str = "│   ";
const CONTINUE_BLANK: &str = "    ";

/// Print the tree rooted at `root` to `out`.
///
/// Hide rules load from `.gitignore` in the root, collapse rules from
/// `.dtignore`. `max_depth` of `None` is unlimited; `Some(0)` prints the
/// root line and nothing else. Output streams line by line in sorted
/// pre-order; nothing is buffered into an intermediate tree.
pub fn print_tree<F: FileSystem>(
    fs: &F,
    out: &mut dyn Write,
    root: &Path,
    max_depth: Option<usize>,
) -> Result<()> {
    let root = std::path::absolute(root)
        .with_context(|| format!("cannot resolve {}", root.display()))?;
    let ignore = IgnoreRules::load(&root, IGNORE_FILE)?;
    let collapse = IgnoreRules::load(&root, COLLAPSE_FILE)?;

    let name = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    writeln!(out, "{name}/")?;

    let walk = Walk {
        fs,
        max_depth,
        ignore,
        collapse,
    };
    walk.walk(out, &root, "", 0)
}

/// Read-only traversal context; per-directory state (path, prefix, depth)
/// stays in call parameters.
struct Walk<'a, F: FileSystem> {
    fs: &'a F,
    max_depth: Option<usize>,
    ignore: IgnoreRules,
    collapse: IgnoreRules,
}

impl<F: FileSystem> Walk<'_, F> {
    fn walk(&self, out: &mut dyn Write, dir: &Path, prefix: &str, depth: usize) -> Result<()> {
        if let Some(max) = self.max_depth
            && depth >= max
        {
            return Ok(());
        }

        let entries = match self.fs.read_dir(dir) {
            Ok(entries) => entries,
            // A directory we may not list was already printed by the
            // caller; it just shows no children.
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => return Ok(()),
            Err(err) => {
                return Err(err).with_context(|| format!("cannot list {}", dir.display()));
            }
        };

        let mut entries: Vec<(String, FsEntry)> = entries
            .into_iter()
            .filter(|entry| {
                !ALWAYS_SKIP.contains(&entry.name.as_str())
                    && !self.ignore.matches(&entry.path, entry.is_dir)
            })
            .map(|entry| (entry.name.to_lowercase(), entry))
            .collect();

        // Directories before files; case-insensitive within each group,
        // original name breaking lowercase ties so the order is total.
        entries.sort_by(|(key_a, a), (key_b, b)| {
            b.is_dir
                .cmp(&a.is_dir)
                .then_with(|| key_a.cmp(key_b))
                .then_with(|| a.name.cmp(&b.name))
        });

        let count = entries.len();
        for (index, (_, entry)) in entries.into_iter().enumerate() {
            let is_last = index + 1 == count;
            let connector = if is_last { CONNECTOR_LAST } else { CONNECTOR_MID };
            let suffix = if entry.is_dir { "/" } else { "" };
            writeln!(out, "{prefix}{connector}{}{suffix}", entry.name)?;

            // A collapsed directory keeps its line but is never listed.
            if entry.is_dir && !self.collapse.matches(&entry.path, true) {
                let continuation = if is_last { CONTINUE_BLANK } else { CONTINUE_BAR };
                self.walk(out, &entry.path, &format!("{prefix}{continuation}"), depth + 1)?;
            }
        }

        Ok(())
    }
}
