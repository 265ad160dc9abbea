//! File discovery through `/// <reference path="..." />` directives.

use std::{
    collections::BTreeSet,
    fs,
    path::{Component, Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result};
use glob::Pattern;
use regex::Regex;

static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"///\s*<reference\s+path="(.+)"\s*/>"#).expect("valid reference regex")
});

/// Paths named by reference directives in `source`, as written.
pub fn reference_paths(source: &str) -> Vec<String> {
    REFERENCE_RE
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|path| path.as_str().to_string())
        .collect()
}

/// Result of following references from an entry file.
#[derive(Debug, Default)]
pub struct DiscoveredFiles {
    /// Absolute, normalized path of the entry file.
    pub entry: PathBuf,
    /// The entry and every file it reaches, sorted, each listed once.
    pub files: Vec<PathBuf>,
    /// Referenced files left out because they match an ignore pattern.
    pub ignored: Vec<PathBuf>,
}

/// Follow reference directives from `entry`, recursively.
///
/// Paths are resolved against the referencing file's directory and made
/// absolute. Files whose path relative to the entry's directory matches one
/// of `ignores` are skipped along with everything only they reference. The
/// entry itself is never ignored.
pub fn discover_files(entry: &Path, ignores: &[String]) -> Result<DiscoveredFiles> {
    let patterns = ignores
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).with_context(|| format!("Invalid ignore pattern: {}", pattern))
        })
        .collect::<Result<Vec<_>>>()?;

    let entry = absolute(entry)?;
    let base_dir = entry.parent().map(Path::to_path_buf).unwrap_or_default();

    let mut seen = BTreeSet::new();
    let mut ignored = BTreeSet::new();
    seen.insert(entry.clone());
    let mut pending = vec![entry.clone()];

    while let Some(file) = pending.pop() {
        let source = fs::read_to_string(&file)
            .with_context(|| format!("Failed to read declaration file: {:?}", file))?;
        let dir = file.parent().map(Path::to_path_buf).unwrap_or_default();

        for reference in reference_paths(&source) {
            let target = normalize(&dir.join(&reference));
            if seen.contains(&target) || ignored.contains(&target) {
                continue;
            }
            let relative = relative_path(&base_dir, &target);
            if patterns.iter().any(|pattern| pattern.matches(&relative)) {
                ignored.insert(target);
                continue;
            }
            seen.insert(target.clone());
            pending.push(target);
        }
    }

    Ok(DiscoveredFiles {
        entry,
        files: seen.into_iter().collect(),
        ignored: ignored.into_iter().collect(),
    })
}

/// Node name of a source file: its path relative to the entry's directory,
/// with `../` spelled `#`, directories joined by `/` and followed by `.`,
/// and dots in the file name turned into `-`.
///
/// `source.d.ts` -> `source-d-ts`, `type/extra.d.ts` -> `type.extra-d-ts`,
/// `../shared/a.d.ts` -> `#shared.a-d-ts`.
pub fn source_file_name(base_dir: &Path, file: &Path) -> String {
    let relative = relative_path(base_dir, file);
    let (dir, base) = match relative.rsplit_once('/') {
        Some((dir, base)) => (dir.to_string(), base),
        None => (String::new(), relative.as_str()),
    };
    let dir = format!("{}/", dir).replace("../", "#");
    let dir = dir.trim_end_matches('/');
    let base = base.replace('.', "-");
    if dir.is_empty() {
        base
    } else {
        format!("{}.{}", dir, base)
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    let path = std::path::absolute(path)
        .with_context(|| format!("Failed to resolve path: {:?}", path))?;
    Ok(normalize(&path))
}

/// Resolve `.` and `..` lexically, without touching the file system.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// `/`-separated path of `target` relative to `base`, with `..` segments
/// where `target` lies outside `base`.
pub fn relative_path(base: &Path, target: &Path) -> String {
    let base: Vec<Component> = base.components().collect();
    let target: Vec<Component> = target.components().collect();
    let common = base
        .iter()
        .zip(&target)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = vec!["..".to_string(); base.len() - common];
    parts.extend(
        target[common..]
            .iter()
            .map(|component| component.as_os_str().to_string_lossy().into_owned()),
    );
    parts.join("/")
}
