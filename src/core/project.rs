//! Loading a declaration project: the entry file plus everything it
//! references, built into one tree.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use swc_common::SourceMap;

use crate::core::model::{DeclTree, Node, NodeData, TreeBuilder};
use crate::core::parsers::{
    build_source_file, discover_files, parse_dts_source, relative_path, source_file_name,
};
use crate::issues::Issue;

/// Name of the synthetic root node. Never part of a key.
pub const ROOT_NAME: &str = "root";

/// One file to build: its node name, the path shown in reports and its text.
#[derive(Debug, Clone)]
pub struct SourceInput {
    pub name: String,
    pub display_path: String,
    pub code: String,
}

impl SourceInput {
    pub fn new(
        name: impl Into<String>,
        display_path: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            display_path: display_path.into(),
            code: code.into(),
        }
    }
}

#[derive(Debug)]
pub struct Project {
    pub tree: DeclTree,
    /// Files the tree was built from, in build order.
    pub files: Vec<PathBuf>,
    /// Referenced files skipped by ignore patterns.
    pub ignored: Vec<PathBuf>,
    pub issues: Vec<Issue>,
}

impl Project {
    /// Load `entry` and every file it references.
    pub fn load(entry: &Path, ignores: &[String]) -> Result<Self> {
        let discovered = discover_files(entry, ignores)?;
        let base_dir = discovered
            .entry
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let shown_dir = entry.parent().unwrap_or(Path::new(""));

        let mut inputs = Vec::with_capacity(discovered.files.len());
        for file in &discovered.files {
            let code = fs::read_to_string(file)
                .with_context(|| format!("Failed to read declaration file: {:?}", file))?;
            let display_path = shown_dir
                .join(relative_path(&base_dir, file))
                .to_string_lossy()
                .into_owned();
            inputs.push(SourceInput::new(
                source_file_name(&base_dir, file),
                display_path,
                code,
            ));
        }

        let (tree, issues) = build_tree(inputs)?;
        Ok(Self {
            tree,
            files: discovered.files,
            ignored: discovered.ignored,
            issues,
        })
    }
}

/// Parse every input and assemble `Root -> SourceFile* -> declarations`.
pub fn build_tree(inputs: Vec<SourceInput>) -> Result<(DeclTree, Vec<Issue>)> {
    let source_map = Arc::new(SourceMap::default());
    let mut builder = TreeBuilder::new();
    let mut children = Vec::with_capacity(inputs.len());
    let mut issues = Vec::new();

    for input in inputs {
        let parsed = parse_dts_source(input.code, &input.display_path, source_map.clone())?;
        let (id, file_issues) =
            build_source_file(&parsed, &input.display_path, &input.name, &mut builder);
        children.push(id);
        issues.extend(file_issues);
    }

    let root = builder.add(Node::new(ROOT_NAME, None, NodeData::Root { children }));
    let tree = builder.finish(root)?;
    Ok((tree, issues))
}
