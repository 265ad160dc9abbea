use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod ast;
mod init;
mod keys;
mod render;

const BIN_NAME: &str = "dts-i18n";

/// Entry file shared by most tests.
pub const INDEX_DTS: &str = r#"/// <reference path="./type/shapes.d.ts" />

/**
 * Utilities.
 */
declare namespace Foo {
    /**
     * The first value.
     */
    let v1: number;
}
"#;

pub const SHAPES_DTS: &str = r#"/** A shape. */
declare class Shape {
    count: number;
}
"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    /// A project with `index.d.ts` referencing `type/shapes.d.ts`.
    pub fn with_project() -> Result<Self> {
        let test = Self::with_file("index.d.ts", INDEX_DTS)?;
        test.write_file("type/shapes.d.ts", SHAPES_DTS)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn keys_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("keys");
        cmd
    }

    pub fn render_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("render");
        cmd
    }

    pub fn ast_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("ast");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// Run `cmd`, returning its exit code, stdout and stderr.
pub fn run(cmd: &mut Command) -> Result<(i32, String, String)> {
    let Output {
        status,
        stdout,
        stderr,
    } = cmd.output().context("Failed to run command")?;
    let code = status.code().context("Process terminated by a signal")?;
    Ok((
        code,
        String::from_utf8(stdout)?,
        String::from_utf8(stderr)?,
    ))
}
