use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_ast_prints_json() -> Result<()> {
    let test = CliTest::with_file("index.d.ts", "declare const v: number;\n")?;

    let (code, stdout, _) = run(test.ast_command().arg("index.d.ts"))?;
    assert_eq!(code, 0);
    let parsed: Value = serde_json::from_str(&stdout)?;
    assert!(parsed.is_object());
    assert!(stdout.contains("\"root\""));

    Ok(())
}

#[test]
fn test_ast_to_file() -> Result<()> {
    let test = CliTest::with_project()?;

    let (code, stdout, _) = run(test.ast_command().args(["index.d.ts", "-o", "ast.json"]))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("to ast.json"));
    let content = test.read_file("ast.json")?;
    let _: Value = serde_json::from_str(&content)?;

    Ok(())
}
