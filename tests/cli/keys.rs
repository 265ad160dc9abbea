use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

fn key_names(content: &str) -> Result<Vec<String>> {
    let parsed: Value = serde_json::from_str(content)?;
    Ok(parsed
        .as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default())
}

#[test]
fn test_keys_writes_default_key_map() -> Result<()> {
    let test = CliTest::with_project()?;

    let (code, stdout, stderr) = run(test.keys_command().arg("index.d.ts"))?;
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Wrote 4 keys from 2 files to ./i18n/keys.json"));
    assert!(stderr.is_empty());

    let content = test.read_file("i18n/keys.json")?;
    assert_eq!(
        key_names(&content)?,
        vec![
            "index-d-ts.foo.text0",
            "index-d-ts.foo.v1.text0",
            "type.shapes-d-ts.shape.text0",
            "type.shapes-d-ts.shape.count.text0",
        ]
    );
    assert!(content.contains("    \"index-d-ts.foo.text0\": \"\""));

    Ok(())
}

#[test]
fn test_keys_output_flag() -> Result<()> {
    let test = CliTest::with_project()?;

    let (code, _, _) = run(test.keys_command().args(["index.d.ts", "-o", "out/en.json"]))?;
    assert_eq!(code, 0);
    assert!(test.root().join("out/en.json").exists());
    assert!(!test.root().join("i18n/keys.json").exists());

    Ok(())
}

#[test]
fn test_keys_merge_keeps_translations() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        "zh.json",
        r#"{
    "index-d-ts.foo.text0": "",
    "index-d-ts.foo.v1.text0": "第一个值",
    "index-d-ts.gone.text0": "removed"
}
"#,
    )?;

    let (code, stdout, _) = run(test.keys_command().args(["index.d.ts", "-o", "zh.json", "--merge"]))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("(1 translation kept)"));

    let content = test.read_file("zh.json")?;
    let parsed: Value = serde_json::from_str(&content)?;
    assert_eq!(parsed["index-d-ts.foo.v1.text0"], "第一个值");
    assert_eq!(parsed["index-d-ts.foo.text0"], "");
    assert!(parsed.get("index-d-ts.gone.text0").is_none());

    Ok(())
}

#[test]
fn test_keys_respects_ignores() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(".dtsi18nrc.json", r#"{ "ignores": ["type/**"] }"#)?;

    let (code, stdout, stderr) = run(test.keys_command().args(["index.d.ts", "-v"]))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Wrote 2 keys from 1 file"));
    assert!(stderr.contains("Note: Ignored"));

    Ok(())
}

#[test]
fn test_unknown_tag_is_a_warning() -> Result<()> {
    let test = CliTest::with_file(
        "index.d.ts",
        "/**\n * Value.\n * @since 1.0\n */\ndeclare const v: number;\n",
    )?;

    let (code, _, stderr) = run(test.keys_command().arg("index.d.ts"))?;
    assert_eq!(code, 0);
    assert!(stderr.contains("warning: unknown doc tag '@since'  unknown-tag"));
    assert!(stderr.contains("1 problem (0 errors, 1 warning)"));

    let (code, _, _) = run(test.keys_command().args(["index.d.ts", "--deny-warnings"]))?;
    assert_eq!(code, 1);

    Ok(())
}

#[test]
fn test_parse_error_exits_with_error() -> Result<()> {
    let test = CliTest::with_file("index.d.ts", "declare namespace {\n")?;

    let (code, _, stderr) = run(test.keys_command().arg("index.d.ts"))?;
    assert_eq!(code, 2);
    assert!(stderr.starts_with("Error: "));
    assert!(!test.root().join("i18n/keys.json").exists());

    Ok(())
}

#[test]
fn test_missing_entry_exits_with_error() -> Result<()> {
    let test = CliTest::new()?;

    let (code, _, stderr) = run(test.keys_command().arg("missing.d.ts"))?;
    assert_eq!(code, 2);
    assert!(stderr.contains("missing.d.ts"));

    Ok(())
}
