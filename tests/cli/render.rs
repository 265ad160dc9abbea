use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const TRANSLATIONS: &str = r#"{
    "index-d-ts.foo.text0": "工具。",
    "index-d-ts.foo.v1.text0": "第一个值。"
}
"#;

#[test]
fn test_render_to_stdout() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file("zh.json", TRANSLATIONS)?;

    let (code, stdout, stderr) = run(test.render_command().args(["index.d.ts", "-k", "zh.json", "-l", "zh_cn"]))?;
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("// file: index-d-ts\n"));
    assert!(stdout.contains(
        "/**\n * 工具。\n */\ndeclare namespace Foo {\n    /**\n     * 第一个值。\n     */\n    let v1: number;\n}"
    ));
    // Keys without a translation are rendered as-is.
    assert!(stdout.contains(" * type.shapes-d-ts.shape.text0\n"));
    assert!(stdout.contains("// file: type.shapes-d-ts\n"));

    Ok(())
}

#[test]
fn test_render_to_file() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file("i18n/keys.json", TRANSLATIONS)?;

    let (code, stdout, _) = run(test.render_command().args(["index.d.ts", "-o", "dist/index.d.ts"]))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Rendered 2 files in 'en_us' to dist/index.d.ts"));

    let rendered = test.read_file("dist/index.d.ts")?;
    assert!(rendered.contains(" * 第一个值。\n"));

    Ok(())
}

#[test]
fn test_render_without_key_map_uses_keys() -> Result<()> {
    let test = CliTest::with_project()?;

    let (code, stdout, _) = run(test.render_command().arg("index.d.ts"))?;
    assert_eq!(code, 0);
    assert!(stdout.contains(" * index-d-ts.foo.v1.text0\n"));

    Ok(())
}

#[test]
fn test_render_missing_explicit_key_map() -> Result<()> {
    let test = CliTest::with_project()?;

    let (code, stdout, stderr) = run(test.render_command().args(["index.d.ts", "-k", "nope.json"]))?;
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("nope.json"));

    Ok(())
}

#[test]
fn test_render_uses_config_style() -> Result<()> {
    let test = CliTest::with_file(
        "index.d.ts",
        "declare namespace Foo {\n    let v1: number;\n}\n",
    )?;
    test.write_file(".dtsi18nrc.json", r#"{ "indentSize": 2 }"#)?;

    let (code, stdout, _) = run(test.render_command().arg("index.d.ts"))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("declare namespace Foo {\n  /**\n   * index-d-ts.foo.v1.text0\n   */\n  let v1: number;\n}"));

    Ok(())
}

#[test]
fn test_invalid_config_exits_with_error() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(".dtsi18nrc.json", r#"{ "indentSize": 0 }"#)?;

    let (code, _, stderr) = run(test.render_command().arg("index.d.ts"))?;
    assert_eq!(code, 2);
    assert!(stderr.starts_with("Error: "));

    Ok(())
}
