use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command().arg("init"))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Created .dtsi18nrc.json"));

    let content = test.read_file(".dtsi18nrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["indentSize"], 4);
    assert_eq!(parsed["language"], "en_us");
    assert_eq!(parsed["keysFile"], "./i18n/keys.json");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".dtsi18nrc.json", "{}")?;

    let (code, _, stderr) = run(test.command().arg("init"))?;
    assert_eq!(code, 1);
    assert!(stderr.contains(".dtsi18nrc.json already exists, leaving it unchanged"));
    assert_eq!(test.read_file(".dtsi18nrc.json")?, "{}");

    Ok(())
}
