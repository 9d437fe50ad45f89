use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (output, stdout, _) = run(test.command().arg("init"))?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout, "\u{2713} Created .catgenrc.json\n");

    let content = test.read_file(".catgenrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["bundles"], "./bundles.json");
    assert_eq!(parsed["languages"], "./language_info.json");
    assert_eq!(parsed["localeDataFolder"], "./locale");
    assert_eq!(parsed["defaultLocale"], "en");
    assert_eq!(
        parsed["ignores"],
        serde_json::json!(["**/node_modules/**", "**/static/**"])
    );

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".catgenrc.json", "{}")?;

    let (output, _, stderr) = run(test.command().arg("init"))?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr, "Error: .catgenrc.json already exists\n");
    assert_eq!(test.read_file(".catgenrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_in_root_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("web/.keep", "")?;

    let (output, stdout, _) = run(test.command().args(["init", "--root", "web"]))?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout, "\u{2713} Created web/.catgenrc.json\n");
    assert!(test.exists("web/.catgenrc.json"));
    assert!(!test.exists(".catgenrc.json"));

    let (output, _, stderr) = run(test.command().args(["init", "--root", "web"]))?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr, "Error: web/.catgenrc.json already exists\n");

    Ok(())
}

#[test]
fn test_init_missing_root_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let (output, stdout, stderr) = run(test.command().args(["init", "--root", "nope"]))?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("Error: Project root is not a directory: nope"));
    assert!(!test.exists("nope"));

    Ok(())
}
