use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const BUNDLES: &str = r#"[
  { "name": "app", "moduleFilePath": "./frontend", "entry": "index.js" },
  { "name": "plugin", "moduleFilePath": "./plugin" }
]"#;

const LANGUAGES: &str = r#"[
  { "crowdin_code": "en", "intl_code": "en", "language_name": "English" },
  { "crowdin_code": "fr", "intl_code": "fr-fr", "language_name": "Français" },
  { "crowdin_code": "pt-BR", "intl_code": "pt-br", "language_name": "Português" }
]"#;

const INDEX_JS: &str = r#"import strings from './strings';
import Vue from 'vue';

const tr = createTranslator('App', {
  title: 'Learn',
  greeting: { message: 'Hello', context: 'Shown on the home page' },
});
"#;

const STRINGS_JS: &str = "export default createTranslator('Common', { ok: 'OK' });\n";

const PANEL_VUE: &str = r#"<template>
  <button>{{ $tr('close') }}</button>
</template>

<script>
  export default {
    name: 'Panel',
    $trs: {
      close: 'Close',
    },
  };
</script>
"#;

const FR_CSV: &str = "Identifier,Source String,Context,Translation\n\
App.title,Learn,,Apprendre\n\
Common.ok,OK,,D'accord\n\
Panel.close,Close,,Fermer\n";

fn setup() -> Result<CliTest> {
    let test = CliTest::with_file("bundles.json", BUNDLES)?;
    test.write_file("language_info.json", LANGUAGES)?;
    test.write_file("frontend/index.js", INDEX_JS)?;
    test.write_file("frontend/strings.js", STRINGS_JS)?;
    test.write_file("frontend/unused.js", "createTranslator('Unused', { never: 'Never' });\n")?;
    test.write_file("plugin/Panel.vue", PANEL_VUE)?;
    test.write_file("plugin/node_modules/dep/index.js", "createTranslator('Dep', { d: 'D' });\n")?;
    test.write_file("locale/fr_FR/LC_MESSAGES/frontend.csv", FR_CSV)?;
    Ok(test)
}

#[test]
fn test_generate_writes_catalogs() -> Result<()> {
    let test = setup()?;

    let (output, stdout, stderr) = run(&mut test.generate_command())?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout,
        "\u{2713} Generated 4 catalogs for 2 bundles in 3 locales\n\
         \u{2718} 5 missing translations in 2 locales\n  fr-fr: 1\n  pt-br: 4\n"
    );
    assert!(stderr.contains("info: Gathered 3 required string ids for app"));
    assert!(stderr.contains(
        "error: Could not find translation for message App.greeting in fr-fr translation files"
    ));

    assert_snapshot!(test.read_file("locale/en/LC_MESSAGES/app-messages.json")?, @r#"
    {
      "App.greeting": "Hello",
      "App.title": "Learn",
      "Common.ok": "OK"
    }
    "#);
    assert_snapshot!(test.read_file("locale/fr_FR/LC_MESSAGES/app-messages.json")?, @r#"
    {
      "App.title": "Apprendre",
      "Common.ok": "D'accord"
    }
    "#);
    assert_eq!(
        test.read_file("locale/fr_FR/LC_MESSAGES/plugin-messages.json")?,
        "{\n  \"Panel.close\": \"Fermer\"\n}"
    );
    assert_eq!(
        test.read_file("locale/en/LC_MESSAGES/plugin-messages.json")?,
        "{\n  \"Panel.close\": \"Close\"\n}"
    );

    assert!(test.exists("locale/en/LC_MESSAGES/README.md"));
    assert!(test.exists("locale/fr_FR/LC_MESSAGES/README.md"));
    assert!(!test.exists("locale/pt_BR/LC_MESSAGES/app-messages.json"));
    assert!(!test.exists("locale/pt_BR/LC_MESSAGES/README.md"));

    Ok(())
}

#[test]
fn test_generate_is_idempotent() -> Result<()> {
    let test = setup()?;

    run(&mut test.generate_command())?;
    let first = test.read_file("locale/fr_FR/LC_MESSAGES/app-messages.json")?;
    run(&mut test.generate_command())?;
    let second = test.read_file("locale/fr_FR/LC_MESSAGES/app-messages.json")?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_generate_removes_stale_catalogs() -> Result<()> {
    let test = setup()?;
    run(&mut test.generate_command())?;
    assert!(test.exists("locale/fr_FR/LC_MESSAGES/plugin-messages.json"));

    test.write_file("plugin/Panel.vue", "<script>export default { name: 'Panel' };</script>")?;
    let (output, stdout, _) = run(&mut test.generate_command())?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("  Removed 2 stale catalogs\n"));
    assert!(!test.exists("locale/en/LC_MESSAGES/plugin-messages.json"));
    assert!(!test.exists("locale/fr_FR/LC_MESSAGES/plugin-messages.json"));
    assert!(test.exists("locale/fr_FR/LC_MESSAGES/app-messages.json"));

    Ok(())
}

#[test]
fn test_generate_strict_fails_on_missing() -> Result<()> {
    let test = setup()?;

    let (output, _, _) = run(test.generate_command().arg("--strict"))?;

    assert_eq!(output.status.code(), Some(1));
    // Catalogs are still written.
    assert!(test.exists("locale/fr_FR/LC_MESSAGES/app-messages.json"));
    Ok(())
}

#[test]
fn test_generate_strict_passes_when_complete() -> Result<()> {
    let test = setup()?;
    test.write_file(
        "language_info.json",
        r#"[{ "crowdin_code": "en", "intl_code": "en" }]"#,
    )?;

    let (output, stdout, _) = run(test.generate_command().arg("--strict"))?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout, "\u{2713} Generated 2 catalogs for 2 bundles in 1 locale\n");
    Ok(())
}

#[test]
fn test_generate_reads_config_and_overrides() -> Result<()> {
    let test = setup()?;
    test.write_file(
        ".catgenrc.json",
        r#"{ "localeDataFolder": "./i18n", "ignores": ["**/node_modules/**"] }"#,
    )?;
    test.write_file("i18n/fr_FR/LC_MESSAGES/frontend.csv", FR_CSV)?;

    let (output, _, _) = run(test
        .generate_command()
        .args(["--languages", "./language_info.json"])
        .args(["--ignore", "**/plugin/**"]))?;

    assert_eq!(output.status.code(), Some(0));
    assert!(test.exists("i18n/fr_FR/LC_MESSAGES/app-messages.json"));
    assert!(!test.exists("i18n/fr_FR/LC_MESSAGES/plugin-messages.json"));
    assert!(!test.exists("locale/en"));
    Ok(())
}

#[test]
fn test_generate_from_other_directory_with_root() -> Result<()> {
    let test = setup()?;
    test.write_file("elsewhere/.keep", "")?;

    let (output, _, _) = run(test
        .generate_command()
        .current_dir(test.root().join("elsewhere"))
        .args(["--root", ".."]))?;

    assert_eq!(output.status.code(), Some(0));
    assert!(test.exists("locale/en/LC_MESSAGES/app-messages.json"));
    Ok(())
}

#[test]
fn test_generate_unresolved_import_is_fatal() -> Result<()> {
    let test = setup()?;
    test.write_file("frontend/index.js", "import './missing';\n")?;

    let (output, stdout, stderr) = run(&mut test.generate_command())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error: "));
    assert!(stderr.contains("Cannot resolve module './missing'"));
    assert!(!test.exists("locale/en"));
    Ok(())
}

#[test]
fn test_generate_missing_manifest_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let (output, _, stderr) = run(&mut test.generate_command())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.starts_with("Error: Failed to read bundle manifest"));
    Ok(())
}

#[test]
fn test_generate_invalid_manifest_is_fatal() -> Result<()> {
    let test = setup()?;
    test.write_file(
        "bundles.json",
        r#"[{ "name": "app", "moduleFilePath": "./frontend" }, { "name": "app", "moduleFilePath": "./plugin" }]"#,
    )?;

    let (output, _, stderr) = run(&mut test.generate_command())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Duplicate bundle name 'app'"));
    Ok(())
}
