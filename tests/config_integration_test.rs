use anyhow::Result;
use tempfile::TempDir;
use truth_names::core::ConfigProvider;
use truth_names::utils::validation::Validate;
use truth_names::{CodeKind, CodeNamer, NamingConfig, OutputFormat, RescatterCategory};

#[test]
fn test_config_file_drives_namer() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("names.toml");
    std::fs::write(
        &config_path,
        r#"
[rescattering]
default_category = "larsoft_default"

[output]
format = "json"
"#,
    )?;

    let config = NamingConfig::from_file(&config_path)?;
    config.validate()?;
    assert_eq!(
        config.default_rescatter_category(),
        RescatterCategory::LARSOFT_DEFAULT
    );

    let namer = CodeNamer::new(&config);
    assert_eq!(namer.format(), OutputFormat::Json);

    let named = namer.describe_all(CodeKind::Rescattering, &[3, i32::MIN]);
    assert_eq!(named[0].name, "elastic");
    assert_eq!(named[1].name, "[not set]");

    let rendered: serde_json::Value = serde_json::from_str(&namer.render(&named)?)?;
    assert_eq!(rendered[0]["kind"], "rescattering");
    assert_eq!(rendered[1]["name"], "[not set]");
    Ok(())
}

#[test]
fn test_env_var_substitution() -> Result<()> {
    std::env::set_var("TRUTH_NAMES_TEST_FORMAT", "json");
    let config = NamingConfig::from_toml_str("[output]\nformat = \"${TRUTH_NAMES_TEST_FORMAT}\"\n")?;
    config.validate()?;
    assert_eq!(config.output_format(), OutputFormat::Json);
    Ok(())
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = NamingConfig::from_file(temp_dir.path().join("absent.toml"));
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(!err.recovery_suggestion().is_empty());
}
