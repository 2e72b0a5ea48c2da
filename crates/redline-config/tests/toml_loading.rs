//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use redline_config::{RedlineConfig, ResponseFormat};
use redline_core::edits::{ColorTarget, RgbColor};

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
plan_id = "review_42"
separator = "|"
max_doc_chars = 4000
stream = false

[google]
access_token = "ya29.token"
timeout_secs = 10

[llm]
api_key = "sk-test"
model = "gpt-4.1"
response_formats = ["json_object", "none"]

[markup]
target = "foreground"
removed = { red = 0.8, green = 0.0, blue = 0.0 }
"#,
        )?;

        let config: RedlineConfig = Figment::from(Serialized::defaults(RedlineConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.plan_id, "review_42");
        assert_eq!(config.general.separator, '|');
        assert_eq!(config.general.max_doc_chars, 4000);
        assert!(!config.general.stream);
        assert_eq!(config.general.section_marker, "## ");

        assert!(config.google.is_configured());
        assert_eq!(config.google.timeout_secs, 10);
        assert_eq!(config.google.docs_api_base, "https://docs.googleapis.com/v1");

        assert!(config.llm.is_configured());
        assert_eq!(config.llm.model, "gpt-4.1");
        assert_eq!(
            config.llm.response_formats,
            vec![ResponseFormat::JsonObject, ResponseFormat::None]
        );

        let palette = config.markup.palette();
        assert_eq!(palette.target, ColorTarget::Foreground);
        assert_eq!(palette.removed, RgbColor::new(0.8, 0.0, 0.0));
        assert_eq!(palette.added, RgbColor::SOFT_GREEN);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".redline")?;
        jail.create_file(
            ".redline/config.toml",
            r####"
[general]
section_marker = "### "
"####,
        )?;

        let config = RedlineConfig::load().expect("config loads");
        assert_eq!(config.general.section_marker, "### ");
        Ok(())
    });
}

#[test]
fn out_of_range_colour_fails_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".redline")?;
        jail.create_file(
            ".redline/config.toml",
            r#"
[markup]
added = { red = 0.0, green = 255.0, blue = 0.0 }
"#,
        )?;

        let err = RedlineConfig::load().unwrap_err();
        assert!(err.to_string().contains("markup.added.green"));
        Ok(())
    });
}

#[test]
fn invalid_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".redline")?;
        jail.create_file(".redline/config.toml", "[general\nplan_id = ")?;

        assert!(matches!(
            RedlineConfig::load(),
            Err(redline_config::ConfigError::Figment(_))
        ));
        Ok(())
    });
}

#[test]
fn extra_toml_layer_can_be_merged_on_top() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("review.toml");
    std::fs::write(
        &path,
        "[general]\nplan_id = \"from_file\"\n\n[llm]\nresponse_formats = [\"json_object\"]\n",
    )
    .expect("write toml");

    let config: RedlineConfig = RedlineConfig::figment()
        .merge(Toml::file(&path))
        .extract()
        .expect("config extracts");

    assert_eq!(config.general.plan_id, "from_file");
    assert_eq!(config.llm.response_formats, vec![ResponseFormat::JsonObject]);
    assert_eq!(config.general.section_marker, "## ");
}
