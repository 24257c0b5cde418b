//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use gw_config::{GapwiseConfig, StoreBackend};
use gw_core::enums::{AwardPolicy, ProficiencyLevel, RoleLevel};
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_role = "Platform Engineer"
default_limit = 5

[ledger]
award_policy = "idempotent"

[store]
backend = "memory"
data_dir = "/tmp/gw"
trail = false

[resources]
base_url = "https://learn.example.org"
"#,
        )?;

        let config: GapwiseConfig = Figment::from(Serialized::defaults(GapwiseConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_role, "Platform Engineer");
        assert_eq!(config.general.default_limit, 5);
        assert_eq!(config.ledger.award_policy, AwardPolicy::Idempotent);
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert!(!config.store.trail);
        assert_eq!(config.resources.base_url, "https://learn.example.org");
        Ok(())
    });
}

#[test]
fn toml_skills_replace_builtin_matrix() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[standards.skills.Rust]
Junior = "Basic"
Senior = "Advanced"
"Team Lead" = "Expert"

[standards.skills.SQL]
Junior = "basic"
Senior = "Intermediate"
"#,
        )?;

        let config: GapwiseConfig = Figment::from(Serialized::defaults(GapwiseConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        let standard = config.validate().expect("custom matrix validates");
        let skills: Vec<&str> = standard.skills().collect();
        assert_eq!(skills, vec!["Rust", "SQL"]);
        assert_eq!(standard.required("Rust", RoleLevel::TeamLead), ProficiencyLevel::Expert);
        assert_eq!(standard.required("SQL", RoleLevel::Junior), ProficiencyLevel::Basic);
        assert_eq!(standard.required("SQL", RoleLevel::TeamLead), ProficiencyLevel::Basic);
        Ok(())
    });
}

#[test]
fn disabled_builtin_without_skills_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[standards]
builtin = false
",
        )?;

        let config: GapwiseConfig = Figment::from(Serialized::defaults(GapwiseConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'standards' is not configured"));
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_from_root() {
    Jail::expect_with(|jail| {
        jail.create_dir(".gapwise")?;
        jail.create_file(
            ".gapwise/config.toml",
            r#"
[general]
default_role = "Mobile Engineer"
"#,
        )?;

        let config: GapwiseConfig = GapwiseConfig::figment_in(jail.directory()).extract()?;
        assert_eq!(config.general.default_role, "Mobile Engineer");
        Ok(())
    });
}

#[test]
fn unknown_level_in_matrix_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[standards.skills.Rust]
Senior = "Wizard"
"#,
        )?;

        let result: Result<GapwiseConfig, _> =
            Figment::from(Serialized::defaults(GapwiseConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
