use std::path::Path;

use anyhow::Context;
use gw_config::GapwiseConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered config rooted at `project_root`, then apply
/// command-line overrides.
pub fn load_config(project_root: &Path, flags: &GlobalFlags) -> anyhow::Result<GapwiseConfig> {
    load_project_dotenv(project_root)?;

    let mut config: GapwiseConfig = GapwiseConfig::figment_in(project_root)
        .extract()
        .map_err(gw_config::ConfigError::from)
        .context("failed to load gapwise configuration")?;

    if let Some(data_dir) = &flags.data_dir {
        tracing::debug!(data_dir = %data_dir.display(), "data directory overridden");
        config.store.data_dir.clone_from(data_dir);
    }
    Ok(config)
}

fn load_project_dotenv(project_root: &Path) -> anyhow::Result<()> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::load_config;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(data_dir: Option<PathBuf>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: false,
            verbose: false,
            data_dir,
        }
    }

    #[test]
    fn project_config_file_is_read() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".gapwise")).unwrap();
        std::fs::write(
            dir.path().join(".gapwise/config.toml"),
            "[general]\ndefault_limit = 7\n",
        )
        .unwrap();

        let config = load_config(dir.path(), &flags(None)).unwrap();
        assert_eq!(config.general.default_limit, 7);
    }

    #[test]
    fn data_dir_flag_overrides_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = load_config(dir.path(), &flags(Some(PathBuf::from("/tmp/gw-data")))).unwrap();
        assert_eq!(config.store.data_dir, PathBuf::from("/tmp/gw-data"));
    }
}
