use std::path::Path;

use anyhow::{bail, Result};
use tracing::info;

use stretchy_core::AppConfig;

pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "config file {} already exists (use --force to overwrite)",
            path.display()
        );
    }

    AppConfig::default().save_to(path)?;
    info!(path = %path.display(), "Wrote default configuration");
    println!("Wrote {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        init(&path, false).unwrap();
        assert!(path.exists());
        assert!(init(&path, false).is_err());
        assert!(init(&path, true).is_ok());

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.header.preferred_maximum_height, 200.0);
    }
}
