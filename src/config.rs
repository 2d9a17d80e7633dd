//! Configuration management.
//! This module handles the loading and parsing of configuration files
//! and environment variables for the application. Defaults come from the
//! embedded `Config.toml`, which an external `Config.toml` next to the
//! executable and `APP_`-prefixed environment variables may override.
//! CLI arguments are folded in last via [`Settings::into_options`].

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::{env, fs, path::PathBuf};

use crate::batch::{BatchOptions, OverwritePolicy};

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    #[serde(default)]
    pub overwrite: OverwritePolicy,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // 1. built-in default config
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../Config.toml"),
            FileFormat::Toml,
        ));

        // 2. try to load external config file
        if let Ok(exe_path) = env::current_exe() {
            if let Some(dir) = exe_path.parent() {
                let external = dir.join("Config.toml");
                if fs::metadata(&external).is_ok() {
                    if let Some(path) = external.to_str() {
                        builder = builder.add_source(File::with_name(path).required(false));
                    }
                }
            }
        }

        // 3. load environment variables
        builder = builder.add_source(Environment::with_prefix("APP").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// Fold CLI overrides into the settings and produce the batch options.
    pub fn into_options(
        self,
        input_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        overwrite: Option<OverwritePolicy>,
    ) -> BatchOptions {
        BatchOptions {
            input_dir: input_dir.unwrap_or(self.input_dir),
            output_dir: output_dir.unwrap_or(self.output_dir),
            overwrite: overwrite.unwrap_or(self.overwrite),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_defaults_load() {
        let settings = Settings::new().unwrap();
        assert_eq!(settings.input_dir, PathBuf::from("content"));
        assert_eq!(settings.output_dir, PathBuf::from("out"));
        assert_eq!(settings.overwrite, OverwritePolicy::Overwrite);
    }

    #[test]
    fn cli_arguments_override_settings() {
        let settings = Settings::new().unwrap();
        let options = settings.into_options(
            Some(PathBuf::from("pages")),
            None,
            Some(OverwritePolicy::Skip),
        );
        assert_eq!(options.input_dir, PathBuf::from("pages"));
        assert_eq!(options.output_dir, PathBuf::from("out"));
        assert_eq!(options.overwrite, OverwritePolicy::Skip);
    }
}
