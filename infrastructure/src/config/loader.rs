//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILES: [&str; 2] = ["gogar.toml", ".gogar.toml"];
const ENV_PREFIX: &str = "GOGAR_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `GOGAR_SECTION__KEY=value`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./gogar.toml` or `./.gogar.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/gogar/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_with_global(Self::global_config_path().as_deref(), config_path)
    }

    /// Same as [`ConfigLoader::load`] with the global file location given
    pub fn load_with_global(
        global_path: Option<&Path>,
        config_path: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global_path {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("gogar").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for --show-config)
    pub fn describe_config_sources(config_path: Option<&Path>) -> String {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];
        let mark = |found: bool| if found { "[FOUND]" } else { "[     ]" };

        lines.push(format!("  [     ] Env:      {}*", ENV_PREFIX));

        if let Some(path) = config_path {
            lines.push(format!(
                "  {} Explicit: {}",
                mark(path.exists()),
                path.display()
            ));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  {} Project:  {}", mark(true), path.display())),
            None => lines.push(format!(
                "  {} Project:  ./{} or ./{}",
                mark(false),
                PROJECT_CONFIG_FILES[0],
                PROJECT_CONFIG_FILES[1]
            )),
        }

        if let Some(path) = Self::global_config_path() {
            lines.push(format!(
                "  {} Global:   {}",
                mark(path.exists()),
                path.display()
            ));
        }

        lines.push("  [     ] Default:  built-in defaults".to_string());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.game.intelligence, 100);
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("gogar"));
    }

    #[test]
    fn test_load_without_files_gives_defaults() {
        Jail::expect_with(|_jail| {
            let config = ConfigLoader::load_with_global(None, None).map_err(|e| *e)?;
            assert_eq!(config, FileConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_layer_priority() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "global.toml",
                r#"
[game]
intelligence = 1
starting_agents = ["Sal"]

[output]
width = 40
"#,
            )?;
            jail.create_file(
                "gogar.toml",
                r#"
[game]
intelligence = 2
"#,
            )?;
            jail.create_file(
                "explicit.toml",
                r#"
[output]
width = 50
"#,
            )?;
            jail.set_env("GOGAR_OUTPUT__COLOR", "false");

            let config = ConfigLoader::load_with_global(
                Some(Path::new("global.toml")),
                Some(Path::new("explicit.toml")),
            )
            .map_err(|e| *e)?;
            // project beats global
            assert_eq!(config.game.intelligence, 2);
            // global still supplies what nothing above overrides
            assert_eq!(config.game.starting_agents, vec!["Sal"]);
            // explicit beats global
            assert_eq!(config.output.width, 50);
            // env beats everything
            assert!(!config.output.color);
            Ok(())
        });
    }

    #[test]
    fn test_hidden_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(".gogar.toml", "[repl]\nprompt = \"> \"\n")?;
            let config = ConfigLoader::load_with_global(None, None).map_err(|e| *e)?;
            assert_eq!(config.repl.prompt, "> ");
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        Jail::expect_with(|_jail| {
            assert!(ConfigLoader::load_with_global(None, Some(Path::new("nowhere.toml"))).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_describe_config_sources() {
        let text = ConfigLoader::describe_config_sources(Some(Path::new("custom.toml")));
        assert!(text.contains("Explicit: custom.toml"));
        assert!(text.contains("GOGAR_*"));
        assert!(text.contains("built-in defaults"));
    }
}
