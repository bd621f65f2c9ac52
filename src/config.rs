use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

/// `[codec]` table
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CodecConfig {
    #[serde(default)]
    pub(crate) program: Option<String>,
    #[serde(default)]
    pub(crate) compile_args: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) decompile_args: Option<Vec<String>>,
}

/// `[policy]` table
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PolicyConfig {
    #[serde(default)]
    pub(crate) compile_continue_on_error: Option<bool>,
    #[serde(default)]
    pub(crate) decompile_continue_on_error: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) json: bool,
    #[serde(default)]
    pub(crate) quiet: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) input_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) output_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) codec: CodecConfig,
    #[serde(default)]
    pub(crate) policy: PolicyConfig,
    /// File this config was read from
    #[serde(skip)]
    pub(crate) source: Option<PathBuf>,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::parse(&content) {
                    Ok(mut config) => {
                        config.source = Some(path);
                        return config;
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    pub(crate) fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Config>(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/dgrtools/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("dgrtools").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/dgrtools/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("dgrtools").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.dgrtools.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".dgrtools.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paths() {
        let paths = Config::get_config_paths();
        assert!(!paths.is_empty());
        assert!(paths.iter().all(|p| p.to_string_lossy().contains("dgrtools")));
    }

    #[test]
    fn empty_config_is_default() {
        let config = Config::parse("").unwrap();
        assert!(!config.debug);
        assert!(config.input_dir.is_none());
        assert!(config.codec.program.is_none());
        assert!(config.policy.decompile_continue_on_error.is_none());
    }

    #[test]
    fn full_config_parses() {
        let config = Config::parse(
            r#"
debug = true
json = true
color = "never"
input_dir = "scripts"
output_dir = "build"

[codec]
program = "/opt/dgrlin/dgrlin"
compile_args = ["c", "{input}", "-o", "{output}"]

[policy]
decompile_continue_on_error = true
"#,
        )
        .unwrap();
        assert!(config.debug);
        assert!(config.json);
        assert!(matches!(config.color, Some(ConfigColorMode::Never)));
        assert_eq!(config.input_dir, Some(PathBuf::from("scripts")));
        assert_eq!(config.output_dir, Some(PathBuf::from("build")));
        assert_eq!(config.codec.program.as_deref(), Some("/opt/dgrlin/dgrlin"));
        assert_eq!(
            config.codec.compile_args,
            Some(vec![
                "c".to_string(),
                "{input}".to_string(),
                "-o".to_string(),
                "{output}".to_string()
            ])
        );
        assert!(config.codec.decompile_args.is_none());
        assert_eq!(config.policy.decompile_continue_on_error, Some(true));
        assert_eq!(config.policy.compile_continue_on_error, None);
    }

    #[test]
    fn bad_color_is_rejected() {
        assert!(Config::parse(r#"color = "sometimes""#).is_err());
    }
}
