use application::ExportOptions;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExporterConfig {
    /// JSON project snapshot to export.
    pub project_path: String,
    /// Where `prg.lua` is written.
    pub output_path: String,
    #[serde(default)]
    pub export: ExportOptions,
    /// Refuse to write when validation reports defects.
    #[serde(default)]
    pub strict: bool,
}

impl ExporterConfig {
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Start with default settings
            .set_default("project_path", "project.json")?
            .set_default("output_path", "prg.lua")?
            .set_default("export.indent_width", 4)?
            .set_default("strict", false)?
            // Local config file, e.g. config/default.toml
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            // Per run mode overrides, e.g. config/production.toml
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // Environment variables (e.g. PRG__OUTPUT_PATH=out/prg.lua)
            .add_source(Environment::with_prefix("PRG").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
