use serde::Deserialize;
use std::path::PathBuf;

use crate::error::SelectionError;
use crate::solids::SolidKind;

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Settings read from a `platonic-stl.toml` file. Command-line values win.
///
/// ```toml
/// solid_type = "dodecahedron"   # or a code, e.g. 4
/// split = false
/// output_dir = "out"
/// verbose = true
/// verify = true
/// ```
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub solid_type: Option<SolidSelector>,
    #[serde(default)]
    pub split: bool,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub verify: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            solid_type: None,
            split: false,
            output_dir: default_output_dir(),
            verbose: false,
            verify: false,
        }
    }
}

/// A solid given either by type code or by name
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SolidSelector {
    Code(i64),
    Name(String),
}

impl SolidSelector {
    pub fn resolve(&self) -> Result<SolidKind, SelectionError> {
        match self {
            SolidSelector::Code(code) => SolidKind::from_code(*code),
            SolidSelector::Name(name) => name.parse(),
        }
    }
}

impl FileConfig {
    /// Load the first config file found in the search path
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("platonic-stl.toml"));
    paths.push(PathBuf::from(".platonic-stl.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("platonic-stl").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".platonic-stl.toml"));
    }

    paths
}
