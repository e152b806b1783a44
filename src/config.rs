// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use crate::physics::{CollapseSettings, Variant};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default = "default_variant")]
    pub default_variant: Variant,

    #[serde(default)]
    pub collapse: CollapseSettings,
}

fn default_variant() -> Variant {
    Variant::Omega1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_variant: Variant::Omega1,
            collapse: CollapseSettings::default(),
        }
    }
}

impl Config {
    /// Loads config from the standard OS location (e.g., ~/.config/beta2omega/settings.json)
    pub fn load() -> (Self, String) {
        let path = Self::get_path();
        if path.exists() {
            match File::open(&path) {
                Ok(file) => {
                    let reader = BufReader::new(file);
                    match serde_json::from_reader(reader) {
                        Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
                        Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
                    }
                }
                Err(e) => (Self::default(), format!("Error opening config: {}", e)),
            }
        } else {
            (
                Self::default(),
                "No config found. Using defaults.".to_string(),
            )
        }
    }

    /// Saves config to the standard OS location
    pub fn save(&self) -> String {
        let path = Self::get_path();
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        match File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                match serde_json::to_writer_pretty(writer, self) {
                    Ok(_) => format!("Config saved to {:?}", path),
                    Err(e) => format!("Failed to save config: {}", e),
                }
            }
            Err(e) => format!("Could not create config file: {}", e),
        }
    }

    fn get_path() -> PathBuf {
        if let Some(proj) = ProjectDirs::from("com", "example", "beta2omega") {
            proj.config_dir().join("settings.json")
        } else {
            PathBuf::from("settings.json")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roundtrip() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(back.default_variant, Variant::Omega1);
        assert_eq!(back.collapse, CollapseSettings::default());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let back: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(back.default_variant, Variant::Omega1);
        assert!((back.collapse.factor - 1.0).abs() < 1e-12);
        assert!(back.collapse.delta_override.is_none());
    }

    #[test]
    fn test_variant_names_are_lowercase() {
        let json = serde_json::to_string(&Variant::Omega3).unwrap();
        assert_eq!(json, "\"omega3\"");
    }
}
