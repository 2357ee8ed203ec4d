//! Reading and writing config and save files.

use lifeboard_lib::{Config, Save};
use serde::{
    de::{DeserializeOwned, IgnoredAny},
    Deserialize, Serialize,
};
use std::{error::Error, fs, path::Path};

/// File formats, chosen by the extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Format::Json),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("toml") => Ok(Format::Toml),
            _ => Err(format!(
                "unknown file format of {}: expected .json, .yaml, .yml or .toml",
                path.display()
            )
            .into()),
        }
    }

    fn read<T: DeserializeOwned>(self, text: &str) -> Result<T, Box<dyn Error>> {
        Ok(match self {
            Format::Json => serde_json::from_str(text)?,
            Format::Yaml => serde_yaml::from_str(text)?,
            Format::Toml => toml::from_str(text)?,
        })
    }

    fn write<T: Serialize>(self, value: &T) -> Result<String, Box<dyn Error>> {
        Ok(match self {
            Format::Json => serde_json::to_string_pretty(value)?,
            Format::Yaml => serde_yaml::to_string(value)?,
            Format::Toml => toml::to_string(value)?,
        })
    }
}

/// Contents of a loaded file.
#[derive(Debug)]
pub(crate) enum Loaded {
    Config(Config),
    Save(Save),
}

/// The keys that mark a document as a save.
#[derive(Deserialize)]
struct SaveKeys {
    generation: Option<IgnoredAny>,
    config: Option<IgnoredAny>,
}

impl SaveKeys {
    fn found(&self) -> bool {
        self.generation.is_some() || self.config.is_some()
    }
}

/// Parses a save, or a config if the document has none of the keys of a save.
fn parse(format: Format, text: &str) -> Result<Loaded, Box<dyn Error>> {
    let is_save = format
        .read::<SaveKeys>(text)
        .map_or(false, |keys| keys.found());
    if is_save {
        Ok(Loaded::Save(format.read(text)?))
    } else {
        Ok(Loaded::Config(format.read(text)?))
    }
}

/// Loads a save file or a config file.
pub(crate) fn load(path: &Path) -> Result<Loaded, Box<dyn Error>> {
    let format = Format::from_path(path)?;
    let text = fs::read_to_string(path)?;
    parse(format, &text)
}

/// Writes a save file.
pub(crate) fn save(path: &Path, save: &Save) -> Result<(), Box<dyn Error>> {
    let text = Format::from_path(path)?.write(save)?;
    fs::write(path, text)?;
    Ok(())
}
