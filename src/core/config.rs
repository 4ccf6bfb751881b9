//! Region configuration file management.
//!
//! Handles reading and writing `config.ini`, which holds the preferred region
//! of the one-time secret service:
//!
//! ```ini
//! [sender]
//! secret_send_region=us
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ini::Ini;
use tracing::{debug, info};

use crate::core::constants;
use crate::error::{ConfigError, Result, ValidationError};

/// Region of the one-time secret service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    #[default]
    Us,
    Eu,
}

impl Region {
    /// Value stored in the config file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::Eu => "eu",
        }
    }

    /// Base URL of the service in this region.
    pub fn base_url(&self) -> String {
        format!("https://{}.onetimesecret.com", self.as_str())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "us" => Ok(Region::Us),
            "eu" => Ok(Region::Eu),
            _ => Err(ValidationError::UnknownRegion(s.to_string())),
        }
    }
}

/// Handle on `config.ini`.
#[derive(Debug, Clone)]
pub struct RegionConfig {
    path: PathBuf,
}

impl RegionConfig {
    /// Path to the config file inside a storage directory.
    pub fn config_path(dir: &Path) -> PathBuf {
        dir.join(constants::CONFIG_FILE)
    }

    /// Open the config in `dir`, writing the default region if none is set.
    ///
    /// An existing choice is left as is.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if an existing file cannot be parsed, or
    /// `ConfigError::Write` if the default cannot be written.
    pub fn load_or_init(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        let config = Self {
            path: Self::config_path(dir),
        };

        let ini = config.read()?;
        if ini
            .get_from(Some(constants::SENDER_SECTION), constants::REGION_KEY)
            .is_none()
        {
            config.write(ini, Region::default())?;
            info!(path = %config.path.display(), "created region config");
        }

        Ok(config)
    }

    /// Config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Currently configured region.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRegion` if the stored value is not `us`/`eu`.
    pub fn region(&self) -> Result<Region> {
        let ini = self.read()?;
        let value = ini
            .get_from(Some(constants::SENDER_SECTION), constants::REGION_KEY)
            .unwrap_or(Region::default().as_str());

        let region: Region = value
            .parse()
            .map_err(|_| ConfigError::InvalidRegion(value.to_string()))?;
        debug!(%region, "region loaded");
        Ok(region)
    }

    /// Persist a new region. Other keys in the file are preserved.
    pub fn set_region(&self, region: Region) -> Result<()> {
        let ini = self.read()?;
        self.write(ini, region)?;
        info!(%region, "region updated");
        Ok(())
    }

    fn read(&self) -> Result<Ini> {
        if !self.path.exists() {
            return Ok(Ini::new());
        }
        Ini::load_from_file(&self.path).map_err(|source| {
            ConfigError::Read {
                path: self.path.clone(),
                source,
            }
            .into()
        })
    }

    fn write(&self, mut ini: Ini, region: Region) -> Result<()> {
        ini.with_section(Some(constants::SENDER_SECTION))
            .set(constants::REGION_KEY, region.as_str());
        ini.write_to_file(&self.path).map_err(|source| {
            ConfigError::Write {
                path: self.path.clone(),
                source,
            }
            .into()
        })
    }
}
