// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Naming configuration for generated catalog paths.
//!
//! Every field has a default matching the layout the generated package
//! expects, so an empty document (or no document at all) reproduces the
//! canonical output. Overrides exist for packaging the same icons under a
//! different module name.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{self, Error};

const DEFAULT_PACKAGE_NAME: &str = "PrismIcons";
const DEFAULT_TYPE_PREFIX: &str = "Prism";
const DEFAULT_SOURCES_DIR: &str = "Sources";
const DEFAULT_DESCRIPTOR_FILE: &str = "Contents.json";
const DEFAULT_IMAGE_EXTENSION: &str = "svg";

/// Naming configuration shared by every output deriver.
///
/// # Examples
///
/// ```
/// use icon_catalog::CatalogConfig;
///
/// let config: CatalogConfig = serde_yaml::from_str("package_name: BrandIcons",)
///     .expect("valid configuration",);
/// assert_eq!(config.package_name, "BrandIcons");
/// assert_eq!(config.sources_dir, "Sources");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig
{
    /// Base module name; themed modules append the PascalCase theme.
    pub package_name:    String,
    /// Prefix of generated type names such as `PrismCaviarIconProvider`.
    pub type_prefix:     String,
    /// Root directory holding every module's sources.
    pub sources_dir:     String,
    /// File name of asset catalog descriptor files.
    pub descriptor_file: String,
    /// Extension of the exported image files, without the dot.
    pub image_extension: String,
}

impl Default for CatalogConfig
{
    fn default() -> Self
    {
        Self {
            package_name:    DEFAULT_PACKAGE_NAME.to_owned(),
            type_prefix:     DEFAULT_TYPE_PREFIX.to_owned(),
            sources_dir:     DEFAULT_SOURCES_DIR.to_owned(),
            descriptor_file: DEFAULT_DESCRIPTOR_FILE.to_owned(),
            image_extension: DEFAULT_IMAGE_EXTENSION.to_owned(),
        }
    }
}

impl CatalogConfig
{
    /// Checks that no naming component is blank or contains a path separator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) naming the first
    /// offending field.
    pub fn validate(&self,) -> Result<(), Error,>
    {
        for (field, value,) in [
            ("package_name", &self.package_name,),
            ("type_prefix", &self.type_prefix,),
            ("sources_dir", &self.sources_dir,),
            ("descriptor_file", &self.descriptor_file,),
            ("image_extension", &self.image_extension,),
        ] {
            if value.trim().is_empty() {
                return Err(Error::validation(format!("{field} cannot be empty"),),);
            }
            if value.contains('/',) {
                return Err(Error::validation(format!("{field} cannot contain '/'"),),);
            }
        }
        Ok((),)
    }
}

/// Loads and validates the configuration from a YAML file.
///
/// # Errors
///
/// Returns [`Error::Io`](Error::Io) when the file cannot be read,
/// [`Error::Parse`](Error::Parse) when the YAML cannot be decoded and
/// [`Error::Validation`](Error::Validation) when a field is invalid.
pub fn load_config(path: &Path,) -> Result<CatalogConfig, Error,>
{
    debug!("Reading catalog configuration from {}", path.display());
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_config(&contents,)
}

/// Parses and validates the configuration from a YAML string.
///
/// Blank documents yield [`CatalogConfig::default`].
///
/// # Errors
///
/// See [`load_config`].
pub fn parse_config(contents: &str,) -> Result<CatalogConfig, Error,>
{
    if contents.trim().is_empty() {
        return Ok(CatalogConfig::default(),);
    }

    let config: CatalogConfig = serde_yaml::from_str(contents,)?;
    config.validate()?;
    Ok(config,)
}
