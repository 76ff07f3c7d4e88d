// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Per-theme naming used by the generated source files.
//!
//! The default theme lives in the base module; every other theme gets its
//! own module named after the base with the PascalCase theme appended
//! (`PrismIcons` + `Caviar`). Two spellings of a theme reach these helpers:
//! the lowercase token from aggregation (`caviar`) for catalog folders and
//! the PascalCase name from [`all_themes`](crate::all_themes) (`Caviar`) for
//! code generation.

use serde::Serialize;

use crate::{case::pascal_case, config::CatalogConfig, path::DEFAULT_THEME};

/// PascalCase spelling of the default theme.
pub const DEFAULT_THEME_NAME: &str = "Default";
const SOURCE_EXTENSION: &str = "swift";

/// Module folder for a lowercase theme token.
///
/// ```
/// use icon_catalog::{CatalogConfig, package_source_folder};
///
/// let config = CatalogConfig::default();
/// assert_eq!(package_source_folder(&config, "default",), "PrismIcons");
/// assert_eq!(package_source_folder(&config, "caviar",), "PrismIconsCaviar");
/// ```
pub fn package_source_folder(config: &CatalogConfig, theme: &str,) -> String
{
    if theme == DEFAULT_THEME {
        config.package_name.clone()
    } else {
        format!("{}{}", config.package_name, pascal_case(theme,))
    }
}

/// Module folder for a PascalCase theme name.
fn module_name(config: &CatalogConfig, theme: &str,) -> String
{
    if theme == DEFAULT_THEME_NAME {
        config.package_name.clone()
    } else {
        format!("{}{}", config.package_name, theme)
    }
}

fn source_file_path(config: &CatalogConfig, theme: &str, role: &str,) -> String
{
    format!(
        "{}/{}/{}{theme}{role}.{SOURCE_EXTENSION}",
        config.sources_dir,
        module_name(config, theme,),
        config.type_prefix
    )
}

/// Path of the generated icon activator source for a theme.
///
/// ```
/// use icon_catalog::{CatalogConfig, activator_path};
///
/// let config = CatalogConfig::default();
/// assert_eq!(
///     activator_path(&config, "Caviar",),
///     "Sources/PrismIconsCaviar/PrismCaviarIconActivator.swift"
/// );
/// ```
pub fn activator_path(config: &CatalogConfig, theme: &str,) -> String
{
    source_file_path(config, theme, "IconActivator",)
}

/// Path of the generated icon provider source for a theme.
pub fn provider_path(config: &CatalogConfig, theme: &str,) -> String
{
    source_file_path(config, theme, "IconProvider",)
}

/// Import block of a theme's generated sources.
///
/// Themed modules depend on the base module; the base module only needs the
/// platform foundation.
pub fn imports(config: &CatalogConfig, theme: &str,) -> String
{
    if theme == DEFAULT_THEME_NAME {
        "import Foundation".to_owned()
    } else {
        format!("import Foundation\nimport {}", config.package_name)
    }
}

/// Resource bundle identifier of a theme's module.
pub fn bundle_name(config: &CatalogConfig, theme: &str,) -> String
{
    format!("{}_{}", config.package_name, module_name(config, theme,))
}

/// Visibility keyword prefix of a theme's provider type.
///
/// Only the default provider is public; themed providers stay internal. The
/// returned keyword carries its trailing space so templates can splice it
/// directly in front of a declaration.
pub fn provider_visibility(theme: &str,) -> &'static str
{
    if theme == DEFAULT_THEME_NAME { "public " } else { "" }
}

/// Naming bundle for one theme, used by the generation plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct ThemeNaming
{
    /// PascalCase theme name.
    pub theme:          String,
    /// Module folder under the sources directory.
    pub source_folder:  String,
    /// Activator source path.
    pub activator_path: String,
    /// Provider source path.
    pub provider_path:  String,
    /// Import block.
    pub imports:        String,
    /// Resource bundle identifier.
    pub bundle_name:    String,
    /// Provider visibility keyword.
    pub visibility:     String,
}

impl ThemeNaming
{
    /// Computes every naming output for a lowercase theme token.
    pub fn for_token(config: &CatalogConfig, token: &str,) -> Self
    {
        let theme = pascal_case(token,);
        Self {
            source_folder:  package_source_folder(config, token,),
            activator_path: activator_path(config, &theme,),
            provider_path:  provider_path(config, &theme,),
            imports:        imports(config, &theme,),
            bundle_name:    bundle_name(config, &theme,),
            visibility:     provider_visibility(&theme,).to_owned(),
            theme,
        }
    }
}
