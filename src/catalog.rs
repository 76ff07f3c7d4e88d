// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Asset catalog layout derived from aggregated icon sets.
//!
//! Each theme owns one catalog at
//! `<sources>/<module>/<Theme>.xcassets`, split into one folder per pixel
//! size, each holding one `.imageset` folder per icon. Every size folder and
//! every image set folder needs a descriptor file next to its contents.

use std::collections::HashSet;

use serde::Serialize;

use crate::{
    aggregate::{IconRecord, IconSet},
    case::pascal_case,
    config::CatalogConfig,
    error::Error,
    path::{DEFAULT_THEME, IconPath},
    theme::package_source_folder,
};

/// Descriptor file of one icon variant's image set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct ImageDescriptor
{
    /// Path of the descriptor file.
    pub path: String,
    /// File name of the image referenced by the descriptor.
    pub name: String,
}

/// Directory of a size folder inside a theme's catalog.
fn size_folder(config: &CatalogConfig, theme: &str, size: &str,) -> String
{
    format!(
        "{}/{}/{}.xcassets/{size}",
        config.sources_dir,
        package_source_folder(config, theme,),
        pascal_case(theme,)
    )
}

/// Icons of the default theme, or an empty list when it is absent.
pub fn default_icon_set(sets: &[IconSet],) -> Vec<IconRecord,>
{
    sets.iter()
        .find(|set| set.icon_set_name == DEFAULT_THEME,)
        .map(|set| set.icons.clone(),)
        .unwrap_or_default()
}

/// PascalCase names of every theme except the default one.
pub fn non_default_themes(sets: &[IconSet],) -> Vec<String,>
{
    sets.iter()
        .filter(|set| set.icon_set_name != DEFAULT_THEME,)
        .map(|set| pascal_case(&set.icon_set_name,),)
        .collect()
}

/// PascalCase names of every theme in aggregation order.
pub fn all_themes(sets: &[IconSet],) -> Vec<String,>
{
    sets.iter().map(|set| pascal_case(&set.icon_set_name,),).collect()
}

/// Destination of an exported image inside its theme's catalog.
///
/// The image set folder is named after the file name up to its first dot;
/// the image itself keeps its full file name.
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) when the raw path is
/// malformed.
///
/// # Examples
///
/// ```
/// use icon_catalog::{CatalogConfig, asset_output_path};
///
/// let path = asset_output_path(&CatalogConfig::default(), "Caviar Icons/24/home-fill.svg",)?;
/// assert_eq!(
///     path,
///     "Sources/PrismIconsCaviar/Caviar.xcassets/24/home-fill.imageset/home-fill.svg"
/// );
/// # Ok::<(), icon_catalog::Error>(())
/// ```
pub fn asset_output_path(config: &CatalogConfig, raw_path: &str,) -> Result<String, Error,>
{
    let IconPath {
        theme,
        size,
        file_name,
        ..
    } = IconPath::parse(raw_path,)?;
    let stem = file_name.split('.',).next().unwrap_or_default();

    Ok(format!("{}/{stem}.imageset/{file_name}", size_folder(config, &theme, &size,)),)
}

/// Descriptor files for every `(theme, icon, size)` combination.
pub fn image_descriptors(config: &CatalogConfig, sets: &[IconSet],) -> Vec<ImageDescriptor,>
{
    sets.iter()
        .flat_map(|set| {
            set.icons.iter().flat_map(move |icon| {
                icon.sizes.iter().map(move |size| ImageDescriptor {
                    path: format!(
                        "{}/{}.imageset/{}",
                        size_folder(config, &set.icon_set_name, size,),
                        icon.file_name,
                        config.descriptor_file
                    ),
                    name: format!("{}.{}", icon.file_name, config.image_extension),
                },)
            },)
        },)
        .collect()
}

/// Descriptor files of every size folder present, each listed once in
/// first-seen order.
pub fn size_folder_descriptors(config: &CatalogConfig, sets: &[IconSet],) -> Vec<String,>
{
    let mut seen = HashSet::new();
    let mut descriptors = Vec::new();

    for set in sets {
        for size in set.icons.iter().flat_map(|icon| icon.sizes.iter(),) {
            let path = format!(
                "{}/{}",
                size_folder(config, &set.icon_set_name, size,),
                config.descriptor_file
            );
            if seen.insert(path.clone(),) {
                descriptors.push(path,);
            }
        }
    }

    descriptors
}
