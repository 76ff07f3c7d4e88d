// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Typed boundary for asset groups supplied by the design-system host.
//!
//! The host hands over a JSON array of asset groups, each carrying many more
//! fields than the catalog needs (ids, thumbnails, timestamps). Only the
//! origin name of every icon is required; everything else is ignored during
//! deserialization.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{self, Error};

/// Batch of exported icons sharing a common grouping in the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct AssetGroup
{
    /// Optional display name of the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String,>,
    /// Exported icons contained in the group.
    pub icons:      Vec<AssetIcon,>,
}

/// Single exported icon record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
pub struct AssetIcon
{
    /// Export origin describing where the icon lives in the design file.
    pub origin: AssetOrigin,
}

/// Origin metadata of an exported icon.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
pub struct AssetOrigin
{
    /// Slash-delimited path such as `Caviar Icons/24/home-fill`.
    pub name: String,
}

impl AssetGroup
{
    /// Builds a group from raw origin paths.
    ///
    /// ```
    /// use icon_catalog::AssetGroup;
    ///
    /// let group = AssetGroup::from_paths(["Icons/Icons/24/home-fill",],);
    /// assert_eq!(group.icons[0].origin.name, "Icons/Icons/24/home-fill");
    /// ```
    pub fn from_paths<I, S,>(paths: I,) -> Self
    where
        I: IntoIterator<Item = S,>,
        S: Into<String,>,
    {
        Self {
            group_name: None,
            icons:      paths
                .into_iter()
                .map(|name| AssetIcon {
                    origin: AssetOrigin {
                        name: name.into(),
                    },
                },)
                .collect(),
        }
    }
}

/// Loads asset groups from a JSON file.
///
/// # Errors
///
/// Returns [`Error::Io`](Error::Io) when the file cannot be read and
/// [`Error::Decode`](Error::Decode) when it is not a valid asset group array.
pub fn load_asset_groups(path: &Path,) -> Result<Vec<AssetGroup,>, Error,>
{
    debug!("Reading asset groups from {}", path.display());
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_asset_groups(&contents,)
}

/// Parses asset groups from a JSON document string.
///
/// # Errors
///
/// Returns [`Error::Decode`](Error::Decode) when required fields are missing
/// or have the wrong shape.
pub fn parse_asset_groups(contents: &str,) -> Result<Vec<AssetGroup,>, Error,>
{
    let groups: Vec<AssetGroup,> = serde_json::from_str(contents,)?;
    debug!(
        "Decoded {} asset groups with {} icons",
        groups.len(),
        groups.iter().map(|group| group.icons.len(),).sum::<usize>()
    );
    Ok(groups,)
}
