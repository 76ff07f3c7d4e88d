// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Decomposition of raw exported icon paths.
//!
//! Exports arrive in two shapes depending on the theme page they come from:
//!
//! * `Caviar Icons/24/home-fill` for themed pages.
//! * `Icons/Icons/24/home-fill` or `Icons/Deprecated Icons/24/home-fill` for
//!   the default page.
//!
//! Both reduce to the same record: the theme is the first word of the first
//! segment, the size is the second-to-last segment and the file name is the
//! last segment.

use serde::Serialize;

use crate::{case::pascal_case, error::Error};

/// Theme token used for the unmarked primary page.
pub const DEFAULT_THEME: &str = "default";
/// Lowercased first word of the primary page name.
const PRIMARY_PAGE_TOKEN: &str = "icons";
/// Segment marking icons exported from the deprecated page.
const DEPRECATED_MARKER: &str = "Deprecated Icons";

/// Structured view of one raw icon path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct IconPath
{
    /// Raw path as exported.
    pub icon_path:     String,
    /// Lowercased theme token, `default` for the primary page.
    pub theme:         String,
    /// PascalCase identifier derived from the file name.
    pub icon_name:     String,
    /// Last path segment, verbatim.
    pub file_name:     String,
    /// Pixel size segment, verbatim.
    pub size:          String,
    /// Whether the path was exported from the deprecated page.
    pub is_deprecated: bool,
}

impl IconPath
{
    /// Parses a raw slash-delimited icon path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when the path has
    /// fewer than two segments or an empty file name.
    ///
    /// # Examples
    ///
    /// ```
    /// use icon_catalog::IconPath;
    ///
    /// let parsed = IconPath::parse("Caviar Icons/24/home-fill",)?;
    /// assert_eq!(parsed.theme, "caviar");
    /// assert_eq!(parsed.icon_name, "HomeFill");
    /// assert_eq!(parsed.size, "24");
    /// # Ok::<(), icon_catalog::Error>(())
    /// ```
    pub fn parse(raw: &str,) -> Result<Self, Error,>
    {
        let mut trailing = raw.rsplit('/',);
        let (Some(file_name,), Some(size,),) = (trailing.next(), trailing.next(),) else {
            return Err(Error::validation(format!(
                "icon path '{raw}' must contain at least a size and a file name"
            ),),);
        };

        if file_name.is_empty() {
            return Err(Error::validation(format!("icon path '{raw}' has an empty file name"),),);
        }

        let page = raw.split('/',).next().unwrap_or_default();

        Ok(Self {
            icon_path:     raw.to_owned(),
            theme:         theme_token(page,),
            icon_name:     pascal_case(file_name,),
            file_name:     file_name.to_owned(),
            size:          size.to_owned(),
            is_deprecated: raw.contains(DEPRECATED_MARKER,),
        },)
    }
}

/// Extracts the canonical theme token from the first path segment.
///
/// `"Caviar Icons"` yields `caviar`; `"Icons"` yields [`DEFAULT_THEME`].
pub fn theme_token(page: &str,) -> String
{
    let word = page.split(' ',).next().unwrap_or_default().to_lowercase();
    if word == PRIMARY_PAGE_TOKEN { DEFAULT_THEME.to_owned() } else { word }
}
