// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Per-icon flags consumed by the generated provider sources.
//!
//! Both enums render to the member literal the generated code expects
//! (`.both`, `.template`, ...) through [`Display`](std::fmt::Display) and
//! serde, so templates can splice them verbatim.

use std::fmt;

use serde::Serialize;

use crate::aggregate::IconRecord;

const LARGE_SIZE: &str = "24";
const SMALL_SIZE: &str = "16";

/// Size variants available for an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize,)]
pub enum IconVariants
{
    /// Both the 16 and 24 pixel variants exist.
    #[serde(rename = ".both")]
    Both,
    /// Only the 24 pixel variant exists.
    #[serde(rename = ".large")]
    LargeOnly,
    /// Anything else, including icons without a 16 or 24 pixel variant.
    #[serde(rename = ".small")]
    SmallOnly,
}

impl IconVariants
{
    /// Classifies an icon by its 16 and 24 pixel variants. Other sizes are
    /// ignored.
    ///
    /// ```
    /// use icon_catalog::{IconRecord, IconVariants};
    ///
    /// let icon = IconRecord {
    ///     sizes:      vec!["16".to_owned(), "24".to_owned()],
    ///     deprecated: false,
    ///     file_name:  "home-fill".to_owned(),
    ///     name:       "HomeFill".to_owned(),
    /// };
    /// assert_eq!(IconVariants::for_icon(&icon,), IconVariants::Both);
    /// ```
    pub fn for_icon(icon: &IconRecord,) -> Self
    {
        match (icon.has_size(LARGE_SIZE,), icon.has_size(SMALL_SIZE,),) {
            (true, true,) => Self::Both,
            (true, false,) => Self::LargeOnly,
            _ => Self::SmallOnly,
        }
    }

    /// Member literal used in generated code.
    pub fn as_literal(self,) -> &'static str
    {
        match self {
            Self::Both => ".both",
            Self::LargeOnly => ".large",
            Self::SmallOnly => ".small",
        }
    }
}

impl fmt::Display for IconVariants
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(self.as_literal(),)
    }
}

/// How the platform should tint an icon image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize,)]
pub enum RenderingMode
{
    /// Keep the artwork's own colors.
    #[serde(rename = ".original")]
    Original,
    /// Treat the artwork as a tintable mask.
    #[serde(rename = ".template")]
    Template,
}

impl RenderingMode
{
    /// Derives the rendering mode from the icon's file name.
    ///
    /// Colored artwork (`-color`) and logos (`logo-`) keep their colors
    /// unless explicitly marked `-monocolor`.
    pub fn for_icon(icon: &IconRecord,) -> Self
    {
        Self::for_asset(asset_name(icon,),)
    }

    /// Derives the rendering mode from a bare asset name.
    pub fn for_asset(asset_name: &str,) -> Self
    {
        let colored = asset_name.contains("-color",) || asset_name.contains("logo-",);
        if colored && !asset_name.contains("-monocolor",) { Self::Original } else { Self::Template }
    }

    /// Member literal used in generated code.
    pub fn as_literal(self,) -> &'static str
    {
        match self {
            Self::Original => ".original",
            Self::Template => ".template",
        }
    }
}

impl fmt::Display for RenderingMode
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(self.as_literal(),)
    }
}

/// Asset catalog name of an icon, which is its exported file name.
pub fn asset_name(icon: &IconRecord,) -> &str
{
    &icon.file_name
}
