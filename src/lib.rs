//! Derivation of themed asset catalog layouts from exported icon paths.
//!
//! The library parses slash-delimited icon paths exported from a design tool,
//! groups their size variants per theme and derives every value the code
//! generation templates need: catalog file paths, descriptor locations,
//! per-icon rendering flags and per-theme naming. All operations are pure
//! and deterministic so regenerating a package from the same export yields
//! identical output.

mod aggregate;
mod case;
mod catalog;
mod config;
mod error;
mod input;
mod path;
mod rendering;
mod service;
mod theme;

pub use aggregate::{IconRecord, IconSet, aggregate};
pub use case::{CaseStrategy, pascal_case};
pub use catalog::{
    ImageDescriptor, all_themes, asset_output_path, default_icon_set, image_descriptors,
    non_default_themes, size_folder_descriptors,
};
pub use config::{CatalogConfig, load_config, parse_config};
pub use error::{Error, io_error, serialize_error};
pub use input::{AssetGroup, AssetIcon, AssetOrigin, load_asset_groups, parse_asset_groups};
pub use path::{DEFAULT_THEME, IconPath, theme_token};
pub use rendering::{IconVariants, RenderingMode, asset_name};
pub use service::{Callback, CatalogPlan, IconBinding, IconCatalog, ThemePlan};
pub use theme::{
    DEFAULT_THEME_NAME, ThemeNaming, activator_path, bundle_name, imports, package_source_folder,
    provider_path, provider_visibility,
};
