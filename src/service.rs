// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Named entry points consumed by the code generation host.
//!
//! The host's templates call helpers by name with positional JSON arguments
//! and splice the returned values into generated files. [`IconCatalog`]
//! exposes every helper as a typed method, and [`Callback`] maps the names
//! templates use onto those methods through [`IconCatalog::invoke`].

use std::{fmt, str::FromStr};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    aggregate::{IconRecord, IconSet, aggregate},
    case::CaseStrategy,
    catalog::{self, ImageDescriptor},
    config::CatalogConfig,
    error::{self, Error},
    input::AssetGroup,
    rendering::{self, IconVariants, RenderingMode},
    theme::{self, ThemeNaming},
};

/// Helper names known to the generation templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash,)]
pub enum Callback
{
    /// `getAvailableIcons(assetGroups)`
    AvailableIcons,
    /// `getAssetOutput(path)`
    AssetOutput,
    /// `getContentJSONDataForImages(assetGroups)`
    ImageDescriptors,
    /// `getContentJSONForSizeFolders(assetGroups)`
    SizeFolderDescriptors,
    /// `getDefaultIconSet(assetGroups)`
    DefaultIconSet,
    /// `getNonDefaultIconThemes(assetGroups)`
    NonDefaultThemes,
    /// `getAllThemes(assetGroups)`
    AllThemes,
    /// `getPackageSourceFolder(theme)`
    PackageSourceFolder,
    /// `getActivatorPathForTheme(theme)`
    ActivatorPath,
    /// `getProviderPathForTheme(theme)`
    ProviderPath,
    /// `importsForTheme(theme)`
    Imports,
    /// `bundleNameForTheme(theme)`
    BundleName,
    /// `visibilityForProvider(theme)`
    ProviderVisibility,
    /// `variantsForIcon(icon)`
    Variants,
    /// `assetNameForIcon(icon)`
    AssetName,
    /// `renderingModeForIcon(icon)`
    RenderingMode,
    /// `lowercaseFirstLetter(text)`
    LowercaseFirstLetter,
}

impl Callback
{
    /// Every callback in registration order.
    pub const ALL: [Self; 17] = [
        Self::AvailableIcons,
        Self::AssetOutput,
        Self::ImageDescriptors,
        Self::SizeFolderDescriptors,
        Self::DefaultIconSet,
        Self::NonDefaultThemes,
        Self::AllThemes,
        Self::PackageSourceFolder,
        Self::ActivatorPath,
        Self::ProviderPath,
        Self::Imports,
        Self::BundleName,
        Self::ProviderVisibility,
        Self::Variants,
        Self::AssetName,
        Self::RenderingMode,
        Self::LowercaseFirstLetter,
    ];

    /// Name used by templates.
    pub fn name(self,) -> &'static str
    {
        match self {
            Self::AvailableIcons => "getAvailableIcons",
            Self::AssetOutput => "getAssetOutput",
            Self::ImageDescriptors => "getContentJSONDataForImages",
            Self::SizeFolderDescriptors => "getContentJSONForSizeFolders",
            Self::DefaultIconSet => "getDefaultIconSet",
            Self::NonDefaultThemes => "getNonDefaultIconThemes",
            Self::AllThemes => "getAllThemes",
            Self::PackageSourceFolder => "getPackageSourceFolder",
            Self::ActivatorPath => "getActivatorPathForTheme",
            Self::ProviderPath => "getProviderPathForTheme",
            Self::Imports => "importsForTheme",
            Self::BundleName => "bundleNameForTheme",
            Self::ProviderVisibility => "visibilityForProvider",
            Self::Variants => "variantsForIcon",
            Self::AssetName => "assetNameForIcon",
            Self::RenderingMode => "renderingModeForIcon",
            Self::LowercaseFirstLetter => "lowercaseFirstLetter",
        }
    }
}

impl fmt::Display for Callback
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(self.name(),)
    }
}

impl FromStr for Callback
{
    type Err = Error;

    fn from_str(name: &str,) -> Result<Self, Self::Err,>
    {
        Self::ALL
            .into_iter()
            .find(|callback| callback.name() == name,)
            .ok_or_else(|| Error::validation(format!("unknown callback '{name}'"),),)
    }
}

/// Bindings of one icon inside a theme's provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct IconBinding
{
    /// PascalCase icon name.
    pub name:           String,
    /// Lower-camel identifier for generated members.
    pub member_name:    String,
    /// Asset catalog name.
    pub asset_name:     String,
    /// Available size variants.
    pub variants:       IconVariants,
    /// Rendering mode of the image.
    pub rendering_mode: RenderingMode,
    /// Whether the icon is deprecated.
    pub deprecated:     bool,
}

/// Everything generated for one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct ThemePlan
{
    /// Naming outputs of the theme.
    #[serde(flatten)]
    pub naming: ThemeNaming,
    /// Icon bindings sorted by name.
    pub icons:  Vec<IconBinding,>,
}

/// Every derived output for one set of asset groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPlan
{
    /// Aggregated icon sets.
    pub icon_sets:               Vec<IconSet,>,
    /// Per-theme naming and bindings.
    pub themes:                  Vec<ThemePlan,>,
    /// Image set descriptor files.
    pub image_descriptors:       Vec<ImageDescriptor,>,
    /// Size folder descriptor files.
    pub size_folder_descriptors: Vec<String,>,
}

/// Stateless facade over every deriver.
///
/// The catalog only holds its naming configuration; every call that takes
/// asset groups aggregates them afresh.
#[derive(Debug, Clone, Default,)]
pub struct IconCatalog
{
    config: CatalogConfig,
}

impl IconCatalog
{
    /// Creates a catalog with the given naming configuration.
    pub fn new(config: CatalogConfig,) -> Self
    {
        Self {
            config,
        }
    }

    /// Naming configuration in use.
    pub fn config(&self,) -> &CatalogConfig
    {
        &self.config
    }

    /// Aggregated icon sets.
    ///
    /// # Errors
    ///
    /// Propagates malformed icon path errors from aggregation.
    pub fn available_icons(&self, groups: &[AssetGroup],) -> Result<Vec<IconSet,>, Error,>
    {
        aggregate(groups,)
    }

    /// See [`catalog::asset_output_path`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) for malformed paths.
    pub fn asset_output(&self, raw_path: &str,) -> Result<String, Error,>
    {
        catalog::asset_output_path(&self.config, raw_path,)
    }

    /// See [`catalog::image_descriptors`].
    ///
    /// # Errors
    ///
    /// Propagates malformed icon path errors from aggregation.
    pub fn image_descriptors(&self, groups: &[AssetGroup],)
    -> Result<Vec<ImageDescriptor,>, Error,>
    {
        Ok(catalog::image_descriptors(&self.config, &aggregate(groups,)?,),)
    }

    /// See [`catalog::size_folder_descriptors`].
    ///
    /// # Errors
    ///
    /// Propagates malformed icon path errors from aggregation.
    pub fn size_folder_descriptors(&self, groups: &[AssetGroup],) -> Result<Vec<String,>, Error,>
    {
        Ok(catalog::size_folder_descriptors(&self.config, &aggregate(groups,)?,),)
    }

    /// See [`catalog::default_icon_set`].
    ///
    /// # Errors
    ///
    /// Propagates malformed icon path errors from aggregation.
    pub fn default_icon_set(&self, groups: &[AssetGroup],) -> Result<Vec<IconRecord,>, Error,>
    {
        Ok(catalog::default_icon_set(&aggregate(groups,)?,),)
    }

    /// See [`catalog::non_default_themes`].
    ///
    /// # Errors
    ///
    /// Propagates malformed icon path errors from aggregation.
    pub fn non_default_themes(&self, groups: &[AssetGroup],) -> Result<Vec<String,>, Error,>
    {
        Ok(catalog::non_default_themes(&aggregate(groups,)?,),)
    }

    /// See [`catalog::all_themes`].
    ///
    /// # Errors
    ///
    /// Propagates malformed icon path errors from aggregation.
    pub fn all_themes(&self, groups: &[AssetGroup],) -> Result<Vec<String,>, Error,>
    {
        Ok(catalog::all_themes(&aggregate(groups,)?,),)
    }

    /// Module folder for a lowercase theme token.
    pub fn package_source_folder(&self, theme: &str,) -> String
    {
        theme::package_source_folder(&self.config, theme,)
    }

    /// Activator source path for a PascalCase theme name.
    pub fn activator_path(&self, theme: &str,) -> String
    {
        theme::activator_path(&self.config, theme,)
    }

    /// Provider source path for a PascalCase theme name.
    pub fn provider_path(&self, theme: &str,) -> String
    {
        theme::provider_path(&self.config, theme,)
    }

    /// Import block for a PascalCase theme name.
    pub fn imports(&self, theme: &str,) -> String
    {
        theme::imports(&self.config, theme,)
    }

    /// Resource bundle identifier for a PascalCase theme name.
    pub fn bundle_name(&self, theme: &str,) -> String
    {
        theme::bundle_name(&self.config, theme,)
    }

    /// Provider visibility keyword for a PascalCase theme name.
    pub fn provider_visibility(&self, theme: &str,) -> &'static str
    {
        theme::provider_visibility(theme,)
    }

    /// Size variants of an icon.
    pub fn variants(&self, icon: &IconRecord,) -> IconVariants
    {
        IconVariants::for_icon(icon,)
    }

    /// Rendering mode of an icon.
    pub fn rendering_mode(&self, icon: &IconRecord,) -> RenderingMode
    {
        RenderingMode::for_icon(icon,)
    }

    /// Asset catalog name of an icon.
    pub fn asset_name<'icon,>(&self, icon: &'icon IconRecord,) -> &'icon str
    {
        rendering::asset_name(icon,)
    }

    /// Lower-cases the first character of `text`.
    pub fn lowercase_first_letter(&self, text: &str,) -> String
    {
        CaseStrategy::builder(text,).lower_first()
    }

    /// Evaluates every deriver once for the given asset groups.
    ///
    /// # Errors
    ///
    /// Propagates malformed icon path errors from aggregation.
    pub fn plan(&self, groups: &[AssetGroup],) -> Result<CatalogPlan, Error,>
    {
        let icon_sets = aggregate(groups,)?;

        let themes = icon_sets
            .iter()
            .map(|set| ThemePlan {
                naming: ThemeNaming::for_token(&self.config, &set.icon_set_name,),
                icons:  set.icons.iter().map(|icon| self.binding(icon,),).collect(),
            },)
            .collect::<Vec<_,>>();

        let image_descriptors = catalog::image_descriptors(&self.config, &icon_sets,);
        let size_folder_descriptors = catalog::size_folder_descriptors(&self.config, &icon_sets,);
        info!(
            "Planned {} themes, {} image descriptors and {} size folders",
            themes.len(),
            image_descriptors.len(),
            size_folder_descriptors.len()
        );

        Ok(CatalogPlan {
            icon_sets,
            themes,
            image_descriptors,
            size_folder_descriptors,
        },)
    }

    fn binding(&self, icon: &IconRecord,) -> IconBinding
    {
        IconBinding {
            name:           icon.name.clone(),
            member_name:    self.lowercase_first_letter(&icon.name,),
            asset_name:     self.asset_name(icon,).to_owned(),
            variants:       self.variants(icon,),
            rendering_mode: self.rendering_mode(icon,),
            deprecated:     icon.deprecated,
        }
    }

    /// Invokes a callback with positional JSON arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when the argument
    /// count does not match or a path is malformed, and
    /// [`Error::Decode`](Error::Decode) when an argument has the wrong shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use icon_catalog::{Callback, IconCatalog};
    /// use serde_json::json;
    ///
    /// let catalog = IconCatalog::default();
    /// let value = catalog.invoke(Callback::BundleName, &[json!("Caviar")],)?;
    /// assert_eq!(value, json!("PrismIcons_PrismIconsCaviar"));
    /// # Ok::<(), icon_catalog::Error>(())
    /// ```
    pub fn invoke(&self, callback: Callback, args: &[Value],) -> Result<Value, Error,>
    {
        debug!("Invoking {} with {} arguments", callback, args.len());
        let arguments = Arguments {
            callback,
            values: args,
        };
        arguments.expect_count(1,)?;

        match callback {
            Callback::AvailableIcons => encode(self.available_icons(&arguments.groups()?,)?,),
            Callback::AssetOutput => encode(self.asset_output(&arguments.text()?,)?,),
            Callback::ImageDescriptors => encode(self.image_descriptors(&arguments.groups()?,)?,),
            Callback::SizeFolderDescriptors => {
                encode(self.size_folder_descriptors(&arguments.groups()?,)?,)
            }
            Callback::DefaultIconSet => encode(self.default_icon_set(&arguments.groups()?,)?,),
            Callback::NonDefaultThemes => encode(self.non_default_themes(&arguments.groups()?,)?,),
            Callback::AllThemes => encode(self.all_themes(&arguments.groups()?,)?,),
            Callback::PackageSourceFolder => {
                encode(self.package_source_folder(&arguments.text()?,),)
            }
            Callback::ActivatorPath => encode(self.activator_path(&arguments.text()?,),),
            Callback::ProviderPath => encode(self.provider_path(&arguments.text()?,),),
            Callback::Imports => encode(self.imports(&arguments.text()?,),),
            Callback::BundleName => encode(self.bundle_name(&arguments.text()?,),),
            Callback::ProviderVisibility => {
                encode(self.provider_visibility(&arguments.text()?,),)
            }
            Callback::Variants => encode(self.variants(&arguments.icon()?,),),
            Callback::AssetName => encode(self.asset_name(&arguments.icon()?,),),
            Callback::RenderingMode => encode(self.rendering_mode(&arguments.icon()?,),),
            Callback::LowercaseFirstLetter => {
                encode(self.lowercase_first_letter(&arguments.text()?,),)
            }
        }
    }
}

/// Positional arguments of one callback invocation.
struct Arguments<'call,>
{
    callback: Callback,
    values:   &'call [Value],
}

impl Arguments<'_,>
{
    fn expect_count(&self, expected: usize,) -> Result<(), Error,>
    {
        if self.values.len() != expected {
            return Err(Error::validation(format!(
                "callback '{}' expects {expected} argument(s), got {}",
                self.callback,
                self.values.len()
            ),),);
        }
        Ok((),)
    }

    fn first<T: DeserializeOwned,>(&self,) -> Result<T, Error,>
    {
        let value = self.values.first().cloned().unwrap_or(Value::Null,);
        Ok(serde_json::from_value(value,)?,)
    }

    fn groups(&self,) -> Result<Vec<AssetGroup,>, Error,>
    {
        self.first()
    }

    fn text(&self,) -> Result<String, Error,>
    {
        self.first()
    }

    fn icon(&self,) -> Result<IconRecord, Error,>
    {
        self.first()
    }
}

fn encode<T: Serialize,>(value: T,) -> Result<Value, Error,>
{
    serde_json::to_value(value,).map_err(error::serialize_error,)
}
