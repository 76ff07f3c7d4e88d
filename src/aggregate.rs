// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Grouping of parsed icon paths into per-theme icon sets.
//!
//! Every exported variant of an icon shows up as its own asset, so the same
//! logical icon is observed once per size. Aggregation folds those
//! observations into one [`IconRecord`] per `(theme, name)` pair and emits the
//! themes in first-encounter order with their icons sorted by name. The
//! output feeds file generation and must be identical across runs on the same
//! input.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::Error, input::AssetGroup, path::IconPath};

/// Aggregated view of one logical icon across its size variants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct IconRecord
{
    /// Pixel sizes in first-observation order, without repeats.
    pub sizes:      Vec<String,>,
    /// Deprecation flag of the first observation.
    pub deprecated: bool,
    /// File name of the first observation.
    pub file_name:  String,
    /// PascalCase icon name, unique within a theme.
    pub name:       String,
}

impl IconRecord
{
    fn from_path(path: &IconPath,) -> Self
    {
        Self {
            sizes:      vec![path.size.clone()],
            deprecated: path.is_deprecated,
            file_name:  path.file_name.clone(),
            name:       path.icon_name.clone(),
        }
    }

    /// Returns `true` when the icon has a variant of the given size.
    pub fn has_size(&self, size: &str,) -> bool
    {
        self.sizes.iter().any(|candidate| candidate == size,)
    }

    fn record_size(&mut self, size: &str,)
    {
        if !self.has_size(size,) {
            self.sizes.push(size.to_owned(),);
        }
    }
}

/// Icons belonging to one theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct IconSet
{
    /// Lowercased theme token.
    pub icon_set_name: String,
    /// Icons sorted ascending by name.
    pub icons:         Vec<IconRecord,>,
}

/// Theme bucket keyed by icon name; `BTreeMap` keeps names in UTF-8 byte order.
type ThemeBucket = BTreeMap<String, IconRecord,>;

/// Aggregates asset groups into icon sets.
///
/// Themes appear in the order their first icon was encountered. Repeated
/// observations of an icon append unseen sizes and otherwise leave the record
/// untouched, so deprecation and file name come from the first observation.
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) when any origin path is
/// malformed.
///
/// # Examples
///
/// ```
/// use icon_catalog::{AssetGroup, aggregate};
///
/// let groups = vec![AssetGroup::from_paths([
///     "Icons/Icons/16/home-fill",
///     "Icons/Icons/24/home-fill",
/// ],)];
/// let sets = aggregate(&groups,)?;
/// assert_eq!(sets[0].icon_set_name, "default");
/// assert_eq!(sets[0].icons[0].sizes, ["16", "24"]);
/// # Ok::<(), icon_catalog::Error>(())
/// ```
pub fn aggregate(groups: &[AssetGroup],) -> Result<Vec<IconSet,>, Error,>
{
    let paths = groups
        .iter()
        .flat_map(|group| group.icons.iter(),)
        .map(|icon| IconPath::parse(&icon.origin.name,),)
        .collect::<Result<Vec<_,>, _,>>()?;

    let mut themes: Vec<(String, ThemeBucket,),> = Vec::new();
    for path in &paths {
        if !themes.iter().any(|(theme, _,)| *theme == path.theme,) {
            themes.push((path.theme.clone(), ThemeBucket::new(),),);
        }
    }
    debug!("Registered {} themes from {} icon paths", themes.len(), paths.len());

    for path in &paths {
        let Some((_, bucket,),) = themes.iter_mut().find(|(theme, _,)| *theme == path.theme,)
        else {
            continue;
        };

        bucket
            .entry(path.icon_name.clone(),)
            .and_modify(|record| record.record_size(&path.size,),)
            .or_insert_with(|| IconRecord::from_path(path,),);
    }

    Ok(themes
        .into_iter()
        .map(|(theme, bucket,)| {
            debug!("Theme '{}' holds {} icons", theme, bucket.len());
            IconSet {
                icon_set_name: theme,
                icons:         bucket.into_values().collect(),
            }
        },)
        .collect(),)
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::{IconRecord, IconSet, aggregate};
    use crate::{error::Error, input::AssetGroup};

    fn record(name: &str, file_name: &str, sizes: &[&str], deprecated: bool,) -> IconRecord
    {
        IconRecord {
            sizes: sizes.iter().map(|size| (*size).to_owned(),).collect(),
            deprecated,
            file_name: file_name.to_owned(),
            name: name.to_owned(),
        }
    }

    proptest! {
        #[test]
        fn output_is_sorted_unique_and_idempotent(
            stems in prop::collection::vec("[a-z]{1,6}(-[a-z]{1,6})?", 1..24),
            sizes in prop::collection::vec("(16|24)", 1..24),
        ) {
            let paths: Vec<String> = stems
                .iter()
                .zip(sizes.iter().cycle())
                .map(|(stem, size)| format!("Icons/Icons/{size}/{stem}"))
                .collect();
            let groups = vec![AssetGroup::from_paths(paths)];

            let first = aggregate(&groups).expect("well-formed input");
            let second = aggregate(&groups).expect("well-formed input");
            prop_assert_eq!(&first, &second);

            for set in &first {
                prop_assert!(set.icons.windows(2).all(|pair| pair[0].name < pair[1].name));
                for icon in &set.icons {
                    let mut unique = icon.sizes.clone();
                    unique.sort();
                    unique.dedup();
                    prop_assert_eq!(unique.len(), icon.sizes.len());
                }
            }
        }
    }

    #[test]
    fn splits_icons_by_theme()
    {
        let groups = vec![AssetGroup::from_paths([
            "Icons/Icons/24/home-fill",
            "Caviar Icons/16/home-fill",
        ],)];

        let sets = aggregate(&groups,).expect("expected aggregation success",);
        assert_eq!(sets, vec![
            IconSet {
                icon_set_name: "default".to_owned(),
                icons:         vec![record("HomeFill", "home-fill", &["24"], false,)],
            },
            IconSet {
                icon_set_name: "caviar".to_owned(),
                icons:         vec![record("HomeFill", "home-fill", &["16"], false,)],
            },
        ]);
    }

    #[test]
    fn merges_size_variants_into_one_record()
    {
        let groups = vec![AssetGroup::from_paths([
            "Icons/Icons/16/home-fill",
            "Icons/Icons/24/home-fill",
        ],)];

        let sets = aggregate(&groups,).expect("expected aggregation success",);
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].icons, vec![record("HomeFill", "home-fill", &["16", "24"], false,)]);
    }

    #[test]
    fn merges_variants_across_groups()
    {
        let groups = vec![
            AssetGroup::from_paths(["Caviar Icons/24/cart",],),
            AssetGroup::from_paths(["Caviar Icons/16/cart",],),
        ];

        let sets = aggregate(&groups,).expect("expected aggregation success",);
        assert_eq!(sets[0].icons[0].sizes, ["24", "16"]);
    }

    #[test]
    fn repeated_sizes_are_recorded_once()
    {
        let groups = vec![AssetGroup::from_paths([
            "Icons/Icons/24/home",
            "Icons/Icons/24/home",
            "Icons/Icons/16/home",
        ],)];

        let sets = aggregate(&groups,).expect("expected aggregation success",);
        assert_eq!(sets[0].icons[0].sizes, ["24", "16"]);
    }

    #[test]
    fn deprecation_is_fixed_by_first_observation()
    {
        let groups = vec![AssetGroup::from_paths([
            "Icons/Deprecated Icons/16/old",
            "Icons/Icons/24/old",
            "Icons/Icons/24/fresh",
            "Icons/Deprecated Icons/16/fresh",
        ],)];

        let sets = aggregate(&groups,).expect("expected aggregation success",);
        let icons = &sets[0].icons;
        assert_eq!(icons[0].name, "Fresh");
        assert!(!icons[0].deprecated);
        assert_eq!(icons[1].name, "Old");
        assert!(icons[1].deprecated);
    }

    #[test]
    fn sorts_icons_by_ordinal_name()
    {
        let groups = vec![AssetGroup::from_paths([
            "Icons/Icons/24/zoom",
            "Icons/Icons/24/arrow-up",
            "Icons/Icons/24/Arrow-down",
            "Icons/Icons/24/_private",
        ],)];

        let sets = aggregate(&groups,).expect("expected aggregation success",);
        let names: Vec<_,> = sets[0].icons.iter().map(|icon| icon.name.as_str(),).collect();
        assert_eq!(names, ["ArrowDown", "ArrowUp", "Zoom", "_private"]);
    }

    #[test]
    fn themes_follow_first_encounter_order()
    {
        let groups = vec![AssetGroup::from_paths([
            "Caviar Icons/24/a",
            "Icons/Icons/24/b",
            "Storefront Icons/24/c",
            "Caviar Icons/16/d",
        ],)];

        let sets = aggregate(&groups,).expect("expected aggregation success",);
        let themes: Vec<_,> = sets.iter().map(|set| set.icon_set_name.as_str(),).collect();
        assert_eq!(themes, ["caviar", "default", "storefront"]);
    }

    #[test]
    fn numeric_theme_tokens_keep_encounter_order()
    {
        let groups = vec![AssetGroup::from_paths([
            "Caviar Icons/24/a",
            "2024 Icons/24/b",
            "Icons/Icons/24/c",
        ],)];

        let sets = aggregate(&groups,).expect("expected aggregation success",);
        let themes: Vec<_,> = sets.iter().map(|set| set.icon_set_name.as_str(),).collect();
        assert_eq!(themes, ["caviar", "2024", "default"]);
    }

    #[test]
    fn non_ascii_names_sort_by_utf8_bytes()
    {
        let groups = vec![AssetGroup::from_paths([
            "Icons/Icons/24/\u{1F600}-face",
            "Icons/Icons/24/\u{FF21}-letter",
            "Icons/Icons/24/plain",
        ],)];

        let sets = aggregate(&groups,).expect("expected aggregation success",);
        let names: Vec<_,> = sets[0].icons.iter().map(|icon| icon.name.as_str(),).collect();
        assert_eq!(names, ["Plain", "\u{FF21}Letter", "\u{1F600}Face"]);
    }

    #[test]
    fn empty_input_yields_no_sets()
    {
        let sets = aggregate(&[],).expect("expected aggregation success",);
        assert!(sets.is_empty());

        let sets = aggregate(&[AssetGroup::from_paths(Vec::<String,>::new(),)],)
            .expect("expected aggregation success",);
        assert!(sets.is_empty());
    }

    #[test]
    fn malformed_path_is_reported()
    {
        let groups = vec![AssetGroup::from_paths(["Icons/Icons/24/ok", "broken",],)];
        let error = aggregate(&groups,).expect_err("expected validation error",);
        assert!(matches!(error, Error::Validation { .. }));
    }

    #[test]
    fn serializes_with_template_field_names()
    {
        let groups = vec![AssetGroup::from_paths(["Icons/Icons/24/home-fill",],)];
        let sets = aggregate(&groups,).expect("expected aggregation success",);

        let json = serde_json::to_string(&sets,).expect("serialization failed",);
        assert_eq!(
            json,
            r#"[{"iconSetName":"default","icons":[{"sizes":["24"],"deprecated":false,"fileName":"home-fill","name":"HomeFill"}]}]"#
        );
    }
}
