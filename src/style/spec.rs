//! Component skins: base style, variant tables and selectors.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::conditions::{Condition, ConditionState, Dimension};
use super::query::DimensionQuery;
use super::value::{flatten, merge_deep, StyleMap};

/// `variant name → variant value → style`.
pub type VariantTable = IndexMap<String, IndexMap<String, StyleMap>>;

/// Props supplied to a styled component, in call-site order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Props(Vec<(String, String)>);

impl Props {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds a prop. Supplying the same name again keeps both entries; the
    /// later one wins where they touch the same attribute.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((name.into(), value.into()));
        self
    }

    /// Adds a boolean prop, stored as `"true"` / `"false"`.
    #[must_use]
    pub fn flag(self, name: impl Into<String>, value: bool) -> Self {
        self.with(name, value.to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().rev().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `self` followed by `other`.
    #[must_use]
    pub fn chain(&self, other: &Props) -> Props {
        let mut all = self.0.clone();
        all.extend(other.0.iter().cloned());
        Props(all)
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(n, v)| (n.into(), v.into())).collect())
    }
}

/// Styles applied while a selector is active: an optional flat override
/// plus per-variant overrides keyed like [`StyleSpec::variants`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorTable {
    pub base: StyleMap,
    pub variants: VariantTable,
}

impl SelectorTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A flat override with no variant part.
    #[must_use]
    pub fn flat(style: StyleMap) -> Self {
        Self {
            base: style,
            variants: VariantTable::new(),
        }
    }

    #[must_use]
    pub fn base(mut self, style: StyleMap) -> Self {
        merge_deep(&mut self.base, &style);
        self
    }

    #[must_use]
    pub fn variant(mut self, name: &str, value: &str, style: StyleMap) -> Self {
        insert_variant(&mut self.variants, name, value, style);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.variants.is_empty()
    }

    /// Deep-merges another table into this one.
    pub fn merge(&mut self, other: &SelectorTable) {
        merge_deep(&mut self.base, &other.base);
        for (name, values) in &other.variants {
            for (value, style) in values {
                let slot = self
                    .variants
                    .entry(name.clone())
                    .or_default()
                    .entry(value.clone())
                    .or_default();
                merge_deep(slot, style);
            }
        }
    }

    /// Applies this table on top of `style` for the given props.
    pub fn apply(&self, style: &mut StyleMap, props: &Props) {
        merge_deep(style, &self.base);
        for (name, value) in props.iter() {
            if let Some(layer) = self.variants.get(name).and_then(|values| values.get(value)) {
                merge_deep(style, layer);
            }
        }
    }
}

/// Selector declarations of a skin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub conditions: IndexMap<Condition, SelectorTable>,
    /// `(expression, table)` in declaration order.
    pub width: Vec<(String, SelectorTable)>,
    pub height: Vec<(String, SelectorTable)>,
}

impl Selectors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.width.is_empty() && self.height.is_empty()
    }

    fn dimension_entries(&self, dimension: Dimension) -> &[(String, SelectorTable)] {
        match dimension {
            Dimension::Width => &self.width,
            Dimension::Height => &self.height,
        }
    }

    /// Combines every selector table that is active under `state`.
    ///
    /// Boolean conditions are merged in [`Condition`] order, then width and
    /// height entries whose expression matches, in declaration order.
    /// Expressions that fail to parse are skipped with a warning.
    #[must_use]
    pub fn active_table(&self, state: &ConditionState) -> SelectorTable {
        let mut combined = SelectorTable::new();

        for condition in state.active() {
            if let Some(table) = self.conditions.get(&condition) {
                combined.merge(table);
            }
        }

        for dimension in [Dimension::Width, Dimension::Height] {
            let current = state.dimension(dimension);
            for (expression, table) in self.dimension_entries(dimension) {
                match expression.parse::<DimensionQuery>() {
                    Ok(query) if query.matches(current) => combined.merge(table),
                    Ok(_) => {}
                    Err(e) => {
                        log::warn!(
                            "Did not pass in a valid query selector '{current} {expression}' ({e}); \
                             try a key with a valid expression like '> {{number}}'"
                        );
                    }
                }
            }
        }

        combined
    }
}

/// A component skin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSpec {
    pub base: StyleMap,
    pub variants: VariantTable,
    pub selectors: Selectors,
    /// Props every instance receives before its call-site props.
    pub props: Props,
}

impl StyleSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn base(mut self, style: StyleMap) -> Self {
        merge_deep(&mut self.base, &style);
        self
    }

    #[must_use]
    pub fn variant(mut self, name: &str, value: &str, style: StyleMap) -> Self {
        insert_variant(&mut self.variants, name, value, style);
        self
    }

    #[must_use]
    pub fn selector(mut self, condition: Condition, table: SelectorTable) -> Self {
        self.selectors.conditions.entry(condition).or_default().merge(&table);
        self
    }

    #[must_use]
    pub fn width_query(mut self, expression: &str, table: SelectorTable) -> Self {
        self.selectors.width.push((expression.to_string(), table));
        self
    }

    #[must_use]
    pub fn height_query(mut self, expression: &str, table: SelectorTable) -> Self {
        self.selectors.height.push((expression.to_string(), table));
        self
    }

    #[must_use]
    pub fn default_prop(mut self, name: &str, value: &str) -> Self {
        self.props = self.props.with(name, value);
        self
    }

    /// Base plus matching variants, before selectors.
    #[must_use]
    pub fn variant_style(&self, props: &Props) -> StyleMap {
        let mut style = self.base.clone();
        for (name, value) in props.iter() {
            if let Some(layer) = self.variants.get(name).and_then(|values| values.get(value)) {
                merge_deep(&mut style, layer);
            }
        }
        style
    }

    /// Resolves the flattened style for `props` under `state`.
    #[must_use]
    pub fn resolve(&self, props: &Props, state: &ConditionState, explicit: Option<&StyleMap>) -> StyleMap {
        let selectors = self.selectors.active_table(state);
        self.resolve_with(props, &selectors, explicit)
    }

    /// Resolves using an already computed selector table.
    #[must_use]
    pub fn resolve_with(&self, props: &Props, selectors: &SelectorTable, explicit: Option<&StyleMap>) -> StyleMap {
        let props = self.props.chain(props);
        let mut style = self.variant_style(&props);
        selectors.apply(&mut style, &props);
        if let Some(explicit) = explicit {
            merge_deep(&mut style, explicit);
        }
        flatten(&style)
    }
}

fn insert_variant(table: &mut VariantTable, name: &str, value: &str, style: StyleMap) {
    let slot = table
        .entry(name.to_string())
        .or_default()
        .entry(value.to_string())
        .or_default();
    merge_deep(slot, &style);
}
