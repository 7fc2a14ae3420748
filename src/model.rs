use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An amount attached to an ingredient, cookware item, or timer.
///
/// Quantities keep whatever form the recipe author used: `{2}` and `{1/2}`
/// become numbers, anything that does not read as a number (`{a pinch}`,
/// `{01/2}`) is kept as the literal text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(f64),
    Text(String),
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::Number(value)
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Quantity::Text(value.to_string())
    }
}

/// An ingredient
///
/// See [Cooklang Ingredient](https://cooklang.org/docs/spec/#ingredients)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    pub name: String,
    /// Full multiword phrase as authored, when the `@prose{..}` form was used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prose: Option<String>,
    /// Parenthesized descriptor, e.g. `@onion(diced){1}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
    pub quantity: Quantity,
    pub units: String,
    /// Index of the step this ingredient appears in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<usize>,
    /// Raw `|`-delimited measurement expressions from the braces
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurements: Option<Vec<String>>,
    /// Trailing `:group:` label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// A piece of cookware
///
/// See [Cooklang Cookware](https://cooklang.org/docs/spec/#cookware)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cookware {
    pub name: String,
    pub quantity: Quantity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<usize>,
}

/// A timer
///
/// See [Cooklang Timer](https://cooklang.org/docs/spec/#timer)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub quantity: Quantity,
    pub units: String,
}

/// A literal span of step text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub value: String,
}

/// A title of a step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub value: String,
}

/// A piece of text to be highlighted in some way
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub value: String,
}

/// One element of a step. The serialized form carries a lowercase `type`
/// discriminant alongside the element's own fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StepElement {
    Ingredient(Ingredient),
    Cookware(Cookware),
    Timer(Timer),
    Text(Text),
    Title(Title),
    Highlight(Highlight),
}

/// A step consisting of ingredients, cookware, timers, and text
pub type Step = Vec<StepElement>;

/// Document metadata from `>> key: value` lines. Keys are trimmed and
/// unique; the last value parsed for a key wins. Insertion order is
/// preserved but carries no meaning.
///
/// See [Cooklang Metadata](https://cooklang.org/docs/spec/#metadata)
pub type Metadata = IndexMap<String, String>;

/// A shopping list item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub name: String,
    /// Display synonym after `|`; empty when not authored
    pub synonym: String,
}

/// A shopping list of categories and their items
///
/// See [Cooklang Shopping List](https://cooklang.org/docs/spec/#the-shopping-list-specification)
pub type ShoppingList = IndexMap<String, Vec<Item>>;

/// Everything extracted from one recipe document.
///
/// Ingredients and cookware appear both in their owning [`Step`] and in the
/// flat collections here; both views are built from the same construction
/// and never diverge.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ParseResult {
    pub ingredients: Vec<Ingredient>,
    pub cookwares: Vec<Cookware>,
    pub metadata: Metadata,
    pub steps: Vec<Step>,
    pub shopping_list: ShoppingList,
}
