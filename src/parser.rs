//! The recipe parser: comment stripping, paragraph segmentation, and the
//! dispatch of grammar matches into typed step elements.

use log::debug;
use serde::Deserialize;

use crate::model::{
    Cookware, Highlight, Ingredient, Metadata, ParseResult, Quantity, ShoppingList, Step,
    StepElement, Text, Timer, Title,
};
use crate::quantity::{parse_quantity, parse_units};
use crate::tokens::{strip_comments, TokenKind, TokenStream, PARAGRAPH_SEPARATOR};

/// Construction-time settings for a [`Parser`].
///
/// Can be built directly, or loaded from `cooklang.toml` / `COOKLANG__`
/// environment variables with [`ParserOptions::load`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Value substituted when cookware has no explicit quantity
    pub default_cookware_amount: Quantity,
    /// Value substituted when an ingredient has no explicit quantity
    pub default_ingredient_amount: Quantity,
    /// When true, elements carry the original paragraph position instead of
    /// the compacted step index
    pub include_step_number: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            default_cookware_amount: Quantity::Number(1.0),
            default_ingredient_amount: Quantity::Text(String::new()),
            include_step_number: false,
        }
    }
}

/// A configured Cooklang parser.
///
/// The parser holds only its configuration; every [`parse`](Parser::parse)
/// call builds a fresh [`ParseResult`], so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Parser {
    default_cookware_amount: Quantity,
    default_ingredient_amount: Quantity,
    include_step_number: bool,
    default_units: String,
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new(ParserOptions::default())
    }
}

impl Parser {
    pub fn new(options: ParserOptions) -> Self {
        Parser {
            default_cookware_amount: options.default_cookware_amount,
            default_ingredient_amount: options.default_ingredient_amount,
            include_step_number: options.include_step_number,
            default_units: String::new(),
        }
    }

    /// Parse one recipe document.
    ///
    /// Parsing is total: malformed markup degrades to literal text instead of
    /// failing, so this never returns an error.
    ///
    /// # Example
    /// ```
    /// use cooklang_parser::Parser;
    ///
    /// let parser = Parser::default();
    /// let result = parser.parse("Add @salt to the #pan{} and stir.");
    /// assert_eq!(result.ingredients[0].name, "salt");
    /// assert_eq!(result.cookwares[0].name, "pan");
    /// ```
    pub fn parse(&self, source: &str) -> ParseResult {
        let source = strip_comments(source);

        let mut ingredients = Vec::new();
        let mut cookwares = Vec::new();
        let mut metadata = Metadata::new();
        let mut steps = Vec::new();

        // Paragraph positions before filtering and step indices after it
        // diverge when blank paragraphs sit between content ones; the
        // include_step_number option selects which one tags the elements.
        let mut step_index = 0;
        for (paragraph_index, paragraph) in PARAGRAPH_SEPARATOR.split(&source).enumerate() {
            if paragraph.trim().is_empty() {
                continue;
            }
            let current_step = if self.include_step_number {
                paragraph_index
            } else {
                step_index
            };
            steps.push(self.parse_paragraph(
                paragraph,
                current_step,
                &mut ingredients,
                &mut cookwares,
                &mut metadata,
            ));
            step_index += 1;
        }

        debug!(
            "parsed {} steps, {} ingredients, {} cookware items",
            steps.len(),
            ingredients.len(),
            cookwares.len()
        );

        ParseResult {
            ingredients,
            cookwares,
            metadata,
            steps,
            shopping_list: ShoppingList::new(),
        }
    }

    /// Scan one paragraph, emitting a literal Text element for every gap
    /// between matches and exactly one semantic element per match.
    fn parse_paragraph(
        &self,
        paragraph: &str,
        current_step: usize,
        ingredients: &mut Vec<Ingredient>,
        cookwares: &mut Vec<Cookware>,
        metadata: &mut Metadata,
    ) -> Step {
        let mut elements: Step = Vec::new();
        let mut pos = 0;

        for token in TokenStream::new(paragraph) {
            if pos < token.start {
                elements.push(StepElement::Text(Text {
                    value: paragraph[pos..token.start].to_string(),
                }));
            }

            match token.kind {
                TokenKind::Metadata { key, value } => {
                    // Document-scoped; metadata lines emit no step element.
                    metadata.insert(key.trim().to_string(), value.trim().to_string());
                }
                TokenKind::SingleWordIngredient { name } => {
                    let ingredient = Ingredient {
                        name: name.to_string(),
                        prose: None,
                        descriptor: None,
                        quantity: self.default_ingredient_amount.clone(),
                        units: self.default_units.clone(),
                        step: Some(current_step),
                        measurements: None,
                        group: None,
                    };
                    ingredients.push(ingredient.clone());
                    elements.push(StepElement::Ingredient(ingredient));
                }
                TokenKind::MultiwordIngredient {
                    prose,
                    name,
                    descriptor,
                    measurements,
                    group,
                } => {
                    let measurements: Vec<String> =
                        measurements.split('|').map(str::to_string).collect();
                    let first = measurements.first().map(String::as_str).unwrap_or_default();
                    let mut parts = first.split('%');
                    let quantity = parts
                        .next()
                        .and_then(parse_quantity)
                        .unwrap_or_else(|| self.default_ingredient_amount.clone());
                    let units = parts
                        .next()
                        .and_then(|raw| parse_units(raw))
                        .unwrap_or_else(|| self.default_units.clone());

                    let ingredient = Ingredient {
                        name: name.unwrap_or(prose).to_string(),
                        prose: Some(prose.to_string()),
                        descriptor: descriptor.map(|d| d.trim().to_string()),
                        quantity,
                        units,
                        step: Some(current_step),
                        measurements: Some(measurements),
                        group: group.map(|g| g.trim().to_string()),
                    };
                    ingredients.push(ingredient.clone());
                    elements.push(StepElement::Ingredient(ingredient));
                }
                TokenKind::SingleWordCookware { name } => {
                    let cookware = Cookware {
                        name: name.to_string(),
                        quantity: self.default_cookware_amount.clone(),
                        step: self.include_step_number.then_some(current_step),
                    };
                    cookwares.push(cookware.clone());
                    elements.push(StepElement::Cookware(cookware));
                }
                TokenKind::MultiwordCookware { name, quantity } => {
                    let cookware = Cookware {
                        name: name.to_string(),
                        quantity: parse_quantity(quantity)
                            .unwrap_or_else(|| self.default_cookware_amount.clone()),
                        step: self.include_step_number.then_some(current_step),
                    };
                    cookwares.push(cookware.clone());
                    elements.push(StepElement::Cookware(cookware));
                }
                TokenKind::Timer {
                    name,
                    quantity,
                    units,
                } => {
                    elements.push(StepElement::Timer(Timer {
                        name: (!name.is_empty()).then(|| name.to_string()),
                        quantity: parse_quantity(quantity).unwrap_or(Quantity::Number(0.0)),
                        units: units
                            .and_then(|raw| parse_units(raw))
                            .unwrap_or_else(|| self.default_units.clone()),
                    }));
                }
                TokenKind::Title { text } => {
                    elements.push(StepElement::Title(Title {
                        value: text.trim().to_string(),
                    }));
                }
                TokenKind::Highlight { prose, class } => {
                    elements.push(StepElement::Highlight(Highlight {
                        class: class.map(str::to_string),
                        value: prose.to_string(),
                    }));
                }
            }

            pos = token.end;
        }

        // Whatever follows the last match stays as literal text.
        if pos < paragraph.len() {
            elements.push(StepElement::Text(Text {
                value: paragraph[pos..].to_string(),
            }));
        }

        elements
    }
}
