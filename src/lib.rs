//! A parser for the [Cooklang](https://cooklang.org/) recipe markup language.
//!
//! Cooklang recipes are free-form prose with inline markup for ingredients
//! (`@salt`, `@red pepper{2%pieces}`), cookware (`#pan{}`), timers
//! (`~{10%minutes}`), titles, highlights, and `>> key: value` metadata
//! lines. Parsing turns a document into a [`ParseResult`]: ordered steps of
//! typed elements plus flat ingredient and cookware collections and the
//! document metadata.
//!
//! Parsing is lenient: markup that does not match the grammar is kept as
//! literal text, and quantities that do not read as numbers stay literal
//! strings, so [`Parser::parse`] always succeeds.
//!
//! # Basic usage
//! ```
//! let recipe = cooklang_parser::parse("Crack @eggs{3} into a #bowl and whisk.");
//! assert_eq!(recipe.ingredients[0].name, "eggs");
//! assert_eq!(recipe.steps.len(), 1);
//! ```
//!
//! To change the defaults, construct the parser yourself:
//! ```
//! use cooklang_parser::{Parser, ParserOptions, Quantity};
//!
//! let parser = Parser::new(ParserOptions {
//!     default_ingredient_amount: Quantity::Text("some".into()),
//!     ..ParserOptions::default()
//! });
//! let recipe = parser.parse("Season with @salt.");
//! assert_eq!(recipe.ingredients[0].quantity, Quantity::Text("some".into()));
//! ```

pub mod config;
pub mod model;
pub mod parser;
pub mod quantity;
pub mod shopping_list;
pub mod tokens;

mod error;

pub use error::OptionsError;
pub use model::{
    Cookware, Highlight, Ingredient, Item, Metadata, ParseResult, Quantity, ShoppingList, Step,
    StepElement, Text, Timer, Title,
};
pub use parser::{Parser, ParserOptions};
pub use quantity::{parse_quantity, parse_units};
pub use shopping_list::{parse_category_items, parse_shopping_list};

/// Parse a recipe document with the default parser configuration.
pub fn parse(source: &str) -> ParseResult {
    Parser::default().parse(source)
}
