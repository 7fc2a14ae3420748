//! The shopping list categorizer.
//!
//! A standalone utility over the `[Category]` block format:
//!
//! ```text
//! [Produce]
//! onion
//! red pepper|peppers
//! ```
//!
//! [`Parser::parse`](crate::Parser::parse) does not invoke it, so a parse
//! result's shopping list stays empty. Feeding the relevant region of a
//! source file through [`parse_shopping_list`] is an integration decision
//! left to the caller.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Item, ShoppingList};

/// `[Category]` heading followed by item lines until a blank line or the end
/// of input.
static CATEGORY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(?P<name>.+)\]\n(?P<items>(?s:.*?))(?:\n\n|$)").unwrap());

/// Collect every `[Category]` block of `source` into a categorized list.
pub fn parse_shopping_list(source: &str) -> ShoppingList {
    let mut list = ShoppingList::new();
    for caps in CATEGORY.captures_iter(source) {
        let name = caps.name("name").map_or("", |m| m.as_str());
        let items = caps.name("items").map_or("", |m| m.as_str());
        list.insert(name.to_string(), parse_category_items(items));
    }
    list
}

/// Parse one category's item block: one item per line, `name|synonym`,
/// blank lines skipped, synonym empty when not authored.
pub fn parse_category_items(block: &str) -> Vec<Item> {
    let mut items = Vec::new();

    for line in block.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (name, synonym) = match line.split_once('|') {
            Some((name, synonym)) => (name, synonym),
            None => (line, ""),
        };

        items.push(Item {
            name: name.trim().to_string(),
            synonym: synonym.trim().to_string(),
        });
    }

    items
}
