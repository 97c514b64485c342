//! Template system for command output.
//!
//! Templates are plain strings with `{placeholder}` slots. Rendering is a
//! single pass that substitutes each placeholder from a [`TemplateContext`]
//! and colors it on the way in, so literal template text stays uncolored.
//!
//! # Public API
//! - [`Templates`] / [`TEMPLATES`]: Every line the CLI prints about items
//! - [`TemplateContext`]: Values for one rendering
//! - [`render_template`]: Colored rendering
//! - [`render_template_plain`]: Same output without ANSI codes, for tests
//!
//! # Placeholders
//! `{category}`, `{name}`, `{price}`, `{description}`, `{n}`, `{progress}`,
//! `{total}`, `{count}`, `{outfit_name}`. Unknown placeholders are kept
//! verbatim; placeholders with no value render as nothing.

use crate::core::category::Category;
use crate::core::colors::{category_style, colored_category, colored_price, muted};
use colored::*;

/// Template definitions for all item-related output
pub struct Templates {
    pub browse_header: &'static str,
    pub card_name: &'static str,
    pub card_price: &'static str,
    pub card_description: &'static str,
    pub card_empty: &'static str,
    pub slot_filled: &'static str,
    pub slot_empty: &'static str,
    pub outfit_total: &'static str,
    pub saved_entry: &'static str,
    pub saved_item: &'static str,
    pub catalog_line: &'static str,
}

/// Global templates instance
pub static TEMPLATES: Templates = Templates {
    browse_header: "Choose your {category}  {progress}",
    card_name: "   {name}",
    card_price: "   {price}",
    card_description: "   {description}",
    card_empty: "   No {category} left to swipe.",
    slot_filled: "   {category}  {name} {price}",
    slot_empty: "   {category}  No {category} selected",
    outfit_total: "Total: {total}",
    saved_entry: "[{n}] {outfit_name} ({count} items, {total})",
    saved_item: "      {category}  {name}",
    catalog_line: "   [{n}] {name} {price}  {description}",
};

/// Context for template rendering
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateContext<'a> {
    pub category: Option<Category>,
    pub name: Option<&'a str>,
    pub price: Option<f64>,
    pub description: Option<&'a str>,
    pub n: Option<usize>,
    pub progress: Option<&'a str>,
    pub total: Option<f64>,
    pub count: Option<usize>,
    pub outfit_name: Option<&'a str>,
}

/// Render a template with context and apply colors
pub fn render_template(template: &str, context: &TemplateContext) -> String {
    let mut output = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                push_placeholder(&mut output, &after[..close], context);
                rest = &after[close + 1..];
            }
            None => {
                // No closing brace, keep the remainder literally
                output.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    output.push_str(rest);
    output
}

fn push_placeholder(output: &mut String, placeholder: &str, context: &TemplateContext) {
    let rendered = match placeholder {
        "category" => context.category.map(|category| colored_category(category).to_string()),
        "name" => context.name.map(|name| match context.category {
            Some(category) => category_style(category, name).bold().to_string(),
            None => name.white().bold().to_string(),
        }),
        "price" => context.price.map(|price| colored_price(price).to_string()),
        "total" => context.total.map(|total| colored_price(total).bold().to_string()),
        "description" => context.description.map(|description| muted(description).to_string()),
        "n" => context.n.map(|n| n.to_string().white().to_string()),
        "count" => context.count.map(|count| count.to_string()),
        "progress" => context.progress.map(str::to_string),
        "outfit_name" => context.outfit_name.map(|name| name.white().bold().to_string()),
        unknown => Some(format!("{{{unknown}}}")),
    };

    if let Some(text) = rendered {
        output.push_str(&text);
    }
}

/// Strip ANSI color codes
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Render template without colors
pub fn render_template_plain(template: &str, context: &TemplateContext) -> String {
    strip_ansi_codes(&render_template(template, context))
}
