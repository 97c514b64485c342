use crate::core::{
    category::Category,
    command_init::CommandInit,
    error::Result,
    print_section_header,
    templates::{render_template, TemplateContext, TEMPLATES},
};
use std::path::Path;

/// List catalog items grouped by category, optionally just one category
pub fn execute_catalog(home: Option<&Path>, category: Option<&str>) -> Result<()> {
    let only = category.map(str::parse::<Category>).transpose()?;
    let context = CommandInit::initialize(home)?;

    let categories: Vec<Category> = match only {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    for category in categories {
        print_section_header(&category.to_string());
        for (i, item) in context.catalog.filter(category, None).enumerate() {
            let line = TemplateContext {
                category: Some(category),
                n: Some(i + 1),
                name: Some(item.name.as_str()),
                price: Some(item.price),
                description: Some(item.description.as_str()),
                ..Default::default()
            };
            println!("{}", render_template(TEMPLATES.catalog_line, &line));
        }
    }
    println!();
    Ok(())
}
