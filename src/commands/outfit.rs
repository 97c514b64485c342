use crate::core::{
    category::Category,
    command_init::CommandInit,
    error::Result,
    outfit::Outfit,
    print_info, print_section_header, print_success,
    templates::{render_template, TemplateContext, TEMPLATES},
};
use std::path::Path;

/// Show the outfit visualizer: every slot plus the running total
pub fn execute_outfit(home: Option<&Path>) -> Result<()> {
    let context = CommandInit::initialize(home)?;
    context.run(|session| {
        print_outfit(session.outfit());
        Ok(())
    })
}

pub fn execute_remove(home: Option<&Path>, category: &str) -> Result<()> {
    let category: Category = category.parse()?;
    let context = CommandInit::initialize(home)?;

    context.run(|session| {
        match session.remove_from_outfit(category) {
            Some(_) => print_success(&format!("Removed {category} from your outfit.")),
            None => print_info(&format!("No {category} selected.")),
        }
        print_outfit(session.outfit());
        Ok(())
    })
}

pub fn print_outfit(outfit: &Outfit) {
    print_section_header("Outfit Visualizer");

    for (category, item) in outfit.iter() {
        let line = match item {
            Some(item) => render_template(
                TEMPLATES.slot_filled,
                &TemplateContext {
                    category: Some(category),
                    name: Some(item.name.as_str()),
                    price: Some(item.price),
                    ..Default::default()
                },
            ),
            None => render_template(
                TEMPLATES.slot_empty,
                &TemplateContext {
                    category: Some(category),
                    ..Default::default()
                },
            ),
        };
        println!("{line}");
    }

    println!();
    println!(
        "{}",
        render_template(
            TEMPLATES.outfit_total,
            &TemplateContext {
                total: Some(outfit.total()),
                ..Default::default()
            },
        )
    );
    println!();
}
