use crate::core::{
    archive::ArchiveStore,
    category::Category,
    command_init::CommandInit,
    error::Result,
    print_hint,
    session::Session,
    templates::{render_template, TemplateContext, TEMPLATES},
};
use colored::*;
use std::path::Path;

pub fn execute_browse(home: Option<&Path>) -> Result<()> {
    let context = CommandInit::initialize(home)?;
    context.run(|session| {
        print_card(session);
        Ok(())
    })
}

/// Progress indicator, e.g. `✓accessories › [tops] › bottoms › shoes`
pub fn progress_indicator<S: ArchiveStore>(session: &Session<'_, S>) -> String {
    Category::ALL
        .iter()
        .map(|&category| {
            let filled = session.outfit().slot(category).is_some();
            let label = if filled {
                format!("✓{category}")
            } else {
                category.to_string()
            };
            if category == session.current_category() {
                format!("[{label}]").white().bold().to_string()
            } else if filled {
                label.green().to_string()
            } else {
                label.bright_black().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" › ")
}

/// Print the current category and the item up for a decision
pub fn print_card<S: ArchiveStore>(session: &Session<'_, S>) {
    let category = session.current_category();
    let step = format!("({}/{})", session.category_index() + 1, Category::COUNT);

    println!();
    println!(
        "{}",
        render_template(
            TEMPLATES.browse_header,
            &TemplateContext {
                category: Some(category),
                progress: Some(step.as_str()),
                ..Default::default()
            },
        )
    );
    println!("{}", progress_indicator(session));
    println!();

    match session.current_item() {
        Some(item) => {
            let card = TemplateContext {
                category: Some(category),
                name: Some(item.name.as_str()),
                price: Some(item.price),
                description: Some(item.description.as_str()),
                ..Default::default()
            };
            println!("{}", render_template(TEMPLATES.card_name, &card));
            println!("{}", render_template(TEMPLATES.card_price, &card));
            println!("{}", render_template(TEMPLATES.card_description, &card));
            println!();
            print_hint("like / dislike to decide, goto <n> to switch category");
        }
        None => {
            let empty = TemplateContext {
                category: Some(category),
                ..Default::default()
            };
            println!("{}", render_template(TEMPLATES.card_empty, &empty));
            println!();
            print_hint("goto <n> to pick another category, or outfit to review");
        }
    }
}
