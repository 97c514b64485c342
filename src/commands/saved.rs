use crate::commands::outfit::print_outfit;
use crate::core::{
    archive::SavedOutfit,
    command_init::CommandInit,
    error::Result,
    print_info, print_section_header, print_success,
    selection::{parse_position, parse_positions},
    templates::{render_template, TemplateContext, TEMPLATES},
};
use std::path::Path;

pub fn execute_save(home: Option<&Path>, name: &str) -> Result<()> {
    let context = CommandInit::initialize(home)?;
    context.run(|session| {
        session.save_outfit(name)?;
        print_success("Outfit saved successfully!");
        Ok(())
    })
}

pub fn execute_saved(home: Option<&Path>) -> Result<()> {
    let context = CommandInit::initialize(home)?;
    context.run(|session| {
        print_saved(session.archive());
        Ok(())
    })
}

pub fn execute_load(home: Option<&Path>, position: &str) -> Result<()> {
    let context = CommandInit::initialize(home)?;
    context.run(|session| {
        let index = parse_position(position, session.archive().len())?;
        let name = session.archive()[index].name.clone();
        let outfit = session.load_outfit(index)?;
        print_info(&format!("Loaded outfit: {name}"));
        print_outfit(outfit);
        Ok(())
    })
}

pub fn execute_delete(home: Option<&Path>, positions: Vec<String>) -> Result<()> {
    let context = CommandInit::initialize(home)?;
    context.run(|session| {
        let indices = parse_positions(&positions, session.archive().len())?;
        let removed = session.delete_outfits(&indices)?;
        if removed.len() == 1 {
            print_success("Outfit deleted successfully!");
        } else {
            print_success(&format!("Deleted {} outfits.", removed.len()));
        }
        Ok(())
    })
}

pub fn print_saved(saved: &[SavedOutfit]) {
    if saved.is_empty() {
        print_info("No saved outfits yet. Build one and run 'outfit-builder save <name>'.");
        return;
    }

    print_section_header("Saved Outfits");
    for (i, entry) in saved.iter().enumerate() {
        let header = TemplateContext {
            n: Some(i + 1),
            outfit_name: Some(entry.name.as_str()),
            count: Some(entry.items.filled_count()),
            total: Some(entry.items.total()),
            ..Default::default()
        };
        println!("{}", render_template(TEMPLATES.saved_entry, &header));

        for item in entry.items.filled() {
            let line = TemplateContext {
                category: Some(item.category),
                name: Some(item.name.as_str()),
                ..Default::default()
            };
            println!("{}", render_template(TEMPLATES.saved_item, &line));
        }
    }
    println!();
}
