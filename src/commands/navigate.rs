use crate::commands::browse::print_card;
use crate::core::{
    category::{Category, Gender},
    command_init::CommandInit,
    error::Result,
    print_success,
    selection::parse_position,
};
use std::path::Path;

/// Accepts either a category name or its 1-based position
pub fn parse_category_target(target: &str) -> Result<usize> {
    match target.parse::<Category>() {
        Ok(category) => Ok(category.index()),
        Err(_) => parse_position(target, Category::COUNT),
    }
}

pub fn execute_goto(home: Option<&Path>, target: &str) -> Result<()> {
    let index = parse_category_target(target)?;
    let context = CommandInit::initialize(home)?;

    context.run(|session| {
        session.navigate_to_category(index)?;
        print_card(session);
        Ok(())
    })
}

/// Set the gender scope; `any` clears it
pub fn execute_gender(home: Option<&Path>, gender: &str) -> Result<()> {
    let gender = match gender.trim().to_ascii_lowercase().as_str() {
        "any" | "all" | "none" => None,
        other => Some(other.parse::<Gender>()?),
    };
    let context = CommandInit::initialize(home)?;

    context.run(|session| {
        session.select_gender(gender)?;
        match gender {
            Some(gender) => print_success(&format!("Showing items for {gender}.")),
            None => print_success("Showing items for everyone."),
        }
        print_card(session);
        Ok(())
    })
}

pub fn execute_reset(home: Option<&Path>) -> Result<()> {
    let context = CommandInit::initialize(home)?;
    context.run(|session| {
        session.reset();
        print_success("Started a new outfit.");
        print_card(session);
        Ok(())
    })
}
