use crate::core::{
    catalog::Catalog,
    command_init::CommandInit,
    error::Result,
    print_info, print_section_header, print_success,
};
use colored::*;
use std::path::{Path, PathBuf};

/// Where items come from after a `config` change
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

/// Show the configuration, or update it when options are given.
///
/// Only directories and config are loaded, so this still runs when the
/// configured catalog file is missing or broken.
pub fn execute_config(
    home: Option<&Path>,
    gender_scoping: Option<bool>,
    catalog: Option<CatalogSource>,
) -> Result<()> {
    let mut settings = CommandInit::initialize_settings(home)?;

    if gender_scoping.is_none() && catalog.is_none() {
        print_section_header("Configuration");
        let scoping = if settings.config.gender_scoping_enabled {
            "on".green()
        } else {
            "off".bright_black()
        };
        println!("   gender scoping  {scoping}");
        match &settings.config.catalog_path {
            Some(path) if path.exists() => println!("   catalog         {}", path.display()),
            Some(path) => println!(
                "   catalog         {} {}",
                path.display(),
                "(missing)".red()
            ),
            None => println!("   catalog         {}", "built-in".bright_black()),
        }
        println!("   saved outfits   {}", settings.dirs.data.display());
        println!();
        return Ok(());
    }

    match catalog {
        Some(CatalogSource::File(path)) => {
            // Refuse a catalog that would fail on the next command
            let loaded = Catalog::load_from_file(&path)?;
            print_info(&format!("Catalog has {} items.", loaded.len()));
            settings.config.catalog_path = Some(path);
        }
        Some(CatalogSource::Builtin) => {
            settings.config.catalog_path = None;
            print_info("Using the built-in catalog.");
        }
        None => {}
    }

    if let Some(enabled) = gender_scoping {
        settings.config.gender_scoping_enabled = enabled;
    }
    settings.config.save(&settings.dirs.config)?;

    // Queue contents depend on catalog and scope, so start over
    settings.forget_session()?;
    print_success("Configuration updated.");
    Ok(())
}
