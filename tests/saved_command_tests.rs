use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;

mod common;
use common::{assertions, fixtures::*, home::*};

#[cfg(test)]
mod saved_command_tests {
    use super::*;

    #[test]
    fn test_save_empty_outfit_fails() -> anyhow::Result<()> {
        let home = setup_test_home()?;

        home.cmd()
            .args(["save", "Look1"])
            .assert()
            .failure()
            .stderr(assertions::validation_error("empty outfit"));

        assert!(!home.archive_file().exists());
        Ok(())
    }

    #[test]
    fn test_save_blank_name_fails() -> anyhow::Result<()> {
        let home = setup_test_home()?;
        home.run(&["like"]);

        home.cmd()
            .args(["save", "   "])
            .assert()
            .failure()
            .stderr(assertions::validation_error("blank name"));

        home.cmd()
            .arg("saved")
            .assert()
            .success()
            .stdout(predicate::str::contains("No saved outfits yet"));

        Ok(())
    }

    #[test]
    fn test_saved_lists_outfits() -> anyhow::Result<()> {
        let home = home_with_saved_outfit()?;

        home.cmd()
            .arg("saved")
            .assert()
            .success()
            .stdout(assertions::has_saved_entry(1, "Look1"))
            .stdout(predicate::str::contains("(2 items, $44.98)"))
            .stdout(predicate::str::contains("White T-Shirt"));

        Ok(())
    }

    #[test]
    fn test_archive_file_format() -> anyhow::Result<()> {
        let home = home_with_saved_outfit()?;

        let raw = fs::read_to_string(home.archive_file())?;
        let json: serde_json::Value = serde_json::from_str(&raw)?;

        let entries = json.as_array().expect("archive is a list");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["name"], "Look1");

        let items = &entries[0]["items"];
        assert_eq!(items["accessories"]["name"], "Hat");
        assert_eq!(items["accessories"]["image"], "https://picsum.photos/200");
        assert_eq!(items["tops"]["price"], 19.99);
        assert!(items["bottoms"].is_null());
        assert!(items["shoes"].is_null());
        Ok(())
    }

    #[test]
    fn test_load_replaces_current_outfit() -> anyhow::Result<()> {
        let home = home_with_saved_outfit()?;
        home.run(&["reset"]);

        home.cmd()
            .args(["load", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Loaded outfit: Look1"))
            .stdout(assertions::shows_total("44.98"));

        home.cmd()
            .arg("outfit")
            .assert()
            .success()
            .stdout(predicate::str::contains("tops  White T-Shirt"));

        Ok(())
    }

    #[test]
    fn test_delete_then_load_fails() -> anyhow::Result<()> {
        let home = home_with_saved_outfit()?;

        home.cmd()
            .args(["delete", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Outfit deleted successfully!"));

        home.cmd()
            .args(["load", "1"])
            .assert()
            .failure()
            .stderr(assertions::out_of_range());

        assert_eq!(fs::read_to_string(home.archive_file())?.trim(), "[]");
        Ok(())
    }

    #[test]
    fn test_delete_several_positions() -> anyhow::Result<()> {
        let home = setup_test_home()?;
        home.run(&["like"]);
        for name in ["First", "Second", "Third"] {
            home.run(&["save", name]);
        }

        home.cmd()
            .args(["delete", "1,3"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Deleted 2 outfits."));

        home.cmd()
            .arg("saved")
            .assert()
            .success()
            .stdout(assertions::has_saved_entry(1, "Second"))
            .stdout(predicate::str::contains("First").not())
            .stdout(predicate::str::contains("Third").not());

        Ok(())
    }

    #[test]
    fn test_delete_stale_position_changes_nothing() -> anyhow::Result<()> {
        let home = home_with_saved_outfit()?;

        home.cmd()
            .args(["delete", "1", "2"])
            .assert()
            .failure()
            .stderr(assertions::out_of_range());

        home.cmd()
            .arg("saved")
            .assert()
            .success()
            .stdout(assertions::has_saved_entry(1, "Look1"));

        Ok(())
    }

    #[test]
    fn test_duplicate_names_are_kept() -> anyhow::Result<()> {
        let home = home_with_saved_outfit()?;
        home.run(&["save", "Look1"]);

        home.cmd()
            .arg("saved")
            .assert()
            .success()
            .stdout(assertions::has_saved_entry(1, "Look1"))
            .stdout(assertions::has_saved_entry(2, "Look1"));

        Ok(())
    }

    #[test]
    fn test_corrupt_archive_starts_empty() -> anyhow::Result<()> {
        let home = setup_test_home()?;
        write_file(&home, "data/savedOutfits.json", "{ not a list")?;

        home.cmd()
            .arg("saved")
            .assert()
            .success()
            .stdout(predicate::str::contains("No saved outfits yet"));

        Ok(())
    }
}
