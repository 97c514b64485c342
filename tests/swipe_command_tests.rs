use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*, home::*};

#[cfg(test)]
mod swipe_command_tests {
    use super::*;

    #[test]
    fn test_browse_starts_with_first_category() -> anyhow::Result<()> {
        let home = setup_test_home()?;

        home.cmd()
            .arg("browse")
            .assert()
            .success()
            .stdout(assertions::choosing("accessories"))
            .stdout(predicate::str::contains("(1/4)"))
            .stdout(predicate::str::contains("Hat"))
            .stdout(predicate::str::contains("$24.99"));

        Ok(())
    }

    #[test]
    fn test_dislike_recycles_then_like_takes_next() -> anyhow::Result<()> {
        let home = home_with_small_catalog()?;
        home.run(&["goto", "tops"]);

        home.cmd()
            .arg("dislike")
            .assert()
            .success()
            .stdout(assertions::choosing("tops"))
            .stdout(predicate::str::contains("Black T-Shirt"));

        home.cmd()
            .arg("like")
            .assert()
            .success()
            .stdout(predicate::str::contains("Added Black T-Shirt to your outfit!"))
            .stdout(assertions::choosing("bottoms"));

        home.cmd()
            .arg("outfit")
            .assert()
            .success()
            .stdout(predicate::str::contains("tops  Black T-Shirt $19.99"))
            .stdout(predicate::str::contains("No bottoms selected"));

        Ok(())
    }

    #[test]
    fn test_rejected_items_come_back_around() -> anyhow::Result<()> {
        let home = home_with_small_catalog()?;
        home.run(&["goto", "2"]);
        home.run(&["dislike"]);

        home.cmd()
            .arg("dislike")
            .assert()
            .success()
            .stdout(predicate::str::contains("White T-Shirt"));

        Ok(())
    }

    #[test]
    fn test_like_on_last_category_completes_outfit() -> anyhow::Result<()> {
        let home = home_with_small_catalog()?;
        home.run(&["goto", "shoes"]);

        home.cmd()
            .arg("like")
            .assert()
            .success()
            .stdout(predicate::str::contains("You've completed your outfit!"))
            .stdout(assertions::shows_total("79.99"));

        // Queue for shoes is used up; swiping again is a no-op
        home.cmd()
            .arg("like")
            .assert()
            .success()
            .stdout(predicate::str::contains("No shoes left to swipe."));

        Ok(())
    }

    #[test]
    fn test_goto_out_of_range_fails() -> anyhow::Result<()> {
        let home = setup_test_home()?;

        home.cmd()
            .args(["goto", "5"])
            .assert()
            .failure()
            .stderr(assertions::out_of_range());

        home.cmd()
            .args(["goto", "3"])
            .assert()
            .success()
            .stdout(assertions::choosing("bottoms"));

        Ok(())
    }

    #[test]
    fn test_gender_requires_scoping_enabled() -> anyhow::Result<()> {
        let home = setup_test_home()?;

        home.cmd()
            .args(["gender", "men"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Gender scoping is disabled"));

        Ok(())
    }

    #[test]
    fn test_gender_scope_filters_queue() -> anyhow::Result<()> {
        let home = setup_test_home()?;
        home.run(&["config", "--gender-scoping", "on"]);

        home.cmd()
            .args(["gender", "men"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Showing items for men."))
            .stdout(assertions::choosing("accessories"));

        // Men's accessories: Hat, Scarf, Leather Belt, then around again
        home.run(&["dislike"]);
        home.cmd()
            .arg("dislike")
            .assert()
            .success()
            .stdout(predicate::str::contains("Leather Belt"));
        home.cmd()
            .arg("dislike")
            .assert()
            .success()
            .stdout(predicate::str::contains("Hat"))
            .stdout(predicate::str::contains("Tote Bag").not());

        Ok(())
    }

    #[test]
    fn test_reset_starts_over() -> anyhow::Result<()> {
        let home = setup_test_home()?;
        home.run(&["like"]);

        home.cmd()
            .arg("reset")
            .assert()
            .success()
            .stdout(predicate::str::contains("Started a new outfit."))
            .stdout(assertions::choosing("accessories"));

        home.cmd()
            .arg("outfit")
            .assert()
            .success()
            .stdout(assertions::shows_total("0.00"));

        Ok(())
    }
}
