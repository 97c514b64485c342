use crate::commands::browse::print_card;
use crate::commands::outfit::print_outfit;
use crate::core::{
    command_init::CommandInit,
    error::{OutfitError, Result},
    print_hint, print_info, print_success,
    progression::Advance,
    session::{Direction, SwipeOutcome},
};
use std::path::Path;

pub fn execute_swipe(home: Option<&Path>, direction: Direction) -> Result<()> {
    let context = CommandInit::initialize(home)?;

    context.run(|session| {
        let category = session.current_category();
        let outcome = match session.swipe(direction) {
            Ok(outcome) => outcome,
            Err(OutfitError::EmptyQueue) => {
                // Nothing on screen to swipe; not a failure
                print_info(&format!("No {category} left to swipe."));
                print_hint("goto <n> to pick another category, or outfit to review");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        match outcome {
            SwipeOutcome::Accepted {
                item,
                replaced,
                progress,
            } => {
                print_success(&format!("Added {} to your outfit!", item.name));
                if let Some(previous) = replaced {
                    print_hint(&format!("Replaced {}", previous.name));
                }
                match progress {
                    Advance::Moved(_) => print_card(session),
                    Advance::AllCategoriesComplete => {
                        print_info("You've completed your outfit!");
                        print_outfit(session.outfit());
                    }
                }
            }
            SwipeOutcome::Rejected { item } => {
                log::debug!("Skipped {}", item.id);
                print_card(session);
            }
        }
        Ok(())
    })
}
