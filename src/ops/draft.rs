//! Draft save, show, and clear.

use crate::constants::WORD_LIMIT;
use crate::draft::DraftManager;
use crate::errors::AppResult;
use crate::journal::word_count;
use crate::store::KeyValueStore;

/// Persists draft text, replacing any existing draft.
pub fn save_draft(store: &dyn KeyValueStore, text: &str) -> AppResult<()> {
    DraftManager::new(store).save(text)?;
    println!("Draft saved ({}/{} words)", word_count(text), WORD_LIMIT);
    Ok(())
}

/// Prints the current draft, or a notice when there is none.
pub fn show_draft(store: &dyn KeyValueStore) -> AppResult<()> {
    let draft = DraftManager::new(store).load()?;
    if draft.is_empty() {
        println!("No draft saved.");
    } else {
        println!("{}", draft);
    }
    Ok(())
}

/// Discards the current draft.
pub fn clear_draft(store: &dyn KeyValueStore) -> AppResult<()> {
    DraftManager::new(store).clear()?;
    println!("Draft cleared.");
    Ok(())
}
