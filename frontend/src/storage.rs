use shared::constants::{STORAGE_KEY, TEAMS_STORAGE_KEY};
use shared::error::PersistenceError;
use shared::persistence::PersistedSelection;
use shared::teams::Team;
use web_sys::{window, Storage};

fn local_storage() -> Result<Storage, PersistenceError> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(PersistenceError::Unavailable)
}

fn read_item(key: &str) -> Result<Option<String>, PersistenceError> {
    local_storage()?
        .get_item(key)
        .map_err(|_| PersistenceError::Unavailable)
}

pub fn load_selection() -> Result<Option<PersistedSelection>, PersistenceError> {
    match read_item(STORAGE_KEY)? {
        Some(raw) => PersistedSelection::from_json(&raw).map(Some),
        None => Ok(None),
    }
}

pub fn save_selection(selection: &PersistedSelection) -> Result<(), PersistenceError> {
    let raw = selection.to_json()?;
    local_storage()?
        .set_item(STORAGE_KEY, &raw)
        .map_err(|_| PersistenceError::Unavailable)
}

/// Teams are owned by whatever wrote them; this side only reads.
pub fn load_teams() -> Result<Vec<Team>, PersistenceError> {
    match read_item(TEAMS_STORAGE_KEY)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}
