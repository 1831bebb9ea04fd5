use web_sys::{window, Storage};

use crate::services::error::StoreError;

pub fn get_session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

pub fn save_raw(key: &str, value: &str) -> Result<(), StoreError> {
    let storage = get_session_storage().ok_or(StoreError::Unavailable)?;
    storage.set_item(key, value)
        .map_err(|_| StoreError::Write)
}

pub fn load_raw(key: &str) -> Result<Option<String>, StoreError> {
    let storage = get_session_storage().ok_or(StoreError::Unavailable)?;
    Ok(storage.get_item(key).ok().flatten())
}

pub fn remove_raw(key: &str) -> Result<(), StoreError> {
    let storage = get_session_storage().ok_or(StoreError::Unavailable)?;
    storage.remove_item(key)
        .map_err(|_| StoreError::Write)
}
