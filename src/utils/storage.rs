use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage unavailable")?;
    storage
        .set_item(key, value)
        .map_err(|_| "Error writing to localStorage".to_string())
}

pub fn load_from_storage(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}
