use contracts::auth::{AdminInfo, UserInfo};
use web_sys::window;

// Keys the deployed clients already use; changing them would log everyone out.
const USER_TOKEN_KEY: &str = "userToken";
const USER_KEY: &str = "user";
const ADMIN_TOKEN_KEY: &str = "adminToken";
const ADMIN_USER_KEY: &str = "adminUser";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn set_item(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(key, value);
    }
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

fn remove_item(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}

pub fn save_user_session(token: &str, user: &UserInfo) {
    set_item(USER_TOKEN_KEY, token);
    if let Ok(json) = serde_json::to_string(user) {
        set_item(USER_KEY, &json);
    }
}

pub fn get_user_token() -> Option<String> {
    get_item(USER_TOKEN_KEY)
}

pub fn get_user() -> Option<UserInfo> {
    serde_json::from_str(&get_item(USER_KEY)?).ok()
}

pub fn clear_user_session() {
    remove_item(USER_TOKEN_KEY);
    remove_item(USER_KEY);
}

pub fn save_admin_session(token: &str, user: &AdminInfo) {
    set_item(ADMIN_TOKEN_KEY, token);
    if let Ok(json) = serde_json::to_string(user) {
        set_item(ADMIN_USER_KEY, &json);
    }
}

pub fn get_admin_token() -> Option<String> {
    get_item(ADMIN_TOKEN_KEY)
}

pub fn get_admin_user() -> Option<AdminInfo> {
    serde_json::from_str(&get_item(ADMIN_USER_KEY)?).ok()
}

pub fn clear_admin_session() {
    remove_item(ADMIN_TOKEN_KEY);
    remove_item(ADMIN_USER_KEY);
}
