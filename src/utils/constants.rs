/// Content backend settings, resolved at compile time:
/// development defaults apply when no .env is configured.
pub const SANITY_PROJECT_ID: &str = match option_env!("SANITY_PROJECT_ID") {
    Some(id) => id,
    None => "dev-project",
};

pub const SANITY_DATASET: &str = match option_env!("SANITY_DATASET") {
    Some(dataset) => dataset,
    None => "production",
};

pub const SANITY_API_VERSION: &str = match option_env!("SANITY_API_VERSION") {
    Some(version) => version,
    None => "2025-02-04",
};

/// Write token used for status updates and deletions. Reads on a public
/// dataset work without it.
pub const SANITY_TOKEN: Option<&str> = option_env!("SANITY_TOKEN");

/// The one operator allowed into the dashboard.
pub const ADMIN_EMAIL: &str = "admin@shop.com";
pub const ADMIN_PASSWORD: &str = "admin123";

/// localStorage key holding the literal "true" once logged in.
pub const STORAGE_KEY_LOGGED_IN: &str = "isLoggedIn";
