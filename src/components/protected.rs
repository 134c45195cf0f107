use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::app::Route;
use crate::utils::constants::STORAGE_KEY_LOGGED_IN;
use crate::utils::storage::load_from_storage;

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    #[prop_or_default]
    pub children: Html,
}

/// Session guard for the admin views. The persisted flag is checked once at
/// mount; children render underneath while the redirect is in flight.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let navigator = use_navigator().expect("router context");

    use_effect_with((), move |_| {
        if load_from_storage(STORAGE_KEY_LOGGED_IN).is_none() {
            navigator.push(&Route::Login);
        }
        || ()
    });

    props.children.clone()
}
