use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::app::Route;
use crate::utils::constants::{ADMIN_EMAIL, ADMIN_PASSWORD, STORAGE_KEY_LOGGED_IN};
use crate::utils::dialog;
use crate::utils::storage::save_to_storage;

/// The entire access check: exact equality against the two literals.
pub(crate) fn credentials_valid(email: &str, password: &str) -> bool {
    email == ADMIN_EMAIL && password == ADMIN_PASSWORD
}

#[function_component(AdminLogin)]
pub fn admin_login() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let navigator = use_navigator().expect("router context");

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if credentials_valid(email.as_str(), password.as_str()) {
                if let Err(err) = save_to_storage(STORAGE_KEY_LOGGED_IN, "true") {
                    log::error!("❌ Error persisting login flag: {}", err);
                }
                navigator.push(&Route::Dashboard);
            } else {
                dialog::alert("Invalid email or password");
            }
        })
    };

    html! {
        <div class="flex justify-center items-center h-screen bg-gray-200">
            <form onsubmit={on_submit} class="bg-white p-8 rounded-lg shadow-lg max-w-md w-full">
                <h2 class="text-2xl font-bold text-center text-gray-800 mb-6">{"Admin Login"}</h2>

                <div class="mb-4">
                    <input
                        type="email"
                        placeholder="Email"
                        value={(*email).clone()}
                        oninput={on_email_change}
                        class="w-full p-4 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-500"
                    />
                </div>

                <div class="mb-6">
                    <input
                        type="password"
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={on_password_change}
                        class="w-full p-4 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-500"
                    />
                </div>

                <button
                    type="submit"
                    class="w-full bg-red-600 text-white p-4 rounded-lg hover:bg-red-700 transition duration-200"
                >
                    {"Login"}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_fixed_literals_pass() {
        assert!(credentials_valid(ADMIN_EMAIL, ADMIN_PASSWORD));

        assert!(!credentials_valid(ADMIN_EMAIL, "wrong"));
        assert!(!credentials_valid("someone@else.com", ADMIN_PASSWORD));
        assert!(!credentials_valid("", ""));
        // Comparison is exact, not case-insensitive.
        assert!(!credentials_valid(&ADMIN_EMAIL.to_uppercase(), ADMIN_PASSWORD));
    }
}
