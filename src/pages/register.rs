use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::contexts::{AuthAction, AuthContext};
use crate::router::Route;
use crate::services::{AuthApi, IdentityService, Session};
use crate::utils::validation::{is_strong_password, is_valid_email, non_blank};

#[function_component(Register)]
pub fn register() -> Html {
    let auth = use_context::<AuthContext>().expect("AuthProvider missing");
    let navigator = use_navigator().unwrap();
    let name_input = use_node_ref();
    let email_input = use_node_ref();
    let password_input = use_node_ref();
    let confirm_password_input = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let onsubmit = {
        let auth = auth.clone();
        let name_input = name_input.clone();
        let email_input = email_input.clone();
        let password_input = password_input.clone();
        let confirm_password_input = confirm_password_input.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name_input = name_input.cast::<HtmlInputElement>().unwrap();
            let email_input = email_input.cast::<HtmlInputElement>().unwrap();
            let password_input = password_input.cast::<HtmlInputElement>().unwrap();
            let confirm_password_input = confirm_password_input.cast::<HtmlInputElement>().unwrap();

            let name = name_input.value();
            let email = email_input.value();
            let password = password_input.value();
            let confirm_password = confirm_password_input.value();

            // Client-side validation
            if !non_blank(&name) || email.is_empty() || password.is_empty() || confirm_password.is_empty() {
                error_message.set(Some("Please fill in all fields".to_string()));
                return;
            }

            if !is_valid_email(&email) {
                error_message.set(Some("Please enter a valid email address".to_string()));
                return;
            }

            if password != confirm_password {
                error_message.set(Some("Passwords do not match".to_string()));
                return;
            }

            if !is_strong_password(&password) {
                error_message.set(Some("Password must be at least 8 characters with uppercase, lowercase, and number".to_string()));
                return;
            }

            let auth = auth.clone();
            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let navigator = navigator.clone();

            is_loading.set(true);
            error_message.set(None);

            spawn_local(async move {
                let result = match IdentityService::sign_up(&email, &password).await {
                    Ok(id_token) => AuthApi::register(id_token, name).await,
                    Err(e) => Err(e),
                };

                match result {
                    Ok(session) => {
                        Session::set_auth_data(session.token.clone(), session.user.clone());
                        auth.dispatch(AuthAction::Login(session.token, session.user));
                        // New donors land on the profile form to fill in
                        // blood type, phone, and city.
                        navigator.push(&Route::Profile);
                    }
                    Err(api_error) => {
                        error_message.set(Some(api_error.describe()));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    html! {
        <div class="max-w-md mx-auto bg-white rounded-lg shadow-md p-6">
            <h2 class="text-2xl font-bold text-center text-gray-900 mb-6">{"Become a donor"}</h2>

            if let Some(error) = (*error_message).as_ref() {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    {error}
                </div>
            }

            <form {onsubmit}>
                <div class="mb-4">
                    <label for="name" class="block text-sm font-medium text-gray-700 mb-2">
                        {"Full name"}
                    </label>
                    <input
                        ref={name_input}
                        type="text"
                        id="name"
                        name="name"
                        required=true
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-red-500"
                        placeholder="Enter your full name"
                    />
                </div>

                <div class="mb-4">
                    <label for="email" class="block text-sm font-medium text-gray-700 mb-2">
                        {"Email"}
                    </label>
                    <input
                        ref={email_input}
                        type="email"
                        id="email"
                        name="email"
                        required=true
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-red-500"
                        placeholder="Enter your email"
                    />
                </div>

                <div class="mb-4">
                    <label for="password" class="block text-sm font-medium text-gray-700 mb-2">
                        {"Password"}
                    </label>
                    <input
                        ref={password_input}
                        type="password"
                        id="password"
                        name="password"
                        required=true
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-red-500"
                        placeholder="Create a password"
                    />
                </div>

                <div class="mb-6">
                    <label for="confirm_password" class="block text-sm font-medium text-gray-700 mb-2">
                        {"Confirm password"}
                    </label>
                    <input
                        ref={confirm_password_input}
                        type="password"
                        id="confirm_password"
                        name="confirm_password"
                        required=true
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-red-500"
                        placeholder="Repeat the password"
                    />
                </div>

                <button
                    type="submit"
                    disabled={*is_loading}
                    class="w-full bg-red-600 hover:bg-red-800 disabled:bg-red-300 text-white font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline"
                >
                    if *is_loading {
                        {"Creating account..."}
                    } else {
                        {"Create account"}
                    }
                </button>
            </form>

            <div class="text-center mt-4">
                <p class="text-sm text-gray-600">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login} classes="text-red-600 hover:text-red-800">
                        {"Sign in"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
