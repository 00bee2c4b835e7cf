use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::contexts::{AuthAction, AuthContext};
use crate::router::Route;
use crate::services::{AuthApi, IdentityService, Session};

#[function_component(Login)]
pub fn login() -> Html {
    let auth = use_context::<AuthContext>().expect("AuthProvider missing");
    let navigator = use_navigator().unwrap();
    let email_input = use_node_ref();
    let password_input = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let onsubmit = {
        let auth = auth.clone();
        let email_input = email_input.clone();
        let password_input = password_input.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email_input = email_input.cast::<HtmlInputElement>().unwrap();
            let password_input = password_input.cast::<HtmlInputElement>().unwrap();

            let email = email_input.value();
            let password = password_input.value();

            if email.is_empty() || password.is_empty() {
                error_message.set(Some("Please fill in all fields".to_string()));
                return;
            }

            let auth = auth.clone();
            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let navigator = navigator.clone();

            is_loading.set(true);
            error_message.set(None);

            spawn_local(async move {
                // Two-step login: credentials go to the identity provider,
                // the returned token is exchanged for a backend session.
                let result = match IdentityService::sign_in(&email, &password).await {
                    Ok(id_token) => AuthApi::login(id_token).await,
                    Err(e) => Err(e),
                };

                match result {
                    Ok(session) => {
                        Session::set_auth_data(session.token.clone(), session.user.clone());
                        auth.dispatch(AuthAction::Login(session.token, session.user));
                        navigator.push(&Route::Home);
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
            <h2 class="text-2xl font-bold text-center text-gray-900 mb-6">{"Sign In"}</h2>

            if let Some(error) = (*error_message).as_ref() {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    {error}
                </div>
            }

            <form {onsubmit}>
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

                <div class="mb-6">
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
                        placeholder="Enter your password"
                    />
                </div>

                <button
                    type="submit"
                    disabled={*is_loading}
                    class="w-full bg-red-600 hover:bg-red-800 disabled:bg-red-300 text-white font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline"
                >
                    if *is_loading {
                        {"Signing In..."}
                    } else {
                        {"Sign In"}
                    }
                </button>
            </form>

            <div class="text-center mt-4">
                <p class="text-sm text-gray-600">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::Register} classes="text-red-600 hover:text-red-800">
                        {"Become a donor"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
