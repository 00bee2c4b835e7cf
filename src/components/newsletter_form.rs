use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::NewsletterApi;
use crate::utils::validation::is_valid_email;

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let email_input = use_node_ref();
    let message = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let onsubmit = {
        let email_input = email_input.clone();
        let message = message.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email_element = email_input.cast::<HtmlInputElement>().unwrap();
            let email = email_element.value();

            if !is_valid_email(&email) {
                error.set(Some("Please enter a valid email address".to_string()));
                return;
            }

            let message = message.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();

            is_loading.set(true);
            error.set(None);
            message.set(None);

            spawn_local(async move {
                match NewsletterApi::subscribe(email).await {
                    Ok(_) => {
                        message.set(Some("Thanks for subscribing!".to_string()));
                        email_element.set_value("");
                    }
                    Err(api_error) => error.set(Some(api_error.describe())),
                }
                is_loading.set(false);
            });
        })
    };

    html! {
        <div>
            <p class="font-semibold mb-2">{"Monthly donor newsletter"}</p>

            if let Some(msg) = (*message).as_ref() {
                <p class="text-sm text-green-400 mb-2">{msg}</p>
            }
            if let Some(err) = (*error).as_ref() {
                <p class="text-sm text-red-400 mb-2">{err}</p>
            }

            <form {onsubmit} class="flex space-x-2">
                <input
                    ref={email_input}
                    type="email"
                    name="email"
                    placeholder="you@example.com"
                    class="px-3 py-2 rounded text-gray-900 flex-grow"
                />
                <button
                    type="submit"
                    disabled={*is_loading}
                    class="bg-red-600 hover:bg-red-800 disabled:bg-red-300 text-white font-bold py-2 px-4 rounded"
                >
                    if *is_loading { {"Subscribing..."} } else { {"Subscribe"} }
                </button>
            </form>
        </div>
    }
}
