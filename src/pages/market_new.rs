use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::MarketApi;
use crate::types::{CreateMarketPostRequest, BLOOD_TYPES};
use crate::utils::validation::{is_valid_blood_type, non_blank};

#[function_component(MarketNew)]
pub fn market_new() -> Html {
    let navigator = use_navigator().unwrap();
    let kind_select = use_node_ref();
    let blood_type_select = use_node_ref();
    let city_input = use_node_ref();
    let description_input = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let onsubmit = {
        let kind_select = kind_select.clone();
        let blood_type_select = blood_type_select.clone();
        let city_input = city_input.clone();
        let description_input = description_input.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let kind_select = kind_select.cast::<HtmlSelectElement>().unwrap();
            let blood_type_select = blood_type_select.cast::<HtmlSelectElement>().unwrap();
            let city_input = city_input.cast::<HtmlInputElement>().unwrap();
            let description_input = description_input.cast::<HtmlTextAreaElement>().unwrap();

            let kind = kind_select.value();
            let blood_type = blood_type_select.value();
            let city = city_input.value();
            let description = description_input.value();

            if kind != "request" && kind != "offer" {
                error_message.set(Some("Please choose what this post is".to_string()));
                return;
            }

            if !is_valid_blood_type(&blood_type) {
                error_message.set(Some("Please choose a blood type".to_string()));
                return;
            }

            if !non_blank(&city) {
                error_message.set(Some("Please fill in the city".to_string()));
                return;
            }

            let request = CreateMarketPostRequest {
                kind,
                blood_type,
                city,
                description: non_blank(&description).then_some(description),
            };

            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let navigator = navigator.clone();

            is_loading.set(true);
            error_message.set(None);

            spawn_local(async move {
                match MarketApi::create(&request).await {
                    Ok(created) => {
                        navigator.push(&Route::MarketDetail { id: created.id });
                    }
                    Err(api_error) => {
                        error_message.set(Some(api_error.describe()));
                        is_loading.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="max-w-md mx-auto bg-white rounded-lg shadow-md p-6">
            <h2 class="text-2xl font-bold text-center text-gray-900 mb-6">{"New market post"}</h2>

            if let Some(error) = (*error_message).as_ref() {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    {error}
                </div>
            }

            <form {onsubmit}>
                <div class="mb-4">
                    <label for="kind" class="block text-sm font-medium text-gray-700 mb-2">
                        {"I want to"}
                    </label>
                    <select
                        ref={kind_select}
                        id="kind"
                        name="kind"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-red-500"
                    >
                        <option value="" selected=true>{"Choose..."}</option>
                        <option value="request">{"Request blood"}</option>
                        <option value="offer">{"Offer blood"}</option>
                    </select>
                </div>

                <div class="mb-4">
                    <label for="blood_type" class="block text-sm font-medium text-gray-700 mb-2">
                        {"Blood type"}
                    </label>
                    <select
                        ref={blood_type_select}
                        id="blood_type"
                        name="blood_type"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-red-500"
                    >
                        <option value="" selected=true>{"Choose..."}</option>
                        { for BLOOD_TYPES.iter().map(|bt| html! {
                            <option value={*bt}>{bt}</option>
                        }) }
                    </select>
                </div>

                <div class="mb-4">
                    <label for="city" class="block text-sm font-medium text-gray-700 mb-2">
                        {"City"}
                    </label>
                    <input
                        ref={city_input}
                        type="text"
                        id="city"
                        name="city"
                        required=true
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-red-500"
                        placeholder="Where is the blood needed or available?"
                    />
                </div>

                <div class="mb-6">
                    <label for="description" class="block text-sm font-medium text-gray-700 mb-2">
                        {"Details (optional)"}
                    </label>
                    <textarea
                        ref={description_input}
                        id="description"
                        name="description"
                        rows="4"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-red-500"
                        placeholder="Anything donors or patients should know"
                    />
                </div>

                <button
                    type="submit"
                    disabled={*is_loading}
                    class="w-full bg-red-600 hover:bg-red-800 disabled:bg-red-300 text-white font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline"
                >
                    if *is_loading {
                        {"Publishing..."}
                    } else {
                        {"Publish post"}
                    }
                </button>
            </form>
        </div>
    }
}
