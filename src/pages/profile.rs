use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::contexts::{AuthAction, AuthContext};
use crate::services::{Session, UsersApi};
use crate::types::{UpdateProfileRequest, BLOOD_TYPES};
use crate::utils::eligibility::profile_complete;
use crate::utils::format::timestamp;
use crate::utils::validation::{is_valid_blood_type, is_valid_phone, non_blank};

#[function_component(Profile)]
pub fn profile() -> Html {
    let auth = use_context::<AuthContext>().expect("AuthProvider missing");
    let current_user = use_state(Session::get_user_data);
    let name_input = use_node_ref();
    let blood_type_select = use_node_ref();
    let phone_input = use_node_ref();
    let city_input = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let success_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    // Refresh from the server and prefill the form
    {
        let current_user = current_user.clone();
        let name_input = name_input.clone();
        let phone_input = phone_input.clone();
        let city_input = city_input.clone();
        let blood_type_select = blood_type_select.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Ok(user) = UsersApi::profile().await {
                    if let Some(name_element) = name_input.cast::<HtmlInputElement>() {
                        name_element.set_value(&user.name);
                    }
                    if let Some(phone_element) = phone_input.cast::<HtmlInputElement>() {
                        phone_element.set_value(user.phone.as_deref().unwrap_or(""));
                    }
                    if let Some(city_element) = city_input.cast::<HtmlInputElement>() {
                        city_element.set_value(user.city.as_deref().unwrap_or(""));
                    }
                    if let Some(blood_element) = blood_type_select.cast::<HtmlSelectElement>() {
                        blood_element.set_value(user.blood_type.as_deref().unwrap_or(""));
                    }
                    Session::set_user_data(&user);
                    current_user.set(Some(user));
                }
            });
            || ()
        });
    }

    let onsubmit = {
        let auth = auth.clone();
        let name_input = name_input.clone();
        let blood_type_select = blood_type_select.clone();
        let phone_input = phone_input.clone();
        let city_input = city_input.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();
        let is_loading = is_loading.clone();
        let current_user = current_user.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name_input = name_input.cast::<HtmlInputElement>().unwrap();
            let blood_type_select = blood_type_select.cast::<HtmlSelectElement>().unwrap();
            let phone_input = phone_input.cast::<HtmlInputElement>().unwrap();
            let city_input = city_input.cast::<HtmlInputElement>().unwrap();

            let name = name_input.value();
            let blood_type = blood_type_select.value();
            let phone = phone_input.value();
            let city = city_input.value();

            // Validation
            if !non_blank(&name) {
                error_message.set(Some("Name is required".to_string()));
                return;
            }

            if !is_valid_blood_type(&blood_type) {
                error_message.set(Some("Please choose your blood type".to_string()));
                return;
            }

            if !is_valid_phone(&phone) {
                error_message.set(Some("Please enter a valid phone number".to_string()));
                return;
            }

            if !non_blank(&city) {
                error_message.set(Some("City is required".to_string()));
                return;
            }

            let request = UpdateProfileRequest {
                name,
                blood_type,
                phone,
                city,
            };

            let auth = auth.clone();
            let error_message = error_message.clone();
            let success_message = success_message.clone();
            let is_loading = is_loading.clone();
            let current_user = current_user.clone();

            is_loading.set(true);
            error_message.set(None);
            success_message.set(None);

            spawn_local(async move {
                match UsersApi::update_profile(&request).await {
                    Ok(updated_user) => {
                        Session::set_user_data(&updated_user);
                        auth.dispatch(AuthAction::UpdateUser(updated_user.clone()));
                        current_user.set(Some(updated_user));
                        success_message.set(Some("Profile updated successfully!".to_string()));
                    }
                    Err(api_error) => {
                        error_message.set(Some(api_error.describe()));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    if let Some(user) = current_user.as_ref() {
        html! {
            <div class="max-w-2xl mx-auto">
                <h1 class="text-3xl font-bold text-gray-900 mb-6">{"Donor profile"}</h1>

                if !profile_complete(user) {
                    <div class="bg-yellow-100 border border-yellow-400 text-yellow-800 px-4 py-3 rounded mb-4">
                        {"Fill in your blood type, phone, and city to unlock donations, event registration, and the blood market."}
                    </div>
                }

                <div class="bg-white rounded-lg shadow-md p-6">
                    if let Some(error) = (*error_message).as_ref() {
                        <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                            {error}
                        </div>
                    }

                    if let Some(success) = (*success_message).as_ref() {
                        <div class="bg-green-100 border border-green-400 text-green-700 px-4 py-3 rounded mb-4">
                            {success}
                        </div>
                    }

                    <form {onsubmit}>
                        <div class="grid md:grid-cols-2 gap-6 mb-6">
                            <div>
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
                                />
                            </div>

                            <div>
                                <label for="blood_type" class="block text-sm font-medium text-gray-700 mb-2">
                                    {"Blood type"}
                                </label>
                                <select
                                    ref={blood_type_select}
                                    id="blood_type"
                                    name="blood_type"
                                    class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-red-500"
                                >
                                    <option value="">{"Choose..."}</option>
                                    { for BLOOD_TYPES.iter().map(|bt| html! {
                                        <option value={*bt} selected={user.blood_type.as_deref() == Some(*bt)}>{bt}</option>
                                    }) }
                                </select>
                            </div>

                            <div>
                                <label for="phone" class="block text-sm font-medium text-gray-700 mb-2">
                                    {"Phone"}
                                </label>
                                <input
                                    ref={phone_input}
                                    type="tel"
                                    id="phone"
                                    name="phone"
                                    class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-red-500"
                                    placeholder="+40 7xx xxx xxx"
                                />
                            </div>

                            <div>
                                <label for="city" class="block text-sm font-medium text-gray-700 mb-2">
                                    {"City"}
                                </label>
                                <input
                                    ref={city_input}
                                    type="text"
                                    id="city"
                                    name="city"
                                    class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-red-500"
                                />
                            </div>
                        </div>

                        <div class="flex justify-end">
                            <button
                                type="submit"
                                disabled={*is_loading}
                                class="bg-red-600 hover:bg-red-800 disabled:bg-red-300 text-white font-bold py-2 px-6 rounded focus:outline-none focus:shadow-outline"
                            >
                                if *is_loading {
                                    {"Saving..."}
                                } else {
                                    {"Save profile"}
                                }
                            </button>
                        </div>
                    </form>
                </div>

                <div class="mt-6 bg-gray-50 rounded-lg p-4">
                    <h3 class="text-sm font-medium text-gray-700 mb-2">{"Account"}</h3>
                    <div class="text-sm text-gray-600 space-y-1">
                        <p>{"Email: "}{&user.email}</p>
                        if !timestamp(&user.created_at).is_empty() {
                            <p>{"Donor since: "}{timestamp(&user.created_at)}</p>
                        }
                    </div>
                </div>
            </div>
        }
    } else {
        html! {
            <div class="text-center">
                <p>{"Loading profile..."}</p>
            </div>
        }
    }
}
