use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::{EventsApi, Session};
use crate::types::DonationEvent;
use crate::utils::eligibility::profile_complete;
use crate::utils::format::long_date;

#[derive(Properties, PartialEq)]
pub struct EventDetailProps {
    pub id: String,
}

#[function_component(EventDetail)]
pub fn event_detail(props: &EventDetailProps) -> Html {
    let event = use_state(|| None::<DonationEvent>);
    let is_loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);
    let success_message = use_state(|| None::<String>);
    let is_registering = use_state(|| false);

    {
        let event = event.clone();
        let is_loading = is_loading.clone();
        let error_message = error_message.clone();
        let id = props.id.clone();

        use_effect_with(id, move |id| {
            let id = id.clone();
            spawn_local(async move {
                match EventsApi::get(&id).await {
                    Ok(found) => event.set(Some(found)),
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
                is_loading.set(false);
            });
            || ()
        });
    }

    let on_register = {
        let error_message = error_message.clone();
        let success_message = success_message.clone();
        let is_registering = is_registering.clone();
        let id = props.id.clone();

        Callback::from(move |_| {
            let error_message = error_message.clone();
            let success_message = success_message.clone();
            let is_registering = is_registering.clone();
            let id = id.clone();

            is_registering.set(true);
            error_message.set(None);
            success_message.set(None);

            spawn_local(async move {
                match EventsApi::register(&id).await {
                    Ok(_) => {
                        success_message.set(Some("You are registered. See you there!".to_string()));
                    }
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
                is_registering.set(false);
            });
        })
    };

    let can_register = Session::get_user_data()
        .as_ref()
        .is_some_and(profile_complete);

    html! {
        <div class="max-w-2xl mx-auto">
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

            if *is_loading {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"Loading event..."}</p>
                </div>
            } else if let Some(event) = (*event).as_ref() {
                <div class="bg-white rounded-lg shadow-md p-6">
                    <h1 class="text-3xl font-bold text-gray-900 mb-2">{&event.title}</h1>
                    <p class="text-gray-500 mb-4">
                        {long_date(event.date)}{" · "}{&event.location}{", "}{&event.city}
                    </p>

                    if let Some(description) = event.description.as_ref() {
                        <p class="text-gray-700 mb-6">{description}</p>
                    }

                    if let (Some(capacity), Some(registered)) = (event.capacity, event.registered_count) {
                        <p class="text-sm text-gray-500 mb-6">
                            {format!("{} of {} places taken", registered, capacity)}
                        </p>
                    }

                    if !Session::is_authenticated() {
                        <p class="text-gray-600">
                            <Link<Route> to={Route::Login} classes="text-red-600 hover:text-red-800">
                                {"Sign in"}
                            </Link<Route>>
                            {" to register for this event."}
                        </p>
                    } else if !can_register {
                        <p class="text-gray-600">
                            {"Complete your "}
                            <Link<Route> to={Route::Profile} classes="text-red-600 hover:text-red-800">
                                {"donor profile"}
                            </Link<Route>>
                            {" to register for events."}
                        </p>
                    } else {
                        <button
                            onclick={on_register}
                            disabled={*is_registering}
                            class="bg-red-600 hover:bg-red-800 disabled:bg-red-300 text-white font-bold py-2 px-6 rounded"
                        >
                            if *is_registering {
                                {"Registering..."}
                            } else {
                                {"Register to donate"}
                            }
                        </button>
                    }
                </div>
            } else {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"Event not found"}</p>
                </div>
            }

            <div class="mt-4">
                <Link<Route> to={Route::Events} classes="text-gray-600 hover:text-gray-900">
                    {"← Back to events"}
                </Link<Route>>
            </div>
        </div>
    }
}
