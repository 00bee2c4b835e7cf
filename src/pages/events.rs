use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::EventsApi;
use crate::types::DonationEvent;
use crate::utils::format::long_date;

#[function_component(Events)]
pub fn events() -> Html {
    let events = use_state(Vec::<DonationEvent>::new);
    let is_loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);

    {
        let events = events.clone();
        let is_loading = is_loading.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match EventsApi::list().await {
                    Ok(list) => events.set(list),
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
                is_loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div>
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{"Donation events"}</h1>

            if let Some(error) = (*error_message).as_ref() {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    {error}
                </div>
            }

            if *is_loading {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"Loading events..."}</p>
                </div>
            } else if events.is_empty() {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"No upcoming events"}</p>
                </div>
            } else {
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for events.iter().map(|event| html! {
                        <div class="bg-white p-6 rounded-lg shadow-md">
                            <h3 class="text-lg font-semibold mb-1">{&event.title}</h3>
                            <p class="text-sm text-gray-500 mb-2">
                                {long_date(event.date)}{" · "}{&event.city}
                            </p>
                            <p class="text-gray-600 mb-4">{&event.location}</p>
                            if let (Some(capacity), Some(registered)) = (event.capacity, event.registered_count) {
                                <p class="text-sm text-gray-500 mb-4">
                                    {format!("{} of {} places taken", registered, capacity)}
                                </p>
                            }
                            <Link<Route>
                                to={Route::EventDetail { id: event.id.clone() }}
                                classes="text-red-600 hover:text-red-800 font-semibold"
                            >
                                {"Details & registration"}
                            </Link<Route>>
                        </div>
                    }) }
                </div>
            }
        </div>
    }
}
