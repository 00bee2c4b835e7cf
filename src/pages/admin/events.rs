use chrono::NaiveDate;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::EventsApi;
use crate::types::{DonationEvent, EventRequest};
use crate::utils::format::short_date;
use crate::utils::validation::non_blank;

#[function_component(AdminEvents)]
pub fn admin_events() -> Html {
    let events = use_state(Vec::<DonationEvent>::new);
    let is_loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);
    let is_saving = use_state(|| false);
    // Some(id) while editing an existing row
    let editing = use_state(|| None::<String>);

    let title_input = use_node_ref();
    let description_input = use_node_ref();
    let location_input = use_node_ref();
    let city_input = use_node_ref();
    let date_input = use_node_ref();
    let capacity_input = use_node_ref();

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

    let on_edit = {
        let editing = editing.clone();
        let title_input = title_input.clone();
        let description_input = description_input.clone();
        let location_input = location_input.clone();
        let city_input = city_input.clone();
        let date_input = date_input.clone();
        let capacity_input = capacity_input.clone();

        Callback::from(move |event: DonationEvent| {
            editing.set(Some(event.id.clone()));
            title_input.cast::<HtmlInputElement>().unwrap().set_value(&event.title);
            description_input
                .cast::<HtmlTextAreaElement>()
                .unwrap()
                .set_value(event.description.as_deref().unwrap_or(""));
            location_input.cast::<HtmlInputElement>().unwrap().set_value(&event.location);
            city_input.cast::<HtmlInputElement>().unwrap().set_value(&event.city);
            date_input
                .cast::<HtmlInputElement>()
                .unwrap()
                .set_value(&short_date(event.date));
            capacity_input
                .cast::<HtmlInputElement>()
                .unwrap()
                .set_value(&event.capacity.map(|c| c.to_string()).unwrap_or_default());
        })
    };

    let on_delete = {
        let events = events.clone();
        let error_message = error_message.clone();

        Callback::from(move |id: String| {
            let events = events.clone();
            let error_message = error_message.clone();

            spawn_local(async move {
                match EventsApi::delete(&id).await {
                    Ok(()) => {
                        let next = events.iter().filter(|ev| ev.id != id).cloned().collect();
                        events.set(next);
                    }
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
            });
        })
    };

    let onsubmit = {
        let events = events.clone();
        let error_message = error_message.clone();
        let is_saving = is_saving.clone();
        let editing = editing.clone();
        let title_input = title_input.clone();
        let description_input = description_input.clone();
        let location_input = location_input.clone();
        let city_input = city_input.clone();
        let date_input = date_input.clone();
        let capacity_input = capacity_input.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let title_element = title_input.cast::<HtmlInputElement>().unwrap();
            let description_element = description_input.cast::<HtmlTextAreaElement>().unwrap();
            let location_element = location_input.cast::<HtmlInputElement>().unwrap();
            let city_element = city_input.cast::<HtmlInputElement>().unwrap();
            let date_element = date_input.cast::<HtmlInputElement>().unwrap();
            let capacity_element = capacity_input.cast::<HtmlInputElement>().unwrap();

            let title = title_element.value();
            let description = description_element.value();
            let location = location_element.value();
            let city = city_element.value();
            let date_value = date_element.value();
            let capacity_value = capacity_element.value();

            if !non_blank(&title) || !non_blank(&location) || !non_blank(&city) {
                error_message.set(Some("Title, location, and city are required".to_string()));
                return;
            }

            // Date inputs submit YYYY-MM-DD
            let Ok(date) = NaiveDate::parse_from_str(&date_value, "%Y-%m-%d") else {
                error_message.set(Some("Please pick a valid date".to_string()));
                return;
            };

            let capacity = match capacity_value.trim() {
                "" => None,
                raw => match raw.parse::<u32>() {
                    Ok(parsed) => Some(parsed),
                    Err(_) => {
                        error_message.set(Some("Capacity must be a number".to_string()));
                        return;
                    }
                },
            };

            let request = EventRequest {
                title,
                description: non_blank(&description).then_some(description),
                location,
                city,
                date,
                capacity,
                hospital_id: None,
            };

            let events = events.clone();
            let error_message = error_message.clone();
            let is_saving = is_saving.clone();
            let editing = editing.clone();
            let editing_id = (*editing).clone();

            is_saving.set(true);
            error_message.set(None);

            spawn_local(async move {
                let result = match editing_id.as_deref() {
                    Some(id) => EventsApi::update(id, &request).await,
                    None => EventsApi::create(&request).await,
                };

                match result {
                    Ok(saved) => {
                        let mut next: Vec<DonationEvent> =
                            events.iter().filter(|ev| ev.id != saved.id).cloned().collect();
                        next.push(saved);
                        events.set(next);
                        editing.set(None);
                        title_element.set_value("");
                        description_element.set_value("");
                        location_element.set_value("");
                        city_element.set_value("");
                        date_element.set_value("");
                        capacity_element.set_value("");
                    }
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
                is_saving.set(false);
            });
        })
    };

    html! {
        <div>
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{"Events"}</h1>

            if let Some(error) = (*error_message).as_ref() {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    {error}
                </div>
            }

            <div class="bg-white rounded-lg shadow-md p-6 mb-8">
                <h2 class="text-lg font-semibold mb-4">
                    {if editing.is_some() { "Edit event" } else { "Create event" }}
                </h2>

                <form {onsubmit}>
                    <div class="grid md:grid-cols-2 gap-4 mb-4">
                        <input
                            ref={title_input}
                            type="text"
                            name="title"
                            placeholder="Event title"
                            class="px-3 py-2 border border-gray-300 rounded-md"
                        />
                        <input
                            ref={location_input}
                            type="text"
                            name="location"
                            placeholder="Location (venue)"
                            class="px-3 py-2 border border-gray-300 rounded-md"
                        />
                        <input
                            ref={city_input}
                            type="text"
                            name="city"
                            placeholder="City"
                            class="px-3 py-2 border border-gray-300 rounded-md"
                        />
                        <input
                            ref={date_input}
                            type="date"
                            name="date"
                            class="px-3 py-2 border border-gray-300 rounded-md"
                        />
                        <input
                            ref={capacity_input}
                            type="number"
                            name="capacity"
                            placeholder="Capacity (optional)"
                            class="px-3 py-2 border border-gray-300 rounded-md"
                        />
                    </div>

                    <textarea
                        ref={description_input}
                        name="description"
                        rows="3"
                        placeholder="Description (optional)"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md mb-4"
                    />

                    <button
                        type="submit"
                        disabled={*is_saving}
                        class="bg-red-600 hover:bg-red-800 disabled:bg-red-300 text-white font-bold py-2 px-6 rounded"
                    >
                        if *is_saving {
                            {"Saving..."}
                        } else if editing.is_some() {
                            {"Update event"}
                        } else {
                            {"Create event"}
                        }
                    </button>
                </form>
            </div>

            if *is_loading {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"Loading events..."}</p>
                </div>
            } else {
                <div class="bg-white rounded-lg shadow-md p-6 overflow-x-auto">
                    <table class="min-w-full table-auto">
                        <thead>
                            <tr class="bg-gray-50">
                                <th class="px-4 py-2 text-left">{"Date"}</th>
                                <th class="px-4 py-2 text-left">{"Title"}</th>
                                <th class="px-4 py-2 text-left">{"City"}</th>
                                <th class="px-4 py-2 text-left">{"Registered"}</th>
                                <th class="px-4 py-2 text-left">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for events.iter().map(|event| {
                                let edit = {
                                    let on_edit = on_edit.clone();
                                    let event = event.clone();
                                    Callback::from(move |_| on_edit.emit(event.clone()))
                                };
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    let id = event.id.clone();
                                    Callback::from(move |_| on_delete.emit(id.clone()))
                                };

                                html! {
                                    <tr class="border-b">
                                        <td class="px-4 py-2">{short_date(event.date)}</td>
                                        <td class="px-4 py-2">{&event.title}</td>
                                        <td class="px-4 py-2">{&event.city}</td>
                                        <td class="px-4 py-2">
                                            {event.registered_count.map(|c| c.to_string()).unwrap_or_else(|| "—".to_string())}
                                        </td>
                                        <td class="px-4 py-2 space-x-3">
                                            <button onclick={edit} class="text-gray-600 hover:text-gray-900">{"Edit"}</button>
                                            <button onclick={delete} class="text-red-600 hover:text-red-800">{"Delete"}</button>
                                        </td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                </div>
            }
        </div>
    }
}
