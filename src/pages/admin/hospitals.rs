use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::HospitalsApi;
use crate::types::{Hospital, HospitalRequest};
use crate::utils::validation::non_blank;

#[function_component(AdminHospitals)]
pub fn admin_hospitals() -> Html {
    let hospitals = use_state(Vec::<Hospital>::new);
    let is_loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);
    let is_saving = use_state(|| false);
    // Some(id) while editing an existing row
    let editing = use_state(|| None::<String>);
    let uploaded_image = use_state(|| None::<String>);

    let name_input = use_node_ref();
    let city_input = use_node_ref();
    let address_input = use_node_ref();
    let phone_input = use_node_ref();
    let file_input = use_node_ref();

    {
        let hospitals = hospitals.clone();
        let is_loading = is_loading.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match HospitalsApi::list().await {
                    Ok(list) => hospitals.set(list),
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
                is_loading.set(false);
            });
            || ()
        });
    }

    let on_upload = {
        let file_input = file_input.clone();
        let uploaded_image = uploaded_image.clone();
        let error_message = error_message.clone();

        Callback::from(move |_: MouseEvent| {
            let file_element = file_input.cast::<HtmlInputElement>().unwrap();
            let Some(file) = file_element.files().and_then(|files| files.get(0)) else {
                error_message.set(Some("Choose an image file first".to_string()));
                return;
            };

            let uploaded_image = uploaded_image.clone();
            let error_message = error_message.clone();

            spawn_local(async move {
                match HospitalsApi::upload_image(&file).await {
                    Ok(uploaded) => uploaded_image.set(Some(uploaded.url)),
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
            });
        })
    };

    let on_edit = {
        let editing = editing.clone();
        let uploaded_image = uploaded_image.clone();
        let name_input = name_input.clone();
        let city_input = city_input.clone();
        let address_input = address_input.clone();
        let phone_input = phone_input.clone();

        Callback::from(move |hospital: Hospital| {
            editing.set(Some(hospital.id.clone()));
            uploaded_image.set(hospital.image_url.clone());
            name_input.cast::<HtmlInputElement>().unwrap().set_value(&hospital.name);
            city_input.cast::<HtmlInputElement>().unwrap().set_value(&hospital.city);
            address_input
                .cast::<HtmlInputElement>()
                .unwrap()
                .set_value(hospital.address.as_deref().unwrap_or(""));
            phone_input
                .cast::<HtmlInputElement>()
                .unwrap()
                .set_value(hospital.phone.as_deref().unwrap_or(""));
        })
    };

    let on_delete = {
        let hospitals = hospitals.clone();
        let error_message = error_message.clone();

        Callback::from(move |id: String| {
            let hospitals = hospitals.clone();
            let error_message = error_message.clone();

            spawn_local(async move {
                match HospitalsApi::delete(&id).await {
                    Ok(()) => {
                        let next = hospitals.iter().filter(|h| h.id != id).cloned().collect();
                        hospitals.set(next);
                    }
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
            });
        })
    };

    let onsubmit = {
        let hospitals = hospitals.clone();
        let error_message = error_message.clone();
        let is_saving = is_saving.clone();
        let editing = editing.clone();
        let uploaded_image = uploaded_image.clone();
        let name_input = name_input.clone();
        let city_input = city_input.clone();
        let address_input = address_input.clone();
        let phone_input = phone_input.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name_element = name_input.cast::<HtmlInputElement>().unwrap();
            let city_element = city_input.cast::<HtmlInputElement>().unwrap();
            let address_element = address_input.cast::<HtmlInputElement>().unwrap();
            let phone_element = phone_input.cast::<HtmlInputElement>().unwrap();

            let name = name_element.value();
            let city = city_element.value();
            let address = address_element.value();
            let phone = phone_element.value();

            if !non_blank(&name) || !non_blank(&city) {
                error_message.set(Some("Name and city are required".to_string()));
                return;
            }

            let request = HospitalRequest {
                name,
                city,
                address: non_blank(&address).then_some(address),
                phone: non_blank(&phone).then_some(phone),
                image_url: (*uploaded_image).clone(),
            };

            let hospitals = hospitals.clone();
            let error_message = error_message.clone();
            let is_saving = is_saving.clone();
            let editing = editing.clone();
            let uploaded_image = uploaded_image.clone();
            let editing_id = (*editing).clone();

            is_saving.set(true);
            error_message.set(None);

            spawn_local(async move {
                let result = match editing_id.as_deref() {
                    Some(id) => HospitalsApi::update(id, &request).await,
                    None => HospitalsApi::create(&request).await,
                };

                match result {
                    Ok(saved) => {
                        let mut next: Vec<Hospital> =
                            hospitals.iter().filter(|h| h.id != saved.id).cloned().collect();
                        next.push(saved);
                        hospitals.set(next);
                        editing.set(None);
                        uploaded_image.set(None);
                        name_element.set_value("");
                        city_element.set_value("");
                        address_element.set_value("");
                        phone_element.set_value("");
                    }
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
                is_saving.set(false);
            });
        })
    };

    html! {
        <div>
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{"Hospitals"}</h1>

            if let Some(error) = (*error_message).as_ref() {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    {error}
                </div>
            }

            <div class="bg-white rounded-lg shadow-md p-6 mb-8">
                <h2 class="text-lg font-semibold mb-4">
                    {if editing.is_some() { "Edit hospital" } else { "Add hospital" }}
                </h2>

                <form {onsubmit}>
                    <div class="grid md:grid-cols-2 gap-4 mb-4">
                        <input
                            ref={name_input}
                            type="text"
                            name="name"
                            placeholder="Hospital name"
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
                            ref={address_input}
                            type="text"
                            name="address"
                            placeholder="Address"
                            class="px-3 py-2 border border-gray-300 rounded-md"
                        />
                        <input
                            ref={phone_input}
                            type="tel"
                            name="phone"
                            placeholder="Phone"
                            class="px-3 py-2 border border-gray-300 rounded-md"
                        />
                    </div>

                    <div class="flex items-center space-x-4 mb-4">
                        <input ref={file_input} type="file" accept="image/*" />
                        <button
                            type="button"
                            onclick={on_upload}
                            class="bg-gray-600 hover:bg-gray-800 text-white py-1 px-3 rounded"
                        >
                            {"Upload image"}
                        </button>
                        if let Some(url) = (*uploaded_image).as_ref() {
                            <span class="text-sm text-green-600">{"Uploaded: "}{url}</span>
                        }
                    </div>

                    <button
                        type="submit"
                        disabled={*is_saving}
                        class="bg-red-600 hover:bg-red-800 disabled:bg-red-300 text-white font-bold py-2 px-6 rounded"
                    >
                        if *is_saving {
                            {"Saving..."}
                        } else if editing.is_some() {
                            {"Update hospital"}
                        } else {
                            {"Add hospital"}
                        }
                    </button>
                </form>
            </div>

            if *is_loading {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"Loading hospitals..."}</p>
                </div>
            } else {
                <div class="bg-white rounded-lg shadow-md p-6 overflow-x-auto">
                    <table class="min-w-full table-auto">
                        <thead>
                            <tr class="bg-gray-50">
                                <th class="px-4 py-2 text-left">{"Name"}</th>
                                <th class="px-4 py-2 text-left">{"City"}</th>
                                <th class="px-4 py-2 text-left">{"Phone"}</th>
                                <th class="px-4 py-2 text-left">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for hospitals.iter().map(|hospital| {
                                let edit = {
                                    let on_edit = on_edit.clone();
                                    let hospital = hospital.clone();
                                    Callback::from(move |_| on_edit.emit(hospital.clone()))
                                };
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    let id = hospital.id.clone();
                                    Callback::from(move |_| on_delete.emit(id.clone()))
                                };

                                html! {
                                    <tr class="border-b">
                                        <td class="px-4 py-2">{&hospital.name}</td>
                                        <td class="px-4 py-2">{&hospital.city}</td>
                                        <td class="px-4 py-2">{hospital.phone.clone().unwrap_or_else(|| "—".to_string())}</td>
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
