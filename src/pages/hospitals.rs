use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::HospitalsApi;
use crate::types::Hospital;

#[function_component(Hospitals)]
pub fn hospitals() -> Html {
    let hospitals = use_state(Vec::<Hospital>::new);
    let is_loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);

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

    html! {
        <div>
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{"Partner hospitals"}</h1>

            if let Some(error) = (*error_message).as_ref() {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    {error}
                </div>
            }

            if *is_loading {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"Loading hospitals..."}</p>
                </div>
            } else if hospitals.is_empty() {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"No hospitals registered yet"}</p>
                </div>
            } else {
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for hospitals.iter().map(|hospital| html! {
                        <div class="bg-white rounded-lg shadow-md overflow-hidden">
                            if let Some(image_url) = hospital.image_url.as_ref() {
                                <img src={image_url.clone()} alt={hospital.name.clone()} class="w-full h-40 object-cover" />
                            }
                            <div class="p-6">
                                <h3 class="text-lg font-semibold mb-1">{&hospital.name}</h3>
                                <p class="text-sm text-gray-500 mb-2">{&hospital.city}</p>
                                if let Some(address) = hospital.address.as_ref() {
                                    <p class="text-gray-600 mb-1">{address}</p>
                                }
                                if let Some(phone) = hospital.phone.as_ref() {
                                    <p class="text-gray-600">{"☎ "}{phone}</p>
                                }
                            </div>
                        </div>
                    }) }
                </div>
            }
        </div>
    }
}
