use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::NewsletterApi;
use crate::types::Subscriber;
use crate::utils::format::timestamp;

#[function_component(AdminNewsletter)]
pub fn admin_newsletter() -> Html {
    let subscribers = use_state(Vec::<Subscriber>::new);
    let is_loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);

    {
        let subscribers = subscribers.clone();
        let is_loading = is_loading.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match NewsletterApi::list().await {
                    Ok(list) => subscribers.set(list),
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
                is_loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div class="max-w-2xl mx-auto">
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{"Newsletter subscribers"}</h1>

            if let Some(error) = (*error_message).as_ref() {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    {error}
                </div>
            }

            if *is_loading {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"Loading subscribers..."}</p>
                </div>
            } else if subscribers.is_empty() {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"No subscribers yet"}</p>
                </div>
            } else {
                <div class="bg-white rounded-lg shadow-md p-6 overflow-x-auto">
                    <table class="min-w-full table-auto">
                        <thead>
                            <tr class="bg-gray-50">
                                <th class="px-4 py-2 text-left">{"Email"}</th>
                                <th class="px-4 py-2 text-left">{"Subscribed"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for subscribers.iter().map(|subscriber| html! {
                                <tr class="border-b">
                                    <td class="px-4 py-2">{&subscriber.email}</td>
                                    <td class="px-4 py-2">{timestamp(&subscriber.subscribed_at)}</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            }
        </div>
    }
}
