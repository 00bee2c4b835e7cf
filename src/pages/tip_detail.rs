use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::TipsApi;
use crate::types::Tip;
use crate::utils::format::timestamp;

#[derive(Properties, PartialEq)]
pub struct TipDetailProps {
    pub id: String,
}

#[function_component(TipDetail)]
pub fn tip_detail(props: &TipDetailProps) -> Html {
    let tip = use_state(|| None::<Tip>);
    let is_loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);

    {
        let tip = tip.clone();
        let is_loading = is_loading.clone();
        let error_message = error_message.clone();
        let id = props.id.clone();

        use_effect_with(id, move |id| {
            let id = id.clone();
            spawn_local(async move {
                match TipsApi::get(&id).await {
                    Ok(found) => tip.set(Some(found)),
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
                is_loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div class="max-w-2xl mx-auto">
            if let Some(error) = (*error_message).as_ref() {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    {error}
                </div>
            }

            if *is_loading {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"Loading tip..."}</p>
                </div>
            } else if let Some(tip) = (*tip).as_ref() {
                <article class="bg-white rounded-lg shadow-md overflow-hidden">
                    if let Some(image_url) = tip.image_url.as_ref() {
                        <img src={image_url.clone()} alt={tip.title.clone()} class="w-full h-64 object-cover" />
                    }
                    <div class="p-6">
                        <h1 class="text-3xl font-bold text-gray-900 mb-2">{&tip.title}</h1>
                        if !timestamp(&tip.created_at).is_empty() {
                            <p class="text-sm text-gray-500 mb-4">{timestamp(&tip.created_at)}</p>
                        }
                        <p class="text-gray-700 whitespace-pre-line">{&tip.content}</p>
                    </div>
                </article>
            } else {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"Tip not found"}</p>
                </div>
            }

            <div class="mt-4">
                <Link<Route> to={Route::Tips} classes="text-gray-600 hover:text-gray-900">
                    {"← Back to tips"}
                </Link<Route>>
            </div>
        </div>
    }
}
