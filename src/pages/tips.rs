use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::TipsApi;
use crate::types::Tip;

#[function_component(Tips)]
pub fn tips() -> Html {
    let tips = use_state(Vec::<Tip>::new);
    let is_loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);

    {
        let tips = tips.clone();
        let is_loading = is_loading.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match TipsApi::list().await {
                    Ok(list) => tips.set(list),
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
                is_loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div>
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{"Donation tips"}</h1>

            if let Some(error) = (*error_message).as_ref() {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    {error}
                </div>
            }

            if *is_loading {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"Loading tips..."}</p>
                </div>
            } else if tips.is_empty() {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"No tips published yet"}</p>
                </div>
            } else {
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for tips.iter().map(|tip| html! {
                        <div class="bg-white rounded-lg shadow-md overflow-hidden">
                            if let Some(image_url) = tip.image_url.as_ref() {
                                <img src={image_url.clone()} alt={tip.title.clone()} class="w-full h-40 object-cover" />
                            }
                            <div class="p-6">
                                <h3 class="text-lg font-semibold mb-2">{&tip.title}</h3>
                                <p class="text-gray-600 mb-4">
                                    {tip.content.chars().take(120).collect::<String>()}
                                    if tip.content.chars().count() > 120 { {"…"} }
                                </p>
                                <Link<Route>
                                    to={Route::TipDetail { id: tip.id.clone() }}
                                    classes="text-red-600 hover:text-red-800 font-semibold"
                                >
                                    {"Read more"}
                                </Link<Route>>
                            </div>
                        </div>
                    }) }
                </div>
            }
        </div>
    }
}
