use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::{MarketApi, Session};
use crate::types::MarketPost;
use crate::utils::format::{badge_class, capitalize_status};

fn kind_label(kind: &str) -> &'static str {
    match kind {
        "request" => "Needs blood",
        "offer" => "Offers blood",
        _ => "Post",
    }
}

#[function_component(Market)]
pub fn market() -> Html {
    let posts = use_state(Vec::<MarketPost>::new);
    let is_loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);

    {
        let posts = posts.clone();
        let is_loading = is_loading.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match MarketApi::list().await {
                    Ok(list) => posts.set(list),
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
                is_loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div>
            <div class="flex justify-between items-center mb-6">
                <h1 class="text-3xl font-bold text-gray-900">{"Blood market"}</h1>
                if Session::is_authenticated() {
                    <Link<Route> to={Route::MarketNew} classes="bg-red-600 hover:bg-red-800 text-white font-bold py-2 px-4 rounded">
                        {"New post"}
                    </Link<Route>>
                }
            </div>

            <p class="text-gray-600 mb-6">
                {"Requests and offers are matched automatically against compatible posts."}
            </p>

            if let Some(error) = (*error_message).as_ref() {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    {error}
                </div>
            }

            if *is_loading {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"Loading posts..."}</p>
                </div>
            } else if posts.is_empty() {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"No open posts right now"}</p>
                </div>
            } else {
                <div class="grid md:grid-cols-2 gap-6">
                    { for posts.iter().map(|post| html! {
                        <div class="bg-white p-6 rounded-lg shadow-md">
                            <div class="flex justify-between items-start mb-2">
                                <h3 class="text-lg font-semibold">
                                    {kind_label(&post.kind)}{" · "}{&post.blood_type}
                                </h3>
                                <span class={badge_class(&post.status)}>
                                    {capitalize_status(&post.status)}
                                </span>
                            </div>
                            <p class="text-sm text-gray-500 mb-2">{&post.city}</p>
                            if let Some(description) = post.description.as_ref() {
                                <p class="text-gray-600 mb-4">{description}</p>
                            }
                            <div class="flex justify-between items-center">
                                <span class="text-sm text-gray-500">
                                    {format!("{} match(es)", post.matches.len())}
                                </span>
                                <Link<Route>
                                    to={Route::MarketDetail { id: post.id.clone() }}
                                    classes="text-red-600 hover:text-red-800 font-semibold"
                                >
                                    {"View"}
                                </Link<Route>>
                            </div>
                        </div>
                    }) }
                </div>
            }
        </div>
    }
}
