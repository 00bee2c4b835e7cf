use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::{MarketApi, Session};
use crate::types::MarketPost;
use crate::utils::format::{badge_class, capitalize_status};

#[derive(Properties, PartialEq)]
pub struct MarketDetailProps {
    pub id: String,
}

#[function_component(MarketDetail)]
pub fn market_detail(props: &MarketDetailProps) -> Html {
    let navigator = use_navigator().unwrap();
    let post = use_state(|| None::<MarketPost>);
    let is_loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);
    let is_busy = use_state(|| false);

    {
        let post = post.clone();
        let is_loading = is_loading.clone();
        let error_message = error_message.clone();
        let id = props.id.clone();

        use_effect_with(id, move |id| {
            let id = id.clone();
            spawn_local(async move {
                match MarketApi::get(&id).await {
                    Ok(found) => post.set(Some(found)),
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
                is_loading.set(false);
            });
            || ()
        });
    }

    let on_close = {
        let post = post.clone();
        let error_message = error_message.clone();
        let is_busy = is_busy.clone();
        let id = props.id.clone();

        Callback::from(move |_| {
            let post = post.clone();
            let error_message = error_message.clone();
            let is_busy = is_busy.clone();
            let id = id.clone();

            is_busy.set(true);
            error_message.set(None);

            spawn_local(async move {
                match MarketApi::close(&id).await {
                    // Replace the post only once the server confirms the flip
                    Ok(closed) => post.set(Some(closed)),
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
                is_busy.set(false);
            });
        })
    };

    let on_delete = {
        let navigator = navigator.clone();
        let error_message = error_message.clone();
        let is_busy = is_busy.clone();
        let id = props.id.clone();

        Callback::from(move |_| {
            let navigator = navigator.clone();
            let error_message = error_message.clone();
            let is_busy = is_busy.clone();
            let id = id.clone();

            is_busy.set(true);
            error_message.set(None);

            spawn_local(async move {
                match MarketApi::delete(&id).await {
                    Ok(()) => navigator.push(&Route::Market),
                    Err(api_error) => {
                        error_message.set(Some(api_error.describe()));
                        is_busy.set(false);
                    }
                }
            });
        })
    };

    let current_user = Session::get_user_data();
    let is_admin = current_user.as_ref().is_some_and(|user| user.is_admin());

    html! {
        <div class="max-w-2xl mx-auto">
            if let Some(error) = (*error_message).as_ref() {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    {error}
                </div>
            }

            if *is_loading {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"Loading post..."}</p>
                </div>
            } else if let Some(post) = (*post).as_ref() {
                <div class="bg-white rounded-lg shadow-md p-6">
                    <div class="flex justify-between items-start mb-2">
                        <h1 class="text-2xl font-bold text-gray-900">
                            {if post.kind == "request" { "Blood request" } else { "Blood offer" }}
                            {" · "}{&post.blood_type}
                        </h1>
                        <span class={badge_class(&post.status)}>
                            {capitalize_status(&post.status)}
                        </span>
                    </div>

                    <p class="text-gray-500 mb-2">{&post.city}</p>
                    if let Some(author) = post.author_name.as_ref() {
                        <p class="text-sm text-gray-500 mb-4">{"Posted by "}{author}</p>
                    }
                    if let Some(description) = post.description.as_ref() {
                        <p class="text-gray-700 mb-6">{description}</p>
                    }

                    <h2 class="text-lg font-semibold mb-2">{"Matches"}</h2>
                    if post.matches.is_empty() {
                        <p class="text-gray-600 mb-6">{"No compatible posts yet. Check back later."}</p>
                    } else {
                        <div class="overflow-x-auto mb-6">
                            <table class="min-w-full table-auto">
                                <thead>
                                    <tr class="bg-gray-50">
                                        <th class="px-4 py-2 text-left">{"Kind"}</th>
                                        <th class="px-4 py-2 text-left">{"Blood type"}</th>
                                        <th class="px-4 py-2 text-left">{"City"}</th>
                                        <th class="px-4 py-2 text-left">{"Contact"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for post.matches.iter().map(|m| html! {
                                        <tr class="border-b">
                                            <td class="px-4 py-2">{capitalize_status(&m.kind)}</td>
                                            <td class="px-4 py-2">{&m.blood_type}</td>
                                            <td class="px-4 py-2">{&m.city}</td>
                                            <td class="px-4 py-2">{m.contact.clone().unwrap_or_else(|| "—".to_string())}</td>
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                        </div>
                    }

                    <div class="flex space-x-4">
                        if post.status == "open" && current_user.as_ref().is_some_and(|user| user.id == post.author_id) {
                            <button
                                onclick={on_close}
                                disabled={*is_busy}
                                class="bg-gray-600 hover:bg-gray-800 disabled:bg-gray-300 text-white font-bold py-2 px-4 rounded"
                            >
                                if *is_busy { {"Closing..."} } else { {"Close post"} }
                            </button>
                        }
                        if is_admin {
                            <button
                                onclick={on_delete}
                                disabled={*is_busy}
                                class="bg-red-600 hover:bg-red-800 disabled:bg-red-300 text-white font-bold py-2 px-4 rounded"
                            >
                                {"Delete post"}
                            </button>
                        }
                    </div>
                </div>
            } else {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"Post not found"}</p>
                </div>
            }

            <div class="mt-4">
                <Link<Route> to={Route::Market} classes="text-gray-600 hover:text-gray-900">
                    {"← Back to the market"}
                </Link<Route>>
            </div>
        </div>
    }
}
