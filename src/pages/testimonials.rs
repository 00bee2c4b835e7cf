use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::{Session, TestimonialsApi};
use crate::types::Testimonial;
use crate::utils::format::timestamp;
use crate::utils::validation::non_blank;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let testimonials = use_state(Vec::<Testimonial>::new);
    let is_loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);
    let success_message = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);
    let content_input = use_node_ref();

    {
        let testimonials = testimonials.clone();
        let is_loading = is_loading.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match TestimonialsApi::list().await {
                    Ok(list) => testimonials.set(list),
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
                is_loading.set(false);
            });
            || ()
        });
    }

    let onsubmit = {
        let content_input = content_input.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let content_element = content_input.cast::<HtmlTextAreaElement>().unwrap();
            let content = content_element.value();

            // An empty story never reaches the server
            if !non_blank(&content) {
                error_message.set(Some("Please write something before sharing".to_string()));
                return;
            }

            let error_message = error_message.clone();
            let success_message = success_message.clone();
            let is_submitting = is_submitting.clone();

            is_submitting.set(true);
            error_message.set(None);
            success_message.set(None);

            spawn_local(async move {
                match TestimonialsApi::create(content).await {
                    Ok(_) => {
                        success_message.set(Some(
                            "Thank you! Your story will appear once it is approved.".to_string(),
                        ));
                        content_element.set_value("");
                    }
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <div class="max-w-3xl mx-auto">
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{"Donor stories"}</h1>

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

            if Session::is_authenticated() {
                <div class="bg-white rounded-lg shadow-md p-6 mb-8">
                    <h2 class="text-lg font-semibold mb-4">{"Share your story"}</h2>
                    <form {onsubmit}>
                        <textarea
                            ref={content_input}
                            name="content"
                            rows="4"
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-red-500 mb-4"
                            placeholder="How did donating (or receiving) blood change things for you?"
                        />
                        <button
                            type="submit"
                            disabled={*is_submitting}
                            class="bg-red-600 hover:bg-red-800 disabled:bg-red-300 text-white font-bold py-2 px-6 rounded"
                        >
                            if *is_submitting { {"Sharing..."} } else { {"Share"} }
                        </button>
                    </form>
                </div>
            } else {
                <p class="text-gray-600 mb-8">
                    <Link<Route> to={Route::Login} classes="text-red-600 hover:text-red-800">
                        {"Sign in"}
                    </Link<Route>>
                    {" to share your own story."}
                </p>
            }

            if *is_loading {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"Loading stories..."}</p>
                </div>
            } else if testimonials.is_empty() {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"No stories yet. Be the first to share one."}</p>
                </div>
            } else {
                <div class="space-y-6">
                    { for testimonials.iter().map(|testimonial| html! {
                        <div class="bg-white p-6 rounded-lg shadow-md">
                            <p class="text-gray-700 mb-4">{&testimonial.content}</p>
                            <p class="text-sm text-gray-500">
                                {"— "}{&testimonial.author_name}
                                if !timestamp(&testimonial.created_at).is_empty() {
                                    {", "}{timestamp(&testimonial.created_at)}
                                }
                            </p>
                        </div>
                    }) }
                </div>
            }
        </div>
    }
}
