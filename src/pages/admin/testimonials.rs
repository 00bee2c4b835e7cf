use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::TestimonialsApi;
use crate::types::Testimonial;
use crate::utils::format::timestamp;

#[function_component(AdminTestimonials)]
pub fn admin_testimonials() -> Html {
    let testimonials = use_state(Vec::<Testimonial>::new);
    let is_loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);

    {
        let testimonials = testimonials.clone();
        let is_loading = is_loading.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match TestimonialsApi::admin_list().await {
                    Ok(list) => testimonials.set(list),
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
                is_loading.set(false);
            });
            || ()
        });
    }

    let on_approve = {
        let testimonials = testimonials.clone();
        let error_message = error_message.clone();

        Callback::from(move |id: String| {
            let testimonials = testimonials.clone();
            let error_message = error_message.clone();

            spawn_local(async move {
                match TestimonialsApi::approve(&id).await {
                    Ok(approved) => {
                        let next = testimonials
                            .iter()
                            .map(|t| if t.id == approved.id { approved.clone() } else { t.clone() })
                            .collect();
                        testimonials.set(next);
                    }
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
            });
        })
    };

    let on_delete = {
        let testimonials = testimonials.clone();
        let error_message = error_message.clone();

        Callback::from(move |id: String| {
            let testimonials = testimonials.clone();
            let error_message = error_message.clone();

            spawn_local(async move {
                match TestimonialsApi::delete(&id).await {
                    Ok(()) => {
                        let next = testimonials.iter().filter(|t| t.id != id).cloned().collect();
                        testimonials.set(next);
                    }
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
            });
        })
    };

    html! {
        <div class="max-w-3xl mx-auto">
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{"Testimonials"}</h1>

            if let Some(error) = (*error_message).as_ref() {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    {error}
                </div>
            }

            if *is_loading {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"Loading testimonials..."}</p>
                </div>
            } else if testimonials.is_empty() {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"Nothing waiting for review"}</p>
                </div>
            } else {
                <div class="space-y-4">
                    { for testimonials.iter().map(|testimonial| {
                        let approve = {
                            let on_approve = on_approve.clone();
                            let id = testimonial.id.clone();
                            Callback::from(move |_| on_approve.emit(id.clone()))
                        };
                        let delete = {
                            let on_delete = on_delete.clone();
                            let id = testimonial.id.clone();
                            Callback::from(move |_| on_delete.emit(id.clone()))
                        };

                        html! {
                            <div class="bg-white p-6 rounded-lg shadow-md">
                                <p class="text-gray-700 mb-2">{&testimonial.content}</p>
                                <p class="text-sm text-gray-500 mb-4">
                                    {"— "}{&testimonial.author_name}
                                    if !timestamp(&testimonial.created_at).is_empty() {
                                        {", "}{timestamp(&testimonial.created_at)}
                                    }
                                </p>
                                <div class="flex space-x-4">
                                    if testimonial.approved {
                                        <span class="text-green-600 font-semibold">{"Approved"}</span>
                                    } else {
                                        <button
                                            onclick={approve}
                                            class="bg-green-600 hover:bg-green-800 text-white py-1 px-4 rounded"
                                        >
                                            {"Approve"}
                                        </button>
                                    }
                                    <button
                                        onclick={delete}
                                        class="text-red-600 hover:text-red-800"
                                    >
                                        {"Delete"}
                                    </button>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            }
        </div>
    }
}
