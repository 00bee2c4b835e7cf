use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::TipsApi;
use crate::types::{Tip, TipRequest};
use crate::utils::validation::non_blank;

#[function_component(AdminTips)]
pub fn admin_tips() -> Html {
    let tips = use_state(Vec::<Tip>::new);
    let is_loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);
    let is_saving = use_state(|| false);
    let editing = use_state(|| None::<String>);
    let uploaded_image = use_state(|| None::<String>);

    let title_input = use_node_ref();
    let content_input = use_node_ref();
    let file_input = use_node_ref();

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
                match TipsApi::upload_image(&file).await {
                    Ok(uploaded) => uploaded_image.set(Some(uploaded.url)),
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
            });
        })
    };

    let on_edit = {
        let editing = editing.clone();
        let uploaded_image = uploaded_image.clone();
        let title_input = title_input.clone();
        let content_input = content_input.clone();

        Callback::from(move |tip: Tip| {
            editing.set(Some(tip.id.clone()));
            uploaded_image.set(tip.image_url.clone());
            title_input.cast::<HtmlInputElement>().unwrap().set_value(&tip.title);
            content_input.cast::<HtmlTextAreaElement>().unwrap().set_value(&tip.content);
        })
    };

    let on_delete = {
        let tips = tips.clone();
        let error_message = error_message.clone();

        Callback::from(move |id: String| {
            let tips = tips.clone();
            let error_message = error_message.clone();

            spawn_local(async move {
                match TipsApi::delete(&id).await {
                    Ok(()) => {
                        let next = tips.iter().filter(|t| t.id != id).cloned().collect();
                        tips.set(next);
                    }
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
            });
        })
    };

    let onsubmit = {
        let tips = tips.clone();
        let error_message = error_message.clone();
        let is_saving = is_saving.clone();
        let editing = editing.clone();
        let uploaded_image = uploaded_image.clone();
        let title_input = title_input.clone();
        let content_input = content_input.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let title_element = title_input.cast::<HtmlInputElement>().unwrap();
            let content_element = content_input.cast::<HtmlTextAreaElement>().unwrap();

            let title = title_element.value();
            let content = content_element.value();

            if !non_blank(&title) || !non_blank(&content) {
                error_message.set(Some("Title and content are required".to_string()));
                return;
            }

            let request = TipRequest {
                title,
                content,
                image_url: (*uploaded_image).clone(),
            };

            let tips = tips.clone();
            let error_message = error_message.clone();
            let is_saving = is_saving.clone();
            let editing = editing.clone();
            let uploaded_image = uploaded_image.clone();
            let editing_id = (*editing).clone();

            is_saving.set(true);
            error_message.set(None);

            spawn_local(async move {
                let result = match editing_id.as_deref() {
                    Some(id) => TipsApi::update(id, &request).await,
                    None => TipsApi::create(&request).await,
                };

                match result {
                    Ok(saved) => {
                        let mut next: Vec<Tip> =
                            tips.iter().filter(|t| t.id != saved.id).cloned().collect();
                        next.push(saved);
                        tips.set(next);
                        editing.set(None);
                        uploaded_image.set(None);
                        title_element.set_value("");
                        content_element.set_value("");
                    }
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
                is_saving.set(false);
            });
        })
    };

    html! {
        <div>
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{"Tips"}</h1>

            if let Some(error) = (*error_message).as_ref() {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    {error}
                </div>
            }

            <div class="bg-white rounded-lg shadow-md p-6 mb-8">
                <h2 class="text-lg font-semibold mb-4">
                    {if editing.is_some() { "Edit tip" } else { "Publish a tip" }}
                </h2>

                <form {onsubmit}>
                    <input
                        ref={title_input}
                        type="text"
                        name="title"
                        placeholder="Title"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md mb-4"
                    />
                    <textarea
                        ref={content_input}
                        name="content"
                        rows="5"
                        placeholder="What should donors know?"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md mb-4"
                    />

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
                            {"Update tip"}
                        } else {
                            {"Publish"}
                        }
                    </button>
                </form>
            </div>

            if *is_loading {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"Loading tips..."}</p>
                </div>
            } else {
                <div class="bg-white rounded-lg shadow-md p-6 overflow-x-auto">
                    <table class="min-w-full table-auto">
                        <thead>
                            <tr class="bg-gray-50">
                                <th class="px-4 py-2 text-left">{"Title"}</th>
                                <th class="px-4 py-2 text-left">{"Image"}</th>
                                <th class="px-4 py-2 text-left">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for tips.iter().map(|tip| {
                                let edit = {
                                    let on_edit = on_edit.clone();
                                    let tip = tip.clone();
                                    Callback::from(move |_| on_edit.emit(tip.clone()))
                                };
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    let id = tip.id.clone();
                                    Callback::from(move |_| on_delete.emit(id.clone()))
                                };

                                html! {
                                    <tr class="border-b">
                                        <td class="px-4 py-2">{&tip.title}</td>
                                        <td class="px-4 py-2">
                                            {if tip.image_url.is_some() { "yes" } else { "—" }}
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
