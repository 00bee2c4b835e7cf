use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlSelectElement};
use yew::prelude::*;

use crate::services::{Session, UsersApi};
use crate::types::User;

#[function_component(AdminUsers)]
pub fn admin_users() -> Html {
    let users = use_state(Vec::<User>::new);
    let is_loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);

    {
        let users = users.clone();
        let is_loading = is_loading.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match UsersApi::list().await {
                    Ok(list) => users.set(list),
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
                is_loading.set(false);
            });
            || ()
        });
    }

    let on_role_change = {
        let users = users.clone();
        let error_message = error_message.clone();

        Callback::from(move |(id, e): (String, Event)| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let role = select.value();

            let users = users.clone();
            let error_message = error_message.clone();

            spawn_local(async move {
                match UsersApi::set_role(&id, role).await {
                    Ok(updated) => {
                        let next = users
                            .iter()
                            .map(|u| if u.id == updated.id { updated.clone() } else { u.clone() })
                            .collect();
                        users.set(next);
                    }
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
            });
        })
    };

    let on_delete = {
        let users = users.clone();
        let error_message = error_message.clone();

        Callback::from(move |id: String| {
            let users = users.clone();
            let error_message = error_message.clone();

            spawn_local(async move {
                match UsersApi::delete(&id).await {
                    Ok(()) => {
                        let next = users.iter().filter(|u| u.id != id).cloned().collect();
                        users.set(next);
                    }
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
            });
        })
    };

    let current_id = Session::get_user_data().map(|u| u.id);

    html! {
        <div>
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{"Users"}</h1>

            if let Some(error) = (*error_message).as_ref() {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    {error}
                </div>
            }

            if *is_loading {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"Loading users..."}</p>
                </div>
            } else if users.is_empty() {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"No users found"}</p>
                </div>
            } else {
                <div class="bg-white rounded-lg shadow-md p-6 overflow-x-auto">
                    <table class="min-w-full table-auto">
                        <thead>
                            <tr class="bg-gray-50">
                                <th class="px-4 py-2 text-left">{"Name"}</th>
                                <th class="px-4 py-2 text-left">{"Email"}</th>
                                <th class="px-4 py-2 text-left">{"Blood type"}</th>
                                <th class="px-4 py-2 text-left">{"Role"}</th>
                                <th class="px-4 py-2 text-left">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for users.iter().map(|user| {
                                let id = user.id.clone();
                                let role_change = {
                                    let on_role_change = on_role_change.clone();
                                    let id = id.clone();
                                    Callback::from(move |e: Event| on_role_change.emit((id.clone(), e)))
                                };
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    let id = id.clone();
                                    Callback::from(move |_| on_delete.emit(id.clone()))
                                };
                                // An admin cannot edit their own row
                                let is_self = current_id.as_deref() == Some(user.id.as_str());

                                html! {
                                    <tr class="border-b">
                                        <td class="px-4 py-2">{&user.name}</td>
                                        <td class="px-4 py-2">{&user.email}</td>
                                        <td class="px-4 py-2">{user.blood_type.clone().unwrap_or_else(|| "—".to_string())}</td>
                                        <td class="px-4 py-2">
                                            <select
                                                onchange={role_change}
                                                disabled={is_self}
                                                class="border border-gray-300 rounded px-2 py-1"
                                            >
                                                <option value="user" selected={user.role != "admin"}>{"user"}</option>
                                                <option value="admin" selected={user.role == "admin"}>{"admin"}</option>
                                            </select>
                                        </td>
                                        <td class="px-4 py-2">
                                            <button
                                                onclick={delete}
                                                disabled={is_self}
                                                class="text-red-600 hover:text-red-800 disabled:text-gray-400"
                                            >
                                                {"Delete"}
                                            </button>
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
