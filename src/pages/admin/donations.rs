use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlSelectElement};
use yew::prelude::*;

use crate::services::DonationsApi;
use crate::types::Donation;
use crate::utils::format::{badge_class, capitalize_status, short_date};

const STATUSES: [&str; 4] = ["pending", "approved", "completed", "rejected"];

#[function_component(AdminDonations)]
pub fn admin_donations() -> Html {
    let donations = use_state(Vec::<Donation>::new);
    let is_loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);

    {
        let donations = donations.clone();
        let is_loading = is_loading.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match DonationsApi::list().await {
                    Ok(list) => donations.set(list),
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
                is_loading.set(false);
            });
            || ()
        });
    }

    let on_status_change = {
        let donations = donations.clone();
        let error_message = error_message.clone();

        Callback::from(move |(id, e): (String, Event)| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let status = select.value();

            let donations = donations.clone();
            let error_message = error_message.clone();

            spawn_local(async move {
                // The badge flips only after the server confirms the change
                match DonationsApi::update_status(&id, status).await {
                    Ok(updated) => {
                        let next = donations
                            .iter()
                            .map(|d| if d.id == updated.id { updated.clone() } else { d.clone() })
                            .collect();
                        donations.set(next);
                    }
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
            });
        })
    };

    html! {
        <div>
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{"Donations"}</h1>

            if let Some(error) = (*error_message).as_ref() {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    {error}
                </div>
            }

            if *is_loading {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"Loading donations..."}</p>
                </div>
            } else if donations.is_empty() {
                <div class="text-center py-4">
                    <p class="text-gray-600">{"No donations recorded"}</p>
                </div>
            } else {
                <div class="bg-white rounded-lg shadow-md p-6 overflow-x-auto">
                    <table class="min-w-full table-auto">
                        <thead>
                            <tr class="bg-gray-50">
                                <th class="px-4 py-2 text-left">{"Date"}</th>
                                <th class="px-4 py-2 text-left">{"Donor"}</th>
                                <th class="px-4 py-2 text-left">{"Hospital"}</th>
                                <th class="px-4 py-2 text-left">{"Status"}</th>
                                <th class="px-4 py-2 text-left">{"Set status"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for donations.iter().map(|donation| {
                                let status_change = {
                                    let on_status_change = on_status_change.clone();
                                    let id = donation.id.clone();
                                    Callback::from(move |e: Event| on_status_change.emit((id.clone(), e)))
                                };

                                html! {
                                    <tr class="border-b">
                                        <td class="px-4 py-2">{short_date(donation.date)}</td>
                                        <td class="px-4 py-2">
                                            {donation.user_name.clone().unwrap_or_else(|| donation.user_id.clone())}
                                        </td>
                                        <td class="px-4 py-2">
                                            {donation.hospital_name.clone().unwrap_or_else(|| "—".to_string())}
                                        </td>
                                        <td class="px-4 py-2">
                                            <span class={badge_class(&donation.status)}>
                                                {capitalize_status(&donation.status)}
                                            </span>
                                        </td>
                                        <td class="px-4 py-2">
                                            <select
                                                onchange={status_change}
                                                class="border border-gray-300 rounded px-2 py-1"
                                            >
                                                { for STATUSES.iter().map(|status| html! {
                                                    <option
                                                        value={*status}
                                                        selected={donation.status == *status}
                                                    >
                                                        {capitalize_status(status)}
                                                    </option>
                                                }) }
                                            </select>
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
