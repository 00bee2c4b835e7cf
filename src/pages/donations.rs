use chrono::Utc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::DonationsApi;
use crate::types::{Donation, Eligibility};
use crate::utils::eligibility::cooldown_status;
use crate::utils::format::{badge_class, capitalize_status, long_date, short_date};

#[function_component(MyDonations)]
pub fn my_donations() -> Html {
    let donations = use_state(Vec::<Donation>::new);
    let eligibility = use_state(|| None::<Eligibility>);
    let is_loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);

    {
        let donations = donations.clone();
        let eligibility = eligibility.clone();
        let is_loading = is_loading.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match DonationsApi::mine().await {
                    Ok(list) => donations.set(list),
                    Err(api_error) => error_message.set(Some(api_error.describe())),
                }
                // The eligibility verdict is the server's; a failure here
                // only hides the countdown card.
                match DonationsApi::eligibility().await {
                    Ok(found) => eligibility.set(Some(found)),
                    Err(api_error) => log::warn!("eligibility fetch failed: {:?}", api_error),
                }
                is_loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div class="max-w-3xl mx-auto">
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{"My donations"}</h1>

            if let Some(error) = (*error_message).as_ref() {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    {error}
                </div>
            }

            if let Some(eligibility) = (*eligibility).as_ref() {
                { eligibility_card(eligibility) }
            }

            <div class="bg-white rounded-lg shadow-md p-6">
                <h2 class="text-xl font-bold mb-4">{"History"}</h2>

                if *is_loading {
                    <div class="text-center py-4">
                        <p class="text-gray-600">{"Loading donations..."}</p>
                    </div>
                } else if donations.is_empty() {
                    <div class="text-center py-4">
                        <p class="text-gray-600">{"No donations yet. Register for an event to get started."}</p>
                    </div>
                } else {
                    <div class="overflow-x-auto">
                        <table class="min-w-full table-auto">
                            <thead>
                                <tr class="bg-gray-50">
                                    <th class="px-4 py-2 text-left">{"Date"}</th>
                                    <th class="px-4 py-2 text-left">{"Hospital"}</th>
                                    <th class="px-4 py-2 text-left">{"Status"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for donations.iter().map(|donation| html! {
                                    <tr class="border-b">
                                        <td class="px-4 py-2">{short_date(donation.date)}</td>
                                        <td class="px-4 py-2">
                                            {donation.hospital_name.clone().unwrap_or_else(|| "—".to_string())}
                                        </td>
                                        <td class="px-4 py-2">
                                            <span class={badge_class(&donation.status)}>
                                                {capitalize_status(&donation.status)}
                                            </span>
                                        </td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                }
            </div>
        </div>
    }
}

fn eligibility_card(eligibility: &Eligibility) -> Html {
    let today = Utc::now().date_naive();
    let cooldown = cooldown_status(eligibility.next_donation_date, today);

    html! {
        <div class="bg-white rounded-lg shadow-md p-6 mb-6">
            <h2 class="text-xl font-bold mb-2">{"Eligibility"}</h2>

            if eligibility.can_donate {
                <p class="text-2xl font-bold text-green-600 mb-2">{"You can donate"}</p>
                if let Some(last) = eligibility.last_donation_date {
                    <p class="text-sm text-gray-500">{"Last donation: "}{long_date(last)}</p>
                }
            } else {
                <p class="text-2xl font-bold text-yellow-600 mb-2">
                    {format!("{} days until your next donation", cooldown.remaining_days)}
                </p>
                if let Some(next) = eligibility.next_donation_date {
                    <p class="text-sm text-gray-500 mb-3">{"Eligible again on "}{long_date(next)}</p>
                }
                <div class="w-full bg-gray-200 rounded-full h-3">
                    <div
                        class="bg-red-600 h-3 rounded-full"
                        style={format!("width: {}%", cooldown.progress_pct)}
                    />
                </div>
                <p class="text-xs text-gray-500 mt-1">
                    {format!("{}% of the recovery window behind you", cooldown.progress_pct)}
                </p>
            }
        </div>
    }
}
