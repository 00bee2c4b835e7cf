use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::Session;

#[function_component(Home)]
pub fn home() -> Html {
    let is_authenticated = Session::is_authenticated();

    html! {
        <div class="text-center">
            <div class="max-w-4xl mx-auto">
                <h1 class="text-4xl font-bold text-gray-900 mb-6">
                    {"Give blood, give life"}
                </h1>

                <p class="text-xl text-gray-600 mb-8">
                    {"BloodLink connects donors with hospitals, donation events, and people who need blood right now"}
                </p>

                <div class="grid md:grid-cols-3 gap-8 mb-12">
                    <div class="bg-white p-6 rounded-lg shadow-md">
                        <h3 class="text-lg font-semibold mb-3">{"🗓 Donation events"}</h3>
                        <p class="text-gray-600">{"Find a drive near you and register with one click"}</p>
                    </div>

                    <div class="bg-white p-6 rounded-lg shadow-md">
                        <h3 class="text-lg font-semibold mb-3">{"🩸 Blood market"}</h3>
                        <p class="text-gray-600">{"Post a request or an offer and get matched with compatible donors"}</p>
                    </div>

                    <div class="bg-white p-6 rounded-lg shadow-md">
                        <h3 class="text-lg font-semibold mb-3">{"🏥 Partner hospitals"}</h3>
                        <p class="text-gray-600">{"See where your donation goes and which centers need you most"}</p>
                    </div>
                </div>

                if !is_authenticated {
                    <div class="space-x-4">
                        <Link<Route> to={Route::Register} classes="bg-red-600 hover:bg-red-800 text-white font-bold py-3 px-6 rounded-lg text-lg">
                            {"Become a donor"}
                        </Link<Route>>

                        <Link<Route> to={Route::Login} classes="bg-gray-500 hover:bg-gray-700 text-white font-bold py-3 px-6 rounded-lg text-lg">
                            {"Sign in"}
                        </Link<Route>>
                    </div>
                } else {
                    <div>
                        <Link<Route> to={Route::MyDonations} classes="bg-green-600 hover:bg-green-800 text-white font-bold py-3 px-6 rounded-lg text-lg">
                            {"My donations"}
                        </Link<Route>>
                    </div>
                }
            </div>
        </div>
    }
}
