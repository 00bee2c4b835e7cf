use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="text-center py-16">
            <h1 class="text-4xl font-bold text-gray-900 mb-4">{"404 - Page Not Found"}</h1>
            <p class="text-gray-600 mb-6">{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes="text-red-600 hover:text-red-800 font-semibold">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
