use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::NewsletterForm;
use crate::contexts::{AuthAction, AuthContext};
use crate::router::Route;
use crate::services::Session;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let auth = use_context::<AuthContext>().expect("AuthProvider missing");
    let navigator = use_navigator().unwrap();

    let logout_callback = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            Session::logout();
            auth.dispatch(AuthAction::Logout);
            navigator.push(&Route::Login);
        })
    };

    let is_admin = auth.user.as_ref().is_some_and(|user| user.is_admin());

    html! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <nav class="bg-white shadow-lg">
                <div class="max-w-7xl mx-auto px-4">
                    <div class="flex justify-between h-16">
                        <div class="flex items-center space-x-6">
                            <Link<Route> to={Route::Home} classes="text-xl font-bold text-red-700">
                                {"BloodLink"}
                            </Link<Route>>
                            <Link<Route> to={Route::Events} classes="text-gray-600 hover:text-gray-900">
                                {"Events"}
                            </Link<Route>>
                            <Link<Route> to={Route::Hospitals} classes="text-gray-600 hover:text-gray-900">
                                {"Hospitals"}
                            </Link<Route>>
                            <Link<Route> to={Route::Market} classes="text-gray-600 hover:text-gray-900">
                                {"Blood market"}
                            </Link<Route>>
                            <Link<Route> to={Route::Testimonials} classes="text-gray-600 hover:text-gray-900">
                                {"Stories"}
                            </Link<Route>>
                            <Link<Route> to={Route::Tips} classes="text-gray-600 hover:text-gray-900">
                                {"Tips"}
                            </Link<Route>>
                        </div>

                        <div class="flex items-center space-x-4">
                            if auth.is_authenticated {
                                if is_admin {
                                    <Link<Route> to={Route::AdminDonations} classes="text-gray-600 hover:text-gray-900">
                                        {"Admin"}
                                    </Link<Route>>
                                }
                                <Link<Route> to={Route::MyDonations} classes="text-gray-600 hover:text-gray-900">
                                    {"My donations"}
                                </Link<Route>>
                                <Link<Route> to={Route::Profile} classes="text-gray-600 hover:text-gray-900">
                                    {"Profile"}
                                </Link<Route>>
                                <button
                                    onclick={logout_callback}
                                    class="bg-red-500 hover:bg-red-700 text-white font-bold py-2 px-4 rounded"
                                >
                                    {"Logout"}
                                </button>
                            } else {
                                <Link<Route> to={Route::Login} classes="text-gray-600 hover:text-gray-900">
                                    {"Login"}
                                </Link<Route>>
                                <Link<Route> to={Route::Register} classes="bg-red-600 hover:bg-red-800 text-white font-bold py-2 px-4 rounded">
                                    {"Become a donor"}
                                </Link<Route>>
                            }
                        </div>
                    </div>
                </div>
            </nav>

            if is_admin {
                <div class="bg-gray-100 border-b">
                    <div class="max-w-7xl mx-auto px-4 py-2 flex space-x-4 text-sm">
                        <Link<Route> to={Route::AdminDonations} classes="text-gray-700 hover:text-gray-900">{"Donations"}</Link<Route>>
                        <Link<Route> to={Route::AdminUsers} classes="text-gray-700 hover:text-gray-900">{"Users"}</Link<Route>>
                        <Link<Route> to={Route::AdminHospitals} classes="text-gray-700 hover:text-gray-900">{"Hospitals"}</Link<Route>>
                        <Link<Route> to={Route::AdminEvents} classes="text-gray-700 hover:text-gray-900">{"Events"}</Link<Route>>
                        <Link<Route> to={Route::AdminTestimonials} classes="text-gray-700 hover:text-gray-900">{"Testimonials"}</Link<Route>>
                        <Link<Route> to={Route::AdminTips} classes="text-gray-700 hover:text-gray-900">{"Tips"}</Link<Route>>
                        <Link<Route> to={Route::AdminNewsletter} classes="text-gray-700 hover:text-gray-900">{"Newsletter"}</Link<Route>>
                    </div>
                </div>
            }

            <main class="max-w-7xl mx-auto py-6 px-4 w-full flex-grow">
                { for props.children.iter() }
            </main>

            <footer class="bg-gray-800 text-white py-8 mt-auto">
                <div class="max-w-7xl mx-auto px-4 grid md:grid-cols-2 gap-8">
                    <div>
                        <p class="font-semibold mb-2">{"BloodLink"}</p>
                        <p class="text-sm text-gray-300">{"Connecting donors, hospitals, and people in need."}</p>
                    </div>
                    <NewsletterForm />
                </div>
            </footer>
        </div>
    }
}
