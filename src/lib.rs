use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod contexts;
pub mod pages;
pub mod router;
pub mod services;
pub mod types;
pub mod utils;

use components::Layout;
use contexts::AuthProvider;
use router::{switch, Route};

#[function_component(App)]
fn app() -> Html {
    html! {
        <AuthProvider>
            <BrowserRouter>
                <Layout>
                    <Switch<Route> render={switch} />
                </Layout>
            </BrowserRouter>
        </AuthProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("BloodLink frontend starting...");
    yew::Renderer::<App>::new().render();
}
