use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{RequireAdmin, RequireAuth, RequireProfile};
use crate::pages;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/events")]
    Events,
    #[at("/events/:id")]
    EventDetail { id: String },
    #[at("/hospitals")]
    Hospitals,
    #[at("/market")]
    Market,
    #[at("/market/new")]
    MarketNew,
    #[at("/market/:id")]
    MarketDetail { id: String },
    #[at("/testimonials")]
    Testimonials,
    #[at("/tips")]
    Tips,
    #[at("/tips/:id")]
    TipDetail { id: String },
    #[at("/profile")]
    Profile,
    #[at("/donations")]
    MyDonations,
    #[at("/admin/users")]
    AdminUsers,
    #[at("/admin/donations")]
    AdminDonations,
    #[at("/admin/hospitals")]
    AdminHospitals,
    #[at("/admin/events")]
    AdminEvents,
    #[at("/admin/testimonials")]
    AdminTestimonials,
    #[at("/admin/tips")]
    AdminTips,
    #[at("/admin/newsletter")]
    AdminNewsletter,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <pages::Home /> },
        Route::Login => html! { <pages::Login /> },
        Route::Register => html! { <pages::Register /> },
        Route::Events => html! { <pages::Events /> },
        Route::EventDetail { id } => html! { <pages::EventDetail {id} /> },
        Route::Hospitals => html! { <pages::Hospitals /> },
        Route::Market => html! { <pages::Market /> },
        Route::MarketNew => html! {
            <RequireAuth><RequireProfile><pages::MarketNew /></RequireProfile></RequireAuth>
        },
        Route::MarketDetail { id } => html! { <pages::MarketDetail {id} /> },
        Route::Testimonials => html! { <pages::Testimonials /> },
        Route::Tips => html! { <pages::Tips /> },
        Route::TipDetail { id } => html! { <pages::TipDetail {id} /> },
        Route::Profile => html! {
            <RequireAuth><pages::Profile /></RequireAuth>
        },
        Route::MyDonations => html! {
            <RequireAuth><RequireProfile><pages::MyDonations /></RequireProfile></RequireAuth>
        },
        Route::AdminUsers => html! {
            <RequireAdmin><pages::admin::AdminUsers /></RequireAdmin>
        },
        Route::AdminDonations => html! {
            <RequireAdmin><pages::admin::AdminDonations /></RequireAdmin>
        },
        Route::AdminHospitals => html! {
            <RequireAdmin><pages::admin::AdminHospitals /></RequireAdmin>
        },
        Route::AdminEvents => html! {
            <RequireAdmin><pages::admin::AdminEvents /></RequireAdmin>
        },
        Route::AdminTestimonials => html! {
            <RequireAdmin><pages::admin::AdminTestimonials /></RequireAdmin>
        },
        Route::AdminTips => html! {
            <RequireAdmin><pages::admin::AdminTips /></RequireAdmin>
        },
        Route::AdminNewsletter => html! {
            <RequireAdmin><pages::admin::AdminNewsletter /></RequireAdmin>
        },
        Route::NotFound => html! { <pages::NotFound /> },
    }
}
