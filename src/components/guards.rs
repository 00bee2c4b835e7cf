use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::Session;
use crate::utils::eligibility::profile_complete;

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RequireAuth)]
pub fn require_auth(props: &GuardProps) -> Html {
    let navigator = use_navigator().unwrap();

    {
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            if !Session::is_authenticated() {
                navigator.push(&Route::Login);
            }
            || ()
        });
    }

    if Session::is_authenticated() {
        html! { <>{ for props.children.iter() }</> }
    } else {
        html! {}
    }
}

#[function_component(RequireAdmin)]
pub fn require_admin(props: &GuardProps) -> Html {
    let navigator = use_navigator().unwrap();

    {
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            if !Session::is_authenticated() {
                navigator.push(&Route::Login);
            } else if !Session::is_admin() {
                navigator.push(&Route::Home);
            }
            || ()
        });
    }

    if Session::is_admin() {
        html! { <>{ for props.children.iter() }</> }
    } else {
        html! {}
    }
}

/// Sends donors with an incomplete profile to the profile form before
/// they can use donation features.
#[function_component(RequireProfile)]
pub fn require_profile(props: &GuardProps) -> Html {
    let complete = Session::get_user_data()
        .as_ref()
        .is_some_and(profile_complete);

    let navigator = use_navigator().unwrap();

    {
        let navigator = navigator.clone();
        use_effect_with(complete, move |&complete| {
            if !complete {
                navigator.push(&Route::Profile);
            }
            || ()
        });
    }

    if complete {
        html! { <>{ for props.children.iter() }</> }
    } else {
        html! {}
    }
}
