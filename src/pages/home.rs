use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::faq::TELEQUEST_FAQ;
use crate::components::landing::Landing;
use crate::components::nav::Nav;
use crate::config::{push_keeping_overrides, use_config_overrides, use_page_config, NavMode, PageConfig};
use crate::pages::about::{AboutSection, ContactSection};
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_page_config(PageConfig::HOME);
    let navigator = use_navigator();
    let overrides = use_config_overrides();

    // With routed navigation the about section lives on its own page.
    let on_get_started = match (config.nav, navigator) {
        (NavMode::Route, Some(navigator)) => {
            Some(Callback::from(move |_: ()| {
                push_keeping_overrides(&navigator, &Route::About, &overrides)
            }))
        }
        _ => None,
    };

    html! {
        <div class="page">
            <Nav mode={config.nav} />
            <Landing {on_get_started} />
            <AboutSection entries={TELEQUEST_FAQ} mode={config.accordion} />
            <ContactSection />
        </div>
    }
}
