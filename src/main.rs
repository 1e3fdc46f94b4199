use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod scroll;
mod components {
    pub mod confetti;
    pub mod faq;
    pub mod landing;
    pub mod nav;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod not_found;
}

use components::confetti::ConfettiHandle;
use pages::{
    about::AboutPage,
    home::Home,
    not_found::NotFound,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <AboutPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    // One effect handle per app instance, handed down through context.
    let confetti = use_state(ConfettiHandle::new);

    html! {
        <ContextProvider<ConfettiHandle> context={(*confetti).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #1a1a1a;
                    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                }

                .page {
                    min-height: 100vh;
                    color: #ffffff;
                    overflow-x: hidden;
                }
                "#}
            </style>
        </ContextProvider<ConfettiHandle>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting TeleQuest");
    yew::Renderer::<App>::new().render();
}
