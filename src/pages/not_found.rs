use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Nothing here"}</h1>
            <Link<Route> to={Route::Home} classes="forward-link">
                {"Back to TeleQuest"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    color: #ffffff;
                }

                .forward-link {
                    color: #1E90FF;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
