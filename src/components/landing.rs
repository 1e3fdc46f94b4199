use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::confetti::ConfettiHandle;
use crate::components::nav::NavTarget;
use crate::config;
use crate::scroll;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    /// Replaces the default "Get Started" behaviour of scrolling to About.
    #[prop_or_default]
    pub on_get_started: Option<Callback<()>>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let confetti = use_context::<ConfettiHandle>();

    let get_started = {
        let on_get_started = props.on_get_started.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            match &on_get_started {
                Some(callback) => callback.emit(()),
                None => {
                    scroll::scroll_to_anchor(NavTarget::About.anchor());
                }
            }
        })
    };

    let throw_confetti = Callback::from(move |_: MouseEvent| match &confetti {
        Some(confetti) => confetti.fire(),
        None => debug!("No confetti handle provided"),
    });

    html! {
        <main id={NavTarget::Home.anchor()} class="landing">
            <header>
                <section class="main-content">
                    <h1>{"TeleQuest"}</h1>
                    <div id="tagline">
                        <h3>{"A unique answer"}</h3>
                        <h3>{"to the same questions."}</h3>
                    </div>

                    <h2 class="audience">{"Great for large Telegram** groups"}</h2>

                    <div class="buttons">
                        <button class="cta-button" onclick={get_started}>
                            <span>{"Get Started"}</span>
                            <i class="arrow">{"→"}</i>
                        </button>
                    </div>

                    <div id="bottom-main">
                        <p>{"**Exclusively available through Telegram"}</p>
                        <div class="buttons">
                            <button class="hoverme" onclick={throw_confetti}>
                                <span>{"Click for confetti."}</span>
                            </button>
                        </div>
                    </div>
                </section>
            </header>

            <div class="illustration">
                <img src={config::asset_url("robot.svg")} alt="Chatbot Illustration" />
            </div>

            <style>
                {r#"
                .landing {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 8rem 2rem 4rem;
                    color: #ffffff;
                }

                .main-content h1 {
                    font-size: 4.5rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                #tagline h3 {
                    font-size: 1.6rem;
                    margin: 0;
                    color: #ccc;
                    opacity: 0;
                    animation: fadeIn 0.5s forwards;
                }

                #tagline h3:nth-child(2) { animation-delay: 0.3s; }

                @keyframes fadeIn {
                    from {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                .audience {
                    margin: 3rem 0 2rem;
                    font-size: 1.4rem;
                    color: #7EB2FF;
                }

                .cta-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    background: linear-gradient(45deg, #1E90FF, #4169E1);
                    color: white;
                    border: none;
                    border-radius: 8px;
                    font-size: 1.1rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .cta-button:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 4px 20px rgba(30, 144, 255, 0.3);
                }

                .arrow {
                    transition: transform 0.3s ease;
                }

                .cta-button:hover .arrow {
                    transform: translateX(5px);
                }

                #bottom-main {
                    margin-top: 3rem;
                    color: #999;
                    font-size: 0.9rem;
                }

                .hoverme {
                    background: none;
                    border: 1px solid rgba(30, 144, 255, 0.3);
                    color: #7EB2FF;
                    padding: 0.6rem 1.2rem;
                    border-radius: 8px;
                    cursor: pointer;
                }

                .hoverme:hover {
                    border-color: #7EB2FF;
                }

                .illustration img {
                    width: 100%;
                    max-width: 360px;
                    height: auto;
                }

                @media (max-width: 768px) {
                    .landing {
                        flex-direction: column;
                        padding: 6rem 1rem 3rem;
                        text-align: center;
                    }

                    .main-content h1 {
                        font-size: 3rem;
                    }
                }
                "#}
            </style>
        </main>
    }
}
