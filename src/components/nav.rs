use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_mount;
use yew_router::prelude::*;

use crate::config::{push_keeping_overrides, use_config_overrides, NavMode};
use crate::scroll::{self, parse_faq_anchor};
use crate::Route;

/// Past this many pixels the bar switches to its solid background.
const SCROLLED_THRESHOLD: i32 = 80;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    About,
    Contact,
}

impl NavTarget {
    pub const ALL: [NavTarget; 3] = [NavTarget::Home, NavTarget::About, NavTarget::Contact];

    pub fn label(self) -> &'static str {
        match self {
            NavTarget::Home => "Home",
            NavTarget::About => "About",
            NavTarget::Contact => "Contact",
        }
    }

    /// Element id of the section this target scrolls to.
    pub fn anchor(self) -> &'static str {
        match self {
            NavTarget::Home => "home",
            NavTarget::About => "about",
            NavTarget::Contact => "contact",
        }
    }

    pub fn route(self) -> Route {
        match self {
            NavTarget::Home => Route::Home,
            // Contact details live on the about page.
            NavTarget::About | NavTarget::Contact => Route::About,
        }
    }
}

/// Which target is highlighted. At most one at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavSelection(Option<NavTarget>);

impl NavSelection {
    pub fn starting_at(target: NavTarget) -> Self {
        NavSelection(Some(target))
    }

    pub fn activate(&mut self, target: NavTarget) {
        self.0 = Some(target);
    }

    pub fn active(&self) -> Option<NavTarget> {
        self.0
    }

    pub fn is_active(&self, target: NavTarget) -> bool {
        self.active() == Some(target)
    }
}

/// Anchor to scroll to when the bar mounts. Routed bars never scroll, and a
/// `#faq-<n>` link keeps the page on that entry.
pub fn initial_scroll(mode: NavMode, initial: NavTarget, hash: &str) -> Option<&'static str> {
    match mode {
        NavMode::Route => None,
        NavMode::Scroll if parse_faq_anchor(hash).is_some() => None,
        NavMode::Scroll => Some(initial.anchor()),
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub mode: NavMode,
    #[prop_or(NavTarget::Home)]
    pub initial: NavTarget,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { mode, initial } = *props;
    let selection = use_state(move || NavSelection::starting_at(initial));
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let navigator = use_navigator();
    let overrides = use_config_overrides();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                    .map(|root| root.scroll_top())
                    .unwrap_or(0);
                is_scrolled.set(scroll_top > SCROLLED_THRESHOLD);
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let activate = {
        let selection = selection.clone();
        Callback::from(move |target: NavTarget| {
            debug!("Activating {:?} ({:?} navigation)", target, mode);
            let mut next = *selection;
            next.activate(target);
            selection.set(next);
            match mode {
                NavMode::Scroll => {
                    scroll::scroll_to_anchor(target.anchor());
                }
                NavMode::Route => {
                    if let Some(navigator) = &navigator {
                        push_keeping_overrides(navigator, &target.route(), &overrides);
                    }
                }
            }
        })
    };

    // The initial target is selected from the first render; scrolling to it
    // has to wait until the sections are in the page.
    use_mount(move || {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        if let Some(anchor) = initial_scroll(mode, initial, &hash) {
            scroll::scroll_to_anchor(anchor);
        }
    });

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <span class="nav-logo">{"TeleQuest"}</span>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for NavTarget::ALL.iter().map(|&target| {
                            let onclick = {
                                let activate = activate.clone();
                                let menu_open = menu_open.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    menu_open.set(false);
                                    activate.emit(target);
                                })
                            };
                            html! {
                                <button
                                    class={classes!("nav-link", selection.is_active(target).then(|| "active"))}
                                    {onclick}
                                >
                                    {target.label()}
                                </button>
                            }
                        })
                    }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 100;
                    background: transparent;
                    transition: background 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(26, 26, 26, 0.95);
                    backdrop-filter: blur(10px);
                }

                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    font-size: 1.4rem;
                    font-weight: 700;
                    color: #fff;
                }

                .nav-right {
                    display: flex;
                    gap: 1rem;
                }

                .nav-link {
                    background: none;
                    border: none;
                    color: #999;
                    font-size: 1rem;
                    cursor: pointer;
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    transition: color 0.3s ease;
                }

                .nav-link:hover {
                    color: #7EB2FF;
                }

                .nav-link.active {
                    color: #fff;
                    background: rgba(30, 144, 255, 0.2);
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        flex-direction: column;
                        background: rgba(26, 26, 26, 0.95);
                        padding: 1rem 2rem;
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
