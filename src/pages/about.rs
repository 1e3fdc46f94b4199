use yew::prelude::*;

use crate::components::faq::{FaqAccordion, FaqEntry, TELEQUEST_FAQ};
use crate::components::nav::{Nav, NavTarget};
use crate::config::{use_page_config, AccordionMode, PageConfig};

#[derive(Properties, PartialEq)]
pub struct AboutSectionProps {
    pub entries: &'static [FaqEntry],
    pub mode: AccordionMode,
}

#[function_component(AboutSection)]
pub fn about_section(props: &AboutSectionProps) -> Html {
    html! {
        <section id={NavTarget::About.anchor()} class="about-container">
            <p class="about-text">
                {"TeleQuest is a platform that provides a unique answer for common questions. Especially designed for large Telegram groups, TeleQuest ensures every member gets the response they need."}
            </p>

            <h2>{"FAQs:"}</h2>
            <FaqAccordion entries={props.entries} mode={props.mode} />

            <style>
                {r#"
                .about-container {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 6rem 2rem 2rem;
                    color: #ffffff;
                }

                .about-text {
                    font-size: 1.2rem;
                    line-height: 1.6;
                    color: #999;
                    margin-bottom: 3rem;
                }

                .about-container h2 {
                    font-size: 2.5rem;
                    margin: 0 0 2rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                @media (max-width: 768px) {
                    .about-container {
                        padding: 4rem 1rem 1rem;
                    }

                    .about-container h2 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
        <section id={NavTarget::Contact.anchor()} class="contact-container">
            <h2>{"Contact"}</h2>
            <p>{"Questions we haven't answered yet? Ask TeleQuest in your Telegram group, or reach the team there directly."}</p>
            <style>
                {r#"
                .contact-container {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 4rem 2rem 6rem;
                    color: #999;
                }

                .contact-container h2 {
                    color: #ffffff;
                    font-size: 2rem;
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let config = use_page_config(PageConfig::ABOUT);

    html! {
        <div class="page">
            <Nav mode={config.nav} initial={NavTarget::About} />
            <AboutSection entries={TELEQUEST_FAQ} mode={config.accordion} />
            <ContactSection />
        </div>
    }
}
