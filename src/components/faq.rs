use std::collections::BTreeSet;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::AccordionMode;
use crate::scroll::{self, faq_anchor, parse_faq_anchor};

/// Delay before scrolling to a linked entry, so its answer is rendered first.
const LINK_SCROLL_DELAY_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const TELEQUEST_FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What is TeleQuest?",
        answer: "TeleQuest is a bot that answers the questions your group keeps asking, so members get a reply without waiting for an admin.",
    },
    FaqEntry {
        question: "Where can I use it?",
        answer: "TeleQuest is available exclusively through Telegram and is built for large groups.",
    },
    FaqEntry {
        question: "Does every member get the same answer?",
        answer: "Every member gets an answer written for their question, even when it has been asked a hundred times before.",
    },
    FaqEntry {
        question: "How do I get started?",
        answer: "Add TeleQuest to your Telegram group and ask your first question.",
    },
];

/// Open/closed state of every entry in an FAQ list, keyed by entry index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accordion {
    mode: AccordionMode,
    open: BTreeSet<usize>,
}

impl Accordion {
    pub fn new(mode: AccordionMode) -> Self {
        Self { mode, open: BTreeSet::new() }
    }

    /// Flips entry `index`. In single-open mode opening an entry closes
    /// whichever entry was open before.
    pub fn toggle(&mut self, index: usize) {
        if self.open.remove(&index) {
            return;
        }
        if self.mode == AccordionMode::SingleOpen {
            self.open.clear();
        }
        self.open.insert(index);
    }

    /// Opens entry `index`, leaving it open if it already is.
    pub fn open(&mut self, index: usize) {
        if !self.is_open(index) {
            self.toggle(index);
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

pub enum AccordionAction {
    Toggle(usize),
    Open(usize),
    /// Closes everything and switches to the given policy.
    Reset(AccordionMode),
}

impl Reducible for Accordion {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AccordionAction::Toggle(index) => next.toggle(index),
            AccordionAction::Open(index) => next.open(index),
            AccordionAction::Reset(mode) => next = Accordion::new(mode),
        }
        debug!("FAQ accordion now has {} open", next.open_count());
        next.into()
    }
}

/// Entry named by the current `#faq-<n>` location hash, if it exists.
fn linked_entry(count: usize) -> Option<usize> {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .as_deref()
        .and_then(parse_faq_anchor)
        .filter(|index| *index < count)
}

pub fn answer_hint(open: bool) -> &'static str {
    if open {
        " - Hide Answer"
    } else {
        " + Show Answer"
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: &'static [FaqEntry],
    pub mode: AccordionMode,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let accordion = use_reducer(|| Accordion::new(props.mode));

    // Start over whenever the policy changes. A `#faq-<n>` link, on load or
    // later, opens that entry and brings it into view.
    {
        let accordion = accordion.clone();
        let count = props.entries.len();
        use_effect_with_deps(move |mode| {
            debug!("FAQ accordion in {} mode", mode);
            accordion.dispatch(AccordionAction::Reset(*mode));

            let open_linked = move || {
                if let Some(index) = linked_entry(count) {
                    debug!("Opening FAQ entry {} from link", index);
                    accordion.dispatch(AccordionAction::Open(index));
                    Timeout::new(LINK_SCROLL_DELAY_MS, move || {
                        scroll::scroll_to_anchor(&faq_anchor(index));
                    })
                    .forget();
                }
            };
            open_linked();

            let window = web_sys::window();
            let hash_callback = Closure::wrap(Box::new(open_linked) as Box<dyn FnMut()>);
            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback(
                    "hashchange",
                    hash_callback.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "hashchange",
                        hash_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, props.mode);
    }

    html! {
        <div class="faq-list">
            {
                for props.entries.iter().enumerate().map(|(index, entry)| {
                    let is_open = accordion.is_open(index);
                    let toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            accordion.dispatch(AccordionAction::Toggle(index));
                        })
                    };
                    html! {
                        <div id={faq_anchor(index)} class={classes!("faq-item", is_open.then(|| "open"))}>
                            <button class="faq-question" onclick={toggle}>
                                <span class="question-text">{entry.question}</span>
                                <span class="toggle-icon">{answer_hint(is_open)}</span>
                            </button>
                            {
                                if is_open {
                                    html! { <p class="faq-answer">{entry.answer}</p> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }
                })
            }
            <style>
                {r#"
                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                }

                .faq-item {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }

                .faq-item:hover,
                .faq-item.open {
                    border-color: rgba(30, 144, 255, 0.3);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.2rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .faq-question:hover {
                    color: #7EB2FF;
                }

                .toggle-icon {
                    font-size: 0.9rem;
                    color: #7EB2FF;
                }

                .faq-answer {
                    color: #999;
                    line-height: 1.6;
                    padding: 0 1.5rem 1.5rem;
                    margin: 0;
                }

                @media (max-width: 768px) {
                    .faq-question {
                        font-size: 1.1rem;
                        padding: 1rem;
                    }

                    .faq-answer {
                        padding: 0 1rem 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[FaqEntry] = &[
        FaqEntry { question: "Question 1", answer: "Answer to question 1." },
        FaqEntry { question: "Question 2", answer: "Answer to question 2." },
    ];

    fn visible_answers(accordion: &Accordion, entries: &[FaqEntry]) -> Vec<&'static str> {
        entries
            .iter()
            .enumerate()
            .filter(|(index, _)| accordion.is_open(*index))
            .map(|(_, entry)| entry.answer)
            .collect()
    }

    #[test]
    fn everything_starts_closed() {
        for mode in [AccordionMode::MultiOpen, AccordionMode::SingleOpen] {
            let accordion = Accordion::new(mode);
            assert_eq!(accordion.open_count(), 0);
            assert!(visible_answers(&accordion, TELEQUEST_FAQ).is_empty());
        }
    }

    #[test]
    fn toggling_twice_restores_state() {
        for mode in [AccordionMode::MultiOpen, AccordionMode::SingleOpen] {
            let mut accordion = Accordion::new(mode);
            accordion.toggle(1);
            let before = accordion.clone();
            accordion.toggle(0);
            accordion.toggle(0);
            assert_eq!(accordion.is_open(0), before.is_open(0));
            if mode == AccordionMode::MultiOpen {
                assert_eq!(accordion, before);
            }
        }
    }

    #[test]
    fn multi_open_leaves_other_entries_alone() {
        let mut accordion = Accordion::new(AccordionMode::MultiOpen);
        accordion.toggle(0);
        accordion.toggle(2);
        accordion.toggle(3);
        accordion.toggle(3);
        assert!(accordion.is_open(0));
        assert!(!accordion.is_open(1));
        assert!(accordion.is_open(2));
        assert!(!accordion.is_open(3));
        assert_eq!(accordion.open_count(), 2);
    }

    #[test]
    fn single_open_closes_the_previous_entry() {
        let mut accordion = Accordion::new(AccordionMode::SingleOpen);
        accordion.toggle(0);
        accordion.toggle(1);
        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(1));
        assert_eq!(accordion.open_count(), 1);

        accordion.toggle(1);
        assert_eq!(accordion.open_count(), 0);
    }

    #[test]
    fn question_one_shows_and_hides_its_answer() {
        let mut accordion = Accordion::new(AccordionMode::MultiOpen);

        accordion.toggle(0);
        assert_eq!(visible_answers(&accordion, SAMPLE), ["Answer to question 1."]);
        assert!(!accordion.is_open(1));

        accordion.toggle(0);
        assert!(visible_answers(&accordion, SAMPLE).is_empty());
    }

    #[test]
    fn opening_a_linked_entry_never_closes_it() {
        let mut accordion = Accordion::new(AccordionMode::MultiOpen);
        accordion.toggle(0);
        accordion.open(2);
        accordion.open(2);
        assert!(accordion.is_open(0));
        assert!(accordion.is_open(2));

        let mut single = Accordion::new(AccordionMode::SingleOpen);
        single.toggle(0);
        single.open(1);
        single.open(1);
        assert!(!single.is_open(0));
        assert!(single.is_open(1));
    }

    #[test]
    fn link_opens_entry_after_reset() {
        let state = Rc::new(Accordion::new(AccordionMode::MultiOpen))
            .reduce(AccordionAction::Toggle(0))
            .reduce(AccordionAction::Reset(AccordionMode::SingleOpen))
            .reduce(AccordionAction::Open(3));
        assert!(!state.is_open(0));
        assert!(state.is_open(3));
        assert_eq!(state.open_count(), 1);
    }

    #[test]
    fn later_link_keeps_entries_opened_by_hand() {
        let state = Rc::new(Accordion::new(AccordionMode::MultiOpen))
            .reduce(AccordionAction::Toggle(1))
            .reduce(AccordionAction::Open(2));
        assert!(state.is_open(1));
        assert!(state.is_open(2));
    }

    #[test]
    fn hint_follows_open_state() {
        assert_eq!(answer_hint(false), " + Show Answer");
        assert_eq!(answer_hint(true), " - Hide Answer");
    }

    #[test]
    fn faq_questions_are_unique() {
        let mut questions: Vec<_> = TELEQUEST_FAQ.iter().map(|e| e.question).collect();
        questions.sort_unstable();
        questions.dedup();
        assert_eq!(questions.len(), TELEQUEST_FAQ.len());
    }
}
