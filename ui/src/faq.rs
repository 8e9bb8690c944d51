use dioxus::prelude::*;
use nanobanana_core::{content::FAQS, FaqAccordion};

const FAQ_CSS: Asset = asset!("/assets/styling/faq.css");

/// Accordion of questions, one answer visible at a time
#[component]
pub fn Faq() -> Element {
    let mut accordion = use_signal(FaqAccordion::default);

    rsx! {
        document::Link { rel: "stylesheet", href: FAQ_CSS }

        section {
            id: "faq",
            div {
                class: "section-inner narrow",
                h2 { "Frequently Asked Questions" }
                p { class: "subtitle", "Everything you need to know about NanoBanana" }

                div {
                    class: "faq-list",
                    for faq in FAQS {
                        div {
                            key: "{faq.id}",
                            class: "faq-item",
                            button {
                                class: "faq-question",
                                onclick: move |_| accordion.write().toggle(faq.id),
                                span { "{faq.question}" }
                                span {
                                    class: "faq-icon",
                                    if accordion().is_open(faq.id) { "−" } else { "+" }
                                }
                            }
                            if accordion().is_open(faq.id) {
                                div {
                                    class: "faq-answer",
                                    p { "{faq.answer}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
