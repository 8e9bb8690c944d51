use dioxus::prelude::*;
use nanobanana_core::content::SHOWCASE;

const SHOWCASE_CSS: Asset = asset!("/assets/styling/showcase.css");

#[component]
pub fn CaseShowcase() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: SHOWCASE_CSS }

        section {
            id: "showcase",
            div {
                class: "section-inner wide",
                h2 { "Real-World Applications" }
                p { class: "subtitle", "See how businesses use NanoBanana to streamline their workflows" }

                div {
                    class: "case-grid",
                    for case in SHOWCASE {
                        div {
                            key: "{case.id}",
                            class: "case-card",
                            div {
                                class: "case-image",
                                img { src: case.image, alt: case.title }
                                div { class: "shade" }
                            }
                            div {
                                class: "case-body",
                                span { class: "badge", "{case.category}" }
                                h3 { "{case.title}" }
                                p { "{case.description}" }
                                button { class: "link-button", "Learn More →" }
                            }
                        }
                    }
                }
            }
        }
    }
}
