use dioxus::prelude::*;
use nanobanana_core::content::TESTIMONIALS;

const TESTIMONIALS_CSS: Asset = asset!("/assets/styling/testimonials.css");

#[component]
pub fn Testimonials() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: TESTIMONIALS_CSS }

        section {
            id: "testimonials",
            div {
                class: "section-inner wide",
                h2 { "Loved by Users Worldwide" }
                p {
                    class: "subtitle",
                    "Join thousands of professionals who trust NanoBanana for their image processing needs"
                }

                div {
                    class: "testimonial-grid",
                    for testimonial in TESTIMONIALS {
                        div {
                            key: "{testimonial.id}",
                            class: "testimonial",
                            div {
                                class: "author",
                                span { class: "avatar", "{testimonial.avatar}" }
                                div {
                                    p { class: "author-name", "{testimonial.name}" }
                                    p { class: "author-role", "{testimonial.role}" }
                                }
                            }
                            div { class: "stars", "{testimonial.stars()}" }
                            p { class: "quote", "\"{testimonial.content}\"" }
                        }
                    }
                }
            }
        }
    }
}
