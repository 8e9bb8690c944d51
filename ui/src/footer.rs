use dioxus::prelude::*;
use nanobanana_core::content::{
    COPYRIGHT, FOOTER_BLURB, FOOTER_COLUMNS, LOGO, PRODUCT_NAME, SOCIAL_LINKS,
};

const FOOTER_CSS: Asset = asset!("/assets/styling/footer.css");

#[component]
pub fn Footer() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: FOOTER_CSS }

        footer {
            id: "footer",
            div {
                class: "section-inner wide",
                div {
                    class: "footer-grid",
                    div {
                        div {
                            class: "brand",
                            div { class: "logo", "{LOGO}" }
                            span { class: "name", "{PRODUCT_NAME}" }
                        }
                        p { class: "blurb", "{FOOTER_BLURB}" }
                    }

                    for column in FOOTER_COLUMNS {
                        div {
                            key: "{column.heading}",
                            h4 { "{column.heading}" }
                            ul {
                                for link in column.links {
                                    li { key: "{link}", a { href: "#", "{link}" } }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "footer-bottom",
                    p { "{COPYRIGHT}" }
                    div {
                        class: "social",
                        for social in SOCIAL_LINKS {
                            a { key: "{social}", href: "#", "{social}" }
                        }
                    }
                }
            }
        }
    }
}
