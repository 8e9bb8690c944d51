use dioxus::prelude::*;
use nanobanana_core::{
    content::{CALL_TO_ACTION, LOGO, NAV_LINKS, PRODUCT_NAME},
    MenuState,
};

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

/// Sticky top bar with a collapsible menu on narrow screens
#[component]
pub fn Header() -> Element {
    let mut menu = use_signal(MenuState::default);

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }

        header {
            id: "header",
            div {
                class: "header-bar",
                div {
                    class: "brand",
                    div { class: "logo", "{LOGO}" }
                    span { class: "name", "{PRODUCT_NAME}" }
                }

                nav {
                    class: "nav-desktop",
                    for link in NAV_LINKS {
                        a { key: "{link.href}", href: link.href, "{link.label}" }
                    }
                }

                button { class: "button primary nav-desktop", "{CALL_TO_ACTION}" }

                button {
                    class: "menu-toggle",
                    aria_label: "Toggle menu",
                    onclick: move |_| menu.write().toggle(),
                    if menu().open { "✕" } else { "☰" }
                }
            }

            if menu().open {
                nav {
                    class: "nav-mobile",
                    for link in NAV_LINKS {
                        a {
                            key: "{link.href}",
                            href: link.href,
                            onclick: move |_| menu.write().close(),
                            "{link.label}"
                        }
                    }
                    button { class: "button primary wide", "{CALL_TO_ACTION}" }
                }
            }
        }
    }
}
