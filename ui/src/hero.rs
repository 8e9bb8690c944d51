use dioxus::prelude::*;
use nanobanana_core::content::HERO;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section {
            id: "hero",
            div {
                class: "hero-inner",
                h1 {
                    "{HERO.headline} "
                    span { class: "highlight", "{HERO.highlight}" }
                }
                p { class: "tagline", "{HERO.tagline}" }

                div {
                    class: "hero-actions",
                    a { class: "button primary", href: "#features", "{HERO.primary_action}" }
                    a { class: "button outline", href: "#showcase", "{HERO.secondary_action}" }
                }
            }

            // Decorative blurs on either side
            div { class: "bamboo left" }
            div { class: "bamboo right" }
        }
    }
}
