//! This crate contains all shared UI for the workspace.

mod header;
pub use header::Header;

mod hero;
pub use hero::Hero;

mod uploader;
pub use uploader::ImageUploader;

mod showcase;
pub use showcase::CaseShowcase;

mod testimonials;
pub use testimonials::Testimonials;

mod faq;
pub use faq::Faq;

mod footer;
pub use footer::Footer;

use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

/// The whole landing page, top to bottom
#[component]
pub fn LandingPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "page",
            Header {}
            Hero {}
            ImageUploader {}
            CaseShowcase {}
            Testimonials {}
            Faq {}
            Footer {}
        }
    }
}
