use leptos::prelude::*;
use portfolio_core::SocialLinks as Links;

use super::icons::{Github, Linkedin, Mail};

/// GitHub, LinkedIn and mail icons in a row
#[component]
pub fn SocialLinks(
    links: Links,
    mailto: String,
    #[prop(default = "w-6 h-6")] icon_class: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex gap-4">
            <a
                href=links.github
                target="_blank"
                rel="noopener noreferrer"
                aria-label="GitHub"
                class="text-slate-400 hover:text-blue-400 transition-colors"
            >
                <Github class=icon_class />
            </a>
            <a
                href=links.linkedin
                target="_blank"
                rel="noopener noreferrer"
                aria-label="LinkedIn"
                class="text-slate-400 hover:text-blue-400 transition-colors"
            >
                <Linkedin class=icon_class />
            </a>
            <a
                href=mailto
                aria-label="Email"
                class="text-slate-400 hover:text-blue-400 transition-colors"
            >
                <Mail class=icon_class />
            </a>
        </div>
    }
}
