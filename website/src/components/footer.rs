use leptos::prelude::*;
use portfolio_core::{Footer as FooterContent, SocialLinks as Links};

use super::social_links::SocialLinks;

/// Current year from the visitor's clock
fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer(footer: FooterContent, links: Links, mailto: String) -> impl IntoView {
    let copyright = footer.copyright(current_year());

    view! {
        <footer class="border-t border-slate-900 bg-slate-950 py-12">
            <div class="max-w-7xl mx-auto px-6 flex flex-col items-center text-slate-500 text-sm">
                <div class="mb-6">
                    <SocialLinks links=links mailto=mailto icon_class="w-5 h-5" />
                </div>
                <p>{copyright}</p>
            </div>
        </footer>
    }
}
