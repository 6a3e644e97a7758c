pub mod components;
pub mod pages;
pub mod viewport;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use pages::portfolio::Portfolio;
use portfolio_core::PortfolioContent;

#[component]
pub fn App(content: PortfolioContent) -> impl IntoView {
    provide_meta_context();

    let title = format!("{} | {}", content.profile.name, content.profile.role);
    let description = content.profile.tagline.clone();

    view! {
        <Title text=title />
        <Meta name="description" content=description />
        <div class="min-h-screen bg-slate-950 text-slate-200 selection:bg-blue-500/30 font-sans">
            <Portfolio content=content />
        </div>
    }
}
