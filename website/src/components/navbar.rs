use leptos::prelude::*;
use portfolio_core::{NavMessage, NavState, SectionId};

use super::icons::{Menu, X};

#[derive(Clone, Copy)]
enum NavVariant {
    Desktop,
    Mobile,
}

impl NavVariant {
    fn class(self, active: bool) -> &'static str {
        match (self, active) {
            (NavVariant::Desktop, true) => "text-sm font-medium transition-colors text-blue-400 border-b-2 border-blue-400",
            (NavVariant::Desktop, false) => "text-sm font-medium transition-colors text-slate-400 hover:text-white",
            (NavVariant::Mobile, true) => "text-left text-sm font-medium transition-colors text-blue-400",
            (NavVariant::Mobile, false) => "text-left text-sm font-medium transition-colors text-slate-400 hover:text-white",
        }
    }
}

#[component]
fn NavButton(
    section: SectionId,
    variant: NavVariant,
    nav: ReadSignal<NavState>,
    on_message: Callback<NavMessage>,
) -> impl IntoView {
    view! {
        <button
            class=move || variant.class(nav.get().is_active(section))
            on:click=move |_| on_message.run(NavMessage::Navigate(section))
        >
            {section.label()}
        </button>
    }
}

#[component]
pub fn Navbar(
    brand: String,
    nav: ReadSignal<NavState>,
    on_message: Callback<NavMessage>,
) -> impl IntoView {
    let menu_open = move || nav.get().menu_open;

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-slate-950/80 backdrop-blur-md border-b border-slate-800">
            <div class="max-w-7xl mx-auto px-6 h-16 flex items-center justify-between">
                <a href="#" class="font-bold text-white text-xl tracking-tight hover:text-blue-400 transition-colors">
                    {brand}
                </a>

                // Desktop Navigation
                <nav class="hidden md:flex items-center space-x-8">
                    {SectionId::ALL.into_iter().map(|section| {
                        view! {
                            <NavButton section=section variant=NavVariant::Desktop nav=nav on_message=on_message />
                        }
                    }).collect_view()}
                </nav>

                // Mobile Menu Button
                <button
                    class="md:hidden text-slate-300 hover:text-white"
                    aria-label="Toggle navigation"
                    on:click=move |_| on_message.run(NavMessage::ToggleMenu)
                >
                    {move || {
                        if menu_open() {
                            view! { <X class="w-6 h-6" /> }.into_any()
                        } else {
                            view! { <Menu class="w-6 h-6" /> }.into_any()
                        }
                    }}
                </button>
            </div>

            // Mobile Navigation
            <Show when=menu_open>
                <div class="md:hidden bg-slate-950 border-b border-slate-800">
                    <nav class="max-w-7xl mx-auto px-6 py-4 flex flex-col space-y-4">
                        {SectionId::ALL.into_iter().map(|section| {
                            view! {
                                <NavButton section=section variant=NavVariant::Mobile nav=nav on_message=on_message />
                            }
                        }).collect_view()}
                    </nav>
                </div>
            </Show>
        </header>
    }
}
