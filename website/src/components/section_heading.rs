use leptos::prelude::*;

#[component]
pub fn SectionHeading(text: String) -> impl IntoView {
    view! {
        <h2 class="text-3xl md:text-4xl font-bold text-white mb-12 text-center">{text}</h2>
    }
}
