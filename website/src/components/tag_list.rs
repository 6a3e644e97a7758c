use leptos::prelude::*;

/// One pill per entry, in input order
#[component]
pub fn TagList(items: Vec<String>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {items.into_iter().map(|item| {
                view! {
                    <span class="rounded-full px-3 py-1 text-sm bg-slate-800 text-slate-300 border border-slate-700">
                        {item}
                    </span>
                }
            }).collect_view()}
        </div>
    }
}
