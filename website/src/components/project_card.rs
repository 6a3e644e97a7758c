use leptos::prelude::*;
use portfolio_core::Project;

use super::tag_list::TagList;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        technologies,
        image,
    } = project;

    let screenshot = image.map(|src| {
        let alt = title.clone();
        view! {
            <img src=src alt=alt class="w-full h-48 object-cover border-b border-slate-800" />
        }
    });

    view! {
        <div class="bg-slate-900/50 border border-slate-800 rounded-2xl overflow-hidden w-full max-w-md hover:border-slate-700 transition-colors">
            {screenshot}
            <div class="p-6">
                <h3 class="text-xl font-bold text-white mb-2">{title}</h3>
                {description.map(|text| {
                    view! { <p class="text-slate-400 leading-relaxed text-justify mb-4">{text}</p> }
                })}
                <TagList items=technologies />
            </div>
        </div>
    }
}
