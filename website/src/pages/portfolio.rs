use leptos::prelude::*;
use portfolio_core::{
    mount, About, Contact, NavMessage, NavState, PortfolioContent, Profile,
    ProjectShowcase, SectionId, Skills, SocialLinks as Links,
};

use crate::components::footer::Footer;
use crate::components::icons::{ExternalLink, Linkedin, Mail};
use crate::components::navbar::Navbar;
use crate::components::project_card::ProjectCard;
use crate::components::section_heading::SectionHeading;
use crate::components::social_links::SocialLinks;
use crate::components::tag_list::TagList;
use crate::viewport::BrowserViewport;

/// The whole page: fixed nav bar over five stacked sections and a footer.
///
/// Owns the nav state. A window scroll listener is attached for as long as
/// this component is mounted.
#[component]
pub fn Portfolio(content: PortfolioContent) -> impl IntoView {
    let nav = RwSignal::new(NavState::new());
    let on_message = Callback::new(move |msg: NavMessage| {
        // only notify the view when the nav state actually changed
        nav.maybe_update(|state| portfolio_core::update(state, msg, &BrowserViewport));
    });

    let mut subscription = mount(&BrowserViewport, move |msg| on_message.run(msg));
    on_cleanup(move || subscription.release());

    let PortfolioContent {
        profile,
        links,
        about,
        skills,
        showcases,
        contact,
        footer,
    } = content;
    let brand = profile.name.clone();
    let mailto = contact.mailto();

    view! {
        <Navbar brand=brand nav=nav.read_only() on_message=on_message />
        <main>
            <Hero profile=profile links=links.clone() mailto=mailto.clone() on_message=on_message />
            <AboutSection about=about />
            <SkillsSection skills=skills />
            <ProjectsSection showcases=showcases />
            <ContactSection contact=contact links=links.clone() />
        </main>
        <Footer footer=footer links=links mailto=mailto />
    }
}

#[component]
fn Hero(
    profile: Profile,
    links: Links,
    mailto: String,
    on_message: Callback<NavMessage>,
) -> impl IntoView {
    let photo = profile.photo.map(|src| {
        let alt = profile.name.clone();
        view! {
            <div class="md:w-1/2 flex justify-center">
                <div class="w-64 h-64 md:w-80 md:h-80 rounded-full overflow-hidden border-4 border-blue-500 shadow-lg shadow-blue-500/20">
                    <img src=src alt=alt class="w-full h-full object-cover" />
                </div>
            </div>
        }
    });

    view! {
        <section id=SectionId::Home.as_str() class="pt-32 pb-16 md:pt-40 md:pb-20 px-6 max-w-6xl mx-auto relative">
            <div class="absolute top-0 left-1/2 -translate-x-1/2 w-[800px] h-[500px] bg-blue-600/10 blur-[120px] rounded-full pointer-events-none"></div>

            <div class="relative z-10 flex flex-col md:flex-row items-center gap-8 md:gap-16">
                <div class="md:w-1/2 space-y-6">
                    <h1 class="text-4xl md:text-5xl lg:text-6xl font-black text-white tracking-tight">
                        "Hi, I'm "
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-purple-400">
                            {profile.name}
                        </span>
                    </h1>
                    <h2 class="text-2xl md:text-3xl font-medium text-slate-400">{profile.role}</h2>
                    <p class="text-lg text-slate-400 font-light leading-relaxed">{profile.tagline}</p>
                    <div class="flex gap-4">
                        <button
                            class="px-8 py-3 bg-white text-black font-bold rounded-full hover:bg-slate-200 transition-colors"
                            on:click=move |_| on_message.run(NavMessage::Navigate(SectionId::Projects))
                        >
                            "View Projects"
                        </button>
                    </div>
                    <div class="pt-4">
                        <SocialLinks links=links mailto=mailto />
                    </div>
                </div>
                {photo}
            </div>
        </section>
    }
}

#[component]
fn AboutSection(about: About) -> impl IntoView {
    view! {
        <section id=SectionId::About.as_str() class="py-16 md:py-24 bg-slate-900/30">
            <div class="max-w-4xl mx-auto px-6">
                <SectionHeading text=about.heading />
                <p class="text-lg text-slate-300 text-center leading-relaxed">{about.body}</p>
            </div>
        </section>
    }
}

#[component]
fn SkillsSection(skills: Skills) -> impl IntoView {
    view! {
        <section id=SectionId::Skills.as_str() class="py-16 md:py-24 px-6 max-w-6xl mx-auto">
            <SectionHeading text=skills.heading />
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {skills.groups.into_iter().map(|group| {
                    view! {
                        <div class="bg-slate-900/50 border border-slate-800 p-6 rounded-2xl hover:border-slate-700 transition-colors">
                            <h3 class="text-xl font-bold text-white mb-4">{group.title}</h3>
                            <TagList items=group.items />
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection(showcases: Vec<ProjectShowcase>) -> impl IntoView {
    view! {
        <section id=SectionId::Projects.as_str() class="py-16 md:py-24 bg-slate-900/30">
            <div class="max-w-6xl mx-auto px-6 space-y-20">
                {showcases.into_iter().map(|showcase| {
                    view! {
                        <div>
                            <SectionHeading text=showcase.heading />
                            <div class="flex flex-col md:flex-row flex-wrap gap-8 items-stretch justify-center">
                                {showcase.projects.into_iter().map(|project| {
                                    view! { <ProjectCard project=project /> }
                                }).collect_view()}
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ContactSection(contact: Contact, links: Links) -> impl IntoView {
    let mailto = contact.mailto();

    view! {
        <section id=SectionId::Contact.as_str() class="py-16 md:py-24 px-6 max-w-3xl mx-auto">
            <SectionHeading text=contact.heading />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                <div class="bg-slate-900/50 border border-slate-800 rounded-2xl p-6 flex flex-col items-center text-center">
                    <Mail class="w-8 h-8 text-blue-400 mb-4" />
                    <h3 class="text-xl font-semibold text-white mb-2">"Email"</h3>
                    <p class="text-slate-400">{contact.email}</p>
                    <a href=mailto class="text-blue-400 hover:underline mt-2">
                        "Send an email"
                    </a>
                </div>
                <div class="bg-slate-900/50 border border-slate-800 rounded-2xl p-6 flex flex-col items-center text-center">
                    <Linkedin class="w-8 h-8 text-blue-400 mb-4" />
                    <h3 class="text-xl font-semibold text-white mb-2">"LinkedIn"</h3>
                    <p class="text-slate-400">{links.linkedin_display}</p>
                    <a
                        href=links.linkedin
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-blue-400 hover:underline mt-2 inline-flex items-center"
                    >
                        "Connect with me"
                        <ExternalLink class="w-4 h-4 ml-1" />
                    </a>
                </div>
            </div>
        </section>
    }
}
