use leptos::prelude::*;
use portfolio_core::PortfolioContent;
use portfolio_website::App;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("error initializing logger");

    let content = PortfolioContent::builtin().expect("bundled portfolio content is invalid");
    log::info!("Rendering portfolio for {}", content.profile.name);

    mount_to_body(move || view! { <App content=content /> });
}
