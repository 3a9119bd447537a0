mod app;
mod components;
mod content;
mod pages;
mod section;
mod theme;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::logging::log!("HealthyChoices: mounting");
    leptos::mount::mount_to_body(App);
}
