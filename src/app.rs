use leptos::logging::log;
use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::home::HomePage;
use crate::pages::how_it_works::HowItWorksPage;
use crate::pages::profile::ProfilePage;
use crate::section::Section;
use crate::theme::apply_title;

/// Page body for a section. Exactly one view per section.
fn section_view(section: Section) -> AnyView {
    match section {
        Section::Home => view! { <HomePage /> }.into_any(),
        Section::Profile => view! { <ProfilePage /> }.into_any(),
        Section::HowItWorks => view! { <HowItWorksPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (active, set_active) = signal(Section::default());
    let (menu_open, set_menu_open) = signal(false);

    // Keep the document title in sync with the active tab
    Effect::new(move |_| {
        let section = active.get();
        log!("section: {}", section.as_str());
        apply_title(section);
    });

    view! {
        <div class="min-h-screen flex flex-col bg-gradient-to-br from-green-50 to-blue-50">
            <Header
                active=active
                set_active=set_active
                menu_open=menu_open
                set_menu_open=set_menu_open
            />
            <main class="flex-grow container mx-auto px-4 py-8">
                {move || section_view(active.get())}
            </main>
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADINGS: [(Section, &str); 3] = [
        (Section::Home, "Make Healthier Choices"),
        (Section::Profile, "Your Health Profile"),
        (Section::HowItWorks, ">How It Works</h1>"),
    ];

    fn render(section: Section) -> String {
        let owner = Owner::new();
        owner.with(|| section_view(section).to_html())
    }

    #[test]
    fn test_each_section_renders_only_its_view() {
        for (section, heading) in HEADINGS {
            let html = render(section);
            for (other, other_heading) in HEADINGS {
                assert_eq!(
                    html.contains(other_heading),
                    other == section,
                    "rendering {:?}: heading of {:?} present = {}",
                    section,
                    other,
                    html.contains(other_heading)
                );
            }
            assert!(html.contains(heading));
        }
    }

    #[test]
    fn test_profile_view_has_both_forms() {
        let html = render(Section::Profile);
        assert!(html.contains("Health Profile"));
        assert!(html.contains("App Settings"));
        assert!(html.contains("Save Profile"));
        assert!(html.contains("Save Settings"));
    }

    #[test]
    fn test_home_view_shows_literal_analysis() {
        let html = render(Section::Home);
        assert!(html.contains("Ingredients identified: 12"));
        assert!(html.contains("Nutritional value: Moderate"));
        assert!(html.contains("Health score: 7.5/10"));
        assert!(html.contains("Analyze Product"));
    }
}
