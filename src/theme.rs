use crate::section::Section;

pub const APP_NAME: &str = "HealthyChoices";

pub const CARD: &str = "rounded-lg border bg-white shadow-lg hover:shadow-xl transition-shadow duration-300";
pub const CARD_TITLE: &str = "text-2xl font-semibold text-gray-800";
pub const PAGE_HEADING: &str = "text-4xl font-bold mb-8 text-gray-800";
pub const FIELD_LABEL: &str = "text-lg text-gray-700";
pub const INPUT: &str = "flex h-10 w-full rounded-md border border-gray-300 bg-white px-3 py-2 text-lg \
                         focus:outline-none focus:ring-2 focus:ring-green-600";
pub const PRIMARY_BUTTON: &str = "inline-flex items-center justify-center rounded-md px-6 py-3 text-lg font-medium \
                                  text-white bg-green-600 hover:bg-green-700 transition-colors";
pub const PRIMARY_BUTTON_FULL: &str = "inline-flex w-full items-center justify-center rounded-md px-4 py-2 \
                                       font-medium text-white bg-green-600 hover:bg-green-700 transition-colors";

const NAV_BUTTON_BASE: &str = "inline-flex items-center rounded-md px-4 py-2 text-lg transition-colors";

/// Classes for a desktop nav button; the active entry gets the filled variant.
pub fn nav_button_class(is_active: bool) -> String {
    if is_active {
        format!("{} bg-gray-900 hover:bg-gray-800 font-semibold text-green-600", NAV_BUTTON_BASE)
    } else {
        format!("{} text-gray-600 hover:text-green-600 hover:bg-gray-100", NAV_BUTTON_BASE)
    }
}

pub fn page_title(section: Section) -> String {
    format!("{} | {}", section.label(), APP_NAME)
}

/// Write the page title for the active section to `document.title`.
pub fn apply_title(section: Section) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(&page_title(section));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_nav_is_highlighted() {
        assert!(nav_button_class(true).contains("text-green-600"));
        assert!(!nav_button_class(true).contains("text-gray-600"));
        assert!(nav_button_class(true)
            .split_whitespace()
            .any(|class| class == "bg-gray-900"));
        assert!(!nav_button_class(false).contains("bg-gray-900"));
        assert!(nav_button_class(false).contains("text-gray-600"));
        assert!(nav_button_class(false).contains("hover:text-green-600"));
        assert!(!nav_button_class(false)
            .split_whitespace()
            .any(|class| class == "text-green-600"));
    }

    #[test]
    fn test_page_title() {
        assert_eq!(page_title(Section::Home), "Home | HealthyChoices");
        assert_eq!(page_title(Section::HowItWorks), "How It Works | HealthyChoices");
    }
}
