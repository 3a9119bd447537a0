use leptos::prelude::*;

/// Which page body is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Profile,
    HowItWorks,
}

impl Section {
    pub const fn as_str(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Profile => "profile",
            Section::HowItWorks => "howItWorks",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Profile => "Profile",
            Section::HowItWorks => "How It Works",
        }
    }
}

/// A navigation entry shown in both the desktop and the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub section: Section,
}

impl NavItem {
    pub const fn new(section: Section) -> Self {
        NavItem { name: section.label(), section }
    }
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem::new(Section::Home),
    NavItem::new(Section::Profile),
    NavItem::new(Section::HowItWorks),
];

pub fn select_section(set_active: WriteSignal<Section>, section: Section) {
    set_active.set(section);
}

pub fn toggle_mobile_menu(set_menu_open: WriteSignal<bool>) {
    set_menu_open.update(|open| *open = !*open);
}

/// Selecting from the mobile list always closes it.
pub fn select_from_mobile_menu(
    set_active: WriteSignal<Section>,
    set_menu_open: WriteSignal<bool>,
    section: Section,
) {
    set_active.set(section);
    set_menu_open.set(false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::nav_button_class;

    fn highlighted(active: Section) -> Vec<&'static str> {
        NAV_ITEMS
            .iter()
            .filter(|item| {
                nav_button_class(item.section == active)
                    .split_whitespace()
                    .any(|class| class == "text-green-600")
            })
            .map(|item| item.name)
            .collect()
    }

    fn with_owner(f: impl FnOnce()) {
        let owner = Owner::new();
        owner.with(f);
    }

    #[test]
    fn test_default_section_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn test_nav_items_order_and_targets() {
        let names: Vec<_> = NAV_ITEMS.iter().map(|item| item.name).collect();
        assert_eq!(names, ["Home", "Profile", "How It Works"]);

        let sections: Vec<_> = NAV_ITEMS.iter().map(|item| item.section).collect();
        assert_eq!(sections, [Section::Home, Section::Profile, Section::HowItWorks]);
    }

    #[test]
    fn test_section_identifiers() {
        let ids: Vec<_> = NAV_ITEMS.iter().map(|item| item.section.as_str()).collect();
        assert_eq!(ids, ["home", "profile", "howItWorks"]);
    }

    #[test]
    fn test_select_each_section() {
        with_owner(|| {
            let (active, set_active) = signal(Section::Home);
            for item in NAV_ITEMS {
                select_section(set_active, item.section);
                assert_eq!(active.get_untracked(), item.section);
            }
        });
    }

    #[test]
    fn test_toggle_alternates_menu_state() {
        with_owner(|| {
            let (menu_open, set_menu_open) = signal(false);
            toggle_mobile_menu(set_menu_open);
            assert!(menu_open.get_untracked());
            toggle_mobile_menu(set_menu_open);
            assert!(!menu_open.get_untracked());
            toggle_mobile_menu(set_menu_open);
            assert!(menu_open.get_untracked());
        });
    }

    #[test]
    fn test_mobile_selection_always_closes_menu() {
        with_owner(|| {
            let (active, set_active) = signal(Section::Home);
            let (menu_open, set_menu_open) = signal(false);

            for initially_open in [true, false] {
                for item in NAV_ITEMS {
                    set_menu_open.set(initially_open);
                    select_from_mobile_menu(set_active, set_menu_open, item.section);
                    assert_eq!(active.get_untracked(), item.section);
                    assert!(
                        !menu_open.get_untracked(),
                        "menu should be closed after selecting {:?}",
                        item.section
                    );
                }
            }
        });
    }

    #[test]
    fn test_initial_load_then_profile_click() {
        with_owner(|| {
            let (active, set_active) = signal(Section::default());
            let (menu_open, _set_menu_open) = signal(false);
            assert_eq!(active.get_untracked(), Section::Home);
            assert!(!menu_open.get_untracked());
            assert_eq!(highlighted(active.get_untracked()), ["Home"]);

            select_section(set_active, Section::Profile);
            assert_eq!(active.get_untracked(), Section::Profile);
            assert!(!menu_open.get_untracked());
            assert_eq!(highlighted(active.get_untracked()), ["Profile"]);
        });
    }
}
