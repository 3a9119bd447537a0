use leptos::prelude::*;

/// Icons used across the page, drawn as inline 24x24 stroke SVGs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Upload,
    Search,
    Zap,
    ThumbsUp,
    Menu,
    Facebook,
    Twitter,
    Instagram,
}

impl IconKind {
    /// Path data for each shape making up the icon.
    fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::Upload => &[
                "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
                "M17 8l-5-5-5 5",
                "M12 3v12",
            ],
            IconKind::Search => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "M21 21l-4.3-4.3"],
            IconKind::Zap => &["M13 2L3 14h9l-1 8 10-12h-9l1-8z"],
            IconKind::ThumbsUp => &[
                "M7 10v12",
                "M15 5.88L14 10h5.83a2 2 0 0 1 1.92 2.56l-2.33 8A2 2 0 0 1 17.5 22H4a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2h2.76a2 2 0 0 0 1.79-1.11L12 2a3.13 3.13 0 0 1 3 3.88z",
            ],
            IconKind::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            IconKind::Facebook => &["M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"],
            IconKind::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            IconKind::Instagram => &[
                "M17 2H7a5 5 0 0 0-5 5v10a5 5 0 0 0 5 5h10a5 5 0 0 0 5-5V7a5 5 0 0 0-5-5z",
                "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
                "M17.5 6.5h.01",
            ],
        }
    }
}

#[component]
pub fn Icon(
    kind: IconKind,
    #[prop(default = "h-6 w-6")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {kind.paths().iter().map(|d| view! { <path d={*d} /> }).collect_view()}
        </svg>
    }
}
