use leptos::prelude::*;

use crate::theme;

/// Card container. `class` replaces the default card styling when given.
#[component]
pub fn Card(#[prop(optional)] class: Option<&'static str>, children: Children) -> impl IntoView {
    view! {
        <div class={class.unwrap_or(theme::CARD)}>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <div class="flex flex-col space-y-1.5 p-6">{children()}</div> }
}

#[component]
pub fn CardTitle(
    #[prop(default = theme::CARD_TITLE)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! { <h3 class=class>{children()}</h3> }
}

#[component]
pub fn CardDescription(children: Children) -> impl IntoView {
    view! { <p class="text-sm text-gray-500">{children()}</p> }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="p-6 pt-0">{children()}</div> }
}

#[component]
pub fn CardFooter(children: Children) -> impl IntoView {
    view! { <div class="flex items-center p-6 pt-0">{children()}</div> }
}
