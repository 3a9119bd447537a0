use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::section::{
    select_from_mobile_menu, select_section, toggle_mobile_menu, Section, NAV_ITEMS,
};
use crate::theme::{self, nav_button_class};

#[component]
pub fn Header(
    active: ReadSignal<Section>,
    set_active: WriteSignal<Section>,
    menu_open: ReadSignal<bool>,
    set_menu_open: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <header class="sticky top-0 bg-white bg-opacity-90 backdrop-blur-md z-10 shadow-md">
            <nav class="container mx-auto px-4 py-4">
                <div class="flex justify-between items-center">
                    <div class="text-2xl font-bold text-green-600">{theme::APP_NAME}</div>

                    // Desktop nav
                    <div class="hidden md:flex space-x-6">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|item| {
                                let section = item.section;
                                let is_active = move || active.get() == section;
                                view! {
                                    <button
                                        type="button"
                                        class=move || nav_button_class(is_active())
                                        aria-current=move || is_active().then_some("page")
                                        on:click=move |_| select_section(set_active, section)
                                    >
                                        {item.name}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    // Mobile menu button
                    <button
                        type="button"
                        class="md:hidden p-2 rounded-md text-white bg-green-600 hover:bg-green-700"
                        aria-label="Toggle navigation"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| toggle_mobile_menu(set_menu_open)
                    >
                        <Icon kind=IconKind::Menu />
                    </button>
                </div>
            </nav>

            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-white py-2">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| {
                            let section = item.section;
                            view! {
                                <button
                                    type="button"
                                    class="block w-full text-left text-lg py-2 px-4 text-gray-700 hover:bg-gray-100"
                                    on:click=move |_| {
                                        select_from_mobile_menu(set_active, set_menu_open, section)
                                    }
                                >
                                    {item.name}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </header>
    }
}
