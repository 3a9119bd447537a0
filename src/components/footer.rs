use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::content::{QUICK_LINKS, SOCIAL_LINKS};
use crate::theme::APP_NAME;

const LINK_CLASS: &str = "text-gray-400 hover:text-white transition-colors duration-300";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 text-white py-12">
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <div>
                        <h3 class="text-2xl font-semibold mb-4">{APP_NAME}</h3>
                        <p class="text-gray-400">"Making healthy eating easier for everyone."</p>
                    </div>
                    <div>
                        <h3 class="text-xl font-semibold mb-4">"Quick Links"</h3>
                        <ul class="space-y-2">
                            {QUICK_LINKS
                                .into_iter()
                                .map(|name| view! { <li><a href="#" class=LINK_CLASS>{name}</a></li> })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h3 class="text-xl font-semibold mb-4">"Connect With Us"</h3>
                        <div class="flex space-x-4">
                            {SOCIAL_LINKS
                                .into_iter()
                                .map(|(name, kind)| {
                                    view! {
                                        <a href="#" class=LINK_CLASS aria-label=name>
                                            <Icon kind=kind />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div class="mt-8 pt-8 border-t border-gray-700 text-center">
                    <p class="text-gray-400">"\u{a9} 2023 HealthyChoices. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}
