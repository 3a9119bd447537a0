use leptos::prelude::*;

use crate::components::profile_form::ProfileForm;
use crate::components::settings_form::SettingsForm;
use crate::theme;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <div class="space-y-12">
            <h1 class={theme::PAGE_HEADING}>"Your Health Profile"</h1>
            <div class="grid gap-8 md:grid-cols-2">
                <ProfileForm />
                <SettingsForm />
            </div>
        </div>
    }
}
