use leptos::prelude::*;

use crate::components::card::{Card, CardContent, CardFooter, CardHeader, CardTitle};
use crate::components::select_field::SelectField;
use crate::content::{DEFAULT_UNITS, LANGUAGES, UNITS};
use crate::theme;

/// Checkbox drawn as a sliding switch. The browser keeps the checked state.
#[component]
fn Switch(id: &'static str) -> impl IntoView {
    view! {
        <label for=id class="relative inline-flex cursor-pointer items-center">
            <input id=id type="checkbox" class="peer sr-only" />
            <span class="h-6 w-11 rounded-full bg-gray-200 transition-colors peer-checked:bg-green-600 \
                         after:absolute after:left-0.5 after:top-0.5 after:h-5 after:w-5 after:rounded-full \
                         after:bg-white after:shadow after:transition-transform peer-checked:after:translate-x-5">
            </span>
        </label>
    }
}

#[component]
pub fn SettingsForm() -> impl IntoView {
    view! {
        <Card>
            <CardHeader>
                <CardTitle>"App Settings"</CardTitle>
            </CardHeader>
            <CardContent>
                <form class="space-y-4" on:submit=|ev| ev.prevent_default()>
                    <div class="flex items-center justify-between">
                        <label for="notifications" class={theme::FIELD_LABEL}>"Enable Notifications"</label>
                        <Switch id="notifications" />
                    </div>
                    <div class="space-y-2">
                        <SelectField
                            id="language"
                            label="Language"
                            placeholder="Select language"
                            options=LANGUAGES
                        />
                        <SelectField
                            id="units"
                            label="Measurement Units"
                            placeholder="Select units"
                            options=UNITS
                            selected=DEFAULT_UNITS
                            label_class="text-sm text-gray-600"
                        />
                    </div>
                </form>
            </CardContent>
            <CardFooter>
                <button type="button" class={theme::PRIMARY_BUTTON_FULL}>"Save Settings"</button>
            </CardFooter>
        </Card>
    }
}
