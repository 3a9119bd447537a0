use leptos::prelude::*;

use crate::components::card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
use crate::components::select_field::SelectField;
use crate::content::{ACTIVITY_LEVELS, DIETARY_PREFERENCES, HEALTH_GOALS};
use crate::theme;

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=id class={theme::FIELD_LABEL}>{label}</label>
            <input id=id type=input_type placeholder=placeholder class={theme::INPUT} />
        </div>
    }
}

/// Health details form. Fields are not bound to any state and the save
/// button has no handler.
#[component]
pub fn ProfileForm() -> impl IntoView {
    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Health Profile"</CardTitle>
                <CardDescription>"Provide your details for personalized recommendations"</CardDescription>
            </CardHeader>
            <CardContent>
                <form class="space-y-4" on:submit=|ev| ev.prevent_default()>
                    <TextField id="name" label="Name" placeholder="Your name" />
                    <TextField id="age" label="Age" placeholder="Your age" input_type="number" />
                    <div class="grid grid-cols-2 gap-4">
                        <TextField
                            id="height"
                            label="Height (cm)"
                            placeholder="Height in cm"
                            input_type="number"
                        />
                        <TextField
                            id="weight"
                            label="Weight (kg)"
                            placeholder="Weight in kg"
                            input_type="number"
                        />
                    </div>
                    <SelectField
                        id="activity-level"
                        label="Activity Level"
                        placeholder="Select activity level"
                        options=ACTIVITY_LEVELS
                    />
                    <SelectField
                        id="dietary-preferences"
                        label="Dietary Preferences"
                        placeholder="Select your diet"
                        options=DIETARY_PREFERENCES
                    />
                    <SelectField
                        id="health-goals"
                        label="Health Goals"
                        placeholder="Select your primary health goal"
                        options=HEALTH_GOALS
                    />
                </form>
            </CardContent>
            <CardFooter>
                <button type="button" class={theme::PRIMARY_BUTTON_FULL}>"Save Profile"</button>
            </CardFooter>
        </Card>
    }
}
