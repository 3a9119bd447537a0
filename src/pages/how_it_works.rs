use leptos::prelude::*;

use crate::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::icon::Icon;
use crate::content::{step_title, STEPS};
use crate::theme;

#[component]
pub fn HowItWorksPage() -> impl IntoView {
    view! {
        <div class="space-y-12">
            <h1 class={format!("{} text-center", theme::PAGE_HEADING)}>"How It Works"</h1>
            <div class="grid gap-8 sm:grid-cols-2 lg:grid-cols-4">
                {STEPS
                    .into_iter()
                    .enumerate()
                    .map(|(index, step)| {
                        view! {
                            <Card>
                                <CardHeader>
                                    <div class="w-12 h-12 bg-green-100 rounded-full flex items-center justify-center mb-4">
                                        <Icon kind={step.icon} class="h-6 w-6 text-green-600" />
                                    </div>
                                    <CardTitle class="text-xl font-semibold text-gray-800">
                                        {step_title(index, &step)}
                                    </CardTitle>
                                </CardHeader>
                                <CardContent>
                                    <p class="text-gray-600">{step.description}</p>
                                </CardContent>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
