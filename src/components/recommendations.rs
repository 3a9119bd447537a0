use leptos::prelude::*;

use crate::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::content::alternative_titles;

#[component]
pub fn Recommendations() -> impl IntoView {
    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Healthier Alternatives"</CardTitle>
            </CardHeader>
            <CardContent>
                <p class="text-gray-600 mb-4">
                    "Based on your product analysis, here are some healthier alternatives:"
                </p>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                    {alternative_titles()
                        .into_iter()
                        .map(|title| {
                            view! {
                                <Card class="rounded-lg border bg-green-50">
                                    <CardHeader>
                                        <CardTitle class="text-lg font-semibold text-gray-800">
                                            {title}
                                        </CardTitle>
                                    </CardHeader>
                                    <CardContent>
                                        <p class="text-sm text-gray-600">
                                            "A healthier option with improved nutritional value."
                                        </p>
                                    </CardContent>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </CardContent>
        </Card>
    }
}
