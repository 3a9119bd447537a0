use leptos::prelude::*;

use crate::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::icon::Icon;
use crate::content::{Metric, ANALYSIS_METRICS};

#[component]
fn MetricRow(metric: Metric) -> impl IntoView {
    let row_class = format!(
        "flex items-center space-x-2 p-2 rounded-lg bg-opacity-50 {}",
        metric.row_class
    );

    view! {
        <div class=row_class>
            <Icon kind={metric.icon} class={metric.icon_class} />
            <span class="text-lg text-gray-700">{metric.text()}</span>
        </div>
    }
}

#[component]
pub fn AnalysisResult() -> impl IntoView {
    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Product Analysis"</CardTitle>
            </CardHeader>
            <CardContent>
                <div class="space-y-4">
                    {ANALYSIS_METRICS
                        .into_iter()
                        .map(|metric| view! { <MetricRow metric=metric /> })
                        .collect_view()}
                </div>
                <p class="mt-4 text-gray-600">
                    "Detailed ingredient analysis and health insights will be displayed here."
                </p>
            </CardContent>
        </Card>
    }
}
