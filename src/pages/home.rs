use leptos::prelude::*;

use crate::components::analysis_result::AnalysisResult;
use crate::components::recommendations::Recommendations;
use crate::components::upload_form::UploadForm;
use crate::theme;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="space-y-12">
            <section class="text-center">
                <h1 class="text-4xl md:text-5xl font-bold mb-4 text-gray-800">"Make Healthier Choices"</h1>
                <p class="text-xl text-gray-600 mb-8">
                    "Discover the nutritional value of your food with AI-powered analysis"
                </p>
                <button type="button" class={theme::PRIMARY_BUTTON}>"Get Started"</button>
            </section>
            <UploadForm />
            <AnalysisResult />
            <Recommendations />
        </div>
    }
}
