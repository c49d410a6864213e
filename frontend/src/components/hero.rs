//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="text-center mb-8">
            <h1 class="text-3xl font-bold text-gray-800">"Deepfake Detection"</h1>
            <p class="mt-2 text-gray-600">
                "Upload an image or a video to check whether it has been manipulated. "
                "The annotated result is shown once the analysis completes."
            </p>
        </div>
    }
}
