//! Detection results rendering.

use leptos::*;

use crate::panel::ResultView;

/// Results area of the upload panel.
///
/// Content is rebuilt from scratch on every render, so consecutive
/// analyses never accumulate blocks.
#[component]
pub fn ResultsPanel(
    /// Current content, `None` before the first render
    #[prop(into)]
    results: Signal<Option<ResultView>>,
    /// Whether the container is shown
    #[prop(into)]
    visible: Signal<bool>,
) -> impl IntoView {
    view! {
        <div id="resultsContainer" class="mt-6" class:hidden=move || !visible.get()>
            <h2 class="text-lg font-semibold text-gray-800 mb-3">"Analysis Results"</h2>
            <div id="resultsContent">
                {move || results.get().map(render_view)}
            </div>
        </div>
    }
}

fn render_view(content: ResultView) -> View {
    match content {
        ResultView::Error(message) => view! { <ErrorBlock message=message/> }.into_view(),
        ResultView::Detection {
            verdict,
            message,
            confidence,
            image,
        } => view! {
            <div class="space-y-3">
                <div class=format!("p-3 rounded-lg {}", verdict.theme_class())>
                    <i class=verdict.icon_class()></i>
                    <span class="font-semibold">{message}</span>
                </div>

                <div class="space-y-1">
                    <div class="flex justify-between text-sm text-gray-600">
                        <span>"Confidence Level"</span>
                        <span>{confidence.clone()}</span>
                    </div>
                    <div class="w-full bg-gray-200 rounded-full h-2.5">
                        <div class="bg-blue-600 h-2.5 rounded-full" style:width=confidence></div>
                    </div>
                </div>

                {image.map(|src| view! {
                    <div class="mt-4 border rounded-lg overflow-hidden">
                        <img src=src alt="Analysis Result" class="w-full"/>
                    </div>
                })}
            </div>
        }
        .into_view(),
    }
}

/// Error icon followed by the message, shown as plain text.
#[component]
pub fn ErrorBlock(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="p-3 bg-red-100 text-red-800 rounded-lg">
            <i class="fas fa-exclamation-circle mr-2"></i>
            <span class="font-semibold">{message}</span>
        </div>
    }
}
