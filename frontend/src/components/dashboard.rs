//! Model metrics dashboard.
//!
//! Shows the evaluation metrics published by the detection server, or an
//! error block while none are available.

use leptos::*;

use crate::components::ErrorBlock;
use crate::config::METRICS_ENDPOINT;
use crate::services::{fetch_metrics, flatten_metrics};

#[component]
pub fn Dashboard() -> impl IntoView {
    let metrics = create_local_resource(
        || (),
        |_| async move {
            let metrics = fetch_metrics(METRICS_ENDPOINT).await;
            if let Err(e) = &metrics {
                log::warn!("📊 Metrics unavailable: {}", e);
            }
            metrics
        },
    );

    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-lg font-semibold text-gray-800">"Model Metrics"</h2>
                <button
                    class="text-sm text-blue-600"
                    on:click=move |_| metrics.refetch()
                >
                    <i class="fas fa-sync-alt mr-1"></i>
                    "Refresh"
                </button>
            </div>

            {move || match metrics.get() {
                None => view! {
                    <div class="text-gray-600">
                        <i class="fas fa-spinner fa-spin mr-2"></i>
                        "Loading metrics..."
                    </div>
                }
                .into_view(),
                Some(Err(e)) => view! { <ErrorBlock message=e.to_string()/> }.into_view(),
                Some(Ok(document)) => view! {
                    <table class="w-full text-sm">
                        <tbody>
                            {flatten_metrics(&document)
                                .into_iter()
                                .map(|(key, value)| view! {
                                    <tr class="border-b">
                                        <td class="py-2 text-gray-600">{key}</td>
                                        <td class="py-2 text-right font-mono">{value}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_view(),
            }}
        </div>
    }
}
