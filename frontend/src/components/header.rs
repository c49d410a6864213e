use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_router::A;

use crate::config::{APP_NAME, DASHBOARD_ROUTE, GPU_STATUS_ENDPOINT, GPU_STATUS_POLL_MS};
use crate::services::fetch_gpu_status;
use crate::GpuStatus;

#[component]
pub fn Header() -> impl IntoView {
    let (gpu_status, set_gpu_status) = create_signal(None::<GpuStatus>);

    // Refresh the device badge for the lifetime of the header
    spawn_local(async move {
        loop {
            let status = match fetch_gpu_status(GPU_STATUS_ENDPOINT).await {
                Ok(status) => {
                    log::debug!("🖥️ Detection server device: {}", status.label());
                    Some(status)
                }
                Err(e) => {
                    log::warn!("Could not fetch GPU status: {}", e);
                    None
                }
            };

            if set_gpu_status.try_set(status).is_some() {
                break;
            }
            TimeoutFuture::new(GPU_STATUS_POLL_MS).await;
        }
    });

    view! {
        <header class="bg-white shadow-sm">
            <div class="container mx-auto px-4 py-3 flex items-center justify-between">
                <div class="flex items-center space-x-6">
                    <A href="/" class="text-xl font-bold text-blue-600">{APP_NAME}</A>
                    <nav class="space-x-4 text-gray-600">
                        <A href="/">"Analyze"</A>
                        <A href=DASHBOARD_ROUTE>"Dashboard"</A>
                    </nav>
                </div>
                <span class=move || {
                    let available = gpu_status.with(|s| s.as_ref().is_some_and(|s| s.gpu_available));
                    if available {
                        "px-3 py-1 rounded-full text-sm bg-green-100 text-green-800"
                    } else {
                        "px-3 py-1 rounded-full text-sm bg-gray-100 text-gray-600"
                    }
                }>
                    <i class="fas fa-microchip mr-2"></i>
                    {move || gpu_status.get().map(|s| s.label()).unwrap_or_else(|| "--".to_string())}
                </span>
            </div>
        </header>
    }
}
