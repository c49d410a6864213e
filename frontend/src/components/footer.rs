//! Footer component

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-12 py-6 text-center text-sm text-gray-500">
            <div>{APP_NAME} " • Powered by " <span class="font-semibold">"🦀 Rust + Leptos"</span></div>
            <div class="mt-1">"Results are probabilistic and should be reviewed by a person."</div>
        </footer>
    }
}
