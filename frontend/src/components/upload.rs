//! Media upload panel with drag & drop support.
//!
//! Handles file selection, size validation, submission to the detection
//! endpoint and the loading indicator. All state lives in one
//! [`PanelState`] signal; this component only forwards DOM events to it.

use leptos::ev::{DragEvent, SubmitEvent};
use leptos::*;
use web_sys::{Event, File, FileList, HtmlInputElement};

use crate::components::ResultsPanel;
use crate::config::{ACCEPTED_EXTENSIONS, DETECT_ENDPOINT, MAX_FILE_SIZE_MB};
use crate::panel::PanelState;
use crate::services::detect;
use crate::SelectedFile;

const DROP_ZONE_CLASS: &str =
    "border-2 border-dashed border-gray-300 rounded-lg p-8 text-center cursor-pointer transition-colors";

/// First file of a selection; extra files are ignored.
fn first_file(files: Option<FileList>) -> Option<File> {
    files.and_then(|files| files.get(0))
}

#[component]
pub fn UploadPanel() -> impl IntoView {
    let panel = create_rw_signal(PanelState::new());
    // Browser handle of the accepted file, uploaded on submit
    let file_handle = store_value(None::<File>);
    let (drag_active, set_drag_active) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let choose_file = move |file: File| {
        let selected = SelectedFile::from(&file);
        let name = selected.name.clone();

        match panel.try_update(|p| p.choose_file(selected)) {
            Some(Ok(())) => {
                log::info!("📎 Selected {}", name);
                file_handle.set_value(Some(file));
            }
            Some(Err(e)) => log::warn!("⚠️ Rejected {}: {}", name, e),
            None => {}
        }
    };

    // Drag handlers: the browser would otherwise open the dropped file
    let highlight = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);

        if let Some(file) = first_file(ev.data_transfer().and_then(|dt| dt.files())) {
            choose_file(file);
        }
    };

    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = first_file(input.files()) {
            choose_file(file);
        }
    };

    let on_remove = move |_| {
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
        file_handle.set_value(None);
        panel.update(|p| p.remove());
        log::info!("🗑️ Selection cleared");
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(file) = file_handle.get_value() else {
            return;
        };
        let Some(selected) = panel.try_update(|p| p.begin_submit()).flatten() else {
            return;
        };

        log::info!("📤 Submitting {} for analysis...", selected.name);

        spawn_local(async move {
            let outcome = detect(&file, DETECT_ENDPOINT).await;

            match &outcome {
                Ok(result) => match result.error_message() {
                    Some(error) => log::warn!("⚠️ Server rejected {}: {}", selected.name, error),
                    None => log::info!(
                        "✅ Analysis of {} complete: {}",
                        selected.name,
                        result.message
                    ),
                },
                Err(e) => log::error!("❌ Analysis of {} failed: {:?}", selected.name, e),
            }

            panel.update(|p| p.finish(outcome));
        });
    };

    let results = Signal::derive(move || panel.with(|p| p.results.clone()));
    let results_visible = Signal::derive(move || panel.with(|p| p.results_visible));

    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <form id="uploadForm" class="space-y-4" on:submit=on_submit>
                <div
                    id="dropArea"
                    class=move || {
                        if drag_active.get() {
                            format!("{} border-blue-500 bg-blue-50", DROP_ZONE_CLASS)
                        } else {
                            DROP_ZONE_CLASS.to_string()
                        }
                    }
                    on:dragenter=highlight
                    on:dragover=highlight
                    on:dragleave=on_drag_leave
                    on:drop=on_drop
                    on:click=open_picker
                >
                    <i class="fas fa-cloud-upload-alt text-4xl text-gray-400 mb-3"></i>
                    <p class="text-gray-700">"Drag & drop an image or video here"</p>
                    <p class="text-sm text-gray-500">
                        {format!("or click to browse (max {}MB)", MAX_FILE_SIZE_MB)}
                    </p>
                </div>

                <input
                    type="file"
                    id="fileInput"
                    class="hidden"
                    accept=ACCEPTED_EXTENSIONS
                    node_ref=file_input
                    on:change=on_file_change
                />

                <div
                    id="fileInfo"
                    class="flex items-center justify-between p-3 bg-gray-50 rounded-lg"
                    class:hidden=move || !panel.with(|p| p.file_info_visible())
                >
                    <div class="flex items-center">
                        <i class="fas fa-file mr-2 text-gray-500"></i>
                        <span id="fileName" class="text-gray-700">
                            {move || panel.with(|p| p.file_name().unwrap_or_default().to_string())}
                        </span>
                    </div>
                    <button type="button" id="removeFile" class="text-red-500" on:click=on_remove>
                        <i class="fas fa-times"></i>
                    </button>
                </div>

                <button
                    type="submit"
                    id="submitBtn"
                    class="w-full py-2 px-4 bg-blue-600 text-white rounded-lg disabled:opacity-50"
                    disabled=move || !panel.with(|p| p.submit_enabled)
                >
                    "Analyze"
                </button>
            </form>

            <div
                id="loadingIndicator"
                class="mt-6 text-center text-gray-600"
                class:hidden=move || !panel.with(|p| p.loading)
            >
                <i class="fas fa-spinner fa-spin mr-2"></i>
                "Analyzing media..."
            </div>

            <ResultsPanel results=results visible=results_visible/>
        </div>
    }
}
