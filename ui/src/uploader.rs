use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;
use nanobanana_core::{
    content::{PROCESSING_RESULTS, UPLOAD_HINT},
    validate_size, IntakeConfig, IntakeController, IntakeError, IntakeState, Phase, Result,
    SelectedFile,
};
use std::io;
use std::sync::Arc;

const UPLOADER_CSS: Asset = asset!("/assets/styling/uploader.css");

const INPUT_ID: &str = "image-input";

/// Drop zone with local preview.
///
/// All state lives in an [`IntakeController`]; this component forwards events
/// to it and mirrors its published state into a signal.
#[component]
pub fn ImageUploader() -> Element {
    let controller = use_hook(|| IntakeController::new(IntakeConfig::default()));
    let mut state = use_signal(IntakeState::new);

    use_future({
        let controller = controller.clone();
        move || {
            let mut updates = controller.subscribe();
            async move {
                while updates.changed().await.is_ok() {
                    let latest = updates.borrow_and_update().clone();
                    state.set(latest);
                }
            }
        }
    });

    let on_drag_enter = {
        let controller = controller.clone();
        move |evt: DragEvent| {
            evt.prevent_default();
            controller.begin_drag();
        }
    };

    let on_drag_over = {
        let controller = controller.clone();
        move |evt: DragEvent| {
            evt.prevent_default();
            if !controller.snapshot().is_dragging() {
                controller.begin_drag();
            }
        }
    };

    let on_drag_leave = {
        let controller = controller.clone();
        move |_evt: DragEvent| controller.end_drag()
    };

    let on_drop = {
        let controller = controller.clone();
        move |evt: DragEvent| {
            evt.prevent_default();
            let controller = controller.clone();
            spawn(async move {
                let file = match evt.files() {
                    Some(engine) => read_first_file(engine, controller.config()).await,
                    None => Ok(None),
                };
                match file {
                    // Outcome is already reflected in the published state
                    Ok(file) => {
                        let _ = controller.accept_drop(file).await;
                    }
                    Err(e) => {
                        controller.end_drag();
                        controller.report(&e);
                    }
                }
            });
        }
    };

    let on_input_change = {
        let controller = controller.clone();
        move |evt: FormEvent| {
            let controller = controller.clone();
            spawn(async move {
                let Some(engine) = evt.files() else {
                    return;
                };
                let file = read_first_file(engine, controller.config()).await;
                // Let the same file be picked again later
                reset_file_input();
                match file {
                    Ok(Some(file)) => {
                        let _ = controller.select_file(file).await;
                    }
                    Ok(None) => {}
                    Err(e) => controller.report(&e),
                }
            });
        }
    };

    let on_browse = {
        let controller = controller.clone();
        move |evt: MouseEvent| {
            evt.prevent_default();
            let controller = controller.clone();
            spawn(async move {
                if let Some(file) = open_file_dialog(controller.config()).await {
                    let _ = controller.select_file(file).await;
                }
            });
        }
    };

    let on_clear = {
        let controller = controller.clone();
        move |evt: MouseEvent| {
            evt.prevent_default();
            evt.stop_propagation();
            controller.clear();
            reset_file_input();
        }
    };

    let accept = controller.config().accept_attribute();
    let current = state.read();
    let zone_class = if current.is_dragging() {
        "drop-zone dragging"
    } else {
        "drop-zone"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: UPLOADER_CSS }

        section {
            id: "features",
            div {
                class: "uploader",
                h2 { "Upload Your Image" }
                p { class: "subtitle", "Drag and drop your image or click to browse from your device" }

                div {
                    class: zone_class,
                    ondragenter: on_drag_enter,
                    ondragover: on_drag_over,
                    ondragleave: on_drag_leave,
                    ondrop: on_drop,

                    input {
                        id: INPUT_ID,
                        r#type: "file",
                        accept: accept,
                        class: "hidden",
                        onchange: on_input_change,
                    }

                    {match (current.phase(), current.preview()) {
                        (Phase::Decoding, _) => rsx! {
                            div {
                                class: "decoding",
                                div { class: "spinner" }
                                p { "Reading image..." }
                            }
                        },
                        (Phase::HasPreview, Some(preview)) => rsx! {
                            div {
                                class: "preview",
                                img {
                                    src: "{preview.data_uri}",
                                    alt: "Uploaded",
                                }
                                p {
                                    class: "preview-meta",
                                    "{preview.file_name} · {preview.width}×{preview.height}"
                                }
                                button {
                                    class: "button secondary",
                                    onclick: on_clear,
                                    "Upload Another"
                                }
                            }
                        },
                        _ => rsx! {
                            label {
                                r#for: INPUT_ID,
                                class: "prompt",
                                div { class: "upload-icon", "⬆" }
                                p { class: "prompt-title", "Click or drag to upload" }
                                p { class: "prompt-hint", "{UPLOAD_HINT}" }
                            }
                            if cfg!(feature = "desktop") {
                                button {
                                    class: "button outline",
                                    onclick: on_browse,
                                    "Browse Files"
                                }
                            }
                        },
                    }}
                }

                if let Some(message) = current.error() {
                    p { class: "upload-error", role: "alert", "{message}" }
                }

                if current.preview().is_some() {
                    div {
                        class: "results",
                        h3 { "Processing Results" }
                        div {
                            class: "metrics",
                            for metric in PROCESSING_RESULTS {
                                div {
                                    key: "{metric.label}",
                                    class: "metric",
                                    p { class: "metric-label", "{metric.label}" }
                                    p { class: "metric-value", "{metric.value}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Read the first file of a selection or drop; the rest are never loaded.
///
/// Files over the size ceiling are turned away before their bytes are read.
async fn read_first_file(
    engine: Arc<dyn FileEngine>,
    config: &IntakeConfig,
) -> Result<Option<SelectedFile>> {
    let Some(name) = engine.files().into_iter().next() else {
        return Ok(None);
    };

    if let Some(size) = engine.file_size(&name).await {
        validate_size(size, config)?;
    }

    loaded_file(&name, engine.read_file(&name).await).map(Some)
}

fn loaded_file(name: &str, bytes: Option<Vec<u8>>) -> Result<SelectedFile> {
    let name = display_name(name);
    let bytes = bytes.ok_or_else(|| {
        IntakeError::Io(io::Error::new(
            io::ErrorKind::Other,
            format!("could not read {}", name),
        ))
    })?;
    Ok(SelectedFile::from_named_bytes(name, bytes))
}

fn reset_input_script() -> String {
    format!(
        "const input = document.getElementById('{}'); if (input) {{ input.value = ''; }}",
        INPUT_ID
    )
}

/// Empty the hidden file input, otherwise re-picking the same file fires no change
fn reset_file_input() {
    let _ = document::eval(&reset_input_script());
}

/// Desktop reports full paths; keep only the last component
fn display_name(name: &str) -> String {
    std::path::Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string())
}

// Platform-specific file dialog implementation
async fn open_file_dialog(config: &IntakeConfig) -> Option<SelectedFile> {
    #[cfg(feature = "desktop")]
    {
        use rfd::AsyncFileDialog;

        let extensions: Vec<&str> = config
            .accepted
            .iter()
            .flat_map(|kind| kind.extensions().iter().copied())
            .collect();

        let file = AsyncFileDialog::new()
            .add_filter("Images", &extensions)
            .pick_file()
            .await?;
        let bytes = file.read().await;
        Some(SelectedFile::from_named_bytes(file.file_name(), bytes))
    }

    #[cfg(not(feature = "desktop"))]
    {
        let _ = config;
        tracing::warn!("Native file dialog not available on this platform, use the file input");
        None
    }
}
