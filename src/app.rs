//! Root application module.
//!
//! Contains the main App component, AppContext definition, and the page
//! layout wiring the file list to the viewer.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_use::use_media_query;
use wasm_bindgen_futures::spawn_local;

use crate::components::toast::notify;
use crate::components::{FileList, FileViewer, Toaster};
use crate::config::{
    APP_FOOTER, APP_NAME, APP_TAGLINE, SAMPLE_FILES_JSON, SELECTION_TRANSITION_MS,
    WIDE_LAYOUT_QUERY,
};
use crate::models::{FileDescriptor, ToastKind, ToastQueue, parse_descriptors};
use crate::utils::{dom, log};

stylance::import_crate_style!(css, "src/app.module.css");

/// Load the bundled sample collection.
///
/// A malformed asset is logged and yields an empty collection, which the
/// list renders as its empty state.
pub fn load_sample_files() -> Vec<FileDescriptor> {
    match parse_descriptors(SAMPLE_FILES_JSON) {
        Ok(files) => {
            log::info(&format!("Loaded {} sample files", files.len()));
            files
        }
        Err(e) => {
            log::error(&format!("Failed to parse sample files: {}", e));
            Vec::new()
        }
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// The selected file is the only mutable domain state. It is replaced on
/// every selection, never mutated in place.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Files shown in the list, in display order.
    pub files: RwSignal<Vec<FileDescriptor>>,
    /// File shown in the viewer.
    pub selected: RwSignal<Option<FileDescriptor>>,
    /// Set briefly after a selection to fade the viewer in.
    pub transitioning: RwSignal<bool>,
    /// Visible notifications.
    pub toasts: RwSignal<ToastQueue>,
}

impl AppContext {
    /// Creates a context over `files`, selecting the first one.
    pub fn new(files: Vec<FileDescriptor>) -> Self {
        let first = files.first().cloned();
        Self {
            files: RwSignal::new(files),
            selected: RwSignal::new(first),
            transitioning: RwSignal::new(false),
            toasts: RwSignal::new(ToastQueue::new()),
        }
    }

    /// Replace the selection and start the switch transition.
    pub fn select(&self, file: FileDescriptor) {
        self.selected.set(Some(file));
        self.transitioning.set(true);
    }

    /// End the switch transition.
    pub fn settle(&self) {
        self.transitioning.try_set(false);
    }

    /// Announce and start a download of `file`.
    pub fn download_file(&self, file: &FileDescriptor) {
        notify(
            self.toasts,
            ToastKind::Success,
            format!("Downloading {}", file.name),
        );
        if !dom::trigger_download(&file.download_request()) {
            log::warn(&format!("Could not start download of {}", file.name));
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the page layout
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(load_sample_files());
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::errorPage>
                    <h1 class=css::errorTitle>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul class=css::errorList>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        class=css::reloadButton
                        on:click=move |_| {
                            if let Some(window) = dom::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Page />
        </ErrorBoundary>
    }
}

/// File list beside the viewer, stacked on narrow screens.
#[component]
fn Page() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let is_wide = use_media_query(WIDE_LAYOUT_QUERY);

    let grid_class = move || {
        if is_wide.get() {
            format!("{} {}", css::grid, css::gridWide)
        } else {
            css::grid.to_string()
        }
    };

    let viewer_class = Signal::derive(move || {
        if ctx.transitioning.get() {
            css::switching.to_string()
        } else {
            String::new()
        }
    });

    let on_select = Callback::new(move |file: FileDescriptor| {
        ctx.select(file);
        spawn_local(async move {
            TimeoutFuture::new(SELECTION_TRANSITION_MS).await;
            ctx.settle();
        });
    });

    let selected_id = Signal::derive(move || ctx.selected.with(|s| s.as_ref().map(|f| f.id.clone())));

    view! {
        <div class=css::page>
            <div class=css::container>
                <div class=css::intro>
                    <h1 class=css::heading>{APP_NAME}</h1>
                    <p class=css::tagline>{APP_TAGLINE}</p>
                </div>

                <div class=grid_class>
                    <div class=css::listCard>
                        <div class=css::listHeader>
                            <h2 class=css::listTitle>"Files"</h2>
                        </div>
                        <FileList
                            files=ctx.files
                            selected_id=selected_id
                            on_select=on_select
                            class=css::listBody
                        />
                    </div>

                    <div class=css::viewerSlot>
                        <FileViewer
                            file=ctx.selected
                            on_download=Callback::new(move |file: FileDescriptor| ctx.download_file(&file))
                            class=viewer_class
                        />
                    </div>
                </div>

                <p class=css::footer>{APP_FOOTER}</p>
            </div>

            <Toaster toasts=ctx.toasts />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, classify};

    #[test]
    fn test_sample_files_load() {
        let files = load_sample_files();
        let types: Vec<_> = files.iter().map(|f| classify(&f.file_type)).collect();
        assert_eq!(
            types,
            vec![
                Category::Image,
                Category::Video,
                Category::Audio,
                Category::Pdf,
                Category::Text,
                Category::Archive,
            ]
        );
    }

    fn sample(id: &str) -> FileDescriptor {
        FileDescriptor::new(id, &format!("{id}.txt"), "text/plain", &format!("/{id}.txt"))
    }

    #[test]
    fn test_starts_on_first_file() {
        let ctx = AppContext::new(vec![sample("a"), sample("b")]);
        assert_eq!(ctx.selected.get_untracked(), Some(sample("a")));
        assert!(!ctx.transitioning.get_untracked());

        let empty = AppContext::new(Vec::new());
        assert_eq!(empty.selected.get_untracked(), None);
    }

    #[test]
    fn test_select_replaces_selection() {
        let ctx = AppContext::new(vec![sample("a"), sample("b")]);
        let before = ctx.selected.get_untracked();

        ctx.select(sample("b"));

        assert_eq!(ctx.selected.get_untracked(), Some(sample("b")));
        assert!(ctx.transitioning.get_untracked());
        // the previous value is replaced, not edited
        assert_eq!(before, Some(sample("a")));
        assert_eq!(ctx.files.with_untracked(|f| f.clone()), vec![sample("a"), sample("b")]);

        ctx.settle();
        assert!(!ctx.transitioning.get_untracked());
        assert_eq!(ctx.selected.get_untracked(), Some(sample("b")));
    }

    #[test]
    fn test_last_selection_wins() {
        let ctx = AppContext::new(vec![sample("a"), sample("b"), sample("c")]);
        for id in ["c", "a", "b"] {
            ctx.select(sample(id));
            assert_eq!(ctx.selected.with_untracked(|s| s.as_ref().map(|f| f.id.clone())), Some(id.to_string()));
        }
    }

    #[test]
    fn test_sample_ids_unique() {
        let files = load_sample_files();
        let mut ids: Vec<_> = files.iter().map(|f| f.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), files.len());
    }
}
