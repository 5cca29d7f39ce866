//! File viewer card.
//!
//! Header with the file's icon, name, download and fullscreen controls, and
//! a body that previews the file inline.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::FilePreview;
use super::hook::use_text_content;
use crate::app::AppContext;
use crate::components::FileIcon;
use crate::components::icons as ic;
use crate::components::toast::notify;
use crate::config::text::NO_SELECTION;
use crate::config::{FULLSCREEN_KEY, VIEWER_CONTAINER_ID, icon_sizes};
use crate::core::{FullscreenCommand, FullscreenToggle};
use crate::models::{DownloadRequest, FileDescriptor, ToastKind};
use crate::utils::{dom, log};

stylance::import_crate_style!(css, "src/components/viewer/viewer.module.css");

/// Hand `file` to `on_download`, or save it directly when there is no handler.
fn route_download(
    file: FileDescriptor,
    on_download: Option<Callback<FileDescriptor>>,
    direct: impl FnOnce(&DownloadRequest),
) {
    match on_download {
        Some(callback) => callback.run(file),
        None => direct(&file.download_request()),
    }
}

/// Preview pane for the selected file.
///
/// # Props
/// - `file`: The file to show, or `None` for the empty state
/// - `on_download`: Replaces the default direct download when given
/// - `class`: Extra classes for the outer card (e.g. transition state)
#[component]
pub fn FileViewer(
    #[prop(into)] file: Signal<Option<FileDescriptor>>,
    #[prop(optional)] on_download: Option<Callback<FileDescriptor>>,
    #[prop(into, optional)] class: Signal<String>,
) -> impl IntoView {
    let fullscreen = RwSignal::new(FullscreenToggle::new());
    let text = use_text_content(file);
    let toasts = use_context::<AppContext>().map(|ctx| ctx.toasts);

    // Browser-initiated exits (Esc) must bring the toggle back to Normal
    let listener = window_event_listener_untyped("fullscreenchange", move |_| {
        if !dom::fullscreen_active() {
            fullscreen.try_update(|f| f.exited_externally());
        }
    });
    on_cleanup(move || listener.remove());

    let toggle_fullscreen = move || {
        let command = fullscreen
            .try_update(|f| f.toggle(dom::exit_fullscreen_supported()))
            .unwrap_or(FullscreenCommand::None);

        match command {
            FullscreenCommand::Enter => spawn_local(async move {
                match dom::request_fullscreen(VIEWER_CONTAINER_ID).await {
                    Ok(()) => {
                        fullscreen.try_update(|f| f.entered());
                    }
                    Err(e) => {
                        log::error(&e.to_string());
                        fullscreen.try_update(|f| f.rejected());
                        if let Some(toasts) = toasts {
                            notify(toasts, ToastKind::Error, "Fullscreen is not available");
                        }
                    }
                }
            }),
            FullscreenCommand::Exit => dom::exit_fullscreen(),
            FullscreenCommand::None => {}
        }
    };

    let handle_download = move |_: ev::MouseEvent| {
        let Some(current) = file.get_untracked() else {
            return;
        };
        let name = current.name.clone();
        route_download(current, on_download, |request| {
            if !dom::trigger_download(request) {
                log::warn(&format!("Could not start download of {}", name));
            }
        });
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == FULLSCREEN_KEY && !ev.ctrl_key() && !ev.meta_key() && !ev.alt_key() {
            ev.prevent_default();
            toggle_fullscreen();
        }
    };

    let is_fullscreen = Signal::derive(move || fullscreen.with(|f| f.is_fullscreen()));
    let has_file = Signal::derive(move || file.with(Option::is_some));

    let card_class = move || {
        let mut classes = css::card.to_string();
        if is_fullscreen.get() {
            classes.push(' ');
            classes.push_str(css::fullscreen);
        }
        class.with(|extra| {
            if !extra.is_empty() {
                classes.push(' ');
                classes.push_str(extra);
            }
        });
        classes
    };

    view! {
        <section
            id=VIEWER_CONTAINER_ID
            class=card_class
            tabindex="0"
            on:keydown=handle_keydown
            aria-label="File preview"
        >
            <header class=css::header>
                <div class=css::title>
                    {move || file.get().map(|f| {
                        let category = f.category();
                        let title = f.name.clone();
                        let name = f.name;
                        view! {
                            <FileIcon category=category size=icon_sizes::HEADER />
                            <p class=css::filename title=title>{name}</p>
                        }
                    })}
                </div>

                <div class=css::controls>
                    <button
                        class=css::controlButton
                        on:click=handle_download
                        disabled=move || !has_file.get()
                        aria-label="Download"
                        title="Download"
                    >
                        <Icon icon=ic::DOWNLOAD />
                    </button>
                    <button
                        class=css::controlButton
                        on:click=move |_| toggle_fullscreen()
                        aria-label=move || {
                            if is_fullscreen.get() { "Exit fullscreen" } else { "Enter fullscreen" }
                        }
                        aria-pressed=move || is_fullscreen.get().to_string()
                        aria-busy=move || fullscreen.with(|f| f.is_entering()).to_string()
                    >
                        {move || if is_fullscreen.get() {
                            view! { <Icon icon=ic::MINIMIZE /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::MAXIMIZE /> }.into_any()
                        }}
                    </button>
                </div>
            </header>

            <div class=css::body>
                {move || match file.get() {
                    Some(f) => view! { <FilePreview file=f text=text /> }.into_any(),
                    None => view! { <p class=css::placeholder>{NO_SELECTION}</p> }.into_any(),
                }}
            </div>
        </section>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::tests::report;
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_header_shows_file_name() {
        let container = dom::test_container();
        let file = Signal::stored(Some(report()));
        mount_to(container.clone(), move || view! { <FileViewer file=file /> }).forget();

        let title = container
            .query_selector("header p[title]")
            .unwrap()
            .expect("file name in header");
        assert_eq!(title.get_attribute("title").as_deref(), Some("Report.pdf"));
        assert_eq!(title.text_content().as_deref(), Some("Report.pdf"));
    }

    #[wasm_bindgen_test]
    fn test_empty_state_without_file() {
        let container = dom::test_container();
        let file = Signal::stored(None::<FileDescriptor>);
        mount_to(container.clone(), move || view! { <FileViewer file=file /> }).forget();

        let text = container.text_content().unwrap_or_default();
        assert!(text.contains(NO_SELECTION));
        assert!(container.query_selector("header p[title]").unwrap().is_none());
    }
}
