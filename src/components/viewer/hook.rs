//! Text content loading hook.
//!
//! Fetches the body of the displayed file when it previews as text. The load
//! restarts whenever the `(url, type)` of the displayed file changes, and a
//! response for a file that is no longer displayed is discarded by
//! [`TextLoad::commit`].

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::core::{PreviewKind, TextLoad};
use crate::models::{ContentKey, FileDescriptor};
use crate::utils::{fetch_text, log};

/// Content key of the file if it needs its body fetched as text.
fn text_target(file: Option<&FileDescriptor>) -> Option<ContentKey> {
    file.filter(|f| PreviewKind::for_file(f).needs_text())
        .map(FileDescriptor::content_key)
}

/// Track and fetch text content for the displayed file.
pub fn use_text_content(file: Signal<Option<FileDescriptor>>) -> RwSignal<TextLoad> {
    let load = RwSignal::new(TextLoad::new());

    let target = Memo::new(move |_| file.with(|f| text_target(f.as_ref())));

    Effect::new(move |_| match target.get() {
        Some(key) => {
            let url = key.url.clone();
            let Some(ticket) = load.try_update(|l| l.begin(key)) else {
                return;
            };
            spawn_local(async move {
                let result = fetch_text(&url).await;
                if let Err(e) = &result {
                    log::warn(&format!("Failed to load {}: {}", url, e));
                }
                load.try_update(|l| l.commit(ticket, result));
            });
        }
        None => {
            load.try_update(|l| l.reset());
        }
    });

    load
}
