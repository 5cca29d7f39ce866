//! Scrollable file list.

use leptos::prelude::*;

use super::{FileItem, list_rows};
use crate::config::text::EMPTY_LIST;
use crate::models::FileDescriptor;
use crate::utils::{dom, log};

stylance::import_crate_style!(css, "src/components/file_list/file_list.module.css");

/// List of files, one row per descriptor in the given order.
///
/// `selected_id` only drives the row highlight; selection itself lives with
/// the caller and changes through `on_select`.
#[component]
pub fn FileList(
    #[prop(into)] files: Signal<Vec<FileDescriptor>>,
    #[prop(into, optional)] selected_id: Signal<Option<String>>,
    on_select: Callback<FileDescriptor>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let rows = Memo::new(move |_| files.with(|f| list_rows(f)));

    view! {
        <div class=format!("{} {}", css::scroll, class)>
            <Show
                when=move || rows.with(|r| !r.is_empty())
                fallback=|| view! {
                    <div class=css::empty>
                        <p class=css::emptyText>{EMPTY_LIST}</p>
                    </div>
                }
            >
                <ul class=css::list role="list" aria-label="Files">
                    <For
                        each=move || rows.get()
                        key=|row| row.file.id.clone()
                        children=move |row| {
                            let id = row.file.id.clone();
                            let is_selected = Signal::derive(move || {
                                selected_id.with(|s| s.as_deref() == Some(id.as_str()))
                            });
                            let view_file = row.file.clone();
                            let download_file = row.file.clone();
                            view! {
                                <FileItem
                                    row=row
                                    is_selected=is_selected
                                    on_view=Callback::new(move |_| on_select.run(view_file.clone()))
                                    on_download=Callback::new(move |_| {
                                        if !dom::trigger_download(&download_file.download_request()) {
                                            log::warn(&format!("Could not start download of {}", download_file.name));
                                        }
                                    })
                                />
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
