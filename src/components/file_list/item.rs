//! A single file row.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::FileRow;
use crate::components::FileIcon;
use crate::components::icons as ic;
use crate::config::icon_sizes;

stylance::import_crate_style!(css, "src/components/file_list/file_list.module.css");

/// File row: icon, name, size, modified date, and view/download actions.
///
/// The actions are revealed on hover or keyboard focus but stay in the tab
/// order at all times. Double-clicking the row is the same as "View file".
#[component]
pub fn FileItem(
    row: FileRow,
    #[prop(into, optional)] is_selected: Signal<bool>,
    on_view: Callback<()>,
    on_download: Callback<()>,
) -> impl IntoView {
    let FileRow {
        file,
        category,
        size_label,
    } = row;

    let item_class = move || {
        if is_selected.get() {
            format!("{} {}", css::item, css::selected)
        } else {
            css::item.to_string()
        }
    };

    let handle_view = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        on_view.run(());
    };
    let handle_download = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        on_download.run(());
    };

    view! {
        <li
            class=item_class
            on:dblclick=move |_| on_view.run(())
            aria-current=move || is_selected.get().then_some("true")
            title=file.name.clone()
        >
            <div class=css::info>
                <FileIcon category=category size=icon_sizes::LIST />
                <div class=css::text>
                    <p class=css::name>{file.name.clone()}</p>
                    <div class=css::meta>
                        <span>{size_label}</span>
                        {file.last_modified.clone().map(|modified| view! {
                            <span class=css::dot aria-hidden="true"></span>
                            <span>{modified}</span>
                        })}
                    </div>
                </div>
            </div>

            <div class=css::actions>
                <button
                    class=css::actionButton
                    on:click=handle_view
                    aria-label="View file"
                    title="View file"
                >
                    <Icon icon=ic::VIEW />
                </button>
                <button
                    class=css::actionButton
                    on:click=handle_download
                    aria-label="Download file"
                    title="Download file"
                >
                    <Icon icon=ic::DOWNLOAD />
                </button>
            </div>
        </li>
    }
}
