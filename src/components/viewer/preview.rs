//! Inline preview bodies, one per [`PreviewKind`].

use leptos::prelude::*;

use crate::components::FileIcon;
use crate::config::icon_sizes;
use crate::config::text::{LOAD_ERROR, LOADING, PDF_FALLBACK, PDF_OPEN_LINK};
use crate::core::{PreviewKind, TextLoad, TextState};
use crate::models::{ContentKey, FileDescriptor};
use crate::utils::format::{format_megabytes, known_size};

stylance::import_crate_style!(css, "src/components/viewer/viewer.module.css");

/// Preview body for a file.
#[component]
pub fn FilePreview(file: FileDescriptor, text: RwSignal<TextLoad>) -> impl IntoView {
    let category = file.category();
    match PreviewKind::for_file(&file) {
        PreviewKind::Image => view! {
            <img src=file.url alt=file.name class=css::image />
        }
        .into_any(),
        PreviewKind::Video => view! {
            <video src=file.url controls=true class=css::video />
        }
        .into_any(),
        PreviewKind::Audio => view! {
            <div class=css::audio>
                <FileIcon category=category size=icon_sizes::AUDIO class=css::audioIcon />
                <audio src=file.url controls=true class=css::audioPlayer />
            </div>
        }
        .into_any(),
        PreviewKind::Pdf => view! { <PdfPreview url=file.url /> }.into_any(),
        PreviewKind::Text => view! { <TextPreview content_key=file.content_key() text=text /> }.into_any(),
        PreviewKind::Fallback => view! { <FallbackPreview file=file /> }.into_any(),
    }
}

/// Embedded PDF with a link for browsers that cannot embed.
#[component]
fn PdfPreview(url: String) -> impl IntoView {
    let href = url.clone();

    view! {
        <object data=url type="application/pdf" class=css::pdf>
            <div class=css::pdfFallback>
                <p>
                    {PDF_FALLBACK}" "
                    <a href=href target="_blank" rel="noopener noreferrer" class=css::link>
                        {PDF_OPEN_LINK}
                    </a>
                </p>
            </div>
        </object>
    }
}

/// Fetched text, whitespace preserved.
///
/// Only state belonging to `content_key` is shown; anything else still counts as
/// loading, so a previous file's body never flashes into view.
#[component]
fn TextPreview(content_key: ContentKey, text: RwSignal<TextLoad>) -> impl IntoView {
    view! {
        <div class=css::textFrame>
            {move || text.with(|load| {
                let current = load.key() == Some(&content_key);
                match load.state() {
                    TextState::Loaded(body) if current => view! {
                        <pre class=css::text>{body.clone()}</pre>
                    }
                    .into_any(),
                    TextState::Failed if current => view! {
                        <p class=css::error>{LOAD_ERROR}</p>
                    }
                    .into_any(),
                    _ => view! { <p class=css::loading>{LOADING}</p> }.into_any(),
                }
            })}
        </div>
    }
}

/// No inline preview: large icon, name and size.
#[component]
fn FallbackPreview(file: FileDescriptor) -> impl IntoView {
    view! {
        <div class=css::fallback>
            <FileIcon category=file.category() size=icon_sizes::FALLBACK class=css::fallbackIcon />
            <p class=css::fallbackName>{file.name.clone()}</p>
            {known_size(file.size).map(|size| view! {
                <p class=css::fallbackSize>{format_megabytes(size)}</p>
            })}
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::utils::dom;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn render(file: FileDescriptor) -> web_sys::HtmlElement {
        let container = dom::test_container();
        let text = RwSignal::new(TextLoad::new());
        mount_to(container.clone(), move || view! { <FilePreview file=file.clone() text=text /> }).forget();
        container
    }

    #[wasm_bindgen_test]
    fn test_pdf_embeds_and_links_same_url() {
        let url = "https://example.com/report.pdf";
        let container = render(FileDescriptor::new("4", "Report.pdf", "application/pdf", url));

        let object = container.query_selector("object").unwrap().expect("pdf object");
        assert_eq!(object.get_attribute("data").as_deref(), Some(url));
        assert_eq!(object.get_attribute("type").as_deref(), Some("application/pdf"));

        let link = container.query_selector("object a").unwrap().expect("fallback link");
        assert_eq!(link.get_attribute("href").as_deref(), Some(url));
        assert_eq!(link.text_content().as_deref(), Some(PDF_OPEN_LINK));
    }

    #[wasm_bindgen_test]
    fn test_fallback_hides_zero_size() {
        let sized = render(FileDescriptor::new("6", "Archive.zip", "application/zip", "#").with_size(2_450_000));
        assert!(sized.text_content().unwrap_or_default().contains("2.34 MB"));

        let empty = render(FileDescriptor::new("7", "Empty.zip", "application/zip", "#").with_size(0));
        let text = empty.text_content().unwrap_or_default();
        assert!(text.contains("Empty.zip"));
        assert!(!text.contains("MB"));
    }
}
