//! Category glyph for a file.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::Category;

stylance::import_crate_style!(css, "src/components/file_icon.module.css");

/// Color tone of a category glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconTone {
    Blue,
    Purple,
    Green,
    Amber,
    BlueTint,
    Gray,
}

/// Tone for each category; categories without their own color are gray.
pub fn tone_for(category: Category) -> IconTone {
    match category {
        Category::Image => IconTone::Blue,
        Category::Video => IconTone::Purple,
        Category::Audio => IconTone::Green,
        Category::Archive => IconTone::Amber,
        Category::Directory => IconTone::BlueTint,
        Category::Pdf | Category::Text | Category::Other => IconTone::Gray,
    }
}

/// Glyph for each category.
pub fn glyph_for(category: Category) -> IconData {
    match category {
        Category::Image => ic::FILE_IMAGE,
        Category::Video => ic::FILE_VIDEO,
        Category::Audio => ic::FILE_AUDIO,
        Category::Archive => ic::FILE_ARCHIVE,
        Category::Directory => ic::FOLDER,
        Category::Pdf => ic::FILE_PDF,
        Category::Text => ic::FILE_TEXT,
        Category::Other => ic::FILE,
    }
}

fn tone_class(tone: IconTone) -> &'static str {
    match tone {
        IconTone::Blue => css::blue,
        IconTone::Purple => css::purple,
        IconTone::Green => css::green,
        IconTone::Amber => css::amber,
        IconTone::BlueTint => css::blueTint,
        IconTone::Gray => css::gray,
    }
}

/// Colored category glyph, `size` pixels square.
#[component]
pub fn FileIcon(
    category: Category,
    #[prop(default = 24)] size: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let class = format!("{} {} {}", css::icon, tone_class(tone_for(category)), class);
    let style = format!("font-size: {}px", size);

    view! {
        <span class=class style=style aria-hidden="true" data-category=format!("{:?}", category)>
            <Icon icon=glyph_for(category) />
        </span>
    }
}
