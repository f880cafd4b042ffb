//! Classifies file names into display categories.
//!
//! This module maps a file name's extension to one of a fixed set of
//! categories and to the `colored` crate `Color` each category is drawn in.
//! Classification is a pure function of the name: the same name always
//! yields the same category and color.

use colored::Color;

/// The fixed set of file categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Code,
    Audio,
    Video,
    Document,
    Image,
    Other,
}

/// Returns the extension of a file name: the part after the last `.`.
///
/// A name with no dot has no extension, and neither does a dotfile whose
/// only dot is the leading one (`.bashrc` is a hidden file, not a file with
/// extension `bashrc`).
pub fn extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &name[idx + 1..],
    }
}

impl Category {
    /// All categories in the order grouped output presents them.
    pub const ALL: [Category; 6] = [
        Category::Code,
        Category::Audio,
        Category::Video,
        Category::Document,
        Category::Image,
        Category::Other,
    ];

    /// Classifies a file name by its extension.
    ///
    /// Matching is an exact, case-sensitive comparison against the fixed
    /// extension tables; anything unmatched falls into `Other`.
    pub fn classify(name: &str) -> Category {
        match extension(name) {
            "c" | "cpp" | "h" | "js" | "ts" | "py" | "java" | "rb" | "go" | "rs" | "php"
            | "sh" => Category::Code,
            "mp3" | "wav" | "flac" => Category::Audio,
            "mp4" | "mkv" | "mov" => Category::Video,
            "pdf" | "doc" | "docx" | "txt" => Category::Document,
            "png" | "jpg" | "jpeg" | "gif" => Category::Image,
            _ => Category::Other,
        }
    }

    /// The heading used for this category in grouped output.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Code => "Code",
            Category::Audio => "Audio",
            Category::Video => "Video",
            Category::Document => "Document",
            Category::Image => "Image",
            Category::Other => "Other",
        }
    }

    /// The `colored` crate `Color` this category is displayed in.
    pub fn color(&self) -> Color {
        match self {
            Category::Code => Color::Blue,
            Category::Audio => Color::Cyan,
            Category::Video => Color::Magenta,
            Category::Document => Color::Yellow,
            Category::Image => Color::Green,
            Category::Other => Color::BrightBlack,
        }
    }
}
