//! Word cloud rendering: spiral layout of the most frequent words into an SVG document.

mod layout;
mod svg;

use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use fastrand::Rng;
use tracing::{debug, warn};

use crate::pipeline::FrequencyTable;
use layout::LayoutParams;
use svg::FontSource;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("nothing to render: frequency table is empty")]
    Empty,

    #[error("font not found: {}", .0.display())]
    FontNotFound(PathBuf),

    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub max_words: usize,
    pub max_font_size: f32,
    pub min_font_size: f32,
    pub prefer_horizontal: f32,
    /// Must cover CJK glyphs when the words are Korean, Japanese or Chinese.
    pub font_path: Option<PathBuf>,
    /// Inline the font as a data URL instead of linking to the file.
    pub embed_font: bool,
    pub seed: u64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: "white".to_string(),
            max_words: 200,
            max_font_size: 96.0,
            min_font_size: 4.0,
            prefer_horizontal: 0.9,
            font_path: None,
            embed_font: false,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SvgImage {
    /// Number of words that fit on the canvas.
    pub words: usize,
    pub document: String,
}

impl SvgImage {
    pub fn save(&self, path: &Path) -> Result<(), RenderError> {
        std::fs::write(path, &self.document)?;
        Ok(())
    }
}

pub fn render(frequencies: &FrequencyTable, options: &RenderOptions) -> Result<SvgImage, RenderError> {
    if frequencies.is_empty() {
        return Err(RenderError::Empty);
    }

    let font = font_source(options.font_path.as_deref(), options.embed_font)?;

    let ranked = frequencies.ranked();
    let words = &ranked[..ranked.len().min(options.max_words)];
    let params = LayoutParams {
        width: options.width as f32,
        height: options.height as f32,
        max_font_size: options.max_font_size,
        min_font_size: options.min_font_size,
        prefer_horizontal: options.prefer_horizontal,
    };
    let placements = layout::layout(words, &params, &mut Rng::with_seed(options.seed));

    if placements.len() < words.len() {
        debug!(
            placed = placements.len(),
            requested = words.len(),
            "canvas full, remaining words dropped"
        );
    }

    let document = svg::document(
        options.width,
        options.height,
        &options.background,
        &font,
        &placements,
    );
    Ok(SvgImage {
        words: placements.len(),
        document,
    })
}

fn font_source(path: Option<&Path>, embed: bool) -> Result<FontSource, RenderError> {
    let Some(path) = path else {
        return Ok(FontSource::None);
    };
    if !path.is_file() {
        return Err(RenderError::FontNotFound(path.to_path_buf()));
    }

    if embed {
        let bytes = std::fs::read(path)?;
        return Ok(FontSource::Embedded {
            mime: font_mime(path),
            base64: STANDARD.encode(bytes),
        });
    }

    let absolute = std::fs::canonicalize(path)?;
    match url::Url::from_file_path(&absolute) {
        Ok(url) => Ok(FontSource::Url(url.to_string())),
        Err(()) => {
            warn!(path = %absolute.display(), "font path is not representable as a file URL, using system fonts");
            Ok(FontSource::None)
        }
    }
}

fn font_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("otf") => "font/otf",
        Some("ttf") => "font/ttf",
        Some("ttc") => "font/collection",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}
