use std::fmt::Write as _;

use super::layout::Placement;

pub(super) const FONT_FAMILY: &str = "NewsCloud";
const FALLBACK_FAMILIES: &str =
    "'Noto Sans CJK KR', 'Noto Sans CJK JP', 'Noto Sans CJK SC', sans-serif";

/// `src` value for the `@font-face` rule, if a font was supplied.
pub(super) enum FontSource {
    None,
    Url(String),
    Embedded { mime: &'static str, base64: String },
}

pub(super) fn document(
    width: u32,
    height: u32,
    background: &str,
    font: &FontSource,
    placements: &[Placement],
) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );

    let families = match font {
        FontSource::None => FALLBACK_FAMILIES.to_string(),
        FontSource::Url(url) => {
            push_font_face(&mut svg, url);
            format!("{FONT_FAMILY}, {FALLBACK_FAMILIES}")
        }
        FontSource::Embedded { mime, base64 } => {
            push_font_face(&mut svg, &format!("data:{mime};base64,{base64}"));
            format!("{FONT_FAMILY}, {FALLBACK_FAMILIES}")
        }
    };

    let _ = writeln!(
        svg,
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        escape_xml(background)
    );
    let _ = writeln!(svg, r#"<g font-family="{families}">"#);
    for p in placements {
        push_word(&mut svg, p);
    }
    svg.push_str("</g>\n</svg>\n");
    svg
}

fn push_font_face(svg: &mut String, src: &str) {
    let _ = writeln!(
        svg,
        "<defs><style>@font-face {{ font-family: '{FONT_FAMILY}'; src: url('{}'); }}</style></defs>",
        escape_xml(src)
    );
}

fn push_word(svg: &mut String, p: &Placement) {
    let b = &p.bounds;
    let fill = format!("hsl({}, 70%, 40%)", p.hue);
    let word = escape_xml(&p.word);
    if p.vertical {
        // rotate(-90) turns the baseline upward; glyphs then extend to the left of it.
        let _ = writeln!(
            svg,
            r#"<text transform="translate({:.1},{:.1}) rotate(-90)" font-size="{:.1}" fill="{fill}">{word}</text>"#,
            b.x + b.width * 0.85,
            b.y + b.height,
            p.font_size
        );
    } else {
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.1}" fill="{fill}">{word}</text>"#,
            b.x,
            b.y + b.height * 0.85,
            p.font_size
        );
    }
}

pub(super) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
