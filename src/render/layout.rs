use fastrand::Rng;

/// Spiral positions tried per word before shrinking it.
const MAX_SPIRAL_STEPS: usize = 4000;
const SPIRAL_STEP: f32 = 0.1;
const FONT_STEP: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    fn within(&self, width: f32, height: f32) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.x + self.width <= width && self.y + self.height <= height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub word: String,
    pub font_size: f32,
    pub bounds: Rect,
    pub vertical: bool,
    pub hue: u16,
}

pub struct LayoutParams {
    pub width: f32,
    pub height: f32,
    pub max_font_size: f32,
    pub min_font_size: f32,
    /// Share of words laid out horizontally.
    pub prefer_horizontal: f32,
}

/// Approximate advance width of `word` in em units. Hangul, kana and
/// ideographs are full-width.
pub fn text_width_em(word: &str) -> f32 {
    word.chars()
        .map(|c| match c {
            '\u{1100}'..='\u{11FF}'
            | '\u{2E80}'..='\u{9FFF}'
            | '\u{AC00}'..='\u{D7A3}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{FF00}'..='\u{FFEF}' => 1.0,
            'A'..='Z' | 'm' | 'w' => 0.7,
            'i' | 'j' | 'l' | 'f' | 't' | 'r' => 0.35,
            _ => 0.55,
        })
        .sum()
}

/// Initial font size from the word's frequency relative to the most frequent word.
pub fn scaled_font_size(count: usize, max_count: usize, params: &LayoutParams) -> f32 {
    let ratio = count as f32 / max_count.max(1) as f32;
    (params.max_font_size * (0.5 * ratio + 0.5)).max(params.min_font_size)
}

/// Places words (most frequent first) on an Archimedean spiral around the
/// canvas centre, shrinking a word until it fits. Stops at the first word
/// that cannot fit at the minimum font size.
pub fn layout(words: &[(&str, usize)], params: &LayoutParams, rng: &mut Rng) -> Vec<Placement> {
    let Some(&(_, max_count)) = words.first() else {
        return Vec::new();
    };

    let mut placed: Vec<Placement> = Vec::with_capacity(words.len());
    for &(word, count) in words {
        let vertical = rng.f32() > params.prefer_horizontal;
        let hue = rng.u16(0..360);
        let phase = rng.f32() * std::f32::consts::TAU;

        let mut font_size = scaled_font_size(count, max_count, params);
        let bounds = loop {
            if font_size < params.min_font_size {
                break None;
            }
            let (w, h) = box_size(word, font_size, vertical);
            if let Some(rect) = find_position(w, h, phase, params, &placed) {
                break Some(rect);
            }
            font_size -= FONT_STEP;
        };

        let Some(bounds) = bounds else {
            break;
        };
        placed.push(Placement {
            word: word.to_string(),
            font_size,
            bounds,
            vertical,
            hue,
        });
    }
    placed
}

fn box_size(word: &str, font_size: f32, vertical: bool) -> (f32, f32) {
    let length = text_width_em(word) * font_size;
    let thickness = font_size * 1.15;
    if vertical {
        (thickness, length)
    } else {
        (length, thickness)
    }
}

fn find_position(
    w: f32,
    h: f32,
    phase: f32,
    params: &LayoutParams,
    placed: &[Placement],
) -> Option<Rect> {
    if w > params.width || h > params.height {
        return None;
    }
    let (cx, cy) = (params.width / 2.0, params.height / 2.0);
    let aspect = params.height / params.width;

    (0..MAX_SPIRAL_STEPS).find_map(|step| {
        let t = step as f32 * SPIRAL_STEP;
        let radius = 2.0 * t;
        let rect = Rect {
            x: cx + radius * (t + phase).cos() - w / 2.0,
            y: cy + radius * aspect * (t + phase).sin() - h / 2.0,
            width: w,
            height: h,
        };
        let free = rect.within(params.width, params.height)
            && !placed.iter().any(|p| p.bounds.intersects(&rect));
        free.then_some(rect)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> LayoutParams {
        LayoutParams {
            width: 800.0,
            height: 600.0,
            max_font_size: 96.0,
            min_font_size: 4.0,
            prefer_horizontal: 0.9,
        }
    }

    fn words() -> Vec<(&'static str, usize)> {
        vec![
            ("economy", 12),
            ("경제", 9),
            ("markets", 7),
            ("東京", 5),
            ("inflation", 4),
            ("growth", 3),
            ("rates", 2),
            ("policy", 1),
        ]
    }

    #[test]
    fn placed_words_do_not_overlap() {
        let placed = layout(&words(), &params(), &mut Rng::with_seed(7));
        assert_eq!(placed.len(), words().len());
        for (i, a) in placed.iter().enumerate() {
            for b in &placed[i + 1..] {
                assert!(!a.bounds.intersects(&b.bounds), "{} overlaps {}", a.word, b.word);
            }
        }
    }

    #[test]
    fn placed_words_stay_on_canvas() {
        let p = params();
        for placement in layout(&words(), &p, &mut Rng::with_seed(3)) {
            assert!(placement.bounds.within(p.width, p.height), "{placement:?}");
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = layout(&words(), &params(), &mut Rng::with_seed(42));
        let b = layout(&words(), &params(), &mut Rng::with_seed(42));
        assert_eq!(a, b);
    }

    #[test]
    fn most_frequent_word_is_largest() {
        let placed = layout(&words(), &params(), &mut Rng::with_seed(1));
        let first = placed[0].font_size;
        assert!(placed.iter().all(|p| p.font_size <= first));
    }

    #[test]
    fn font_size_scales_with_frequency() {
        let p = params();
        assert_eq!(scaled_font_size(10, 10, &p), 96.0);
        assert_eq!(scaled_font_size(0, 10, &p), 48.0);
        assert!(scaled_font_size(5, 10, &p) < scaled_font_size(8, 10, &p));
    }

    #[test]
    fn oversized_word_is_shrunk_to_fit() {
        let p = LayoutParams {
            width: 120.0,
            height: 60.0,
            ..params()
        };
        let placed = layout(&[("internationalization", 1)], &p, &mut Rng::with_seed(0));
        assert_eq!(placed.len(), 1);
        assert!(placed[0].font_size < 96.0);
    }

    #[test]
    fn full_width_scripts_are_wider() {
        assert!(text_width_em("경제") > text_width_em("ab"));
        assert_eq!(text_width_em("東京"), 2.0);
    }

    #[test]
    fn empty_input_places_nothing() {
        assert!(layout(&[], &params(), &mut Rng::with_seed(0)).is_empty());
    }
}
