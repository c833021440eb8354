/// Contiguous runs of characters matching `pred`, in text order.
pub(super) fn runs<'a, F>(text: &'a str, pred: F) -> impl Iterator<Item = &'a str> + 'a
where
    F: Fn(char) -> bool + 'a,
{
    let mut rest = text;
    std::iter::from_fn(move || {
        let start = rest.find(|c: char| pred(c))?;
        let tail = &rest[start..];
        let end = tail.find(|c: char| !pred(c)).unwrap_or(tail.len());
        let (run, remaining) = tail.split_at(end);
        rest = remaining;
        Some(run)
    })
}

/// Precomposed Hangul syllables (가..힣).
pub(super) fn is_hangul_syllable(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7A3}')
}

#[cfg_attr(feature = "japanese", allow(dead_code))]
pub(super) fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30A0}'..='\u{30FF}')
}

#[cfg_attr(feature = "japanese", allow(dead_code))]
pub(super) fn is_ideograph(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}')
}
