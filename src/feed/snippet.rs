use rss::Channel;

/// Separator news aggregators use to append the publisher to a headline.
const SOURCE_SEPARATOR: char = '-';

/// The part of a headline before the first source separator, or the whole
/// headline when there is none.
pub fn before_dash(title: &str) -> &str {
    title
        .split_once(SOURCE_SEPARATOR)
        .map_or(title, |(head, _)| head)
}

/// Normalized titles of every item in an RSS 2.0 document, in feed order.
/// Items without a title are skipped.
pub fn parse_titles(body: &[u8]) -> Result<Vec<String>, rss::Error> {
    let channel = Channel::read_from(body)?;
    Ok(channel
        .items()
        .iter()
        .filter_map(|item| item.title())
        .map(|title| before_dash(title).to_string())
        .collect())
}
