//! Search-engine query construction from include/exclude term lists.

use clap::ValueEnum;

/// How included terms are combined. Excluded terms are always subtracted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    #[default]
    And,
    Or,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub mode: Mode,
}

impl Query {
    /// Builds a query from the raw comma-separated form fields.
    pub fn from_fields(include: &str, exclude: &str, mode: Mode) -> Self {
        Self {
            include: parse_terms(include),
            exclude: parse_terms(exclude),
            mode,
        }
    }

    pub fn render(&self) -> String {
        build_query(&self.include, &self.exclude, self.mode)
    }
}

/// Splits a free-text field on commas. No trimming or filtering is applied,
/// so an empty field yields a single empty term.
pub fn parse_terms(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

pub fn build_query<S: AsRef<str>>(include: &[S], exclude: &[S], mode: Mode) -> String {
    let mut parts = Vec::with_capacity(2);

    if !include.is_empty() {
        let terms: Vec<&str> = include.iter().map(AsRef::as_ref).collect();
        match mode {
            Mode::And => parts.push(terms.join(" ")),
            Mode::Or => parts.push(format!("({})", terms.join(" OR "))),
        }
    }

    if !exclude.is_empty() {
        let negated: Vec<String> = exclude
            .iter()
            .map(|term| format!("-{}", term.as_ref().trim()))
            .collect();
        parts.push(negated.join(" "));
    }

    parts.join(" ")
}
