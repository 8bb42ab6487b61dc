//! Video candidates offered on the preview page.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Deserializer, Serialize, de};

/// A video fetched for the user's topic, as returned by the search backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoCandidate {
    /// Watch URL; also the identity of the candidate.
    pub link: String,
    /// Title as delivered by the backend, possibly HTML-escaped.
    pub title: String,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Length in seconds.
    ///
    /// The search backend reports whole seconds, either as an integer or as a
    /// float such as `600.0`.
    #[serde(deserialize_with = "deserialize_whole_seconds")]
    pub duration: u64,
}

impl VideoCandidate {
    /// Title with HTML entities decoded.
    #[must_use]
    pub fn display_title(&self) -> Cow<'_, str> {
        decode_html_entities(&self.title)
    }

    /// Duration badge text (`M:SS`).
    ///
    /// The badge counts from `duration - 1` so a 60 second clip reads `0:59`.
    #[must_use]
    pub fn formatted_duration(&self) -> String {
        let secs = self.duration.saturating_sub(1);
        format!("{}:{:02}", secs / 60, secs % 60)
    }
}

#[allow(
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn deserialize_whole_seconds<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seconds {
        Integer(u64),
        Float(f64),
    }

    match Seconds::deserialize(deserializer)? {
        Seconds::Integer(secs) => Ok(secs),
        Seconds::Float(secs) if secs >= 0.0 && secs.fract() == 0.0 && secs < u64::MAX as f64 => {
            Ok(secs as u64)
        }
        Seconds::Float(secs) => Err(de::Error::custom(format!(
            "invalid duration {secs}, expected a whole number of seconds"
        ))),
    }
}

static ENTITY_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});").ok());

/// Decode the HTML entities found in backend-supplied titles.
///
/// Unknown or invalid entities are left untouched. Decoding is a single pass,
/// so `&amp;lt;` becomes `&lt;`.
#[must_use]
pub fn decode_html_entities(input: &str) -> Cow<'_, str> {
    let Some(re) = ENTITY_RE.as_ref() else {
        return Cow::Borrowed(input);
    };

    re.replace_all(input, |caps: &Captures<'_>| match decode_entity(&caps[1]) {
        Some(c) => c.to_string(),
        None => caps[0].to_string(),
    })
}

fn decode_entity(body: &str) -> Option<char> {
    if let Some(hex) = body
        .strip_prefix("#x")
        .or_else(|| body.strip_prefix("#X"))
    {
        return u32::from_str_radix(hex, 16).ok().map(numeric_reference);
    }
    if let Some(dec) = body.strip_prefix('#') {
        return dec.parse::<u32>().ok().map(numeric_reference);
    }

    let c = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "copy" => '\u{a9}',
        "reg" => '\u{ae}',
        _ => return None,
    };
    Some(c)
}

/// Character for a numeric reference. NUL, surrogates and code points past
/// U+10FFFF become U+FFFD, as in a browser's HTML parser.
fn numeric_reference(code: u32) -> char {
    match code {
        0 => char::REPLACEMENT_CHARACTER,
        _ => char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER),
    }
}
