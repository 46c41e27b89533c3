//! Business-name extraction from place URLs.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

static SEARCH_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"search/([^/?#]+)").expect("valid search regex"));
static PLACE_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"place/([^/?#]+)").expect("valid place regex"));

/// Pull a business name out of a map URL.
///
/// Prefers the segment after `search/`, then the one after `place/`. The
/// segment is percent-decoded. Returns `None` when neither pattern matches
/// or the decoded segment is blank.
#[must_use]
pub fn extract_business_name(url: &str) -> Option<String> {
    [&*SEARCH_SEGMENT, &*PLACE_SEGMENT]
        .into_iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|segment| {
            percent_decode_str(segment.as_str())
                .decode_utf8_lossy()
                .trim()
                .to_string()
        })
        .filter(|name| !name.is_empty())
}
