/// Returns true when a `Link` response header advertises a `rel="next"` page.
pub fn has_next_page(headers: &reqwest::header::HeaderMap) -> bool {
    headers
        .get_all(reqwest::header::LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .any(|entry| {
            entry
                .split(';')
                .skip(1)
                .map(str::trim)
                .any(|param| param == "rel=\"next\"" || param == "rel=next")
        })
}

pub fn truncate_for_error(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated = text.chars().take(max_chars).collect::<String>();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::{has_next_page, truncate_for_error};
    use reqwest::header::{HeaderMap, HeaderValue, LINK};

    #[test]
    fn unit_has_next_page_detects_next_relation() {
        let mut headers = HeaderMap::new();
        headers.insert(
            LINK,
            HeaderValue::from_static(
                "<https://api.github.com/user/1/events/public?page=2>; rel=\"next\", <https://api.github.com/user/1/events/public?page=3>; rel=\"last\"",
            ),
        );
        assert!(has_next_page(&headers));
    }

    #[test]
    fn unit_has_next_page_rejects_last_page_and_missing_header() {
        let mut headers = HeaderMap::new();
        assert!(!has_next_page(&headers));

        headers.insert(
            LINK,
            HeaderValue::from_static(
                "<https://api.github.com/user/1/events/public?page=1>; rel=\"first\", <https://api.github.com/user/1/events/public?page=2>; rel=\"prev\"",
            ),
        );
        assert!(!has_next_page(&headers));
    }

    #[test]
    fn regression_truncate_for_error_preserves_unicode_boundaries() {
        assert_eq!(truncate_for_error("ta🌊u", 3), "ta🌊...");
        assert_eq!(truncate_for_error("ok", 10), "ok");
    }
}
