//! Successful invocation outcome and `Link` header pagination.

use serde::Serialize;
use serde_json::Value;
use url::Url;

/// Next and previous page numbers advertised by a `Link` response header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    /// Page number of the `rel="next"` link.
    #[serde(rename = "next_page")]
    pub next: Option<u32>,
    /// Page number of the `rel="prev"` link.
    #[serde(rename = "prev_page")]
    pub prev: Option<u32>,
}

impl PageLinks {
    /// Parses a header such as
    /// `<https://acme.freshservice.com/api/v2/tickets?page=3>; rel="next"`.
    ///
    /// Links without a numeric `page` query parameter and unknown relations
    /// are ignored. Relative link targets are accepted.
    pub fn from_link_header(header: &str) -> Self {
        let mut links = PageLinks::default();

        for entry in header.split(',') {
            let Some((target, params)) = entry.split_once(';') else {
                continue;
            };
            let target = target.trim().trim_start_matches('<').trim_end_matches('>');
            let rel = params
                .split(';')
                .filter_map(|param| param.trim().strip_prefix("rel="))
                .map(|rel| rel.trim_matches('"'))
                .next();

            let Some(page) = Self::page_of(target) else {
                continue;
            };
            match rel {
                Some("next") => links.next = Some(page),
                Some("prev") | Some("previous") => links.prev = Some(page),
                _ => {}
            }
        }

        links
    }

    fn page_of(target: &str) -> Option<u32> {
        let url = Url::parse(target)
            .or_else(|_| Url::parse("http://localhost/").and_then(|base| base.join(target)))
            .ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse().ok())
    }

    /// True if neither link is present.
    pub fn is_empty(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }
}

/// A successful tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// HTTP status returned by Freshservice.
    pub status: u16,
    /// Decoded response body, unchanged. `Null` when the body was empty.
    pub payload: Value,
    /// Pagination parsed from the `Link` header.
    pub links: PageLinks,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_next_and_prev() {
        let header = "<https://acme.freshservice.com/api/v2/tickets?page=3&per_page=30>; rel=\"next\", \
                      <https://acme.freshservice.com/api/v2/tickets?page=1&per_page=30>; rel=\"prev\"";
        let links = PageLinks::from_link_header(header);
        assert_eq!(links.next, Some(3));
        assert_eq!(links.prev, Some(1));
        assert!(!links.is_empty());
    }

    #[test]
    fn test_accepts_relative_targets() {
        let links = PageLinks::from_link_header("</api/v2/agents?query=x&page=2>; rel=\"next\"");
        assert_eq!(links, PageLinks { next: Some(2), prev: None });
    }

    #[test]
    fn test_ignores_garbage() {
        assert!(PageLinks::from_link_header("").is_empty());
        assert!(PageLinks::from_link_header("nonsense").is_empty());
        assert!(PageLinks::from_link_header("<https://x/y?page=abc>; rel=\"next\"").is_empty());
        assert!(PageLinks::from_link_header("<https://x/y?page=2>; rel=\"last\"").is_empty());
    }

    #[test]
    fn test_serializes_with_page_names() {
        let links = PageLinks { next: Some(4), prev: None };
        let json = serde_json::to_value(links).unwrap();
        assert_eq!(json, serde_json::json!({"next_page": 4, "prev_page": null}));
    }
}
