//! Address-bar fragment handling

use percent_encoding::percent_decode_str;

/// Route named by an address-bar fragment such as `#labs`
///
/// An empty fragment resolves to `default_route`. The result is not
/// validated; unknown routes are the content loader's concern.
pub fn resolve(fragment: &str, default_route: &str) -> String {
    let raw = fragment.strip_prefix('#').unwrap_or(fragment);
    let route = percent_decode_str(raw).decode_utf8_lossy();

    if route.is_empty() {
        default_route.to_string()
    } else {
        route.into_owned()
    }
}

/// Route targeted by a navigation link's `href`
///
/// Only the part after `#` counts, so `index.html#staff` and `#staff` agree.
pub fn from_href(href: &str) -> String {
    let raw = href.split_once('#').map(|(_, frag)| frag).unwrap_or("");
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_fragment() {
        assert_eq!(resolve("#labs", "about"), "labs");
        assert_eq!(resolve("labs", "about"), "labs");
        assert_eq!(resolve("#course%2Dpolicy", "about"), "course-policy");
    }

    #[test]
    fn test_empty_fragment_uses_default() {
        assert_eq!(resolve("", "about"), "about");
        assert_eq!(resolve("#", "about"), "about");
        assert_eq!(resolve("", "lectures"), "lectures");
        assert_eq!(resolve("#labs", "lectures"), "labs");
    }

    #[test]
    fn test_from_href() {
        assert_eq!(from_href("#staff"), "staff");
        assert_eq!(from_href("index.html#staff"), "staff");
        assert_eq!(from_href("#"), "");
        assert_eq!(from_href("staff.html"), "");
    }

    #[test]
    fn test_href_and_fragment_agree() {
        for encoded in ["#course%2Dpolicy", "index.html#course%2Dpolicy"] {
            assert_eq!(from_href(encoded), "course-policy");
        }
        assert_eq!(
            from_href("#course%2Dpolicy"),
            resolve("#course%2Dpolicy", "about")
        );
    }
}
