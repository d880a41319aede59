//! Test fixtures and data generators

/// A well-formed room id that names no stored room
pub const UNKNOWN_ROOM_ID: &str = "507f1f77bcf86cd799439011";

/// Username that is unique across test runs against the same database
pub fn unique_username(prefix: &str) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("{prefix}_{}", &suffix[..12])
}

/// Value of `name="..."` in a rendered page
pub fn page_attr(html: &str, name: &str) -> Option<String> {
    let needle = format!("{name}=\"");
    let start = html.find(&needle)? + needle.len();
    let end = html[start..].find('"')?;
    Some(html[start..start + end].to_string())
}

/// View shown by a rendered page
pub fn page_view(html: &str) -> Option<String> {
    page_attr(html, "data-view")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_attr() {
        let html = r#"<main id="app" data-view="room" data-room="abc">"#;
        assert_eq!(page_view(html).as_deref(), Some("room"));
        assert_eq!(page_attr(html, "data-room").as_deref(), Some("abc"));
        assert_eq!(page_attr(html, "data-online"), None);
    }

    #[test]
    fn test_unique_username() {
        assert_ne!(unique_username("a"), unique_username("a"));
        assert!(unique_username("alice").starts_with("alice_"));
    }
}
