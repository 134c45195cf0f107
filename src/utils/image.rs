use crate::utils::constants::{SANITY_DATASET, SANITY_PROJECT_ID};

/// Resolve a cart-item image reference ("image-<asset>-<dims>-<format>") to
/// a CDN URL. Absolute URLs pass through untouched; anything else is
/// unusable and yields `None`.
pub fn image_url(reference: &str) -> Option<String> {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return Some(reference.to_string());
    }

    let rest = reference.strip_prefix("image-")?;
    let (body, format) = rest.rsplit_once('-')?;
    if body.is_empty() || format.is_empty() {
        return None;
    }

    Some(format!(
        "https://cdn.sanity.io/images/{}/{}/{}.{}",
        SANITY_PROJECT_ID, SANITY_DATASET, body, format
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_reference_to_cdn_url() {
        let url = image_url("image-abc123-2000x3000-jpg").unwrap();
        assert!(url.starts_with("https://cdn.sanity.io/images/"));
        assert!(url.ends_with("/abc123-2000x3000.jpg"));
    }

    #[test]
    fn absolute_urls_pass_through() {
        let url = "https://example.com/pic.png";
        assert_eq!(image_url(url).as_deref(), Some(url));
    }

    #[test]
    fn malformed_references_are_unusable() {
        assert_eq!(image_url("not-an-image"), None);
        assert_eq!(image_url("image-"), None);
        assert_eq!(image_url("image-abc123"), None);
        assert_eq!(image_url(""), None);
    }
}
