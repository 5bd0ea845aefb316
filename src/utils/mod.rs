/// The default document appended to directory-style URIs.
pub const INDEX_DOCUMENT: &str = "index.html";

/// Rewrites a directory-style URI to point at the origin's default document.
///
/// A URI counts as directory-style when it ends in `/` or carries no `.`
/// anywhere in its path. In that case `index.html` is appended verbatim, with
/// no separator inserted: `/about/` becomes `/about/index.html`, while
/// `/about` becomes `/aboutindex.html`. Both quirks of the upstream edge
/// function are kept as-is for compatibility: the extensionless branch never
/// gains a `/`, and a dot in *any* segment (`/a.b/c`) suppresses the rewrite
/// even when the final segment has no extension. Not idempotent on the
/// extensionless branch for the same reason.
pub fn normalize_directory_uri(uri: &str) -> String {
    if uri.ends_with('/') || !uri.contains('.') {
        let mut rewritten = String::with_capacity(uri.len() + INDEX_DOCUMENT.len());
        rewritten.push_str(uri);
        rewritten.push_str(INDEX_DOCUMENT);
        rewritten
    } else {
        uri.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_directory_uri;

    #[test]
    fn trailing_slash_gets_index_document() {
        assert_eq!(normalize_directory_uri("/"), "/index.html");
        assert_eq!(normalize_directory_uri("/about/"), "/about/index.html");
        assert_eq!(
            normalize_directory_uri("/deeply/nested/dir/"),
            "/deeply/nested/dir/index.html"
        );
    }

    #[test]
    fn extensionless_uri_gets_index_document_without_separator() {
        // Upstream behavior reproduced literally: no `/` is inserted.
        assert_eq!(normalize_directory_uri("/about"), "/aboutindex.html");
        assert_eq!(normalize_directory_uri("/a/b/c"), "/a/b/cindex.html");
    }

    #[test]
    fn uri_with_extension_is_unchanged() {
        assert_eq!(normalize_directory_uri("/style.css"), "/style.css");
        assert_eq!(normalize_directory_uri("/img/logo.svg"), "/img/logo.svg");
    }

    #[test]
    fn dot_anywhere_in_path_suppresses_the_rewrite() {
        // The check covers the whole path, not the final segment.
        assert_eq!(normalize_directory_uri("/a.b/c"), "/a.b/c");
        assert_eq!(normalize_directory_uri("/v1.2/about"), "/v1.2/about");
    }

    #[test]
    fn trailing_slash_wins_over_the_dot_check() {
        assert_eq!(normalize_directory_uri("/a.b/c/"), "/a.b/c/index.html");
    }

    #[test]
    fn rewrite_is_not_idempotent_on_the_extensionless_branch() {
        let once = normalize_directory_uri("/about");
        assert_eq!(normalize_directory_uri(&once), "/aboutindex.htmlindex.html");

        // The trailing-slash branch, by contrast, converges after one pass.
        let once = normalize_directory_uri("/about/");
        assert_eq!(normalize_directory_uri(&once), "/about/index.html");
    }
}
