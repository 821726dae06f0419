// src/extract/resolve.rs
// =============================================================================
// Resolves href values into absolute, fragment-free urls.
//
// Resolution follows RFC 3986 section 5 (what browsers do), via Url::join:
//   base = "http://host/dir/page"
//   "/docs"             -> "http://host/docs"
//   "other"             -> "http://host/dir/other"
//   "//cdn.example/x"   -> "http://cdn.example/x"
//   ""  or "#section"   -> "http://host/dir/page"   (the page itself)
//
// The fragment is dropped afterwards: "page#a" and "page#b" are the same
// resource as far as this tool is concerned.
// =============================================================================

use url::Url;

// Resolves `href` against `base` and strips the fragment
//
// Returns None when the href cannot be turned into a url
// (e.g. "http://[::1" with an unterminated IPv6 host).
pub fn resolve_href(base: &Url, href: &str) -> Option<Url> {
    let mut absolute = base.join(href).ok()?;
    absolute.set_fragment(None);
    Some(absolute)
}

// The form of the source url that resolved hrefs are compared against
//
// Same normalisation as a resolved href gets, so "http://host" and
// "http://host/#top" both match a link to "http://host/".
pub fn self_reference(base: &Url) -> String {
    let mut own = base.clone();
    own.set_fragment(None);
    own.into()
}
