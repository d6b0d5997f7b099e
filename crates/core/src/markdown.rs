//! Image reference matching and relative URL rewriting.
//!
//! Markdown image syntax is scanned into structured [`ImageRef`] records
//! (full match span, alt text, url, optional title) instead of being
//! patched with ad hoc string substitution. The rewriter splices new URLs
//! into the original content using the recorded spans, so everything
//! around a reference — including a quoted title — is preserved byte for
//! byte. Malformed image syntax simply never matches and is left alone.

use std::ops::Range;

use regex::Regex;

use crate::article::Article;
use crate::path::{convert_path_to_posix, parent_dir, resolve_relative};
use crate::repo::Repository;

/// One markdown image reference found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Byte range of the full `![..](..)` match.
    pub span: Range<usize>,
    /// Byte range of the url inside the match.
    pub url_span: Range<usize>,
    /// Alt text, possibly empty.
    pub alt: String,
    /// Raw url exactly as written.
    pub url: String,
    /// Inner text of a trailing `"title"`, when present.
    pub title: Option<String>,
}

fn image_regex() -> Regex {
    Regex::new(r#"!\[([^\]\n]*)\]\(\s*([^)\s]+)(?:\s+"([^"\n]*)")?\s*\)"#).unwrap()
}

/// Scan content for markdown image references, in document order.
pub fn find_images(content: &str) -> Vec<ImageRef> {
    image_regex()
        .captures_iter(content)
        .map(|caps| {
            let whole = caps.get(0).unwrap();
            let url = caps.get(2).unwrap();
            ImageRef {
                span: whole.start()..whole.end(),
                url_span: url.start()..url.end(),
                alt: caps[1].to_string(),
                url: url.as_str().to_string(),
                title: caps.get(3).map(|m| m.as_str().to_string()),
            }
        })
        .collect()
}

/// True when a reference already carries an http or https scheme.
pub fn is_absolute_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn raw_content_base(repository: &Repository, branch: &str) -> String {
    format!(
        "https://raw.githubusercontent.com/{}/{}/{}",
        repository.user, repository.name, branch
    )
}

/// Rewrite every relative image reference in an article to an absolute
/// raw-content URL for the given repository and branch.
///
/// Absolute URLs are never modified, which makes the rewrite idempotent.
/// The article's `cover_image` front-matter value gets the same treatment
/// when present. All other fields pass through untouched.
pub fn update_relative_image_urls(
    article: Article,
    repository: &Repository,
    branch: &str,
) -> Article {
    let base_dir = parent_dir(&convert_path_to_posix(&article.file)).to_string();
    let base_url = raw_content_base(repository, branch);

    let mut content = String::with_capacity(article.content.len());
    let mut last = 0;
    for image in find_images(&article.content) {
        if is_absolute_url(&image.url) {
            continue;
        }
        content.push_str(&article.content[last..image.url_span.start]);
        content.push_str(&base_url);
        content.push('/');
        content.push_str(&resolve_relative(&base_dir, &image.url));
        last = image.url_span.end;
    }
    content.push_str(&article.content[last..]);

    let mut data = article.data;
    if let Some(cover) = data.cover_image.take() {
        data.cover_image = Some(if is_absolute_url(&cover) {
            cover
        } else {
            format!("{}/{}", base_url, resolve_relative(&base_dir, &cover))
        });
    }

    Article {
        file: article.file,
        data,
        content,
    }
}

/// Collect the raw url of every image reference, in document order,
/// without modification or deduplication.
pub fn get_image_urls(article: &Article) -> Vec<String> {
    find_images(&article.content)
        .into_iter()
        .map(|image| image.url)
        .collect()
}
