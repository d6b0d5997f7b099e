//! The in-memory article model and its front-matter codec.
//!
//! An [`Article`] is one markdown post: the path it was read from, its
//! front-matter data, and the markdown body. Parsing and serialization are
//! pure string transforms; reading and writing files is the shell's job.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Front-matter keys devmirror knows about, plus a catch-all for
/// everything else so unknown keys survive a round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Comma-separated tag line, as dev.to expects it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,

    /// Remote article id, present once the article has been mirrored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(flatten)]
    pub extra: serde_yaml::Mapping,
}

/// One markdown post held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    /// Path-like identifier the article was read from.
    pub file: String,
    /// Parsed front-matter data.
    pub data: FrontMatter,
    /// Markdown body, front-matter fences excluded.
    pub content: String,
}

/// Split a raw markdown document into front-matter and body.
///
/// A document without a leading `---` fence parses to empty front-matter
/// and the whole text as content. A fence that fails to parse as YAML is
/// reported back to the caller.
pub fn parse_document(file: impl Into<String>, raw: &str) -> Result<Article, serde_yaml::Error> {
    let fence = Regex::new(r"(?s)\A\s*---\r?\n(.*?)\r?\n---\r?\n?(.*)\z").unwrap();

    let (data, content) = match fence.captures(raw) {
        Some(caps) => {
            let data: FrontMatter = serde_yaml::from_str(&caps[1])?;
            let content = caps[2].trim_start_matches(['\r', '\n']).to_string();
            (data, content)
        }
        None => (FrontMatter::default(), raw.to_string()),
    };

    Ok(Article {
        file: file.into(),
        data,
        content,
    })
}

/// Render an article back to a markdown document with front-matter fences.
pub fn serialize_document(article: &Article) -> Result<String, serde_yaml::Error> {
    let yaml = serde_yaml::to_string(&article.data)?;
    Ok(format!("---\n{}---\n\n{}", yaml, article.content))
}
