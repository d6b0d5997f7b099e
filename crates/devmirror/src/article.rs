use std::path::Path;

use crate::api::RemoteArticle;
use crate::prelude::*;
use devmirror_core::article::{parse_document, serialize_document, Article, FrontMatter};
use walkdir::WalkDir;

/// Folder where article drafts live by default.
pub const DEFAULT_ARTICLES_FOLDER: &str = "posts";

const ARTICLE_TEMPLATE: &str = include_str!("../assets/article.md");

/// Read and parse one article file.
pub async fn read_article(file: &str) -> Result<Article> {
    let raw = tokio::fs::read_to_string(file)
        .await
        .wrap_err_with(|| f!("Cannot read article {file}"))?;
    parse_document(file, &raw).map_err(|e| eyre!("Invalid front-matter in {}: {}", file, e))
}

/// Serialize an article and write it back to its file, creating parent
/// directories as needed.
pub async fn save_article(article: &Article) -> Result<()> {
    let rendered = serialize_document(article)
        .map_err(|e| eyre!("Cannot serialize front-matter for {}: {}", article.file, e))?;

    if let Some(parent) = Path::new(&article.file).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .wrap_err_with(|| f!("Cannot create folder for {}", article.file))?;
        }
    }

    tokio::fs::write(&article.file, rendered)
        .await
        .wrap_err_with(|| f!("Cannot write article {}", article.file))
}

/// Create a fresh article draft from the embedded template.
pub async fn create_new_article(file: &str) -> Result<()> {
    if tokio::fs::try_exists(file).await.unwrap_or(false) {
        return Err(eyre!("File {} already exists", file));
    }

    if let Some(parent) = Path::new(file).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .wrap_err_with(|| f!("Cannot create folder for {file}"))?;
        }
    }

    tokio::fs::write(file, ARTICLE_TEMPLATE)
        .await
        .wrap_err_with(|| f!("Cannot write article {file}"))
}

/// Collect every markdown file below a path, in stable name order. A
/// path that is itself a markdown file yields just that file.
pub fn find_article_files(root: &str) -> Vec<String> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "md")
        })
        .map(|entry| entry.path().to_string_lossy().into_owned())
        .collect()
}

/// Derive a file path for an article from its title.
pub fn generate_article_filename(mut article: Article) -> Article {
    let title = article.data.title.as_deref().unwrap_or("untitled");
    let slug = slugify(title);
    let slug = if slug.is_empty() { "untitled".into() } else { slug };
    article.file = f!("{DEFAULT_ARTICLES_FOLDER}/{slug}.md");
    article
}

fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Convert remote dev.to data into local articles with front-matter.
///
/// The remote `body_markdown` may itself carry front-matter (editor v1
/// articles); parsed keys win over the remote metadata, which only fills
/// the gaps.
pub fn get_articles_from_remote_data(remote_data: Vec<RemoteArticle>) -> Vec<Article> {
    remote_data.into_iter().map(article_from_remote).collect()
}

fn article_from_remote(remote: RemoteArticle) -> Article {
    let body = remote.body_markdown.unwrap_or_default();
    let parsed = match parse_document("", &body) {
        Ok(article) => article,
        Err(_) => Article {
            file: String::new(),
            data: FrontMatter::default(),
            content: body,
        },
    };

    let tags = if remote.tag_list.is_empty() {
        None
    } else {
        Some(remote.tag_list.join(", "))
    };

    let mut data = parsed.data;
    data.title = data.title.or(Some(remote.title));
    data.description = data.description.or(remote.description);
    data.tags = data.tags.or(tags);
    data.cover_image = data.cover_image.or(remote.cover_image);
    data.published = data.published.or(remote.published);
    data.id = data.id.or(Some(remote.id));
    data.date = data.date.or(remote.published_at);

    Article {
        file: String::new(),
        data,
        content: parsed.content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote_fixture() -> RemoteArticle {
        RemoteArticle {
            id: 42,
            title: "My First Post".into(),
            description: Some("A description".into()),
            cover_image: Some("https://dev.to/cover.png".into()),
            published: Some(true),
            published_at: Some("2024-05-01T10:00:00Z".into()),
            body_markdown: Some("Plain body, no front-matter.".into()),
            tag_list: vec!["rust".into(), "blog".into()],
            page_views_count: Some(1200),
            positive_reactions_count: Some(30),
            comments_count: Some(2),
        }
    }

    #[test]
    fn test_article_from_remote_fills_front_matter() {
        let article = article_from_remote(remote_fixture());
        assert_eq!(article.data.title.as_deref(), Some("My First Post"));
        assert_eq!(article.data.tags.as_deref(), Some("rust, blog"));
        assert_eq!(article.data.id, Some(42));
        assert_eq!(article.data.published, Some(true));
        assert_eq!(article.content, "Plain body, no front-matter.");
    }

    #[test]
    fn test_article_from_remote_prefers_embedded_front_matter() {
        let mut remote = remote_fixture();
        remote.body_markdown =
            Some("---\ntitle: Embedded Title\n---\n\nThe body.".into());
        let article = article_from_remote(remote);
        assert_eq!(article.data.title.as_deref(), Some("Embedded Title"));
        // Gaps still filled from the remote metadata.
        assert_eq!(article.data.id, Some(42));
        assert_eq!(article.content, "The body.");
    }

    #[test]
    fn test_generate_article_filename_slugifies_title() {
        let article = article_from_remote(remote_fixture());
        let article = generate_article_filename(article);
        assert_eq!(article.file, "posts/my-first-post.md");
    }

    #[test]
    fn test_generate_article_filename_without_title() {
        let mut remote = remote_fixture();
        remote.title = "??".into();
        let article = generate_article_filename(article_from_remote(remote));
        assert_eq!(article.file, "posts/untitled.md");
    }

    #[test]
    fn test_slugify_collapses_punctuation() {
        assert_eq!(slugify("Hello, World! (part 2)"), "hello-world-part-2");
        assert_eq!(slugify("  spaced  out  "), "spaced-out");
    }

    #[tokio::test]
    async fn test_create_new_article_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("draft.md");
        let file = file.to_string_lossy().into_owned();

        create_new_article(&file).await.unwrap();
        let written = tokio::fs::read_to_string(&file).await.unwrap();
        assert!(written.starts_with("---"));

        let err = create_new_article(&file).await.unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn test_save_and_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested/post.md");
        let file = file.to_string_lossy().into_owned();

        let mut article = article_from_remote(remote_fixture());
        article.file = file.clone();
        save_article(&article).await.unwrap();

        let reread = read_article(&file).await.unwrap();
        assert_eq!(reread.data, article.data);
        assert_eq!(reread.content.trim_end(), article.content.trim_end());
    }

    #[tokio::test]
    async fn test_find_article_files_filters_markdown() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::create_dir_all(dir.path().join("sub")).await.unwrap();
        tokio::fs::write(dir.path().join("a.md"), "a").await.unwrap();
        tokio::fs::write(dir.path().join("sub/b.md"), "b").await.unwrap();
        tokio::fs::write(dir.path().join("notes.txt"), "n").await.unwrap();

        let files = find_article_files(&dir.path().to_string_lossy());
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.md"));
        assert!(files[1].ends_with("b.md"));
    }
}
