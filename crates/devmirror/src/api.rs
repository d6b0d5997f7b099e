use crate::prelude::*;
use serde::{Deserialize, Serialize};

const DEVTO_API_BASE: &str = "https://dev.to/api";

/// Articles per page when listing; dev.to caps per_page at 1000.
const PAGE_SIZE: usize = 1000;

/// One article as dev.to returns it. Only the fields devmirror consumes
/// are modeled; everything else is ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteArticle {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub body_markdown: Option<String>,
    #[serde(default)]
    pub tag_list: Vec<String>,
    #[serde(default)]
    pub page_views_count: Option<u64>,
    #[serde(default)]
    pub positive_reactions_count: Option<u64>,
    #[serde(default)]
    pub comments_count: Option<u64>,
}

#[derive(Debug, Serialize)]
struct ArticleRequest<'a> {
    article: ArticleBody<'a>,
}

#[derive(Debug, Serialize)]
struct ArticleBody<'a> {
    body_markdown: &'a str,
}

pub fn get_api_base() -> &'static str {
    DEVTO_API_BASE
}

/// Build an HTTP client authenticated with a dev.to API key.
pub fn create_client(api_key: &str) -> Result<reqwest::Client> {
    use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

    let mut key =
        HeaderValue::from_str(api_key).map_err(|e| eyre!("Invalid API key: {}", e))?;
    key.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert("api-key", key);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}

async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Api { status, body }.into())
}

async fn get_article_page(
    client: &reqwest::Client,
    path: &str,
    page: usize,
) -> Result<Vec<RemoteArticle>> {
    let url = f!("{}{path}?per_page={PAGE_SIZE}&page={page}", get_api_base());
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| eyre!("Failed to fetch articles: {}", e))?;

    check(response)
        .await?
        .json()
        .await
        .map_err(|e| eyre!("Failed to parse articles response: {}", e))
}

async fn get_paginated_articles(
    client: &reqwest::Client,
    path: &str,
) -> Result<Vec<RemoteArticle>> {
    let mut articles = Vec::new();
    let mut page = 1;
    loop {
        let batch = get_article_page(client, path, page).await?;
        let batch_len = batch.len();
        articles.extend(batch);
        if batch_len < PAGE_SIZE {
            break;
        }
        page += 1;
    }
    log::debug!("fetched {} article(s) from {}", articles.len(), path);
    Ok(articles)
}

/// Fetch every article of the authenticated user, drafts included.
pub async fn get_all_articles(client: &reqwest::Client) -> Result<Vec<RemoteArticle>> {
    get_paginated_articles(client, "/articles/me/all").await
}

/// Fetch the published articles of the authenticated user.
pub async fn get_published_articles(client: &reqwest::Client) -> Result<Vec<RemoteArticle>> {
    get_paginated_articles(client, "/articles/me/published").await
}

/// Create a new article from a complete markdown document
/// (front-matter included).
pub async fn create_article(
    client: &reqwest::Client,
    markdown: &str,
) -> Result<RemoteArticle> {
    let url = f!("{}/articles", get_api_base());
    let request = ArticleRequest {
        article: ArticleBody {
            body_markdown: markdown,
        },
    };
    let response = client
        .post(&url)
        .json(&request)
        .send()
        .await
        .map_err(|e| eyre!("Failed to create article: {}", e))?;

    check(response)
        .await?
        .json()
        .await
        .map_err(|e| eyre!("Failed to parse create response: {}", e))
}

/// Update an existing article in place.
pub async fn update_article(
    client: &reqwest::Client,
    id: u64,
    markdown: &str,
) -> Result<RemoteArticle> {
    let url = f!("{}/articles/{id}", get_api_base());
    let request = ArticleRequest {
        article: ArticleBody {
            body_markdown: markdown,
        },
    };
    let response = client
        .put(&url)
        .json(&request)
        .send()
        .await
        .map_err(|e| eyre!("Failed to update article {}: {}", id, e))?;

    check(response)
        .await?
        .json()
        .await
        .map_err(|e| eyre!("Failed to parse update response: {}", e))
}
