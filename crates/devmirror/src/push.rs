use crate::article::{find_article_files, read_article, save_article};
use crate::prelude::{println, *};
use crate::repo::{get_branch, parse_repository};
use colored::Colorize;
use devmirror_core::article::serialize_document;
use devmirror_core::markdown::{get_image_urls, update_relative_image_urls};
use devmirror_core::tags::validate_tags;

#[derive(Debug, Clone, clap::Args)]
pub struct PushOptions {
    /// Files or folders holding the articles to push
    #[arg(default_value = "posts")]
    pub files: Vec<String>,

    /// Validate and rewrite without calling the API
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn run(options: PushOptions, global: crate::Global) -> Result<()> {
    log::debug!("options: {:?}", options);

    let devto_key = global.devto_key.as_deref().ok_or(Error::MissingApiKey)?;
    let repository = global
        .repo
        .as_deref()
        .and_then(parse_repository)
        .ok_or(Error::MissingRepository)?;
    let branch = get_branch(global.branch).await.unwrap_or_else(|| "main".to_string());

    let files: Vec<String> = options
        .files
        .iter()
        .flat_map(|path| find_article_files(path))
        .collect();
    if files.is_empty() {
        println!("No articles to push.");
        return Ok(());
    }

    let client = crate::api::create_client(devto_key)?;

    for file in files {
        let article = read_article(&file).await?;

        // Tag validation is all-or-nothing; surface the core message as-is.
        if let Some(tags) = article.data.tags.as_deref() {
            validate_tags(tags).map_err(|e| eyre!("{}: {}", file, e))?;
        }

        let article = update_relative_image_urls(article, &repository, &branch);
        let markdown = serialize_document(&article)
            .map_err(|e| eyre!("Cannot serialize front-matter for {}: {}", file, e))?;

        if options.dry_run {
            println!(
                "Would push {} ({} image reference(s))",
                file.green(),
                get_image_urls(&article).len()
            );
            continue;
        }

        if global.verbose {
            println!("Pushing {}...", file);
        }

        let remote = match article.data.id {
            Some(id) => crate::api::update_article(&client, id, &markdown).await?,
            None => crate::api::create_article(&client, &markdown).await?,
        };

        // First push: record the assigned id so later pushes update in place.
        if article.data.id.is_none() {
            let mut updated = article.clone();
            updated.data.id = Some(remote.id);
            save_article(&updated).await?;
        }

        println!("Pushed {} (id {}).", file.green(), remote.id);
    }

    Ok(())
}
