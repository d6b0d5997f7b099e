use crate::article::{
    create_new_article, generate_article_filename, get_articles_from_remote_data, save_article,
    DEFAULT_ARTICLES_FOLDER,
};
use crate::files::{prompt, replace_in_file};
use crate::prelude::{eprintln, println, *};
use crate::repo::{
    get_branch, get_shorthand_string, has_git_installed, init_git_repository, parse_repository,
    Repository,
};
use colored::Colorize;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};

const WORKFLOW_TEMPLATE: &str = include_str!("../assets/publish.yml");
const WORKFLOW_PATH: &str = ".github/workflows/publish.yml";

#[derive(Debug, Clone, clap::Args)]
pub struct InitOptions {
    /// Import existing articles from dev.to
    #[arg(long)]
    pub pull: bool,

    /// Skip git repository initialization
    #[arg(long)]
    pub skip_git: bool,
}

pub async fn run(options: InitOptions, global: crate::Global) -> Result<()> {
    log::debug!("options: {:?}", options);

    if options.pull && global.devto_key.is_none() {
        return Err(Error::MissingApiKey.into());
    }

    create_github_action(global.repo, global.branch).await?;

    if options.pull {
        let devto_key = global.devto_key.as_deref().ok_or(Error::MissingApiKey)?;

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message("Retrieving articles from dev.to…");
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        let result = import_articles_from_devto(devto_key).await;
        spinner.finish_and_clear();
        result?;
    }

    let articles_folder_exists = tokio::fs::try_exists(DEFAULT_ARTICLES_FOLDER)
        .await
        .unwrap_or(false);
    if !articles_folder_exists {
        let draft = f!("{DEFAULT_ARTICLES_FOLDER}/article.md");
        create_new_article(&draft).await?;
        println!("Created your first article draft in {}!", draft.green());
    }

    if !options.skip_git {
        if has_git_installed().await {
            init_git_repository().await?;
        } else {
            eprintln!(
                "{}",
                "Cannot init git repository, git binary not found".yellow()
            );
        }
    }

    println!("Init done.");
    println!("Take a look at {} for next steps.", WORKFLOW_PATH.green());
    Ok(())
}

/// Write the publish workflow and fill in the repository and branch
/// placeholders, prompting for anything that cannot be resolved.
async fn create_github_action(repo: Option<String>, branch: Option<String>) -> Result<()> {
    let repository = resolve_repository(repo)?;

    let branch = match get_branch(branch).await {
        Some(branch) => branch,
        None => {
            let input = prompt(&f!(
                "{} Enter the target branch: {} ",
                ">".green(),
                "(main)".dimmed()
            ))?;
            if input.is_empty() {
                "main".to_string()
            } else {
                input
            }
        }
    };

    tokio::fs::create_dir_all(".github/workflows")
        .await
        .wrap_err("Cannot create .github/workflows")?;
    tokio::fs::write(WORKFLOW_PATH, WORKFLOW_TEMPLATE)
        .await
        .wrap_err_with(|| f!("Cannot write {WORKFLOW_PATH}"))?;

    replace_in_file(WORKFLOW_PATH, "USERNAME/REPO", &get_shorthand_string(&repository)).await?;
    replace_in_file(WORKFLOW_PATH, "BRANCH", &branch).await?;
    Ok(())
}

fn resolve_repository(repo: Option<String>) -> Result<Repository> {
    if let Some(repository) = repo.as_deref().and_then(parse_repository) {
        return Ok(repository);
    }

    loop {
        let input = prompt(&f!(
            "{} Enter your GitHub repository: {} ",
            ">".green(),
            "(username/repository)".dimmed()
        ))?;
        if let Some(repository) = parse_repository(&input) {
            return Ok(repository);
        }
    }
}

async fn import_articles_from_devto(devto_key: &str) -> Result<()> {
    let client = crate::api::create_client(devto_key)?;
    let remote_data = crate::api::get_all_articles(&client).await?;
    let remote_articles = get_articles_from_remote_data(remote_data);

    println!(
        "Found {} article(s) to import.",
        remote_articles.len().to_string().green()
    );

    // Independent file writes, no ordering guarantee between them.
    let save_tasks = remote_articles.into_iter().map(|article| {
        let article = generate_article_filename(article);
        async move { save_article(&article).await }
    });
    join_all(save_tasks)
        .await
        .into_iter()
        .collect::<Result<Vec<_>>>()?;

    Ok(())
}
