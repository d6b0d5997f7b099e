use crate::api::RemoteArticle;
use crate::prelude::{println, *};
use colored::Colorize;
use devmirror_core::scale::scale_number;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

#[derive(Debug, Clone, clap::Args)]
pub struct StatsOptions {
    /// Number of articles to show, most recent first
    #[arg(short, long, default_value = "10")]
    pub number: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleStats {
    pub title: String,
    pub views: u64,
    pub reactions: u64,
    pub comments: u64,
}

/// Reduce remote article data to the displayed counters.
pub fn collect_stats(remote_data: Vec<RemoteArticle>, number: usize) -> Vec<ArticleStats> {
    remote_data
        .into_iter()
        .take(number)
        .map(|article| ArticleStats {
            title: article.title,
            views: article.page_views_count.unwrap_or(0),
            reactions: article.positive_reactions_count.unwrap_or(0),
            comments: article.comments_count.unwrap_or(0),
        })
        .collect()
}

pub async fn run(options: StatsOptions, global: crate::Global) -> Result<()> {
    let devto_key = global.devto_key.as_deref().ok_or(Error::MissingApiKey)?;
    let client = crate::api::create_client(devto_key)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("Retrieving articles from dev.to…");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = crate::api::get_published_articles(&client).await;
    spinner.finish_and_clear();

    let stats = collect_stats(result?, options.number);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    if stats.is_empty() {
        println!("No published articles.");
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Title".bold().cyan(),
        "Views".bold().cyan(),
        "Reactions".bold().cyan(),
        "Comments".bold().cyan()
    ]);

    for entry in &stats {
        table.add_row(prettytable::row![
            entry.title,
            scale_number(entry.views),
            scale_number(entry.reactions),
            scale_number(entry.comments)
        ]);
    }

    table.printstd();
    Ok(())
}
