use crate::article::create_new_article;
use crate::prelude::{println, *};
use colored::Colorize;

#[derive(Debug, Clone, clap::Args)]
pub struct NewOptions {
    /// Path of the article to create
    #[arg(default_value = "posts/article.md")]
    pub file: String,
}

pub async fn run(options: NewOptions, _global: crate::Global) -> Result<()> {
    create_new_article(&options.file).await?;
    println!("Created {}.", options.file.green());
    Ok(())
}
