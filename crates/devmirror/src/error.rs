#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("dev.to API error [{status}]: {body}")]
    Api { status: u16, body: String },

    #[error("No dev.to API key provided. Use --token option or DEVTO_TOKEN env variable to provide one.")]
    MissingApiKey,

    #[error("No GitHub repository provided. Use --repo option or DEVTO_REPO env variable to provide one.")]
    MissingRepository,
}
