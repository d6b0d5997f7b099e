use std::io::Write;

use crate::prelude::*;

/// Replace every occurrence of a string in a file, in place.
pub async fn replace_in_file(file: &str, from: &str, to: &str) -> Result<()> {
    let content = tokio::fs::read_to_string(file)
        .await
        .wrap_err_with(|| f!("Cannot read {file}"))?;
    tokio::fs::write(file, content.replace(from, to))
        .await
        .wrap_err_with(|| f!("Cannot write {file}"))
}

/// Print a message and read one trimmed line from stdin.
pub fn prompt(message: &str) -> Result<String> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{message}").wrap_err("Cannot write prompt")?;
    stdout.flush().wrap_err("Cannot flush prompt")?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .wrap_err("Cannot read from stdin")?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replace_string_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("dummy.md");
        let file = file.to_string_lossy().into_owned();
        tokio::fs::write(&file, "Lorem ipsum dolor sit amet").await.unwrap();

        replace_in_file(&file, "ipsum", "replaced").await.unwrap();

        let content = tokio::fs::read_to_string(&file).await.unwrap();
        assert_eq!(content, "Lorem replaced dolor sit amet");
    }

    #[tokio::test]
    async fn test_replace_multiple_occurrences_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("dummy.md");
        let file = file.to_string_lossy().into_owned();
        tokio::fs::write(&file, "Lorem ipsum dolor sit amet ipsum bis")
            .await
            .unwrap();

        replace_in_file(&file, "ipsum", "replaced").await.unwrap();

        let content = tokio::fs::read_to_string(&file).await.unwrap();
        assert_eq!(content, "Lorem replaced dolor sit amet replaced bis");
    }

    #[tokio::test]
    async fn test_replace_in_missing_file_is_an_error() {
        let result = replace_in_file("does/not/exist.md", "a", "b").await;
        assert!(result.is_err());
    }
}
