//! Printing a random quote or writing prompt.

use crate::config::Config;
use crate::content;
use crate::errors::AppResult;

/// Prints a random inspirational quote.
pub fn show_quote(config: &Config) -> AppResult<()> {
    let quote = content::random_quote(&config.quotes_path());
    println!("\"{}\" - {}", quote.text, quote.author);
    Ok(())
}

/// Prints a random writing prompt.
pub fn show_prompt(config: &Config) -> AppResult<()> {
    let prompt = content::random_prompt(&config.prompts_path());
    println!("{}", prompt.text);
    Ok(())
}
