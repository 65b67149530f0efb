use std::fs;
use super::config::Config;
use super::error::Error;

pub fn load_config(path: &str) -> Result<Config, Error> {
    let text = fs::read_to_string(path)
        .map_err(|source| Error::UnreadableFile(path.to_owned(), source))?;
    let config = serde_yaml::from_str(&text)?;
    Ok(config)
}
