use std::fs;
use std::io::{self, Read};

use tracing::{debug, span, Level};
use url::Url;

use crate::error::Error;

/// Loads the document named by `input`: `-` for stdin, an `http(s)://` or `file://` URL,
/// or otherwise a filesystem path
pub fn load(input: &str) -> Result<String, Error> {
    let span = span!(Level::DEBUG, "Loading resource", input);
    let _enter = span.enter();

    if input == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    match Url::parse(input) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => fetch(&url),
        Ok(url) if url.scheme() == "file" => {
            let path = url.to_file_path().map_err(|_| Error::NotAFile(url.clone()))?;
            Ok(fs::read_to_string(path)?)
        }
        // Relative paths and Windows drive letters are not URLs we can load
        _ => Ok(fs::read_to_string(input)?),
    }
}

fn fetch(url: &Url) -> Result<String, Error> {
    let response = reqwest::blocking::get(url.as_str())?.error_for_status()?;
    debug!(status = %response.status(), "Fetched page");
    Ok(response.text()?)
}

#[cfg(test)]
#[test]
fn test_load_file() {
    let path = std::env::temp_dir().join(format!("tagtree-load-{}.html", std::process::id()));
    fs::write(&path, "<p>hi</p>").unwrap();

    assert_eq!(load(path.to_str().unwrap()).unwrap(), "<p>hi</p>");
    let url = Url::from_file_path(&path).unwrap();
    assert_eq!(load(url.as_str()).unwrap(), "<p>hi</p>");

    fs::remove_file(&path).unwrap();
    assert!(matches!(load(path.to_str().unwrap()), Err(Error::Io(_))));
}
