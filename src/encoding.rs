//! Text I/O with a permissive fallback for pages that are not valid UTF-8.

use std::fs;
use std::path::{Path, PathBuf};

use crate::injector::InjectError;

/// Encoding a page was successfully decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    /// Single-byte fallback. Every byte maps to the code point of the same
    /// value, so arbitrary content can be represented and round-tripped.
    Latin1,
}

/// File content plus the encoding used to decode it. Write-back reuses the
/// same encoding so untouched bytes survive the round trip.
#[derive(Debug, Clone)]
pub struct SourceText {
    pub content: String,
    pub encoding: TextEncoding,
}

/// Read a file as text, trying UTF-8 first and falling back to Latin-1.
pub fn read_text(path: &Path) -> Result<SourceText, InjectError> {
    let bytes = fs::read(path).map_err(|e| InjectError::Read {
        path: path.display().to_string(),
        source: e,
    })?;

    match String::from_utf8(bytes) {
        Ok(content) => Ok(SourceText {
            content,
            encoding: TextEncoding::Utf8,
        }),
        Err(err) => {
            eprintln!(
                "[authpatch] {} is not valid UTF-8, reading as Latin-1",
                path.display()
            );
            let content = decode_latin1(&err.into_bytes());
            Ok(SourceText {
                content,
                encoding: TextEncoding::Latin1,
            })
        }
    }
}

/// Write text back with the encoding it was read with. Content goes to a
/// sibling temp file first and is renamed over the original.
pub fn write_text(path: &Path, text: &SourceText) -> Result<(), InjectError> {
    let bytes = match text.encoding {
        TextEncoding::Utf8 => text.content.clone().into_bytes(),
        TextEncoding::Latin1 => {
            encode_latin1(&text.content).map_err(|character| InjectError::Encode {
                path: path.display().to_string(),
                character,
            })?
        }
    };

    let tmp = sibling_temp_path(path);
    fs::write(&tmp, &bytes).map_err(|e| InjectError::Write {
        path: tmp.display().to_string(),
        source: e,
    })?;

    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        InjectError::Write {
            path: path.display().to_string(),
            source: e,
        }
    })
}

fn sibling_temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn encode_latin1(content: &str) -> Result<Vec<u8>, char> {
    content
        .chars()
        .map(|c| if (c as u32) <= 0xFF { Ok(c as u8) } else { Err(c) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_utf8_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "Hello, 世界").unwrap();

        let text = read_text(&path).unwrap();
        assert_eq!(text.encoding, TextEncoding::Utf8);
        assert_eq!(text.content, "Hello, 世界");
    }

    #[test]
    fn test_read_falls_back_to_latin1() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, b"Caf\xe9 \xff").unwrap();

        let text = read_text(&path).unwrap();
        assert_eq!(text.encoding, TextEncoding::Latin1);
        assert_eq!(text.content, "Café ÿ");
    }

    #[test]
    fn test_latin1_write_round_trips_bytes() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        let original: &[u8] = b"<p>Caf\xe9</p>\xff";
        fs::write(&path, original).unwrap();

        let text = read_text(&path).unwrap();
        write_text(&path, &text).unwrap();

        assert_eq!(fs::read(&path).unwrap(), original);
    }

    #[test]
    fn test_encode_rejects_char_outside_latin1() {
        let text = SourceText {
            content: "snowman \u{2603}".to_string(),
            encoding: TextEncoding::Latin1,
        };
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("page.html");

        let err = write_text(&path, &text).unwrap_err();
        assert!(matches!(
            err,
            InjectError::Encode {
                character: '\u{2603}',
                ..
            }
        ));
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "old").unwrap();

        let text = SourceText {
            content: "new".to_string(),
            encoding: TextEncoding::Utf8,
        };
        write_text(&path, &text).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!sibling_temp_path(&path).exists());
    }
}
