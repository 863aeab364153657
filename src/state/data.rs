/// Shared data structures for the application state
///
/// These structs represent the meetup data file that flows between
/// the loader and the UI layer. The file is read once at startup
/// (and again when the user opens a different file) and is read-only
/// for the rest of the session.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a meetup data file
#[derive(Debug, Error)]
pub enum DataError {
    #[error("could not read data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("data file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Event metadata shown in the header
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct EventInfo {
    pub title: String,
    pub date: String,
    /// Start time as free text (older data files omit it)
    #[serde(default)]
    pub time: String,
    pub place: String,
    /// Ordered agenda lines
    pub agenda: Vec<String>,
}

/// The talk a speaker gave: a one-liner plus two ordered lists
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Talk {
    pub one_liner: String,
    pub highlights: Vec<String>,
    pub tips: Vec<String>,
}

/// A meetup presenter with associated talk content and practice notes
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Speaker {
    /// Unique key across the speaker collection
    pub id: String,
    pub name: String,
    pub role: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub talk: Talk,
    /// Ordered personal-practice notes
    pub practice: Vec<String>,
    /// Ordered personal-development notes (newer data files only)
    #[serde(default)]
    pub development: Vec<String>,
    /// Reference to an album by identifier
    pub album_id: String,
}

/// A named collection of photo references, optionally tied to one speaker
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Album {
    /// Unique key across the album collection
    pub id: String,
    pub title: String,
    /// Ordered image paths, relative to the assets root
    pub images: Vec<String>,
    /// Weak reference to the owning speaker (relation + lookup, never ownership)
    #[serde(default)]
    pub speaker_id: Option<String>,
}

/// The whole data file: event metadata, speakers, and photo albums
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MeetupData {
    pub event: EventInfo,
    pub speakers: Vec<Speaker>,
    pub albums: Vec<Album>,
}

impl MeetupData {
    /// Look up an album by identifier
    pub fn album(&self, id: &str) -> Option<&Album> {
        self.albums.iter().find(|album| album.id == id)
    }
}

/// Load and parse a meetup data file
///
/// Returns the path back alongside the parsed data so the caller can
/// derive the assets root from the file's directory.
pub async fn load_file(path: PathBuf) -> Result<(PathBuf, MeetupData), String> {
    let data = read_file(&path)
        .await
        .map_err(|e| format!("{}: {}", path.display(), e))?;

    println!(
        "📖 Loaded {}: {} speakers, {} albums",
        path.display(),
        data.speakers.len(),
        data.albums.len()
    );

    Ok((path, data))
}

/// Read and parse one data file
async fn read_file(path: &Path) -> Result<MeetupData, DataError> {
    let text = tokio::fs::read_to_string(path).await?;
    let data = serde_json::from_str(&text)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "event": {
            "title": "Tooling Meetup #4",
            "date": "2025-06-21",
            "place": "Hub 42",
            "agenda": ["Doors open", "Talks", "Photos"]
        },
        "speakers": [{
            "id": "s1",
            "name": "Alice",
            "role": "Engineer",
            "summary": "Shipping faster.",
            "tags": ["tooling"],
            "talk": {
                "one_liner": "Ship it",
                "highlights": ["less is more"],
                "tips": ["automate"]
            },
            "practice": ["Daily review"],
            "album_id": "a1"
        }],
        "albums": [{
            "id": "a1",
            "title": "Talk photos",
            "images": ["assets/a1/001.jpg"],
            "speaker_id": "s1"
        }]
    }"#;

    #[test]
    fn test_parse_sample_document() {
        let data: MeetupData = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(data.event.title, "Tooling Meetup #4");
        assert_eq!(data.speakers.len(), 1);
        assert_eq!(data.albums.len(), 1);
        assert_eq!(data.speakers[0].album_id, "a1");
    }

    #[test]
    fn test_optional_fields_default() {
        // Older data files have no event time and no development notes
        let data: MeetupData = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(data.event.time, "");
        assert!(data.speakers[0].development.is_empty());
        assert_eq!(data.albums[0].speaker_id.as_deref(), Some("s1"));
    }

    #[test]
    fn test_album_lookup() {
        let data: MeetupData = serde_json::from_str(SAMPLE).unwrap();

        assert!(data.album("a1").is_some());
        assert!(data.album("missing").is_none());
    }

    #[tokio::test]
    async fn test_load_missing_file_reports_path() {
        let result = load_file(PathBuf::from("/nonexistent/data.json")).await;

        let err = result.unwrap_err();
        assert!(err.contains("/nonexistent/data.json"));
    }
}
