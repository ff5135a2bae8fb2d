use chrono::{DateTime, Datelike, Utc};
use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub static GALLERY: LazyLock<Vec<GalleryImage>> = LazyLock::new(|| load_or_empty("gallery.json"));
pub static PROGRAMS: LazyLock<Vec<Program>> = LazyLock::new(|| load_or_empty("programs.json"));
pub static CONTACTS: LazyLock<Vec<ContactEntry>> =
    LazyLock::new(|| load_or_empty("contacts.json"));
pub static SOCIAL_LINKS: LazyLock<Vec<SocialLink>> =
    LazyLock::new(|| load_or_empty("social.json"));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl GalleryImage {
    pub fn width_or_default(&self) -> u32 {
        self.width.unwrap_or(800)
    }

    pub fn height_or_default(&self) -> u32 {
        self.height.unwrap_or(600)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramDetail {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub title: String,
    pub description: String,
    pub schedule: String,
    pub image: String,
    #[serde(default)]
    pub verse: Option<String>,
    pub details: Vec<ProgramDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub id: String,
    pub label: String,
    pub number: String,
}

impl ContactEntry {
    /// `tel:` link target, with the display spacing removed.
    pub fn tel_href(&self) -> String {
        let digits: String = self.number.split_whitespace().collect();
        format!("tel:{digits}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
}

impl SocialLink {
    pub fn aria_label(&self) -> String {
        format!("Suivez-nous sur {}", self.name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content file {file}: {reason}")]
    ParseError { file: String, reason: String },
}

pub fn load<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|e| ContentError::ParseError {
        file: name.to_string(),
        reason: e.to_string(),
    })
}

fn load_or_empty<T: DeserializeOwned>(name: &str) -> Vec<T> {
    load::<Vec<T>>(name).unwrap_or_else(|e| {
        log::error!("{e}");
        Vec::new()
    })
}

/// Year shown in the footer. Falls back to the current year if `build_time`
/// is not RFC 3339.
pub fn copyright_year(build_time: &str) -> i32 {
    DateTime::parse_from_rfc3339(build_time)
        .map(|dt| dt.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_gallery_content_parses() {
        let images = load::<Vec<GalleryImage>>("gallery.json").expect("gallery should parse");
        assert_eq!(images.len(), 8);
        assert!(images.iter().all(|i| i.src.starts_with("https://")));
        assert!(images.iter().all(|i| !i.alt.is_empty()));

        let ids: HashSet<&str> = images.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), images.len(), "gallery ids must be unique");
    }

    #[test]
    fn test_programs_content_parses() {
        let programs = load::<Vec<Program>>("programs.json").expect("programs should parse");
        assert_eq!(programs.len(), 3);
        assert!(programs.iter().all(|p| !p.details.is_empty()));
        // only the scripture study carries a verse
        assert_eq!(programs.iter().filter(|p| p.verse.is_some()).count(), 1);
    }

    #[test]
    fn test_contact_tel_href() {
        let contacts = load::<Vec<ContactEntry>>("contacts.json").expect("contacts should parse");
        let pastor = contacts
            .iter()
            .find(|c| c.id == "pasteur")
            .expect("pastor should be listed");
        assert_eq!(pastor.tel_href(), "tel:0345420872");
    }

    #[test]
    fn test_missing_content() {
        let res = load::<Vec<GalleryImage>>("nope.json");
        assert_eq!(res, Err(ContentError::NotFound("nope.json".to_string())));
    }

    #[test]
    fn test_image_dimension_defaults() {
        let image = GalleryImage {
            id: "x".to_string(),
            src: "https://example.com/x.jpg".to_string(),
            alt: "x".to_string(),
            caption: None,
            width: Some(1024),
            height: None,
        };
        assert_eq!(image.width_or_default(), 1024);
        assert_eq!(image.height_or_default(), 600);
    }

    #[test]
    fn test_copyright_year() {
        assert_eq!(copyright_year("2025-03-14T09:26:53+03:00"), 2025);
        assert_eq!(copyright_year("not a date"), Utc::now().year());
    }

    #[test]
    fn test_social_links_parse() {
        let links = load::<Vec<SocialLink>>("social.json").expect("social links should parse");
        let names: Vec<&str> = links.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Facebook", "Instagram", "YouTube", "Twitter"]);
        assert!(links.iter().all(|l| l.href.starts_with("https://")));
        assert_eq!(links[2].aria_label(), "Suivez-nous sur YouTube");
    }
}
