use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIMARY_COLOR: &str = "#0f172a";
pub const DEFAULT_HEADER_TITLE: &str = "We are building the future.";
pub const DEFAULT_HEADER_SUBTITLE: &str = "Join our team and help us solve the hardest problems.";

/// A company as persisted by the backend.
///
/// Responses name the branding object `branding_config`; request payloads
/// call it `branding`. Both deserialize into the same [`Branding`] so a
/// published payload and a refetched company compare field for field.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub id: i64,
    pub slug: String,
    pub company_name: String,
    #[serde(rename = "branding_config", alias = "branding", default)]
    pub branding: Branding,
    #[serde(default)]
    pub page_content: PageContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruiter_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Branding {
    #[serde(default)]
    pub primary_color: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PageContent {
    #[serde(default)]
    pub header: Header,
    #[serde(default)]
    pub about_sections: Vec<Section>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Header {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
}

/// One "about" block. Its position in `about_sections` is its identity.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub alignment: Alignment,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

/// Body of `POST /companies`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CompanyCreate {
    pub company_name: String,
    pub branding: Branding,
    pub page_content: PageContent,
}

/// Body of `PATCH /companies/{slug}/edit`. Absent fields are left untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CompanyUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branding: Option<Branding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_content: Option<PageContent>,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            primary_color: DEFAULT_PRIMARY_COLOR.into(),
            logo_url: None,
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self {
            title: DEFAULT_HEADER_TITLE.into(),
            subtitle: DEFAULT_HEADER_SUBTITLE.into(),
        }
    }
}

impl Default for Section {
    fn default() -> Self {
        Self {
            title: "New Section".into(),
            description: "Description...".into(),
            image_url: None,
            alignment: Alignment::Left,
        }
    }
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Right => "right",
        }
    }

    /// Parses the value of the builder's alignment `<select>`.
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "right" => Alignment::Right,
            _ => Alignment::Left,
        }
    }
}

/// Treats an empty or whitespace-only URL as absent.
pub fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_reads_branding_config_from_responses() {
        let json = r##"{
            "id": 7,
            "slug": "acme",
            "company_name": "Acme",
            "recruiter_id": "user-1",
            "branding_config": { "primary_color": "#112233", "logo_url": null },
            "page_content": {
                "header": { "title": "We hire", "subtitle": "Come along" },
                "about_sections": [
                    { "title": "Culture", "description": "Kind people", "alignment": "right" }
                ]
            },
            "created_at": "2025-01-02T03:04:05Z",
            "updated_at": "2025-01-02T03:04:05Z"
        }"##;

        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company.branding.primary_color, "#112233");
        assert_eq!(company.branding.logo_url, None);
        assert_eq!(company.page_content.header.title, "We hire");
        assert_eq!(company.page_content.about_sections[0].alignment, Alignment::Right);
        assert_eq!(company.page_content.about_sections[0].image_url, None);
    }

    #[test]
    fn company_with_empty_json_objects_still_renders() {
        let json = r#"{
            "id": 1,
            "slug": "bare",
            "company_name": "Bare",
            "branding_config": {},
            "page_content": {}
        }"#;

        let company: Company = serde_json::from_str(json).unwrap();
        assert!(company.page_content.about_sections.is_empty());
        assert_eq!(company.branding.logo_url, None);
        assert_eq!(company.page_content.header.title, DEFAULT_HEADER_TITLE);
        assert_eq!(company.branding.primary_color, "");
    }

    #[test]
    fn update_payload_omits_absent_fields() {
        let update = CompanyUpdate {
            branding: None,
            page_content: Some(PageContent::default()),
        };
        let value = serde_json::to_value(&update).unwrap();
        assert!(value.get("branding").is_none());
        assert!(value.get("page_content").is_some());
    }

    #[test]
    fn blank_urls_are_absent() {
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank(""), None);
        assert_eq!(non_blank("https://x/logo.png"), Some("https://x/logo.png".into()));
    }
}
