use serde::{Deserialize, Serialize};

use crate::company::{
    non_blank, Alignment, Branding, Company, CompanyCreate, CompanyUpdate, Header, PageContent,
    Section, DEFAULT_HEADER_SUBTITLE, DEFAULT_HEADER_TITLE, DEFAULT_PRIMARY_COLOR,
};

/// Editable copy of a company's branding and page content.
///
/// The builder preview renders straight from this value and the publish
/// payload is built from it unchanged, so what the recruiter sees is what
/// gets sent.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PageDraft {
    pub company_name: String,
    pub branding: Branding,
    pub page_content: PageContent,
}

/// A single field change addressed to one section.
#[derive(Clone, Debug, PartialEq)]
pub enum SectionEdit {
    Title(String),
    Description(String),
    ImageUrl(String),
    Alignment(Alignment),
}

impl PageDraft {
    /// Maps a fetched company into a draft, filling blank header and color
    /// fields with the builder defaults.
    pub fn from_company(company: &Company) -> Self {
        let header = &company.page_content.header;
        Self {
            company_name: company.company_name.clone(),
            branding: Branding {
                primary_color: or_default(&company.branding.primary_color, DEFAULT_PRIMARY_COLOR),
                logo_url: company.branding.logo_url.clone(),
            },
            page_content: PageContent {
                header: Header {
                    title: or_default(&header.title, DEFAULT_HEADER_TITLE),
                    subtitle: or_default(&header.subtitle, DEFAULT_HEADER_SUBTITLE),
                },
                about_sections: company.page_content.about_sections.clone(),
            },
        }
    }

    pub fn set_company_name(&mut self, name: String) {
        self.company_name = name;
    }

    pub fn set_primary_color(&mut self, color: String) {
        self.branding.primary_color = color;
    }

    pub fn set_logo_url(&mut self, url: &str) {
        self.branding.logo_url = non_blank(url);
    }

    pub fn set_header_title(&mut self, title: String) {
        self.page_content.header.title = title;
    }

    pub fn set_header_subtitle(&mut self, subtitle: String) {
        self.page_content.header.subtitle = subtitle;
    }

    /// Applies `edit` to the section at `index`. Returns `false` when no such
    /// section exists.
    pub fn update_section(&mut self, index: usize, edit: SectionEdit) -> bool {
        let Some(section) = self.page_content.about_sections.get_mut(index) else {
            return false;
        };
        match edit {
            SectionEdit::Title(title) => section.title = title,
            SectionEdit::Description(description) => section.description = description,
            SectionEdit::ImageUrl(url) => section.image_url = non_blank(&url),
            SectionEdit::Alignment(alignment) => section.alignment = alignment,
        }
        true
    }

    /// Appends a default section and returns its index.
    pub fn add_section(&mut self) -> usize {
        self.page_content.about_sections.push(Section::default());
        self.page_content.about_sections.len() - 1
    }

    /// Removes the section at `index`; every later section moves up by one.
    pub fn remove_section(&mut self, index: usize) -> Option<Section> {
        if index < self.page_content.about_sections.len() {
            Some(self.page_content.about_sections.remove(index))
        } else {
            None
        }
    }

    pub fn to_create(&self) -> CompanyCreate {
        CompanyCreate {
            company_name: self.company_name.clone(),
            branding: self.branding.clone(),
            page_content: self.page_content.clone(),
        }
    }

    pub fn to_update(&self) -> CompanyUpdate {
        CompanyUpdate {
            branding: Some(self.branding.clone()),
            page_content: Some(self.page_content.clone()),
        }
    }
}

fn or_default(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
