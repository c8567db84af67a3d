//! Page builder state: load, edit, publish.

use career_types::{Company, CompanyCreate, CompanyUpdate, Failure, PageDraft};
use serde::{Deserialize, Serialize};

pub const PUBLISH_FAILED: &str = "Failed to save. Please try again.";
const LOAD_FAILED: &str = "Could not load this page. Showing defaults.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuilderPhase {
    /// A slug was given and its company is being fetched.
    Loading,
    Editing,
    /// A publish is in flight. Edits still apply to the local draft.
    Saving,
    /// The slug does not name a company.
    Missing,
}

/// What to send to the backend for one publish.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum PublishRequest {
    Create(CompanyCreate),
    Update { slug: String, update: CompanyUpdate },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublishOutcome {
    /// A new company; the builder now answers to the server-assigned slug.
    Created { slug: String },
    Updated,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageBuilder {
    slug: Option<String>,
    phase: BuilderPhase,
    draft: PageDraft,
    live_link_open: bool,
    notice: Option<String>,
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PageBuilder {
    /// Builder for a company that does not exist yet.
    pub fn new() -> Self {
        Self {
            slug: None,
            phase: BuilderPhase::Editing,
            draft: PageDraft::default(),
            live_link_open: false,
            notice: None,
        }
    }

    /// Builder for an existing company. `reveal_link` opens the live link as
    /// soon as the company has loaded (used right after a first publish).
    pub fn for_slug(slug: String, reveal_link: bool) -> Self {
        Self {
            slug: Some(slug),
            phase: BuilderPhase::Loading,
            draft: PageDraft::default(),
            live_link_open: reveal_link,
            notice: None,
        }
    }

    /// Continues with a builder handed over from a first publish when it
    /// belongs to `slug`, so edits made during that publish are kept.
    /// Otherwise starts loading `slug`.
    pub fn resume(handoff: Option<PageBuilder>, slug: String, reveal_link: bool) -> Self {
        match handoff {
            Some(builder) if builder.slug.as_deref() == Some(slug.as_str()) => builder,
            _ => Self::for_slug(slug, reveal_link),
        }
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn phase(&self) -> BuilderPhase {
        self.phase
    }

    pub fn draft(&self) -> &PageDraft {
        &self.draft
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn live_link_open(&self) -> bool {
        self.live_link_open && self.slug.is_some() && self.phase != BuilderPhase::Loading
    }

    /// The company name is fixed once the backend has derived a slug from it.
    pub fn can_edit_name(&self) -> bool {
        self.slug.is_none()
    }

    pub fn loaded(&mut self, company: &Company) {
        if self.phase != BuilderPhase::Loading {
            return;
        }
        self.draft = PageDraft::from_company(company);
        self.phase = BuilderPhase::Editing;
    }

    pub fn load_failed(&mut self, failure: &Failure) {
        if self.phase != BuilderPhase::Loading {
            return;
        }
        if failure.is_not_found() {
            self.phase = BuilderPhase::Missing;
            self.live_link_open = false;
            return;
        }
        self.draft = PageDraft::default();
        self.phase = BuilderPhase::Editing;
        self.notice = Some(LOAD_FAILED.into());
    }

    /// Applies an edit to the draft. Ignored while loading or when the page
    /// is missing.
    pub fn edit(&mut self, apply: impl FnOnce(&mut PageDraft)) -> bool {
        match self.phase {
            BuilderPhase::Editing | BuilderPhase::Saving => {
                apply(&mut self.draft);
                true
            }
            BuilderPhase::Loading | BuilderPhase::Missing => false,
        }
    }

    pub fn set_company_name(&mut self, name: String) -> bool {
        if !self.can_edit_name() {
            return false;
        }
        self.edit(|d| d.set_company_name(name))
    }

    /// Starts a publish of the current draft. `None` if one is already in
    /// flight or there is nothing loaded to publish.
    pub fn begin_publish(&mut self) -> Option<PublishRequest> {
        if self.phase != BuilderPhase::Editing {
            return None;
        }
        self.phase = BuilderPhase::Saving;
        self.notice = None;
        Some(match &self.slug {
            Some(slug) => PublishRequest::Update {
                slug: slug.clone(),
                update: self.draft.to_update(),
            },
            None => PublishRequest::Create(self.draft.to_create()),
        })
    }

    /// Records a successful publish. The local draft is kept as is so edits
    /// made while saving survive.
    pub fn publish_succeeded(&mut self, company: &Company) -> PublishOutcome {
        self.phase = BuilderPhase::Editing;
        self.live_link_open = true;
        match self.slug {
            Some(_) => PublishOutcome::Updated,
            None => {
                self.slug = Some(company.slug.clone());
                PublishOutcome::Created {
                    slug: company.slug.clone(),
                }
            }
        }
    }

    pub fn publish_failed(&mut self, failure: &Failure) {
        self.phase = BuilderPhase::Editing;
        self.notice = Some(match failure {
            Failure::Unauthorized | Failure::Validation(_) => failure.user_message(),
            _ => PUBLISH_FAILED.into(),
        });
    }

    pub fn open_live_link(&mut self) {
        self.live_link_open = true;
    }

    pub fn close_live_link(&mut self) {
        self.live_link_open = false;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Shareable address of the published page.
    pub fn live_url(&self, origin: &str) -> Option<String> {
        self.slug
            .as_ref()
            .map(|slug| format!("{}/{slug}/careers", origin.trim_end_matches('/')))
    }
}
