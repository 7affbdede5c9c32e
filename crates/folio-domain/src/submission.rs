//! Submission domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::author::{Author, AuthorDirectory};
use crate::config::FolioConfig;
use crate::error::Result;
use crate::locale::{resolve_localized, Blank, Locale, LocaleProvider, LocalizedMap};
use crate::mail::{mailbox, MailFormatter};
use crate::status::SubmissionStatus;
use crate::title::{clean_title, TitleJoiner};
use crate::user::{User, UserDirectory, UserId};

/// Assigned by the store on insert; `0` until then.
pub type SubmissionId = i64;

/// Owning publishing context (a journal, press, ...)
pub type ContextId = i64;

/// Identifier type that is only ever stored, never minted by a plugin
pub const PUBLISHER_ID: &str = "publisher-id";

/// A manuscript moving through the editorial workflow
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Submission {
    pub id: SubmissionId,
    pub context_id: ContextId,
    pub user_id: UserId,

    /// The record's own primary locale
    pub locale: Option<Locale>,
    pub status: SubmissionStatus,
    pub stage_id: Option<u32>,
    /// Last completed intake step
    pub submission_progress: u32,
    pub comments_to_editor: Option<String>,
    pub comments_status: Option<i32>,
    pub hide_author: bool,
    pub pages: Option<String>,
    pub language: Option<String>,
    pub citations: Option<String>,

    // Dates
    pub date_submitted: Option<DateTime<Utc>>,
    pub date_status_modified: Option<DateTime<Utc>>,
    pub last_modified: Option<DateTime<Utc>>,
    pub date_published: Option<DateTime<Utc>>,

    // Title and its derived sort form, kept in step by `set_title`
    title: LocalizedMap<String>,
    clean_title: LocalizedMap<String>,

    // Localized metadata
    pub subtitle: LocalizedMap<String>,
    pub prefix: LocalizedMap<String>,
    pub abstract_text: LocalizedMap<String>,
    pub discipline: LocalizedMap<String>,
    pub subject_class: LocalizedMap<String>,
    pub subject: LocalizedMap<String>,
    pub coverage_geo: LocalizedMap<String>,
    pub coverage_chron: LocalizedMap<String>,
    pub coverage_sample: LocalizedMap<String>,
    pub submission_type: LocalizedMap<String>,
    pub rights: LocalizedMap<String>,
    pub source: LocalizedMap<String>,
    pub sponsor: LocalizedMap<String>,
    pub copyright_notice: LocalizedMap<String>,

    // Cover image
    pub file_name: LocalizedMap<String>,
    pub original_file_name: LocalizedMap<String>,
    pub width: LocalizedMap<u32>,
    pub height: LocalizedMap<u32>,
    pub cover_page_alt_text: LocalizedMap<String>,
    pub show_cover_page: LocalizedMap<bool>,
    pub hide_cover_page_toc: LocalizedMap<bool>,
    pub hide_cover_page_abstract: LocalizedMap<bool>,

    /// Stored public identifiers by type tag
    pub_ids: BTreeMap<String, String>,
}

impl Submission {
    /// Create an unsaved submission for a context and submitting user
    pub fn new(context_id: ContextId, user_id: UserId) -> Self {
        Self {
            context_id,
            user_id,
            ..Self::default()
        }
    }

    pub fn title(&self) -> &LocalizedMap<String> {
        &self.title
    }

    /// Title stored for exactly this locale
    pub fn title_in(&self, locale: &str) -> Option<&str> {
        self.title.get(locale).map(String::as_str)
    }

    /// Title with punctuation stripped, derived from `title`
    pub fn clean_title(&self) -> &LocalizedMap<String> {
        &self.clean_title
    }

    /// Set the title for a locale and re-derive its clean title
    pub fn set_title(&mut self, locale: impl Into<Locale>, title: impl Into<String>) {
        let locale = locale.into();
        let title = title.into();
        self.clean_title.set(locale.clone(), clean_title(&title));
        self.title.set(locale, title);
    }

    /// Drop the title and clean title for a locale
    pub fn remove_title(&mut self, locale: &str) -> Option<String> {
        self.clean_title.remove(locale);
        self.title.remove(locale)
    }

    /// Stored identifier for a type tag; empty values count as absent
    pub fn stored_pub_id(&self, pub_id_type: &str) -> Option<&str> {
        self.pub_ids
            .get(pub_id_type)
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }

    pub fn set_stored_pub_id(&mut self, pub_id_type: impl Into<String>, pub_id: impl Into<String>) {
        self.pub_ids.insert(pub_id_type.into(), pub_id.into());
    }

    /// All stored identifiers as `(type, value)` pairs
    pub fn stored_pub_ids(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pub_ids.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Set `last_modified` to now
    pub fn stamp_modified(&mut self) {
        self.last_modified = Some(Utc::now());
    }

    /// Set `date_status_modified` to now
    pub fn stamp_status_modified(&mut self) {
        self.date_status_modified = Some(Utc::now());
    }

    /// Label key for the current status
    pub fn status_key(&self) -> &'static str {
        self.status.label_key()
    }

    /// Resolve localized fields for a reader.
    ///
    /// Without `preferred`, the provider's active locale is used.
    pub fn localized(
        &self,
        preferred: Option<&str>,
        locales: &dyn LocaleProvider,
    ) -> LocalizedView<'_> {
        let preferred = match preferred {
            Some(locale) => locale.to_string(),
            None => locales.active_locale(),
        };
        LocalizedView {
            submission: self,
            preferred,
        }
    }

    // ===== Author and user helpers =====

    /// Authors in the directory's order
    pub fn authors(&self, authors: &dyn AuthorDirectory) -> Result<Vec<Author>> {
        Ok(authors.authors_by_submission(self.id)?)
    }

    pub fn primary_author(&self, authors: &dyn AuthorDirectory) -> Result<Option<Author>> {
        Ok(authors.primary_contact(self.id)?)
    }

    /// Full (or last) name of the first author
    pub fn first_author(
        &self,
        authors: &dyn AuthorDirectory,
        last_only: bool,
    ) -> Result<Option<String>> {
        Ok(self
            .authors(authors)?
            .first()
            .map(|author| author.name(last_only)))
    }

    /// Every author's name joined with `separator`
    pub fn author_string(
        &self,
        authors: &dyn AuthorDirectory,
        last_only: bool,
        separator: &str,
    ) -> Result<String> {
        let names: Vec<String> = self
            .authors(authors)?
            .iter()
            .map(|author| author.name(last_only))
            .collect();
        Ok(names.join(separator))
    }

    /// Author string joined with the configured `authors.separator`
    pub fn author_string_with(
        &self,
        authors: &dyn AuthorDirectory,
        last_only: bool,
        config: &FolioConfig,
    ) -> Result<String> {
        self.author_string(authors, last_only, &config.authors.separator)
    }

    /// One `Display Name <email>` mailbox per author
    pub fn author_emails(
        &self,
        authors: &dyn AuthorDirectory,
        formatter: &dyn MailFormatter,
    ) -> Result<Vec<String>> {
        Ok(self
            .authors(authors)?
            .iter()
            .map(|author| mailbox(formatter, &author.full_name(), &author.email))
            .collect())
    }

    /// The submitting user's account
    pub fn user(&self, users: &dyn UserDirectory) -> Result<Option<User>> {
        Ok(users.user_by_id(self.user_id)?)
    }
}

/// Localized reads of a submission for one preferred locale
#[derive(Clone, Debug)]
pub struct LocalizedView<'a> {
    submission: &'a Submission,
    preferred: Locale,
}

impl<'a> LocalizedView<'a> {
    pub fn preferred_locale(&self) -> &str {
        &self.preferred
    }

    /// Resolve any localized field of the submission
    pub fn resolve<T: Blank>(&self, field: fn(&Submission) -> &LocalizedMap<T>) -> Option<&'a T> {
        resolve_localized(
            field(self.submission),
            &self.preferred,
            self.submission.locale.as_deref(),
        )
    }

    fn text(&self, field: fn(&Submission) -> &LocalizedMap<String>) -> Option<&'a str> {
        self.resolve(field).map(String::as_str)
    }

    pub fn title(&self) -> Option<&'a str> {
        self.text(|s| &s.title)
    }

    pub fn clean_title(&self) -> Option<&'a str> {
        self.text(|s| &s.clean_title)
    }

    pub fn subtitle(&self) -> Option<&'a str> {
        self.text(|s| &s.subtitle)
    }

    pub fn prefix(&self) -> Option<&'a str> {
        self.text(|s| &s.prefix)
    }

    /// Prefix, title and subtitle assembled for display
    pub fn full_title(&self, joiner: &dyn TitleJoiner) -> Option<String> {
        let mut full = String::new();
        if let Some(prefix) = self.prefix() {
            full.push_str(prefix);
            full.push(' ');
        }
        if let Some(title) = self.title() {
            full.push_str(title);
        }
        if let Some(subtitle) = self.subtitle() {
            full = joiner.join_title_parts(&[full.as_str(), subtitle]);
        }
        let full = full.trim_end();
        if full.is_empty() {
            None
        } else {
            Some(full.to_string())
        }
    }

    pub fn abstract_text(&self) -> Option<&'a str> {
        self.text(|s| &s.abstract_text)
    }

    pub fn discipline(&self) -> Option<&'a str> {
        self.text(|s| &s.discipline)
    }

    pub fn subject_class(&self) -> Option<&'a str> {
        self.text(|s| &s.subject_class)
    }

    pub fn subject(&self) -> Option<&'a str> {
        self.text(|s| &s.subject)
    }

    pub fn coverage_geo(&self) -> Option<&'a str> {
        self.text(|s| &s.coverage_geo)
    }

    pub fn coverage_chron(&self) -> Option<&'a str> {
        self.text(|s| &s.coverage_chron)
    }

    pub fn coverage_sample(&self) -> Option<&'a str> {
        self.text(|s| &s.coverage_sample)
    }

    pub fn submission_type(&self) -> Option<&'a str> {
        self.text(|s| &s.submission_type)
    }

    pub fn rights(&self) -> Option<&'a str> {
        self.text(|s| &s.rights)
    }

    pub fn source(&self) -> Option<&'a str> {
        self.text(|s| &s.source)
    }

    pub fn sponsor(&self) -> Option<&'a str> {
        self.text(|s| &s.sponsor)
    }

    pub fn copyright_notice(&self) -> Option<&'a str> {
        self.text(|s| &s.copyright_notice)
    }

    pub fn file_name(&self) -> Option<&'a str> {
        self.text(|s| &s.file_name)
    }

    pub fn original_file_name(&self) -> Option<&'a str> {
        self.text(|s| &s.original_file_name)
    }

    pub fn cover_page_alt_text(&self) -> Option<&'a str> {
        self.text(|s| &s.cover_page_alt_text)
    }

    pub fn width(&self) -> Option<u32> {
        self.resolve(|s| &s.width).copied()
    }

    pub fn height(&self) -> Option<u32> {
        self.resolve(|s| &s.height).copied()
    }

    pub fn show_cover_page(&self) -> Option<bool> {
        self.resolve(|s| &s.show_cover_page).copied()
    }

    pub fn hide_cover_page_toc(&self) -> Option<bool> {
        self.resolve(|s| &s.hide_cover_page_toc).copied()
    }

    pub fn hide_cover_page_abstract(&self) -> Option<bool> {
        self.resolve(|s| &s.hide_cover_page_abstract).copied()
    }
}
