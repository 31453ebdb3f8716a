// Rust guideline compliant 2026-02-09

//! Documentation browsing with approximate name lookup.
//!
//! Categories are the directories directly under the configured docs root;
//! documents are the Markdown files inside a category. Callers may name
//! either loosely (`reference` for `04_reference`, `quick start` for
//! `01-quick-start.md`) and the service resolves the name before touching
//! the remote.

use crate::error::{AppError, Result};
use crate::lookup::{lookup_name, Resolution};
use crate::source::DocSource;
use ghdocs_core::{Category, Config, DocEntry, FileContent, ResolverConfig};
use serde::Serialize;

/// Documents of one resolved category.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentListing {
    /// How the category name was resolved.
    pub category: Resolution,
    /// Markdown documents, sorted by name.
    pub documents: Vec<DocEntry>,
}

impl DocumentListing {
    /// Notes about fuzzy lookups, for response envelopes.
    #[must_use]
    pub fn notices(&self) -> Vec<String> {
        self.category.notice("Category").into_iter().collect()
    }
}

/// A fetched document together with how its names were resolved.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// How the category name was resolved.
    pub category: Resolution,
    /// How the document name was resolved.
    pub document: Resolution,
    /// Decoded file.
    pub file: FileContent,
}

impl Document {
    /// Notes about fuzzy lookups, for response envelopes.
    #[must_use]
    pub fn notices(&self) -> Vec<String> {
        self.category
            .notice("Category")
            .into_iter()
            .chain(self.document.notice("Document"))
            .collect()
    }
}

/// Documentation service over a [`DocSource`].
#[derive(Debug, Clone)]
pub struct DocsService<S> {
    source: S,
    docs_path: String,
    resolver: ResolverConfig,
}

impl<S: DocSource> DocsService<S> {
    /// Creates a service rooted at `docs_path`.
    pub fn new(source: S, docs_path: impl Into<String>, resolver: ResolverConfig) -> Self {
        Self {
            source,
            docs_path: docs_path.into().trim_matches('/').to_string(),
            resolver,
        }
    }

    /// Creates a service using the docs root and resolver settings of `config`.
    pub fn from_config(source: S, config: &Config) -> Self {
        Self::new(source, config.docs_path.clone(), config.resolver)
    }

    /// Returns the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Lists documentation categories sorted by directory name.
    ///
    /// # Errors
    ///
    /// Returns an error if the docs root cannot be listed.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let entries = self.source.list_directory(&self.docs_path).await?;
        let mut categories: Vec<Category> = entries
            .iter()
            .filter(|entry| entry.is_dir())
            .map(Category::from_entry)
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    /// Resolves a category name against the current categories.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AppError::NotFound`] with suggestions when no
    /// category is close enough, or a remote error.
    pub async fn resolve_category(&self, requested: &str) -> Result<Resolution> {
        let names: Vec<String> = self
            .list_categories()
            .await?
            .into_iter()
            .map(|category| category.name)
            .collect();
        lookup_name("Category", requested, &names, &self.resolver)
    }

    /// Lists the Markdown documents of a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the category does not resolve or cannot be listed.
    pub async fn list_documents(&self, category: &str) -> Result<DocumentListing> {
        let category = self.resolve_category(category).await?;
        let documents = self.documents_in(&category.matched).await?;
        Ok(DocumentListing {
            category,
            documents,
        })
    }

    /// Resolves a document name within an already resolved category.
    ///
    /// Documents are matched on their file stem, so `.md` and `.mdx` are
    /// never part of the comparison.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AppError::NotFound`] with suggestions when no
    /// document is close enough, or a remote error.
    pub async fn resolve_document(&self, category: &str, requested: &str) -> Result<Resolution> {
        let documents = self.documents_in(category).await?;
        let stems: Vec<&str> = documents.iter().map(|doc| doc.name.as_str()).collect();
        lookup_name("Document", requested, &stems, &self.resolver)
    }

    /// Fetches a document, resolving both the category and document names.
    ///
    /// # Errors
    ///
    /// Returns an error if either name does not resolve, or the file cannot
    /// be fetched or decoded.
    pub async fn get_document(&self, category: &str, document: &str) -> Result<Document> {
        let category = self.resolve_category(category).await?;
        let documents = self.documents_in(&category.matched).await?;
        let stems: Vec<&str> = documents.iter().map(|doc| doc.name.as_str()).collect();
        let resolution = lookup_name("Document", document, &stems, &self.resolver)?;

        let entry = documents
            .iter()
            .find(|doc| doc.name == resolution.matched)
            .ok_or_else(|| AppError::not_found("Document", document, Vec::new()))?;
        let file = self.source.fetch_file(&entry.path).await?;
        tracing::debug!(path = %file.path, bytes = file.content.len(), "fetched document");

        Ok(Document {
            category,
            document: resolution,
            file,
        })
    }

    async fn documents_in(&self, category: &str) -> Result<Vec<DocEntry>> {
        let entries = self
            .source
            .list_directory(&self.category_path(category))
            .await?;
        let mut documents: Vec<DocEntry> = entries.iter().filter_map(DocEntry::from_entry).collect();
        documents.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.file_name.cmp(&b.file_name)));
        // `a.md` and `a.mdx` share a stem; keep the first file name
        documents.dedup_by(|later, kept| later.name == kept.name);
        Ok(documents)
    }

    fn category_path(&self, category: &str) -> String {
        if self.docs_path.is_empty() {
            category.to_string()
        } else {
            format!("{}/{}", self.docs_path, category)
        }
    }
}
