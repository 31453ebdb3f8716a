// Rust guideline compliant 2026-02-06

//! Shared state for commands that talk to the remote host.

use anyhow::{Context as _, Result};
use ghdocs_app::{DocsService, GithubClient, IssuesService};
use ghdocs_core::Config;
use std::future::Future;
use tokio::runtime::Runtime;

/// Loaded configuration plus the runtime that drives remote calls.
pub struct AppContext {
    config: Config,
    client: GithubClient,
    runtime: Runtime,
}

impl AppContext {
    /// Builds the HTTP client and a current-thread runtime for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the client or runtime cannot be created.
    pub fn new(config: Config) -> Result<Self> {
        let client = GithubClient::new(&config).context("Failed to create GitHub client")?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;
        Ok(Self {
            config,
            client,
            runtime,
        })
    }

    /// Returns a documentation service over the GitHub client.
    pub fn docs(&self) -> DocsService<GithubClient> {
        DocsService::from_config(self.client.clone(), &self.config)
    }

    /// Returns an issue service over the GitHub client.
    pub fn issues(&self) -> IssuesService<GithubClient> {
        IssuesService::new(self.client.clone())
    }

    /// Runs a future to completion on the context runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}
