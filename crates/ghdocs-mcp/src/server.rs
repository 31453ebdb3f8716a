// Rust guideline compliant 2026-02-09

//! MCP server runtime for ghdocs.

use crate::types::{
    CategoriesResult, EmptyInput, GetDocumentInput, GetIssueInput, IssuesResult,
    ListDocumentsInput, ListIssuesInput, ResolveNameInput, SearchIssuesInput,
};
use ghdocs_app::{
    parse_state, AppError, DocSource, Document, DocumentListing, DocsService, ErrorCode,
    ErrorEnvelope, GithubClient, IssueDetail, IssueQuery, IssuesService, SuccessEnvelope,
};
use ghdocs_core::{resolve, Config, MatchResult, ResolverConfig};
use percent_encoding::percent_decode_str;
use rmcp::handler::server::{router::tool::ToolRouter, wrapper::Parameters};
use rmcp::model::{
    AnnotateAble, CallToolResult, Content, ErrorData, Implementation, ListResourceTemplatesResult,
    ListResourcesResult, PaginatedRequestParams, ProtocolVersion, RawResource,
    RawResourceTemplate, ReadResourceRequestParams, ReadResourceResult, ResourceContents,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::transport::stdio;
use rmcp::{tool, tool_handler, tool_router, RoleServer, ServiceExt};
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

const CATEGORIES_URI: &str = "ghdocs://categories";
const DOCS_URI_PREFIX: &str = "ghdocs://docs/";

/// Runtime options for the MCP server.
#[derive(Debug, Clone)]
pub struct McpOptions {
    /// Optional configuration file; `./ghdocs.toml` is used when absent.
    pub config_path: Option<PathBuf>,
    /// Logging level.
    pub log_level: String,
    /// Optional log file path.
    pub log_file: Option<PathBuf>,
}

impl Default for McpOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

/// MCP server errors.
#[derive(Debug, Error)]
pub enum McpServerError {
    /// IO errors during runtime setup.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid log level provided.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
    /// Configuration or client setup failed.
    #[error(transparent)]
    App(#[from] AppError),
    /// Transport or server errors.
    #[error("MCP server error: {0}")]
    Transport(String),
}

/// Runs the MCP server on stdio.
///
/// # Arguments
///
/// * `options` - MCP runtime options
///
/// # Returns
///
/// Ok if the server exits gracefully.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the runtime cannot be
/// initialized, or the server fails.
pub fn run(options: McpOptions) -> Result<(), McpServerError> {
    let _guard = init_tracing(&options)?;

    let config = Config::load(options.config_path.as_deref()).map_err(AppError::from)?;
    tracing::info!(
        repo = %config.full_repo_name(),
        branch = %config.branch,
        docs_path = %config.docs_path,
        "starting ghdocs MCP server"
    );
    let server = GhdocsMcp::from_config(&config)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let service = server
            .serve(stdio())
            .await
            .map_err(|err| McpServerError::Transport(err.to_string()))?;
        service
            .waiting()
            .await
            .map_err(|err| McpServerError::Transport(err.to_string()))?;
        Ok(())
    })
}

fn init_tracing(options: &McpOptions) -> Result<Option<WorkerGuard>, McpServerError> {
    let level = parse_log_level(&options.log_level)?;

    if let Some(path) = &options.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    // stdout carries the protocol
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .json()
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

/// Parses a log level name (`error`, `warn`, `info`, `debug`).
///
/// # Errors
///
/// Returns [`McpServerError::InvalidLogLevel`] for any other name.
pub fn parse_log_level(level: &str) -> Result<Level, McpServerError> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => Err(McpServerError::InvalidLogLevel(other.to_string())),
    }
}

type SharedSource = Arc<dyn DocSource>;

/// MCP handler exposing documentation and issue lookups.
#[derive(Clone)]
pub struct GhdocsMcp {
    tool_router: ToolRouter<Self>,
    docs: DocsService<SharedSource>,
    issues: IssuesService<SharedSource>,
    resolver: ResolverConfig,
}

impl GhdocsMcp {
    /// Creates a server over an arbitrary source.
    pub fn new(source: SharedSource, config: &Config) -> Self {
        Self {
            tool_router: Self::tool_router(),
            docs: DocsService::from_config(Arc::clone(&source), config),
            issues: IssuesService::new(source),
            resolver: config.resolver,
        }
    }

    /// Creates a server backed by the GitHub API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built from `config`.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = GithubClient::new(config)?;
        Ok(Self::new(Arc::new(client), config))
    }

    fn resolve_name_tool(&self, input: ResolveNameInput) -> Result<MatchResult, AppError> {
        let config = ResolverConfig::new(
            input.threshold.unwrap_or(self.resolver.threshold),
            input
                .max_suggestions
                .unwrap_or(self.resolver.max_suggestions),
        )?;
        Ok(resolve(&input.input, &input.candidates, &config)?)
    }

    async fn list_categories_tool(&self) -> Result<CategoriesResult, AppError> {
        let categories = self.docs.list_categories().await?;
        Ok(CategoriesResult {
            total: categories.len(),
            categories,
        })
    }

    async fn list_documents_tool(
        &self,
        input: ListDocumentsInput,
    ) -> Result<DocumentListing, AppError> {
        self.docs.list_documents(&input.category).await
    }

    async fn get_document_tool(&self, input: GetDocumentInput) -> Result<Document, AppError> {
        self.docs
            .get_document(&input.category, &input.document)
            .await
    }

    async fn list_issues_tool(&self, input: ListIssuesInput) -> Result<IssuesResult, AppError> {
        let query = issue_query(input.state.as_deref(), input.labels, input.limit)?;
        let issues = self.issues.list_issues(&query).await?;
        Ok(IssuesResult {
            total: issues.len(),
            issues,
        })
    }

    async fn get_issue_tool(&self, input: GetIssueInput) -> Result<IssueDetail, AppError> {
        self.issues
            .get_issue(input.number, input.include_comments.unwrap_or(false))
            .await
    }

    async fn search_issues_tool(
        &self,
        input: SearchIssuesInput,
    ) -> Result<IssuesResult, AppError> {
        let query = issue_query(input.state.as_deref(), input.labels, input.limit)?;
        let issues = self.issues.search_issues(&input.query, &query).await?;
        Ok(IssuesResult {
            total: issues.len(),
            issues,
        })
    }
}

#[tool_router(router = tool_router)]
impl GhdocsMcp {
    /// Resolves a name against caller-supplied candidates.
    #[tool(
        name = "resolve_name",
        description = "Resolve an approximate name against a list of known names. Returns the match, a score in [0,1], and suggestions."
    )]
    async fn resolve_name(
        &self,
        params: Parameters<ResolveNameInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self.resolve_name_tool(params.0).map_err(map_app_error)?;
        tool_success(SuccessEnvelope::new(result))
    }

    /// Lists documentation categories.
    #[tool(
        name = "list_categories",
        description = "List documentation categories."
    )]
    async fn list_categories(
        &self,
        _params: Parameters<EmptyInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self.list_categories_tool().await.map_err(map_app_error)?;
        tool_success(SuccessEnvelope::new(result))
    }

    /// Lists the documents of a category.
    #[tool(
        name = "list_documents",
        description = "List the documents of a category. Approximate category names are resolved."
    )]
    async fn list_documents(
        &self,
        params: Parameters<ListDocumentsInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self
            .list_documents_tool(params.0)
            .await
            .map_err(map_app_error)?;
        let notices = result.notices();
        tool_success(SuccessEnvelope::new(result).with_notices(notices))
    }

    /// Fetches a document.
    #[tool(
        name = "get_document",
        description = "Fetch a document by category and name. Approximate names are resolved."
    )]
    async fn get_document(
        &self,
        params: Parameters<GetDocumentInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self
            .get_document_tool(params.0)
            .await
            .map_err(map_app_error)?;
        let notices = result.notices();
        tool_success(SuccessEnvelope::new(result).with_notices(notices))
    }

    /// Lists repository issues.
    #[tool(
        name = "list_issues",
        description = "List repository issues filtered by state and labels."
    )]
    async fn list_issues(
        &self,
        params: Parameters<ListIssuesInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self
            .list_issues_tool(params.0)
            .await
            .map_err(map_app_error)?;
        tool_success(SuccessEnvelope::new(result))
    }

    /// Fetches one issue.
    #[tool(
        name = "get_issue",
        description = "Fetch an issue by number, optionally with comments."
    )]
    async fn get_issue(
        &self,
        params: Parameters<GetIssueInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self.get_issue_tool(params.0).await.map_err(map_app_error)?;
        tool_success(SuccessEnvelope::new(result))
    }

    /// Searches issues.
    #[tool(
        name = "search_issues",
        description = "Search repository issues by free text."
    )]
    async fn search_issues(
        &self,
        params: Parameters<SearchIssuesInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self
            .search_issues_tool(params.0)
            .await
            .map_err(map_app_error)?;
        tool_success(SuccessEnvelope::new(result))
    }
}

#[tool_handler(router = self.tool_router)]
impl rmcp::ServerHandler for GhdocsMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: "ghdocs".to_string(),
                title: Some("ghdocs MCP".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Browse repository documentation and issues. Category and document names may be approximate."
                    .to_string(),
            ),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        let categories = RawResource {
            uri: CATEGORIES_URI.to_string(),
            name: "categories".to_string(),
            title: Some("Documentation categories".to_string()),
            description: Some("Documentation categories sorted by name".to_string()),
            mime_type: Some("application/json".to_string()),
            size: None,
            icons: None,
            meta: None,
        }
        .no_annotation();

        Ok(ListResourcesResult::with_all_items(vec![categories]))
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, ErrorData> {
        let template = RawResourceTemplate {
            uri_template: format!("{}{{category}}/{{document}}", DOCS_URI_PREFIX),
            name: "document".to_string(),
            title: Some("Document".to_string()),
            description: Some("Read a document; approximate names are resolved".to_string()),
            mime_type: Some("text/markdown".to_string()),
            icons: None,
        }
        .no_annotation();

        Ok(ListResourceTemplatesResult::with_all_items(vec![template]))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        self.read_resource_by_uri(request.uri.as_str()).await
    }
}

impl GhdocsMcp {
    async fn read_resource_by_uri(&self, uri: &str) -> Result<ReadResourceResult, ErrorData> {
        if uri == CATEGORIES_URI {
            let categories = self.list_categories_tool().await.map_err(map_app_error)?;
            let payload = serde_json::to_string(&categories).map_err(|err| {
                ErrorData::internal_error(
                    "Failed to serialize resource",
                    Some(err.to_string().into()),
                )
            })?;
            return Ok(text_resource(uri, "application/json", payload));
        }

        if let Some(rest) = uri.strip_prefix(DOCS_URI_PREFIX) {
            if let Some((category, document)) = rest.split_once('/') {
                if !category.is_empty() && !document.is_empty() && !document.contains('/') {
                    let category = decode_segment(uri, category)?;
                    let document = decode_segment(uri, document)?;
                    let found = self
                        .docs
                        .get_document(&category, &document)
                        .await
                        .map_err(map_app_error)?;
                    return Ok(text_resource(uri, "text/markdown", found.file.content));
                }
            }
        }

        Err(ErrorData::resource_not_found(
            "Resource not found",
            Some(serde_json::json!({
                "uri": uri,
            })),
        ))
    }
}

fn decode_segment(uri: &str, segment: &str) -> Result<String, ErrorData> {
    percent_decode_str(segment)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| {
            ErrorData::invalid_params(
                "Resource path is not valid UTF-8",
                Some(serde_json::json!({ "uri": uri })),
            )
        })
}

fn text_resource(uri: &str, mime_type: &str, text: String) -> ReadResourceResult {
    ReadResourceResult {
        contents: vec![ResourceContents::TextResourceContents {
            uri: uri.to_string(),
            mime_type: Some(mime_type.to_string()),
            text,
            meta: None,
        }],
    }
}

fn tool_success<T: Serialize>(envelope: SuccessEnvelope<T>) -> Result<CallToolResult, ErrorData> {
    let payload = serde_json::to_string(&envelope).map_err(|err| {
        ErrorData::internal_error("Failed to serialize response", Some(err.to_string().into()))
    })?;
    Ok(CallToolResult::success(vec![Content::text(payload)]))
}

fn issue_query(
    state: Option<&str>,
    labels: Option<Vec<String>>,
    limit: Option<usize>,
) -> Result<IssueQuery, AppError> {
    let mut query = IssueQuery::default();
    if let Some(state) = state {
        query.state = parse_state(state)?;
    }
    if let Some(labels) = labels {
        query.labels = labels;
    }
    if let Some(limit) = limit {
        if limit == 0 {
            return Err(AppError::InvalidInput(
                "limit must be at least 1".to_string(),
            ));
        }
        query.limit = limit;
    }
    Ok(query)
}

fn map_app_error(error: AppError) -> ErrorData {
    let envelope = ErrorEnvelope::from_error(&error);
    let data = serde_json::to_value(&envelope).ok();
    match envelope.code {
        ErrorCode::NotFound => ErrorData::resource_not_found(envelope.message, data),
        ErrorCode::InvalidInput | ErrorCode::InvalidConfig => {
            ErrorData::invalid_params(envelope.message, data)
        }
        ErrorCode::RemoteError
        | ErrorCode::TransportError
        | ErrorCode::DecodeError
        | ErrorCode::IoError
        | ErrorCode::JsonError => ErrorData::internal_error(envelope.message, data),
    }
}
