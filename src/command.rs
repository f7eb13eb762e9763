//! The `tfdoc.openDocs` command.
//!
//! One invocation resolves the target under the cursor, builds its registry
//! URL and asks the host to open it. Each step can end the invocation with
//! a [`CommandFailure`], which is shown through the host and returned.

use crate::config::Config;
use crate::error::CommandFailure;
use crate::host::{Editor, Host};
use crate::registry::{build_docs_url_with, NamespaceTable};
use crate::resolver::resolve_target;
use crate::types::DocsLink;
use std::time::Duration;

/// Identifier under which editors register the command.
pub const COMMAND_ID: &str = "tfdoc.openDocs";

/// How long the success message stays visible.
pub const STATUS_MESSAGE_DURATION: Duration = Duration::from_millis(3000);

/// Opens Terraform Registry docs for whatever the cursor points at.
#[derive(Debug, Clone, Default)]
pub struct DocsCommand {
    namespaces: NamespaceTable,
}

impl DocsCommand {
    /// Create a command using the namespace overrides from `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let namespaces = config.namespace_table();
        tracing::debug!(overrides = namespaces.override_count(), "Docs command ready");
        Self { namespaces }
    }

    /// Resolve the target under the editor's cursor and build its URL.
    ///
    /// # Errors
    ///
    /// Returns [`CommandFailure::NoTarget`] when nothing resolves and
    /// [`CommandFailure::UnbuildableUrl`] when the type name has no
    /// registry page.
    pub fn locate(&self, editor: &Editor) -> Result<DocsLink, CommandFailure> {
        let target = resolve_target(editor.document(), editor.cursor()).ok_or(CommandFailure::NoTarget)?;

        let url = build_docs_url_with(&target, &self.namespaces).ok_or_else(|| {
            CommandFailure::UnbuildableUrl {
                type_name: target.type_name.clone(),
            }
        })?;

        Ok(DocsLink { target, url })
    }

    /// Run the command against `host`.
    ///
    /// Failures are reported with `host.show_error_message` before being
    /// returned. On success the host shows a status message.
    ///
    /// # Errors
    ///
    /// Returns the [`CommandFailure`] that ended the invocation.
    pub async fn run<H: Host + ?Sized>(&self, host: &H) -> Result<DocsLink, CommandFailure> {
        match self.open(host).await {
            Ok(link) => {
                tracing::info!(url = %link.url, "Opened Terraform docs");
                host.set_status_bar_message(
                    &format!("Opening Terraform docs for {}...", link.target.type_name),
                    STATUS_MESSAGE_DURATION,
                );
                Ok(link)
            }
            Err(failure) => {
                tracing::debug!(failure = ?failure, "Docs command failed");
                host.show_error_message(&failure.to_string());
                Err(failure)
            }
        }
    }

    async fn open<H: Host + ?Sized>(&self, host: &H) -> Result<DocsLink, CommandFailure> {
        let editor = host.active_editor().ok_or(CommandFailure::NoActiveEditor)?;
        let link = self.locate(editor)?;

        if !host.open_external(&link.url).await {
            return Err(CommandFailure::OpenFailed { url: link.url });
        }
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::TextDocument;
    use crate::types::{BlockKind, Position, TerraformTarget};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Host that records every side effect.
    struct RecordingHost {
        editor: Option<Editor>,
        open_succeeds: bool,
        opened: Mutex<Vec<String>>,
        statuses: Mutex<Vec<(String, Duration)>>,
        errors: Mutex<Vec<String>>,
    }

    impl RecordingHost {
        fn new(editor: Option<Editor>) -> Self {
            Self {
                editor,
                open_succeeds: true,
                opened: Mutex::new(Vec::new()),
                statuses: Mutex::new(Vec::new()),
                errors: Mutex::new(Vec::new()),
            }
        }

        fn with_text(content: &str, position: Position) -> Self {
            Self::new(Some(Editor::new(TextDocument::new(content), position)))
        }

        fn opened(&self) -> Vec<String> {
            self.opened.lock().unwrap().clone()
        }

        fn statuses(&self) -> Vec<(String, Duration)> {
            self.statuses.lock().unwrap().clone()
        }

        fn errors(&self) -> Vec<String> {
            self.errors.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Host for RecordingHost {
        fn active_editor(&self) -> Option<&Editor> {
            self.editor.as_ref()
        }

        async fn open_external(&self, url: &str) -> bool {
            self.opened.lock().unwrap().push(url.to_string());
            self.open_succeeds
        }

        fn set_status_bar_message(&self, message: &str, duration: Duration) {
            self.statuses.lock().unwrap().push((message.to_string(), duration));
        }

        fn show_error_message(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }
    }

    const RESOURCE_LINE: &str = r#"resource "aws_instance" "example" {}"#;

    #[tokio::test]
    async fn test_opens_docs_for_resource_type() {
        let host = RecordingHost::with_text(RESOURCE_LINE, Position::new(0, 11));
        let link = DocsCommand::default().run(&host).await.unwrap();

        assert_eq!(link.target, TerraformTarget::new("aws_instance", BlockKind::Resource));
        assert_eq!(host.errors(), Vec::<String>::new());
        assert_eq!(
            host.opened(),
            vec!["https://registry.terraform.io/providers/hashicorp/aws/latest/docs/resources/instance".to_string()]
        );
        assert_eq!(
            host.statuses(),
            vec![(
                "Opening Terraform docs for aws_instance...".to_string(),
                Duration::from_millis(3000)
            )]
        );
    }

    #[tokio::test]
    async fn test_opens_parameter_anchor() {
        let content = "resource \"aws_instance\" \"example\" {\n  name = \"x\"\n}";
        let host = RecordingHost::with_text(content, Position::new(1, 3));
        DocsCommand::default().run(&host).await.unwrap();

        assert_eq!(
            host.opened(),
            vec!["https://registry.terraform.io/providers/hashicorp/aws/latest/docs/resources/instance#name-1".to_string()]
        );
    }

    #[tokio::test]
    async fn test_no_active_editor() {
        let host = RecordingHost::new(None);
        let failure = DocsCommand::default().run(&host).await.unwrap_err();

        assert_eq!(failure, CommandFailure::NoActiveEditor);
        assert_eq!(host.errors(), vec!["No active editor.".to_string()]);
        assert!(host.opened().is_empty());
        assert!(host.statuses().is_empty());
    }

    #[tokio::test]
    async fn test_cursor_on_block_label() {
        let character = RESOURCE_LINE.find("example").unwrap() + 1;
        let host = RecordingHost::with_text(RESOURCE_LINE, Position::new(0, character));
        let failure = DocsCommand::default().run(&host).await.unwrap_err();

        assert_eq!(failure, CommandFailure::NoTarget);
        assert_eq!(
            host.errors(),
            vec!["Place the cursor on a Terraform resource/data source type string, e.g. \"aws_instance\".".to_string()]
        );
        assert!(host.opened().is_empty());
    }

    #[tokio::test]
    async fn test_open_failure() {
        let mut host = RecordingHost::with_text(RESOURCE_LINE, Position::new(0, 11));
        host.open_succeeds = false;
        let failure = DocsCommand::default().run(&host).await.unwrap_err();

        let url = "https://registry.terraform.io/providers/hashicorp/aws/latest/docs/resources/instance";
        assert_eq!(failure, CommandFailure::OpenFailed { url: url.to_string() });
        assert_eq!(host.errors(), vec![format!("Failed to open {url}.")]);
        assert!(host.statuses().is_empty());
    }

    #[tokio::test]
    async fn test_repeated_runs_are_identical() {
        let host = RecordingHost::with_text(RESOURCE_LINE, Position::new(0, 11));
        let command = DocsCommand::default();
        let first = command.run(&host).await.unwrap();
        let second = command.run(&host).await.unwrap();

        assert_eq!(first, second);
        let opened = host.opened();
        assert_eq!(opened.len(), 2);
        assert_eq!(opened[0], opened[1]);
    }

    #[test]
    fn test_locate_uses_configured_namespaces() {
        let mut config = Config::default();
        config
            .registry
            .namespaces
            .insert("mycorp".to_string(), "MyCorp".to_string());
        let editor = Editor::new(
            TextDocument::new(r#"data "mycorp_widget" "w" {}"#),
            Position::new(0, 8),
        );

        let link = DocsCommand::new(&config).locate(&editor).unwrap();
        assert_eq!(
            link.url,
            "https://registry.terraform.io/providers/MyCorp/mycorp/latest/docs/data-sources/widget"
        );
    }
}
