//! Terminal host of the folder list views.
//!
//! The console owns one [`FolderListView`] per variant, reads commands line
//! by line and awaits each action before reading the next line. Dialogs,
//! regions and the path picker are played in the terminal; rendered
//! regions also go to the preview hub.

mod command;
mod dialogs;
mod io;
mod picker;
mod surface;

pub use command::{parse_command, Command, HELP};
pub use dialogs::TerminalDialogs;
pub use io::{ConsoleOutput, LineSource};
pub use picker::DirectoryPicker;
pub use surface::ConsoleSurface;

use std::sync::Arc;

use crate::adapters::RestFolderResource;
use crate::cli_output::{format_alert_box, format_folder_table, format_header, format_message_line};
use crate::collection::FolderCollection;
use crate::config::AdminConfig;
use crate::error::{AdminError, AdminResult};
use crate::i18n::MessageBundle;
use crate::preview::PreviewHub;
use crate::template::TemplateStore;
use crate::traits::{FormField, HttpClient, Localizer, Severity, Surface};
use crate::views::{ActionOutcome, FolderListView, FormFlow, ViewCollaborators, ViewVariant};

/// A view together with the console collaborators bound to it.
pub struct ConsoleView {
    pub view: FolderListView,
    pub surface: Arc<ConsoleSurface>,
    pub picker: Arc<DirectoryPicker>,
    loaded: bool,
}

pub struct Console {
    views: Vec<ConsoleView>,
    current: usize,
    dialogs: Arc<TerminalDialogs>,
    localizer: Arc<MessageBundle>,
    input: LineSource,
    output: ConsoleOutput,
}

/// Load the message bundle the configuration asks for.
pub fn load_messages(config: &AdminConfig) -> AdminResult<MessageBundle> {
    match &config.messages_dir {
        Some(dir) => MessageBundle::load(dir, config.locale.as_deref()),
        None => {
            if let Some(locale) = &config.locale {
                tracing::warn!(%locale, "locale set without a messages directory, using English");
            }
            Ok(MessageBundle::embedded())
        }
    }
}

/// Built-in templates, overridden by the configured directory.
pub fn load_templates(config: &AdminConfig) -> AdminResult<TemplateStore> {
    let mut store = TemplateStore::builtin()?;
    if let Some(dir) = &config.templates_dir {
        let count = store.load_dir(dir)?;
        tracing::info!(dir = %dir.display(), count, "loaded template overrides");
    }
    Ok(store)
}

impl Console {
    /// Assemble every view against the server in `config`.
    pub fn from_config<C>(
        config: &AdminConfig,
        client: C,
        hub: Option<PreviewHub>,
        input: LineSource,
        output: ConsoleOutput,
    ) -> AdminResult<Self>
    where
        C: HttpClient + Clone + 'static,
    {
        let templates = load_templates(config)?;
        let localizer = Arc::new(load_messages(config)?);
        let dialogs = Arc::new(TerminalDialogs::new(input.clone(), output.clone()));

        let mut views = Vec::new();
        for variant in ViewVariant::all() {
            let backend = RestFolderResource::new(client.clone(), &config.server_url, variant.kind);
            let surface = Arc::new(ConsoleSurface::new(&variant.name, hub.clone()));
            let picker = Arc::new(DirectoryPicker::new(surface.clone(), output.clone()));
            let collaborators = ViewCollaborators {
                backend: Arc::new(backend),
                surface: surface.clone(),
                dialogs: dialogs.clone(),
                picker: picker.clone(),
                localizer: localizer.clone(),
            };
            let view = FolderListView::new(variant, &templates, FolderCollection::new(), collaborators)?;
            views.push(ConsoleView {
                view,
                surface,
                picker,
                loaded: false,
            });
        }

        Ok(Self {
            views,
            current: 0,
            dialogs,
            localizer,
            input,
            output,
        })
    }

    pub fn current_view(&self) -> &FolderListView {
        &self.views[self.current].view
    }

    pub fn views(&self) -> impl Iterator<Item = &FolderListView> {
        self.views.iter().map(|v| &v.view)
    }

    pub fn output(&self) -> &ConsoleOutput {
        &self.output
    }

    /// Read and execute commands until `quit` or end of input.
    pub async fn run(&mut self) -> AdminResult<()> {
        self.output.line("Holmes admin console. Type help for the commands.");
        self.ensure_loaded().await;
        self.print_state();

        loop {
            self.output
                .prompt(&format!("holmes-admin [{}]> ", self.current_view().name()));
            let Some(line) = self.input.next_line().await? else {
                self.output.line("");
                break;
            };

            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    self.output
                        .line(&format_message_line(&err.user_message(), Severity::Warning));
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }

            match self.execute(command).await {
                Ok(Some(outcome)) => self.print_outcome(&outcome),
                Ok(None) => {}
                Err(err) => {
                    tracing::debug!(code = err.error_code(), "command failed: {}", err);
                    self.output
                        .line(&format_message_line(&err.user_message(), Severity::Warning));
                }
            }
            self.print_state();
        }

        tracing::info!("console closed");
        Ok(())
    }

    /// Execute one command against the current view.
    pub async fn execute(&mut self, command: Command) -> AdminResult<Option<ActionOutcome>> {
        let outcome = match command {
            Command::Help => {
                self.output.line(HELP);
                None
            }
            Command::Views => {
                for (i, entry) in self.views.iter().enumerate() {
                    let marker = if i == self.current { "*" } else { " " };
                    self.output
                        .line(&format!("  {} {}", marker, entry.view.variant()));
                }
                None
            }
            Command::Use(name) => {
                let index = self
                    .views
                    .iter()
                    .position(|v| v.view.name() == name)
                    .ok_or_else(|| {
                        AdminError::Command(format!(
                            "unknown view '{}' (expected one of: {})",
                            name,
                            ViewVariant::NAMES.join(", ")
                        ))
                    })?;
                self.current = index;
                self.ensure_loaded().await
            }
            Command::List | Command::Quit => None,
            Command::Refresh => Some(self.load_current().await),
            Command::Add => {
                let view = &mut self.views[self.current].view;
                let flow = view.variant().flow;
                Some(match flow {
                    FormFlow::Dialog => view.on_add_open(),
                    FormFlow::Inline => view.on_add().await,
                })
            }
            Command::Edit(id) => Some(self.views[self.current].view.on_edit_open(&id).await),
            Command::Set(field, value) => {
                self.views[self.current].surface.set_field(field, &value);
                None
            }
            Command::Save => {
                if !self.form_open() {
                    return Err(AdminError::Command(
                        "no form open, use add or edit first".to_string(),
                    ));
                }
                Some(self.views[self.current].view.on_save().await)
            }
            Command::Close => Some(self.views[self.current].view.on_close()),
            Command::Browse => Some(self.views[self.current].view.on_browse()),
            Command::Pick(index) => {
                let chosen = self.views[self.current].picker.pick(index)?;
                tracing::debug!(path = %chosen.display(), "picked directory");
                None
            }
            Command::Remove(id) => Some(self.views[self.current].view.on_remove(&id).await),
            Command::Show => {
                let entry = &self.views[self.current];
                let html = if entry.loaded {
                    entry.surface.html()
                } else {
                    entry.view.render_html()
                };
                self.output.line(&html);
                None
            }
        };
        Ok(outcome)
    }

    /// Fetch the current view the first time it is shown.
    async fn ensure_loaded(&mut self) -> Option<ActionOutcome> {
        if self.views[self.current].loaded {
            return None;
        }
        Some(self.load_current().await)
    }

    /// Refetch the current view. A failed fetch still renders the region,
    /// so it shows the folders held so far instead of staying blank.
    async fn load_current(&mut self) -> ActionOutcome {
        let entry = &mut self.views[self.current];
        let outcome = entry.view.refresh().await;
        entry.loaded = true;
        if outcome.is_failure() {
            entry.view.render();
        }
        outcome
    }

    /// Whether the current view's form accepts input.
    fn form_open(&self) -> bool {
        let variant = self.views[self.current].view.variant();
        match variant.flow {
            FormFlow::Inline => true,
            FormFlow::Dialog => self
                .dialogs
                .open_modal()
                .map(|(id, _)| id == variant.dialog_id)
                .unwrap_or(false),
        }
    }

    fn print_outcome(&self, outcome: &ActionOutcome) {
        let severity = match outcome {
            // Failures were already shown as an alert or message line.
            ActionOutcome::Failed(_) => return,
            ActionOutcome::Created(_) | ActionOutcome::Updated(_) | ActionOutcome::Removed(_) => {
                Severity::Success
            }
            ActionOutcome::Ignored | ActionOutcome::Declined => Severity::Warning,
            _ => Severity::Info,
        };
        self.output.line(&format_message_line(&outcome.to_string(), severity));
    }

    /// The folder table, then the form while it is open.
    fn print_state(&self) {
        let entry = &self.views[self.current];
        let labels = &entry.view.variant().labels;
        let title = self.localizer.text(&labels.title);
        let name = self.localizer.text(&labels.name);
        let path = self.localizer.text(&labels.path);

        self.output.line(&format_header(&title));
        self.output.line(&format_folder_table(
            ["ID", name.as_str(), path.as_str()],
            entry.view.collection().records(),
        ));

        if self.form_open() {
            self.output.line("");
            for field in [FormField::Id, FormField::Name, FormField::Path] {
                let label = match field {
                    FormField::Id => "id".to_string(),
                    FormField::Name => name.clone(),
                    FormField::Path => path.clone(),
                };
                self.output
                    .line(&format!("  {:<6} {}", label, entry.surface.field(field)));
            }
            if let Some((text, severity)) = self.dialogs.current_message() {
                self.output.line(&format_message_line(&text, severity));
            }
        }
    }

    /// Print an error that stops the console from starting.
    pub fn print_fatal(output: &ConsoleOutput, err: &AdminError) {
        output.line(&format_alert_box(&err.user_message()));
    }
}
