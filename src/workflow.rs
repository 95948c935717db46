//! The interactive crawl, from conversation listing to materialized files.

use std::io::{BufRead, Write};
use std::time::Duration;

use crate::api::{
    Conversation, Message, MessageFilter, MessagingClient, DIALOG_LIMIT, MESSAGE_WINDOW,
};
use crate::config::Config;
use crate::download::{download_extension, write_captions, DownloadState, GlobalState};
use crate::error::Result;
use crate::fs::get_conversation_folder;
use crate::media::{collect_attachments, index_extensions, Attachment, ExtensionTable};
use crate::output::{
    attachments_table, conversations_table, create_item_bar, create_spinner, extensions_table,
    print_conversation_stats, print_info, print_success, print_table, print_warning,
};
use crate::prompt::{choose, Prompter, CONVERSATION_PROMPTS, EXTENSION_PROMPTS};

/// Messages scanned for one selected conversation.
#[derive(Debug, Clone)]
pub struct ConversationWindow {
    pub conversation: Conversation,
    pub messages: Vec<Message>,
}

/// Extension counts and message windows across the selected conversations.
#[derive(Debug, Clone, Default)]
pub struct AttachmentIndex {
    pub windows: Vec<ConversationWindow>,
    pub extensions: ExtensionTable,
}

impl AttachmentIndex {
    /// Attachments with one of `extensions`, conversation by conversation.
    pub fn attachments(&self, extensions: &[String]) -> Vec<Attachment> {
        self.windows
            .iter()
            .flat_map(|window| collect_attachments(&window.messages, extensions))
            .collect()
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No conversation or no extension was chosen.
    NothingSelected,
    /// The chosen extensions matched no attachment.
    NoAttachments,
    /// The download confirmation was declined.
    Cancelled,
    Completed(GlobalState),
}

/// One run of the crawl: a client, a prompter and the effective configuration.
pub struct Workflow<'a, C: ?Sized, R, W> {
    client: &'a mut C,
    prompter: &'a mut Prompter<R, W>,
    config: &'a Config,
}

impl<'a, C, R, W> Workflow<'a, C, R, W>
where
    C: MessagingClient + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(client: &'a mut C, prompter: &'a mut Prompter<R, W>, config: &'a Config) -> Self {
        Self {
            client,
            prompter,
            config,
        }
    }

    /// Run every stage in order.
    pub async fn run(&mut self) -> Result<Outcome> {
        let conversations = self.load_conversations().await?;
        print_table("Conversations", &conversations_table(&conversations));

        let selected = self.select_conversations(&conversations)?;
        if selected.is_empty() {
            print_warning("No conversation selected.");
            return Ok(Outcome::NothingSelected);
        }

        let index = self.index_attachments(&selected).await?;
        print_table("Extensions", &extensions_table(&index.extensions));
        if index.extensions.is_empty() {
            print_table("Attachments", &attachments_table(&[]));
            print_warning("No attachments found in the selected conversations.");
            return Ok(Outcome::NoAttachments);
        }

        let extensions = self.select_extensions(&index.extensions)?;
        if extensions.is_empty() {
            print_warning("No extension selected.");
            return Ok(Outcome::NothingSelected);
        }

        let attachments = index.attachments(&extensions);
        print_table("Attachments", &attachments_table(&attachments));
        if attachments.is_empty() {
            print_warning("No attachments match the selected extensions.");
            return Ok(Outcome::NoAttachments);
        }

        self.pause().await;

        if !self.confirm("Do you want to download the files? (y/n): ")? {
            print_info("Download process canceled.");
            return Ok(Outcome::Cancelled);
        }

        let stats = self.materialize(&index, &extensions).await?;
        Ok(Outcome::Completed(stats))
    }

    /// List conversations and fill in message counts for groups and channels.
    pub async fn load_conversations(&mut self) -> Result<Vec<Conversation>> {
        let spinner = create_spinner(
            "Fetching conversations...",
            self.config.options.show_progress,
        );
        let mut conversations = self.client.list_conversations(DIALOG_LIMIT).await?;

        for conversation in conversations.iter_mut() {
            if conversation.kind.has_message_count() {
                let total = self.client.total_messages(conversation).await?;
                conversation.total_messages = total;
            }
        }

        spinner.finish_and_clear();
        tracing::debug!("Loaded {} conversations", conversations.len());
        Ok(conversations)
    }

    pub fn select_conversations(
        &mut self,
        conversations: &[Conversation],
    ) -> Result<Vec<Conversation>> {
        choose(self.prompter, &CONVERSATION_PROMPTS, conversations)
    }

    /// Scan the message window of each conversation and count extensions.
    pub async fn index_attachments(
        &mut self,
        conversations: &[Conversation],
    ) -> Result<AttachmentIndex> {
        let mut index = AttachmentIndex::default();

        for conversation in conversations {
            let messages = self
                .client
                .fetch_messages(conversation, MESSAGE_WINDOW, MessageFilter::All)
                .await?;

            let progress = create_item_bar(
                messages.len() as u64,
                "Fetching extensions",
                self.config.options.show_progress,
            );
            let table = index_extensions(&messages, &progress);
            progress.finish_and_clear();

            tracing::debug!(
                "{}: {} messages, {} attachments",
                conversation.display_name(),
                messages.len(),
                table.total()
            );

            index.extensions.merge(&table);
            index.windows.push(ConversationWindow {
                conversation: conversation.clone(),
                messages,
            });
        }

        Ok(index)
    }

    pub fn select_extensions(&mut self, table: &ExtensionTable) -> Result<Vec<String>> {
        choose(self.prompter, &EXTENSION_PROMPTS, &table.extensions())
    }

    /// Wait before asking for confirmation.
    pub async fn pause(&mut self) {
        let seconds = self.config.options.pause_seconds;
        if seconds == 0 {
            return;
        }

        print_info(&format!("Please wait for {} seconds...", seconds));
        tokio::time::sleep(Duration::from_secs(seconds)).await;
    }

    /// Ask a yes/no question unless every answer is assumed to be yes.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        if self.config.options.assume_yes {
            return Ok(true);
        }
        self.prompter.confirm(prompt)
    }

    /// Download the chosen extensions and write captions, conversation by conversation.
    pub async fn materialize(
        &mut self,
        index: &AttachmentIndex,
        extensions: &[String],
    ) -> Result<GlobalState> {
        let mut global = GlobalState::default();

        for window in &index.windows {
            let conversation = &window.conversation;
            let folder = get_conversation_folder(self.config, conversation);
            let mut state = DownloadState::new(conversation.display_name().to_string(), folder);

            print_info(&format!("Processing {}", conversation.display_name()));

            for extension in extensions {
                download_extension(
                    &mut *self.client,
                    self.config,
                    conversation,
                    extension,
                    &mut state,
                )
                .await?;
                print_success(&format!(
                    "Download of {} files is completed.",
                    extension.to_uppercase()
                ));
            }

            if self.config.options.generate_text {
                if self.confirm("Do you want to generate the text files? (y/n): ")? {
                    for extension in extensions {
                        write_captions(
                            self.config,
                            conversation,
                            &window.messages,
                            extension,
                            &mut state,
                        )
                        .await?;
                    }
                    print_success("Text files generated.");
                } else {
                    print_info("Text file generation process canceled.");
                }
            }

            print_conversation_stats(&state);
            global.add_conversation_stats(&state);
        }

        Ok(global)
    }
}
