//! CLI runner - executes commands

use crate::account::AccountApiClient;
use crate::cli::commands::{
    AccountCommand, Cli, Commands, ContactsCommand, GroupsCommand, OutputFormat,
};
use crate::config::ClientConfig;
use crate::contacts::ContactsApiClient;
use crate::error::{Error, Result, ResultExt};
use crate::pagination::CursorPager;
use crate::send::{HttpApiSender, LoggingSender, Sender};
use crate::types::{JsonValue, LogLevel};
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Contacts { action } => self.contacts(&config, action).await,
            Commands::Groups { action } => self.groups(&config, action).await,
            Commands::Send {
                to_addr,
                content,
                dry_run,
            } => self.send(&config, to_addr, content, *dry_run).await,
            Commands::Account { action } => self.account(&config, action).await,
        }
    }

    /// Config file, then `GO_HTTP_*` variables, then command-line flags
    fn load_config(&self) -> Result<ClientConfig> {
        let config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => ClientConfig::default(),
        };
        let mut config = config.with_env_overrides();

        if let Some(url) = &self.cli.api_url {
            config.api_url = Some(url.clone());
        }
        if let Some(token) = &self.cli.auth_token {
            config.auth_token = Some(token.clone());
        }
        Ok(config)
    }

    async fn contacts(&self, config: &ClientConfig, action: &ContactsCommand) -> Result<()> {
        let client = ContactsApiClient::from_config(config)?;

        match action {
            ContactsCommand::List {
                start_cursor,
                limit,
            } => {
                self.drain(client.contacts(start_cursor.as_deref()), *limit)
                    .await
            }
            ContactsCommand::Get { key } => self.print(&client.get_contact(key).await?),
            ContactsCommand::Find { field, value } => {
                self.print(&client.get_contact_from_field(field, value).await?)
            }
            ContactsCommand::Create { json } => {
                self.print(&client.create_contact(parse_json(json)?).await?)
            }
            ContactsCommand::Update { key, json } => {
                self.print(&client.update_contact(key, parse_json(json)?).await?)
            }
            ContactsCommand::Delete { key } => self.print(&client.delete_contact(key).await?),
        }
    }

    async fn groups(&self, config: &ClientConfig, action: &GroupsCommand) -> Result<()> {
        let client = ContactsApiClient::from_config(config)?;

        match action {
            GroupsCommand::List {
                start_cursor,
                limit,
            } => {
                self.drain(client.groups(start_cursor.as_deref()), *limit)
                    .await
            }
            GroupsCommand::Get { key } => self.print(&client.get_group(key).await?),
            GroupsCommand::Create { json } => {
                self.print(&client.create_group(parse_json(json)?).await?)
            }
            GroupsCommand::Update { key, json } => {
                self.print(&client.update_group(key, parse_json(json)?).await?)
            }
            GroupsCommand::Delete { key } => self.print(&client.delete_group(key).await?),
        }
    }

    async fn send(
        &self,
        config: &ClientConfig,
        to_addr: &str,
        content: &str,
        dry_run: bool,
    ) -> Result<()> {
        let sender: Box<dyn Sender> = if dry_run {
            Box::new(LoggingSender::new(LogLevel::Info))
        } else {
            Box::new(HttpApiSender::from_config(config)?)
        };

        let result = sender.send(to_addr, content).await?;
        self.print(&result)
    }

    async fn account(&self, config: &ClientConfig, action: &AccountCommand) -> Result<()> {
        let client = AccountApiClient::from_config(config)?;

        let result = match action {
            AccountCommand::Campaigns => client.campaigns().await?,
            AccountCommand::Conversations { campaign_key } => {
                client.conversations(campaign_key).await?
            }
            AccountCommand::RoutingTable { campaign_key } => {
                client.routing_table(campaign_key).await?
            }
        };
        self.print(&result)
    }

    /// Print records until the pager is exhausted or `limit` is reached
    async fn drain(&self, mut pager: CursorPager<'_>, limit: Option<usize>) -> Result<()> {
        let mut count = 0usize;

        while limit.map_or(true, |max| count < max) {
            match pager.next().await {
                Some(Ok(record)) => {
                    self.print(&record)?;
                    count += 1;
                }
                Some(Err(e)) => {
                    match e.resume_cursor() {
                        Some(Some(cursor)) => warn!(
                            "listing stopped after {} records, resume with --start-cursor {}",
                            count, cursor
                        ),
                        Some(None) => warn!(
                            "listing stopped after {} records, rerun without --start-cursor",
                            count
                        ),
                        None => {}
                    }
                    return Err(e);
                }
                None => break,
            }
        }

        info!(
            "{} records from {} pages",
            count,
            pager.state().pages_fetched
        );
        Ok(())
    }

    fn print(&self, value: &JsonValue) -> Result<()> {
        let line = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{line}");
        Ok(())
    }
}

fn parse_json(input: &str) -> Result<JsonValue> {
    let value: JsonValue = serde_json::from_str(input)?;
    if !value.is_object() {
        return Err(Error::Other(format!("expected a JSON object, got: {input}")));
    }
    Ok(value)
}
