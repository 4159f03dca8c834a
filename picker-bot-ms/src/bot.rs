use picker_common::errors::*;
use picker_common::model::RosterSnapshot;
use picker_common::roster::Roster;

use ::commands::{Invocation, Registry};
use ::params;
use ::transport::{ChatMessage, ChatReply};

use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, new)]
pub struct BotConfig
{
    /// What a message has to start with to be a command
    pub prefix: String,
    /// Reject a whole load file on its first bad line instead of keeping the lines before it
    pub atomic_load: bool,
}

impl Default for BotConfig
{
    fn default() -> BotConfig
    {
        BotConfig::new(String::from(">"), false)
    }
}

impl BotConfig
{
    /// `PICKER_PREFIX` and `PICKER_ATOMIC_LOAD`, looked up through `var`
    pub fn from_vars<F>(var: F) -> BotConfig
        where F: Fn(&str) -> Option<String>
    {
        let defaults = BotConfig::default();

        let prefix = var("PICKER_PREFIX")
            .filter(|prefix| !prefix.trim().is_empty())
            .unwrap_or(defaults.prefix);

        let atomic_load = match var("PICKER_ATOMIC_LOAD")
        {
            Some(value) => match value.trim().to_lowercase().as_str()
            {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ =>
                {
                    warn!("Ignoring PICKER_ATOMIC_LOAD={}, expected true or false", value);
                    defaults.atomic_load
                },
            },
            None => defaults.atomic_load,
        };

        BotConfig::new(prefix, atomic_load)
    }
}

/// Owns the roster and answers chat commands one at a time.
///
/// The lock is held from parsing to the reply so no two commands ever see a half updated roster.
pub struct Bot
{
    config: BotConfig,
    registry: Registry,
    roster: Mutex<Roster>,
}

impl Bot
{
    pub fn new(config: BotConfig) -> Bot
    {
        Bot {
            config,
            registry: Registry::standard(),
            roster: Mutex::new(Roster::new()),
        }
    }

    pub fn config(&self) -> &BotConfig
    {
        &self.config
    }

    /// # Return
    /// * `None` when the message is not a command, otherwise the reply. Failed commands reply with the reason.
    pub fn handle(&self, message: &ChatMessage) -> Option<ChatReply>
    {
        let (command, args) = params::parse_command(&self.config.prefix, &message.content)?;

        let content = match self.execute(&command, &args, message)
        {
            Ok(content) => content,
            Err(error) =>
            {
                warn!("Command {} failed because {}", command, error);
                error.to_string()
            },
        };

        Some(ChatReply::new(content))
    }

    fn execute(&self, command: &str, args: &str, message: &ChatMessage) -> Result<String>
    {
        let mut roster = match self.roster.lock()
        {
            Ok(roster) => roster,
            Err(error) => bail!("Failed to acquire lock because {}", error),
        };

        let invocation = Invocation::new(args, message.attachment.as_ref(), self.config.atomic_load);
        self.registry.dispatch(command, &mut roster, &invocation)
    }

    pub fn snapshot(&self) -> Result<RosterSnapshot>
    {
        match self.roster.lock()
        {
            Ok(roster) => Ok(roster.snapshot()),
            Err(error) => bail!("Failed to acquire lock because {}", error),
        }
    }
}
