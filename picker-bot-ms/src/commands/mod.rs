pub mod names;
pub mod skills;
pub mod teams;
pub mod files;
pub mod info;

use picker_common::errors::*;
use picker_common::model::Team;
use picker_common::roster::Roster;

use ::transport::Attachment;

use std::collections::BTreeMap;

/// What a handler gets besides the roster
#[derive(Debug, Clone, new)]
pub struct Invocation<'a>
{
    /// Everything after the command name
    pub args: &'a str,
    pub attachment: Option<&'a Attachment>,
    /// Bulk loads leave the roster untouched on failure instead of keeping the lines before it
    pub atomic_load: bool,
}

pub type Handler = fn(&mut Roster, &Invocation) -> Result<String>;

/// Command name to handler. Names are matched exactly, the way they are typed.
pub struct Registry
{
    handlers: BTreeMap<&'static str, Handler>,
}

impl Registry
{
    pub fn new() -> Registry
    {
        Registry {
            handlers: BTreeMap::new(),
        }
    }

    /// Every command the bot answers to
    pub fn standard() -> Registry
    {
        let mut registry = Registry::new();

        registry.register("shuffle", teams::shuffle);
        registry.register("teams", teams::teams);
        registry.register("switch", teams::switch);

        registry.register("add", names::add);
        registry.register("remove", names::remove);
        registry.register("list", names::list);
        registry.register("clear", names::clear);

        registry.register("addSkill", skills::add_skill);
        registry.register("changeSkill", skills::change_skill);
        registry.register("viewSkill", skills::view_skill);

        registry.register("load", files::load);
        registry.register("save", files::save);

        registry.register("example", info::example);
        registry.register("help", info::help);

        registry
    }

    pub fn register(&mut self, name: &'static str, handler: Handler)
    {
        if self.handlers.insert(name, handler).is_some()
        {
            warn!("Handler for {} was replaced", name);
        }
    }

    pub fn names(&self) -> Vec<&'static str>
    {
        self.handlers.keys().cloned().collect()
    }

    pub fn dispatch(&self, name: &str, roster: &mut Roster, invocation: &Invocation) -> Result<String>
    {
        match self.handlers.get(name)
        {
            Some(handler) =>
            {
                debug!("Dispatching {} with args: {:?}", name, invocation.args);
                handler(roster, invocation)
            },
            None => bail!(ErrorKind::UnknownCommand(name.to_string())),
        }
    }
}

/// Teams with their average skill, as shown right after balancing
pub fn format_balanced(teams: &[Team]) -> String
{
    if teams.is_empty()
    {
        return String::from("Teams are currently empty.\n");
    }

    let mut response = String::from("Teams:\n");
    for (i, team) in teams.iter().enumerate()
    {
        response += &format!("Team {} (Avg Skill: {:.2}): {}\n", i + 1, team.average(), team.members.join(", "));
    }

    response
}

/// Teams without averages, which go stale after a switch
pub fn format_teams(title: &str, teams: &[Team]) -> String
{
    if teams.is_empty()
    {
        return String::from("Teams are currently empty.\n");
    }

    let mut response = format!("{}\n", title);
    for (i, team) in teams.iter().enumerate()
    {
        response += &format!("Team {}: {}\n", i + 1, team.members.join(", "));
    }

    response
}

/// Recomputes teams after a mutation and describes the outcome
pub fn rebalanced(roster: &mut Roster) -> String
{
    if roster.rebalance()
    {
        format_balanced(roster.teams())
    } else
    {
        String::from("Teams are not formed yet. Use shuffle with team_size or num_teams.\n")
    }
}
