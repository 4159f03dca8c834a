use picker_common::errors::*;
use picker_common::roster::Roster;
use picker_common::DEFAULT_RATING;

use super::{Invocation, rebalanced};

fn required_name(args: &str) -> Result<&str>
{
    let name = args.trim();
    if name.is_empty()
    {
        bail!(ErrorKind::MissingParameter(String::from("a name")));
    }

    Ok(name)
}

/// `add <name>`
pub fn add(roster: &mut Roster, invocation: &Invocation) -> Result<String>
{
    let name = required_name(invocation.args)?;
    let stored = roster.add_participant(name, DEFAULT_RATING as i64)?;

    Ok(format!("Added {} to the list.\n{}", stored, rebalanced(roster)))
}

/// `remove <name>`, also matches the start of a name
pub fn remove(roster: &mut Roster, invocation: &Invocation) -> Result<String>
{
    let name = required_name(invocation.args)?;
    let removed = roster.remove_participant(name)?;

    Ok(format!("Removed {} from the list.\n{}", removed.name, rebalanced(roster)))
}

pub fn list(roster: &mut Roster, _invocation: &Invocation) -> Result<String>
{
    if roster.is_empty()
    {
        return Ok(String::from("The list is currently empty."));
    }

    let names: Vec<&str> = roster.participants().iter().map(|participant| participant.name.as_str()).collect();
    Ok(format!("Current list: {}", names.join(", ")))
}

pub fn clear(roster: &mut Roster, _invocation: &Invocation) -> Result<String>
{
    roster.clear();

    Ok(String::from("All names, skill levels, and teams have been cleared."))
}
