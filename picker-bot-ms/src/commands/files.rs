use picker_common::errors::*;
use picker_common::loader;
use picker_common::roster::Roster;

use super::{Invocation, rebalanced};

/// `load` with a `.txt` attachment of `Name [Skill Level]` lines
pub fn load(roster: &mut Roster, invocation: &Invocation) -> Result<String>
{
    let attachment = invocation.attachment.ok_or(ErrorKind::MissingAttachment)?;
    if !attachment.filename.ends_with(".txt")
    {
        bail!(ErrorKind::UnsupportedAttachment(attachment.filename.clone()));
    }

    let before = roster.len();
    let result = if invocation.atomic_load
    {
        loader::load_atomic(roster, &attachment.content)
    } else
    {
        loader::load(roster, &attachment.content)
    };

    let loaded = match result
    {
        Ok(loaded) => loaded,
        Err(error) =>
        {
            /* Lines before the bad one still have to be placed, an untouched roster keeps its teams */
            if roster.len() != before
            {
                roster.rebalance();
            }
            return Err(error);
        },
    };

    Ok(format!("Loaded {} names and skill levels from {}.\n{}", loaded.len(), attachment.filename, rebalanced(roster)))
}

/// Lists the roster in the format `load` reads
pub fn save(roster: &mut Roster, _invocation: &Invocation) -> Result<String>
{
    if roster.is_empty()
    {
        return Ok(String::from("The list is currently empty."));
    }

    Ok(loader::save(roster))
}
