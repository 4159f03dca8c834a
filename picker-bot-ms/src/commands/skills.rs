use picker_common::errors::*;
use picker_common::roster::Roster;
use picker_common::DEFAULT_RATING;

use ::params::Params;

use super::{Invocation, rebalanced};

/// `addSkill name=<name> skill=<level>`, the name is kept exactly as typed
pub fn add_skill(roster: &mut Roster, invocation: &Invocation) -> Result<String>
{
    let params = Params::parse(invocation.args)?;
    let name = params.require("name")?;
    let skill = params.number::<i64>("skill")?.unwrap_or(DEFAULT_RATING as i64);

    roster.insert(name, skill)?;

    Ok(format!("Added {} with skill level {} to the list.\n{}", name, skill, rebalanced(roster)))
}

/// `changeSkill name=<name> skill=<level>`
pub fn change_skill(roster: &mut Roster, invocation: &Invocation) -> Result<String>
{
    let params = Params::parse(invocation.args)?;
    let name = params.require("name")?;
    let skill = params.number::<i64>("skill")?.unwrap_or(DEFAULT_RATING as i64);

    roster.set_rating(name, skill)?;

    Ok(format!("Updated {}'s skill level to {}.\n{}", name, skill, rebalanced(roster)))
}

pub fn view_skill(roster: &mut Roster, _invocation: &Invocation) -> Result<String>
{
    if roster.is_empty()
    {
        return Ok(String::from("No skill data available."));
    }

    let mut response = String::from("Skill Levels:\n");
    for participant in roster.participants()
    {
        response += &format!("{}: {}\n", participant.name, participant.rating);
    }

    Ok(response)
}
