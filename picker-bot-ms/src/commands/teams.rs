use picker_common::errors::*;
use picker_common::roster::Roster;

use ::params::Params;

use super::{Invocation, format_balanced, format_teams};

/// `shuffle team_size=<size> names=<a,b,..> group=<a,b;c,d>` or `shuffle num_teams=<count> ...`.
/// Without arguments everyone is redistributed over the current number of teams.
pub fn shuffle(roster: &mut Roster, invocation: &Invocation) -> Result<String>
{
    let request = Params::parse(invocation.args)?.shuffle_request()?;
    let teams = roster.shuffle(&request)?;

    Ok(format_balanced(teams))
}

pub fn teams(roster: &mut Roster, _invocation: &Invocation) -> Result<String>
{
    Ok(format_teams("Current Teams:", roster.teams()))
}

/// `switch <name1> <name2>`
pub fn switch(roster: &mut Roster, invocation: &Invocation) -> Result<String>
{
    let names: Vec<&str> = invocation.args.split_whitespace().collect();
    if names.len() != 2
    {
        bail!(ErrorKind::MissingParameter(String::from("exactly two names")));
    }

    roster.switch(names[0], names[1])?;

    Ok(format_teams("Teams after switch:", roster.teams()))
}
