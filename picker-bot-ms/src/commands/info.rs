use picker_common::errors::*;
use picker_common::roster::Roster;

use super::Invocation;

const EXAMPLES: &'static str = "**Examples:**
>shuffle team_size=3 names=Alice,Bob,Charlie,David
>shuffle num_teams=2 names=Alice,Bob,Charlie,David group=Alice,Bob
>shuffle team_size=2 names=Alice,Bob,Charlie,Nathan group=Alice,Bob;Charlie,Nathan
>addSkill name=Alice skill=4
>changeSkill name=Bob skill=5
>viewSkill
>save
>load teams.txt";

const HELP: &'static str = "**Team Picker Bot Commands:**

__File Commands__
>load <file_name>: Load names from a .txt file. Format: Each name on a new line. 'Nathan' or 'Nathan 5'
>save: Show the list in the format load reads.
>example: Show examples of how to use the commands.

__Skill Commands__
>addSkill name=<name> skill=<level>: Add a person with a specific skill level (1-5).
>changeSkill name=<name> skill=<level>: Change the skill level of an existing person.
>viewSkill: View the skill levels of all people in the list.

__Team Commands__
>shuffle team_size=<size> names=<a,b,..> group=<a,b;c,d>: Shuffle names into teams. num_teams=<count> instead of team_size also works, no arguments reshuffles.
>teams: Show the current teams.
>switch <name1> <name2>: Switch two people between teams.

__Name Commands__
>add <name>: Add a person and readjust teams.
>remove <name>: Remove a person and readjust teams.
>list: Display the current list of names.
>clear: Clear all names, skill levels and teams.";

pub fn example(_roster: &mut Roster, _invocation: &Invocation) -> Result<String>
{
    Ok(String::from(EXAMPLES))
}

pub fn help(_roster: &mut Roster, _invocation: &Invocation) -> Result<String>
{
    Ok(String::from(HELP))
}
