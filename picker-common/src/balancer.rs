use ::model::{Participant, Team};

/// Splits everyone into teams using greedy lowest-load packing
///
/// # Arguments
/// * `free` Participants that can go anywhere, seated in the given order
/// * `groups` Participants that must share a team, seated before any free participant
/// * `team_count` How many teams are wanted, lowered to the number of participants when there are fewer
///
/// # Return
/// * The teams in index order. Each unit (a whole group or a single free participant) goes to the team with the
///   lowest running skill total, the lowest index winning ties. Nothing is shuffled so equal inputs give equal teams.
///
/// Groups are expected to have been validated against the roster already.
pub fn balance(free: &[Participant], groups: &[Vec<Participant>], team_count: usize) -> Vec<Team>
{
    let total = free.len() + groups.iter().map(|group| group.len()).sum::<usize>();
    let team_count = team_count.min(total);

    let mut teams: Vec<Team> = (0..team_count).map(|_| Team::empty()).collect();
    if teams.is_empty()
    {
        return teams;
    }

    for group in groups.iter()
    {
        let index = lowest_team(&teams);
        trace!("Seating group {:?} in team {}", group.iter().map(|member| &member.name).collect::<Vec<_>>(), index);

        for member in group.iter()
        {
            teams[index].seat(member);
        }
    }

    for participant in free.iter()
    {
        let index = lowest_team(&teams);
        trace!("Seating {} ({}) in team {}", participant.name, participant.rating, index);

        teams[index].seat(participant);
    }

    debug!("Balanced {} participants into {} teams", total, teams.len());
    teams
}

/// `min_by_key` keeps the first of equal minimums so ties go to the lowest index
fn lowest_team(teams: &[Team]) -> usize
{
    teams.iter()
        .enumerate()
        .min_by_key(|&(_, team)| team.skill_total)
        .map(|(index, _)| index)
        .unwrap_or(0)
}

/// Number of teams needed so that none is bigger than `team_size`
pub fn team_count_for_size(total: usize, team_size: usize) -> usize
{
    if team_size == 0
    {
        return 0;
    }

    /* Rounds up without adding to `total`, a huge team size must not overflow */
    total / team_size + if total % team_size == 0 { 0 } else { 1 }
}
