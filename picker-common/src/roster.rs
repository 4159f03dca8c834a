use ::errors::*;

use ::balancer;
use ::model::{Participant, RosterSnapshot, Team};
use ::{MIN_RATING, MAX_RATING};

use std::collections::{HashMap, HashSet};

/// Everything a `shuffle` can ask for. An empty request means "reshuffle what is already there".
#[derive(Debug, Clone, PartialEq, Default, new)]
pub struct ShuffleRequest
{
    /// Replaces the roster with these names when present
    pub names: Option<Vec<String>>,
    pub groups: Vec<Vec<String>>,
    pub team_size: Option<usize>,
    pub team_count: Option<usize>,
}

impl ShuffleRequest
{
    pub fn is_empty(&self) -> bool
    {
        self.names.is_none() && self.groups.is_empty() && self.team_size.is_none() && self.team_count.is_none()
    }
}

/// Checks a requested rating is within the allowed range
pub fn validate_rating(rating: i64) -> Result<u8>
{
    if rating < MIN_RATING as i64 || rating > MAX_RATING as i64
    {
        bail!(ErrorKind::InvalidRating(rating));
    }

    Ok(rating as u8)
}

/// The participants and the latest partition of them into teams.
///
/// Participants keep insertion order, which is also the order the balancer seats them in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Roster
{
    participants: Vec<Participant>,
    teams: Vec<Team>,
}

impl Roster
{
    pub fn new() -> Roster
    {
        Roster::default()
    }

    pub fn participants(&self) -> &[Participant]
    {
        &self.participants
    }

    pub fn teams(&self) -> &[Team]
    {
        &self.teams
    }

    pub fn len(&self) -> usize
    {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.participants.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Participant>
    {
        self.participants.iter().find(|participant| participant.name == name)
    }

    pub fn contains(&self, name: &str) -> bool
    {
        self.get(name).is_some()
    }

    pub fn snapshot(&self) -> RosterSnapshot
    {
        RosterSnapshot::new(self.participants.clone(), self.teams.clone())
    }

    /// Adds a name exactly as given, rejecting it if it is already present
    pub fn insert(&mut self, name: &str, rating: i64) -> Result<()>
    {
        let rating = validate_rating(rating)?;

        if let Some(existing) = self.get(name)
        {
            bail!(ErrorKind::DuplicateName(existing.name.clone(), existing.rating));
        }

        info!("Added {} with rating {}", name, rating);
        self.participants.push(Participant::new(name, rating));
        Ok(())
    }

    /// Adds a name, suffixing it with an occurrence count when other names already start with it
    ///
    /// # Return
    /// * The name actually stored. With "Alice" present adding "Alice" fails but adding "Al" stores "Al(2)".
    pub fn add_participant(&mut self, name: &str, rating: i64) -> Result<String>
    {
        let rating = validate_rating(rating)?;

        if let Some(existing) = self.get(name)
        {
            bail!(ErrorKind::DuplicateName(existing.name.clone(), existing.rating));
        }

        Ok(self.push_counted(name, rating))
    }

    /// Like `add_participant` except that an exact duplicate is renamed too, so "Alice" twice stores "Alice(2)".
    /// Bulk loads go through here.
    pub fn add_renaming(&mut self, name: &str, rating: i64) -> Result<String>
    {
        let rating = validate_rating(rating)?;

        Ok(self.push_counted(name, rating))
    }

    fn push_counted(&mut self, name: &str, rating: u8) -> String
    {
        let count = self.participants.iter()
            .filter(|participant| participant.name.starts_with(name))
            .count();

        let mut stored = name.to_string();
        if count > 0
        {
            /* A previous removal can leave the counted suffix in use, keep counting until it is free */
            let mut occurrence = count + 1;
            stored = format!("{}({})", name, occurrence);
            while self.contains(&stored)
            {
                occurrence += 1;
                stored = format!("{}({})", name, occurrence);
            }
        }

        info!("Added {} with rating {}", stored, rating);
        self.participants.push(Participant::new(stored.as_str(), rating));
        stored
    }

    /// Overwrites a rating. Team membership is left alone.
    pub fn set_rating(&mut self, name: &str, rating: i64) -> Result<()>
    {
        if !self.contains(name)
        {
            bail!(ErrorKind::UnknownName(name.to_string()));
        }

        let rating = validate_rating(rating)?;

        for participant in self.participants.iter_mut().filter(|participant| participant.name == name)
        {
            info!("Changed rating of {} from {} to {}", name, participant.rating, rating);
            participant.rating = rating;
        }

        Ok(())
    }

    /// Removes the first participant whose name is `name` or starts with it.
    ///
    /// Removing "Al" with "Alice" and "Albert" present removes whichever of them was added first.
    pub fn remove_participant(&mut self, name: &str) -> Result<Participant>
    {
        let index = self.participants.iter()
            .position(|participant| participant.name == name || participant.name.starts_with(name))
            .ok_or_else(|| ErrorKind::UnknownName(name.to_string()))?;

        let removed = self.participants.remove(index);
        info!("Removed {} (asked for {})", removed.name, name);

        Ok(removed)
    }

    pub fn clear(&mut self)
    {
        info!("Cleared {} participants and {} teams", self.participants.len(), self.teams.len());

        self.participants.clear();
        self.teams.clear();
    }

    /// Swaps two people between their teams. Skill totals are not recomputed.
    pub fn switch(&mut self, first: &str, second: &str) -> Result<()>
    {
        let first_index = self.team_of(first);
        let second_index = self.team_of(second);

        let (first_index, second_index) = match (first_index, second_index)
        {
            (Some(first_index), Some(second_index)) => (first_index, second_index),
            _ => bail!(ErrorKind::NamesNotFound(first.to_string(), second.to_string())),
        };

        if first == second
        {
            return Ok(());
        }

        remove_member(&mut self.teams[first_index], first);
        remove_member(&mut self.teams[second_index], second);
        self.teams[first_index].members.push(second.to_string());
        self.teams[second_index].members.push(first.to_string());

        info!("Switched {} (team {}) with {} (team {})", first, first_index + 1, second, second_index + 1);
        Ok(())
    }

    fn team_of(&self, name: &str) -> Option<usize>
    {
        self.teams.iter().position(|team| team.contains(name))
    }

    /// Recomputes the teams after the roster changed, keeping the current team count.
    ///
    /// # Return
    /// * `false` when there is no partition yet so there is nothing to keep up to date
    pub fn rebalance(&mut self) -> bool
    {
        if self.teams.is_empty()
        {
            return false;
        }

        let team_count = self.teams.len();
        self.teams = balancer::balance(&self.participants, &[], team_count);

        true
    }

    /// Runs a full shuffle. Nothing is changed unless the whole request is valid.
    pub fn shuffle(&mut self, request: &ShuffleRequest) -> Result<&[Team]>
    {
        if request.is_empty()
        {
            if self.participants.is_empty()
            {
                bail!(ErrorKind::EmptyRoster);
            }

            if !self.rebalance()
            {
                bail!(ErrorKind::MissingSizeSpec);
            }

            return Ok(&self.teams[..]);
        }

        let participants = match request.names
        {
            Some(ref names) => self.listed(names),
            None => self.participants.clone(),
        };

        let groups = resolve_groups(&participants, &request.groups)?;
        let grouped: HashSet<&str> = groups.iter()
            .flat_map(|group| group.iter().map(|member| member.name.as_str()))
            .collect();
        let free: Vec<Participant> = participants.iter()
            .filter(|participant| !grouped.contains(participant.name.as_str()))
            .cloned()
            .collect();

        let total = free.len() + grouped.len();
        let team_count = match (request.team_size, request.team_count)
        {
            (Some(team_size), _) if team_size > 0 => balancer::team_count_for_size(total, team_size),
            (_, Some(team_count)) if team_count > 0 => team_count,
            _ => bail!(ErrorKind::MissingSizeSpec),
        };

        let teams = balancer::balance(&free, &groups, team_count);

        self.participants = participants;
        self.teams = teams;

        Ok(&self.teams[..])
    }

    /// Builds the roster a `names=` list describes. Repeats become `Name(2)`, `Name(3)`...
    /// and anyone already known keeps their rating.
    fn listed(&self, names: &[String]) -> Vec<Participant>
    {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut listed: Vec<Participant> = Vec::with_capacity(names.len());

        for name in names.iter()
        {
            let occurrence = seen.entry(name.as_str()).or_insert(0);
            *occurrence += 1;

            let mut stored = if *occurrence > 1
            {
                format!("{}({})", name, occurrence)
            } else
            {
                name.clone()
            };

            /* "Alice(2)" can be listed by hand before the second "Alice", skip to the next free suffix */
            while listed.iter().any(|participant| participant.name == stored)
            {
                *occurrence += 1;
                stored = format!("{}({})", name, occurrence);
            }

            let participant = match self.get(&stored)
            {
                Some(known) => known.clone(),
                None => Participant::unrated(stored),
            };

            listed.push(participant);
        }

        listed
    }
}

/// Looks up every group member, rejecting names that are unknown or already in an earlier group
fn resolve_groups(participants: &[Participant], groups: &[Vec<String>]) -> Result<Vec<Vec<Participant>>>
{
    let mut grouped: HashSet<&str> = HashSet::new();
    let mut resolved = Vec::with_capacity(groups.len());

    for group in groups.iter()
    {
        let mut members = Vec::with_capacity(group.len());

        for name in group.iter()
        {
            let member = match participants.iter().find(|participant| &participant.name == name)
            {
                Some(member) => member,
                None => bail!(ErrorKind::InvalidGroupMember(name.clone())),
            };

            if !grouped.insert(member.name.as_str())
            {
                bail!(ErrorKind::InvalidGroupMember(name.clone()));
            }

            members.push(member.clone());
        }

        resolved.push(members);
    }

    Ok(resolved)
}

fn remove_member(team: &mut Team, name: &str)
{
    if let Some(position) = team.members.iter().position(|member| member == name)
    {
        team.members.remove(position);
    }
}
