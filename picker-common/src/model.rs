use ::DEFAULT_RATING;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct Participant {
    pub name: String,
    pub rating: u8,
}

impl Participant
{
    pub fn new<S>(name: S, rating: u8) -> Participant
        where S: Into<String>
    {
        Participant {
            name: name.into(),
            rating,
        }
    }

    pub fn unrated<S>(name: S) -> Participant
        where S: Into<String>
    {
        Participant::new(name, DEFAULT_RATING)
    }
}

/// Members keep the order they were seated in. `skill_total` is only maintained by the balancer,
/// manual switches leave it as it was.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, new)]
pub struct Team
{
    pub members: Vec<String>,
    pub skill_total: u32,
}

impl Team
{
    pub fn empty() -> Team
    {
        Team::new(Vec::new(), 0)
    }

    pub fn seat(&mut self, participant: &Participant)
    {
        self.members.push(participant.name.clone());
        self.skill_total += participant.rating as u32;
    }

    pub fn contains(&self, name: &str) -> bool
    {
        self.members.iter().any(|member| member == name)
    }

    pub fn len(&self) -> usize
    {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.members.is_empty()
    }

    /// 0 for an empty team
    pub fn average(&self) -> f64
    {
        if self.members.is_empty()
        {
            0.0
        } else
        {
            self.skill_total as f64 / self.members.len() as f64
        }
    }
}

/// Read-only copy of the store handed to whoever formats replies
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct RosterSnapshot
{
    pub participants: Vec<Participant>,
    pub teams: Vec<Team>,
}
