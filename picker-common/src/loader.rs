use ::errors::*;

use ::model::Participant;
use ::roster::Roster;
use ::{MIN_RATING, MAX_RATING};

/// Parses one `Name [Rating]` line
///
/// # Arguments
/// * `number` 1-based line number, only used for the error
/// * `line` The raw line
///
/// # Return
/// * The participant. A trailing all-digit token is the rating and is clamped into range, any other trailing
///   token is part of the name.
pub fn parse_line(number: usize, line: &str) -> Result<Participant>
{
    let trimmed = line.trim();
    let mut splits = trimmed.rsplitn(2, ' ');

    let last = splits.next().unwrap_or("");
    let rest = splits.next();

    let participant = match rest
    {
        Some(name) if is_rating_token(last) => Participant::new(name.trim(), clamp_rating(last)),
        _ => Participant::unrated(trimmed),
    };

    if participant.name.is_empty()
    {
        bail!(ErrorKind::InvalidLine(number, line.to_string()));
    }

    Ok(participant)
}

fn is_rating_token(token: &str) -> bool
{
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/* Anything too long for a u64 is certainly above the maximum */
fn clamp_rating(token: &str) -> u8
{
    match token.parse::<u64>()
    {
        Ok(rating) => rating.max(MIN_RATING as u64).min(MAX_RATING as u64) as u8,
        Err(_) => MAX_RATING,
    }
}

/// Adds every line of `content` to the roster in order. Names already present are renamed `Name(2)`, `Name(3)`...
/// rather than rejected, so a saved roster can be loaded on top of itself.
///
/// Stops at the first bad line. Lines before it stay applied.
///
/// # Return
/// * The names as they were stored
pub fn load(roster: &mut Roster, content: &str) -> Result<Vec<String>>
{
    let mut loaded = Vec::new();

    for (index, line) in content.trim().lines().enumerate()
    {
        let participant = parse_line(index + 1, line)?;
        let stored = roster.add_renaming(&participant.name, participant.rating as i64)?;

        debug!("Loaded line {} as {} ({})", index + 1, stored, participant.rating);
        loaded.push(stored);
    }

    info!("Loaded {} participants", loaded.len());
    Ok(loaded)
}

/// Same as `load` except that a bad line leaves the roster untouched
pub fn load_atomic(roster: &mut Roster, content: &str) -> Result<Vec<String>>
{
    let mut staged = roster.clone();
    let loaded = load(&mut staged, content)?;

    *roster = staged;
    Ok(loaded)
}

/// Writes the roster in the format `load` reads, one `Name Rating` per line
pub fn save(roster: &Roster) -> String
{
    roster.participants()
        .iter()
        .map(|participant| format!("{} {}\n", participant.name, participant.rating))
        .collect()
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_parse_line_with_rating()
    {
        assert_eq!(parse_line(1, "Alice 4").unwrap(), Participant::new("Alice", 4));
        assert_eq!(parse_line(1, "  Mary Jane 2 ").unwrap(), Participant::new("Mary Jane", 2));
    }

    #[test]
    fn test_parse_line_without_rating()
    {
        assert_eq!(parse_line(1, "Bob").unwrap(), Participant::new("Bob", 3));
        assert_eq!(parse_line(1, "Bob 4x").unwrap(), Participant::new("Bob 4x", 3));
        assert_eq!(parse_line(1, "7").unwrap(), Participant::new("7", 3));
    }

    #[test]
    fn test_parse_line_clamps_rating()
    {
        assert_eq!(parse_line(1, "Carl 0").unwrap().rating, 1);
        assert_eq!(parse_line(1, "Carl 9").unwrap().rating, 5);
        assert_eq!(parse_line(1, "Carl 99999999999999999999999").unwrap().rating, 5);
    }

    #[test]
    fn test_parse_line_rejects_blank()
    {
        match parse_line(3, "   ").unwrap_err().kind()
        {
            &ErrorKind::InvalidLine(3, _) => {},
            kind => panic!("Expected InvalidLine, got {:?}", kind),
        }
    }
}
