use regex::Regex;

use picker_common::errors::*;
use picker_common::roster::ShuffleRequest;

use std::collections::HashMap;
use std::str::FromStr;

/// Splits `<prefix><command> <args>` into the command name and the raw argument text.
///
/// Returns `None` for anything not addressed to the bot.
pub fn parse_command(prefix: &str, content: &str) -> Option<(String, String)>
{
    lazy_static! {
        static ref COMMAND_REGEX: Regex = Regex::new(r"^(?P<command>\S+)(?:\s+(?P<args>[\s\S]*))?$").unwrap();
    }

    let content = content.trim();
    if prefix.is_empty() || !content.starts_with(prefix)
    {
        return None;
    }

    let captures = COMMAND_REGEX.captures(&content[prefix.len()..])?;
    let command = captures.name("command")?.as_str().to_string();
    let args = captures.name("args")
        .map(|args| args.as_str().trim().to_string())
        .unwrap_or_default();

    Some((command, args))
}

/// Whitespace separated `key=value` arguments
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Params
{
    values: HashMap<String, String>,
}

impl Params
{
    pub fn parse(args: &str) -> Result<Params>
    {
        lazy_static! {
            static ref PARAM_REGEX: Regex = Regex::new(r"^(?P<key>[A-Za-z_]+)=(?P<value>.*)$").unwrap();
        }

        let mut values = HashMap::new();
        for token in args.split_whitespace()
        {
            let captures = match PARAM_REGEX.captures(token)
            {
                Some(captures) => captures,
                None => bail!(ErrorKind::InvalidParameter(token.to_string(), String::new())),
            };

            /* Same key twice, the last one wins */
            values.insert(captures["key"].to_string(), captures["value"].to_string());
        }

        Ok(Params { values })
    }

    pub fn is_empty(&self) -> bool
    {
        self.values.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str>
    {
        self.values.get(key).map(|value| value.as_str())
    }

    pub fn require(&self, key: &str) -> Result<&str>
    {
        match self.get(key)
        {
            Some(value) if !value.is_empty() => Ok(value),
            _ => bail!(ErrorKind::MissingParameter(key.to_string())),
        }
    }

    pub fn number<N>(&self, key: &str) -> Result<Option<N>>
        where N: FromStr
    {
        match self.get(key)
        {
            None => Ok(None),
            Some(value) => match value.parse::<N>()
            {
                Ok(number) => Ok(Some(number)),
                Err(_) => bail!(ErrorKind::InvalidParameter(key.to_string(), value.to_string())),
            },
        }
    }

    /// `a,b,c`, empty entries dropped
    pub fn list(&self, key: &str) -> Option<Vec<String>>
    {
        self.get(key).map(split_names)
    }

    /// `a,b;c,d`, empty groups dropped
    pub fn groups(&self, key: &str) -> Vec<Vec<String>>
    {
        match self.get(key)
        {
            None => Vec::new(),
            Some(value) => value.split(';')
                .map(split_names)
                .filter(|group| !group.is_empty())
                .collect(),
        }
    }

    pub fn shuffle_request(&self) -> Result<ShuffleRequest>
    {
        Ok(
            ShuffleRequest::new(
                self.list("names"),
                self.groups("group"),
                self.number::<usize>("team_size")?,
                self.number::<usize>("num_teams")?)
        )
    }
}

fn split_names(raw: &str) -> Vec<String>
{
    raw.split(',')
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_parse_command()
    {
        assert_eq!(parse_command(">", ">shuffle team_size=3"), Some(("shuffle".to_string(), "team_size=3".to_string())));
        assert_eq!(parse_command(">", "  >teams  "), Some(("teams".to_string(), String::new())));
        assert_eq!(parse_command(">", ">add Mary Jane"), Some(("add".to_string(), "Mary Jane".to_string())));
        assert_eq!(parse_command("!", ">teams"), None);
        assert_eq!(parse_command(">", "hello there"), None);
        assert_eq!(parse_command(">", ">"), None);
    }

    #[test]
    fn test_params()
    {
        let params = Params::parse("team_size=3 names=Alice,Bob,,Charlie group=Alice,Bob;;Charlie").unwrap();

        assert_eq!(params.number::<usize>("team_size").unwrap(), Some(3));
        assert_eq!(params.number::<usize>("num_teams").unwrap(), None);
        assert_eq!(params.list("names").unwrap(), vec!["Alice", "Bob", "Charlie"]);
        assert_eq!(params.groups("group"), vec![vec!["Alice".to_string(), "Bob".to_string()], vec!["Charlie".to_string()]]);
    }

    #[test]
    fn test_params_rejects_bare_token()
    {
        match Params::parse("team_size=3 oops").unwrap_err().kind()
        {
            &ErrorKind::InvalidParameter(ref key, _) => assert_eq!(key, "oops"),
            kind => panic!("Expected InvalidParameter, got {:?}", kind),
        }
    }

    #[test]
    fn test_params_rejects_bad_number()
    {
        let params = Params::parse("num_teams=two").unwrap();

        assert!(params.shuffle_request().is_err());
        assert!(params.number::<i64>("num_teams").is_err());
    }

    #[test]
    fn test_require()
    {
        let params = Params::parse("name= skill=4").unwrap();

        assert!(params.require("name").is_err());
        assert!(params.require("other").is_err());
        assert_eq!(params.require("skill").unwrap(), "4");
    }
}
