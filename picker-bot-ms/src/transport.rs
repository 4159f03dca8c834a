use picker_common::errors::*;

use serde_json;

use std::fs;
use std::path::Path;

/// A text file that came along with a message, already read
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct Attachment
{
    pub filename: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct ChatMessage
{
    pub content: String,
    #[serde(default)]
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct ChatReply
{
    pub content: String,
}

/// How a message arrived, replies go back the same way
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding
{
    Text,
    Json,
}

/// Reads one inbound line. A line starting with `{` is a JSON `ChatMessage`, anything else is the message text.
///
/// For text lines `<prefix>load <file>` reads the file and attaches it, standing in for a chat attachment.
pub fn decode(prefix: &str, line: &str) -> Result<(ChatMessage, Encoding)>
{
    let trimmed = line.trim();

    if trimmed.starts_with('{')
    {
        let message: ChatMessage = serde_json::from_str(trimmed)?;
        return Ok((message, Encoding::Json));
    }

    let load = format!("{}load ", prefix);
    if trimmed.starts_with(&load)
    {
        let path = trimmed[load.len()..].trim();

        /* An unreadable file goes through without an attachment so the command still gets answered */
        let attachment = match read_attachment(path)
        {
            Ok(attachment) => Some(attachment),
            Err(error) =>
            {
                warn!("Loading without attachment because {}", error);
                None
            },
        };

        return Ok((ChatMessage::new(format!("{}load", prefix), attachment), Encoding::Text));
    }

    Ok((ChatMessage::new(trimmed.to_string(), None), Encoding::Text))
}

pub fn encode(reply: &ChatReply, encoding: Encoding) -> Result<String>
{
    match encoding
    {
        Encoding::Text => Ok(reply.content.trim_end().to_string()),
        Encoding::Json => Ok(serde_json::to_string(reply)?),
    }
}

fn read_attachment(path: &str) -> Result<Attachment>
{
    let content = fs::read_to_string(path)
        .chain_err(|| format!("Failed to read attachment {}", path))?;

    let filename = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());

    Ok(Attachment::new(filename, content))
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_decode_text()
    {
        let (message, encoding) = decode(">", "  >teams \n").unwrap();

        assert_eq!(message, ChatMessage::new(">teams".to_string(), None));
        assert_eq!(encoding, Encoding::Text);
    }

    #[test]
    fn test_decode_json_with_attachment()
    {
        let line = r#"{"content": ">load", "attachment": {"filename": "teams.txt", "content": "Alice 4\nBob"}}"#;

        let (message, encoding) = decode(">", line).unwrap();

        assert_eq!(encoding, Encoding::Json);
        assert_eq!(message.content, ">load");
        assert_eq!(message.attachment, Some(Attachment::new("teams.txt".to_string(), "Alice 4\nBob".to_string())));
    }

    #[test]
    fn test_decode_json_without_attachment()
    {
        let (message, _) = decode(">", r#"{"content": ">list"}"#).unwrap();

        assert_eq!(message.attachment, None);
    }

    #[test]
    fn test_decode_missing_file()
    {
        let (message, encoding) = decode(">", ">load /definitely/not/here.txt").unwrap();

        assert_eq!(message, ChatMessage::new(">load".to_string(), None));
        assert_eq!(encoding, Encoding::Text);
    }

    #[test]
    fn test_encode()
    {
        let reply = ChatReply::new("Teams:\nTeam 1: Alice\n".to_string());

        assert_eq!(encode(&reply, Encoding::Text).unwrap(), "Teams:\nTeam 1: Alice");
        assert_eq!(encode(&reply, Encoding::Json).unwrap(), r#"{"content":"Teams:\nTeam 1: Alice\n"}"#);
    }
}
