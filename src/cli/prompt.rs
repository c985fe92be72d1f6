//! Line-oriented console input for the interactive flow.
//!
//! Two lines are consumed per run: the menu selection, then the message
//! body. Both readers are generic over `BufRead` so the flow is testable
//! with in-memory input.

use crate::error::{AppError, AppResult};
use crate::services::notifications::ChannelKind;
use std::io::BufRead;

/// Menu line shown before the selection is read
pub const MENU_PROMPT: &str = "Choose notification method: 1. Email, 2. SMS, 3. Telegram";

/// Prompt shown before the message body is read
pub const MESSAGE_PROMPT: &str = "Enter your message:";

/// Reads one line, stripping the trailing newline
///
/// End of input yields an empty string, which the selection parser treats
/// the same as an empty line.
fn read_line(input: &mut impl BufRead) -> AppResult<String> {
    let mut line = String::new();
    input.read_line(&mut line).map_err(|source| AppError::Io {
        stream: "stdin",
        source,
    })?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Reads and parses the menu selection line
///
/// # Errors
/// `AppError::InvalidSelection` for an integer outside the menu;
/// `AppError::Io` if stdin fails.
pub fn read_selection(input: &mut impl BufRead) -> AppResult<ChannelKind> {
    let line = read_line(input)?;
    ChannelKind::from_menu_choice(&line)
}

/// Reads the message body line
///
/// Arbitrary text, no length or content validation.
pub fn read_message(input: &mut impl BufRead) -> AppResult<String> {
    read_line(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_selection_valid() {
        let mut input = Cursor::new(b"2\n".to_vec());
        assert_eq!(read_selection(&mut input).unwrap(), ChannelKind::Sms);
    }

    #[test]
    fn test_read_selection_empty_line_defaults_to_email() {
        let mut input = Cursor::new(b"\n".to_vec());
        assert_eq!(read_selection(&mut input).unwrap(), ChannelKind::Email);
    }

    #[test]
    fn test_read_selection_eof_defaults_to_email() {
        let mut input = Cursor::new(Vec::new());
        assert_eq!(read_selection(&mut input).unwrap(), ChannelKind::Email);
    }

    #[test]
    fn test_read_selection_out_of_range() {
        let mut input = Cursor::new(b"9\n".to_vec());
        assert!(matches!(
            read_selection(&mut input),
            Err(AppError::InvalidSelection { choice: 9 })
        ));
    }

    #[test]
    fn test_read_message_keeps_inner_whitespace() {
        let mut input = Cursor::new(b"  hello   world  \n".to_vec());
        assert_eq!(read_message(&mut input).unwrap(), "  hello   world  ");
    }

    #[test]
    fn test_read_message_strips_crlf() {
        let mut input = Cursor::new(b"windows line\r\n".to_vec());
        assert_eq!(read_message(&mut input).unwrap(), "windows line");
    }
}
