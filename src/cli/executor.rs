//! Composition root and dispatch flow.
//!
//! The one place where the concrete provider is chosen and wired into the
//! `NotificationService`. The flow is strictly linear: show menu, read
//! choice, construct the service, read message, dispatch once.

use crate::cli::prompt::{self, MENU_PROMPT, MESSAGE_PROMPT};
use crate::error::{AppError, AppResult};
use crate::services::notifications::{
    MessageSink, NotificationMessage, NotificationResult, NotificationService, StdoutSink,
    create_provider,
};
use std::io::{BufRead, Write};
use std::sync::Arc;

/// Runs the interactive flow against the real console
pub async fn execute() -> AppResult<()> {
    let mut input = std::io::stdin().lock();
    let mut prompt_out = std::io::stdout();
    let sink: Arc<dyn MessageSink> = Arc::new(StdoutSink);

    run_dispatch(&mut input, &mut prompt_out, sink).await?;
    Ok(())
}

/// Runs one selection-and-dispatch cycle
///
/// The service is constructed exactly once, after the user's choice is
/// known; an invalid selection fails before any provider exists and before
/// the message prompt is shown.
pub async fn run_dispatch(
    input: &mut impl BufRead,
    prompt_out: &mut impl Write,
    sink: Arc<dyn MessageSink>,
) -> AppResult<NotificationResult> {
    write_prompt(prompt_out, MENU_PROMPT)?;
    let kind = prompt::read_selection(input)?;
    tracing::info!(channel = kind.as_str(), "channel selected");

    let service = NotificationService::new(create_provider(kind, sink));

    write_prompt(prompt_out, MESSAGE_PROMPT)?;
    let body = prompt::read_message(input)?;

    service.notify(&NotificationMessage::new(body)).await
}

fn write_prompt(prompt_out: &mut impl Write, text: &str) -> AppResult<()> {
    writeln!(prompt_out, "{}", text).map_err(|source| AppError::Io {
        stream: "stdout",
        source,
    })?;
    prompt_out.flush().map_err(|source| AppError::Io {
        stream: "stdout",
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notifications::testing::MemorySink;
    use std::io::Cursor;

    async fn run_with(input_text: &str) -> (AppResult<NotificationResult>, Vec<String>, String) {
        let mut input = Cursor::new(input_text.as_bytes().to_vec());
        let mut prompts = Vec::new();
        let sink = Arc::new(MemorySink::new());

        let result = run_dispatch(&mut input, &mut prompts, sink.clone()).await;
        (result, sink.lines(), String::from_utf8(prompts).unwrap())
    }

    #[tokio::test]
    async fn test_dispatch_email() {
        let (result, lines, _) = run_with("1\nHello\n").await;
        assert!(result.unwrap().success);
        assert_eq!(lines, vec!["Email sent: Hello"]);
    }

    #[tokio::test]
    async fn test_dispatch_sms() {
        let (result, lines, _) = run_with("2\nTest\n").await;
        assert!(result.is_ok());
        assert_eq!(lines, vec!["SMS sent: Test"]);
    }

    #[tokio::test]
    async fn test_dispatch_telegram() {
        let (result, lines, _) = run_with("3\nPing\n").await;
        assert!(result.is_ok());
        assert_eq!(lines, vec!["Telegram message sent: Ping"]);
    }

    #[tokio::test]
    async fn test_empty_selection_falls_back_to_email() {
        let (result, lines, _) = run_with("\nX\n").await;
        assert!(result.is_ok());
        assert_eq!(lines, vec!["Email sent: X"]);
    }

    #[tokio::test]
    async fn test_invalid_selection_dispatches_nothing() {
        let (result, lines, prompts) = run_with("9\n").await;
        assert!(matches!(
            result,
            Err(AppError::InvalidSelection { choice: 9 })
        ));
        assert!(lines.is_empty());
        // Failure happens before the message prompt
        assert!(prompts.contains(MENU_PROMPT));
        assert!(!prompts.contains(MESSAGE_PROMPT));
    }

    #[tokio::test]
    async fn test_prompts_are_shown_in_order() {
        let (_, _, prompts) = run_with("1\nHello\n").await;
        let menu_pos = prompts.find(MENU_PROMPT).unwrap();
        let message_pos = prompts.find(MESSAGE_PROMPT).unwrap();
        assert!(menu_pos < message_pos);
    }

    #[tokio::test]
    async fn test_identical_input_produces_identical_output() {
        let (_, first, _) = run_with("3\nsame message\n").await;
        let (_, second, _) = run_with("3\nsame message\n").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_message_forwarded_unchanged() {
        let (result, lines, _) = run_with("2\n  spaced  out  \n").await;
        assert_eq!(result.unwrap().rendered, "SMS sent:   spaced  out  ");
        assert_eq!(lines, vec!["SMS sent:   spaced  out  "]);
    }
}
