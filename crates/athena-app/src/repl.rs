//! Line-oriented terminal front end for the chat widget.

use athena_common::ChatRole;
use athena_config::schema::PersonaConfig;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::widget::{ChatWidget, Submission, LOADING_TEXT};

const HELP_TEXT: &str = "Commands: /reset starts a new conversation, /quit exits.";

/// What a line of input asks for.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Reset,
    Help,
    Message(&'a str),
}

fn parse_line(line: &str) -> Command<'_> {
    match line.trim() {
        "/quit" | "/exit" => Command::Quit,
        "/reset" => Command::Reset,
        "/help" => Command::Help,
        _ => Command::Message(line),
    }
}

/// Header line naming who the user is talking to.
fn banner(persona: &PersonaConfig) -> String {
    let title = persona.title.trim();
    if title.is_empty() {
        persona.name.clone()
    } else {
        format!("{}, {title}", persona.name)
    }
}

/// Run the chat loop until `/quit` or end of input.
pub async fn run<R, W>(
    widget: &ChatWidget,
    persona: &PersonaConfig,
    input: R,
    mut output: W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(format!("{}\n", banner(persona)).as_bytes()).await?;

    let persona = persona.name.as_str();
    for message in widget.transcript().messages() {
        if message.role() == ChatRole::Model {
            write_reply(&mut output, persona, message.text()).await?;
        }
    }
    output.write_all(HELP_TEXT.as_bytes()).await?;
    output.write_all(b"\n").await?;

    let mut lines = input.lines();
    loop {
        output.write_all(b"> ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_line(&line) {
            Command::Quit => break,
            Command::Reset => {
                widget.reset_session().await;
                output.write_all(b"(new conversation)\n").await?;
            }
            Command::Help => {
                output.write_all(HELP_TEXT.as_bytes()).await?;
                output.write_all(b"\n").await?;
            }
            Command::Message(text) => {
                if text.trim().is_empty() {
                    continue;
                }
                output.write_all(format!("{LOADING_TEXT}\n").as_bytes()).await?;
                output.flush().await?;

                match widget.submit(text).await {
                    Submission::Replied(reply) => {
                        write_reply(&mut output, persona, &reply).await?;
                    }
                    Submission::Busy => {
                        output.write_all(b"(still waiting for the previous reply)\n").await?;
                    }
                    Submission::Ignored => {}
                }
            }
        }
    }

    output.flush().await
}

async fn write_reply<W: AsyncWrite + Unpin>(
    output: &mut W,
    persona: &str,
    text: &str,
) -> std::io::Result<()> {
    output
        .write_all(format!("{persona}: {text}\n").as_bytes())
        .await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use athena_ai::{
        AiError, ChatProvider, ChatSession, MessageRelay, ProviderReply, SessionManager,
        SessionSpec, StaticCredential,
    };

    use super::*;

    struct UpperProvider;
    struct UpperSession;

    #[async_trait]
    impl ChatProvider for UpperProvider {
        async fn create_session(
            &self,
            _credential: &str,
            _spec: &SessionSpec,
        ) -> Result<Box<dyn ChatSession>, AiError> {
            Ok(Box::new(UpperSession))
        }
    }

    #[async_trait]
    impl ChatSession for UpperSession {
        async fn send(&mut self, text: &str) -> Result<ProviderReply, AiError> {
            Ok(ProviderReply {
                text: Some(text.to_uppercase()),
                ..ProviderReply::default()
            })
        }
    }

    fn widget() -> ChatWidget {
        let manager = SessionManager::new(
            Arc::new(UpperProvider),
            Box::new(StaticCredential::new("k")),
            SessionSpec::new("gemini-2.5-flash", "You are Athena."),
        );
        ChatWidget::new(Arc::new(MessageRelay::new(manager)), "Welcome.")
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_line("/quit"), Command::Quit);
        assert_eq!(parse_line("  /exit "), Command::Quit);
        assert_eq!(parse_line("/reset"), Command::Reset);
        assert_eq!(parse_line("/help"), Command::Help);
        assert_eq!(parse_line("visa?"), Command::Message("visa?"));
    }

    fn persona() -> PersonaConfig {
        PersonaConfig {
            name: "Athena".into(),
            ..PersonaConfig::default()
        }
    }

    #[test]
    fn banner_includes_title() {
        assert_eq!(banner(&persona()), "Athena, Senior Visa Specialist");
        let untitled = PersonaConfig {
            title: "  ".into(),
            ..persona()
        };
        assert_eq!(banner(&untitled), "Athena");
    }

    #[tokio::test]
    async fn conversation_until_quit() {
        let widget = widget();
        let input: &[u8] = b"hello\n\n/quit\nnever sent\n";
        let mut output = Vec::new();

        run(&widget, &persona(), input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Athena, Senior Visa Specialist\nAthena: Welcome.\n"));
        assert!(text.contains(LOADING_TEXT));
        assert!(text.contains("Athena: HELLO\n"));
        assert!(!text.contains("NEVER SENT"));
        // Greeting, one user turn, one model turn.
        assert_eq!(widget.transcript().len(), 3);
    }

    #[tokio::test]
    async fn end_of_input_exits() {
        let widget = widget();
        let input: &[u8] = b"/reset\nvisa\n";
        let mut output = Vec::new();

        run(&widget, &persona(), input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("(new conversation)"));
        assert!(text.contains("Athena: VISA\n"));
    }
}
