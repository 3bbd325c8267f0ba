//! Interactive chat REPL.

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use mnemo_application::{ChatUseCase, ConversationService};
use mnemo_core::config::AppConfig;
use mnemo_infrastructure::OllamaClient;

use crate::speech::NoopSpeech;

/// Runs the chat loop until the user quits.
pub async fn run(
    service: Arc<ConversationService>,
    config: &AppConfig,
    conversation: Option<String>,
    speak: bool,
) -> Result<()> {
    if let Some(id) = &conversation {
        let resumed = service.get_conversation(id).await?;
        println!("{} {}", "Resuming:".bold(), resumed.title);
        for turn in resumed.completed_turns() {
            println!("{} {}", "you>".cyan().bold(), turn.user);
            println!("{} {}", "mnemo>".green().bold(), turn.assistant);
        }
    }

    let inference = Arc::new(OllamaClient::new(&config.ollama_base_url, &config.model));
    let chat = ChatUseCase::new(
        service.clone(),
        inference,
        Some(Arc::new(NoopSpeech)),
        config.system_instruction.clone(),
    );

    println!(
        "{}",
        "Type a message, /new for a fresh conversation, /quit to exit.".dimmed()
    );

    let mut editor = DefaultEditor::new()?;
    let mut active = conversation;

    loop {
        let line = match editor.readline(&"you> ".cyan().bold().to_string()) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        editor.add_history_entry(input)?;

        match input {
            "/quit" | "/exit" => break,
            "/new" => {
                active = None;
                println!("{}", "Started a new conversation.".dimmed());
                continue;
            }
            "/list" => {
                print_listing(&service).await;
                continue;
            }
            _ => {}
        }

        match chat.send_message(active.as_deref(), input, speak).await {
            Ok(reply) => {
                active = Some(reply.conversation_id);
                println!("{} {}", "mnemo>".green().bold(), reply.response);
                if let Some(audio) = reply.audio {
                    println!("{} {}", "audio:".dimmed(), audio.display());
                }
            }
            Err(e) => {
                // The turn stays pending; the user can retry or move on.
                eprintln!("{} {}", "error:".red().bold(), e);
            }
        }
    }

    Ok(())
}

async fn print_listing(service: &ConversationService) {
    for (id, title) in service.list_conversations().await {
        println!("{}  {}", id.dimmed(), title);
    }
}
