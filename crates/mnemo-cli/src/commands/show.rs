//! `mnemo show <id>` - print the full history of one conversation.

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;

use mnemo_application::ConversationService;

pub async fn run(service: Arc<ConversationService>, id: &str) -> Result<()> {
    let conversation = service.get_conversation(id).await?;
    println!("{} {}", "Title:".bold(), conversation.title);

    for turn in &conversation.turns {
        println!("{} {}", "you>".cyan().bold(), turn.user_message);
        match &turn.assistant_response {
            Some(response) => println!("{} {}", "mnemo>".green().bold(), response),
            None => println!("{}", "mnemo> (pending)".dimmed()),
        }
    }

    Ok(())
}
