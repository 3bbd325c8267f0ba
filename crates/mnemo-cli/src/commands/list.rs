//! `mnemo list` - print stored conversations, most recent first.

use std::sync::Arc;

use colored::Colorize;

use mnemo_application::ConversationService;

pub async fn run(service: Arc<ConversationService>) {
    let listing = service.list_conversations().await;
    if listing.is_empty() {
        println!("{}", "No conversations yet.".dimmed());
        return;
    }
    for (id, title) in listing {
        println!("{}  {}", id.dimmed(), title);
    }
}
