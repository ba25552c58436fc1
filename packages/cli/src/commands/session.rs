//! Stored-session management. Storage only: tokens are issued elsewhere and
//! pasted in; there is no login flow here.

use clap::Subcommand;
use colored::*;

use mechlink_client::{Session, SessionStore};

#[derive(Debug, Subcommand)]
pub enum SessionCommands {
    /// Store a bearer token for subsequent commands
    SetToken {
        /// The bearer token issued by the marketplace
        token: String,
        /// Your mechanic user id
        #[arg(long)]
        user_id: i64,
        /// Display name, shown in `session show`
        #[arg(long)]
        name: Option<String>,
    },
    /// Show the stored session
    Show,
    /// Remove the stored session
    Clear,
}

pub async fn handle(command: SessionCommands, store: &SessionStore) -> anyhow::Result<()> {
    match command {
        SessionCommands::SetToken {
            token,
            user_id,
            name,
        } => {
            let token = token.trim().to_string();
            anyhow::ensure!(!token.is_empty(), "token must not be empty");
            let mut session = Session::new(token, user_id);
            session.user_name = name;
            store.save(&session).await?;
            println!("{} session saved to {}", "✓".green(), store.path().display());
            Ok(())
        }
        SessionCommands::Show => {
            match store.load().await? {
                Some(session) => {
                    let name = session.user_name.as_deref().unwrap_or("(no name)");
                    println!("user    {} {}", session.user_id, name);
                    println!("token   {}", mask(&session.token));
                    println!("saved   {}", session.saved_at.format("%Y-%m-%d %H:%M UTC"));
                }
                None => println!("No session stored."),
            }
            Ok(())
        }
        SessionCommands::Clear => {
            store.clear().await?;
            println!("{} session cleared", "✓".green());
            Ok(())
        }
    }
}

fn mask(token: &str) -> String {
    if token.len() <= 8 {
        return "********".to_string();
    }
    format!("{}…{}", &token[..4], &token[token.len() - 4..])
}
