//! Terminal chat for a single interview.
//!
//! Usage: `interview-chat [language]`

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use hiring_assistant::application::InterviewError;
use hiring_assistant::bootstrap::{build_controller, init_tracing};
use hiring_assistant::config::AppConfig;
use hiring_assistant::domain::interview::{InterviewLanguage, InterviewSession};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing("warn", false);
    config.validate()?;

    let language = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<InterviewLanguage>()?,
        None => config.interview.default_language,
    };

    let controller = build_controller(&config)?;
    let mut session = InterviewSession::new(language);

    println!("Assistant: {}\n", controller.start(&mut session)?);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("You: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match controller.process_user_turn(&mut session, &line).await {
            Ok(outcome) => {
                println!("\nAssistant: {}\n", outcome.reply);
                if let Some(err) = &outcome.persistence_error {
                    eprintln!("[notice] The transcript could not be saved: {}", err);
                }
                println!(
                    "[phase: {} | sentiment: {}]\n",
                    outcome.phase,
                    outcome.sentiment.display_label()
                );
                if outcome.interview_ended {
                    break;
                }
            }
            Err(InterviewError::EmptyMessage) => continue,
            Err(e @ InterviewError::SessionClosed) => {
                println!("[notice] {}", e);
                break;
            }
            Err(e) => println!("[notice] {}\n", e),
        }
    }

    Ok(())
}
