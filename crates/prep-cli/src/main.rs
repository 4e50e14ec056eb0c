//! Console front end for the PREP tutor.
//!
//! A single-user REPL transport: each line of input is one inbound
//! message, menus are printed as numbered lists, and typing a number
//! selects the corresponding option.

use anyhow::{Context, Result};
use clap::Parser;
use prep_application::TutorService;
use prep_core::config::PrepConfig;
use prep_core::flow::{MenuOption, Reply};
use prep_interaction::{ExerciseAgentService, OpenAiGenerator};
use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const LOCAL_USER: &str = "local";

#[derive(Parser)]
#[command(name = "prep")]
#[command(about = "PREP - Practice and Review for English Proficiency", long_about = None)]
struct Cli {
    /// Model identifier for the generation service
    #[arg(long)]
    model: Option<String>,

    /// Timeout for one generator request, in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Fallback completion-token cap for generator requests
    #[arg(long)]
    max_tokens: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let api_key =
        std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY is not set in the environment")?;
    let mut config =
        PrepConfig::new(api_key).with_request_timeout(Duration::from_secs(cli.timeout_secs));
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }
    if let Some(max_tokens) = cli.max_tokens {
        config = config.with_max_completion_tokens(max_tokens);
    }

    let generator = Arc::new(OpenAiGenerator::new(&config)?);
    let service = TutorService::new(Arc::new(ExerciseAgentService::new(generator)));

    run_repl(&service).await
}

async fn run_repl(service: &TutorService) -> Result<()> {
    let stdin = std::io::stdin();
    let mut last_menu: Vec<MenuOption> = Vec::new();

    render(service.handle_message(LOCAL_USER, "/start").await, &mut last_menu);

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "/quit" || input == "/exit" {
            break;
        }

        let message = resolve_menu_shortcut(input, &last_menu);
        render(service.handle_message(LOCAL_USER, &message).await, &mut last_menu);
    }

    Ok(())
}

/// A bare number picks the matching option from the last printed menu.
fn resolve_menu_shortcut(input: &str, last_menu: &[MenuOption]) -> String {
    if let Ok(index) = input.parse::<usize>() {
        if index >= 1 {
            if let Some(option) = last_menu.get(index - 1) {
                return option.id.clone();
            }
        }
    }
    input.to_string()
}

fn render(replies: Vec<Reply>, last_menu: &mut Vec<MenuOption>) {
    for reply in replies {
        match reply {
            Reply::Text(body) => println!("{body}\n"),
            Reply::Menu { text, options } => {
                println!("{text}");
                for (i, option) in options.iter().enumerate() {
                    println!("  {}. {}", i + 1, option.label);
                }
                println!();
                *last_menu = options;
            }
        }
    }
}
