//! Line-oriented console adapters: a numbered-menu UI and a stub admin
//! collaborator. Deliberately thin - everything interesting happens behind
//! the ports.

use std::io::{self, Write as _};

use async_trait::async_trait;

use crate::app::ActionResult;
use crate::ports::{AdminPort, TurnView, UiPort};

#[derive(Debug, Default)]
pub struct ConsoleUi;

impl ConsoleUi {
    pub fn new() -> Self {
        Self
    }

    /// Print a numbered menu and read until the input names an option,
    /// either by number or by (case-insensitive) label.
    fn prompt(items: &[String]) -> String {
        loop {
            for (index, item) in items.iter().enumerate() {
                println!("  {}. {item}", index + 1);
            }
            print!("> ");
            let _ = io::stdout().flush();

            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => {
                    // Stdin is gone; fall back to the first option so the
                    // choice contract ("always returns a value") holds.
                    tracing::warn!("stdin closed during prompt, using first option");
                    return items.first().cloned().unwrap_or_default();
                }
                Ok(_) => {}
            }

            let line = line.trim();
            if let Ok(number) = line.parse::<usize>() {
                if (1..=items.len()).contains(&number) {
                    return items[number - 1].clone();
                }
            }
            if let Some(found) = items.iter().find(|item| item.eq_ignore_ascii_case(line)) {
                return found.clone();
            }
            println!("Please choose one of the listed options.");
        }
    }
}

#[async_trait]
impl UiPort for ConsoleUi {
    async fn choose_action(&self, view: &TurnView, actions: &[String]) -> String {
        println!();
        println!("== {} ==", view.room_name);
        if !view.room_description.is_empty() {
            println!("{}", view.room_description);
        }
        if !view.monsters.is_empty() {
            println!("Hostiles: {}", view.monsters.join(", "));
        }
        let exits = view
            .exits
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "Exits: {}",
            if exits.is_empty() {
                "none".to_string()
            } else {
                exits
            }
        );
        println!(
            "{} - {} HP, {} XP",
            view.player_name, view.player_health, view.player_experience
        );
        Self::prompt(actions)
    }

    async fn choose_option(&self, prompt: &str, options: &[String]) -> String {
        println!("{prompt}:");
        Self::prompt(options)
    }

    async fn show(&self, result: &ActionResult) {
        if result.success {
            println!("{}", result.detail);
        } else {
            println!("! {}", result.message);
        }
    }

    async fn choose_admin_action(&self, actions: &[String]) -> String {
        println!();
        println!("== Administration ==");
        Self::prompt(actions)
    }
}

/// Admin collaborator stub: the authoring workflows live in external
/// tooling, so selections are acknowledged and logged, nothing more.
#[derive(Debug, Default)]
pub struct LoggingAdmin;

#[async_trait]
impl AdminPort for LoggingAdmin {
    async fn run(&self, selection: &str) {
        tracing::info!(selection, "admin workflow requested");
        println!("'{selection}' is handled by the authoring tools, not by this binary.");
    }
}
