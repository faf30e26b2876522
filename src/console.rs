//! Console delivery and the interactive reminder console.

use crate::tools;
use async_trait::async_trait;
use sprout_core::{error::SproutError, message::ReminderFire, traits::Notifier};
use sprout_reminders::ReminderManager;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// Prints reminder fires to stdout.
pub struct ConsoleNotifier {
    /// Full alarm banner vs a single line per fire.
    banner: bool,
}

impl ConsoleNotifier {
    pub fn new(banner: bool) -> Self {
        Self { banner }
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    fn name(&self) -> &str {
        "console"
    }

    async fn deliver(&self, fire: &ReminderFire) -> Result<(), SproutError> {
        let time = fire.fired_at.format("%Y-%m-%d %H:%M:%S");
        if self.banner {
            println!();
            println!("{}", "=".repeat(60));
            println!("MEDICATION REMINDER");
            println!("{}", "=".repeat(60));
            println!("Time: {time}");
            println!("Medication: {}", fire.medication_name);
            println!("Message: It's time to take {}", fire.medication_name);
            println!("Next reminder in: {} hours", fire.interval_hours);
            println!("{}", "=".repeat(60));
            println!();
        } else {
            println!(
                "[{time}] Reminder #{}: take {}",
                fire.sequence, fire.medication_name
            );
        }
        Ok(())
    }
}

/// Interactive reminder console on stdin.
///
/// Free text is treated as a schedule instruction; `list`, `cancel <name>`,
/// `cancel all`, and `quit` are commands. Fires print live between prompts.
pub async fn run(manager: ReminderManager, assistant_name: &str) -> anyhow::Result<()> {
    println!("{assistant_name} reminder console");
    println!("Describe a schedule ('Take Zyrtec every 12 hours'), or use:");
    println!("  list | cancel <name> | cancel all | quit");
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();

        match input {
            "" => {}
            "quit" | "exit" => break,
            "list" => println!("{}", tools::list_medication_reminders(&manager)),
            "cancel all" => {
                let count = manager.cancel_all();
                println!("Cancelled {count} medication reminder(s).");
            }
            _ => {
                if let Some(name) = input.strip_prefix("cancel ") {
                    println!("{}", tools::cancel_medication_reminder(&manager, name.trim()));
                } else {
                    println!("{}", tools::set_medication_reminder(&manager, input));
                }
            }
        }
    }

    info!("console session ended");
    Ok(())
}
