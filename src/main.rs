mod logging;
mod pipeline;

use clap::{Parser, Subcommand};
use relay_core::{config, error::RelayError, message::IncomingMessage};
use relay_text::{decode_possible_base64, name_from_first_last_username, split_msg};
use serde::Serialize;
use std::io::Read;
use tracing::info;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "relay",
    version,
    about = "Relay: message text normalization for channel gateways"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode text if it is base64-encoded, otherwise echo it back.
    Decode {
        /// Text to inspect (read from stdin when omitted).
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Split text into length-limited segments (JSON array).
    Split {
        /// Maximum characters per segment.
        #[arg(long, conflicts_with = "channel")]
        max: Option<usize>,
        /// Use the configured limit of this channel.
        #[arg(long)]
        channel: Option<String>,
        /// Text to split (read from stdin when omitted).
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Build a contact display name from its parts.
    Name {
        #[arg(long, default_value = "")]
        first: String,
        #[arg(long, default_value = "")]
        last: String,
        #[arg(long, default_value = "")]
        username: String,
    },
    /// Normalize an incoming message (JSON on stdin).
    Inbound,
    /// Prepare outgoing segments for a channel (JSON array).
    Outbound {
        /// Target channel name.
        #[arg(long)]
        channel: String,
        /// Platform-specific reply target (e.g. chat_id).
        #[arg(long)]
        reply_target: Option<String>,
        /// Text to send (read from stdin when omitted).
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries command output.
    let (subscriber, filter) = logging::subscriber(std::io::stderr);
    subscriber.init();

    let cfg = config::load(&cli.config)?;
    logging::apply_log_level(&filter, &cfg.relay.log_level);

    match cli.command {
        Commands::Decode { text } => {
            let input = read_input(text)?;
            println!("{}", decode_possible_base64(&input));
        }
        Commands::Split { max, channel, text } => {
            let input = read_input(text)?;
            let max = max
                .map(|m| m.max(1))
                .unwrap_or_else(|| cfg.max_length_for(channel.as_deref().unwrap_or_default()));
            print_json(&split_msg(&input, max))?;
        }
        Commands::Name {
            first,
            last,
            username,
        } => {
            println!("{}", name_from_first_last_username(&first, &last, &username));
        }
        Commands::Inbound => {
            let input = read_input(Vec::new())?;
            let msg: IncomingMessage = serde_json::from_str(&input)
                .map_err(|e| RelayError::Message(format!("invalid incoming message: {e}")))?;
            let record = pipeline::normalize_inbound(&msg, &cfg.text);
            info!(channel = %record.channel, id = %record.id, "normalized inbound message");
            print_json(&record)?;
        }
        Commands::Outbound {
            channel,
            reply_target,
            text,
        } => {
            let input = read_input(text)?;
            let out =
                pipeline::prepare_outbound(&channel, &input, reply_target.as_deref(), &cfg);
            info!(channel = %channel, segments = out.len(), "prepared outbound message");
            print_json(&out)?;
        }
    }

    Ok(())
}

/// Join CLI words, or read all of stdin (minus one trailing newline) when there are none.
fn read_input(words: Vec<String>) -> Result<String, RelayError> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), RelayError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
