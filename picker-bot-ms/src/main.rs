#[macro_use]
extern crate log;
extern crate env_logger;

use env_logger::{Builder, Target};

extern crate picker_bot_ms;

use picker_bot_ms::{Bot, BotConfig};
use picker_bot_ms::transport;

use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread;

/// Reads one message per line from stdin and writes each reply to stdout
fn message_handler(bot: Arc<Bot>)
{
    let stdin = io::stdin();
    let stdout = io::stdout();

    for line in stdin.lock().lines()
    {
        let line = match line
        {
            Err(error) =>
            {
                error!("Failed to read message because {}", error);
                break;
            },
            Ok(line) => line,
        };

        if line.trim().is_empty()
        {
            continue;
        }

        let (message, encoding) = match transport::decode(&bot.config().prefix, &line)
        {
            Err(error) =>
            {
                warn!("Dropping message: {:?} because {}", line, error);
                continue;
            },
            Ok(decoded) => decoded,
        };

        let reply = match bot.handle(&message)
        {
            None =>
            {
                trace!("Ignoring message: {:?}", message.content);
                continue;
            },
            Some(reply) => reply,
        };

        match transport::encode(&reply, encoding)
        {
            Err(error) => error!("Failed to encode reply because {}", error),
            Ok(encoded) =>
            {
                let mut out = stdout.lock();
                if let Err(error) = writeln!(out, "{}", encoded).and_then(|_| out.flush())
                {
                    error!("Failed to send reply because {}", error);
                    break;
                }
            },
        }
    }

    info!("Input closed, shutting down");
}

fn main() {
    /* Log, stdout is reserved for replies */
    let mut builder = Builder::new();
    builder.target(Target::Stderr);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse(&filters);
    }
    builder.init();

    let config = BotConfig::from_vars(|key| env::var(key).ok());
    info!("Starting with prefix: {:?}, atomic loads: {}", config.prefix, config.atomic_load);

    let bot = Arc::new(Bot::new(config));

    let handler_bot = bot.clone();
    let message_thread = thread::spawn(move || {
        message_handler(handler_bot);
    });

    let _ = message_thread.join();
}
