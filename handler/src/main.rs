mod amqp;
mod config;
mod context;
mod modules;

use std::{error::Error, sync::Arc};

use twilight_gateway::{Event, EventTypeFlags};

use herald_framework::{Context, InteractionRouter, Registry};
use herald_shared::{DiscordEvent, DiscordEventMeta};

use config::Config;
use context::Services;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // set-up logging
    tracing_subscriber::fmt::init();

    // load .env into environment vars, ignore if not found
    match dotenvy::dotenv().map(|_| ()) {
        Err(err) if err.not_found() => {
            tracing::warn!("no .env file found");
        }
        result => result?,
    };

    // create config from environment vars
    let config = Config::from_env()?;

    let mut client_builder = twilight_http::Client::builder().token(config.discord_token);
    if let Some(proxy) = config.discord_proxy {
        client_builder = client_builder.proxy(proxy, true).ratelimiter(None);
    }
    let client = Arc::new(client_builder.build());

    let app = client.current_user_application().await?.model().await?;
    let context = Context::new(
        app.id,
        Services {
            handler_id: config.handler_id,
        },
        Arc::clone(&client),
    );

    let mut registry = Registry::new();
    registry.register(modules::core::build());
    registry.register(modules::roles::build());

    // register commands
    tracing::info!("registering commands");
    context
        .interaction()
        .set_global_commands(&registry.global_commands())
        .await?;

    // READY from the gateway marks us ready as well, so this isn't fatal
    match fetch_current_user(&client).await {
        Ok(user) => {
            tracing::info!(user = %user.name, "identity resolved");
            context.mark_ready(user);
        }
        Err(err) => tracing::warn!(?err, "couldn't fetch current user, waiting for READY"),
    }

    let router = Arc::new(InteractionRouter::new(registry));
    let mut consumer = amqp::create(&config.rabbitmq_address, &config.rabbitmq_queue).await?;

    tracing::info!(handler = config.handler_id, "starting main loop...");
    while let Some(message) = consumer.recv().await {
        let Some((meta, event)) = decode(&message) else {
            continue;
        };

        tracing::debug!(
            event = ?event.kind(),
            uuid = ?meta.uuid,
            shard = meta.shard,
            "event received",
        );

        // interactions don't wait on each other
        let ctx = context.clone();
        let router = Arc::clone(&router);
        tokio::spawn(async move {
            herald_framework::handle(meta, ctx, &router, event).await;
        });
    }

    tracing::warn!("queue closed, shutting down");
    Ok(())
}

async fn fetch_current_user(
    client: &twilight_http::Client,
) -> Result<twilight_model::user::CurrentUser, Box<dyn Error>> {
    Ok(client.current_user().await?.model().await?)
}

// bad messages are skipped, they shouldn't take the handler down
fn decode(data: &[u8]) -> Option<(DiscordEventMeta, Event)> {
    match parse_message(data) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!(?err, "couldn't parse message");
            None
        }
    }
}

/// Decodes a queue message, `None` for events the handler doesn't care about.
fn parse_message(data: &[u8]) -> Result<Option<(DiscordEventMeta, Event)>, Box<dyn Error>> {
    let discord_event = DiscordEvent::from_slice(data)?;

    let Some(event) = twilight_gateway::parse(
        discord_event.payload,
        EventTypeFlags::READY | EventTypeFlags::INTERACTION_CREATE,
    )?
    else {
        return Ok(None);
    };

    Ok(Some((discord_event.meta, Event::from(event))))
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use super::*;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("lock poisoned").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn message(payload: &str) -> Vec<u8> {
        serde_json::to_vec(&DiscordEvent::new(1, payload.into())).unwrap()
    }

    #[test]
    fn parse_message_skips_uninteresting_events() {
        let heartbeat_ack = message(r#"{"op":11,"d":null}"#);
        assert!(parse_message(&heartbeat_ack).unwrap().is_none());

        let typing = message(
            r#"{"op":0,"s":42,"t":"TYPING_START","d":{"channel_id":"1","user_id":"2","timestamp":1700000000}}"#,
        );
        assert!(parse_message(&typing).unwrap().is_none());
    }

    #[test]
    fn parse_message_rejects_garbage() {
        assert!(parse_message(b"not json").is_err());
    }

    #[test]
    fn decode_warns_and_skips_garbage() {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let decoded = tracing::subscriber::with_default(subscriber, || decode(b"not json"));
        assert!(decoded.is_none());

        let logs = String::from_utf8_lossy(&buffer.0.lock().expect("lock poisoned")).into_owned();
        assert!(logs.contains("WARN"), "logs: {}", logs);
        assert!(logs.contains("couldn't parse message"), "logs: {}", logs);
        assert!(!logs.contains("ERROR"), "logs: {}", logs);
    }
}
