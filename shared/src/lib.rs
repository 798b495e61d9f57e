use serde::{Deserialize, Serialize};

pub mod color;

/// Envelope the gateway puts on the queue, one per gateway dispatch.
#[derive(Serialize, Deserialize, Debug)]
pub struct DiscordEvent {
    pub meta: DiscordEventMeta,
    pub payload: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DiscordEventMeta {
    pub uuid: uuid::Uuid, // used for tracing
    pub shard: u32,
}

impl DiscordEventMeta {
    pub fn new(shard: u32) -> Self {
        Self {
            uuid: uuid::Uuid::now_v7(),
            shard,
        }
    }
}

impl DiscordEvent {
    pub fn new(shard: u32, payload: String) -> Self {
        Self {
            meta: DiscordEventMeta::new(shard),
            payload,
        }
    }

    pub fn from_slice(data: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discord_event_from_slice_test() {
        let event = DiscordEvent::new(3, r#"{"op":11}"#.into());
        let bytes = serde_json::to_vec(&event).unwrap();

        let decoded = DiscordEvent::from_slice(&bytes).unwrap();
        assert_eq!(decoded.meta.shard, 3);
        assert_eq!(decoded.meta.uuid, event.meta.uuid);
        assert_eq!(decoded.payload, r#"{"op":11}"#);
    }

    #[test]
    fn discord_event_from_slice_rejects_garbage_test() {
        assert!(DiscordEvent::from_slice(b"not json").is_err());
        assert!(DiscordEvent::from_slice(br#"{"payload":"x"}"#).is_err());
    }
}
