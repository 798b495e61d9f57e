use serde::{Deserialize, Serialize};
use serde_envfile::Error;

#[derive(Serialize, Deserialize, Debug)]
pub struct Config {
    pub discord_token: String,
    pub discord_proxy: Option<String>,
    pub rabbitmq_address: String,
    #[serde(default = "default_queue")]
    pub rabbitmq_queue: String,

    pub handler_id: u32,
}

fn default_queue() -> String {
    String::from("discord")
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        serde_envfile::from_env()
    }
}
