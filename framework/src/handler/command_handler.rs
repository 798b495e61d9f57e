use std::{future::Future, pin::Pin};

use twilight_model::{application::command::Command, guild::Permissions};

use super::InteractionHandler;
use crate::{context::CommandContext, Error};

pub type CommandFunc<T> =
    fn(CommandContext<T>) -> Pin<Box<dyn Future<Output = Result<(), Error>> + Send>>;

#[derive(Clone)]
pub struct CommandHandler<T: Clone + Send + Sync> {
    pub module: String,
    pub definition: Command,
    pub permissions: Permissions,
    pub func: CommandFunc<T>,
}

impl<T: Clone + Send + Sync> InteractionHandler<String> for CommandHandler<T> {
    fn key(&self) -> String {
        self.definition.name.clone()
    }

    fn required_permissions(&self) -> Permissions {
        self.permissions
    }
}

impl<T: Clone + Send + Sync> CommandHandler<T> {
    pub async fn run(&self, ctx: CommandContext<T>) -> Result<(), Error> {
        (self.func)(ctx).await
    }
}
