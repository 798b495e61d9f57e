use twilight_model::{application::command::CommandType, guild::Permissions};
use twilight_util::builder::command::CommandBuilder;

use herald_framework::{handler_func, Error, Module, ModuleBuilder};

use crate::context::{CommandContext, Services};

pub(crate) fn build() -> Module<Services> {
    ModuleBuilder::<Services>::new("core")
        .command(
            CommandBuilder::new("ping", "check whether the bot is alive", CommandType::ChatInput)
                .build(),
            // interaction responses don't need channel permissions
            Permissions::empty(),
            handler_func!(ping),
        )
        .build()
}

pub(crate) async fn ping(ctx: CommandContext) -> Result<(), Error> {
    ctx.reply(pong_message(ctx.services.handler_id, ctx.meta.shard))
        .await?;

    Ok(())
}

fn pong_message(handler_id: u32, shard: u32) -> String {
    format!("pong! (handler #{}, shard #{})", handler_id, shard)
}
