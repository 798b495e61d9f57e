use std::{any::Any, fmt, future::Future, panic::AssertUnwindSafe};

use futures::FutureExt as _;
use herald_shared::DiscordEventMeta;
use twilight_model::{gateway::payload::incoming::InteractionCreate, guild::Permissions};

use crate::{
    context::InteractionContext,
    handler::InteractionHandler,
    interaction,
    permissions::{self, ChannelScope},
    reply::{self, ErrorKind, ErrorResponder, InteractionResponder},
    Context, Error, Registry,
};

/// What the router did with an interaction.
#[derive(Debug)]
pub enum Dispatch {
    Ignored(Ignored),
    /// The bot lacks these permissions, the user got told and the handler didn't run.
    Rejected(Vec<String>),
    Completed,
    Failed(HandlerFailure),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    NotReady,
    UnknownKind,
    Unregistered,
}

/// A handler that returned an error or panicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerFailure {
    pub handler: String,
    pub report: String,
}

impl HandlerFailure {
    fn from_error(handler: String, err: &(dyn std::error::Error + 'static)) -> Self {
        let mut report = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            report.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }

        Self { handler, report }
    }

    fn from_panic(handler: String, payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            String::from("non-string panic payload")
        };

        Self {
            handler,
            report: format!("panicked: {}", message),
        }
    }
}

impl fmt::Display for HandlerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.handler, self.report)
    }
}

/// Routes commands and select menus to their handlers, checking the bot's
/// channel permissions first.
pub struct InteractionRouter<T: Clone + Send + Sync, R = InteractionResponder> {
    registry: Registry<T>,
    responder: R,
}

impl<T: Clone + Send + Sync> InteractionRouter<T> {
    pub fn new(registry: Registry<T>) -> Self {
        Self::with_responder(registry, InteractionResponder)
    }
}

impl<T: Clone + Send + Sync, R: ErrorResponder> InteractionRouter<T, R> {
    pub fn with_responder(registry: Registry<T>, responder: R) -> Self {
        Self {
            registry,
            responder,
        }
    }

    pub fn registry(&self) -> &Registry<T> {
        &self.registry
    }

    /// Handles a single interaction, nothing that goes wrong in here escapes.
    pub async fn route(
        &self,
        event: InteractionCreate,
        ctx: Context<T>,
        meta: DiscordEventMeta,
    ) -> Dispatch {
        if !ctx.is_ready() {
            return Dispatch::Ignored(Ignored::NotReady);
        }

        let Some(interaction) = interaction::parse(&event, meta, ctx.clone()) else {
            return Dispatch::Ignored(Ignored::UnknownKind);
        };

        match interaction {
            InteractionContext::Command(command_ctx) => {
                let Some(command) = self.registry.find_command(&command_ctx.command.name) else {
                    return Dispatch::Ignored(Ignored::Unregistered);
                };

                if let Some(missing) = self.check(&ctx, &event, command, "command").await {
                    return Dispatch::Rejected(missing);
                }

                tracing::info!(
                    uuid = ?command_ctx.meta.uuid,
                    shard = command_ctx.meta.shard,
                    command = %command_ctx.command.name,
                    "running command"
                );

                guarded(format!("/{}", command.key()), command.run(command_ctx)).await
            }
            InteractionContext::SelectMenu(menu_ctx) => {
                let Some(menu) = self.registry.find_select_menu(&menu_ctx.data.custom_id) else {
                    return Dispatch::Ignored(Ignored::Unregistered);
                };

                if let Some(missing) = self.check(&ctx, &event, menu, "select menu").await {
                    return Dispatch::Rejected(missing);
                }

                tracing::info!(
                    uuid = ?menu_ctx.meta.uuid,
                    shard = menu_ctx.meta.shard,
                    custom_id = %menu_ctx.data.custom_id,
                    "running select menu"
                );

                guarded(format!("select menu {}", menu.key()), menu.run(menu_ctx)).await
            }
        }
    }

    /// Permission gate, returns the missing permissions after telling the user about them.
    async fn check(
        &self,
        ctx: &Context<T>,
        event: &InteractionCreate,
        handler: &impl InteractionHandler<String>,
        target: &str,
    ) -> Option<Vec<String>> {
        let scope = ChannelScope::from_interaction(event)?;
        let required: Permissions = handler.required_permissions();

        let missing = permissions::missing_in(&scope, required);
        if missing.is_empty() {
            return None;
        }

        tracing::info!(
            target_kind = target,
            key = %handler.key(),
            guild = %scope.guild_id,
            missing = ?missing,
            "missing permissions"
        );

        let message = reply::missing_permissions_message(event.author_id(), target, &missing);
        if let Err(err) = self
            .responder
            .reply_with_error(ctx, event, ErrorKind::MissingPermissions, message)
            .await
        {
            tracing::warn!(?err, "failed to send missing permissions reply");
        }

        Some(missing)
    }
}

// catches both `Err` and panics, neither may reach the transport
async fn guarded(handler: String, run: impl Future<Output = Result<(), Error>>) -> Dispatch {
    let failure = match AssertUnwindSafe(run).catch_unwind().await {
        Ok(Ok(())) => return Dispatch::Completed,
        Ok(Err(err)) => HandlerFailure::from_error(handler, &*err),
        Err(payload) => HandlerFailure::from_panic(handler, payload),
    };

    tracing::error!(handler = %failure.handler, "{}", failure.report);
    Dispatch::Failed(failure)
}
