use herald_shared::DiscordEventMeta;
use twilight_gateway::Event;

pub use context::{Context, InteractionContext};
pub use module::{builder::ModuleBuilder, registry::Registry, Module};
pub use reply::{ErrorKind, ErrorResponder, InteractionResponder};
pub use router::{Dispatch, HandlerFailure, Ignored, InteractionRouter};

pub mod context;
pub mod handler;
pub mod interaction;
pub mod macros;
pub mod module;
pub mod permissions;
pub mod reply;
pub mod router;

#[cfg(test)]
pub(crate) mod testing;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

pub async fn handle<T: Clone + Send + Sync, R: ErrorResponder>(
    meta: DiscordEventMeta,
    ctx: Context<T>,
    router: &InteractionRouter<T, R>,
    event: Event,
) {
    match event {
        Event::Ready(ready) => {
            if ctx.mark_ready(ready.user) {
                let name = ctx.user().map(|user| user.name.as_str()).unwrap_or_default();
                tracing::info!(shard = meta.shard, user = name, "identity resolved from READY");
            }
        }
        Event::InteractionCreate(event) => {
            // outcome is already logged where it matters
            router.route(*event, ctx, meta).await;
        }
        e => tracing::debug!(event = ?e.kind(), "unhandled event"),
    }
}
