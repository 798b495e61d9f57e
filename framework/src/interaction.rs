use herald_shared::DiscordEventMeta;
use twilight_model::{
    application::{command::CommandType, interaction::InteractionData},
    channel::message::component::ComponentType,
    gateway::payload::incoming::InteractionCreate,
};

use crate::context::{CommandContext, Context, InteractionContext, SelectMenuContext};

/// Sorts an interaction into a command or a select menu.
///
/// Anything else (buttons, modals, autocomplete, context menu commands) is
/// `None`, so kinds discord adds later fall through quietly.
pub fn parse<T: Clone + Send + Sync>(
    event: &InteractionCreate,
    meta: DiscordEventMeta,
    ctx: Context<T>,
) -> Option<InteractionContext<T>> {
    match &event.data {
        Some(InteractionData::ApplicationCommand(command))
            if command.kind == CommandType::ChatInput =>
        {
            Some(InteractionContext::Command(CommandContext::from_context(
                meta,
                ctx,
                event.clone(),
                *command.clone(),
            )))
        }
        Some(InteractionData::MessageComponent(component))
            if is_select_menu(component.component_type) =>
        {
            Some(InteractionContext::SelectMenu(
                SelectMenuContext::from_context(meta, ctx, event.clone(), *component.clone()),
            ))
        }
        _ => None,
    }
}

fn is_select_menu(kind: ComponentType) -> bool {
    matches!(
        kind,
        ComponentType::TextSelectMenu
            | ComponentType::UserSelectMenu
            | ComponentType::RoleSelectMenu
            | ComponentType::MentionableSelectMenu
            | ComponentType::ChannelSelectMenu
    )
}
