//! Working out which permissions the bot lacks before running a handler.
//!
//! Discord sends the bot's effective permissions for the channel an interaction
//! happened in as `app_permissions`, overwrites and all, so no guild cache is
//! needed to answer "can I do this here".

use twilight_model::{
    application::interaction::Interaction,
    guild::Permissions,
    id::{
        marker::{ChannelMarker, GuildMarker},
        Id,
    },
};

/// The channel an interaction happened in, as far as permissions go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelScope {
    pub guild_id: Id<GuildMarker>,
    pub channel_id: Option<Id<ChannelMarker>>,
    pub app_permissions: Option<Permissions>,
}

impl ChannelScope {
    /// Only guild interactions have a scope, DMs never get checked.
    pub fn from_interaction(interaction: &Interaction) -> Option<Self> {
        Some(Self {
            guild_id: interaction.guild_id?,
            channel_id: interaction.channel.as_ref().map(|channel| channel.id),
            app_permissions: interaction.app_permissions,
        })
    }

    /// Permissions the bot holds in this channel, empty if they can't be resolved.
    pub fn granted(&self) -> Permissions {
        match (self.channel_id, self.app_permissions) {
            (Some(_), Some(permissions)) if permissions.contains(Permissions::ADMINISTRATOR) => {
                Permissions::all()
            }
            (Some(_), Some(permissions)) => permissions,
            _ => Permissions::empty(),
        }
    }
}

/// Display names of every permission in `required` that isn't in `granted`.
///
/// Names come out in the order the flags are declared, e.g. `SEND_MESSAGES`
/// becomes `Send Messages`.
pub fn missing(granted: Permissions, required: Permissions) -> Vec<String> {
    required
        .difference(granted)
        .iter_names()
        .map(|(name, _)| display_name(name))
        .collect()
}

/// Like [`missing`], measured against what the bot holds in `scope`.
pub fn missing_in(scope: &ChannelScope, required: Permissions) -> Vec<String> {
    missing(scope.granted(), required)
}

/// `MANAGE_GUILD_EXPRESSIONS` -> `Manage Guild Expressions`
pub fn display_name(identifier: &str) -> String {
    identifier
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
