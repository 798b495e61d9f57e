//! Fixtures shared by the unit tests, built from Discord-shaped JSON.

use std::sync::Arc;

use serde_json::{json, Value};
use twilight_model::{
    gateway::payload::incoming::{InteractionCreate, Ready},
    guild::Permissions,
    id::{
        marker::{ApplicationMarker, ChannelMarker, GuildMarker, UserMarker},
        Id,
    },
    user::CurrentUser,
};

use crate::Context;

pub(crate) const APPLICATION_ID: Id<ApplicationMarker> = Id::new(100);
pub(crate) const GUILD_ID: Id<GuildMarker> = Id::new(200);
pub(crate) const CHANNEL_ID: Id<ChannelMarker> = Id::new(300);
pub(crate) const USER_ID: Id<UserMarker> = Id::new(400);

pub(crate) fn current_user() -> CurrentUser {
    serde_json::from_value(json!({
        "id": APPLICATION_ID.to_string(),
        "username": "herald",
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "banner": null,
        "accent_color": null,
        "bot": true,
        "mfa_enabled": false,
        "verified": true,
        "email": null,
        "locale": "en-US",
        "flags": 0,
        "premium_type": 0,
        "public_flags": 0
    }))
    .expect("valid current user")
}

pub(crate) fn ready() -> Ready {
    let user = serde_json::to_value(current_user()).expect("current user serializes");
    serde_json::from_value(json!({
        "application": { "id": APPLICATION_ID.to_string(), "flags": 0 },
        "guilds": [],
        "resume_gateway_url": "wss://gateway.discord.gg",
        "session_id": "session",
        "user": user,
        "v": 10
    }))
    .expect("valid ready")
}

pub(crate) fn unready_context<T: Clone + Send + Sync>(services: T) -> Context<T> {
    Context::new(
        APPLICATION_ID,
        services,
        Arc::new(twilight_http::Client::new(String::new())),
    )
}

pub(crate) fn context<T: Clone + Send + Sync>(services: T) -> Context<T> {
    let ctx = unready_context(services);
    ctx.mark_ready(current_user());
    ctx
}

fn user() -> Value {
    json!({
        "id": USER_ID.to_string(),
        "username": "someone",
        "discriminator": "0",
        "global_name": "Someone",
        "avatar": null,
        "public_flags": 0
    })
}

fn interaction(kind: u8, data: Value) -> Value {
    json!({
        "id": "500",
        "application_id": APPLICATION_ID.to_string(),
        "type": kind,
        "token": "interaction-token",
        "version": 1,
        "locale": "en-US",
        "authorizing_integration_owners": {},
        "entitlements": [],
        "data": data
    })
}

fn in_guild(mut interaction: Value, app_permissions: Option<Permissions>) -> Value {
    interaction["guild_id"] = json!(GUILD_ID.to_string());
    interaction["guild_locale"] = json!("en-US");
    interaction["context"] = json!(0);
    interaction["channel_id"] = json!(CHANNEL_ID.to_string());
    interaction["channel"] = json!({
        "id": CHANNEL_ID.to_string(),
        "type": 0,
        "guild_id": GUILD_ID.to_string(),
        "name": "general"
    });
    interaction["member"] = json!({
        "user": user(),
        "roles": [],
        "joined_at": "2021-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "nick": null,
        "avatar": null,
        "communication_disabled_until": null,
        "permissions": Permissions::all().bits().to_string()
    });
    if let Some(permissions) = app_permissions {
        interaction["app_permissions"] = json!(permissions.bits().to_string());
    }
    interaction
}

fn in_dm(mut interaction: Value) -> Value {
    interaction["context"] = json!(1);
    interaction["channel_id"] = json!(CHANNEL_ID.to_string());
    interaction["channel"] = json!({
        "id": CHANNEL_ID.to_string(),
        "type": 1
    });
    interaction["user"] = user();
    interaction
}

fn command_data(name: &str, kind: u8) -> Value {
    json!({
        "id": "600",
        "name": name,
        "type": kind,
        "options": []
    })
}

fn component_data(custom_id: &str, component_type: u8) -> Value {
    json!({
        "custom_id": custom_id,
        "component_type": component_type,
        "values": ["700"]
    })
}

fn parse(value: Value) -> InteractionCreate {
    InteractionCreate(serde_json::from_value(value).expect("valid interaction"))
}

pub(crate) fn guild_command(name: &str, app_permissions: Option<Permissions>) -> InteractionCreate {
    parse(in_guild(interaction(2, command_data(name, 1)), app_permissions))
}

pub(crate) fn dm_command(name: &str) -> InteractionCreate {
    parse(in_dm(interaction(2, command_data(name, 1))))
}

/// Guild interaction where Discord didn't tell us which channel it came from.
pub(crate) fn guild_command_without_channel(
    name: &str,
    app_permissions: Option<Permissions>,
) -> InteractionCreate {
    let mut value = in_guild(interaction(2, command_data(name, 1)), app_permissions);
    if let Some(object) = value.as_object_mut() {
        object.remove("channel");
        object.remove("channel_id");
    }
    parse(value)
}

/// Right-click "user" command, not a chat input command.
pub(crate) fn guild_user_command(name: &str) -> InteractionCreate {
    parse(in_guild(
        interaction(2, command_data(name, 2)),
        Some(Permissions::all()),
    ))
}

/// Role select menu (component type 6).
pub(crate) fn guild_select_menu(
    custom_id: &str,
    app_permissions: Option<Permissions>,
) -> InteractionCreate {
    parse(in_guild(
        interaction(3, component_data(custom_id, 6)),
        app_permissions,
    ))
}

pub(crate) fn dm_select_menu(custom_id: &str) -> InteractionCreate {
    parse(in_dm(interaction(3, component_data(custom_id, 3))))
}

pub(crate) fn guild_button(custom_id: &str) -> InteractionCreate {
    let mut data = component_data(custom_id, 2);
    data["values"] = json!([]);
    parse(in_guild(interaction(3, data), Some(Permissions::all())))
}
