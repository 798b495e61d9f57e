use twilight_model::{
    application::{
        command::CommandType,
        interaction::application_command::{CommandDataOption, CommandOptionValue},
    },
    channel::message::{
        component::{ActionRow, SelectMenu, SelectMenuType},
        Embed, MessageFlags,
    },
    guild::Permissions,
    http::interaction::{InteractionResponse, InteractionResponseType},
    id::{marker::RoleMarker, Id},
};
use twilight_util::builder::{
    command::{CommandBuilder, StringBuilder},
    embed::EmbedBuilder,
    InteractionResponseDataBuilder,
};

use herald_framework::{handler_func, Error, Module, ModuleBuilder};
use herald_shared::color;

use crate::context::{CommandContext, SelectMenuContext, Services};

pub(crate) const ROLE_MENU_ID: &str = "role_menu";
const DEFAULT_TITLE: &str = "Pick your roles";

pub(crate) fn build() -> Module<Services> {
    ModuleBuilder::<Services>::new("roles")
        .command(
            CommandBuilder::new(
                "role-menu",
                "post a menu members can pick roles from",
                CommandType::ChatInput,
            )
            .default_member_permissions(Permissions::MANAGE_ROLES)
            .dm_permission(false)
            .option(StringBuilder::new("title", "title of the menu").build())
            .build(),
            // the menu is posted as a regular message with an embed
            Permissions::SEND_MESSAGES | Permissions::EMBED_LINKS,
            handler_func!(post_role_menu),
        )
        .select_menu(
            ROLE_MENU_ID,
            Permissions::MANAGE_ROLES,
            handler_func!(assign_roles),
        )
        .build()
}

fn create_role_menu() -> SelectMenu {
    SelectMenu {
        custom_id: ROLE_MENU_ID.into(),
        kind: SelectMenuType::Role,
        placeholder: Some("Roles".into()),
        min_values: Some(1),
        max_values: Some(25),

        // defaults
        options: None,
        disabled: false,
        default_values: None,
        channel_types: None,
    }
}

pub(crate) async fn post_role_menu(ctx: CommandContext) -> Result<(), Error> {
    let Some(channel_id) = ctx.event.channel.as_ref().map(|channel| channel.id) else {
        return Err("role menu requested outside of a channel".into());
    };

    let embed = EmbedBuilder::new()
        .title(title_option(&ctx.command.options))
        .description("Select the roles you want from the menu below")
        .color(color::embeds::INFO.into())
        .build();

    ctx.client
        .create_message(channel_id)
        .embeds(&[embed])
        .components(&[ActionRow {
            components: vec![create_role_menu().into()],
        }
        .into()])
        .await?;

    ctx.reply_ephemeral("role menu posted").await?;

    Ok(())
}

pub(crate) async fn assign_roles(ctx: SelectMenuContext) -> Result<(), Error> {
    let guild_id = ctx.guild_id().ok_or("role menu used outside of a guild")?;
    let user_id = ctx.author_id().ok_or("role menu used without a user")?;
    let roles = parse_role_ids(ctx.values())?;
    tracing::trace!(?roles, user = %user_id, "assigning roles");

    ctx.response(InteractionResponse {
        kind: InteractionResponseType::DeferredChannelMessageWithSource,
        data: Some(
            InteractionResponseDataBuilder::new()
                .flags(MessageFlags::EPHEMERAL)
                .build(),
        ),
    })
    .await?;

    let mut added = Vec::with_capacity(roles.len());
    for role_id in &roles {
        if let Err(err) = ctx
            .client
            .add_guild_member_role(guild_id, user_id, *role_id)
            .await
        {
            // don't leave the deferred response spinning
            update_response(&ctx, outcome_embed(&added, Some(*role_id))).await;
            return Err(err.into());
        }
        added.push(*role_id);
    }

    update_response(&ctx, outcome_embed(&added, None)).await;

    Ok(())
}

async fn update_response(ctx: &SelectMenuContext, embed: Embed) {
    if let Err(err) = ctx
        .interaction()
        .update_response(&ctx.event.token)
        .embeds(Some(&[embed]))
        .await
    {
        tracing::warn!(?err, "failed to update role menu response");
    }
}

fn outcome_embed(added: &[Id<RoleMarker>], failed: Option<Id<RoleMarker>>) -> Embed {
    let Some(failed) = failed else {
        return EmbedBuilder::new()
            .title("Roles updated")
            .description(format!("Added {}", mention_roles(added)))
            .color(color::embeds::SUCCESS.into())
            .build();
    };

    let mut description = format!("Couldn't add <@&{}>", failed);
    if !added.is_empty() {
        description.push_str(&format!(", added {}", mention_roles(added)));
    }

    EmbedBuilder::new()
        .title("Roles not updated")
        .description(description)
        .color(color::embeds::ERROR.into())
        .build()
}

fn title_option(options: &[CommandDataOption]) -> String {
    options
        .iter()
        .find(|option| option.name == "title")
        .and_then(|option| match &option.value {
            CommandOptionValue::String(title) => Some(title.clone()),
            _ => None,
        })
        .unwrap_or_else(|| DEFAULT_TITLE.into())
}

fn parse_role_ids(values: &[String]) -> Result<Vec<Id<RoleMarker>>, Error> {
    Ok(values
        .iter()
        .map(|value| value.parse::<Id<RoleMarker>>())
        .collect::<Result<Vec<_>, _>>()?)
}

fn mention_roles(roles: &[Id<RoleMarker>]) -> String {
    roles
        .iter()
        .map(|role| format!("<@&{}>", role))
        .collect::<Vec<String>>()
        .join(", ")
}
