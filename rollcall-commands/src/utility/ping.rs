use crate::CommandMeta;
use rollcall_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "ping",
    desc: "Check that the bot is online and show gateway latency.",
    category: "utility",
    usage: "!ping",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    let latency = ctx.ping().await;

    // The shard reports zero before the first heartbeat ack.
    if latency.is_zero() {
        ctx.say("🏓 Pong!").await?;
    } else {
        ctx.say(format!("🏓 Pong! Latency: {}ms", latency.as_millis()))
            .await?;
    }

    Ok(())
}
