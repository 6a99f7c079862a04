use crate::{COMMANDS, CommandMeta};
use rollcall_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "!help",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say(help_text()).await?;
    Ok(())
}

fn help_text() -> String {
    let mut commands: Vec<&CommandMeta> = COMMANDS.iter().collect();
    commands.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    let mut text = String::new();
    let mut current_category: Option<&str> = None;
    for meta in commands {
        if current_category != Some(meta.category) {
            if current_category.is_some() {
                text.push('\n');
            }
            text.push_str(&format!("**{}**\n", capitalize(meta.category)));
            current_category = Some(meta.category);
        }
        text.push_str(&format!("`{}`: {}\n", meta.usage, meta.desc));
    }

    text
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
