pub mod membership;
pub mod utility;

use rollcall_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    membership::info::META,
    membership::weekly::META,
    utility::help::META,
    utility::ping::META,
    utility::sync::META,
];

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        membership::info::info(),
        membership::weekly::weekly(),
        membership::weekly::add_to_weekly_menu(),
        utility::help::help(),
        utility::ping::ping(),
        utility::sync::sync(),
    ]
}
