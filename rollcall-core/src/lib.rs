use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub mod config;

pub use config::BotConfig;

pub type Error = anyhow::Error;

#[derive(Clone, Debug)]
pub struct Data {
    pub config: BotConfig,
    /// Set once the ready-event roster snapshot has run; READY is
    /// re-delivered on reconnect and the export must only run once.
    pub roster_exported: Arc<AtomicBool>,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
