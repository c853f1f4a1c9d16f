//! Discord gateway integration.
//!
//! This module wires the Serenity client to the bot's services. The event
//! handler receives gateway events, builds the per-event services around the
//! shared `BotState` and the context's HTTP client, and turns every service
//! error into a private reply at a single boundary.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild and role information
//! - `GUILD_MESSAGES` - Observe messages for the sticky verification prompt
//! - `GUILD_MEMBERS` - Receive member data for role changes (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod reply;
pub mod start;
