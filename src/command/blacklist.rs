//! The `blacklist` console command.
//!
//! `blacklist add|remove|clear|size` mutates or inspects the shared
//! [`Blacklist`]. Subcommand handling is split from presentation: [`run`]
//! produces a structured [`BlacklistResult`], and the [`BlacklistCommand`]
//! wrapper renders it through the configured message templates. The
//! outcome of an invocation is therefore inspectable without any
//! user-facing text attached.

use super::{Command, Context, Reply};
use crate::security::Blacklist;
use crate::security::address::{self, AddressError};
use async_trait::async_trait;
use std::net::Ipv4Addr;
use tracing::info;

/// Closed set of blacklist subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcommand {
    Add,
    Remove,
    Clear,
    Size,
}

impl Subcommand {
    /// Parse a subcommand token, case-insensitively. `None` means the
    /// token names no known subcommand.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            "clear" => Some(Self::Clear),
            "size" => Some(Self::Size),
            _ => None,
        }
    }
}

/// Structured outcome of one blacklist invocation.
///
/// Carries exactly the data the rendering layer needs; the core never
/// produces user-facing text itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlacklistResult {
    /// The address was inserted.
    Added(Ipv4Addr),
    /// `add` of an address already present; nothing changed.
    Duplicate(Ipv4Addr),
    /// The address was deleted.
    Removed(Ipv4Addr),
    /// `remove` of an address not present; nothing changed.
    NotFound(Ipv4Addr),
    /// The whole registry was emptied.
    Cleared { removed: usize },
    /// `clear` of an already-empty registry.
    AlreadyEmpty,
    /// Current entry count, for `size`.
    Size { entries: usize },
    /// Required address argument missing for `add`/`remove`.
    Usage { usage: &'static str },
    /// The argument does not parse as a dotted-quad IPv4 address.
    Malformed(String),
    /// Syntactically valid but loopback or unspecified.
    Forbidden(Ipv4Addr),
    /// Unrecognized subcommand token, preserved as typed.
    UnknownSubcommand(String),
}

/// Dispatch one tokenized `blacklist` invocation against the registry.
///
/// `args[0]` is the command name itself; `args[1]` selects the subcommand
/// and `args[2]` is the address literal for `add`/`remove`. Tokens past
/// the ones a subcommand consumes are ignored. Returns `None` when there
/// is no subcommand token at all, which produces no reply.
pub fn run(blacklist: &Blacklist, args: &[&str]) -> Option<BlacklistResult> {
    let sub = args.get(1)?;

    let result = match Subcommand::parse(sub) {
        Some(Subcommand::Add) => match parse_target(args, "blacklist add <IP address>") {
            Ok(addr) => {
                if blacklist.add(addr) {
                    BlacklistResult::Added(addr)
                } else {
                    BlacklistResult::Duplicate(addr)
                }
            }
            Err(rejection) => rejection,
        },
        Some(Subcommand::Remove) => match parse_target(args, "blacklist remove <IP address>") {
            Ok(addr) => {
                if blacklist.remove(addr) {
                    BlacklistResult::Removed(addr)
                } else {
                    BlacklistResult::NotFound(addr)
                }
            }
            Err(rejection) => rejection,
        },
        Some(Subcommand::Clear) => match blacklist.clear() {
            0 => BlacklistResult::AlreadyEmpty,
            removed => BlacklistResult::Cleared { removed },
        },
        Some(Subcommand::Size) => BlacklistResult::Size {
            entries: blacklist.len(),
        },
        None => BlacklistResult::UnknownSubcommand((*sub).to_string()),
    };

    Some(result)
}

/// Extract and validate the address argument for `add`/`remove`.
///
/// The `Err` carries the structured rejection to reply with, not a
/// transport error.
fn parse_target(args: &[&str], usage: &'static str) -> Result<Ipv4Addr, BlacklistResult> {
    let Some(raw) = args.get(2) else {
        return Err(BlacklistResult::Usage { usage });
    };
    address::validate(raw).map_err(|e| match e {
        AddressError::Malformed(raw) => BlacklistResult::Malformed(raw),
        AddressError::Forbidden(addr) => BlacklistResult::Forbidden(addr),
    })
}

/// Console entry point for the `blacklist` command.
pub struct BlacklistCommand;

#[async_trait]
impl Command for BlacklistCommand {
    async fn handle(&self, ctx: &Context<'_>, args: &[&str]) -> Reply {
        let Some(result) = run(&ctx.state.blacklist, args) else {
            return Vec::new();
        };

        match &result {
            BlacklistResult::Added(ip) => {
                info!(%ip, entries = ctx.state.blacklist.len(), "Address blacklisted");
            }
            BlacklistResult::Removed(ip) => {
                info!(%ip, entries = ctx.state.blacklist.len(), "Address unblacklisted");
            }
            BlacklistResult::Cleared { removed } => {
                info!(removed, "Blacklist cleared");
            }
            _ => {}
        }

        vec![ctx.state.messages.read().blacklist_reply(&result)]
    }
}
