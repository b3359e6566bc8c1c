//! Shared UI icons and emojis.
//!
//! Emoji constants with plain-text fallbacks for terminals without
//! emoji support.

use console::Emoji;

// Card field indicators
pub static BRIEFCASE: Emoji<'_, '_> = Emoji("💼 ", "");
pub static BUILDING: Emoji<'_, '_> = Emoji("🏢 ", "");
pub static PIN: Emoji<'_, '_> = Emoji("📍 ", "");
pub static CALENDAR: Emoji<'_, '_> = Emoji("📅 ", "");
pub static CLOCK: Emoji<'_, '_> = Emoji("🕐 ", "");
pub static MONEY: Emoji<'_, '_> = Emoji("💰 ", "");
pub static LINK: Emoji<'_, '_> = Emoji("🔗 ", "");

// Status indicators
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK]");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR]");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!]");
