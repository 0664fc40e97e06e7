// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::content::SocialLink;
use crate::ui::contact_form;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Form(contact_form::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving the entrance fade, the spinner and toast expiry.
    Tick(Instant),
    /// A social link button was pressed.
    SocialLinkPressed(SocialLink),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CONTACT_PAGE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional theme override for this run; the saved setting is untouched.
    pub theme: Option<ThemeMode>,
}
