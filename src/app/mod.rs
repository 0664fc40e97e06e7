// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the contact page.
//!
//! The `App` struct owns the contact form component, the toast manager and
//! the animation clock, and translates top-level messages into component
//! updates or side effects like opening links and window teardown.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::content;
use crate::infrastructure::SimulatedSender;
use crate::ui::contact_form::{self, Timing};
use crate::ui::entrance::Entrance;
use crate::ui::notifications::{self, Notification};
use crate::ui::state::{SendDelay, SuccessDisplay};
use crate::ui::theming::ThemeMode;
use crate::ui::{page, social_links};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::io;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    form: contact_form::State,
    /// Toast notification manager for operational messages.
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    /// Iced theme resolved once at startup.
    theme: Theme,
    entrance: Entrance,
    /// Last tick time; drives the entrance fade and the spinner.
    now: Instant,
    footer_year: i32,
    link_opener: LinkOpener,
}

/// Hands a URL to the platform's default handler.
pub type LinkOpener = fn(&str) -> io::Result<()>;

/// Opens `url` in the default browser without waiting for it.
pub fn open_in_browser(url: &str) -> io::Result<()> {
    open::that_detached(url)
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("form", &self.form)
            .field("theme_mode", &self.theme_mode)
            .field("notifications", &self.notifications.visible_count())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Builds the window settings.
///
/// Close requests are routed through `update` so pending timers can be
/// aborted before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Maps a theme mode to an Iced theme, detecting the system preference once.
#[must_use]
pub fn resolve_theme(mode: ThemeMode) -> Theme {
    if mode.is_dark() {
        Theme::Dark
    } else {
        Theme::Light
    }
}

impl App {
    /// Loads the configuration and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();

        tracing::info!(
            config = ?config::config_path(),
            theme = %flags.theme.unwrap_or(config.general.theme_mode),
            "contact page starting"
        );

        let app = Self::with_config(&config, config_warning, flags.theme, Instant::now());
        (app, Task::none())
    }

    /// Builds the state from an already loaded configuration.
    ///
    /// `theme_override` wins over the configured theme mode.
    #[must_use]
    pub fn with_config(
        config: &Config,
        config_warning: Option<String>,
        theme_override: Option<ThemeMode>,
        started_at: Instant,
    ) -> Self {
        let theme_mode = theme_override.unwrap_or(config.general.theme_mode);
        let timing = Timing {
            send_delay: SendDelay::from_config(config.submission.simulated_delay_ms),
            success_display: SuccessDisplay::from_config(config.submission.success_display_ms),
        };

        let mut notifications = notifications::Manager::new();
        if let Some(warning) = config_warning {
            notifications.push(Notification::warning(warning));
        }

        Self {
            form: contact_form::State::new(Arc::new(SimulatedSender), timing),
            notifications,
            theme_mode,
            theme: resolve_theme(theme_mode),
            entrance: Entrance::new(started_at),
            now: started_at,
            footer_year: page::current_year(),
            link_opener: open_in_browser,
        }
    }

    #[must_use]
    pub fn form(&self) -> &contact_form::State {
        &self.form
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    pub fn title(&self) -> String {
        content::WINDOW_TITLE.to_string()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    /// Whether the animation tick is needed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.entrance.is_running(self.now) || self.form.is_submitting()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.is_animating(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Form(form_message) => {
                self.form.handle_message(form_message).map(Message::Form)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;
                self.notifications.tick(now);
                Task::none()
            }
            Message::SocialLinkPressed(link) => match (self.link_opener)(link.url) {
                Ok(()) => {
                    tracing::debug!(network = link.name, url = link.url, "opened social link");
                    Task::none()
                }
                Err(error) => {
                    tracing::warn!(
                        network = link.name,
                        url = link.url,
                        %error,
                        "could not open link, copying it instead"
                    );
                    self.notifications
                        .push(Notification::info(social_links::copied_message(&link)));
                    iced::clipboard::write(link.url.to_string())
                }
            },
            Message::WindowCloseRequested(id) => {
                self.form.teardown();
                tracing::info!("window closing");
                window::close(id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            form: &self.form,
            notifications: &self.notifications,
            entrance: self.entrance,
            now: self.now,
            footer_year: self.footer_year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeneralConfig, SubmissionConfig};
    use crate::domain::contact::{Field, Purpose, SubmissionStatus};
    use std::cell::RefCell;
    use std::time::Duration;

    fn app() -> App {
        App::with_config(&Config::default(), None, Some(ThemeMode::Dark), Instant::now())
    }

    fn fill(app: &mut App) {
        for (field, value) in [(Field::Name, "Jane"), (Field::Email, "jane@x.com")] {
            let _ = app.update(Message::Form(contact_form::Message::FieldChanged(
                field,
                value.into(),
            )));
        }
        let _ = app.update(Message::Form(contact_form::Message::PurposeSelected(
            Purpose::Personal,
        )));
        let _ = app.update(Message::Form(contact_form::Message::MessageEdited(
            iced::widget::text_editor::Action::Edit(iced::widget::text_editor::Edit::Insert('!')),
        )));
    }

    #[test]
    fn title_is_fixed() {
        assert_eq!(app().title(), "Contact Us - Code With Rafsun");
    }

    #[test]
    fn theme_override_wins_over_config() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };
        let app = App::with_config(&config, None, Some(ThemeMode::Light), Instant::now());
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn configured_timing_is_clamped() {
        let config = Config {
            submission: SubmissionConfig {
                simulated_delay_ms: Some(1),
                success_display_ms: Some(u64::MAX),
            },
            ..Config::default()
        };
        let app = App::with_config(&config, None, Some(ThemeMode::Dark), Instant::now());
        let timing = app.form().timing();
        assert_eq!(timing.send_delay.value(), 100);
        assert_eq!(timing.success_display.value(), 30_000);
    }

    #[test]
    fn config_warning_becomes_a_toast() {
        let app = App::with_config(
            &Config::default(),
            Some("Settings could not be read; defaults are in use.".into()),
            Some(ThemeMode::Dark),
            Instant::now(),
        );
        assert_eq!(app.notifications().visible_count(), 1);
    }

    #[test]
    fn entrance_animation_stops_after_ticks() {
        let mut app = app();
        assert!(app.is_animating());

        let later = app.now + Duration::from_secs(5);
        let _ = app.update(Message::Tick(later));
        assert!(!app.is_animating());
    }

    #[test]
    fn submitting_keeps_the_tick_alive() {
        let mut app = app();
        let _ = app.update(Message::Tick(app.now + Duration::from_secs(5)));
        fill(&mut app);

        let _ = app.update(Message::Form(contact_form::Message::Submit));

        assert_eq!(app.form().status(), SubmissionStatus::Submitting);
        assert!(app.is_animating());
    }

    thread_local! {
        static OPENED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    fn record_open(url: &str) -> io::Result<()> {
        OPENED.with(|opened| opened.borrow_mut().push(url.to_string()));
        Ok(())
    }

    fn fail_open(_url: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::NotFound, "no browser"))
    }

    #[test]
    fn social_link_press_opens_the_url() {
        let mut app = app();
        app.link_opener = record_open;
        let link = content::SOCIAL_LINKS[0];

        let _ = app.update(Message::SocialLinkPressed(link));

        let opened = OPENED.with(|opened| opened.borrow().clone());
        assert_eq!(opened, vec!["https://facebook.com/codewithrafsun"]);
        assert_eq!(app.notifications().visible_count(), 0);
    }

    #[test]
    fn failed_open_falls_back_to_copy_toast() {
        let mut app = app();
        app.link_opener = fail_open;
        let link = content::SOCIAL_LINKS[0];

        let _ = app.update(Message::SocialLinkPressed(link));

        let shown: Vec<&str> = app
            .notifications()
            .visible()
            .map(Notification::message)
            .collect();
        assert_eq!(shown, vec!["Link copied: https://facebook.com/codewithrafsun"]);
    }

    #[test]
    fn window_close_tears_down_the_form() {
        let mut app = app();
        fill(&mut app);
        let _ = app.update(Message::Form(contact_form::Message::Submit));
        let generation = app.form().controller().generation();

        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));

        assert!(!app.form().has_pending_timers());
        let _ = app.update(Message::Form(contact_form::Message::SendCompleted {
            generation,
            result: Ok(()),
        }));
        assert_eq!(app.form().status(), SubmissionStatus::Idle);
    }
}
