use fortune_core::Name;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use std::time::Duration;

const OK_BUTTON: i32 = 1;

/// Monotonic time on the same clock as [`frame_time`].
pub fn now() -> Duration {
    Duration::from_micros(glib::monotonic_time().max(0) as u64)
}

pub fn frame_time(clock: &gdk::FrameClock) -> Duration {
    Duration::from_micros(clock.frame_time().max(0) as u64)
}

pub fn show_notice(window: &gtk::ApplicationWindow, message: &str) {
    gtk::AlertDialog::builder()
        .message(message)
        .modal(true)
        .build()
        .show(Some(window));
}

/// Shows the winner and runs `on_ok` only if the user confirms.
pub fn confirm_winner<F>(window: &gtk::ApplicationWindow, winner: &Name, on_ok: F)
where
    F: FnOnce() + 'static,
{
    let dialog = gtk::AlertDialog::builder()
        .message(format!(
            "The wheel stopped on: {winner}. Click OK to continue."
        ))
        .buttons(["Cancel", "OK"])
        .cancel_button(0)
        .default_button(OK_BUTTON)
        .modal(true)
        .build();

    dialog.choose(Some(window), gtk::gio::Cancellable::NONE, move |response| {
        if matches!(response, Ok(OK_BUTTON)) {
            on_ok();
        }
    });
}
