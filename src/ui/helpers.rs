// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Visual state of one answer option row.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    /// Awaiting selection.
    Idle,
    /// Revealed: this is the correct option (always highlighted, even when
    /// the user picked another one).
    Correct,
    /// Revealed: the user picked this option and it was wrong.
    PickedWrong,
    /// Revealed: neither picked nor correct.
    Dimmed,
}

/// One answer option as a full-width button. Returns whether it was clicked;
/// after reveal the button is disabled, so clicks can no longer happen.
pub fn option_button(ui: &mut Ui, label: &str, width: f32, state: OptionState) -> bool {
    let text = RichText::new(label);
    let button = match state {
        OptionState::Idle => Button::new(text),
        OptionState::Correct => {
            Button::new(text.color(Color32::WHITE)).fill(Color32::DARK_GREEN)
        }
        OptionState::PickedWrong => {
            Button::new(text.color(Color32::WHITE)).fill(Color32::DARK_RED)
        }
        OptionState::Dimmed => Button::new(text.weak()),
    };
    let enabled = state == OptionState::Idle;
    ui.add_enabled(
        enabled,
        button.min_size(Vec2::new(width, 32.0)).wrap(),
    )
    .clicked()
}

/// Picks the option state for option `idx` given the reveal situation.
pub fn option_state(
    idx: usize,
    selected: Option<usize>,
    correct_index: usize,
) -> OptionState {
    match selected {
        None => OptionState::Idle,
        Some(_) if idx == correct_index => OptionState::Correct,
        Some(picked) if idx == picked => OptionState::PickedWrong,
        Some(_) => OptionState::Dimmed,
    }
}

/// Returns (clicked_main, clicked_restart).
/// - Not completed: only the main button, enabled.
/// - Completed: main button locked, plus an active "Restart".
pub fn split_button_with_restart(
    ui: &mut Ui,
    label: &str,
    total_width: f32,
    height: f32,
    is_completed: bool,
) -> (bool, bool) {
    if !is_completed {
        let clicked = ui
            .add_sized([total_width, height], Button::new(label))
            .clicked();
        return (clicked, false);
    }

    let gap = 8.0;
    let restart_w = (total_width / 4.0).max(80.0);
    let main_w = (total_width - restart_w - gap).max(120.0);

    let mut clicked_restart = false;

    ui.horizontal(|ui| {
        let main_btn = Button::new(format!("{label}  🔒")).min_size(Vec2::new(main_w, height));
        ui.add_enabled(false, main_btn)
            .on_hover_text("Completed: press Restart to take it again");

        let restart_btn = Button::new("⟲ Restart")
            .min_size(Vec2::new(restart_w, height))
            .fill(Color32::DARK_RED);
        if ui.add(restart_btn).clicked() {
            clicked_restart = true;
        }
    });

    (false, clicked_restart)
}
