use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – year-range filter
// ---------------------------------------------------------------------------

/// Render the year filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter by Year");
    ui.separator();

    let Some(ds) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };
    let Some((min_year, max_year)) = ds.year_bounds else {
        ui.label("No parsable publication dates in this dataset.");
        return;
    };

    let (mut lo, mut hi) = state.year_range;
    let changed_lo = ui
        .add(egui::Slider::new(&mut lo, min_year..=max_year).text("from"))
        .changed();
    let changed_hi = ui
        .add(egui::Slider::new(&mut hi, min_year..=max_year).text("to"))
        .changed();

    if changed_lo || changed_hi {
        // Dragging one handle past the other drags the other along.
        if lo > hi {
            if changed_lo {
                hi = lo;
            } else {
                lo = hi;
            }
        }
        state.set_year_range(lo, hi);
    }

    ui.add_space(8.0);
    ui.label(format!(
        "Papers in selected range: {}",
        state.visible_indices.len()
    ));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} papers loaded, {} in selected range",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open paper metadata")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} papers with columns {:?}",
                    dataset.len(),
                    dataset.column_names
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}
