use eframe::egui::{Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot};

use crate::color::generate_palette;
use crate::data::aggregate;
use crate::data::model::PaperDataset;
use crate::state::AppState;

/// Rows shown in the sample table.
const SAMPLE_ROWS: usize = 5;
/// Tokens drawn in the word cloud.
const CLOUD_TOKENS: usize = 40;
const CLOUD_MIN_FONT: f32 = 11.0;
const CLOUD_MAX_FONT: f32 = 36.0;

// ---------------------------------------------------------------------------
// Central panel – one section per view, recomputed every frame
// ---------------------------------------------------------------------------

pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let Some(ds) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a metadata file to explore papers  (File → Open…)");
        });
        return;
    };
    let indices = &state.visible_indices;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            overview(ui, ds, indices);
            year_section(ui, ds, indices);
            journal_section(ui, ds, indices);
            cloud_section(ui, ds, indices);
            source_section(ui, ds, indices);
        });
}

// ---------------------------------------------------------------------------
// Dataset overview
// ---------------------------------------------------------------------------

fn overview(ui: &mut Ui, ds: &PaperDataset, indices: &[usize]) {
    ui.heading("Dataset Overview");
    ui.label(format!(
        "Shape: {} rows × {} columns",
        ds.len(),
        ds.column_names.len()
    ));
    ui.add_space(4.0);

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::remainder())
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(48.0))
        .header(18.0, |mut header| {
            header.col(|ui| {
                ui.strong("Title");
            });
            header.col(|ui| {
                ui.strong("Journal");
            });
            header.col(|ui| {
                ui.strong("Year");
            });
        })
        .body(|mut body| {
            for &idx in indices.iter().take(SAMPLE_ROWS) {
                let paper = &ds.papers[idx];
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(paper.title.as_str());
                    });
                    row.col(|ui| {
                        ui.label(paper.journal.as_str());
                    });
                    row.col(|ui| {
                        ui.label(paper.year.map_or(String::new(), |y| y.to_string()));
                    });
                });
            }
        });
    ui.separator();
}

// ---------------------------------------------------------------------------
// Publications by year (vertical bars)
// ---------------------------------------------------------------------------

fn year_section(ui: &mut Ui, ds: &PaperDataset, indices: &[usize]) {
    ui.heading("Publications by Year");

    let histogram = aggregate::year_histogram(ds, indices);
    if histogram.is_empty() {
        ui.label("No papers in the selected range.");
        ui.separator();
        return;
    }

    let bars: Vec<Bar> = histogram
        .iter()
        .map(|&(year, count)| {
            Bar::new(year as f64, count as f64)
                .width(0.7)
                .name(year.to_string())
        })
        .collect();
    let chart = BarChart::new(bars).color(Color32::LIGHT_BLUE).name("Papers");

    Plot::new("publications_by_year")
        .height(240.0)
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("Number of Papers")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| plot_ui.bar_chart(chart));
    ui.separator();
}

// ---------------------------------------------------------------------------
// Top journals / top sources (horizontal bars)
// ---------------------------------------------------------------------------

fn journal_section(ui: &mut Ui, ds: &PaperDataset, indices: &[usize]) {
    ui.heading("Top Journals");
    let ranked = aggregate::top_journals(ds, indices);
    if ranked.is_empty() {
        ui.label("No papers in the selected range.");
    } else {
        ranked_bar_chart(ui, "top_journals", &ranked);
    }
    ui.separator();
}

fn source_section(ui: &mut Ui, ds: &PaperDataset, indices: &[usize]) {
    // Skipped entirely when the raw schema has no source column.
    let Some(ranked) = aggregate::top_sources(ds, indices) else {
        return;
    };

    ui.heading("Distribution of Papers by Source");
    if ranked.is_empty() {
        ui.label("No papers in the selected range.");
    } else {
        ranked_bar_chart(ui, "top_sources", &ranked);
    }
}

/// Horizontal ranked bar chart with the highest count on top and category
/// names on the value axis.
fn ranked_bar_chart(ui: &mut Ui, id: &str, ranked: &[(String, u64)]) {
    let n = ranked.len();
    let names: Vec<String> = ranked.iter().map(|(name, _)| name.clone()).collect();
    let colors = generate_palette(n);

    let bars: Vec<Bar> = ranked
        .iter()
        .enumerate()
        .map(|(i, (name, count))| {
            // Rank 0 draws at the top of the chart.
            Bar::new((n - 1 - i) as f64, *count as f64)
                .width(0.6)
                .name(name)
                .fill(colors[i])
        })
        .collect();

    let formatter = move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
        let rounded = mark.value.round();
        if (mark.value - rounded).abs() > 1e-6 || rounded < 0.0 {
            return String::new();
        }
        let i = rounded as usize;
        if i < n {
            names[n - 1 - i].clone()
        } else {
            String::new()
        }
    };

    Plot::new(id.to_string())
        .height(28.0 * n.max(4) as f32)
        .x_axis_label("Number of Papers")
        .y_axis_formatter(formatter)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

// ---------------------------------------------------------------------------
// Word cloud of titles
// ---------------------------------------------------------------------------

fn cloud_section(ui: &mut Ui, ds: &PaperDataset, indices: &[usize]) {
    ui.heading("Word Cloud of Paper Titles");

    let frequencies = aggregate::title_token_frequencies(ds, indices);
    if frequencies.is_empty() {
        ui.label("No titles in the selected range.");
        ui.separator();
        return;
    }

    let ranked = aggregate::ranked_tokens(&frequencies, CLOUD_TOKENS);
    let max = ranked.first().map(|&(_, c)| c).unwrap_or(1) as f32;
    let min = ranked.last().map(|&(_, c)| c).unwrap_or(1) as f32;
    let colors = generate_palette(ranked.len());

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for ((token, count), color) in ranked.iter().zip(colors) {
            let weight = if max > min {
                (*count as f32 - min) / (max - min)
            } else {
                1.0
            };
            let size = CLOUD_MIN_FONT + weight * (CLOUD_MAX_FONT - CLOUD_MIN_FONT);
            ui.label(RichText::new(token.as_str()).size(size).color(color));
        }
    });
    ui.separator();
}
