use crate::theme::Theme;
use chrono::{Datelike, Local, NaiveDate};
use eframe::egui::{self, Button, CornerRadius, RichText};

const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Which month the calendar is showing. Owned by the screen instance so
/// that two task views never share a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    year: i32,
    month: u32,
}

impl CalendarState {
    pub fn current_month() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn previous_month(&mut self) {
        if self.month == 1 {
            self.year -= 1;
            self.month = 12;
        } else {
            self.month -= 1;
        }
    }

    pub fn next_month(&mut self) {
        if self.month == 12 {
            self.year += 1;
            self.month = 1;
        } else {
            self.month += 1;
        }
    }

    fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month as usize - 1], self.year)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}

fn format_day(year: i32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Draws a month grid and returns the clicked day, if any, as `YYYY-MM-DD`.
///
/// `selected` is the current due-date text; when it names a day in the
/// shown month that day is highlighted. Today is tinted regardless of
/// selection.
pub fn month_grid(
    ui: &mut egui::Ui,
    theme: &Theme,
    state: &mut CalendarState,
    selected: &str,
) -> Option<String> {
    let mut picked = None;
    let today = Local::now().date_naive();
    let selected_date = NaiveDate::parse_from_str(selected.trim(), "%Y-%m-%d").ok();

    ui.horizontal(|ui| {
        if ui.button("<").clicked() {
            state.previous_month();
        }
        ui.add_sized(
            [theme.calendar_day_size * 5.0, 20.0],
            egui::Label::new(RichText::new(state.label()).strong()),
        );
        if ui.button(">").clicked() {
            state.next_month();
        }
    });

    let first_of_month = NaiveDate::from_ymd_opt(state.year, state.month, 1);
    let leading_blanks = first_of_month
        .map(|first| first.weekday().num_days_from_sunday())
        .unwrap_or(0);
    let day_count = days_in_month(state.year, state.month);

    egui::Grid::new("calendar_grid")
        .min_col_width(theme.calendar_day_size)
        .spacing([4.0, 4.0])
        .show(ui, |ui| {
            for label in WEEKDAY_LABELS {
                ui.label(RichText::new(label).color(theme.accent).small());
            }
            ui.end_row();

            let mut column = 0;
            for _ in 0..leading_blanks {
                ui.label("");
                column += 1;
            }

            for day in 1..=day_count {
                let date = NaiveDate::from_ymd_opt(state.year, state.month, day);
                let is_selected = selected_date.is_some() && selected_date == date;
                let is_today = date == Some(today);

                let mut text = RichText::new(format!("{day}"));
                if is_today && !is_selected {
                    text = text.color(theme.today);
                }

                let mut button = Button::new(text)
                    .min_size(egui::vec2(theme.calendar_day_size, theme.calendar_day_size))
                    .corner_radius(CornerRadius::same(theme.radius_8));
                if is_selected {
                    button = button.fill(theme.accent);
                }

                if ui.add(button).clicked() {
                    picked = Some(format_day(state.year, state.month, day));
                }

                column += 1;
                if column == 7 {
                    ui.end_row();
                    column = 0;
                }
            }
        });

    picked
}
