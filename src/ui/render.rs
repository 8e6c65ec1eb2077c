//! Terminal rendering of the period window and of the pay report.

use crate::config::Config;
use crate::core::period_store::PeriodStore;
use crate::models::day_record::DayRecord;
use crate::models::report::PayReport;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREY, color_for_amount, color_for_tile, colorize};
use crate::utils::date::{date_label, tile_label};
use crate::utils::formatting::{bold, format_hours, format_money};
use crate::utils::table::{Align, Column, Table, display_width, pad};
use crate::utils::time::{ClockTime, format_time};
use chrono::NaiveDate;

const TILES_PER_ROW: usize = 7;

fn tile_text(
    idx: usize,
    date: NaiveDate,
    rec: Option<&DayRecord>,
    store: &PeriodStore,
    cfg: &Config,
) -> (String, String) {
    let rule = store.rule();

    let caption = match rec {
        Some(r) if rule.uses_worked_flag() => {
            let icon = if r.worked { "🔓" } else { "🔒" };
            colorize(
                &format!("{icon} {:>2} {}", idx + 1, tile_label(date)),
                color_for_tile(r.worked),
            )
        }
        _ => format!("{:>2} {}", idx + 1, tile_label(date)),
    };

    let times = match rec {
        Some(r) if rule.includes(r) => format!(
            "   {}-{}",
            format_time(r.start, cfg.time_format),
            format_time(r.end, cfg.time_format)
        ),
        _ => colorize("   --:--", GREY),
    };

    (caption, times)
}

/// Two rows of seven tiles, one per visible date.
pub fn render_period(store: &PeriodStore, cfg: &Config) {
    let dates = store.visible_dates();
    let last = dates.last().copied().unwrap_or(store.anchor());

    header(format!(
        "Period {} → {}",
        date_label(store.anchor(), cfg.show_weekday),
        date_label(last, cfg.show_weekday)
    ));

    let tiles: Vec<(String, String)> = dates
        .iter()
        .enumerate()
        .map(|(i, d)| tile_text(i, *d, store.get_record(*d).ok(), store, cfg))
        .collect();

    let width = tiles
        .iter()
        .flat_map(|(a, b)| [a, b])
        .map(|s| display_width(s))
        .max()
        .unwrap_or(0);

    for week in tiles.chunks(TILES_PER_ROW) {
        let captions: Vec<String> = week.iter().map(|(c, _)| pad(c, width, Align::Left)).collect();
        let times: Vec<String> = week.iter().map(|(_, t)| pad(t, width, Align::Left)).collect();
        println!("{}", captions.join(" ").trim_end());
        println!("{}", times.join(" ").trim_end());
    }
}

/// Derived rows and totals; used only when at least one day is included.
pub fn render_report(report: &PayReport, store: &PeriodStore, cfg: &Config) {
    header("Bi-Weekly Pay Details");

    println!("Hourly Pay: {}", format_money(store.hourly_pay()));
    println!("Period Start Date: {}", store.anchor().format("%Y-%m-%d"));
    println!(
        "Total Bi-Weekly Pay: {}",
        bold(&format_money(report.total_pay))
    );
    println!();

    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::left("Start"),
        Column::left("End"),
        Column::right("Hours"),
        Column::right("Pay"),
    ]);

    for row in &report.rows {
        let color = color_for_amount(row.total_hours);
        table.add_row(vec![
            date_label(row.date, cfg.show_weekday),
            format_time(ClockTime::of(row.date, row.start), cfg.time_format),
            format_time(ClockTime::of(row.date, row.end), cfg.time_format),
            colorize(&format_hours(row.total_hours), color),
            colorize(&format_money(row.pay), color),
        ]);
    }

    table.add_row(vec![
        "Total".to_string(),
        String::new(),
        String::new(),
        format_hours(report.total_hours),
        format_money(report.total_pay),
    ]);

    print!("{}", table.render(cfg.separator()));
}

/// Shown instead of a total when nothing is included.
pub fn render_no_data(store: &PeriodStore) {
    header("Bi-Weekly Pay Details");
    println!("No days included in this period.");
    if store.rule().uses_worked_flag() {
        info("Use `toggle <day>` to unlock a day.");
    }
}

pub fn render_record(date: NaiveDate, rec: &DayRecord, store: &PeriodStore, cfg: &Config) {
    let state = if !store.rule().uses_worked_flag() {
        "included"
    } else if rec.worked {
        "worked"
    } else {
        "not worked"
    };

    println!(
        "{}: {} {}-{}",
        date_label(date, cfg.show_weekday),
        state,
        format_time(rec.start, cfg.time_format),
        format_time(rec.end, cfg.time_format)
    );
}
