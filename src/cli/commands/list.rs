use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lateness::{ArrivalMark, classify, lateness_minutes};
use crate::core::stats::RosterStats;
use crate::errors::AppResult;
use crate::store::RosterFile;
use crate::ui::messages::info;
use crate::utils::colors::{BLUE, GREEN, RED, RESET, colorize_optional, paint};
use crate::utils::formatting::{bold, percent_label};
use crate::utils::table::Table;
use crate::utils::time::format_minutes;

fn color_for_mark(mark: ArrivalMark) -> &'static str {
    match mark {
        ArrivalMark::Late => RED,
        ArrivalMark::OnTime => GREEN,
        ArrivalMark::Other => BLUE,
        ArrivalMark::Pending => RESET,
    }
}

/// Print the roster table followed by the attendance counters.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { find } = cmd {
        let store = RosterFile::new(&cfg.roster);
        let roster = store.load()?;

        match roster.shift_start() {
            Some(start) => info(format!(
                "Shift started at {}.",
                start.format("%Y-%m-%d %H:%M")
            )),
            None => info("Shift not started."),
        }

        if roster.is_empty() {
            info("Roster is empty.");
            return Ok(());
        }

        let needle = find.as_ref().map(|f| f.trim().to_lowercase());

        let mut table = Table::new(&[
            "№",
            "Position",
            "Full name",
            "Expected",
            "Arrival",
            "Lateness",
            "Status",
        ]);

        // Row numbers follow the sorted roster, so a filtered view keeps
        // the same numbers as the full one.
        let mut shown = 0usize;
        for (idx, p) in roster.people().iter().enumerate() {
            if let Some(n) = &needle
                && !p.full_name.to_lowercase().contains(n.as_str())
            {
                continue;
            }
            shown += 1;

            let late = lateness_minutes(roster.shift_start(), p.expected, p.arrival);
            let mark = classify(p.status, late);
            let color = color_for_mark(mark);

            let arrival_cell = match p.arrival_hhmm() {
                Some(at) => at,
                None => colorize_optional("-"),
            };
            let lateness_cell = match late {
                Some(m) => paint(color, &format_minutes(m)),
                None => colorize_optional("-"),
            };
            let status_cell = if p.status.is_present() {
                p.status.label().to_string()
            } else {
                paint(BLUE, p.status.label())
            };

            table.add_row(vec![
                (idx + 1).to_string(),
                p.position.label().to_string(),
                p.full_name.clone(),
                p.expected.label().to_string(),
                arrival_cell,
                lateness_cell,
                status_cell,
            ]);
        }

        if shown == 0 {
            info("No names match the filter.");
            return Ok(());
        }

        print!("{}", table.render());

        println!("{}", cfg.separator_char.repeat(60));

        let stats = RosterStats::compute(&roster);
        println!("{}", bold("Totals"));
        println!("Total:   {}", stats.total);
        println!(
            "Present: {} ({})",
            stats.present,
            percent_label(stats.percent_of_total(stats.present))
        );
        println!(
            "Sick:    {} ({})",
            stats.sick,
            percent_label(stats.percent_of_total(stats.sick))
        );
        println!(
            "Travel:  {} ({})",
            stats.travel,
            percent_label(stats.percent_of_total(stats.travel))
        );
        println!(
            "Arrived: {} of {} present ({})",
            stats.arrived,
            stats.present,
            percent_label(stats.arrival_percent())
        );
    }

    Ok(())
}
