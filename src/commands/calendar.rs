use anyhow::{Context, Result};
use chrono::Datelike;
use dialoguer::{Input, Select};

use agenda_core::calendar::CalendarInteraction;

use crate::api::EventApi;
use crate::form_host::TerminalFormHost;
use crate::render::{render_month, Render};
use crate::views::calendar::CalendarView;

pub async fn run(api: &EventApi, month: Option<String>, interact: bool) -> Result<()> {
    let (year, month) = resolve_month(month.as_deref())?;

    let host = TerminalFormHost::new(api);
    let mut view = CalendarView::new(api, &host);
    view.refresh().await;
    print_calendar(&view, year, month);

    if interact {
        interaction_loop(&mut view, year, month).await?;
    }
    Ok(())
}

fn print_calendar(view: &CalendarView<'_>, year: i32, month: u32) {
    println!("{}", render_month(&view.entries, year, month));
    if !view.recent.is_empty() {
        println!();
        println!("  Upcoming");
        for event in &view.recent {
            println!("   {}", event.render());
        }
    }
}

async fn interaction_loop(view: &mut CalendarView<'_>, year: i32, month: u32) -> Result<()> {
    loop {
        let mut items: Vec<String> = view
            .entries
            .iter()
            .map(|entry| format!("Open: {} ({})", entry.title, entry.start))
            .collect();
        items.push("New event at a date".to_string());
        items.push("Quit".to_string());

        let choice = Select::new()
            .with_prompt("  Calendar")
            .items(&items)
            .default(items.len() - 1)
            .interact()?;

        if choice == items.len() - 1 {
            return Ok(());
        }

        let interaction = if choice == items.len() - 2 {
            let start: String = Input::new()
                .with_prompt("  Start (YYYY-MM-DD or YYYY-MM-DDTHH:MM)")
                .interact_text()?;
            CalendarInteraction::SelectedSlot(start)
        } else {
            // Clicking an entry hands back the embedded event.
            CalendarInteraction::ClickedEntry(view.entries[choice].event.clone())
        };

        view.handle_interaction(interaction).await?;
        print_calendar(view, year, month);
    }
}

fn resolve_month(arg: Option<&str>) -> Result<(i32, u32)> {
    match arg {
        Some(s) => {
            let (year, month) = s.split_once('-').context("Expected YYYY-MM")?;
            let year: i32 = year.parse().context("Invalid year")?;
            let month: u32 = month.parse().context("Invalid month")?;
            anyhow::ensure!((1..=12).contains(&month), "Month must be 1-12");
            Ok((year, month))
        }
        None => {
            let today = chrono::Local::now().date_naive();
            Ok((today.year(), today.month()))
        }
    }
}
