use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use owo_colors::OwoColorize;

use crate::api::EventApi;
use crate::form_host::TerminalFormHost;
use crate::render::{page_footer, Render};
use crate::views::list::EventsListView;

pub async fn run(api: &EventApi, page: u32, page_size: u32, interact: bool) -> Result<()> {
    let host = TerminalFormHost::new(api);
    let mut view = EventsListView::new(api, &host, page_size);
    view.pagination.current_page = page.max(1);
    view.refresh().await;
    print_page(&view);

    if interact {
        interaction_loop(&mut view).await?;
    }
    Ok(())
}

fn print_page(view: &EventsListView<'_>) {
    if view.events.is_empty() {
        println!("  {}", "(no events on this page)".dimmed());
    }
    for event in &view.events {
        println!("  {}", event.render());
    }
    println!("  {}", page_footer(&view.pagination));
}

async fn interaction_loop(view: &mut EventsListView<'_>) -> Result<()> {
    loop {
        let actions = [
            "Next page",
            "Previous page",
            "Go to page",
            "New event",
            "Edit an event",
            "Delete an event",
            "Quit",
        ];
        let choice = Select::new()
            .with_prompt("  Events")
            .items(&actions)
            .default(actions.len() - 1)
            .interact()?;

        match choice {
            0 => view.next_page().await,
            1 => view.prev_page().await,
            2 => {
                let n: u32 = Input::new().with_prompt("  Page").interact_text()?;
                view.go_to_page(n).await;
            }
            3 => view.create().await?,
            4 => {
                if let Some(index) = pick_event(view, "  Edit which event?")? {
                    let event = view.events[index].clone();
                    view.edit(event).await?;
                }
            }
            5 => delete_flow(view).await?,
            _ => return Ok(()),
        }
        print_page(view);
    }
}

fn pick_event(view: &EventsListView<'_>, prompt: &str) -> Result<Option<usize>> {
    if view.events.is_empty() {
        println!("  {}", "(nothing to pick on this page)".dimmed());
        return Ok(None);
    }
    let labels: Vec<String> = view
        .events
        .iter()
        .map(|event| format!("{} ({})", event.title, event.start_at))
        .collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Some(index))
}

async fn delete_flow(view: &mut EventsListView<'_>) -> Result<()> {
    let Some(index) = pick_event(view, "  Delete which event?")? else {
        return Ok(());
    };
    let event = &view.events[index];
    let Some(id) = event.id else {
        return Ok(());
    };

    let confirmed = Confirm::new()
        .with_prompt(format!(
            "  Delete \"{}\"? This cannot be undone.",
            event.title
        ))
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    // Not optimistic: the row only disappears once the backend agrees.
    if let Err(e) = view.delete(id).await {
        println!("{}", format!("  Delete failed: {e}").red());
    }
    Ok(())
}
