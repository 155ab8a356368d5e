//! The event form and its modal host.
//!
//! [`FormHost`] is the narrow interface views use to hand an edit over
//! to "the modal": open the form, wait, and learn whether a write was
//! committed. [`TerminalFormHost`] implements it with dialoguer
//! prompts driving an [`EventDraft`].

use anyhow::Result;
use async_trait::async_trait;
use dialoguer::{Confirm, Input, Select};
use owo_colors::OwoColorize;

use agenda_core::form::EventDraft;
use agenda_core::Event;

use crate::api::EventApi;

/// Modal host for the event form.
///
/// `event_to_edit` selects edit mode; `initial_start` (T-separated, or
/// a bare date) seeds a quick-create draft. The returned boolean says
/// whether a write was committed, which is what the calling view uses
/// to decide on a reload.
#[async_trait]
pub trait FormHost {
    async fn open_event_form(
        &self,
        event_to_edit: Option<Event>,
        initial_start: Option<String>,
    ) -> Result<bool>;
}

/// Terminal implementation of [`FormHost`].
pub struct TerminalFormHost<'a> {
    api: &'a EventApi,
}

impl<'a> TerminalFormHost<'a> {
    pub fn new(api: &'a EventApi) -> Self {
        TerminalFormHost { api }
    }
}

#[async_trait]
impl FormHost for TerminalFormHost<'_> {
    async fn open_event_form(
        &self,
        event_to_edit: Option<Event>,
        initial_start: Option<String>,
    ) -> Result<bool> {
        let mut draft = match (&event_to_edit, &initial_start) {
            (Some(event), _) => EventDraft::from_event(event),
            (None, Some(start)) => EventDraft::with_initial_start(start),
            (None, None) => EventDraft::new(),
        };

        loop {
            prompt_event_fields(&mut draft)?;
            edit_participants(&mut draft)?;

            if let Err(errors) = draft.validate() {
                for error in &errors {
                    println!("  {} {}: {}", "!".red(), error.field, error.message);
                }
                if !Confirm::new()
                    .with_prompt("  Fix the flagged fields?")
                    .default(true)
                    .interact()?
                {
                    return Ok(false);
                }
                continue;
            }

            let event = draft.serialize();
            let result = match draft.id() {
                Some(id) => self.api.update(id, &event).await,
                None => self.api.create(&event).await,
            };

            match result {
                Ok(saved) => {
                    println!("{}", format!("  Saved: {}", saved.title).green());
                    return Ok(true);
                }
                Err(e) => {
                    // The draft stays intact so the user can retry
                    // without re-entering anything.
                    println!("{}", format!("  Save failed: {e}").red());
                    if !Confirm::new()
                        .with_prompt("  Edit and retry?")
                        .default(true)
                        .interact()?
                    {
                        return Ok(false);
                    }
                }
            }
        }
    }
}

fn prompt_text(prompt: &str, current: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .default(current.to_string())
        .show_default(!current.is_empty())
        .allow_empty(true)
        .interact_text()?)
}

fn prompt_event_fields(draft: &mut EventDraft) -> Result<()> {
    draft.title = prompt_text("  Title", &draft.title)?;
    draft.description = prompt_text("  Description (skip)", &draft.description)?;
    draft.location = prompt_text("  Where? (skip)", &draft.location)?;
    draft.start_at = prompt_text("  Start (YYYY-MM-DDTHH:MM)", &draft.start_at)?;
    draft.end_at = prompt_text("  End (YYYY-MM-DDTHH:MM)", &draft.end_at)?;
    Ok(())
}

fn participant_label(draft: &EventDraft, index: usize) -> String {
    let participant = &draft.participants[index];
    if participant.first_name.is_empty() && participant.last_name.is_empty() {
        format!("{}. (empty)", index + 1)
    } else {
        format!(
            "{}. {} {} <{}>",
            index + 1,
            participant.first_name,
            participant.last_name,
            participant.email
        )
    }
}

fn pick_row(draft: &EventDraft, prompt: &str) -> Result<Option<usize>> {
    if draft.participants.is_empty() {
        return Ok(None);
    }
    let labels: Vec<String> = (0..draft.participants.len())
        .map(|i| participant_label(draft, i))
        .collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Some(index))
}

fn edit_participants(draft: &mut EventDraft) -> Result<()> {
    loop {
        for index in 0..draft.participants.len() {
            println!("   {}", participant_label(draft, index));
        }
        let actions = ["Edit a row", "Add a row", "Remove a row", "Done"];
        let choice = Select::new()
            .with_prompt("  Participants")
            .items(&actions)
            .default(actions.len() - 1)
            .interact()?;

        match choice {
            0 => {
                if let Some(index) = pick_row(draft, "  Edit which row?")? {
                    let row = &mut draft.participants[index];
                    row.last_name = prompt_text("    Last name", &row.last_name)?;
                    row.first_name = prompt_text("    First name", &row.first_name)?;
                    row.email = prompt_text("    Email", &row.email)?;
                }
            }
            1 => draft.add_participant(),
            2 => {
                if let Some(index) = pick_row(draft, "  Remove which row?")? {
                    draft.remove_participant(index);
                }
            }
            _ => return Ok(()),
        }
    }
}
