use std::path::PathBuf;

use anyhow::Result;
use booking_core::config::BookingConfig;
use booking_core::grid::{self, Granularity};
use booking_core::resource::ResourceSelection;
use booking_core::state::{Action, CalendarState};
use booking_core::view::{CalendarView, ViewSettings};
use clap::Args;

use crate::render::Render;

use super::{load_data, parse_date};

#[derive(Args)]
pub struct ViewArgs {
    /// Anchor date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Resource id to show (repeatable), defaults to default_resources from config
    #[arg(short, long = "resource")]
    pub resources: Vec<String>,

    /// Data file (TOML), overrides data_file from config
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Step forward this many days from the anchor
    #[arg(long, default_value_t = 0)]
    pub next: u32,

    /// Step back this many days from the anchor
    #[arg(long, default_value_t = 0)]
    pub prev: u32,

    /// Flip a resource in or out of the selection (repeatable)
    #[arg(short, long)]
    pub toggle: Vec<String>,

    /// Print the render model as JSON
    #[arg(long)]
    pub json: bool,
}

impl ViewArgs {
    /// Reducer actions for these args, applied after the anchor is set
    fn actions(&self, granularity: Granularity, selection: ResourceSelection) -> Vec<Action> {
        let mut actions = vec![
            Action::SetGranularity(granularity),
            Action::SetSelection(selection),
        ];
        actions.extend(self.toggle.iter().cloned().map(Action::ToggleResource));
        actions.extend((0..self.next).map(|_| Action::Next));
        actions.extend((0..self.prev).map(|_| Action::Previous));
        actions
    }
}

pub fn run(granularity: Option<Granularity>, args: ViewArgs) -> Result<()> {
    let config = BookingConfig::load()?;
    let data = load_data(&config, args.data.as_deref())?;

    let today = grid::today();
    let anchor = match args.date.as_deref() {
        Some(s) => parse_date(s)?,
        None => today,
    };

    let selection = if args.resources.is_empty() {
        config.default_selection()
    } else {
        ResourceSelection::new(args.resources.clone())
    };

    let state = CalendarState::new(anchor).apply_all(args.actions(
        granularity.unwrap_or(config.default_view),
        selection,
    ));

    let settings = ViewSettings {
        day: config.day_scale(),
        week: config.week_scale(),
    };

    let view = CalendarView::build(&state, &data, &settings, today);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", view.render());
    }

    Ok(())
}
