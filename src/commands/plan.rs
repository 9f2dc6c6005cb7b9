use super::{confirm, App};
use crate::libs::messages::Message;
use crate::libs::plans::{PlanKind, Plans, ReadingPlan};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct PlanArgs {
    #[command(subcommand)]
    command: Option<PlanCommand>,
}

#[derive(Debug, Subcommand)]
enum PlanCommand {
    /// Create a reading plan
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// Free text, e.g. "365 days"
        #[arg(long, default_value = "")]
        duration: String,
        #[arg(short, long, value_enum, default_value_t = PlanKind::Daily)]
        kind: PlanKind,
    },
    /// List reading plans
    List,
    /// Make a plan the active one, starting today
    Activate { id: String },
    /// Set the progress of a plan (0-100)
    Progress {
        id: String,
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        percent: u8,
    },
    /// Delete a plan by id
    Remove { id: String },
    /// Delete every plan
    Clear {
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(app: &App, args: PlanArgs) -> Result<()> {
    let mut plans = Plans::new(app.kv.clone())?;

    match args.command {
        Some(PlanCommand::Add {
            title,
            description,
            duration,
            kind,
        }) => match plans.add(ReadingPlan::new(&title, &description, &duration, kind)) {
            Ok(()) => msg_success!(Message::PlanAdded(title)),
            Err(e) => msg_error!(Message::PlanSaveFailed(e.to_string())),
        },
        Some(PlanCommand::List) | None => {
            if plans.all().is_empty() {
                msg_info!(Message::NoPlans);
            } else {
                View::plans(plans.all());
            }
        }
        Some(PlanCommand::Activate { id }) => match plans.activate(&id) {
            Ok(true) => msg_success!(Message::PlanActivated(title_of(&plans, &id))),
            Ok(false) => msg_warning!(Message::PlanNotFound(id)),
            Err(e) => msg_error!(Message::PlanSaveFailed(e.to_string())),
        },
        Some(PlanCommand::Progress { id, percent }) => match plans.update_progress(&id, percent) {
            Ok(true) => msg_success!(Message::PlanProgressUpdated(title_of(&plans, &id), percent)),
            Ok(false) => msg_warning!(Message::PlanNotFound(id)),
            Err(e) => msg_error!(Message::PlanSaveFailed(e.to_string())),
        },
        Some(PlanCommand::Remove { id }) => match plans.remove(&id) {
            Ok(true) => msg_success!(Message::PlanRemoved),
            Ok(false) => msg_warning!(Message::PlanNotFound(id)),
            Err(e) => msg_error!(Message::PlanSaveFailed(e.to_string())),
        },
        Some(PlanCommand::Clear { yes }) => {
            if !confirm(Message::ConfirmClearPlans, yes)? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            match plans.clear() {
                Ok(()) => msg_success!(Message::PlansCleared),
                Err(e) => msg_error!(Message::PlanSaveFailed(e.to_string())),
            }
        }
    }
    Ok(())
}

fn title_of(plans: &Plans, id: &str) -> String {
    plans.get(id).map(|p| p.title.clone()).unwrap_or_else(|| id.to_string())
}
