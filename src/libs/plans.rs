//! Reading plans and the single active plan.
//!
//! At most one plan is active at a time. Activating a plan records the day
//! it started; progress is a percentage capped at 100.

use crate::libs::kv::{JsonCollection, SharedStore};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub const PLANS_KEY: &str = "@biblia_app_plans";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    Daily,
    Weekly,
    Custom,
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanKind::Daily => write!(f, "daily"),
            PlanKind::Weekly => write!(f, "weekly"),
            PlanKind::Custom => write!(f, "custom"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingPlan {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Human readable length, e.g. "365 days".
    pub duration: String,
    /// Percent complete, 0..=100.
    pub progress: u8,
    #[serde(rename = "type")]
    pub kind: PlanKind,
    pub is_active: bool,
    /// `YYYY-MM-DD` of the last activation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

impl ReadingPlan {
    pub fn new(title: &str, description: &str, duration: &str, kind: PlanKind) -> Self {
        ReadingPlan {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            duration: duration.to_string(),
            progress: 0,
            kind,
            is_active: false,
            start_date: None,
        }
    }
}

/// Fields to overwrite on an existing plan.
#[derive(Debug, Clone, Default)]
pub struct PlanPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub progress: Option<u8>,
    pub kind: Option<PlanKind>,
}

impl PlanPatch {
    fn apply(self, plan: &mut ReadingPlan) {
        if let Some(title) = self.title {
            plan.title = title;
        }
        if let Some(description) = self.description {
            plan.description = description;
        }
        if let Some(duration) = self.duration {
            plan.duration = duration;
        }
        if let Some(progress) = self.progress {
            plan.progress = progress.min(100);
        }
        if let Some(kind) = self.kind {
            plan.kind = kind;
        }
    }
}

pub struct Plans {
    items: JsonCollection<ReadingPlan>,
}

impl Plans {
    pub fn new(store: SharedStore) -> Result<Self> {
        Ok(Plans {
            items: JsonCollection::load(store, PLANS_KEY)?,
        })
    }

    pub fn all(&self) -> &[ReadingPlan] {
        self.items.items()
    }

    pub fn get(&self, id: &str) -> Option<&ReadingPlan> {
        self.items.items().iter().find(|p| p.id == id)
    }

    /// The plan currently being followed, if any.
    pub fn active(&self) -> Option<&ReadingPlan> {
        self.items.items().iter().find(|p| p.is_active)
    }

    pub fn add(&mut self, plan: ReadingPlan) -> Result<()> {
        self.items.commit(|items| items.insert(0, plan))?;
        Ok(())
    }

    /// Merges `patch` into the plan with `id`. Returns `false` if absent.
    pub fn update(&mut self, id: &str, patch: PlanPatch) -> Result<bool> {
        let Some(index) = self.items.items().iter().position(|p| p.id == id) else {
            return Ok(false);
        };
        self.items.commit(|items| patch.apply(&mut items[index]))?;
        Ok(true)
    }

    pub fn update_progress(&mut self, id: &str, progress: u8) -> Result<bool> {
        self.update(
            id,
            PlanPatch {
                progress: Some(progress),
                ..Default::default()
            },
        )
    }

    /// [`Plans::activate_on`] with today's local date.
    pub fn activate(&mut self, id: &str) -> Result<bool> {
        self.activate_on(id, Local::now().date_naive())
    }

    /// Makes `id` the only active plan, starting on `today`. Other plans are
    /// deactivated and keep their start dates.
    pub fn activate_on(&mut self, id: &str, today: NaiveDate) -> Result<bool> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        let start_date = today.format("%Y-%m-%d").to_string();
        self.items.commit(|items| {
            for plan in items.iter_mut() {
                plan.is_active = plan.id == id;
                if plan.is_active {
                    plan.start_date = Some(start_date.clone());
                }
            }
        })?;
        Ok(true)
    }

    pub fn remove(&mut self, id: &str) -> Result<bool> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        self.items.commit(|items| items.retain(|p| p.id != id))?;
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.items.clear()?;
        Ok(())
    }
}
