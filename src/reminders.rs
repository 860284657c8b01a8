//! Notification predicates and care reminder plans.
//!
//! Nothing here delivers a notification. [`plan_care_reminders`] returns plain
//! data that an external scheduler turns into platform notifications.

use crate::buddy::growth::{evolution_progress, xp_to_next_level};
use crate::buddy::types::Buddy;
use crate::buddy::vitals::VitalKind;
use crate::core::constants::{EVOLUTION_IMMINENT_PROGRESS, LEVEL_UP_IMMINENT_XP};
use chrono::Weekday;
use serde::{Deserialize, Serialize};

pub fn is_critical(buddy: &Buddy, vital: VitalKind) -> bool {
    buddy.vitals().is_critical(vital)
}

pub fn evolution_imminent(buddy: &Buddy) -> bool {
    evolution_progress(buddy) > EVOLUTION_IMMINENT_PROGRESS
}

pub fn level_up_imminent(buddy: &Buddy) -> bool {
    xp_to_next_level(buddy) <= LEVEL_UP_IMMINENT_XP
}

/// When a reminder should fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReminderTrigger {
    /// Once, this many seconds after scheduling.
    AfterSeconds(u64),
    /// Every day at the given local time.
    Daily { hour: u32, minute: u32 },
    /// Every week on the given day at the given local time.
    Weekly {
        weekday: Weekday,
        hour: u32,
        minute: u32,
    },
}

impl ReminderTrigger {
    pub fn repeats(&self) -> bool {
        !matches!(self, ReminderTrigger::AfterSeconds(_))
    }
}

/// Action group the platform attaches to the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReminderCategory {
    BuddyCare,
    DailyCare,
    StatReminder,
    Evolution,
    LevelUp,
}

impl ReminderCategory {
    pub fn action_title(&self) -> &'static str {
        match self {
            ReminderCategory::BuddyCare => "Care for Buddy",
            ReminderCategory::DailyCare => "Check Buddy",
            ReminderCategory::StatReminder => "Open App",
            ReminderCategory::Evolution => "Check Evolution",
            ReminderCategory::LevelUp => "View Progress",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Stable id; rescheduling a reminder with the same id replaces it.
    pub id: String,
    pub title: String,
    pub body: String,
    pub category: ReminderCategory,
    pub trigger: ReminderTrigger,
}

impl Reminder {
    fn new(
        id: impl Into<String>,
        title: String,
        body: String,
        category: ReminderCategory,
        trigger: ReminderTrigger,
    ) -> Self {
        Self {
            id: id.into(),
            title,
            body,
            category,
            trigger,
        }
    }
}

/// Vitals that can go critical, with alert delay in seconds, icon, headline
/// and body prompt. Happiness has no critical level and is absent.
const CRITICAL_ALERTS: [(VitalKind, u64, &str, &str, &str); 4] = [
    (
        VitalKind::Hunger,
        5,
        "🍽️",
        "is Very Hungry!",
        "Your buddy needs food urgently! Hunger level",
    ),
    (
        VitalKind::Energy,
        10,
        "😴",
        "is Exhausted!",
        "Your buddy needs rest immediately! Energy level",
    ),
    (
        VitalKind::Health,
        15,
        "🏥",
        "Needs Medical Care!",
        "Your buddy's health is low! Health level",
    ),
    (
        VitalKind::Cleanliness,
        20,
        "🛁",
        "Needs a Bath!",
        "Your buddy is getting dirty! Cleanliness level",
    ),
];

/// Alerts for every vital currently below its critical threshold.
pub fn critical_alerts(buddy: &Buddy) -> Vec<Reminder> {
    let name = &buddy.name;
    CRITICAL_ALERTS
        .iter()
        .filter(|(vital, ..)| is_critical(buddy, *vital))
        .map(|&(vital, delay, icon, headline, prompt)| {
            Reminder::new(
                format!("{}_critical", vital.name().to_lowercase()),
                format!("{icon} {name} {headline}"),
                format!("{prompt}: {}%", buddy.vital(vital)),
                ReminderCategory::BuddyCare,
                ReminderTrigger::AfterSeconds(delay),
            )
        })
        .collect()
}

pub fn daily_check_ins(buddy: &Buddy) -> Vec<Reminder> {
    let name = &buddy.name;
    let daily = |hour| ReminderTrigger::Daily { hour, minute: 0 };
    vec![
        Reminder::new(
            "morning_care",
            format!("🌅 Good Morning, {name}!"),
            "Start the day with some breakfast and playtime!".to_string(),
            ReminderCategory::DailyCare,
            daily(8),
        ),
        Reminder::new(
            "afternoon_care",
            "☀️ Afternoon Check-in".to_string(),
            format!("How is {name} doing? Time for some care and attention!"),
            ReminderCategory::DailyCare,
            daily(14),
        ),
        Reminder::new(
            "evening_care",
            "🌆 Evening Care Time".to_string(),
            format!("{name} needs dinner and some evening playtime!"),
            ReminderCategory::DailyCare,
            daily(19),
        ),
        Reminder::new(
            "bedtime_care",
            format!("🌙 Bedtime for {name}"),
            "Time to help your buddy get ready for sleep!".to_string(),
            ReminderCategory::DailyCare,
            daily(22),
        ),
    ]
}

/// Feeding, play and bath reminders at fixed times of day.
pub fn routine_reminders(buddy: &Buddy) -> Vec<Reminder> {
    let name = &buddy.name;
    let mut reminders = Vec::new();

    for hour in [10, 14, 18] {
        reminders.push(Reminder::new(
            format!("feeding_{hour}"),
            "🍎 Feeding Time!".to_string(),
            format!("{name} is getting hungry. Time for a snack!"),
            ReminderCategory::StatReminder,
            ReminderTrigger::Daily { hour, minute: 0 },
        ));
    }
    for hour in [11, 16, 20] {
        reminders.push(Reminder::new(
            format!("play_{hour}"),
            "🎮 Play Time!".to_string(),
            format!("{name} wants to play! Boost their happiness with some fun activities."),
            ReminderCategory::StatReminder,
            ReminderTrigger::Daily { hour, minute: 30 },
        ));
    }
    for hour in [9, 21] {
        reminders.push(Reminder::new(
            format!("clean_{hour}"),
            "🧼 Bath Time!".to_string(),
            format!("{name} could use a good cleaning to stay healthy and happy!"),
            ReminderCategory::StatReminder,
            ReminderTrigger::Daily { hour, minute: 15 },
        ));
    }
    reminders
}

pub fn evolution_reminder(buddy: &Buddy) -> Option<Reminder> {
    evolution_imminent(buddy).then(|| {
        Reminder::new(
            "evolution_ready",
            "🌟 Evolution Coming Soon!".to_string(),
            format!(
                "{} is almost ready to evolve! Keep up the great care!",
                buddy.name
            ),
            ReminderCategory::Evolution,
            ReminderTrigger::AfterSeconds(30),
        )
    })
}

pub fn level_up_reminder(buddy: &Buddy) -> Option<Reminder> {
    level_up_imminent(buddy).then(|| {
        Reminder::new(
            "level_up_soon",
            "⭐ Level Up Soon!".to_string(),
            format!(
                "{} needs only {} more experience to level up!",
                buddy.name,
                xp_to_next_level(buddy)
            ),
            ReminderCategory::LevelUp,
            ReminderTrigger::AfterSeconds(60),
        )
    })
}

pub fn weekly_report(buddy: &Buddy) -> Reminder {
    Reminder::new(
        "weekly_report",
        "📊 Weekly Buddy Report".to_string(),
        format!(
            "Check out {}'s progress this week! Level {}, {} stage.",
            buddy.name,
            buddy.level,
            buddy.evolution_stage.name()
        ),
        ReminderCategory::DailyCare,
        ReminderTrigger::Weekly {
            weekday: Weekday::Sun,
            hour: 10,
            minute: 0,
        },
    )
}

/// The full reminder set for the buddy's current state.
pub fn plan_care_reminders(buddy: &Buddy) -> Vec<Reminder> {
    let mut plan = critical_alerts(buddy);
    plan.extend(daily_check_ins(buddy));
    plan.extend(routine_reminders(buddy));
    plan.extend(evolution_reminder(buddy));
    plan.extend(level_up_reminder(buddy));
    plan.push(weekly_report(buddy));
    plan
}
