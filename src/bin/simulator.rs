//! SustainaBuddy Headless Care Simulator
//!
//! Runs the buddy tick loop over a virtual clock with a scripted caregiver,
//! collecting metrics for balance analysis. Uses the same `buddy_tick()` and
//! care actions as the app.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --days N          Days to simulate (default: 40)
//!   --seed N          RNG seed (default: 42)
//!   --policy NAME     attentive | casual | neglectful (default: attentive)
//!   --tick-minutes N  Minutes between ticks (default: 1)
//!   --income N        Eco-credits earned per day (default: 60)
//!   --runs N          Number of runs with incrementing seeds (default: 1)
//!   --verbose         Per-event logging
//!   --quiet           Only final summary line

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use std::io;
use sustainabuddy::buddy::care::{self, Food, FOODS};
use sustainabuddy::buddy::types::Buddy;
use sustainabuddy::core::constants::MAX_OFFLINE_DAYS;
use sustainabuddy::utils::build_info;
use sustainabuddy::{
    buddy_tick, CareResult, CareState, CaregiverProfile, Clock, EvolutionStage, ManualClock,
    TickEvent, TickResult,
};
use tracing_subscriber::EnvFilter;

// ── CLI Configuration ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Policy {
    Attentive,
    Casual,
    Neglectful,
}

impl Policy {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "attentive" => Some(Policy::Attentive),
            "casual" => Some(Policy::Casual),
            "neglectful" => Some(Policy::Neglectful),
            _ => None,
        }
    }

    /// Chance the caregiver opens the app at a check-in hour.
    fn check_in_chance(&self) -> f64 {
        match self {
            Policy::Attentive => 0.95,
            Policy::Casual => 0.6,
            Policy::Neglectful => 0.15,
        }
    }
}

const CHECK_IN_HOURS: [u32; 4] = [8, 12, 18, 21];

struct SimConfig {
    days: u32,
    seed: u64,
    policy: Policy,
    tick_minutes: i64,
    income_per_day: u32,
    runs: u32,
    verbose: bool,
    quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            days: 40,
            seed: 42,
            policy: Policy::Attentive,
            tick_minutes: 1,
            income_per_day: 60,
            runs: 1,
            verbose: false,
            quiet: false,
        }
    }
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).and_then(|v| v.parse().ok()) {
        Some(value) => value,
        None => {
            eprintln!("{flag} requires a value");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn parse_args() -> SimConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--days" => {
                i += 1;
                config.days = parse_value(&args, i, "--days");
            }
            "--seed" => {
                i += 1;
                config.seed = parse_value(&args, i, "--seed");
            }
            "--policy" => {
                i += 1;
                let name: String = parse_value(&args, i, "--policy");
                config.policy = Policy::parse(&name).unwrap_or_else(|| {
                    eprintln!("Unknown policy: {name}");
                    std::process::exit(1);
                });
            }
            "--tick-minutes" => {
                i += 1;
                config.tick_minutes = parse_value::<i64>(&args, i, "--tick-minutes").max(1);
            }
            "--income" => {
                i += 1;
                config.income_per_day = parse_value(&args, i, "--income");
            }
            "--runs" => {
                i += 1;
                config.runs = parse_value(&args, i, "--runs");
            }
            "--verbose" => config.verbose = true,
            "--quiet" => config.quiet = true,
            "--version" | "-v" => {
                println!("{}", build_info::version_string());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    config
}

fn print_usage() {
    eprintln!(
        "SustainaBuddy Headless Care Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --days N          Days to simulate (default: 40)\n\
         \x20 --seed N          RNG seed (default: 42)\n\
         \x20 --policy NAME     attentive | casual | neglectful (default: attentive)\n\
         \x20 --tick-minutes N  Minutes between ticks (default: 1)\n\
         \x20 --income N        Eco-credits earned per day (default: 60)\n\
         \x20 --runs N          Number of runs with incrementing seeds (default: 1)\n\
         \x20 --verbose         Per-event logging\n\
         \x20 --quiet           Only final summary line\n\
         \x20 --help, -h        Show this help"
    );
}

// ── Simulation Statistics ────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
struct SimStats {
    ticks: u64,
    check_ins: u64,
    care_actions: BTreeMap<&'static str, u64>,
    rejected_actions: u64,
    credits_spent: u64,
    level_ups: u64,
    critical_alerts: u64,
    times_fell_asleep: u64,
    /// Simulated day on which each stage was reached.
    stage_day: BTreeMap<EvolutionStage, u32>,
    wellbeing_sum: u64,
    min_wellbeing: i32,
    final_level: u32,
    final_age: u32,
    final_stage: Option<EvolutionStage>,
    final_credits: u32,
}

impl SimStats {
    fn process_tick(&mut self, result: &TickResult, day: u32) {
        self.ticks += 1;
        for event in &result.events {
            match event {
                TickEvent::LeveledUp { .. } => self.level_ups += 1,
                TickEvent::Evolved { to, .. } => {
                    self.stage_day.entry(*to).or_insert(day);
                }
                TickEvent::VitalCritical { .. } => self.critical_alerts += 1,
                TickEvent::FellAsleep => self.times_fell_asleep += 1,
                _ => {}
            }
        }
    }

    fn record_wellbeing(&mut self, buddy: &Buddy) {
        let wellbeing = buddy.overall_wellbeing();
        self.wellbeing_sum += wellbeing as u64;
        self.min_wellbeing = self.min_wellbeing.min(wellbeing);
    }

    fn record_care(&mut self, name: &'static str, outcome: CareResult<care::CareOutcome>) {
        match outcome {
            Ok(outcome) => {
                *self.care_actions.entry(name).or_insert(0) += 1;
                self.credits_spent += u64::from(outcome.credits_spent);
                self.level_ups += u64::from(outcome.levelups);
            }
            Err(_) => self.rejected_actions += 1,
        }
    }

    fn finalize(&mut self, state: &CareState) {
        self.final_level = state.buddy.level;
        self.final_age = state.buddy.age;
        self.final_stage = Some(state.buddy.evolution_stage);
        self.final_credits = state.profile.eco_credits;
    }

    fn average_wellbeing(&self) -> f64 {
        if self.ticks == 0 {
            return 0.0;
        }
        self.wellbeing_sum as f64 / self.ticks as f64
    }
}

// ── Caregiver ────────────────────────────────────────────────────────

/// Cheapest food that covers the hunger gap, else the most filling affordable one.
fn choose_food(hunger: i32, credits: u32) -> Option<&'static Food> {
    let gap = 100 - hunger;
    let mut affordable: Vec<&Food> = FOODS.iter().filter(|f| f.cost <= credits).collect();
    affordable.sort_by_key(|f| f.cost);
    affordable
        .iter()
        .find(|f| f.nutrition >= gap)
        .or_else(|| affordable.iter().max_by_key(|f| f.nutrition))
        .copied()
}

fn check_in<R: Rng>(state: &mut CareState, now: NaiveDateTime, rng: &mut R, stats: &mut SimStats) {
    stats.check_ins += 1;
    let credits = &mut state.profile.eco_credits;
    let buddy = &mut state.buddy;

    if buddy.vitals().hunger() < 60 {
        if let Some(food) = choose_food(buddy.vitals().hunger(), *credits) {
            let outcome = care::feed(buddy, credits, food, now);
            stats.record_care("feed", outcome);
        }
    }
    if buddy.vitals().health() < 50 {
        let outcome = care::medical_care(buddy, credits);
        stats.record_care("medical", outcome);
    }
    if buddy.vitals().cleanliness() < 50 {
        let outcome = care::clean(buddy, credits, now);
        stats.record_care("clean", outcome);
    }
    if buddy.vitals().energy() < 40 || now.hour() >= 21 {
        let outcome = care::rest(buddy, credits, now);
        stats.record_care("rest", outcome);
    } else if buddy.vitals().happiness() < 80 {
        let outcome = care::play(buddy, credits, now);
        stats.record_care("play", outcome);
    }

    // A quick pat on the way out
    care::pet_buddy(buddy, rng);
    *stats.care_actions.entry("pet").or_insert(0) += 1;
}

// ── Simulation ───────────────────────────────────────────────────────

fn start_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 1)
        .and_then(|d| d.and_hms_opt(7, 0, 0))
        .unwrap_or_default()
}

fn run_simulation(config: &SimConfig, seed: u64) -> (SimStats, CareState) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let clock = ManualClock::new(start_time());
    let mut state = CareState::new(CaregiverProfile::new(), clock.now());
    let mut stats = SimStats {
        min_wellbeing: i32::MAX,
        ..SimStats::default()
    };

    let end = start_time() + chrono::Duration::days(i64::from(config.days));
    let mut last_check_in_hour = None;
    let mut last_paid_day = 0i64;

    while clock.now() < end {
        clock.advance_minutes(config.tick_minutes);
        let now = clock.now();
        let day = (now.date() - start_time().date()).num_days();

        let result = buddy_tick(&mut state, now, MAX_OFFLINE_DAYS);
        stats.process_tick(&result, state.buddy.age);
        stats.record_wellbeing(&state.buddy);
        if config.verbose {
            print_tick_events(now, &result);
        }

        if day > last_paid_day {
            last_paid_day = day;
            state.profile.earn(config.income_per_day);
        }

        let hour = now.hour();
        let slot = (now.date(), hour);
        if CHECK_IN_HOURS.contains(&hour) && last_check_in_hour != Some(slot) {
            last_check_in_hour = Some(slot);
            if rng.gen::<f64>() < config.policy.check_in_chance() {
                check_in(&mut state, now, &mut rng, &mut stats);
            }
        }
    }

    stats.finalize(&state);
    (stats, state)
}

// ── Verbose Output ───────────────────────────────────────────────────

fn tick_event_lines(now: NaiveDateTime, result: &TickResult) -> Vec<String> {
    result
        .events
        .iter()
        .filter_map(|event| {
            let label = match event {
                TickEvent::DayPassed { age, xp_gained } => format!("Day {age} (+{xp_gained} XP)"),
                TickEvent::DaysSkipped { days } => format!("Skipped {days} day(s)"),
                TickEvent::LeveledUp { new_level } => format!("Level up! -> {new_level}"),
                TickEvent::Evolved { from, to } => {
                    format!("Evolved {} -> {}", from.name(), to.name())
                }
                TickEvent::VitalCritical { vital, value } => {
                    format!("{} critical ({value})", vital.name())
                }
                TickEvent::FellAsleep => "Fell asleep".to_string(),
                TickEvent::WokeUp => "Woke up".to_string(),
                TickEvent::MoodChanged { from, to } => {
                    format!("Mood {} -> {}", from.name(), to.name())
                }
                // Every minute; too noisy to print
                TickEvent::VitalsDecayed(_) => return None,
            };
            Some(format!("[{}] {label}", now.format("%m-%d %H:%M")))
        })
        .collect()
}

fn print_tick_events(now: NaiveDateTime, result: &TickResult) {
    for line in tick_event_lines(now, result) {
        println!("{line}");
    }
}

// ── Report Output ────────────────────────────────────────────────────

fn print_summary(stats: &SimStats, seed: u64, config: &SimConfig) {
    let stage = stats.final_stage.map(|s| s.name()).unwrap_or("-");
    if config.quiet {
        println!(
            "seed={seed} policy={:?} age={} level={} stage={stage} avg_wellbeing={:.1} spent={}",
            config.policy,
            stats.final_age,
            stats.final_level,
            stats.average_wellbeing(),
            stats.credits_spent,
        );
        return;
    }

    println!("============================================================");
    println!("  SustainaBuddy Care Simulation  (seed={seed})");
    println!("============================================================");
    println!();
    println!(
        "Duration: {} days, {} ticks of {} min  |  Policy: {:?}",
        config.days, stats.ticks, config.tick_minutes, config.policy
    );
    println!();

    println!("--- Final State ---");
    println!(
        "Age: {}  |  Level: {}  |  Stage: {stage}  |  Credits left: {}",
        stats.final_age, stats.final_level, stats.final_credits
    );
    println!(
        "Wellbeing avg: {:.1}  |  min: {}",
        stats.average_wellbeing(),
        stats.min_wellbeing
    );
    println!();

    println!("--- Evolution ---");
    for (stage, day) in &stats.stage_day {
        println!("  {:<6} day {day}", stage.name());
    }
    println!();

    println!("--- Care ---");
    println!(
        "Check-ins: {}  |  Spent: {} credits  |  Rejected: {}",
        stats.check_ins, stats.credits_spent, stats.rejected_actions
    );
    for (action, count) in &stats.care_actions {
        println!("  {action:<8} {count}");
    }
    println!(
        "Level ups: {}  |  Critical alerts: {}  |  Naps: {}",
        stats.level_ups, stats.critical_alerts, stats.times_fell_asleep
    );
    println!();
}

/// Warnings only by default so the report stays readable.
const DEFAULT_LOG_FILTER: &str = "sustainabuddy=warn";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let config = parse_args();
    init_tracing();
    for run in 0..config.runs {
        let seed = config.seed + u64::from(run);
        let (stats, _) = run_simulation(&config, seed);
        print_summary(&stats, seed, &config);
    }
}
