use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use sustainabuddy::buddy::care::{self, FOODS};
use sustainabuddy::buddy::growth::{
    evolution_progress, next_evolution_requirements, xp_for_next_level,
};
use sustainabuddy::buddy::naming::{rename_buddy, select_species};
use sustainabuddy::buddy::sleep::{sleep_countdown, sleep_status};
use sustainabuddy::customization::logic::{equip_item, purchase_item, unequip_accessory};
use sustainabuddy::customization::types::{AccessorySlot, ACCESSORIES, OUTFITS};
use sustainabuddy::reminders::plan_care_reminders;
use sustainabuddy::save_manager::SaveManager;
use sustainabuddy::utils::build_info;
use sustainabuddy::{
    process_offline_time, BuddyConfig, CareError, CareResult, CareState, CaregiverProfile, Clock,
    Species, SystemClock, VitalKind,
};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!(
        "SustainaBuddy - care for your eco companion\n\
         \n\
         Usage: sustainabuddy [COMMAND] [ARGS]\n\
         \n\
         Commands:\n\
         \x20 status              Show your buddy (default)\n\
         \x20 foods               List foods and prices\n\
         \x20 feed FOOD_ID        Feed your buddy\n\
         \x20 play | clean | rest | medical\n\
         \x20 pet                 Free interaction\n\
         \x20 shop                List accessories and outfits\n\
         \x20 buy ITEM_ID         Buy an accessory or outfit\n\
         \x20 equip ITEM_ID       Wear an owned accessory or outfit\n\
         \x20 unequip SLOT        Remove the accessory in hat/glasses/necklace/bow\n\
         \x20 rename NAME         Rename your buddy\n\
         \x20 species SPECIES     Choose a species (sea_otter, dolphin, ...)\n\
         \x20 earn AMOUNT         Credit eco-credits earned elsewhere\n\
         \x20 reminders           Show the reminder plan\n\
         \x20 config              Write the current settings to config.json\n\
         \x20 watch MINUTES       Run the live simulation for a while\n\
         \x20 reset               Start over with a new buddy\n\
         \x20 --version, -v       Show version\n\
         \x20 --help, -h          Show this help"
    );
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sustainabuddy=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("status");
    let arg = args.get(1).map(String::as_str);

    match command {
        "--version" | "-v" => {
            println!("{}", build_info::version_string());
            return Ok(());
        }
        "--help" | "-h" => {
            print_usage();
            return Ok(());
        }
        _ => {}
    }

    init_tracing();
    let config = BuddyConfig::load();
    let save_manager = SaveManager::new()?;
    let clock = SystemClock;

    let mut state = if command == "reset" {
        CareState::new(CaregiverProfile::new(), clock.now())
    } else {
        load_state(&save_manager, &clock)
    };

    let offline = process_offline_time(&mut state, clock.now(), config.max_offline_days);
    if offline.days_aged > 0 || offline.evolved() {
        println!(
            "While you were away: {} day(s) passed, level {} -> {}",
            offline.days_aged, offline.level_before, offline.level_after
        );
    }

    let now = clock.now();
    let result = match command {
        "status" | "reset" => Ok(()),
        "foods" => {
            for food in &FOODS {
                println!(
                    "{:<16} {} {:<16} +{:>2} nutrition  {:>2} credits",
                    food.id, food.emoji, food.name, food.nutrition, food.cost
                );
            }
            Ok(())
        }
        "feed" => require(arg, "FOOD_ID").and_then(|id| {
            let food = care::find_food(id).ok_or_else(|| CareError::UnknownItem(id.to_string()))?;
            care::feed(&mut state.buddy, &mut state.profile.eco_credits, food, now)
                .map(|_| println!("{} enjoyed the {}!", state.buddy.name, food.name))
        }),
        "play" => care::play(&mut state.buddy, &mut state.profile.eco_credits, now).map(report),
        "clean" => care::clean(&mut state.buddy, &mut state.profile.eco_credits, now).map(report),
        "rest" => care::rest(&mut state.buddy, &mut state.profile.eco_credits, now).map(report),
        "medical" => {
            care::medical_care(&mut state.buddy, &mut state.profile.eco_credits).map(report)
        }
        "pet" => {
            let mut rng = StdRng::from_entropy();
            let reaction = care::pet_buddy(&mut state.buddy, &mut rng);
            println!("{} {}", state.buddy.name, reaction);
            Ok(())
        }
        "shop" => {
            print_shop(&state);
            Ok(())
        }
        "buy" => require(arg, "ITEM_ID").and_then(|id| {
            let name = purchase_item(&mut state.buddy.wardrobe, id, &mut state.profile.eco_credits)?;
            println!("🛍️ Bought {name}");
            Ok(())
        }),
        "equip" => require(arg, "ITEM_ID").and_then(|id| equip_item(&mut state.buddy.wardrobe, id)),
        "unequip" => require(arg, "SLOT").and_then(|name| {
            let slot = AccessorySlot::ALL
                .into_iter()
                .find(|s| s.name().eq_ignore_ascii_case(name))
                .ok_or_else(|| CareError::UnknownItem(name.to_string()))?;
            unequip_accessory(&mut state.buddy.wardrobe, slot);
            Ok(())
        }),
        "rename" => {
            let name = args[1..].join(" ");
            rename_buddy(&mut state.buddy, &name)
        }
        "species" => require(arg, "SPECIES").and_then(|name| {
            let species = parse_species(name)?;
            select_species(&mut state.buddy, species, config.premium || state.profile.premium)
        }),
        "earn" => parse_amount(arg).map(|amount| state.profile.earn(amount)),
        "reminders" => {
            if !config.notifications_enabled {
                println!("Notifications are disabled in config.json");
            }
            for reminder in plan_care_reminders(&state.buddy) {
                println!("[{:?}] {} - {}", reminder.trigger, reminder.title, reminder.body);
            }
            Ok(())
        }
        "config" => {
            config.save()?;
            println!("{config:#?}");
            Ok(())
        }
        "watch" => {
            let minutes = arg.and_then(|a| a.parse::<u64>().ok()).unwrap_or(5);
            state = watch(state, &config, &save_manager, minutes)?;
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        println!("❌ {e}");
    }

    print_status(&state);
    state.last_save_time = clock.now();
    if let Err(e) = save_manager.save(&state) {
        tracing::warn!(error = %e, "Could not save");
        return Err(e);
    }
    Ok(())
}

fn load_state(save_manager: &SaveManager, clock: &impl Clock) -> CareState {
    if !save_manager.save_exists() {
        println!("🥚 A new buddy has hatched!");
        return CareState::new(CaregiverProfile::new(), clock.now());
    }
    match save_manager.load() {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!(error = %e, path = %save_manager.save_path().display(), "Save unreadable, starting over");
            CareState::new(CaregiverProfile::new(), clock.now())
        }
    }
}

fn require<'a>(arg: Option<&'a str>, what: &str) -> CareResult<&'a str> {
    arg.ok_or_else(|| CareError::InvalidArgument(format!("missing {what}")))
}

fn report(outcome: care::CareOutcome) {
    print!("{} {}", outcome.action.icon(), outcome.action.name());
    if outcome.xp_gained > 0 {
        print!("  +{} xp", outcome.xp_gained);
    }
    if outcome.levelups > 0 {
        print!("  ⭐ level up!");
    }
    println!();
}

fn parse_amount(arg: Option<&str>) -> CareResult<u32> {
    let text = require(arg, "AMOUNT")?;
    text.parse()
        .map_err(|_| CareError::InvalidArgument(format!("not an amount: {text}")))
}

fn parse_species(name: &str) -> CareResult<Species> {
    let wanted = name.replace(['_', '-'], " ");
    Species::ALL
        .into_iter()
        .find(|s| s.name().eq_ignore_ascii_case(&wanted))
        .ok_or_else(|| CareError::UnknownItem(name.to_string()))
}

fn print_shop(state: &CareState) {
    println!("Accessories:");
    for a in &ACCESSORIES {
        let owned = if state.buddy.wardrobe.owns_accessory(a.id) { "owned" } else { "" };
        let premium = if a.is_premium { "★" } else { " " };
        println!(
            "  {premium} {:<16} {} {:<16} {:<8} {:>4}  {owned}",
            a.id,
            a.emoji,
            a.name,
            a.slot.name(),
            a.cost
        );
    }
    println!("Outfits:");
    for o in &OUTFITS {
        let owned = if state.buddy.wardrobe.owns_outfit(o.id) { "owned" } else { "" };
        let premium = if o.is_premium { "★" } else { " " };
        println!(
            "  {premium} {:<16} {} {:<16} {:>4}  {owned}",
            o.id, o.emoji, o.name, o.cost
        );
    }
}

fn print_status(state: &CareState) {
    let buddy = &state.buddy;
    let now = SystemClock.now();
    println!();
    println!(
        "{}  {} the {} ({}, level {})",
        buddy.appearance(),
        buddy.name,
        buddy.species.name(),
        buddy.evolution_stage.name(),
        buddy.level
    );
    println!(
        "Mood: {} {}   {}",
        buddy.mood().emoji(),
        buddy.mood().name(),
        sleep_status(buddy, now).label()
    );
    for kind in VitalKind::ALL {
        let value = buddy.vital(kind);
        let filled = (value / 10) as usize;
        println!(
            "  {:<12} [{}{}] {:>3}",
            kind.name(),
            "█".repeat(filled),
            "░".repeat(10 - filled),
            value
        );
    }
    println!(
        "XP {}/{}   Age {} day(s)   Evolution {:.0}%  ({})",
        buddy.experience,
        xp_for_next_level(buddy.level),
        buddy.age,
        evolution_progress(buddy) * 100.0,
        next_evolution_requirements(buddy.evolution_stage)
    );
    println!(
        "🌱 {} eco-credits   {}",
        state.profile.eco_credits,
        sleep_countdown(now).label()
    );
    if buddy.needs_attention() {
        println!("⚠️  {} needs attention!", buddy.name);
    }
}

#[cfg(feature = "service")]
fn watch(
    state: CareState,
    config: &BuddyConfig,
    save_manager: &SaveManager,
    minutes: u64,
) -> io::Result<CareState> {
    use std::time::Duration;
    use sustainabuddy::service::BuddyService;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_time()
        .build()?;
    runtime.block_on(async {
        let (service, mut events) = BuddyService::new(state, SystemClock, config.tick_interval())
            .with_max_offline_days(config.max_offline_days)
            .with_autosave(save_manager.clone(), config.autosave_interval())
            .with_events();
        let (handle, task) = service.spawn();

        let deadline = tokio::time::sleep(Duration::from_secs(minutes * 60));
        tokio::pin!(deadline);
        loop {
            tokio::select! {
                _ = &mut deadline => break,
                event = events.recv() => match event {
                    Some(event) => println!("{event:?}"),
                    None => break,
                },
            }
        }

        handle.shutdown().await;
        task.await.map_err(io::Error::other)
    })
}

#[cfg(not(feature = "service"))]
fn watch(
    state: CareState,
    _config: &BuddyConfig,
    _save_manager: &SaveManager,
    _minutes: u64,
) -> io::Result<CareState> {
    println!("Live mode needs the `service` feature");
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(Some("40")), Ok(40));
        assert_eq!(
            parse_amount(None),
            Err(CareError::InvalidArgument("missing AMOUNT".to_string()))
        );
        assert_eq!(
            parse_amount(Some("lots")),
            Err(CareError::InvalidArgument("not an amount: lots".to_string()))
        );
    }

    #[test]
    fn test_parse_species_accepts_ids() {
        assert_eq!(parse_species("sea_otter"), Ok(Species::SeaOtter));
        assert!(matches!(parse_species("dragon"), Err(CareError::UnknownItem(_))));
    }
}
