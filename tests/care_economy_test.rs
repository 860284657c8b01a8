//! Integration tests for care actions and the eco-credit economy.
//!
//! Every paid action either spends exactly its price and applies its effects,
//! or is rejected and leaves both the buddy and the wallet untouched.

use chrono::{NaiveDate, NaiveDateTime};
use sustainabuddy::buddy::care::{self, CareAction};
use sustainabuddy::customization::logic::{
    equip_accessory, equip_outfit, purchase_accessory, purchase_outfit,
};
use sustainabuddy::customization::types::AccessorySlot;
use sustainabuddy::{Buddy, CareError, CaregiverProfile, VitalKind};

fn morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 4, 2)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

#[test]
fn test_feed_then_feed_again_when_broke() {
    let now = morning();
    let mut buddy = Buddy::new(now);
    let mut credits = 10;
    assert_eq!(buddy.vitals().hunger(), 70);

    let soup = care::find_food("plankton_soup").unwrap();
    let outcome = care::feed(&mut buddy, &mut credits, soup, now).unwrap();

    assert_eq!(outcome.action, CareAction::Feed);
    assert_eq!(outcome.credits_spent, 10);
    assert_eq!(credits, 0);
    assert_eq!(buddy.vitals().hunger(), 100);
    assert_eq!(buddy.vitals().happiness(), 90);
    assert_eq!(buddy.vitals().health(), 91);
    assert_eq!(buddy.last_fed, now);

    let before = buddy.clone();
    let err = care::feed(&mut buddy, &mut credits, soup, now).unwrap_err();
    assert_eq!(
        err,
        CareError::InsufficientFunds {
            cost: 10,
            balance: 0
        }
    );
    assert_eq!(buddy, before);
    assert_eq!(credits, 0);
}

#[test]
fn test_rejected_actions_change_nothing() {
    let now = morning();
    let mut buddy = Buddy::new(now);
    let mut credits = 14;
    let before = buddy.clone();

    assert!(care::play(&mut buddy, &mut credits, now).is_err());
    assert!(care::clean(&mut buddy, &mut credits, now).is_err());
    assert!(care::medical_care(&mut buddy, &mut credits).is_err());

    assert_eq!(buddy, before);
    assert_eq!(credits, 14);
}

#[test]
fn test_a_day_of_care_spends_the_starting_balance() {
    let now = morning();
    let mut buddy = Buddy::new(now);
    let mut profile = CaregiverProfile::new();
    assert_eq!(profile.eco_credits, 100);

    let credits = &mut profile.eco_credits;
    care::play(&mut buddy, credits, now).unwrap();
    care::clean(&mut buddy, credits, now).unwrap();
    care::medical_care(&mut buddy, credits).unwrap();
    care::rest(&mut buddy, credits, now).unwrap();
    let berries = care::find_food("sea_berries").unwrap();
    care::feed(&mut buddy, credits, berries, now).unwrap();

    // 15 + 20 + 25 + 5 + 5
    assert_eq!(profile.eco_credits, 30);
    assert_eq!(buddy.vital(VitalKind::Health), 100);
    assert_eq!(buddy.experience, 10 + 8 + 12 + 3);
}

#[test]
fn test_care_xp_can_level_up() {
    let now = morning();
    let mut buddy = Buddy::new(now);
    buddy.experience = 95;
    let mut credits = 100;

    let outcome = care::play(&mut buddy, &mut credits, now).unwrap();
    assert_eq!(outcome.levelups, 1);
    assert_eq!(buddy.level, 2);
    assert_eq!(buddy.experience, 5);
}

#[test]
fn test_earned_credits_buy_and_dress() {
    let now = morning();
    let mut buddy = Buddy::new(now);
    let mut profile = CaregiverProfile::new();
    profile.earn(150);
    assert_eq!(profile.eco_credits, 250);
    assert_eq!(profile.total_credits_earned, 150);

    let hat = purchase_accessory(&mut buddy.wardrobe, "sailor_hat", &mut profile.eco_credits)
        .unwrap();
    assert_eq!(hat.cost, 50);
    assert_eq!(profile.eco_credits, 200);

    // Owning it already is refused before any charge
    assert_eq!(
        purchase_accessory(&mut buddy.wardrobe, "sailor_hat", &mut profile.eco_credits),
        Err(CareError::AlreadyOwned("sailor_hat".to_string()))
    );
    assert_eq!(profile.eco_credits, 200);

    purchase_outfit(&mut buddy.wardrobe, "beach_wear", &mut profile.eco_credits).unwrap();
    assert_eq!(profile.eco_credits, 120);

    assert_eq!(
        purchase_outfit(&mut buddy.wardrobe, "superhero", &mut profile.eco_credits),
        Err(CareError::InsufficientFunds {
            cost: 250,
            balance: 120
        })
    );
    assert!(!buddy.wardrobe.owns_outfit("superhero"));

    assert_eq!(equip_accessory(&mut buddy.wardrobe, "sailor_hat"), Ok(None));
    assert_eq!(
        equip_accessory(&mut buddy.wardrobe, "party_hat"),
        Err(CareError::NotOwned("party_hat".to_string()))
    );
    equip_outfit(&mut buddy.wardrobe, "beach_wear").unwrap();

    assert_eq!(
        buddy.wardrobe.equipped.get(AccessorySlot::Hat),
        Some("sailor_hat")
    );
    let appearance = buddy.appearance();
    assert!(appearance.contains("🧢"));
    assert!(appearance.contains("🏖️"));
}
