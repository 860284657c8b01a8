//! Store purchases and equipping.

use super::types::{find_accessory, find_outfit, Accessory, AccessorySlot, Outfit, StoreItem, Wardrobe};
use crate::error::{CareError, CareResult};
use crate::profile::spend_credits;
use std::collections::BTreeSet;

/// Check if the wallet covers an item the wardrobe does not own yet
pub fn can_afford<T: StoreItem>(item: &T, owned: &BTreeSet<String>, credits: u32) -> bool {
    !owned.contains(item.id()) && credits >= item.cost()
}

fn buy<T: StoreItem>(item: &T, owned: &mut BTreeSet<String>, credits: &mut u32) -> CareResult<()> {
    if owned.contains(item.id()) {
        return Err(CareError::AlreadyOwned(item.id().to_string()));
    }
    spend_credits(credits, item.cost())?;
    owned.insert(item.id().to_string());
    tracing::info!(item = item.id(), cost = item.cost(), balance = *credits, "Purchased");
    Ok(())
}

pub fn purchase_accessory(
    wardrobe: &mut Wardrobe,
    id: &str,
    credits: &mut u32,
) -> CareResult<&'static Accessory> {
    let accessory = find_accessory(id).ok_or_else(|| CareError::UnknownItem(id.to_string()))?;
    buy(accessory, &mut wardrobe.owned_accessories, credits)?;
    Ok(accessory)
}

pub fn purchase_outfit(
    wardrobe: &mut Wardrobe,
    id: &str,
    credits: &mut u32,
) -> CareResult<&'static Outfit> {
    let outfit = find_outfit(id).ok_or_else(|| CareError::UnknownItem(id.to_string()))?;
    buy(outfit, &mut wardrobe.owned_outfits, credits)?;
    Ok(outfit)
}

/// Equips an owned accessory, replacing whatever was in its slot.
/// Returns the id that was displaced, if any.
pub fn equip_accessory(wardrobe: &mut Wardrobe, id: &str) -> CareResult<Option<String>> {
    let accessory = find_accessory(id).ok_or_else(|| CareError::UnknownItem(id.to_string()))?;
    if !wardrobe.owns_accessory(accessory.id) {
        return Err(CareError::NotOwned(id.to_string()));
    }
    let previous = wardrobe.equipped.get(accessory.slot).map(str::to_string);
    wardrobe
        .equipped
        .set(accessory.slot, Some(accessory.id.to_string()));
    Ok(previous)
}

pub fn unequip_accessory(wardrobe: &mut Wardrobe, slot: AccessorySlot) -> Option<String> {
    let previous = wardrobe.equipped.get(slot).map(str::to_string);
    wardrobe.equipped.set(slot, None);
    previous
}

pub fn equip_outfit(wardrobe: &mut Wardrobe, id: &str) -> CareResult<()> {
    let outfit = find_outfit(id).ok_or_else(|| CareError::UnknownItem(id.to_string()))?;
    if !wardrobe.owns_outfit(outfit.id) {
        return Err(CareError::NotOwned(id.to_string()));
    }
    wardrobe.current_outfit = Some(outfit.id.to_string());
    Ok(())
}

/// Buys an outfit or accessory by id. Returns the item's display name.
pub fn purchase_item(
    wardrobe: &mut Wardrobe,
    id: &str,
    credits: &mut u32,
) -> CareResult<&'static str> {
    if find_outfit(id).is_some() {
        purchase_outfit(wardrobe, id, credits).map(|o| o.name)
    } else {
        purchase_accessory(wardrobe, id, credits).map(|a| a.name)
    }
}

/// Wears an owned outfit or accessory by id.
pub fn equip_item(wardrobe: &mut Wardrobe, id: &str) -> CareResult<()> {
    if find_outfit(id).is_some() {
        equip_outfit(wardrobe, id)
    } else {
        equip_accessory(wardrobe, id).map(|_| ())
    }
}
