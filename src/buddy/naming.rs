use super::types::{Buddy, Species};
use crate::core::constants::MAX_NAME_LENGTH;
use crate::error::{CareError, CareResult};
use rand::seq::SliceRandom;
use rand::Rng;

/// Returns the trimmed name if it is usable.
pub fn validate_name(name: &str) -> CareResult<String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(CareError::InvalidName("Name cannot be empty".to_string()));
    }

    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(CareError::InvalidName(format!(
            "Name must be {MAX_NAME_LENGTH} characters or less"
        )));
    }

    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_');

    if !valid_chars {
        return Err(CareError::InvalidName(
            "Name can only contain letters, numbers, spaces, hyphens, and underscores".to_string(),
        ));
    }

    Ok(trimmed.to_string())
}

pub fn rename_buddy(buddy: &mut Buddy, name: &str) -> CareResult<()> {
    let name = validate_name(name)?;
    tracing::info!(old = %buddy.name, new = %name, "Buddy renamed");
    buddy.name = name;
    Ok(())
}

/// Switches species. Premium species need a premium caregiver.
pub fn select_species(buddy: &mut Buddy, species: Species, premium: bool) -> CareResult<()> {
    if species.is_premium() && !premium {
        return Err(CareError::PremiumRequired(species.name().to_string()));
    }
    buddy.species = species;
    Ok(())
}

pub fn suggest_name<R: Rng>(species: Species, rng: &mut R) -> &'static str {
    species
        .suggested_names()
        .choose(rng)
        .copied()
        .unwrap_or(crate::core::constants::DEFAULT_BUDDY_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn buddy() -> Buddy {
        Buddy::new(
            NaiveDate::from_ymd_opt(2026, 3, 14)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_validate_name_valid() {
        assert_eq!(validate_name("Ollie").unwrap(), "Ollie");
        assert_eq!(validate_name("  Sea Pal 2 ").unwrap(), "Sea Pal 2");
        assert!(validate_name("Kelp-Kid").is_ok());
        assert!(validate_name("under_score").is_ok());
    }

    #[test]
    fn test_validate_name_rejects() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("ThisNameIsWayTooLong").is_err());
        assert!(validate_name("Bad!Name").is_err());
        assert!(validate_name("a/b").is_err());
    }

    #[test]
    fn test_rename_keeps_old_name_on_error() {
        let mut buddy = buddy();
        assert!(rename_buddy(&mut buddy, "  ").is_err());
        assert_eq!(buddy.name, "Buddy");

        rename_buddy(&mut buddy, " Pearl ").unwrap();
        assert_eq!(buddy.name, "Pearl");
    }

    #[test]
    fn test_premium_species_gated() {
        let mut buddy = buddy();
        assert_eq!(
            select_species(&mut buddy, Species::Manatee, false),
            Err(CareError::PremiumRequired("Manatee".to_string()))
        );
        assert_eq!(buddy.species, Species::SeaOtter);

        select_species(&mut buddy, Species::Dolphin, false).unwrap();
        assert_eq!(buddy.species, Species::Dolphin);

        select_species(&mut buddy, Species::BelugaWhale, true).unwrap();
        assert_eq!(buddy.species, Species::BelugaWhale);
    }

    #[test]
    fn test_suggest_name_comes_from_species_list() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for species in Species::ALL {
            let name = suggest_name(species, &mut rng);
            assert!(species.suggested_names().contains(&name));
        }
    }
}
