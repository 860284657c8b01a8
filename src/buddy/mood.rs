use super::vitals::Vitals;
use crate::core::constants::{MOOD_CONTENT_MIN, MOOD_ECSTATIC_MIN, MOOD_HAPPY_MIN, MOOD_SAD_MIN};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Ecstatic,
    Happy,
    Content,
    Sad,
    Sick,
}

impl Mood {
    pub fn name(&self) -> &'static str {
        match self {
            Mood::Ecstatic => "Ecstatic",
            Mood::Happy => "Happy",
            Mood::Content => "Content",
            Mood::Sad => "Sad",
            Mood::Sick => "Sick",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Ecstatic => "🤩",
            Mood::Happy => "😊",
            Mood::Content => "😌",
            Mood::Sad => "😢",
            Mood::Sick => "🤒",
        }
    }

    /// Moods during which the presentation layer floats hearts.
    pub fn is_cheerful(&self) -> bool {
        matches!(self, Mood::Ecstatic | Mood::Happy)
    }
}

/// Mood is a pure function of the truncated five-vital average.
pub fn derive_mood(vitals: &Vitals) -> Mood {
    match vitals.wellbeing() {
        avg if avg >= MOOD_ECSTATIC_MIN => Mood::Ecstatic,
        avg if avg >= MOOD_HAPPY_MIN => Mood::Happy,
        avg if avg >= MOOD_CONTENT_MIN => Mood::Content,
        avg if avg >= MOOD_SAD_MIN => Mood::Sad,
        _ => Mood::Sick,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(value: i32) -> Vitals {
        Vitals::new(value, value, value, value, value)
    }

    #[test]
    fn test_mood_bands() {
        assert_eq!(derive_mood(&uniform(100)), Mood::Ecstatic);
        assert_eq!(derive_mood(&uniform(80)), Mood::Ecstatic);
        assert_eq!(derive_mood(&uniform(79)), Mood::Happy);
        assert_eq!(derive_mood(&uniform(60)), Mood::Happy);
        assert_eq!(derive_mood(&uniform(59)), Mood::Content);
        assert_eq!(derive_mood(&uniform(40)), Mood::Content);
        assert_eq!(derive_mood(&uniform(39)), Mood::Sad);
        assert_eq!(derive_mood(&uniform(20)), Mood::Sad);
        assert_eq!(derive_mood(&uniform(19)), Mood::Sick);
        assert_eq!(derive_mood(&uniform(0)), Mood::Sick);
    }

    #[test]
    fn test_mood_uses_truncating_average() {
        // Sum 399 -> average 79 (not 79.8 rounded to 80)
        let v = Vitals::new(80, 80, 80, 80, 79);
        assert_eq!(derive_mood(&v), Mood::Happy);
    }

    #[test]
    fn test_default_vitals_are_ecstatic() {
        assert_eq!(derive_mood(&Vitals::default()), Mood::Ecstatic);
    }

    #[test]
    fn test_cheerful_moods() {
        assert!(Mood::Ecstatic.is_cheerful());
        assert!(Mood::Happy.is_cheerful());
        assert!(!Mood::Content.is_cheerful());
        assert!(!Mood::Sad.is_cheerful());
        assert!(!Mood::Sick.is_cheerful());
    }
}
