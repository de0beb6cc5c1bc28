//! Fixed skill assignments keyed by full name.

/// Skills given to every character without an entry in [`SKILL_TABLE`].
pub const DEFAULT_SKILLS: &[&str] = &["Future Living", "Space Travel"];

/// Exact full-name matches and their skills, in display order.
pub const SKILL_TABLE: &[(&str, &[&str])] = &[
    (
        "Philip Fry",
        &["Pizza Delivery", "Time Travel Survival", "Video Games"],
    ),
    (
        "Bender Rodriguez",
        &["Bending", "Theft", "Cooking", "Drinking"],
    ),
    ("Turanga Leela", &["Piloting", "Martial Arts", "Leadership"]),
    (
        "Hubert Farnsworth",
        &["Inventing", "Science", "Doomsday Devices"],
    ),
    ("Amy Wong", &["Engineering", "Martian Farming", "Languages"]),
    ("Hermes Conrad", &["Bureaucracy", "Limbo", "Organization"]),
];

/// Look up the skills for a character by exact full name.
pub fn skills_for(full_name: &str) -> Vec<String> {
    let skills = SKILL_TABLE
        .iter()
        .find(|(name, _)| *name == full_name)
        .map(|(_, skills)| *skills)
        .unwrap_or(DEFAULT_SKILLS);

    skills.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_characters_get_their_skills() {
        assert_eq!(
            skills_for("Philip Fry"),
            vec!["Pizza Delivery", "Time Travel Survival", "Video Games"]
        );
        assert_eq!(
            skills_for("Bender Rodriguez"),
            vec!["Bending", "Theft", "Cooking", "Drinking"]
        );
        assert_eq!(
            skills_for("Hermes Conrad"),
            vec!["Bureaucracy", "Limbo", "Organization"]
        );
    }

    #[test]
    fn test_unmapped_name_gets_default() {
        assert_eq!(skills_for("Zapp Brannigan"), vec!["Future Living", "Space Travel"]);
    }

    #[test]
    fn test_match_is_exact() {
        assert_eq!(skills_for("philip fry"), vec!["Future Living", "Space Travel"]);
        assert_eq!(skills_for("Philip"), vec!["Future Living", "Space Travel"]);
    }

    #[test]
    fn test_table_has_six_distinct_entries() {
        assert_eq!(SKILL_TABLE.len(), 6);
        for (i, (name, skills)) in SKILL_TABLE.iter().enumerate() {
            assert!(!skills.is_empty(), "{name} has no skills");
            assert!(
                SKILL_TABLE[i + 1..].iter().all(|(other, _)| other != name),
                "{name} listed twice"
            );
        }
    }
}
