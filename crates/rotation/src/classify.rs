//! Name-based routing for lists and roster cards.
//!
//! The board has no schema; meaning is carried by list and card titles. Both
//! classifiers here are pure functions from a title to a tagged variant, with
//! the rules tried in a fixed priority order. All matching is
//! case-insensitive.

use crate::dates::is_pairing_list_name;
use crate::CompanyName;

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

/// What a list holds, decided from its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `devs`: availability and roster metadata.
    Roster,
    /// `tracks`: one card per track, in track order.
    Tracks,
    /// `pairing...`: one day of historical pairs; the date is in the title.
    Pairing,
    /// Anything else.
    Ignored,
}

/// Classifies a list by its title.
///
/// `devs` and `tracks` must match exactly (ignoring case); any title starting
/// with `pairing` is a pairing list, whether or not its date is readable.
pub fn classify_list(name: &str) -> ListKind {
    let lower = name.to_lowercase();
    if lower == "devs" {
        ListKind::Roster
    } else if lower == "tracks" {
        ListKind::Tracks
    } else if is_pairing_list_name(&lower) {
        ListKind::Pairing
    } else {
        ListKind::Ignored
    }
}

// ---------------------------------------------------------------------------
// Roster cards
// ---------------------------------------------------------------------------

const DEVOPS_PREFIX: &str = "devops:";

/// What a card on the `devs` list means.
///
/// Rules are tried in declaration order. [`RosterCard::Company`] is the
/// catch-all, so a company literally called `devs` or `new`, or one whose name
/// starts with `devops:`, cannot be declared by a company card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterCard {
    /// `devs`: every member is available for pairing.
    Available,
    /// `devops:<name>[,<name>...]`: the named companies do devops.
    DevOps(Vec<CompanyName>),
    /// `new`: every member is a newcomer.
    Newcomers,
    /// Any other title names the company of every member.
    Company(CompanyName),
    /// A card with an empty title carries no information.
    Blank,
}

/// Classifies a card on the `devs` list by its title.
///
/// Company names, whether from a company card or a `devops:` card, are
/// trimmed and keep their original case.
pub fn classify_roster_card(name: &str) -> RosterCard {
    let lower = name.to_lowercase();
    if lower == "devs" {
        return RosterCard::Available;
    }
    if lower.starts_with(DEVOPS_PREFIX) {
        let remainder = name.get(DEVOPS_PREFIX.len()..).unwrap_or_default();
        return RosterCard::DevOps(parse_devops_companies(remainder));
    }
    if lower == "new" {
        return RosterCard::Newcomers;
    }
    match CompanyName::new(name.trim()) {
        Some(company) => RosterCard::Company(company),
        None => RosterCard::Blank,
    }
}

/// Splits the comma separated company list of a `devops:` card.
///
/// Names keep their original case and are trimmed; empty segments are dropped.
fn parse_devops_companies(list: &str) -> Vec<CompanyName> {
    list.split(',')
        .filter_map(|segment| CompanyName::new(segment.trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn companies(names: &[&str]) -> Vec<CompanyName> {
        names.iter().map(|n| CompanyName::new(*n).unwrap()).collect()
    }

    #[test]
    fn list_names_are_case_insensitive() {
        for name in ["DEVS", "Devs", "devs"] {
            assert_eq!(classify_list(name), ListKind::Roster);
        }
        for name in ["TRACKS", "Tracks", "tracks"] {
            assert_eq!(classify_list(name), ListKind::Tracks);
        }
    }

    #[test]
    fn pairing_lists_match_on_prefix() {
        assert_eq!(classify_list("pairing(10/01/2024)"), ListKind::Pairing);
        assert_eq!(classify_list("PAIRING(10/01/2024)"), ListKind::Pairing);
        assert_eq!(classify_list("pairing"), ListKind::Pairing);
        assert_eq!(classify_list("past pairing(10/01/2024)"), ListKind::Ignored);
    }

    #[test]
    fn near_misses_are_ignored() {
        for name in ["devs ", "dev", "my devs", "track", "backlog", ""] {
            assert_eq!(classify_list(name), ListKind::Ignored, "{name:?}");
        }
    }

    #[test]
    fn roster_keywords_are_case_insensitive() {
        assert_eq!(classify_roster_card("DEVS"), RosterCard::Available);
        assert_eq!(classify_roster_card("New"), RosterCard::Newcomers);
    }

    #[test]
    fn devops_card_lists_companies() {
        assert_eq!(
            classify_roster_card("devops:acme,globex"),
            RosterCard::DevOps(companies(&["acme", "globex"]))
        );
        assert_eq!(
            classify_roster_card("DevOps: Acme , Globex,"),
            RosterCard::DevOps(companies(&["Acme", "Globex"]))
        );
    }

    #[test]
    fn empty_devops_card_names_no_companies() {
        assert_eq!(classify_roster_card("devops:"), RosterCard::DevOps(vec![]));
    }

    #[test]
    fn devops_without_colon_is_a_company() {
        assert_eq!(
            classify_roster_card("devops"),
            RosterCard::Company(CompanyName::new("devops").unwrap())
        );
    }

    #[test]
    fn other_titles_name_companies_verbatim() {
        assert_eq!(
            classify_roster_card("Initech"),
            RosterCard::Company(CompanyName::new("Initech").unwrap())
        );
        assert_eq!(classify_roster_card(""), RosterCard::Blank);
    }

    #[test]
    fn company_cards_and_devops_segments_trim_alike() {
        let RosterCard::DevOps(devops) = classify_roster_card("devops: Acme ") else {
            panic!("expected a devops card");
        };
        assert_eq!(classify_roster_card("Acme "), RosterCard::Company(devops[0].clone()));
        assert_eq!(devops, companies(&["Acme"]));
        assert_eq!(classify_roster_card("   "), RosterCard::Blank);
    }
}
