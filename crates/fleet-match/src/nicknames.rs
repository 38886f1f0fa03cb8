//! Static nickname/variant table for common first names.
//!
//! Consulted bidirectionally: "Mike" resolves to "Michael" just as
//! "Michael" resolves to "Mike". The table is configuration data; keep
//! entries lowercase and alphabetical.

use std::collections::BTreeSet;

/// Formal first name -> common nickname forms, all lowercase.
const NICKNAMES: &[(&str, &[&str])] = &[
    ("abigail", &["abby"]),
    ("albert", &["al", "bert"]),
    ("alexander", &["alex", "sandy", "xander"]),
    ("alexandra", &["alex", "lexi"]),
    ("amanda", &["mandy"]),
    ("andrew", &["andy", "drew"]),
    ("angela", &["angie"]),
    ("anthony", &["tony"]),
    ("arthur", &["art", "artie"]),
    ("barbara", &["barb"]),
    ("benjamin", &["ben", "benny"]),
    ("catherine", &["cathy", "cate"]),
    ("charles", &["charlie", "chuck"]),
    ("christina", &["tina"]),
    ("christine", &["chris", "christy"]),
    ("christopher", &["chris", "kit"]),
    ("cynthia", &["cindy"]),
    ("daniel", &["dan", "danny"]),
    ("danielle", &["dani"]),
    ("deborah", &["deb", "debbie"]),
    ("donald", &["don", "donny"]),
    ("dorothy", &["dot", "dottie"]),
    ("douglas", &["doug"]),
    ("edward", &["ed", "eddie", "ted"]),
    ("elizabeth", &["liz", "beth", "betty", "eliza"]),
    ("eugene", &["gene"]),
    ("frances", &["fran"]),
    ("francis", &["frank"]),
    ("frederick", &["fred", "freddie"]),
    ("gabrielle", &["gabby"]),
    ("gerald", &["jerry"]),
    ("gregory", &["greg"]),
    ("harold", &["harry", "hal"]),
    ("henry", &["hank", "harry"]),
    ("herbert", &["herb"]),
    ("isabella", &["bella", "izzy"]),
    ("jacob", &["jake"]),
    ("james", &["jim", "jimmy", "jamie"]),
    ("jeffrey", &["jeff"]),
    ("jennifer", &["jen", "jenny"]),
    ("jessica", &["jess", "jessie"]),
    ("john", &["jack", "johnny"]),
    ("jonathan", &["jon"]),
    ("joseph", &["joe", "joey"]),
    ("josephine", &["jo", "josie"]),
    ("joshua", &["josh"]),
    ("katherine", &["kate", "katie", "kathy"]),
    ("kenneth", &["ken", "kenny"]),
    ("kimberly", &["kim"]),
    ("lawrence", &["larry"]),
    ("leonard", &["leo", "lenny"]),
    ("louis", &["lou"]),
    ("margaret", &["maggie", "meg", "peggy"]),
    ("martin", &["marty"]),
    ("matthew", &["matt"]),
    ("michael", &["mike", "mick", "mickey"]),
    ("natalie", &["nat"]),
    ("nicholas", &["nick"]),
    ("nicole", &["nikki"]),
    ("oliver", &["ollie"]),
    ("pamela", &["pam"]),
    ("patricia", &["pat", "patty", "trish"]),
    ("patrick", &["pat", "paddy"]),
    ("peter", &["pete"]),
    ("philip", &["phil"]),
    ("raymond", &["ray"]),
    ("rebecca", &["becky"]),
    ("richard", &["rick", "richie", "dick"]),
    ("robert", &["rob", "bob", "bobby"]),
    ("ronald", &["ron", "ronnie"]),
    ("russell", &["russ"]),
    ("samantha", &["sam"]),
    ("samuel", &["sam", "sammy"]),
    ("sandra", &["sandy"]),
    ("stanley", &["stan"]),
    ("stephanie", &["steph"]),
    ("stephen", &["steve"]),
    ("steven", &["steve", "stevie"]),
    ("stuart", &["stu"]),
    ("susan", &["sue", "susie"]),
    ("theodore", &["ted", "theo"]),
    ("thomas", &["tom", "tommy"]),
    ("timothy", &["tim"]),
    ("victoria", &["vicky", "tori"]),
    ("vincent", &["vince", "vinny"]),
    ("virginia", &["ginny"]),
    ("walter", &["walt", "wally"]),
    ("william", &["will", "bill", "billy", "liam"]),
    ("zachary", &["zach", "zack"]),
];

/// Nickname forms for a formal first name (empty when none are known).
pub fn nicknames_for(formal: &str) -> &'static [&'static str] {
    let needle = formal.to_ascii_lowercase();
    NICKNAMES
        .iter()
        .find(|(name, _)| *name == needle)
        .map_or(&[], |(_, nicks)| nicks)
}

/// Formal names a nickname may stand for ("sam" -> samuel, samantha).
pub fn formal_names_for(nickname: &str) -> Vec<&'static str> {
    let needle = nickname.to_ascii_lowercase();
    NICKNAMES
        .iter()
        .filter(|(_, nicks)| nicks.contains(&needle.as_str()))
        .map(|(name, _)| *name)
        .collect()
}

/// First-name forms considered interchangeable with `first`, lowercase:
/// the name itself, its nicknames, and any formal names it abbreviates.
pub(crate) fn first_name_variants(first: &str) -> BTreeSet<String> {
    let mut variants = BTreeSet::new();
    let lower = first.trim().to_ascii_lowercase();
    if lower.is_empty() {
        return variants;
    }
    variants.insert(lower.clone());
    for nick in nicknames_for(&lower) {
        variants.insert((*nick).to_string());
    }
    for formal in formal_names_for(&lower) {
        variants.insert(formal.to_string());
    }
    variants
}

/// All spellings a (first, last) pair might plausibly appear under,
/// lowercase: the literal pair, nickname and formal-name combinations,
/// each component alone, and initial-based forms ("j smith", "j. smith").
pub fn generate_name_variations(first: &str, last: &str) -> BTreeSet<String> {
    let first = first.trim().to_ascii_lowercase();
    let last = last.trim().to_ascii_lowercase();
    let mut variations = BTreeSet::new();

    if first.is_empty() && last.is_empty() {
        return variations;
    }

    if !first.is_empty() {
        variations.insert(first.clone());
    }
    if !last.is_empty() {
        variations.insert(last.clone());
    }

    if !first.is_empty() && !last.is_empty() {
        variations.insert(format!("{first} {last}"));
        for alternate in first_name_variants(&first) {
            variations.insert(format!("{alternate} {last}"));
        }
        if let Some(initial) = first.chars().next() {
            variations.insert(format!("{initial} {last}"));
            variations.insert(format!("{initial}. {last}"));
        }
    }

    variations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_bidirectional() {
        assert!(nicknames_for("Michael").contains(&"mike"));
        assert!(formal_names_for("mike").contains(&"michael"));
    }

    #[test]
    fn ambiguous_nicknames_resolve_to_every_formal() {
        let formals = formal_names_for("sam");
        assert!(formals.contains(&"samuel"));
        assert!(formals.contains(&"samantha"));
    }

    #[test]
    fn variations_cover_nicknames_and_initials() {
        let variations = generate_name_variations("Michael", "Smith");
        assert!(variations.contains("michael smith"));
        assert!(variations.contains("mike smith"));
        assert!(variations.contains("m smith"));
        assert!(variations.contains("m. smith"));
        assert!(variations.contains("michael"));
        assert!(variations.contains("smith"));
    }

    #[test]
    fn nickname_input_generates_formal_combinations() {
        let variations = generate_name_variations("Mike", "Smith");
        assert!(variations.contains("michael smith"));
    }

    #[test]
    fn empty_components_yield_no_combinations() {
        assert!(generate_name_variations("", "").is_empty());
        let first_only = generate_name_variations("Jane", "");
        assert_eq!(first_only.len(), 1);
        assert!(first_only.contains("jane"));
    }
}
