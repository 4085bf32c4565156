use engine::spells::{catalogue, lookup, slugify, Resolution};

#[test]
fn catalogue_carries_the_core_list() {
    assert_eq!(catalogue().len(), 10);
    for slug in [
        "fire-bolt",
        "ray-of-frost",
        "sacred-flame",
        "eldritch-blast",
        "vicious-mockery",
        "magic-missile",
        "burning-hands",
        "cure-wounds",
        "shield",
        "hex",
    ] {
        assert!(lookup(slug).is_some(), "missing {slug}");
    }
}

#[test]
fn cantrips_are_level_zero_and_cost_no_slot() {
    for slug in ["fire-bolt", "ray-of-frost", "sacred-flame", "eldritch-blast", "vicious-mockery"] {
        assert_eq!(lookup(slug).unwrap().level, 0, "{slug} should be a cantrip");
    }
    for slug in ["magic-missile", "burning-hands", "cure-wounds", "shield", "hex"] {
        assert_eq!(lookup(slug).unwrap().level, 1, "{slug} should cost a slot");
    }
}

#[test]
fn resolutions_match_their_mechanics() {
    assert_eq!(lookup("fire-bolt").unwrap().resolution, Resolution::SpellAttack);
    assert_eq!(lookup("sacred-flame").unwrap().resolution, Resolution::Save);
    assert_eq!(lookup("magic-missile").unwrap().resolution, Resolution::Auto);
    assert_eq!(lookup("cure-wounds").unwrap().damage_type, Some("healing"));
    assert!(lookup("shield").unwrap().damage_dice.is_none());
}

#[test]
fn unknown_slugs_miss() {
    assert!(lookup("wish").is_none());
    assert!(lookup("").is_none());
}

#[test]
fn slugify_normalises_display_names() {
    assert_eq!(slugify("Magic Missile"), "magic-missile");
    assert_eq!(slugify("FIRE BOLT"), "fire-bolt");
    assert_eq!(slugify("  ray   of--frost "), "ray-of-frost");
    assert_eq!(slugify("Mage's Hand"), "mage-s-hand");
    assert_eq!(slugify(""), "");
}
