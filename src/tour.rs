//! The full tour, section by section.

use std::io::Write;

use crate::config::TourConfig;
use crate::console::{write_header_line, Console};
use crate::error::Result;
use crate::model::{Character, Hero, HeroType, JumpingHero, Person};
use crate::patterns::*;

pub fn deadpool() -> Hero {
    Hero::new("Wade", "Wilson", "Deadpool", HeroType::FailedExperiment, false)
}

/// Characters used by the `match` section.
pub fn cast() -> Vec<Character> {
    vec![
        Character::from(deadpool()),
        Character::from(
            Hero::new("John", "Gillman", "Homelander", HeroType::Technology, true)
                .with_assistant(Person::new("Ashley", "Barrett")),
        ),
        Character::from(Person::new("Hughie", "Campbell").with_age(28)),
        Character::from(Person::new("John", "Doe")),
    ]
}

pub fn run_tour<W: Write>(console: &mut Console<W>, config: &TourConfig) -> Result<()> {
    let header = config.header_color()?;

    write_header_line(console, header, "Constant pattern")?;
    constant_pattern(console, &42)?;
    // Has a 42 inside, but is not one
    let jumper = JumpingHero {
        name: "Kangaroo".to_string(),
        max_jump_distance: 42,
    };
    constant_pattern(console, &jumper)?;

    write_header_line(console, header, "Type pattern")?;
    // Typed as "some character", holding a hero
    let o = Character::from(deadpool());
    good_old_type_check(console, &o)?;
    new_type_pattern(console, &o)?;
    negated_type_pattern_discouraged(console, &o)?;
    negated_type_pattern(console, &o)?;

    write_header_line(console, header, "Type pattern and collections")?;
    let people = vec![Character::from(Person::new("John", "Doe")), Character::from(deadpool())];
    type_pattern_and_collections(console, &people)?;

    write_header_line(console, header, "Null check with type pattern")?;
    null_check_with_type_pattern(console, None)?;

    write_header_line(console, header, "Type patterns in `match` statement")?;
    let cast = cast();
    for character in &cast {
        type_pattern_in_switch(console, character)?;
    }

    if config.dump_cast_json {
        write_header_line(console, header, "The cast as JSON")?;
        writeln!(console, "{}", serde_json::to_string_pretty(&cast)?)?;
    }

    console.flush()?;
    Ok(())
}
