//! The pattern-matching tour itself.
//!
//! Each routine demonstrates one way of asking "is this value the thing I
//! think it is?" and writes what it found to `out`. A miss is never an
//! error: it takes the fallback branch or does nothing.

use std::any::Any;
use std::io::{self, Write};

use crate::model::{Character, Hero, HeroType, HeroTypeCategory};

/* ============================================================
 * Constant pattern
 * ============================================================
 */

/// Writes one line if `something` is the `i32` 42.
pub fn constant_pattern(out: &mut impl Write, something: &dyn Any) -> io::Result<()> {
    //                            +---- constant pattern
    //                            V
    if let Some(42) = something.downcast_ref::<i32>() {
        writeln!(out, "Something is 42")?;
    }
    Ok(())
}

/* ============================================================
 * Type pattern
 * ============================================================
 */

/// Legacy style: cast first, check the result in a second step.
pub fn good_old_type_check(out: &mut impl Write, o: &Character) -> io::Result<()> {
    let h = o.as_hero();
    if let Some(hero) = h {
        writeln!(out, "o is a Hero and is called {}", hero.hero_name())?;
    }
    Ok(())
}

/// Test and bind in one pattern. `hero` only exists inside the `if` block.
pub fn new_type_pattern(out: &mut impl Write, o: &Character) -> io::Result<()> {
    if let Character::Hero(hero) = o {
        writeln!(out, "o is a Hero and is called {}", hero.hero_name())
    } else {
        writeln!(out, "No hero")
    }
}

/// The miss is handled first and the binding only shows up in the second arm.
/// Reads backwards; prefer [`negated_type_pattern`].
pub fn negated_type_pattern_discouraged(out: &mut impl Write, o: &Character) -> io::Result<()> {
    match o {
        Character::Person(_) => writeln!(out, "No hero"),
        Character::Hero(h2) => writeln!(out, "We have a hero named {}", h2.hero_name()),
    }
}

/// Negated form: only the miss says anything. On a hit `_h3` stays bound for
/// the rest of the body.
pub fn negated_type_pattern(out: &mut impl Write, o: &Character) -> io::Result<()> {
    let Character::Hero(_h3) = o else {
        return writeln!(out, "No hero");
    };
    Ok(())
}

/// Shape of the collection and kind of its second element, checked together.
pub fn type_pattern_and_collections(out: &mut impl Write, people: &[Character]) -> io::Result<()> {
    //   +-- at least two elements   +-- element 1 is a hero
    //   V                           V
    if let [_, Character::Hero(h), ..] = people {
        writeln!(out, "o is a Hero and is called {}", h.hero_name())?;
    }
    Ok(())
}

/// Presence, variant and a guard on the bound value in one `match`, then an
/// explicit check for absence.
pub fn null_check_with_type_pattern(out: &mut impl Write, someone: Option<&Hero>) -> io::Result<()> {
    match someone {
        Some(h) if h.hero_type() == HeroType::FailedExperiment => {
            writeln!(out, "Someone is the {} hero and not null", h.hero_name())?
        }
        _ => writeln!(out, "Someone is null")?,
    }

    if someone.is_none() {
        writeln!(out, "Someone is null")?;
    }
    Ok(())
}

/* ============================================================
 * Type patterns in `match`
 * ============================================================
 */

fn powers_origin(category: HeroTypeCategory) -> &'static str {
    match category {
        HeroTypeCategory::Accident => "an accident",
        HeroTypeCategory::SuperPowersFromBirth => "birth",
        HeroTypeCategory::Other => "somewhere else",
    }
}

/// Arms are tried top to bottom; guards refine a variant that already matched.
pub fn type_pattern_in_switch(out: &mut impl Write, o: &Character) -> io::Result<()> {
    match o {
        Character::Hero(hero) if hero.can_fly() => {
            writeln!(out, "{} is a flying hero", hero.hero_name())
        }
        Character::Hero(hero) => writeln!(
            out,
            "{} is a hero whose powers come from {}",
            hero.hero_name(),
            powers_origin(hero.hero_type().category())
        ),
        Character::Person(person) => match (person.assistant(), person.age()) {
            (Some(assistant), _) => writeln!(
                out,
                "{} {} is assisted by {} {}",
                person.first_name(),
                person.last_name(),
                assistant.first_name(),
                assistant.last_name()
            ),
            (None, Some(age)) => writeln!(
                out,
                "{} {} is {} years old",
                person.first_name(),
                person.last_name(),
                age
            ),
            (None, None) => writeln!(
                out,
                "{} {} is a regular person",
                person.first_name(),
                person.last_name()
            ),
        },
    }
}

/* ============================================================
 * Tests
 * ============================================================
 */
