//! Entity model: people, heroes, and the enumerations used to classify them.
//!
//! A `Hero` is-a `Person`: it embeds its person part and hands it out via
//! [`Hero::person`]. Code that holds "some character" gets a [`Character`],
//! the closed set of both kinds, and narrows it with `match` / `if let`.

use serde::Serialize;

/* ============================================================
 * Enumerations
 * ============================================================
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeroType {
    NuclearAccident,
    FailedExperiment,
    Alien,
    Mutant,
    Technology,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeroTypeCategory {
    Accident,
    SuperPowersFromBirth,
    Other,
}

// Declared for completeness; nothing in the tour classifies by employer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VoughtEmployeeType {
    TopManagement,
    TheSeven,
    LocalHero,
    RegularPerson,
}

impl HeroType {
    /// Groups the hero type by where the powers came from.
    pub fn category(self) -> HeroTypeCategory {
        match self {
            HeroType::NuclearAccident | HeroType::FailedExperiment => HeroTypeCategory::Accident,
            HeroType::Alien | HeroType::Mutant => HeroTypeCategory::SuperPowersFromBirth,
            HeroType::Technology | HeroType::Other => HeroTypeCategory::Other,
        }
    }
}

/* ============================================================
 * Records
 * ============================================================
 */

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    first_name: String,
    last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    assistant: Option<Box<Person>>,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age: None,
            assistant: None,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_assistant(mut self, assistant: Person) -> Self {
        self.assistant = Some(Box::new(assistant));
        self
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn assistant(&self) -> Option<&Person> {
        self.assistant.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hero {
    #[serde(flatten)]
    person: Person,
    hero_name: String,
    hero_type: HeroType,
    can_fly: bool,
}

impl Hero {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        hero_name: impl Into<String>,
        hero_type: HeroType,
        can_fly: bool,
    ) -> Self {
        Self {
            person: Person::new(first_name, last_name),
            hero_name: hero_name.into(),
            hero_type,
            can_fly,
        }
    }

    pub fn with_assistant(mut self, assistant: Person) -> Self {
        self.person = self.person.with_assistant(assistant);
        self
    }

    /// The person part of the hero.
    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn hero_name(&self) -> &str {
        &self.hero_name
    }

    pub fn hero_type(&self) -> HeroType {
        self.hero_type
    }

    pub fn can_fly(&self) -> bool {
        self.can_fly
    }

    pub fn assistant(&self) -> Option<&Person> {
        self.person.assistant()
    }
}

/// Not part of the person hierarchy; the tour uses it as a value that is
/// neither a number nor a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JumpingHero {
    pub name: String,
    pub max_jump_distance: u32,
}

/* ============================================================
 * Character: "some person, maybe a hero"
 * ============================================================
 */

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Character {
    Person(Person),
    Hero(Hero),
}

impl Character {
    /// Every character is a person; heroes hand out their person part.
    pub fn as_person(&self) -> &Person {
        match self {
            Character::Person(person) => person,
            Character::Hero(hero) => hero.person(),
        }
    }

    pub fn as_hero(&self) -> Option<&Hero> {
        match self {
            Character::Hero(hero) => Some(hero),
            Character::Person(_) => None,
        }
    }
}

impl From<Person> for Character {
    fn from(person: Person) -> Self {
        Character::Person(person)
    }
}

impl From<Hero> for Character {
    fn from(hero: Hero) -> Self {
        Character::Hero(hero)
    }
}

/* ============================================================
 * Tests
 * ============================================================
 */
