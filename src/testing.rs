//! Shared dex entries for unit tests.

use crate::pokedex::{
    item::{Item, ItemCategory},
    moves::{Move, MoveCategory, Power, Priority},
    pokemon::{Pokemon, StatSet},
    types::PokemonType,
};

pub fn charmander() -> Pokemon {
    Pokemon {
        id: 4,
        name: "Charmander".to_owned(),
        primary_type: PokemonType::Fire,
        secondary_type: None,
        base: StatSet::new(39, 52, 43, 60, 50, 65),
        base_exp: 62,
    }
}

pub fn squirtle() -> Pokemon {
    Pokemon {
        id: 7,
        name: "Squirtle".to_owned(),
        primary_type: PokemonType::Water,
        secondary_type: None,
        base: StatSet::new(44, 48, 65, 50, 64, 43),
        base_exp: 63,
    }
}

pub fn pidgey() -> Pokemon {
    Pokemon {
        id: 16,
        name: "Pidgey".to_owned(),
        primary_type: PokemonType::Normal,
        secondary_type: Some(PokemonType::Flying),
        base: StatSet::new(40, 45, 40, 35, 35, 56),
        base_exp: 50,
    }
}

pub fn geodude() -> Pokemon {
    Pokemon {
        id: 74,
        name: "Geodude".to_owned(),
        primary_type: PokemonType::Rock,
        secondary_type: Some(PokemonType::Ground),
        base: StatSet::new(40, 80, 100, 30, 30, 20),
        base_exp: 60,
    }
}

pub fn gastly() -> Pokemon {
    Pokemon {
        id: 92,
        name: "Gastly".to_owned(),
        primary_type: PokemonType::Ghost,
        secondary_type: Some(PokemonType::Poison),
        base: StatSet::new(30, 35, 30, 100, 35, 80),
        base_exp: 62,
    }
}

pub fn attack(
    name: &str,
    category: MoveCategory,
    pokemon_type: PokemonType,
    power: Power,
    priority: Priority,
) -> Move {
    Move {
        id: name.to_lowercase().replace(' ', "-"),
        name: name.to_owned(),
        category,
        pokemon_type,
        power,
        priority,
    }
}

pub fn tackle() -> Move {
    attack("Tackle", MoveCategory::Physical, PokemonType::Normal, 40, 0)
}

pub fn quick_attack() -> Move {
    attack("Quick Attack", MoveCategory::Physical, PokemonType::Normal, 40, 1)
}

pub fn ember() -> Move {
    attack("Ember", MoveCategory::Special, PokemonType::Fire, 40, 0)
}

pub fn water_gun() -> Move {
    attack("Water Gun", MoveCategory::Special, PokemonType::Water, 40, 0)
}

pub fn growl() -> Move {
    attack("Growl", MoveCategory::Status, PokemonType::Normal, 0, 0)
}

pub fn potion() -> Item {
    Item {
        id: "potion".to_owned(),
        name: "Potion".to_owned(),
        category: ItemCategory::Medicine,
        attributes: 20,
    }
}

pub fn pokeball() -> Item {
    Item {
        id: "pokeball".to_owned(),
        name: "Poke Ball".to_owned(),
        category: ItemCategory::Pokeball,
        attributes: 100,
    }
}
