use log::LevelFilter;
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};
use simple_logger::SimpleLogger;

use pokesim_battle::{
    pokedex::{
        item::{Item, ItemCategory},
        moves::{Move, MoveCategory},
        pokemon::{Pokemon, StatSet},
        types::PokemonType,
        BasicDex, Dex, DexError,
    },
    prelude::*,
};

/// Attacks with a random move.
struct RandomAi<'d, R: Rng> {
    random: R,
    moves: Vec<&'d Move>,
}

impl<'d, R: Rng> BattleEndpoint<&'d Pokemon, &'d Move, &'d Item> for RandomAi<'d, R> {
    fn select(
        &mut self,
        _: Side,
        _: &BattleParty<&'d Pokemon>,
        _: &BattleParty<&'d Pokemon>,
    ) -> BattleMove<&'d Move, &'d Item> {
        match self.moves.choose(&mut self.random) {
            Some(m) => BattleMove::Move(*m),
            None => BattleMove::Run,
        }
    }
}

/// Weakens the wild pokemon, then throws pokeballs at it.
struct Catcher<'d> {
    attack: &'d Move,
    potion: &'d Item,
    pokeball: &'d Item,
}

impl<'d> BattleEndpoint<&'d Pokemon, &'d Move, &'d Item> for Catcher<'d> {
    fn select(
        &mut self,
        _: Side,
        party: &BattleParty<&'d Pokemon>,
        opponent: &BattleParty<&'d Pokemon>,
    ) -> BattleMove<&'d Move, &'d Item> {
        let own = party.active().map(|p| p.percent_hp()).unwrap_or_default();
        let wild = opponent.active().map(|p| p.percent_hp()).unwrap_or_default();

        if own < 0.25 {
            BattleMove::UseItem(self.potion)
        } else if wild < 0.5 {
            BattleMove::Catch(self.pokeball)
        } else {
            BattleMove::Move(self.attack)
        }
    }
}

fn main() -> Result<(), DexError> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .unwrap();

    let pokedex: BasicDex<Pokemon> = [
        Pokemon {
            id: 7,
            name: "Squirtle".to_owned(),
            primary_type: PokemonType::Water,
            secondary_type: None,
            base: StatSet::new(44, 48, 65, 50, 64, 43),
            base_exp: 63,
        },
        Pokemon {
            id: 16,
            name: "Pidgey".to_owned(),
            primary_type: PokemonType::Normal,
            secondary_type: Some(PokemonType::Flying),
            base: StatSet::new(40, 45, 40, 35, 35, 56),
            base_exp: 50,
        },
    ]
    .into_iter()
    .collect();

    let movedex: BasicDex<Move> = [
        Move {
            id: "tackle".to_owned(),
            name: "Tackle".to_owned(),
            category: MoveCategory::Physical,
            pokemon_type: PokemonType::Normal,
            power: 40,
            priority: 0,
        },
        Move {
            id: "gust".to_owned(),
            name: "Gust".to_owned(),
            category: MoveCategory::Special,
            pokemon_type: PokemonType::Flying,
            power: 40,
            priority: 0,
        },
        Move {
            id: "quick-attack".to_owned(),
            name: "Quick Attack".to_owned(),
            category: MoveCategory::Physical,
            pokemon_type: PokemonType::Normal,
            power: 40,
            priority: 1,
        },
    ]
    .into_iter()
    .collect();

    let itemdex: BasicDex<Item> = [
        Item {
            id: "potion".to_owned(),
            name: "Potion".to_owned(),
            category: ItemCategory::Medicine,
            attributes: 20,
        },
        Item {
            id: "pokeball".to_owned(),
            name: "Poke Ball".to_owned(),
            category: ItemCategory::Pokeball,
            attributes: 100,
        },
    ]
    .into_iter()
    .collect();

    let user = BattleParty::new(vec![BattlePokemon::new(pokedex.get(&7)?, 8)]);
    let wild = BattleParty::new(vec![BattlePokemon::new(pokedex.get(&16)?, 4)]);

    let mut user_endpoint = Catcher {
        attack: movedex.get(&"tackle".to_owned())?,
        potion: itemdex.get(&"potion".to_owned())?,
        pokeball: itemdex.get(&"pokeball".to_owned())?,
    };

    let mut wild_endpoint = RandomAi {
        random: SmallRng::seed_from_u64(436246),
        moves: vec![
            movedex.get(&"gust".to_owned())?,
            movedex.get(&"quick-attack".to_owned())?,
        ],
    };

    let mut random = SmallRng::seed_from_u64(34618);

    let mut battle = Battle::new(BattleData::default(), user, wild);

    match battle.run(&mut random, &mut user_endpoint, &mut wild_endpoint) {
        Ok(report) => {
            println!(
                "Battle ended after {} turns: {:?}",
                report.turns, report.outcome
            );
            for name in report.caught {
                println!("Caught {}!", name);
            }
        }
        Err(err) => println!("Battle failed: {}", err),
    }

    Ok(())
}
