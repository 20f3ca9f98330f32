use crate::dex::Pokedex;
use crate::team::{MoveSlot, Team, TeamMember};
use schema::{MoveData, MoveId, PokemonType, SpeciesData, SpeciesId, TypeChart};

pub const PIKACHU: SpeciesId = 25;
pub const CHARMANDER: SpeciesId = 4;
pub const SQUIRTLE: SpeciesId = 7;
pub const BULBASAUR: SpeciesId = 1;
pub const ONIX: SpeciesId = 95;
pub const GEODUDE: SpeciesId = 74;
pub const GYARADOS: SpeciesId = 130;

pub const THUNDERBOLT: MoveId = 85;
pub const TACKLE: MoveId = 33;
pub const EMBER: MoveId = 52;
pub const WATER_GUN: MoveId = 55;
pub const VINE_WHIP: MoveId = 22;
pub const ROCK_THROW: MoveId = 88;
pub const GROWL: MoveId = 45;

/// A small fixed catalog covering the matchups the battle tests need.
pub fn test_dex() -> Pokedex {
    let mut dex = Pokedex::new(TypeChart::gen1());

    let species = [
        (PIKACHU, "Pikachu", 35, vec![PokemonType::Electric]),
        (CHARMANDER, "Charmander", 39, vec![PokemonType::Fire]),
        (SQUIRTLE, "Squirtle", 44, vec![PokemonType::Water]),
        (
            BULBASAUR,
            "Bulbasaur",
            45,
            vec![PokemonType::Grass, PokemonType::Poison],
        ),
        (
            ONIX,
            "Onix",
            35,
            vec![PokemonType::Rock, PokemonType::Ground],
        ),
        (
            GEODUDE,
            "Geodude",
            40,
            vec![PokemonType::Rock, PokemonType::Ground],
        ),
        (
            GYARADOS,
            "Gyarados",
            95,
            vec![PokemonType::Water, PokemonType::Flying],
        ),
    ];
    for (id, name, base_hp, types) in species {
        dex.add_species(
            id,
            SpeciesData {
                name: name.to_string(),
                base_hp,
                types,
                image_filename: format!("{:03}.png", id),
            },
        );
    }

    let moves = [
        (THUNDERBOLT, "Thunderbolt", PokemonType::Electric, 90, 15),
        (TACKLE, "Tackle", PokemonType::Normal, 35, 35),
        (EMBER, "Ember", PokemonType::Fire, 40, 25),
        (WATER_GUN, "Water Gun", PokemonType::Water, 40, 25),
        (VINE_WHIP, "Vine Whip", PokemonType::Grass, 45, 25),
        (ROCK_THROW, "Rock Throw", PokemonType::Rock, 50, 15),
        (GROWL, "Growl", PokemonType::Normal, 0, 40),
    ];
    for (id, name, move_type, power, max_pp) in moves {
        dex.add_move(
            id,
            MoveData {
                name: name.to_string(),
                move_type,
                power,
                accuracy: 100,
                max_pp,
            },
        );
    }

    dex
}

/// A builder for creating test team members with common defaults.
///
/// # Example
/// ```ignore
/// let member = TestMemberBuilder::new(PIKACHU)
///     .with_moves(vec![THUNDERBOLT, TACKLE])
///     .with_hp(10)
///     .build(&dex);
/// ```
pub struct TestMemberBuilder {
    species: SpeciesId,
    moves: Vec<MoveId>,
    current_hp: Option<u16>,
    pp_overrides: Vec<(usize, u8)>,
}

impl TestMemberBuilder {
    pub fn new(species: SpeciesId) -> Self {
        Self {
            species,
            moves: vec![TACKLE],
            current_hp: None,
            pp_overrides: Vec::new(),
        }
    }

    pub fn with_moves(mut self, moves: Vec<MoveId>) -> Self {
        self.moves = moves;
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn with_pp(mut self, slot: usize, pp: u8) -> Self {
        self.pp_overrides.push((slot, pp));
        self
    }

    pub fn build(self, dex: &Pokedex) -> TeamMember {
        let mut member = TeamMember::new(self.species, self.moves, dex)
            .expect("test catalog should cover the requested member");
        if let Some(hp) = self.current_hp {
            member.current_hp = hp.min(member.max_hp);
        }
        for (slot, pp) in self.pp_overrides {
            if let Some(MoveSlot { pp: current, .. }) = member.moves[slot].as_mut() {
                *current = pp;
            }
        }
        member
    }
}

pub fn player_team(members: Vec<TeamMember>) -> Team {
    Team::player("Challenger", members).expect("test team should be valid")
}

pub fn gym_team(members: Vec<TeamMember>) -> Team {
    Team::gym("Brock", "Boulder Badge", members).expect("test team should be valid")
}
