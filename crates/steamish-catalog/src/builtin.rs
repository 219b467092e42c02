//! The built-in game catalog.
//!
//! Defined once at process start and never mutated; deleting a built-in
//! entry records a tombstone in the repository instead.

use crate::{Product, ProductId};

#[allow(clippy::too_many_arguments)]
fn game(
    id: &str,
    name: &str,
    price: f64,
    rating: f64,
    discount: f64,
    category: &str,
    description: &str,
    tags: &[&str],
    featured: bool,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price,
        image: format!("/images/games/{id}.jpg"),
        rating,
        discount,
        category: category.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        featured,
    }
}

/// The 19 built-in games, ids `"1"` through `"19"` in order.
pub fn catalog() -> Vec<Product> {
    vec![
        game(
            "1",
            "Neon Drift Racers",
            39.99,
            4.5,
            10.0,
            "Racing",
            "Arcade street racing through a rain-soaked neon metropolis.",
            &["racing", "arcade", "multiplayer"],
            true,
        ),
        game(
            "2",
            "Starforge Chronicles",
            59.99,
            4.8,
            0.0,
            "RPG",
            "An open-galaxy role-playing epic about forging dying stars.",
            &["rpg", "open-world", "sci-fi"],
            true,
        ),
        game(
            "3",
            "Dungeon Loop",
            14.99,
            4.2,
            25.0,
            "Roguelike",
            "A bite-sized roguelike where every death rewinds the dungeon.",
            &["roguelike", "pixel-art", "indie"],
            false,
        ),
        game(
            "4",
            "Harvest Hollow",
            19.99,
            4.6,
            0.0,
            "Simulation",
            "Cozy farming in a valley that changes with the seasons.",
            &["farming", "cozy", "simulation"],
            true,
        ),
        game(
            "5",
            "Iron Vanguard",
            49.99,
            4.1,
            15.0,
            "Shooter",
            "Squad-based mech combat across shattered orbital colonies.",
            &["shooter", "mechs", "co-op"],
            false,
        ),
        game(
            "6",
            "Whispering Depths",
            24.99,
            4.4,
            0.0,
            "Horror",
            "A submarine survival horror with nothing on the sonar. Probably.",
            &["horror", "survival", "atmospheric"],
            false,
        ),
        game(
            "7",
            "Kingdom of Ash",
            44.99,
            4.7,
            20.0,
            "Strategy",
            "Grand strategy over a continent recovering from a cataclysm.",
            &["strategy", "grand-strategy", "fantasy"],
            true,
        ),
        game(
            "8",
            "Pocket Islands",
            9.99,
            4.0,
            0.0,
            "Puzzle",
            "Relaxing island-building puzzles that fit in a lunch break.",
            &["puzzle", "casual", "relaxing"],
            false,
        ),
        game(
            "9",
            "Blitz League 24",
            29.99,
            3.8,
            30.0,
            "Sports",
            "Fast five-a-side football with full cross-play lobbies.",
            &["sports", "football", "multiplayer"],
            false,
        ),
        game(
            "10",
            "Echoes of the Veil",
            34.99,
            4.9,
            0.0,
            "Adventure",
            "A narrative adventure told from both sides of a broken mirror.",
            &["adventure", "narrative", "mystery"],
            true,
        ),
        game(
            "11",
            "Rust & Rockets",
            19.99,
            4.3,
            10.0,
            "Sandbox",
            "Weld junkyard scrap into rockets and see what survives the launch.",
            &["sandbox", "physics", "crafting"],
            false,
        ),
        game(
            "12",
            "Council of Thieves",
            39.99,
            4.5,
            0.0,
            "RPG",
            "A heist RPG where every guild member remembers your betrayals.",
            &["rpg", "stealth", "choices-matter"],
            false,
        ),
        game(
            "13",
            "Frostline",
            54.99,
            4.2,
            5.0,
            "Survival",
            "Keep the last caravan alive across a frozen trade route.",
            &["survival", "colony-sim", "winter"],
            false,
        ),
        game(
            "14",
            "Skybound Gardens",
            12.99,
            4.6,
            0.0,
            "Puzzle",
            "Grow impossible gardens on floating islands with gravity tricks.",
            &["puzzle", "zen", "indie"],
            false,
        ),
        game(
            "15",
            "Circuit Breakers",
            24.99,
            4.1,
            40.0,
            "Shooter",
            "Top-down cyberpunk shootouts with fully destructible arenas.",
            &["shooter", "cyberpunk", "couch-co-op"],
            false,
        ),
        game(
            "16",
            "The Cartographer's Daughter",
            17.99,
            4.8,
            0.0,
            "Adventure",
            "Chart coastlines your father left unfinished, and find out why.",
            &["adventure", "exploration", "story-rich"],
            true,
        ),
        game(
            "17",
            "Arena Eternal",
            0.0,
            3.9,
            0.0,
            "Fighting",
            "Free-to-play tournament fighter with a rotating roster.",
            &["fighting", "free-to-play", "competitive"],
            false,
        ),
        game(
            "18",
            "Deep Rock Salvage",
            27.99,
            4.4,
            15.0,
            "Simulation",
            "Run a salvage crew working wrecks at the bottom of the trench.",
            &["simulation", "underwater", "management"],
            false,
        ),
        game(
            "19",
            "Moonlit Parade",
            21.99,
            4.7,
            0.0,
            "Rhythm",
            "A rhythm journey through a festival that only exists at night.",
            &["rhythm", "music", "stylish"],
            false,
        ),
    ]
}
