use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::builder::GroupMap;

#[derive(Clone, Debug)]
pub enum GroupShape {
    /// Book `i` holds characters `i` and `i + 1`.
    Chain,
    /// `books` books, each casting `cast` characters drawn uniformly.
    Uniform { books: usize, cast: usize },
    /// Uniform books plus `events` crossover books with `event_cast` characters each.
    Crossover {
        books: usize,
        cast: usize,
        events: usize,
        event_cast: usize,
    },
}

pub fn character_name(idx: usize) -> String {
    format!("HERO {idx:06}")
}

pub fn book_name(idx: usize) -> String {
    format!("BOOK {idx:06}")
}

pub fn generate_groups(shape: GroupShape, characters: usize, seed: u64) -> GroupMap {
    assert!(characters > 1, "characters must exceed 1");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut groups = GroupMap::new();
    match shape {
        GroupShape::Chain => {
            for idx in 0..characters - 1 {
                let cast = groups.entry(book_name(idx)).or_default();
                cast.insert(character_name(idx));
                cast.insert(character_name(idx + 1));
            }
        }
        GroupShape::Uniform { books, cast } => {
            fill_random(&mut groups, &mut rng, 0, books, cast, characters);
        }
        GroupShape::Crossover {
            books,
            cast,
            events,
            event_cast,
        } => {
            fill_random(&mut groups, &mut rng, 0, books, cast, characters);
            fill_random(&mut groups, &mut rng, books, events, event_cast, characters);
        }
    }
    groups
}

fn fill_random(
    groups: &mut GroupMap,
    rng: &mut StdRng,
    first_book: usize,
    books: usize,
    cast: usize,
    characters: usize,
) {
    for book in first_book..first_book + books {
        let members = groups.entry(book_name(book)).or_default();
        for _ in 0..cast.min(characters) {
            members.insert(character_name(rng.gen_range(0..characters)));
        }
    }
}
