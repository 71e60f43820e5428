//! Motivational quotes shown alongside the analysis panels.

use rand::seq::IndexedRandom;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

pub const QUOTES: &[Quote] = &[
    Quote {
        text: "There is a crack in everything, that's how the light gets in.",
        author: "Leonard Cohen",
    },
    Quote {
        text: "In the midst of winter, I found there was, within me, an invincible summer.",
        author: "Albert Camus",
    },
    Quote {
        text: "It is during our darkest moments that we must focus to see the light.",
        author: "Aristotle Onassis",
    },
    Quote {
        text: "Stars can't shine without darkness.",
        author: "D.H. Sidebottom",
    },
    Quote {
        text: "The wound is the place where the Light enters you.",
        author: "Rumi",
    },
    Quote {
        text: "Turn your face to the sun and the shadows fall behind you.",
        author: "Maori Proverb",
    },
    Quote {
        text: "Hope is being able to see that there is light despite all of the darkness.",
        author: "Desmond Tutu",
    },
];

/// Picks one quote at random.
pub fn random_quote() -> Quote {
    *QUOTES
        .choose(&mut rand::rng())
        .expect("quote list is never empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_quote_comes_from_the_list() {
        for _ in 0..20 {
            let quote = random_quote();
            assert!(QUOTES.contains(&quote));
        }
    }

    #[test]
    fn test_quote_serializes_text_and_author() {
        let json = serde_json::to_value(QUOTES[0]).unwrap();
        assert_eq!(json["author"], "Leonard Cohen");
        assert!(json["text"].as_str().unwrap().contains("crack in everything"));
    }
}
