//! Random code generation.
//!
//! Two sources: OS entropy for normal play, and a seeded ChaCha8 stream for
//! reproducible games (tests, the CLI's `--seed`). Validity is the only
//! correctness requirement; repeated draws may collide.

use crate::code::{Code, CODE_LEN};
use crate::color::{Color, NUM_COLORS};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

/// How secret codes are drawn.
pub enum ChanceMode {
    /// Call-scoped `thread_rng`; no state shared across draws.
    Entropy,
    /// Seeded pseudorandom stream.
    Rng { rng: Box<ChaCha8Rng> },
}

impl ChanceMode {
    pub fn seeded(seed: u64) -> Self {
        ChanceMode::Rng {
            rng: Box::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Draw a code of CODE_LEN pegs, each uniform over the palette.
    ///
    /// Every returned element is a valid `Color` by construction.
    pub fn draw_code(&mut self) -> Code {
        match self {
            ChanceMode::Entropy => {
                let mut rng = rand::thread_rng();
                draw_with(&mut rng)
            }
            ChanceMode::Rng { rng } => draw_with(rng.as_mut()),
        }
    }
}

fn draw_with(rng: &mut impl Rng) -> Code {
    let mut code = [Color::Red; CODE_LEN];
    for peg in &mut code {
        *peg = Color::from_index(rng.gen_range(0..NUM_COLORS));
    }
    code
}
