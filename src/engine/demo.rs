//! A small built-in engine.
//!
//! The console core treats the engine as an opaque external capability; this
//! one exists so the binary runs standalone and the one-shot CLI mode has
//! something deterministic to talk to. Hosts embedding the console supply
//! their own [`Engine`] instead.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::autocomplete::Suggestion;
use crate::error::EngineError;

use super::Engine;

const COMMANDS: &[(&str, &str)] = &[
    ("help", "list available commands"),
    ("about", "what this console is"),
    ("roll [dice]", "roll dice, e.g. roll 2d6"),
    ("greet [name]", "say hello"),
];

pub struct DemoEngine {
    matcher: SkimMatcherV2,
    rng_state: u64,
}

impl Default for DemoEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoEngine {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
            rng_state: 0x9E37_79B9_7F4A_7C15,
        }
    }

    fn next_roll(&mut self, sides: u32) -> u32 {
        self.rng_state = self
            .rng_state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.rng_state >> 33) % u64::from(sides)) as u32 + 1
    }

    fn roll(&mut self, spec: &str) -> String {
        let Some((count, sides)) = parse_dice(spec) else {
            return format!("! Cannot roll `{spec}`; try something like `roll 2d6`.");
        };
        let rolls: Vec<u32> = (0..count).map(|_| self.next_roll(sides)).collect();
        let total: u32 = rolls.iter().sum();
        let parts: Vec<String> = rolls.iter().map(u32::to_string).collect();
        format!("Rolled {spec}: **{total}** ({})", parts.join(" + "))
    }
}

/// Parse a dice spec like `2d6`. Bounded so a typo cannot allocate wildly.
fn parse_dice(spec: &str) -> Option<(u32, u32)> {
    let (count, sides) = spec.trim().split_once(['d', 'D'])?;
    let count: u32 = if count.is_empty() { 1 } else { count.parse().ok()? };
    let sides: u32 = sides.parse().ok()?;
    (count >= 1 && count <= 100 && sides >= 2 && sides <= 1000).then_some((count, sides))
}

impl Engine for DemoEngine {
    fn initialize(&mut self) -> Result<String, EngineError> {
        Ok("# conq\n\nWelcome. Type `help` to see what is available, or try `roll [dice]`.\n\nProject page: [conq](https://example.com/conq)".to_string())
    }

    fn autocomplete(&mut self, query: &str) -> Result<Vec<Suggestion>, EngineError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(COMMANDS
                .iter()
                .map(|(usage, summary)| Suggestion::new(*usage, *summary))
                .collect());
        }

        let mut scored: Vec<(i64, Suggestion)> = COMMANDS
            .iter()
            .filter_map(|(usage, summary)| {
                self.matcher
                    .fuzzy_match(usage, query)
                    .map(|score| (score, Suggestion::new(*usage, *summary)))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(scored.into_iter().map(|(_, s)| s).collect())
    }

    fn command(&mut self, input: &str) -> Result<String, EngineError> {
        let input = input.trim();
        let (head, rest) = input.split_once(' ').unwrap_or((input, ""));

        let reply = match head {
            "help" => {
                let mut lines = vec!["# Commands".to_string(), String::new()];
                lines.extend(
                    COMMANDS
                        .iter()
                        .map(|(usage, summary)| format!("- `{usage}` — {summary}")),
                );
                lines.join("\n")
            }
            "about" => "This is a demo console. Its commands are stand-ins; \
                        a real host plugs its own engine in. See \
                        [the docs](https://example.com/conq) or ~~the changelog~~ \
                        (not written yet)."
                .to_string(),
            "roll" => self.roll(rest),
            "greet" => {
                let name = if rest.is_empty() { "stranger" } else { rest };
                format!("Hello, **{name}**!")
            }
            _ => format!("! Unknown command: `{input}`. Type `help` for a list."),
        };
        Ok(reply)
    }
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod demo_tests;
