//! The interactive chat: a main menu dispatching to one sub-loop per mode.
//!
//! Every sub-loop is a plain `loop`. Asking for a new time budget or a new
//! keyword reassigns the current value and restarts the loop body.

use std::io::{BufRead, Write};

use log::debug;
use rand::Rng;

use crate::config::ChatbotConfig;
use crate::error::{ChatbotError, Result};
use crate::selectors::{
    pick, HighRatedSelector, PreferenceMatcher, RandomSelector, Selector, TimeBoundSelector,
};
use crate::store::RecipeStore;

mod commands;
mod console;
pub mod render;

pub use self::commands::{MenuChoice, Mode, Reply};
pub use self::console::Console;

use self::commands::{parse_minutes, parse_query, parse_rating};
use self::render::{render_high_rated, render_preference, render_quick, render_random, SEPARATOR};

const MENU_PROMPT: &str = "Hello! I'm your Recipe Chatbot:) \n
I can help you decide what to cook!\n
Do you have any idea about what to eat yet?\n
I can provide you with some ideas in the following ways!\n
1. The maximum amount of time willing to spend for meal preparation (answer '1')\n
2. Random suggestions (answer '2')\n
3. One random suggestion of a high rating recipe (answer '3')\n
4. Based on dish name/types (answer '4')\n
Or 'exit' to STOP! ";

const MINUTES_PROMPT: &str =
    "\nHow many minutes do you have for meal preparation? (integer only): ";
const THRESHOLD_PROMPT: &str = "\nEnter a lower minimum rating (0-5), or 'quit': ";
const FIRST_QUERY_PROMPT: &str = "\nWhat do you have in mind? Please specify a meal name or type: ";
const NEXT_QUERY_PROMPT: &str = "\nPlease specify another meal name or type: ";
const RANDOM_PROMPT: &str = "\nWould you like another random suggestion? (yes/quit): ";
const TIME_PROMPT: &str =
    "\nWould you like another suggestion with the same time limit? (yes/quit/different): ";
const PREFERENCE_PROMPT: &str =
    "\nWould you like another suggestion, search with another keyword, or quit?\n(yes/another/quit): ";

const ANOTHER_ONE: &str = "\nLet's find another delicious recipe for you!";
const THANKS: &str = "\nThanks and have a great meal!";

/// How a mode's sub-loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Finished,
    EndOfInput,
}

/// One chat with the user over a borrowed, read-only store.
pub struct Session<'s, R, W, G> {
    store: &'s RecipeStore,
    config: ChatbotConfig,
    console: Console<R, W>,
    rng: G,
}

impl<'s, R: BufRead, W: Write, G: Rng> Session<'s, R, W, G> {
    pub fn new(store: &'s RecipeStore, config: ChatbotConfig, input: R, output: W, rng: G) -> Self {
        Self {
            store,
            config,
            console: Console::new(input, output),
            rng,
        }
    }

    /// Runs the main menu until the user exits, input ends, or (unless
    /// `return_to_menu` is set) the first mode finishes.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(input) = self.console.ask(MENU_PROMPT)? else {
                return Ok(());
            };
            self.console.say(SEPARATOR)?;

            let mode = match MenuChoice::parse(&input) {
                Some(MenuChoice::Mode(mode)) => mode,
                Some(MenuChoice::Exit) => {
                    self.console.say("Goodbye!")?;
                    return Ok(());
                }
                None => {
                    self.console.say("\nPlease enter a valid input!")?;
                    continue;
                }
            };

            debug!("Entering {:?} mode", mode);
            let flow = match mode {
                Mode::Time => self.time_mode()?,
                Mode::Random => self.random_mode()?,
                Mode::HighRated => self.high_rated_mode()?,
                Mode::Preference => self.preference_mode()?,
            };

            match flow {
                Flow::EndOfInput => return Ok(()),
                Flow::Finished if self.config.return_to_menu => {
                    self.console.say(&format!("\n{}", SEPARATOR))?;
                }
                Flow::Finished => {
                    self.console.say("\nBye!!!")?;
                    return Ok(());
                }
            }
        }
    }

    fn time_mode(&mut self) -> Result<Flow> {
        let Some(mut budget) = self.ask_minutes()? else {
            return Ok(Flow::EndOfInput);
        };

        'budget: loop {
            let buckets = TimeBoundSelector::new(budget).buckets(self.store);

            loop {
                let Some(recipe) = buckets.pick(&mut self.rng) else {
                    self.console
                        .say("Your time is not valid! Consider increase your time limit!")?;
                    match self.ask_minutes()? {
                        Some(minutes) => {
                            budget = minutes;
                            continue 'budget;
                        }
                        None => return Ok(Flow::EndOfInput),
                    }
                };
                self.console.say(&format!("\n{}", render_quick(recipe)))?;

                match self.ask_reply(TIME_PROMPT, &[Reply::Yes, Reply::Quit, Reply::Different])? {
                    None => return Ok(Flow::EndOfInput),
                    Some(Reply::Yes) => self.console.say(ANOTHER_ONE)?,
                    Some(Reply::Different) => match self.ask_minutes()? {
                        Some(minutes) => {
                            budget = minutes;
                            continue 'budget;
                        }
                        None => return Ok(Flow::EndOfInput),
                    },
                    Some(Reply::Quit) => {
                        self.console.say(THANKS)?;
                        return Ok(Flow::Finished);
                    }
                    Some(_) => {
                        self.console.say("\nPlease enter a valid input")?;
                        return Ok(Flow::Finished);
                    }
                }
            }
        }
    }

    fn random_mode(&mut self) -> Result<Flow> {
        loop {
            match RandomSelector.select(self.store, &mut self.rng) {
                Ok(recipe) => self.console.say(&format!("\n{}", render_random(recipe)))?,
                Err(ChatbotError::EmptyResult(reason)) => {
                    self.console.say(&format!("\nSorry, {}.", reason))?;
                    return Ok(Flow::Finished);
                }
                Err(e) => return Err(e),
            }

            match self.ask_reply(RANDOM_PROMPT, &[Reply::Yes, Reply::Quit])? {
                None => return Ok(Flow::EndOfInput),
                Some(Reply::Yes) => self.console.say(ANOTHER_ONE)?,
                Some(Reply::Quit) => {
                    self.console.say(THANKS)?;
                    return Ok(Flow::Finished);
                }
                Some(_) => {
                    self.console.say("\nPlease enter a valid input")?;
                    return Ok(Flow::Finished);
                }
            }
        }
    }

    fn high_rated_mode(&mut self) -> Result<Flow> {
        let mut selector = HighRatedSelector::new(self.config.high_rating_threshold);

        loop {
            match selector.select(self.store, &mut self.rng) {
                Ok(recipe) => {
                    self.console.say(&render_high_rated(recipe))?;
                    return Ok(Flow::Finished);
                }
                Err(ChatbotError::EmptyResult(reason)) => {
                    self.console.say(&format!("\nSorry, {}.", reason))?;
                }
                Err(e) => return Err(e),
            }

            match self.ask_threshold()? {
                Threshold::Rating(threshold) => selector.threshold = threshold,
                Threshold::Quit => {
                    self.console.say(THANKS)?;
                    return Ok(Flow::Finished);
                }
                Threshold::EndOfInput => return Ok(Flow::EndOfInput),
            }
        }
    }

    fn preference_mode(&mut self) -> Result<Flow> {
        let Some(mut query) = self.ask_query(FIRST_QUERY_PROMPT)? else {
            return Ok(Flow::EndOfInput);
        };

        'query: loop {
            let matches = PreferenceMatcher::new(query.as_str()).matches(self.store);

            loop {
                match pick(&matches, &mut self.rng) {
                    Some(recipe) => self
                        .console
                        .say(&format!("\n{}", render_preference(recipe)))?,
                    None => self
                        .console
                        .say("\nNo recipes found matching your preference. Try another search!")?,
                }

                match self.ask_reply(
                    PREFERENCE_PROMPT,
                    &[Reply::Yes, Reply::Another, Reply::Quit],
                )? {
                    None => return Ok(Flow::EndOfInput),
                    Some(Reply::Yes) => self.console.say(ANOTHER_ONE)?,
                    Some(Reply::Another) => match self.ask_query(NEXT_QUERY_PROMPT)? {
                        Some(next) => {
                            query = next;
                            continue 'query;
                        }
                        None => return Ok(Flow::EndOfInput),
                    },
                    Some(Reply::Quit) => {
                        self.console.say(THANKS)?;
                        return Ok(Flow::Finished);
                    }
                    Some(_) => {
                        self.console.say("\nPlease enter a valid input.")?;
                        self.console.say(
                            "\nType 'yes' for another suggestion, 'another' for a new search, or 'quit' to exit.",
                        )?;
                        return Ok(Flow::Finished);
                    }
                }
            }
        }
    }

    /// Reads an answer from `allowed`. Anything else is `Reply::Unrecognized`
    /// unless `strict_commands` is set, in which case the question is repeated.
    fn ask_reply(&mut self, prompt: &str, allowed: &[Reply]) -> Result<Option<Reply>> {
        loop {
            let Some(input) = self.console.ask(prompt)? else {
                return Ok(None);
            };

            let reply = Reply::parse(&input);
            if allowed.contains(&reply) {
                return Ok(Some(reply));
            }
            if !self.config.strict_commands {
                return Ok(Some(Reply::Unrecognized));
            }

            let keywords: Vec<&str> = allowed
                .iter()
                .filter_map(|reply| reply.keyword())
                .collect();
            self.console
                .say(&format!("\nPlease answer with one of: {}", keywords.join(", ")))?;
        }
    }

    fn ask_minutes(&mut self) -> Result<Option<u32>> {
        loop {
            let Some(input) = self.console.ask(MINUTES_PROMPT)? else {
                return Ok(None);
            };
            match parse_minutes(&input) {
                Ok(minutes) => return Ok(Some(minutes)),
                Err(e) => {
                    debug!("{}", e);
                    self.console.say("\nPlease enter a valid number of minutes.")?;
                }
            }
        }
    }

    fn ask_threshold(&mut self) -> Result<Threshold> {
        loop {
            let Some(input) = self.console.ask(THRESHOLD_PROMPT)? else {
                return Ok(Threshold::EndOfInput);
            };
            if Reply::parse(&input) == Reply::Quit {
                return Ok(Threshold::Quit);
            }
            match parse_rating(&input) {
                Ok(rating) => return Ok(Threshold::Rating(rating)),
                Err(e) => {
                    debug!("{}", e);
                    self.console.say("\nPlease enter a rating between 0 and 5.")?;
                }
            }
        }
    }

    fn ask_query(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            let Some(input) = self.console.ask(prompt)? else {
                return Ok(None);
            };
            match parse_query(&input) {
                Ok(query) => return Ok(Some(query.to_string())),
                Err(e) => {
                    debug!("{}", e);
                    self.console.say("\nPlease type a meal name or type.")?;
                }
            }
        }
    }
}

enum Threshold {
    Rating(f64),
    Quit,
    EndOfInput,
}
