//! A scrabble library for Rust.
//! <br>
//! This crate scores moves on a scrabble board and finds the moves with the highest score
//! for a rack of letters. It can be used to study strategies in the game, or to let
//! computer players play against each other.
//! It can use the `rayon` crate to search the anchors of a board in parallel.
//!
//! # How to use `scrabble_solver`
//! Load a lexicon, choose a tile set and create a board. The lexicon must be in utf-8 and
//! contain one word per line. By default the standard board and the english tile set are used.
//!
//! # Basic usage
//!  ```
//! use scrabble_solver::{Board, Config, Direction, Lexicon, Move, Rejection, SearchAgent, TileSet};
//!
//! let lexicon = Lexicon::from_words(&["rust", "rest", "rusts"])?;
//! let tileset = TileSet::default();
//! let agent = SearchAgent::new(&lexicon, &tileset, Config::default());
//! let mut board = Board::default();
//!
//! let moves = agent.best_moves(&"RUSTA".parse()?, &board);
//! for (mv, score) in &moves {
//!     println!("{} {}", mv, score);
//! }
//! let (best, score) = moves[0];
//! assert_eq!(agent.engine().play(&mut board, &best)?, score);
//! println!("{}", board);
//!
//! // a move that does not connect to the tiles on the board is rejected
//! let mv = Move::new(0, 0, Direction::Right, "REST".parse()?);
//! assert_eq!(agent.engine().score_move(&mv, &board), Err(Rejection::FloatingMove));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # About implementation
//! The lexicon is a trie flattened into an array, with the children of a node stored as a
//! bitset of labels. Words for an anchor are enumerated with a depth first search through
//! the trie that is constrained by the letters on the rack and the tiles on the board.
mod agent;
mod board;
mod config;
mod error;
mod grid;
mod labelset;
mod lexicon;
mod moves;
mod player;
mod rack;
mod scoring;
mod tilebag;
mod tiles;
mod tileset;

pub use agent::{Anchor, Constraint, Score, SearchAgent};
pub use board::{Board, State};
pub use config::Config;
pub use error::{Error, Rejection};
pub use grid::{Grid, Premium, Square, N, START};
pub use lexicon::{Lexicon, Matches, NodeId};
pub use moves::{Action, Direction, Move};
pub use player::{Player, Prompt};
pub use rack::Rack;
pub use scoring::ScoringEngine;
pub use tilebag::{TileBag, MIN_TILES_FOR_EXCHANGE};
pub use tiles::{Cell, Code, Codec, Item, ItemList, Label, Letter, Letters, Row, Tile, Word};
pub use tileset::TileSet;
