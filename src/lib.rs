//! Interactive chess viewer core
//!
//! Mediates between pointer picks on a 3D board and the [`chess_rules`]
//! engine, and turns engine results into visual commands for a rendering
//! collaborator.
//!
//! - [`game`] - selection controller and session
//! - [`rendering`] - the [`rendering::RenderSink`] boundary and layout math
//! - [`core`] - viewer settings and their persistence
//!
//! # Example
//!
//! ```
//! use chessview::game::{InteractionOutcome, Session};
//! use chessview::rendering::CommandRecorder;
//!
//! let mut session = Session::default();
//! let mut recorder = CommandRecorder::new();
//!
//! let pawn = session.pick_at("e2".parse().unwrap());
//! session.handle(pawn, &mut recorder);
//! let outcome = session.handle(session.pick_at("e4".parse().unwrap()), &mut recorder);
//!
//! assert!(outcome.is_move());
//! assert!(recorder.highlighted().is_empty());
//! ```

pub mod core;
pub mod game;
pub mod rendering;
