//! # fixcomb - Parser combinators for fixed-width records
//!
//! Decodes positionally-encoded text (flat-file / COBOL-style lines) into
//! typed values by composing small parsers into larger ones.
//!
//! Every parser maps a [`Cursor`] to a [`ParseOutcome`], which is one of:
//!
//! - **Success**: a value and the cursor after the consumed input
//! - **Failure**: "not this alternative"; [`or`](or::OrExt::or) falls back to
//!   the next branch
//! - **Error**: the attempt is broken; no combinator falls back past it
//!
//! Combinators never turn a Failure into an Error or the other way round.
//! Only primitive parsers decide which one to report.
//!
//! ```
//! use fixcomb::number::integer_of_size;
//! use fixcomb::skip::SkipExt;
//! use fixcomb::text::{fixed_width, literal};
//! use fixcomb::then::ThenExt;
//! use fixcomb::parse;
//!
//! let record = literal("PRD").skip_then(fixed_width(5).then(integer_of_size(4)));
//! let (id, quantity) = parse("PRDUC459  41", &record).value_or_fail().unwrap();
//! assert_eq!(id, "UC459");
//! assert_eq!(quantity, 41);
//! ```

pub mod bind;
pub mod cursor;
pub mod error;
pub mod map;
pub mod named;
pub mod number;
pub mod or;
pub mod outcome;
pub mod parser;
pub mod skip;
pub mod text;
pub mod then;

pub use bind::{Bind, BindExt};
pub use cursor::{Cursor, END_OF_INPUT};
pub use error::{CodeLoc, ParseError, ParseFault};
pub use map::{Map, MapExt};
pub use named::{Named, NamedExt};
pub use or::{Or, OrExt};
pub use outcome::{OutcomeKind, ParseOutcome};
pub use parser::{FnParser, Parser, from_fn, from_fn_named, parse, parse_bytes};
pub use skip::{Skip, SkipExt, SkipThen};
pub use then::{Then, ThenExt};
