//! # Deque
//!
//! A tiny language whose only memory is one double-ended queue. Every
//! instruction chooses which end it works on.
//!
//! Run a program with `deque path/to/program.dq`. Add `--trace` to see
//! each instruction and the deque before it runs.
//!
//! ```
//! use deque::mach::{Outcome, Runtime};
//!
//! let mut runtime = Runtime::from_source("5! 3! add! print!", false).unwrap();
//! let mut out = Vec::new();
//! assert_eq!(runtime.run(&mut out).unwrap(), Outcome::Ended);
//! assert_eq!(out, b"8\n");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
