/*!
## Rust Machine Module

This Rust module is the virtual machine: one deque, one instruction pointer.

*/

pub type Address = usize;

mod deque;
mod opcode;
mod runtime;
mod val;

pub use deque::Deque;
pub use deque::Direction;
pub use opcode::Opcode;
pub use runtime::Event;
pub use runtime::Outcome;
pub use runtime::Runtime;
pub use val::Val;

#[cfg(test)]
mod tests;
