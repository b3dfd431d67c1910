//! # Deque
//!
//! Runs a program written for the deque machine.
//!

fn main() {
    deque::term::main()
}
