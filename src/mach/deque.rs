use crate::error;
use crate::lang::Error;
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, Error>;

/// Which end of the deque an instruction works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// ## Direction enforced and size limited double-ended queue
///
/// `push` and `pop` are the only way to change the contents. Both take the
/// direction of the current instruction, which is `None` when the token
/// carried no `!` marker.

pub struct Deque<T> {
    vec: VecDeque<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.vec.iter()).finish()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Deque::new()
    }
}

impl<T> Deque<T> {
    pub const MAX_LEN: usize = 1 << 24;

    pub fn new() -> Deque<T> {
        Deque {
            vec: VecDeque::new(),
        }
    }
    fn overflow_check(&self) -> Result<()> {
        if self.vec.len() >= Self::MAX_LEN {
            Err(error!(OutOfMemory; "DEQUE FULL"))
        } else {
            Ok(())
        }
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.vec.iter()
    }
    pub fn push(&mut self, direction: Option<Direction>, val: T) -> Result<()> {
        let direction = match direction {
            Some(direction) => direction,
            None => return Err(error!(DirectionRequired)),
        };
        self.overflow_check()?;
        match direction {
            Direction::Left => self.vec.push_front(val),
            Direction::Right => self.vec.push_back(val),
        }
        Ok(())
    }
    pub fn pop(&mut self, direction: Option<Direction>) -> Result<T> {
        let val = match direction {
            Some(Direction::Left) => self.vec.pop_front(),
            Some(Direction::Right) => self.vec.pop_back(),
            None => return Err(error!(DirectionRequired)),
        };
        match val {
            Some(v) => Ok(v),
            None => Err(error!(StackUnderflow)),
        }
    }
    /// Pops `a` then `b`.
    pub fn pop_2(&mut self, direction: Option<Direction>) -> Result<(T, T)> {
        let a = self.pop(direction)?;
        let b = self.pop(direction)?;
        Ok((a, b))
    }
}

impl<T: Clone> Deque<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.vec.iter().cloned().collect()
    }
}
