use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Runtime values
///
/// A boolean mixed with an integer counts as 1 or 0. Arithmetic always
/// yields an integer; `or` and `and` keep booleans when both sides are
/// booleans; comparisons yield booleans.

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Val {
    Integer(i64),
    Boolean(bool),
}

impl Val {
    pub fn integer(self) -> i64 {
        match self {
            Val::Integer(n) => n,
            Val::Boolean(b) => b as i64,
        }
    }

    pub fn is_truthy(self) -> bool {
        self.integer() != 0
    }

    pub fn add(self, rhs: Val) -> Result<Val> {
        match self.integer().checked_add(rhs.integer()) {
            Some(n) => Ok(Val::Integer(n)),
            None => Err(error!(Overflow)),
        }
    }

    pub fn sub(self, rhs: Val) -> Result<Val> {
        match self.integer().checked_sub(rhs.integer()) {
            Some(n) => Ok(Val::Integer(n)),
            None => Err(error!(Overflow)),
        }
    }

    pub fn shl(self, rhs: Val) -> Result<Val> {
        let (lhs, count) = (self.integer(), shift_count(rhs)?);
        if lhs == 0 {
            return Ok(Val::Integer(0));
        }
        if count >= 63 {
            return Err(error!(Overflow));
        }
        let n = lhs << count;
        if n >> count != lhs {
            return Err(error!(Overflow));
        }
        Ok(Val::Integer(n))
    }

    pub fn shr(self, rhs: Val) -> Result<Val> {
        let (lhs, count) = (self.integer(), shift_count(rhs)?);
        Ok(Val::Integer(lhs >> count.min(63)))
    }

    pub fn or(self, rhs: Val) -> Val {
        match (self, rhs) {
            (Val::Boolean(l), Val::Boolean(r)) => Val::Boolean(l | r),
            _ => Val::Integer(self.integer() | rhs.integer()),
        }
    }

    pub fn and(self, rhs: Val) -> Val {
        match (self, rhs) {
            (Val::Boolean(l), Val::Boolean(r)) => Val::Boolean(l & r),
            _ => Val::Integer(self.integer() & rhs.integer()),
        }
    }

    pub fn equal(self, rhs: Val) -> Val {
        Val::Boolean(self.integer() == rhs.integer())
    }

    pub fn gt(self, rhs: Val) -> Val {
        Val::Boolean(self.integer() > rhs.integer())
    }

    pub fn lt(self, rhs: Val) -> Val {
        Val::Boolean(self.integer() < rhs.integer())
    }

    pub fn gt_eq(self, rhs: Val) -> Val {
        Val::Boolean(self.integer() >= rhs.integer())
    }
}

fn shift_count(val: Val) -> Result<u32> {
    let n = val.integer();
    if n < 0 {
        Err(error!(NegativeShift))
    } else {
        Ok(n.min(u32::MAX as i64) as u32)
    }
}

impl std::fmt::Debug for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::Boolean(b) => write!(f, "{}", b),
        }
    }
}
