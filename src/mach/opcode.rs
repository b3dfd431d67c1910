/// ## Virtual machine instruction set
///
/// The machine has no registers. Every operation pops its operands from
/// one end of the deque and pushes its results back to the same end.
/// Only `move` pushes to the other end.
///
/// For example: `5! 3! sub! print!` pushes 5 and 3 on the right,
/// `sub!` pops 3 then 5 and pushes 5-3, and `print!` pops and prints 2.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    // *** Arithmetic and logic
    Add,
    Sub,
    Shr,
    Shl,
    Eq,
    Or,
    And,
    Gt,
    Lt,
    GtEq,

    // *** Deque manipulation
    Dup,
    Swap,
    Move,
    Over,
    Drop,

    // *** Branch control
    /// Pop address then condition. Branch if the condition is truthy.
    JmpIf,
    /// Pop address and branch.
    Jmp,
    Exit,

    // *** Output
    Print,
    Trace,

    /// Anything else: an integer literal or a label reference.
    Word,
}

impl Opcode {
    pub fn from_word(word: &str) -> Opcode {
        use Opcode::*;
        match word {
            "add" => Add,
            "sub" => Sub,
            "shr" => Shr,
            "shl" => Shl,
            "eq" => Eq,
            "or" => Or,
            "and" => And,
            ">" => Gt,
            "<" => Lt,
            ">=" => GtEq,
            "dup" => Dup,
            "swap" => Swap,
            "move" => Move,
            "over" => Over,
            "drop" => Drop,
            "jmpif" => JmpIf,
            "jmp" => Jmp,
            "exit" => Exit,
            "print" => Print,
            "trace" => Trace,
            _ => Word,
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Add => write!(f, "add"),
            Sub => write!(f, "sub"),
            Shr => write!(f, "shr"),
            Shl => write!(f, "shl"),
            Eq => write!(f, "eq"),
            Or => write!(f, "or"),
            And => write!(f, "and"),
            Gt => write!(f, ">"),
            Lt => write!(f, "<"),
            GtEq => write!(f, ">="),
            Dup => write!(f, "dup"),
            Swap => write!(f, "swap"),
            Move => write!(f, "move"),
            Over => write!(f, "over"),
            Drop => write!(f, "drop"),
            JmpIf => write!(f, "jmpif"),
            Jmp => write!(f, "jmp"),
            Exit => write!(f, "exit"),
            Print => write!(f, "print"),
            Trace => write!(f, "trace"),
            Word => write!(f, "<word>"),
        }
    }
}
