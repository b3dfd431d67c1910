use super::{Address, Deque, Direction, Opcode, Val};
use crate::error;
use crate::lang::{Error, Program, Token};
use std::num::IntErrorKind;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// ## Events for the user interface
///
/// `execute` returns after each line of output so the caller decides
/// where output goes.

#[derive(Debug, PartialEq)]
pub enum Event {
    /// Cycle budget spent. Call `execute` again.
    Running,
    /// The instruction pointer ran off the end of the program.
    Stopped,
    /// An `exit` instruction ran.
    Exit,
    /// One line from `print`, `trace`, or the tracing flag.
    Print(String),
    /// The run failed and is over.
    Error(Error),
}

/// How a completed `run` ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Exit,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Stopped,
}

enum Step {
    Next,
    Jump,
    Print(String),
    Exit,
}

/// ## Deque machine
///
/// Owns the deque and the instruction pointer for a single run of a
/// loaded `Program`.

pub struct Runtime {
    program: Program,
    deque: Deque<Val>,
    ip: Address,
    tracing: bool,
    traced: bool,
    state: State,
    interrupted: bool,
}

impl Runtime {
    pub fn new(program: Program, tracing: bool) -> Runtime {
        Runtime {
            program,
            deque: Deque::new(),
            ip: 0,
            tracing,
            traced: false,
            state: State::Running,
            interrupted: false,
        }
    }

    pub fn from_source(s: &str, tracing: bool) -> Result<Runtime> {
        Ok(Runtime::new(Program::from_source(s)?, tracing))
    }

    pub fn deque(&self) -> &Deque<Val> {
        &self.deque
    }

    pub fn ip(&self) -> Address {
        self.ip
    }

    /// Stop the run at the next call to `execute`.
    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    /// Drive `execute` to the end, writing every printed line to `out`.
    pub fn run<W: std::io::Write>(&mut self, out: &mut W) -> Result<Outcome> {
        self.run_polled(out, || false)
    }

    /// Like `run`, but asks `interrupted` between slices of execution and
    /// stops with `BREAK` when it answers true.
    pub fn run_polled<W, F>(&mut self, out: &mut W, mut interrupted: F) -> Result<Outcome>
    where
        W: std::io::Write,
        F: FnMut() -> bool,
    {
        loop {
            if interrupted() {
                self.interrupt();
            }
            match self.execute(5000) {
                Event::Running => {}
                Event::Print(s) => {
                    if let Err(e) = writeln!(out, "{}", s) {
                        return Err(error!(IoError, self.ip; &e.to_string()));
                    }
                }
                Event::Exit => return Ok(Outcome::Exit),
                Event::Stopped => return Ok(Outcome::Ended),
                Event::Error(e) => return Err(e),
            }
        }
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        match self.state {
            State::Running => {}
            State::Stopped => return Event::Stopped,
        }
        if self.interrupted {
            self.interrupted = false;
            self.state = State::Stopped;
            return Event::Error(error!(Interrupted, self.ip));
        }
        for _ in 0..cycles {
            let token = match self.program.token(self.ip) {
                Some(token) => token.clone(),
                None => {
                    debug!(ip = self.ip, len = self.deque.len(), "ran off the end");
                    return self.ended();
                }
            };
            if self.tracing && !self.traced {
                self.traced = true;
                return Event::Print(format!("{}: {} <- {:?}", self.ip, token, self.deque));
            }
            self.traced = false;
            match self.step(&token) {
                Ok(Step::Next) | Ok(Step::Jump) => {}
                Ok(Step::Print(s)) => return Event::Print(s),
                Ok(Step::Exit) => {
                    debug!(ip = self.ip, "exit");
                    self.state = State::Stopped;
                    return Event::Exit;
                }
                Err(error) => {
                    self.state = State::Stopped;
                    return Event::Error(error.located(self.ip, token.as_str()));
                }
            }
        }
        Event::Running
    }

    fn ended(&mut self) -> Event {
        self.state = State::Stopped;
        if self.tracing {
            Event::Print(format!("{:?}", self.deque))
        } else {
            Event::Stopped
        }
    }

    fn step(&mut self, token: &Token) -> Result<Step> {
        let (d, word) = token.split_direction();
        if d.is_none() && token.label_definition().is_some() {
            self.ip += 1;
            return Ok(Step::Next);
        }
        let mut output = None;
        let op = Opcode::from_word(word);
        trace!(ip = self.ip, token = %token, op = %op, "dispatch");
        match op {
            Opcode::Add => {
                let (a, b) = self.deque.pop_2(d)?;
                self.deque.push(d, a.add(b)?)?;
            }
            Opcode::Sub => {
                let (a, b) = self.deque.pop_2(d)?;
                self.deque.push(d, b.sub(a)?)?;
            }
            Opcode::Shr => {
                let (a, b) = self.deque.pop_2(d)?;
                self.deque.push(d, b.shr(a)?)?;
            }
            Opcode::Shl => {
                let (a, b) = self.deque.pop_2(d)?;
                self.deque.push(d, b.shl(a)?)?;
            }
            Opcode::Eq => {
                let (a, b) = self.deque.pop_2(d)?;
                self.deque.push(d, a.equal(b))?;
            }
            Opcode::Or => {
                let (a, b) = self.deque.pop_2(d)?;
                self.deque.push(d, a.or(b))?;
            }
            Opcode::And => {
                let (a, b) = self.deque.pop_2(d)?;
                self.deque.push(d, a.and(b))?;
            }
            Opcode::Gt => {
                let (a, b) = self.deque.pop_2(d)?;
                self.deque.push(d, a.gt(b))?;
            }
            Opcode::Lt => {
                let (a, b) = self.deque.pop_2(d)?;
                self.deque.push(d, a.lt(b))?;
            }
            Opcode::GtEq => {
                let (a, b) = self.deque.pop_2(d)?;
                self.deque.push(d, a.gt_eq(b))?;
            }
            Opcode::Dup => {
                let a = self.deque.pop(d)?;
                self.deque.push(d, a)?;
                self.deque.push(d, a)?;
            }
            Opcode::Swap => {
                let (a, b) = self.deque.pop_2(d)?;
                self.deque.push(d, a)?;
                self.deque.push(d, b)?;
            }
            Opcode::Move => {
                let a = self.deque.pop(d)?;
                self.deque.push(d.map(Direction::opposite), a)?;
            }
            Opcode::Over => {
                let (a, b) = self.deque.pop_2(d)?;
                self.deque.push(d, b)?;
                self.deque.push(d, a)?;
                self.deque.push(d, b)?;
            }
            Opcode::Drop => {
                self.deque.pop(d)?;
            }
            Opcode::JmpIf => {
                let addr = self.deque.pop(d)?;
                let cond = self.deque.pop(d)?;
                if cond.is_truthy() {
                    self.ip = address(addr)?;
                    return Ok(Step::Jump);
                }
            }
            Opcode::Jmp => {
                let addr = self.deque.pop(d)?;
                self.ip = address(addr)?;
                return Ok(Step::Jump);
            }
            Opcode::Exit => return Ok(Step::Exit),
            Opcode::Print => {
                output = Some(self.deque.pop(d)?.to_string());
            }
            Opcode::Trace => {
                output = Some(self.render_trace());
            }
            Opcode::Word => {
                let val = self.resolve(word)?;
                self.deque.push(d, val)?;
            }
        }
        self.ip += 1;
        Ok(match output {
            Some(s) => Step::Print(s),
            None => Step::Next,
        })
    }

    /// Integer literal first, then label.
    fn resolve(&self, word: &str) -> Result<Val> {
        match word.parse::<i64>() {
            Ok(n) => Ok(Val::Integer(n)),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                Err(error!(Overflow))
            }
            Err(_) => match self.program.label(word) {
                Some(addr) => Ok(Val::Integer(addr as i64)),
                None => Err(error!(UndefinedLabel)),
            },
        }
    }

    fn render_trace(&self) -> String {
        self.deque
            .iter()
            .map(|v| if v.integer() == 1 { '*' } else { ' ' })
            .collect()
    }
}

fn address(val: Val) -> Result<Address> {
    let n = val.integer();
    if n < 0 {
        return Err(error!(InvalidAddress; &format!("JUMP TO {}", n)));
    }
    Ok(Address::try_from(n).unwrap_or(Address::MAX))
}
