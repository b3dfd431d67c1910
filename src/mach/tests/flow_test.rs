use super::*;
use crate::lang::ErrorCode;
use crate::mach::Outcome;

const COUNTDOWN: &str = "3! loop: dup! print! 1! sub! dup! 0! <! loop! jmpif! exit print!";

#[test]
fn test_countdown_loop() {
    assert_eq!(run(COUNTDOWN), "3\n2\n1\n");
}

#[test]
fn test_jmp_forward_lands_on_target() {
    assert_eq!(run("end! jmp! 1! print! end: 2! print!"), "2\n");
    assert_eq!(run("5! jmp! 1! print! 2! 3! print!"), "3\n");
}

#[test]
fn test_jmpif() {
    assert_eq!(run("0! skip! jmpif! 1! print! skip: 2! print!"), "1\n2\n");
    assert_eq!(run("7! skip! jmpif! 1! print! skip: 2! print!"), "2\n");
    assert_eq!(run("1! 1! eq! skip! jmpif! 1! print! skip: 2! print!"), "2\n");
}

#[test]
fn test_jmpif_pops_address_then_condition() {
    assert_eq!(deque_after("9! 0! 100! jmpif!"), vec![Val::Integer(9)]);
}

#[test]
fn test_jump_past_end_stops() {
    assert_eq!(run("100! jmp! 1! print!"), "");
}

#[test]
fn test_jump_to_negative_address() {
    assert_eq!(
        run("-1! jmp!"),
        "INVALID ADDRESS AT 1 (`jmp!`); JUMP TO -1\n"
    );
}

#[test]
fn test_exit_skips_the_rest() {
    assert_eq!(run("1! print! exit 2! print!"), "1\n");
    assert_eq!(run("1! print! !exit 2! print!"), "1\n");
}

#[test]
fn test_duplicate_label_before_running() {
    assert_eq!(
        run("1! print! label: label:"),
        "DUPLICATE LABEL AT 3 (`label:`); LABEL `label` ALREADY DEFINED AT 2\n"
    );
}

#[test]
fn test_runaway_loop() {
    assert_eq!(
        run_cycles("top: top! jmp!", 100),
        "\n100 Execution cycles exceeded.\n"
    );
}

#[test]
fn test_tracing_flag() {
    let mut r = Runtime::from_source("1! 2! add!", true).unwrap();
    assert_eq!(
        exec(&mut r, 5000),
        "0: 1! <- []\n1: 2! <- [1]\n2: add! <- [1, 2]\n[3]\n"
    );
}

#[test]
fn test_tracing_flag_is_silent_after_exit() {
    let mut r = Runtime::from_source("1! exit", true).unwrap();
    assert_eq!(exec(&mut r, 5000), "0: 1! <- []\n1: exit <- [1]\n");
}

#[test]
fn test_interrupt() {
    let mut r = Runtime::from_source("top: top! jmp!", false).unwrap();
    assert_eq!(r.execute(10), Event::Running);
    r.interrupt();
    match r.execute(10) {
        Event::Error(e) => assert_eq!(e.code(), ErrorCode::Interrupted),
        event => panic!("{:?}", event),
    }
    assert_eq!(r.execute(10), Event::Stopped);
}

#[test]
fn test_run_outcomes() {
    let mut out = Vec::new();
    let mut r = Runtime::from_source(COUNTDOWN, false).unwrap();
    assert_eq!(r.run(&mut out).unwrap(), Outcome::Exit);
    assert_eq!(String::from_utf8(out).unwrap(), "3\n2\n1\n");
    assert_eq!(r.deque().to_vec(), vec![Val::Integer(0)]);

    let mut out = Vec::new();
    let mut r = Runtime::from_source("5! 3! add! print!", false).unwrap();
    assert_eq!(r.run(&mut out).unwrap(), Outcome::Ended);
    assert_eq!(r.ip(), 4);
    assert_eq!(out, b"8\n");
}

#[test]
fn test_run_error() {
    let mut out = Vec::new();
    let mut r = Runtime::from_source("1! 2! print! !drop !drop", false).unwrap();
    let e = r.run(&mut out).unwrap_err();
    assert_eq!(e.code(), ErrorCode::StackUnderflow);
    assert_eq!(e.address(), Some(4));
    assert_eq!(out, b"2\n");
}

#[test]
fn test_boolean_address_is_one() {
    let mut r = Runtime::from_source("1! 1! eq! jmp!", false).unwrap();
    assert_eq!(r.execute(4), Event::Running);
    assert_eq!(r.ip(), 1);
    assert!(r.deque().is_empty());
}

#[test]
fn test_jump_to_exactly_the_end() {
    let mut out = Vec::new();
    let mut r = Runtime::from_source("2! jmp!", false).unwrap();
    assert_eq!(r.run(&mut out).unwrap(), Outcome::Ended);
    assert_eq!(r.ip(), 2);
    assert!(out.is_empty());
    assert_eq!(run("4! jmp! 1! print!"), "");
}

#[test]
fn test_run_polled_breaks() {
    let mut out = Vec::new();
    let mut r = Runtime::from_source("1! print! top: top! jmp!", false).unwrap();
    let mut polls = 0;
    let e = r
        .run_polled(&mut out, || {
            polls += 1;
            polls > 3
        })
        .unwrap_err();
    assert_eq!(e.code(), ErrorCode::Interrupted);
    assert_eq!(out, b"1\n");
    assert_eq!(r.execute(10), Event::Stopped);
}

#[test]
fn test_run_polled_never_interrupted() {
    let mut out = Vec::new();
    let mut r = Runtime::from_source(COUNTDOWN, false).unwrap();
    assert_eq!(r.run_polled(&mut out, || false).unwrap(), Outcome::Exit);
    assert_eq!(out, b"3\n2\n1\n");
}
