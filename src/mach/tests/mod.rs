use crate::mach::{Event, Runtime, Val};

mod flow_test;

fn run(source: &str) -> String {
    run_cycles(source, 5000)
}

fn run_cycles(source: &str, cycles: usize) -> String {
    let mut r = match Runtime::from_source(source, false) {
        Ok(r) => r,
        Err(error) => return format!("{}\n", error),
    };
    exec(&mut r, cycles)
}

fn exec(r: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = r.execute(cycles);
        match &event {
            Event::Stopped | Event::Exit => break,
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(ps);
                s.push('\n');
            }
        }
        prev_running = event == Event::Running;
    }
    s
}

fn deque_after(source: &str) -> Vec<Val> {
    let mut r = Runtime::from_source(source, false).unwrap();
    let mut sink = Vec::new();
    r.run(&mut sink).unwrap();
    r.deque().to_vec()
}
