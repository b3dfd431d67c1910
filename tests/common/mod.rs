use deque::mach::{Event, Runtime};

pub fn exec_str(source: &str) -> String {
    match Runtime::from_source(source, false) {
        Ok(mut runtime) => exec(&mut runtime),
        Err(error) => format!("{}\n", error),
    }
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped | Event::Exit => {
                break;
            }
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
                s.push_str(&format!("{}\n", ps));
            }
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}
