use anyhow::{Result, bail};
use npuzzle_common::grid::{Grid, Puzzle, to_pretty_string};
use npuzzle_solver::{HeuristicKind, SolveResult, Solver};

use std::{
    io::{IsTerminal, Write, stderr},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

pub fn do_solve(puzzle: &Puzzle, kind: HeuristicKind, greedy: bool) -> Result<Vec<Grid>> {
    println!("{}", to_pretty_string(puzzle.size(), puzzle.start()));
    let mut heuristic = kind.build();
    let SolveResult {
        elapsed,
        expanded,
        peak_size,
        solution,
        ..
    } = with_spinner(&format!("Solving with {}...", heuristic_label(kind, greedy)), || {
        Solver::new(puzzle, heuristic.as_mut()).greedy(greedy).solve()
    });
    let elapsed_str = format_elapsed(elapsed);
    let Some(solution) = solution else {
        bail!(
            "No solution found. Time: {elapsed_str}, Time complexity: {expanded}, Size complexity: {peak_size}"
        );
    };
    let heuristic_str = heuristic_label(kind, greedy);
    println!(
        "✓ Solved in {} Moves — Heuristic: {heuristic_str}, Time: {elapsed_str}, Time complexity: {expanded}, Size complexity: {peak_size}\n",
        solution.len() - 1
    );
    Ok(solution)
}

fn heuristic_label(kind: HeuristicKind, greedy: bool) -> String {
    let mut label = kind.full_name().to_string();
    if greedy {
        label.push_str(" (Greedy)");
    }
    label
}

pub fn format_solution(size: usize, solution: &[Grid]) -> String {
    let total = solution.len();
    let mut output = String::new();
    for (step, grid) in solution.iter().enumerate() {
        output.push_str(&format!("Step {} / {total}\n", step + 1));
        output.push_str(&to_pretty_string(size, grid));
        output.push('\n');
    }
    output
}

fn with_spinner<T, F: FnOnce() -> T>(message: &str, f: F) -> T {
    if stderr().is_terminal() {
        let spinning = Arc::new(AtomicBool::new(true));
        let spinning_clone = Arc::clone(&spinning);
        let message = message.to_string();

        let handle = std::thread::spawn(move || {
            let spinner_chars = ['|', '/', '-', '\\'];
            let mut i = 0;
            let stderr = stderr();
            let mut handle = stderr.lock();

            let _ = write!(handle, "\x1b[?25l"); // hide cursor
            let _ = handle.flush();

            while spinning_clone.load(Ordering::Relaxed) {
                let spinner_char = spinner_chars[i % spinner_chars.len()];
                let _ = write!(handle, "\r{spinner_char} {message}",);
                let _ = handle.flush();
                std::thread::sleep(Duration::from_millis(100));
                i += 1;
            }

            let _ = write!(handle, "\r\x1b[2K\r\x1b[?25h"); // clear line and show cursor
            let _ = handle.flush();
        });

        let result = f();
        spinning.store(false, Ordering::Relaxed);
        let _ = handle.join();
        result
    } else {
        f()
    }
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs < 90 {
        let ms = elapsed.subsec_millis();
        format!("{secs}.{ms:03}s")
    } else {
        let minutes = secs / 60;
        let secs = secs % 60;
        format!("{minutes}m {secs}s")
    }
}
