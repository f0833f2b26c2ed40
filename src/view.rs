use std::{
    io::{stdin, stdout, Write},
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use termion::{event::Key, input::TermRead, raw::IntoRawMode};
use tracing::{debug, warn};

use crate::{config::step_delay, pos, Grid, GridEngine, Pos, ALIVE};

pub use canvas::Canvas;
mod canvas;

#[derive(Debug)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug)]
pub enum InputCmd {
    Exit,
    Move(Dir),
    Accelerate,
    Decelerate,
    TogglePause,
}

const EVT_CHECK_TIMEOUT: Duration = Duration::from_millis(10);
const SPEED_INCREMENT: f64 = 0.1;
const PAN_STEP: i32 = 4;
const PROGRESS_WIDTH: usize = 20;

fn input_loop(sender: mpsc::Sender<InputCmd>) {
    for key in stdin().keys() {
        let command = match key {
            Ok(Key::Char('q')) | Ok(Key::Ctrl('c')) => InputCmd::Exit,
            Ok(Key::Char('+')) => InputCmd::Accelerate,
            Ok(Key::Char('-')) => InputCmd::Decelerate,
            Ok(Key::Char(' ')) => InputCmd::TogglePause,
            Ok(Key::Up) => InputCmd::Move(Dir::Up),
            Ok(Key::Down) => InputCmd::Move(Dir::Down),
            Ok(Key::Left) => InputCmd::Move(Dir::Left),
            Ok(Key::Right) => InputCmd::Move(Dir::Right),
            Ok(_) => continue,
            Err(err) => {
                warn!(%err, "failed to read key");
                break;
            }
        };

        if sender.send(command).is_err() {
            break;
        }
    }
}

/// Interactive session: shows step 0, then steps `iterations` times with a delay derived from `speed`.
pub struct View {
    engine: GridEngine,
    iterations: usize,
    speed: f64,
    origin: Pos,
    paused: bool,
}

enum Flow {
    Continue,
    Exit,
}

impl View {
    pub fn new(engine: GridEngine, iterations: usize, speed: f64) -> Self {
        Self {
            engine,
            iterations,
            speed,
            origin: pos!(0, 0),
            paused: false,
        }
    }

    pub fn run(mut self) -> Result<GridEngine> {
        let mut out = stdout()
            .into_raw_mode()
            .context("failed to switch the terminal to raw mode")?;
        let (sender, receiver) = mpsc::channel();
        // blocked on stdin until the process leaves, it is never joined
        let _input_handle = thread::spawn(|| input_loop(sender));

        write!(out, "{}", termion::cursor::Hide).context("failed to hide the cursor")?;
        let result = self.view_loop(&mut out, &receiver);
        write!(out, "{}{}", termion::cursor::Show, termion::clear::All)
            .context("failed to restore the terminal")?;
        out.flush().context("failed to restore the terminal")?;
        result.map(|()| self.engine)
    }

    fn view_loop(&mut self, out: &mut impl Write, receiver: &mpsc::Receiver<InputCmd>) -> Result<()> {
        self.display(out)?;
        while (self.engine.generation() as usize) < self.iterations {
            let mut last_update = Instant::now();
            loop {
                if let Flow::Exit = self.handle_inputs(receiver) {
                    return Ok(());
                }
                if !self.paused && last_update.elapsed() >= step_delay(self.speed) {
                    break;
                }
                if self.paused {
                    last_update = Instant::now();
                }
                thread::sleep(EVT_CHECK_TIMEOUT);
            }
            self.engine.step();
            self.display(out)?;
        }

        debug!(generation = self.engine.generation(), "run complete, waiting for exit");
        loop {
            if let Flow::Exit = self.handle_inputs(receiver) {
                return Ok(());
            }
            thread::sleep(EVT_CHECK_TIMEOUT);
        }
    }

    fn handle_inputs(&mut self, receiver: &mpsc::Receiver<InputCmd>) -> Flow {
        while let Ok(cmd) = receiver.try_recv() {
            match cmd {
                InputCmd::Exit => return Flow::Exit,
                InputCmd::Move(direction) => {
                    let delta = match direction {
                        Dir::Up => pos!(-PAN_STEP, 0),
                        Dir::Down => pos!(PAN_STEP, 0),
                        Dir::Left => pos!(0, -PAN_STEP),
                        Dir::Right => pos!(0, PAN_STEP),
                    };
                    let max = self.engine.side().saturating_sub(1) as i32;
                    let moved = self.origin + delta;
                    self.origin = pos!(moved.row.clamp(0, max), moved.col.clamp(0, max));
                }
                InputCmd::Accelerate => self.speed = (self.speed + SPEED_INCREMENT).min(1.0),
                InputCmd::Decelerate => self.speed = (self.speed - SPEED_INCREMENT).max(0.0),
                InputCmd::TogglePause => self.paused = !self.paused,
            }
        }
        Flow::Continue
    }

    fn display(&self, out: &mut impl Write) -> Result<()> {
        let mut canvas = Canvas::from_screen().context("failed to read the terminal size")?;
        draw_grid(&mut canvas, self.engine.grid(), self.origin);
        let mut status = status_line(&self.engine, self.iterations);
        status += &format!(" speed {:.1}", self.speed);
        if self.paused {
            status += " [paused]";
        }
        canvas
            .display(out, &status)
            .context("failed to draw the grid")
    }
}

/// Renders the part of `grid` that starts at `origin` into the canvas.
pub fn draw_grid(canvas: &mut Canvas, grid: &Grid, origin: Pos) {
    canvas.layer(|pos| {
        grid.get_pos(origin + pos)
            .map(|cell| if cell == ALIVE { '#' } else { '.' })
    });
}

/// Whole grid as text, one line per row.
pub fn grid_text(grid: &Grid) -> String {
    let mut canvas = Canvas::new(grid.side(), grid.side());
    draw_grid(&mut canvas, grid, pos!(0, 0));
    canvas.text()
}

pub fn progress_bar(done: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        width
    } else {
        (done.min(total) * width) / total
    };
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

pub fn status_line(engine: &GridEngine, iterations: usize) -> String {
    let step = engine.generation() as usize;
    format!(
        "step {step}/{iterations} {} {} {} population {}",
        progress_bar(step, iterations, PROGRESS_WIDTH),
        engine.boundary(),
        engine.pattern(),
        engine.grid().population()
    )
}
