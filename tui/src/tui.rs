//! Rendering the simulation in the terminal.

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Print, PrintStyledContent, Stylize},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use rlifesim_lib::Simulation;
use std::{
    io::{self, Stdout, Write},
    time::{Duration, Instant},
};

/// The delay is changed within this range by `+` and `-`.
const MIN_DELAY: Duration = Duration::from_millis(10);
const MAX_DELAY: Duration = Duration::from_millis(2000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Running,
    Paused,
    Finished,
}

/// What to do after a key is pressed.
enum Action {
    Redraw,
    Quit,
    Nothing,
}

struct App {
    world: Box<dyn Simulation>,
    delay: Duration,
    generations: Option<u64>,
    status: Status,
}

impl App {
    fn new(world: Box<dyn Simulation>, delay: Duration, generations: Option<u64>) -> Self {
        let mut app = App {
            world,
            delay,
            generations,
            status: Status::Running,
        };
        app.check_finished();
        app
    }

    fn check_finished(&mut self) {
        if self.generations.map_or(false, |n| self.world.generation() >= n) {
            self.status = Status::Finished;
        }
    }

    fn step(&mut self) {
        self.world.step();
        self.check_finished();
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Action::Quit,
                _ => Action::Nothing,
            };
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.status = match self.status {
                    Status::Running => Status::Paused,
                    Status::Paused => Status::Running,
                    Status::Finished => Status::Finished,
                };
                Action::Redraw
            }
            KeyCode::Right | KeyCode::Char('n') if self.status == Status::Paused => {
                self.step();
                Action::Redraw
            }
            KeyCode::Char('+') => {
                self.delay = (self.delay / 2).max(MIN_DELAY);
                Action::Redraw
            }
            KeyCode::Char('-') => {
                self.delay = (self.delay * 2).min(MAX_DELAY);
                Action::Redraw
            }
            _ => Action::Nothing,
        }
    }

    fn draw(&self, stdout: &mut Stdout) -> io::Result<()> {
        queue!(
            stdout,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Print(self.world.summary()),
            MoveTo(0, 1),
            Print(format!(
                "rule: {}, delay: {} ms",
                self.world.rule_string(),
                self.delay.as_millis()
            )),
        )?;

        let width = self.world.width();
        let border = format!("+{}+", "-".repeat(width));
        let mut row = 2;
        queue!(stdout, MoveTo(0, row), Print(&border))?;
        for line in self.world.plaintext().lines() {
            row += 1;
            queue!(stdout, MoveTo(0, row), Print('|'))?;
            for c in line.chars() {
                match c {
                    'o' => queue!(stdout, PrintStyledContent("#".red()))?,
                    'w' => queue!(stdout, PrintStyledContent("w".green()))?,
                    '#' => queue!(stdout, PrintStyledContent("#".white()))?,
                    _ => queue!(stdout, Print(' '))?,
                }
            }
            queue!(stdout, Print('|'))?;
        }
        row += 1;
        queue!(stdout, MoveTo(0, row), Print(&border))?;

        let status = match self.status {
            Status::Running => "Running. Press [space] to pause, [+]/[-] to change speed, [q] to quit.",
            Status::Paused => "Paused. Press [space] to resume, [n] to step, [q] to quit.",
            Status::Finished => "Finished. Press [q] to quit.",
        };
        queue!(stdout, MoveTo(0, row + 1), Print(status))?;
        stdout.flush()
    }

    /// Steps and draws until quit.
    ///
    /// Waiting for key events and waiting for the next generation share
    /// the same timeout.
    fn main_loop(&mut self, stdout: &mut Stdout) -> io::Result<()> {
        self.draw(stdout)?;
        let mut last_step = Instant::now();
        loop {
            let timeout = self.delay.saturating_sub(last_step.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        match self.handle_key(key) {
                            Action::Quit => break,
                            Action::Redraw => self.draw(stdout)?,
                            Action::Nothing => (),
                        }
                    }
                    Event::Resize(_, _) => self.draw(stdout)?,
                    _ => (),
                }
            } else {
                if self.status == Status::Running {
                    self.step();
                    self.draw(stdout)?;
                }
                last_step = Instant::now();
            }
        }
        Ok(())
    }
}

/// Runs the simulation in the TUI until it is quit.
///
/// Returns the world, so that the last generation can be printed.
pub(crate) fn run_with_tui(
    world: Box<dyn Simulation>,
    delay: Duration,
    generations: Option<u64>,
) -> io::Result<Box<dyn Simulation>> {
    let mut app = App::new(world, delay, generations);
    let mut stdout = io::stdout();

    execute!(stdout, EnterAlternateScreen, SetTitle("rlifesim"), Hide)?;
    terminal::enable_raw_mode()?;

    let result = app.main_loop(&mut stdout);

    terminal::disable_raw_mode()?;
    execute!(stdout, Show, LeaveAlternateScreen)?;
    result.map(|_| app.world)
}
