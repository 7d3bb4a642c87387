use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Utc;
use dashboard_core::{update, AppState, Msg};
use dashboard_logging::{dash_debug, dash_info, dash_warn, set_action_seq};

use super::command::{self, Command, HELP};
use super::config::AppConfig;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::render::render;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

enum Input {
    Line(String),
    Closed,
}

pub fn run_app(
    config_path: Option<&Path>,
    log: LogDestination,
    start_page: Option<&str>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    logging::initialize(log, config.level_filter()?, &config.log_file);
    dash_info!("dashboard starting with {:?}", config);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(
        config.submit_settings(Arc::new(|| Utc::now().to_rfc3339())),
        msg_tx,
    );
    let mut app = App::new(AppState::with_page_size(config.page_size), runner, io::stdout());

    if let Some(name) = start_page {
        let page = command::parse_page(name).context("choosing the start page")?;
        app.dispatch(Msg::Navigate(page))?;
    }
    app.show()?;

    let input_rx = spawn_stdin_reader();
    loop {
        while let Ok(msg) = msg_rx.try_recv() {
            app.dispatch(msg)?;
        }
        match input_rx.recv_timeout(POLL_INTERVAL) {
            Ok(Input::Line(line)) => match command::parse(&line) {
                Ok(Some(Command::Dispatch(msg))) => app.dispatch(msg)?,
                Ok(Some(Command::Help)) => app.print(HELP)?,
                Ok(Some(Command::Quit)) => break,
                Ok(None) => {}
                Err(err) => {
                    dash_warn!("ignored input {:?}: {}", line, err);
                    app.print(&err.to_string())?;
                }
            },
            Ok(Input::Closed) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => {}
        }
    }

    // Submissions answer within their timeout; allow a little slack on top.
    app.settle(&msg_rx, config.submit_timeout() + Duration::from_secs(1))?;
    if app.runner.shutdown().join().is_err() {
        dash_warn!("engine event loop panicked");
    }
    dash_info!("dashboard stopped");
    Ok(())
}

fn spawn_stdin_reader() -> mpsc::Receiver<Input> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(Input::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    dash_warn!("stdin read failed: {}", err);
                    break;
                }
            }
        }
        let _ = tx.send(Input::Closed);
    });
    rx
}

/// Owns the state between messages and prints the page whenever it changes.
struct App<W: Write> {
    state: AppState,
    runner: EffectRunner,
    out: W,
    action_seq: u64,
}

impl<W: Write> App<W> {
    fn new(state: AppState, runner: EffectRunner, out: W) -> Self {
        Self {
            state,
            runner,
            out,
            action_seq: 0,
        }
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        self.action_seq += 1;
        set_action_seq(self.action_seq);
        dash_debug!("dispatch {:?}", msg);

        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);

        if self.state.consume_dirty() {
            self.show()?;
        }
        Ok(())
    }

    fn show(&mut self) -> io::Result<()> {
        let text = render(&self.state.view());
        self.print(&text)
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text.trim_end())?;
        self.out.flush()
    }

    /// Applies engine answers until nothing is pending or `limit` runs out.
    fn settle(&mut self, msg_rx: &mpsc::Receiver<Msg>, limit: Duration) -> io::Result<()> {
        let deadline = Instant::now() + limit;
        while self.state.pending_submissions() > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match msg_rx.recv_timeout(remaining) {
                Ok(msg) => self.dispatch(msg)?,
                Err(_) => {
                    dash_warn!(
                        "{} submission(s) still pending at exit",
                        self.state.pending_submissions()
                    );
                    break;
                }
            }
        }
        Ok(())
    }
}
