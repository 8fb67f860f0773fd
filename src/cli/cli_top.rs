//! Terminal front-end and command loop.
//!
//! Reads one command per line, drives a `GameSession`, and lets the engine
//! answer automatically when it is configured to play the side to move.

use std::fs;
use std::io::{self, BufRead, Write};

use crate::cli::play_config::{parse_setoption, PlayConfig};
use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::session::game_session::{GameSession, MoveOutcome, SelectOutcome, SessionPhase};
use crate::utils::algebraic::{algebraic_to_square, long_algebraic_to_squares};
use crate::utils::render_game_state::render_game_state;
use crate::utils::snapshot_text::{read_snapshot, write_snapshot};

const HELP_LINES: &[&str] = &[
    "new <white> <black>   start a game (black named 'ai' is played by the engine)",
    "select <square>       pick an origin, then a destination",
    "move <from> <to>      move directly; 'e2e4' also works",
    "moves                 list legal moves for the side to move",
    "board                 print the board",
    "snapshot              print the saved-game text",
    "save <file>           write the saved-game text to a file",
    "load <file>           resume a game from a file",
    "go                    let the engine move for the side to move",
    "setoption name <Opponent|Seed> value <v>",
    "debug <on|off>        show engine info lines",
    "quit",
];

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut cli = CliState::new();

    writeln!(stdout, "hotseat chess; type 'help' for commands")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = cli.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct CliState {
    session: Option<GameSession>,
    engine: Box<dyn Engine>,
    config: PlayConfig,
}

impl CliState {
    fn new() -> Self {
        Self {
            session: None,
            engine: Box::new(GreedyEngine::new()),
            config: PlayConfig::default(),
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let result = match cmd {
            "help" => {
                for help in HELP_LINES {
                    writeln!(out, "{}", help)?;
                }
                Ok(())
            }
            "new" => self.handle_new(&args, out),
            "select" => self.handle_select(&args, out),
            "move" => self.handle_move(&args, out),
            "moves" => self.handle_moves(out),
            "board" => self.handle_board(out),
            "snapshot" => self.handle_snapshot(out),
            "save" => self.handle_save(&args, out),
            "load" => self.handle_load(&args, out),
            "go" => self.handle_go(out),
            "setoption" => self.handle_setoption(trimmed, out),
            "debug" => {
                let mode = args.first().copied().unwrap_or_default();
                self.config.debug_mode = mode.eq_ignore_ascii_case("on");
                Ok(())
            }
            "quit" | "exit" => return Ok(true),
            _ if long_algebraic_to_squares(cmd).is_ok() => self.handle_move(&[cmd], out),
            _ => Err(format!("unknown command '{}'", cmd)),
        };

        if let Err(err) = result {
            writeln!(out, "info string {} error: {}", cmd, err)?;
        }

        Ok(false)
    }

    fn session(&self) -> Result<&GameSession, String> {
        self.session
            .as_ref()
            .ok_or_else(|| "no game in progress; use 'new <white> <black>'".to_owned())
    }

    fn session_mut(&mut self) -> Result<&mut GameSession, String> {
        self.session
            .as_mut()
            .ok_or_else(|| "no game in progress; use 'new <white> <black>'".to_owned())
    }

    fn handle_new(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), String> {
        let [white_name, black_name] = args else {
            return Err("usage: new <white> <black>".to_owned());
        };
        let session = GameSession::new_game(white_name, black_name).map_err(|e| e.to_string())?;
        self.start_session(session, out)
    }

    fn handle_load(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), String> {
        let [path] = args else {
            return Err("usage: load <file>".to_owned());
        };
        let text = fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
        let snapshot = read_snapshot(&text)?;
        let session = GameSession::load_game(&snapshot).map_err(|e| e.to_string())?;
        self.start_session(session, out)
    }

    fn start_session(&mut self, session: GameSession, out: &mut impl Write) -> Result<(), String> {
        self.engine.new_game();
        self.apply_engine_seed()?;
        self.session = Some(session);
        self.handle_board(out)?;
        self.write_turn(out)?;
        self.play_engine_turn(out)
    }

    fn handle_select(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), String> {
        let [square] = args else {
            return Err("usage: select <square>".to_owned());
        };
        let square = algebraic_to_square(square)?;
        let outcome = self.session_mut()?.select(square).map_err(|e| e.to_string())?;
        match outcome {
            SelectOutcome::OriginSelected(origin) => {
                writeln!(out, "selected {}", origin).map_err(|e| e.to_string())
            }
            SelectOutcome::MoveAttempted(outcome) => self.report_outcome(outcome, out),
        }
    }

    fn handle_move(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), String> {
        let (from, to) = match args {
            [lan] => long_algebraic_to_squares(lan)?,
            [from, to] => (algebraic_to_square(from)?, algebraic_to_square(to)?),
            _ => return Err("usage: move <from> <to>".to_owned()),
        };
        let outcome = self
            .session_mut()?
            .apply_move(from, to)
            .map_err(|e| e.to_string())?;
        self.report_outcome(outcome, out)
    }

    fn handle_moves(&mut self, out: &mut impl Write) -> Result<(), String> {
        let session = self.session()?;
        let moves = generate_legal_moves(session.state(), session.turn());
        if moves.is_empty() {
            return writeln!(out, "moves: (none)").map_err(|e| e.to_string());
        }
        let listed: Vec<String> = moves.iter().map(|mv| mv.to_string()).collect();
        writeln!(out, "moves: {}", listed.join(" ")).map_err(|e| e.to_string())
    }

    fn handle_board(&mut self, out: &mut impl Write) -> Result<(), String> {
        let session = self.session()?;
        let marked = match session.phase() {
            SessionPhase::AwaitingDestination(origin) => Some(origin),
            _ => None,
        };
        writeln!(out, "{}", render_game_state(session.state(), marked)).map_err(|e| e.to_string())
    }

    fn handle_snapshot(&mut self, out: &mut impl Write) -> Result<(), String> {
        let text = write_snapshot(&self.session()?.snapshot());
        write!(out, "{}", text).map_err(|e| e.to_string())
    }

    fn handle_save(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), String> {
        let [path] = args else {
            return Err("usage: save <file>".to_owned());
        };
        let text = write_snapshot(&self.session()?.snapshot());
        fs::write(path, text).map_err(|e| format!("{}: {}", path, e))?;
        writeln!(out, "saved {}", path).map_err(|e| e.to_string())
    }

    fn handle_go(&mut self, out: &mut impl Write) -> Result<(), String> {
        self.play_one_engine_move(out)
    }

    fn handle_setoption(&mut self, line: &str, out: &mut impl Write) -> Result<(), String> {
        let (name, value) = parse_setoption(line)?;
        self.config.set_option(&name, &value)?;
        if name.eq_ignore_ascii_case("Seed") {
            self.apply_engine_seed()?;
        }
        if self.session.is_some() {
            self.play_engine_turn(out)?;
        }
        Ok(())
    }

    fn apply_engine_seed(&mut self) -> Result<(), String> {
        let seed = match self.config.engine_seed {
            Some(seed) => seed.to_string(),
            None => "random".to_owned(),
        };
        self.engine.set_option("Seed", &seed)
    }

    /// Side the engine plays in the current game, from the configured
    /// opponent and the current Black name. Never written back to the config.
    fn engine_color(&self) -> Option<Color> {
        let session = self.session.as_ref()?;
        let black = session.state().player(Color::Black).name();
        self.config.engine_color_for_names(black)
    }

    /// Engine answers when it is configured to play the side to move.
    fn play_engine_turn(&mut self, out: &mut impl Write) -> Result<(), String> {
        let engine_to_move = match &self.session {
            Some(session) => !session.is_over() && self.engine_color() == Some(session.turn()),
            None => false,
        };
        if engine_to_move {
            self.play_one_engine_move(out)?;
        }
        Ok(())
    }

    fn play_one_engine_move(&mut self, out: &mut impl Write) -> Result<(), String> {
        let Some(session) = self.session.as_mut() else {
            return Err("no game in progress; use 'new <white> <black>'".to_owned());
        };
        let mover = session.turn();
        let played = session
            .play_engine_move(self.engine.as_mut())
            .map_err(|e| e.to_string())?;

        match played {
            Some((outcome, output)) => {
                self.write_info_lines(&output, out)?;
                self.report_outcome(outcome, out)
            }
            None => {
                let name = session.state().player(mover).name().to_owned();
                self.session = None;
                writeln!(out, "game over: {} has no legal move", name).map_err(|e| e.to_string())
            }
        }
    }

    fn report_outcome(&mut self, outcome: MoveOutcome, out: &mut impl Write) -> Result<(), String> {
        match outcome {
            MoveOutcome::Moved(mv) => {
                writeln!(out, "moved {}", mv).map_err(|e| e.to_string())?;
                if let (true, Some(kind)) = (self.config.debug_mode, mv.captured_kind()) {
                    writeln!(out, "info string captured {}", kind.name())
                        .map_err(|e| e.to_string())?;
                }
                self.write_turn(out)?;
                self.play_engine_turn(out)
            }
            MoveOutcome::Rejected(reason) => {
                writeln!(out, "rejected").map_err(|e| e.to_string())?;
                if self.config.debug_mode {
                    writeln!(out, "info string rejected: {}", reason).map_err(|e| e.to_string())?;
                }
                Ok(())
            }
            MoveOutcome::GameOver {
                winner,
                winning_move,
            } => {
                writeln!(out, "moved {}", winning_move).map_err(|e| e.to_string())?;
                let name = self.session()?.state().player(winner).name().to_owned();
                writeln!(out, "game over: {} wins", name).map_err(|e| e.to_string())
            }
        }
    }

    fn write_turn(&self, out: &mut impl Write) -> Result<(), String> {
        let player = self.session()?.state().current_player();
        writeln!(out, "turn: {} - {}", player.name(), player.color().name())
            .map_err(|e| e.to_string())
    }

    fn write_info_lines(&self, output: &EngineOutput, out: &mut impl Write) -> Result<(), String> {
        if self.config.debug_mode {
            for info in &output.info_lines {
                writeln!(out, "{}", info).map_err(|e| e.to_string())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::CliState;
    use crate::game_state::chess_types::Color;
    use crate::game_state::snapshot::Snapshot;
    use crate::session::game_session::GameSession;

    fn run(cli: &mut CliState, commands: &[&str]) -> String {
        let mut out = Vec::<u8>::new();
        for cmd in commands {
            cli.handle_command(cmd, &mut out)
                .expect("writing to a Vec should not fail");
        }
        String::from_utf8(out).expect("output should be utf-8")
    }

    fn load(cli: &mut CliState, position: &str) {
        let snapshot =
            Snapshot::from_position(position, "ada", "bob").expect("test position should parse");
        cli.session = Some(GameSession::load_game(&snapshot).expect("test position should load"));
    }

    #[test]
    fn commands_need_a_game() {
        let mut cli = CliState::new();
        let text = run(&mut cli, &["board", "e2e4"]);
        assert!(text.contains("info string board error: no game in progress"));
        assert!(text.contains("info string e2e4 error: no game in progress"));
    }

    #[test]
    fn hotseat_moves_and_rejections() {
        let mut cli = CliState::new();
        let text = run(&mut cli, &["new ada bob", "e2e4", "move a7 b5", "select a7", "select a5"]);
        assert!(text.contains("turn: ada - WHITE"));
        assert!(text.contains("moved e2e4"));
        assert!(text.contains("turn: bob - BLACK"));
        assert!(text.contains("rejected"));
        assert!(text.contains("selected a7"));
        assert!(text.contains("moved a7a5"));

        let session = cli.session.as_ref().expect("game is running");
        assert_eq!(session.turn(), Color::White);
    }

    #[test]
    fn rejection_reason_only_in_debug() {
        let mut cli = CliState::new();
        let quiet = run(&mut cli, &["new ada bob", "e2e5"]);
        assert!(!quiet.contains("info string rejected"));

        let loud = run(&mut cli, &["debug on", "e2e5"]);
        assert!(loud.contains("info string rejected: piece cannot move that way"));
    }

    #[test]
    fn duplicate_names_report_an_error() {
        let mut cli = CliState::new();
        let text = run(&mut cli, &["new ada ada"]);
        assert!(text.contains("info string new error: both players are named 'ada'"));
        assert!(cli.session.is_none());
    }

    #[test]
    fn ai_opponent_answers_automatically() {
        let mut cli = CliState::new();
        let text = run(&mut cli, &["setoption name Seed value 5", "new ada ai", "d2d4"]);

        assert_eq!(cli.engine_color(), Some(Color::Black));
        assert_eq!(cli.config.engine_color, None);
        assert_eq!(text.matches("moved ").count(), 2);
        let session = cli.session.as_ref().expect("game is running");
        assert_eq!(session.turn(), Color::White);
    }

    #[test]
    fn ai_name_does_not_carry_into_next_game() {
        let mut cli = CliState::new();
        run(&mut cli, &["new ada ai"]);
        assert_eq!(cli.engine_color(), Some(Color::Black));

        let text = run(&mut cli, &["new cy dee", "e2e4"]);
        assert_eq!(cli.engine_color(), None);
        assert_eq!(text.matches("moved ").count(), 1);
        let session = cli.session.as_ref().expect("game is running");
        assert_eq!(session.turn(), Color::Black);
    }

    #[test]
    fn configured_seed_makes_engine_replies_repeatable() {
        let commands = ["setoption name Seed value 11", "new ada ai", "e2e4", "d2d4", "g1f3"];
        let first = run(&mut CliState::new(), &commands);
        let second = run(&mut CliState::new(), &commands);
        assert_eq!(first.matches("moved ").count(), 6);
        assert_eq!(first, second);
    }

    #[test]
    fn engine_playing_white_opens() {
        let mut cli = CliState::new();
        let text = run(
            &mut cli,
            &["setoption name Opponent value white", "setoption name Seed value 3", "new ada bob"],
        );
        assert_eq!(cli.config.engine_seed, Some(3));
        assert_eq!(text.matches("moved ").count(), 1);
        assert_eq!(
            cli.session.as_ref().expect("game is running").turn(),
            Color::Black
        );
    }

    #[test]
    fn king_capture_ends_game() {
        let mut cli = CliState::new();
        load(&mut cli, "4k3/8/8/8/8/8/8/4R1K1 w");
        let text = run(&mut cli, &["e1e8", "e8e7"]);
        assert!(text.contains("moved e1e8"));
        assert!(text.contains("game over: ada wins"));
        assert!(text.contains("info string e8e7 error: game is already over"));
    }

    #[test]
    fn engine_without_moves_ends_game() {
        let mut cli = CliState::new();
        load(&mut cli, "4k3/8/8/8/8/4p3/4P3/8 w");
        let text = run(&mut cli, &["go"]);
        assert!(text.contains("game over: ada has no legal move"));
        assert!(cli.session.is_none());
    }

    #[test]
    fn moves_lists_legal_moves() {
        let mut cli = CliState::new();
        let text = run(&mut cli, &["new ada bob", "moves"]);
        let line = text
            .lines()
            .find(|line| line.starts_with("moves: "))
            .expect("moves line is printed");
        assert_eq!(line.split_whitespace().count(), 21);
    }

    #[test]
    fn save_and_load_resume_game() {
        let path = std::env::temp_dir().join("hotseat_chess_cli_save_test.txt");
        let path_text = path.to_string_lossy().into_owned();

        let mut cli = CliState::new();
        let save_cmd = format!("save {}", path_text);
        run(&mut cli, &["new ada bob", "e2e4", &save_cmd]);

        let mut resumed = CliState::new();
        let load_cmd = format!("load {}", path_text);
        let text = run(&mut resumed, &[&load_cmd]);
        let _ = std::fs::remove_file(&path);

        assert!(text.contains("turn: bob - BLACK"));
        let session = resumed.session.as_ref().expect("game was loaded");
        assert_eq!(session.state().player(Color::White).name(), "ada");
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut cli = CliState::new();
        let mut out = Vec::<u8>::new();
        assert!(cli.handle_command("quit", &mut out).expect("write ok"));
        assert!(!cli.handle_command("help", &mut out).expect("write ok"));
    }
}
