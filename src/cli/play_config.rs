//! Runtime settings for the terminal front-end.

use crate::game_state::chess_types::Color;

/// Player name that hands the Black side to the engine on `new`.
pub const ENGINE_PLAYER_NAME: &str = "ai";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayConfig {
    /// Side the engine plays automatically, if any.
    pub engine_color: Option<Color>,
    /// `None` draws tie-breaks from the thread RNG.
    pub engine_seed: Option<u64>,
    pub debug_mode: bool,
}

impl PlayConfig {
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        if name.eq_ignore_ascii_case("Opponent") {
            self.engine_color = match value.to_ascii_lowercase().as_str() {
                "white" => Some(Color::White),
                "black" => Some(Color::Black),
                "off" | "none" => None,
                _ => return Err(format!("invalid Opponent value '{}'", value)),
            };
        } else if name.eq_ignore_ascii_case("Seed") {
            self.engine_seed = if value.eq_ignore_ascii_case("random") {
                None
            } else {
                Some(
                    value
                        .parse::<u64>()
                        .map_err(|_| format!("invalid Seed value '{}'", value))?,
                )
            };
        } else {
            return Err(format!("unknown option '{}'", name));
        }
        Ok(())
    }

    /// Engine takes Black when that player is literally named "ai".
    pub fn engine_color_for_names(&self, black_name: &str) -> Option<Color> {
        if black_name.eq_ignore_ascii_case(ENGINE_PLAYER_NAME) {
            Some(Color::Black)
        } else {
            self.engine_color
        }
    }
}

/// Split `setoption name <name...> value <value...>` into its two parts.
pub fn parse_setoption(line: &str) -> Result<(String, String), String> {
    let mut tokens = line.split_whitespace();
    let _ = tokens.next(); // setoption

    let mut name_tokens = Vec::<&str>::new();
    let mut value_tokens = Vec::<&str>::new();
    let mut mode = "";

    for tok in tokens {
        match tok {
            "name" => mode = "name",
            "value" => mode = "value",
            _ if mode == "name" => name_tokens.push(tok),
            _ if mode == "value" => value_tokens.push(tok),
            _ => {}
        }
    }

    if name_tokens.is_empty() {
        return Err("missing option name".to_owned());
    }
    Ok((name_tokens.join(" "), value_tokens.join(" ")))
}
