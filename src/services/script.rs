// src/services/script.rs
// parsing and playback of turtle command scripts

use std::str::FromStr;

use crate::views::Turtle;

// supported verbs: move/forward/backward, turn/left/right,
// setbearing, the two-argument setpos, and the bare reset
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Turn(f32),
    Move(f32),
    SetPos(f32, f32),
    SetBearing(f32),
    Reset,
}

pub fn parse_command(line: &str) -> Option<ScriptCommand> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    // reset takes no argument, so it never reaches the argument regex
    if line == "reset" {
        return Some(ScriptCommand::Reset);
    }

    let re = regex::Regex::new(r"^([a-z]+)\s+([-\d.]+)(?:[\s,]+([-\d.]+))?$").ok()?;
    let caps = re.captures(line)?;

    let first = f32::from_str(&caps[2]).ok()?;
    match &caps[1] {
        "move" | "forward" => Some(ScriptCommand::Move(first)),
        "backward" => Some(ScriptCommand::Move(-first)),
        "turn" | "right" => Some(ScriptCommand::Turn(first)),
        "left" => Some(ScriptCommand::Turn(-first)),
        "setbearing" => Some(ScriptCommand::SetBearing(first)),
        "setpos" => {
            let second = f32::from_str(caps.get(3)?.as_str()).ok()?;
            Some(ScriptCommand::SetPos(first, second))
        }
        _ => None,
    }
}

pub fn apply_command(turtle: &mut Turtle, command: &ScriptCommand) {
    match command {
        ScriptCommand::Turn(degrees) => {
            turtle.turn(*degrees);
        }
        ScriptCommand::Move(length) => {
            turtle.move_by(*length);
        }
        ScriptCommand::SetPos(x, y) => {
            turtle.set_pos(*x, *y);
        }
        ScriptCommand::SetBearing(degrees) => {
            turtle.set_bearing(*degrees);
        }
        // engine half only: the surface wipe belongs to the renderer,
        // which hosts already reset before playing a script
        ScriptCommand::Reset => {
            turtle.reset();
        }
    }
}

/// Parse and enqueue every line of a script in order.
/// Returns how many commands were applied; lines that do not parse are
/// skipped with a notice so one typo cannot kill a whole script.
pub fn run_script(turtle: &mut Turtle, commands: &[String]) -> usize {
    let mut applied = 0;
    for line in commands {
        match parse_command(line) {
            Some(command) => {
                apply_command(turtle, &command);
                applied += 1;
            }
            None => println!("Skipping unrecognized script line: '{}'", line),
        }
    }
    applied
}
