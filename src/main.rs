// src/main.rs
use nannou::prelude::*;
use rand::Rng;
use std::time::Instant;

use turtlevis::{
    animation::Ticker,
    config::{Config, WanderConfig},
    controllers::{OscCommand, OscController, OscSender},
    draw::WindowSurface,
    models::ScriptLibrary,
    render::TurtleRenderer,
    services::run_script,
    views::Turtle,
};

struct Model {
    // Core components:
    turtle: Turtle,
    renderer: TurtleRenderer<WindowSurface>,
    ticker: Ticker,
    scripts: ScriptLibrary,

    // Comms components:
    osc_controller: OscController,
    osc_sender: OscSender,

    // Wander mode:
    random: rand::rngs::ThreadRng,
    wander: WanderConfig,
    wander_enabled: bool,
    wander_bound: f32,

    // Frame timing:
    last_update: Instant,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Load the script library
    let script_path = config.resolve_script_path();
    let scripts = ScriptLibrary::load(script_path).expect("Failed to load script file");

    // Create OSC controller
    let osc_controller =
        OscController::new(config.osc.rx_port).expect("Failed to create OSC Controller");
    let osc_sender = OscSender::new(config.osc.rx_port).expect("Failed to create OSC Sender");

    // Create window
    app.new_window()
        .title("turtlevis 0.2.1")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    let width = config.window.width as f32;
    let height = config.window.height as f32;
    let surface = WindowSurface::new(width, height);

    // wandering turns around before it walks off the canvas
    let wander_bound = 0.4 * width.min(height);

    Model {
        turtle: Turtle::new(),
        renderer: TurtleRenderer::new(surface),
        ticker: Ticker::new(config.render.tick_interval),
        scripts,

        osc_controller,
        osc_sender,

        random: rand::thread_rng(),
        wander: config.wander,
        wander_enabled: false,
        wander_bound,

        last_update: Instant::now(),
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        // manual driving
        Key::Up => model.osc_sender.send_move(50.0),
        Key::Down => model.osc_sender.send_move(-50.0),
        Key::Left => model.osc_sender.send_turn(-90.0),
        Key::Right => model.osc_sender.send_turn(90.0),
        // jump to center without clearing the trace
        Key::C => model.osc_sender.send_set_pos(0.0, 0.0),
        // face north again
        Key::N => model.osc_sender.send_set_bearing(0.0),

        // scripted figures
        Key::Key1 => model.osc_sender.send_script("square"),
        Key::Key2 => model.osc_sender.send_script("hexagon"),
        Key::Key3 => model.osc_sender.send_script("star"),

        Key::H => model.osc_sender.send_reset(),

        /***************** Below functions aren't wired through OSC ****************/
        Key::W => {
            model.wander_enabled = !model.wander_enabled;
            println!(
                "Wander mode {}",
                if model.wander_enabled { "on" } else { "off" }
            );
        }
        Key::P => {
            let report = model.turtle.history();
            if report.headings.is_empty() {
                println!("No travel recorded yet");
            }
            for (heading, length) in report.headings.iter().zip(report.lengths.iter()) {
                println!("{:>4} deg : {:.1} units", heading, length);
            }
        }
        _ => (),
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let dt = (now - model.last_update).as_secs_f32();
    model.last_update = now;

    // Process OSC messages
    model.osc_controller.process_messages();
    launch_commands(model);

    // Keep the turtle busy in wander mode
    if model.wander_enabled && !model.turtle.is_animating() {
        wander_step(model);
    }

    /******************* Main update: drain due animation ticks *******************/
    for _ in 0..model.ticker.due_ticks(dt) {
        model.renderer.draw_frame(&mut model.turtle);
    }
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(WHITE);

    model.renderer.surface().present(&draw);

    draw.to_frame(app, &frame).unwrap();
}

// ******************************* Wander Mode *******************************

fn wander_step(model: &mut Model) {
    let length = model
        .random
        .gen_range(model.wander.min_length..=model.wander.max_length);

    let position = model.turtle.position();
    if position.x.abs() > model.wander_bound || position.y.abs() > model.wander_bound {
        // near the edge: swing back toward the center first
        let home_bearing = (-position.x).atan2(-position.y).to_degrees();
        model.turtle.set_bearing(home_bearing).move_by(length);
    } else {
        let degrees = model
            .random
            .gen_range(-model.wander.max_turn..=model.wander.max_turn);
        model.turtle.turn(degrees).move_by(length);
    }
}

// ******************************* OSC Launcher *******************************

fn launch_commands(model: &mut Model) {
    for command in model.osc_controller.take_commands() {
        match command {
            OscCommand::Turn { degrees } => {
                model.turtle.turn(degrees);
            }
            OscCommand::Move { length } => {
                model.turtle.move_by(length);
            }
            OscCommand::SetPos { x, y } => {
                model.turtle.set_pos(x, y);
            }
            OscCommand::SetBearing { degrees } => {
                model.turtle.set_bearing(degrees);
            }
            OscCommand::Reset => {
                model.renderer.reset(&mut model.turtle);
            }
            OscCommand::RunScript { name } => match model.scripts.get_script(&name) {
                Some(script) => {
                    // each figure starts from a clean slate, like reset
                    model.renderer.reset(&mut model.turtle);
                    let applied = run_script(&mut model.turtle, &script.commands);
                    println!("Script '{}': {} commands queued", name, applied);
                }
                None => {
                    println!(
                        "Unknown script: '{}' (available: {:?})",
                        name,
                        model.scripts.script_names()
                    );
                }
            },
        }
    }
}
