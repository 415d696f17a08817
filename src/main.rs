use piston_window::*;
use std::process;

mod history;
mod params;
mod tick;
mod ui;

use history::History;
use params::{RATE_RANGE, SCALE_RANGE, SimulationParameters};
use tick::{CRASH_TICK, INITIAL_TICK};
use ui::{ActionButton, MouseState, Slider};

const WINDOW_WIDTH: f64 = 1280.0;
const WINDOW_HEIGHT: f64 = 720.0;
const PANEL_WIDTH: f64 = 300.0;
const PLOT_WIDTH: f64 = WINDOW_WIDTH - PANEL_WIDTH;

const PANEL_COLOR: [f32; 4] = [0.85, 0.85, 0.85, 1.0];
const TEXT_COLOR: [f32; 4] = [0.25, 0.25, 0.25, 1.0];
const PREY_TEXT_COLOR: [f32; 4] = [0.0, 0.55, 0.1, 1.0];
const PREDATOR_TEXT_COLOR: [f32; 4] = [0.8, 0.1, 0.1, 1.0];

const SLIDER_X: f64 = 1130.0;
const SLIDER_W: f64 = 120.0;
const SLIDER_H: f64 = 18.0;

fn main() {
    let mut window: PistonWindow = WindowSettings::new(
        "Lotka-Volterra Simulation",
        [WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32],
    )
    .exit_on_esc(true)
    .build()
    .unwrap();

    let mut history = match History::new() {
        Ok(history) => history,
        Err(err) => {
            eprintln!("lotka-volterra: {err}");
            process::exit(1);
        }
    };
    let mut current = INITIAL_TICK;
    let mut params = SimulationParameters::default();

    // Load font
    let mut glyphs = {
        let font_path = std::path::Path::new("assets/FiraSans-Regular.ttf");
        if font_path.exists() {
            window.load_font(font_path).ok()
        } else {
            eprintln!("Could not load font file at {:?}", font_path);
            None
        }
    };

    let mut birth_slider = Slider::new([SLIDER_X, 150.0, SLIDER_W, SLIDER_H], RATE_RANGE);
    let mut predation_slider = Slider::new([SLIDER_X, 180.0, SLIDER_W, SLIDER_H], RATE_RANGE);
    let mut repro_slider = Slider::new([SLIDER_X, 210.0, SLIDER_W, SLIDER_H], RATE_RANGE);
    let mut death_slider = Slider::new([SLIDER_X, 240.0, SLIDER_W, SLIDER_H], RATE_RANGE);
    let mut scale_slider = Slider::new([SLIDER_X, 280.0, SLIDER_W, SLIDER_H], SCALE_RANGE);
    let mut scroll_slider = Slider::new([0.0, 0.0, WINDOW_WIDTH - 500.0, 20.0], (0.0, 0.0));
    let reset_button = ActionButton::new([1080.0, 330.0, 120.0, 24.0]);
    let crash_button = ActionButton::new([1080.0, 364.0, 120.0, 24.0]);

    let mut mouse = MouseState::default();
    let mut scroll = 0.0_f32;
    let mut scroll_max = 0.0_f32;

    while let Some(e) = window.next() {
        // Track mouse state from the raw events
        if let Some(pos) = e.mouse_cursor_args() {
            mouse.cursor = pos;
        }
        mouse.just_pressed = false;
        if let Some(Button::Mouse(MouseButton::Left)) = e.press_args() {
            mouse.down = true;
            mouse.just_pressed = true;
        }
        if let Some(Button::Mouse(MouseButton::Left)) = e.release_args() {
            mouse.down = false;
        }

        // Sliders write straight into the shared parameters; the next step
        // picks the new values up
        birth_slider.update(mouse, &mut params.birth_rate);
        predation_slider.update(mouse, &mut params.predation_rate);
        repro_slider.update(mouse, &mut params.reproduction_rate);
        death_slider.update(mouse, &mut params.death_rate);
        scale_slider.update(mouse, &mut params.scale);
        scroll_slider.update(mouse, &mut scroll);

        if reset_button.clicked(mouse) {
            current = INITIAL_TICK;
            if let Err(err) = history.reset() {
                eprintln!("lotka-volterra: {err}");
                process::exit(1);
            }
            scroll = 0.0;
            scroll_max = 0.0;
            scroll_slider.set_max(0.0);
        }
        if crash_button.clicked(mouse) {
            // Inject a population crash; the history keeps the discontinuity
            current = CRASH_TICK;
        }

        if let Some(args) = e.update_args() {
            current = current.step(&params, args.dt as f32);
            if let Err(err) = history.push(current) {
                eprintln!("lotka-volterra: {err}");
                process::exit(1);
            }

            // Extend the scroll range once the series outgrows the view
            if history.len() as f64 > PLOT_WIDTH + f64::from(scroll_max) {
                scroll_max += (PLOT_WIDTH / 2.0) as f32;
                scroll_slider.set_max(scroll_max);
            }
        }

        window.draw_2d(&e, |c, g, device| {
            clear([1.0, 1.0, 1.0, 1.0], g);

            let plot_transform = c.transform.trans(-f64::from(scroll), 0.0);
            history.draw(params.scale, WINDOW_HEIGHT, plot_transform, g);

            rectangle(
                PANEL_COLOR,
                [PLOT_WIDTH, 0.0, PANEL_WIDTH, WINDOW_HEIGHT],
                c.transform,
                g,
            );

            scroll_slider.draw(scroll, c.transform, g);
            birth_slider.draw(params.birth_rate, c.transform, g);
            predation_slider.draw(params.predation_rate, c.transform, g);
            repro_slider.draw(params.reproduction_rate, c.transform, g);
            death_slider.draw(params.death_rate, c.transform, g);
            scale_slider.draw(params.scale, c.transform, g);
            reset_button.draw(mouse, c.transform, g);
            crash_button.draw(mouse, c.transform, g);

            if let Some(ref mut glyphs) = glyphs {
                let mut draw_text =
                    |s: &str, color: [f32; 4], size: u32, pos: [f64; 2], g: &mut G2d| {
                        text::Text::new_color(color, size)
                            .draw(
                                s,
                                glyphs,
                                &c.draw_state,
                                c.transform.trans(pos[0], pos[1]),
                                g,
                            )
                            .unwrap();
                    };

                draw_text(
                    "Lotka-Volterra Simulation",
                    TEXT_COLOR,
                    20,
                    [1000.0, 40.0],
                    g,
                );
                draw_text(
                    &format!("Prey: {:.2}", current.prey),
                    PREY_TEXT_COLOR,
                    16,
                    [1010.0, 70.0],
                    g,
                );
                draw_text(
                    &format!("Predators: {:.2}", current.predators),
                    PREDATOR_TEXT_COLOR,
                    16,
                    [1010.0, 92.0],
                    g,
                );
                draw_text(
                    &format!("Buffer capacity: {}", history.capacity()),
                    TEXT_COLOR,
                    16,
                    [1010.0, 114.0],
                    g,
                );

                let labelled = [
                    (&birth_slider, "Prey birth", params.birth_rate),
                    (&predation_slider, "Predation", params.predation_rate),
                    (&repro_slider, "Reproduction", params.reproduction_rate),
                    (&death_slider, "Predator death", params.death_rate),
                    (&scale_slider, "Scale", params.scale),
                ];
                for (slider, label, value) in labelled {
                    let [_, y] = slider.value_pos();
                    draw_text(label, TEXT_COLOR, 14, [990.0, y - 3.0], g);
                    draw_text(&format!("{value:.2}"), TEXT_COLOR, 14, slider.value_pos(), g);
                }

                draw_text("reset", TEXT_COLOR, 14, reset_button.label_pos(), g);
                draw_text("crash", TEXT_COLOR, 14, crash_button.label_pos(), g);

                glyphs.factory.encoder.flush(device);
            }
        });
    }
}
