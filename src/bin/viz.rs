use std::time::{Duration, Instant};

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use projectile_sim::config::AnimationConfig;
use projectile_sim::io::input::LaunchText;
use projectile_sim::sim::{StepResult, TrajectoryStepper};
use projectile_sim::types::SimConfig;

fn main() -> eframe::Result {
    let tick = Duration::from_millis(AnimationConfig::default().tick_ms);
    let app = FlightViz::new(tick);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native("Projectile Flight", options, Box::new(|_| Ok(Box::new(app))))
}

/// A run in progress, advanced one step per tick.
struct Animation {
    stepper: TrajectoryStepper,
    points: Vec<[f64; 2]>,
    last_tick: Instant,
}

struct FlightViz {
    text: LaunchText,
    tick: Duration,
    animation: Option<Animation>,
    status: String,
}

impl FlightViz {
    fn new(tick: Duration) -> Self {
        Self {
            text: LaunchText {
                speed: "20".into(),
                angle_degrees: "45".into(),
                time_step: "0.01".into(),
                mass: "1".into(),
                drag: "0.1".into(),
            },
            tick,
            animation: None,
            status: String::new(),
        }
    }

    fn launch(&mut self) {
        self.status.clear();
        let started = self
            .text
            .parse()
            .and_then(|params| TrajectoryStepper::new(params, SimConfig::default()));
        match started {
            Ok(stepper) => {
                self.animation = Some(Animation {
                    points: vec![[0.0, 0.0]],
                    stepper,
                    last_tick: Instant::now(),
                });
            }
            Err(err) => {
                self.animation = None;
                self.status = format!("Input error: {err}");
            }
        }
    }

    fn advance(&mut self) {
        let Some(anim) = self.animation.as_mut() else {
            return;
        };
        if anim.stepper.is_ended() || anim.last_tick.elapsed() < self.tick {
            return;
        }
        anim.last_tick = Instant::now();

        let mut landed = |message: &str| self.status = message.to_string();
        match anim.stepper.step_with(&mut landed) {
            Ok(StepResult::InFlight(s)) | Ok(StepResult::Landed(s)) => anim.points.push([s.x, s.y]),
            Ok(StepResult::Ended) => {}
            Err(err) => {
                self.status = err.to_string();
                self.animation = None;
            }
        }
    }
}

impl eframe::App for FlightViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance();

        egui::TopBottomPanel::top("inputs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (label, field) in [
                    ("Speed (m/s)", &mut self.text.speed),
                    ("Angle (deg)", &mut self.text.angle_degrees),
                    ("dt (s)", &mut self.text.time_step),
                    ("Mass (kg)", &mut self.text.mass),
                    ("Drag", &mut self.text.drag),
                ] {
                    ui.label(label);
                    ui.add(egui::TextEdit::singleline(field).desired_width(60.0));
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Launch").clicked() {
                    self.launch();
                }
                if let Some(anim) = &self.animation {
                    let s = anim.stepper.sample();
                    ui.label(format!("t = {:.2} s   x = {:.2} m   y = {:.2} m", s.time, s.x, s.y));
                }
                if !self.status.is_empty() {
                    ui.label(self.status.as_str());
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let points: PlotPoints = self
                .animation
                .as_ref()
                .map_or_else(Vec::new, |a| a.points.clone())
                .into_iter()
                .collect();
            Plot::new("trajectory")
                .x_axis_label("Downrange (m)")
                .y_axis_label("Height (m)")
                .data_aspect(1.0)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Trajectory", points));
                });
        });

        if self.animation.as_ref().is_some_and(|a| !a.stepper.is_ended()) {
            ctx.request_repaint_after(self.tick);
        }
    }
}
