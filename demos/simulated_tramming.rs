//! Simulated tramming example.
//!
//! Runs a full center-reference session against a simulated printer whose
//! bed is tilted, using the G-code backend. Every script line the session
//! sends is interpreted by a tiny simulator.

use bed_tramming::{
    motion::gcode::ScriptRunner, Command, Console, GcodeToolhead, ToolheadPosition,
    TrammingConfig, TrammingSession,
};

/// Console that prints straight to stdout.
struct Stdout;

impl Console for Stdout {
    fn respond_info(&mut self, msg: &str) {
        println!("// {}", msg);
    }
}

/// Bed surface as a plane: z = offset + slope_x * x + slope_y * y.
struct Bed {
    offset: f64,
    slope_x: f64,
    slope_y: f64,
}

impl Bed {
    fn height_at(&self, x: f64, y: f64) -> f64 {
        self.offset + self.slope_x * x + self.slope_y * y
    }
}

/// Printer simulator interpreting the handful of commands the session uses.
struct SimulatedPrinter {
    bed: Bed,
    position: [f64; 3],
    relative: bool,
    lines: usize,
}

impl SimulatedPrinter {
    fn new(bed: Bed) -> Self {
        Self {
            bed,
            position: [0.0, 0.0, 30.0],
            relative: false,
            lines: 0,
        }
    }

    fn linear_move(&mut self, words: &[&str]) -> Result<(), String> {
        for word in words {
            let (letter, value) = word.split_at(1);
            let value: f64 = value
                .parse()
                .map_err(|_| format!("bad word '{}'", word))?;
            let axis = match letter {
                "X" => 0,
                "Y" => 1,
                "Z" => 2,
                "F" => continue,
                _ => return Err(format!("unsupported word '{}'", word)),
            };
            if self.relative {
                self.position[axis] += value;
            } else {
                self.position[axis] = value;
            }
        }
        Ok(())
    }
}

impl ScriptRunner for SimulatedPrinter {
    type Error = String;

    fn run_script(&mut self, script: &str) -> Result<(), String> {
        self.lines += 1;
        let words: Vec<&str> = script.split_whitespace().collect();
        match words.as_slice() {
            ["G90"] => self.relative = false,
            ["G91"] => self.relative = true,
            ["G1", rest @ ..] => self.linear_move(rest)?,
            ["PROBE"] => {
                let [x, y, _] = self.position;
                self.position[2] = self.bed.height_at(x, y);
            }
            _ => return Err(format!("unknown command '{}'", script)),
        }
        Ok(())
    }

    fn wait_moves(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn position(&mut self) -> Result<ToolheadPosition, String> {
        let [x, y, z] = self.position;
        Ok(ToolheadPosition::new(x, y, z))
    }
}

fn main() {
    println!("=== Simulated Tramming Example ===\n");

    // Bed sagging toward the back right corner
    let bed = Bed {
        offset: 0.35,
        slope_x: -0.0004,
        slope_y: -0.0003,
    };

    let config = match bed_tramming::parse_config(
        r#"
screw_pitch = 0.8
samples = 3
lift_height = 10.0
"#,
    ) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return;
        }
    };
    print_config(&config);

    let machine = GcodeToolhead::new(SimulatedPrinter::new(bed));
    let mut session = match TrammingSession::new(config, machine, Stdout) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Session error: {}", e);
            return;
        }
    };

    // Screws first: refused until the center is known
    match session.run(Command::ProbeAllScrews) {
        Ok(_) => println!("unexpected: sweep ran without a reference"),
        Err(e) => println!("!! {}\n", e),
    }

    for name in ["PROBE_CENTER", "PROBE_ALL_SCREWS"] {
        let Some(command) = Command::from_name(name) else {
            continue;
        };
        println!("> {}", name);
        if let Err(e) = session.run(command) {
            eprintln!("!! {}", e);
            return;
        }
        println!();
    }

    let (machine, _) = session.into_parts();
    println!("Simulator executed {} script lines", machine.runner().lines);
    println!("\n=== Example Complete ===");
}

fn print_config(config: &TrammingConfig) {
    println!("Configuration:");
    println!("  Screw pitch: {} mm/turn", config.screw_pitch.0);
    println!("  Samples:     {}", config.samples);
    println!("  Lift height: {} mm", config.lift_height.0);
    println!("  Travel:      {} mm/min", config.probe_speed.0);
    for (_, pos) in config.targets.iter() {
        println!("  {:<13} X{:.1} Y{:.1}", pos.label.as_str(), pos.x.0, pos.y.0);
    }
    println!();
}
