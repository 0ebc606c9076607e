//! # ArqCalc CLI Application
//!
//! Terminal front end for the ArqCalc calculators: a login gate backed by
//! the demo identity provider, then prompt-driven menus for the area
//! calculator, unit converter, and material estimator.
//!
//! Numeric prompts fall back to their defaults on unparseable input,
//! matching the app's coerce-to-number permissiveness.

use std::io::{self, BufRead, Write};

use arq_core::auth::{AuthProvider, DemoProvider, DEMO_EMAIL, DEMO_PASSWORD};
use arq_core::calculations::{bricks, geometry, paint, tiles};
use arq_core::format::{format_conversion, format_measure};
use arq_core::units::{convert_area, convert_length, AreaUnit, LengthUnit};

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    if io::stdout().flush().is_err() {
        return String::new();
    }
    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt).parse().unwrap_or(default)
}

fn main() {
    println!("ArqCalc CLI - Architecture Calculators");
    println!("======================================");
    println!();

    let provider = DemoProvider::new();
    login_gate(&provider);

    loop {
        println!();
        println!("1) Area calculator");
        println!("2) Unit converter");
        println!("3) Material estimator");
        println!("q) Log out and quit");
        match prompt_line("> ").as_str() {
            "1" => area_calculator(),
            "2" => unit_converter(),
            "3" => material_estimator(),
            "q" | "Q" => break,
            other => println!("Unknown option: {other}"),
        }
    }

    provider.logout();
    println!("Signed out. Goodbye.");
}

fn login_gate(provider: &DemoProvider) {
    println!("Sign in to continue (demo account: {DEMO_EMAIL} / {DEMO_PASSWORD})");
    loop {
        let email = prompt_line("Email: ");
        let password = prompt_line("Password: ");
        match provider.login(&email, &password) {
            Ok(user) => {
                println!();
                println!("Welcome, {}!", user.name);
                return;
            }
            Err(e) => println!("{e}"),
        }
    }
}

fn area_calculator() {
    println!();
    println!("Shape: 1) rectangle  2) triangle  3) circle");
    let result = match prompt_line("> ").as_str() {
        "1" => {
            let length = prompt_f64("Length (m) [0]: ", 0.0);
            let width = prompt_f64("Width (m) [0]: ", 0.0);
            geometry::compute_rectangle(length, width)
        }
        "2" => {
            let base = prompt_f64("Base (m) [0]: ", 0.0);
            let height = prompt_f64("Height (m) [0]: ", 0.0);
            println!("For the perimeter (leave 0 to skip):");
            let side_a = prompt_f64("Side A (m) [0]: ", 0.0);
            let side_b = prompt_f64("Side B (m) [0]: ", 0.0);
            let side_c = prompt_f64("Side C (m) [0]: ", 0.0);
            geometry::compute_triangle(base, height, side_a, side_b, side_c)
        }
        "3" => {
            let radius = prompt_f64("Radius (m) [0]: ", 0.0);
            geometry::compute_circle(radius)
        }
        other => {
            println!("Unknown shape: {other}");
            return;
        }
    };

    println!();
    println!("Area:      {} m²", format_measure(result.area));
    println!("Perimeter: {} m", format_measure(result.perimeter));
    echo_json(&result);
}

fn unit_converter() {
    println!();
    println!("Dimension: 1) length  2) area");
    match prompt_line("> ").as_str() {
        "1" => {
            print_units(&LengthUnit::ALL.map(|u| (u.symbol(), u.display_name())));
            let value = prompt_f64("Value [1]: ", 1.0);
            let from = prompt_unit_length("From unit [m]: ", LengthUnit::Meter);
            let to = prompt_unit_length("To unit [cm]: ", LengthUnit::Centimeter);
            let converted = convert_length(value, from, to);
            println!();
            println!("{} {}", format_conversion(converted), to.symbol());
        }
        "2" => {
            print_units(&AreaUnit::ALL.map(|u| (u.symbol(), u.display_name())));
            let value = prompt_f64("Value [1]: ", 1.0);
            let from = prompt_unit_area("From unit [m²]: ", AreaUnit::SquareMeter);
            let to = prompt_unit_area("To unit [ft²]: ", AreaUnit::SquareFoot);
            let converted = convert_area(value, from, to);
            println!();
            println!("{} {}", format_conversion(converted), to.symbol());
        }
        other => println!("Unknown dimension: {other}"),
    }
}

fn print_units(units: &[(&str, &str)]) {
    for (symbol, name) in units {
        println!("  {symbol:<4} {name}");
    }
}

fn prompt_unit_length(prompt: &str, default: LengthUnit) -> LengthUnit {
    let raw = prompt_line(prompt);
    if raw.is_empty() {
        return default;
    }
    match LengthUnit::from_str_flexible(&raw) {
        Ok(unit) => unit,
        Err(e) => {
            println!("{e}; using {}", default.display_name());
            default
        }
    }
}

fn prompt_unit_area(prompt: &str, default: AreaUnit) -> AreaUnit {
    let raw = prompt_line(prompt);
    if raw.is_empty() {
        return default;
    }
    match AreaUnit::from_str_flexible(&raw) {
        Ok(unit) => unit,
        Err(e) => {
            println!("{e}; using {}", default.display_name());
            default
        }
    }
}

fn material_estimator() {
    println!();
    println!("Estimator: 1) bricks/blocks  2) paint  3) tiles/floors");
    match prompt_line("> ").as_str() {
        "1" => estimate_bricks(),
        "2" => estimate_paint(),
        "3" => estimate_tiles(),
        other => println!("Unknown estimator: {other}"),
    }
}

fn estimate_bricks() {
    use arq_core::materials::BrickKind;

    for kind in BrickKind::ALL {
        println!("  {:<10} {}", kind.key(), kind.display_name());
    }
    let input = bricks::BrickInput {
        wall_length_m: prompt_f64("Wall length (m) [10]: ", 10.0),
        wall_height_m: prompt_f64("Wall height (m) [2.5]: ", 2.5),
        brick_key: {
            let raw = prompt_line("Brick type [standard]: ");
            if raw.is_empty() { "standard".to_string() } else { raw }
        },
        door_count: prompt_f64("Doors [1]: ", 1.0),
        window_count: prompt_f64("Windows [2]: ", 2.0),
    };

    let estimate = bricks::calculate(&input);
    println!();
    println!("Bricks needed: {} units", estimate.brick_count);
    println!("Mortar:        {} m³", format_measure(estimate.mortar_m3));
    echo_json(&estimate);
}

fn estimate_paint() {
    let input = paint::PaintInput {
        wall_area_m2: prompt_f64("Wall area (m²) [50]: ", 50.0),
        coats: prompt_f64("Coats [2]: ", 2.0),
        yield_m2_per_liter: prompt_f64("Paint yield (m²/L) [10]: ", 10.0),
    };

    let estimate = paint::calculate(&input);
    println!();
    println!("Paint needed: {} L", format_measure(estimate.total_liters));
    println!(
        "Cans:         {}x 18 L, {}x 3.6 L, {}x 0.9 L",
        estimate.cans_18l, estimate.cans_3_6l, estimate.cans_0_9l
    );
    echo_json(&estimate);
}

fn estimate_tiles() {
    use arq_core::materials::TileSizeKind;

    for kind in TileSizeKind::ALL {
        println!("  {:<10} {}", kind.key(), kind.display_name());
    }
    let input = tiles::TileInput {
        floor_area_m2: prompt_f64("Floor area (m²) [20]: ", 20.0),
        tile_key: {
            let raw = prompt_line("Tile size [standard]: ");
            if raw.is_empty() { "standard".to_string() } else { raw }
        },
        extra_percent: prompt_f64("Extra for cuts (%) [10]: ", 10.0),
    };

    let estimate = tiles::calculate(&input);
    println!();
    println!("Tiles needed: {} units", estimate.tile_count);
    println!("Boxes:        {}", estimate.box_count);
    echo_json(&estimate);
}

fn echo_json<T: serde::Serialize>(value: &T) {
    if let Ok(json) = serde_json::to_string_pretty(value) {
        println!();
        println!("JSON:");
        println!("{json}");
    }
}
