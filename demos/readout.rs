//! Console walkthrough: loads each preset, recalculates, and prints every
//! equation form plus the scalar readouts.

use linealis::session::{Session, PRESETS};

fn main() -> linealis::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let mut session = Session::new();
    for preset in &PRESETS {
        session.load_preset(preset);
        let result = session.recalculate()?;
        let texts = &result.texts;

        println!("── {} ──", preset.label);
        println!("  slope: {}  angle: {}", texts.slope, texts.angle);
        println!(
            "  x-intercept: {}  y-intercept: {}",
            texts.x_intercept, texts.y_intercept
        );
        println!(
            "  direction: {}  normal: {}",
            texts.direction_vector, texts.normal_vector
        );
        println!("  slope-intercept: {}", texts.slope_intercept);
        println!("  point-slope:     {}", texts.point_slope);
        println!("  two-point:       {}", texts.two_points);
        println!("  intercept:       {}", texts.intercept);
        println!("  point-direction: {}", texts.point_direction);
        println!("  point-normal:    {}", texts.point_normal);
        println!("  general:         {}", texts.general);
        println!("  plotted points:  {}", result.artifacts.line_points.len());
        println!();
    }
    Ok(())
}
