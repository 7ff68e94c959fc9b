//! SVG progress plot: average score (left axis) and diversity (right axis)
//! per round.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use sx_selex::RoundRecord;

pub fn plot_progress(history: &[RoundRecord], path: &Path) -> Result<(), Box<dyn Error>> {
    if history.is_empty() {
        return Err("cannot plot an empty round history".into());
    }

    let rounds = 0.5..(history.len() as f64 + 0.5);
    let max_score = history.iter().map(|r| r.avg_score).fold(0.0, f64::max);
    let max_diversity = history.iter().map(|r| r.diversity).max().unwrap_or(1);

    let root = SVGBackend::new(path, (800, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("SELEX Progression", ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d(rounds.clone(), 0.0..(max_score * 1.1).max(0.1))?
        .set_secondary_coord(rounds, 0.0..(max_diversity as f64 * 1.1).max(1.0));

    chart.configure_mesh()
        .x_desc("SELEX Round")
        .y_desc("Binding Score")
        .x_labels(history.len().min(20))
        .draw()?;
    chart.configure_secondary_axes()
        .y_desc("Sequence Diversity")
        .draw()?;

    chart.draw_series(LineSeries::new(
            history.iter().map(|r| (r.round as f64, r.avg_score)),
            &BLUE,
        ))?
        .label("Binding Score")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart.draw_series(history.iter()
        .map(|r| Circle::new((r.round as f64, r.avg_score), 4, BLUE.filled())))?;

    chart.draw_secondary_series(LineSeries::new(
            history.iter().map(|r| (r.round as f64, r.diversity as f64)),
            RED.stroke_width(2),
        ))?
        .label("Diversity")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    chart.draw_secondary_series(history.iter()
        .map(|r| Rectangle::new(
            [(r.round as f64 - 0.05, r.diversity as f64 - 0.5), (r.round as f64 + 0.05, r.diversity as f64 + 0.5)],
            RED.filled(),
        )))?;

    chart.configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
