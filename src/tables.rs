use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{
        annual_yield::AnnualYield,
        estimator::PowerEstimator,
        series::{PowerSeries, SeriesSummary, WindSamples},
        turbine::PowerCurve,
    },
    fmt::FormattedPercentage,
    quantity::{
        energy::KilowattHours,
        power::{Kilowatts, Watts},
        speed::MetersPerSecond,
    },
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn power_cell(power: Watts, rated_power: Watts) -> Cell {
    Cell::new(format!("{:.1}", Kilowatts::from(power))).set_alignment(CellAlignment::Right).fg(
        if power <= Watts::ZERO {
            Color::DarkGrey
        } else if power >= rated_power {
            Color::Green
        } else {
            Color::Reset
        },
    )
}

fn optional_percentage(proportion: Option<f64>) -> String {
    proportion.map_or_else(
        || "n/a".to_string(),
        |proportion| FormattedPercentage(proportion).to_string(),
    )
}

pub fn build_turbine_table(estimator: &PowerEstimator) -> Table {
    let parameters = estimator.parameters();
    let mut table = new_table();
    table.set_header(vec!["Turbine", ""]);
    table.add_row(vec![
        Cell::new("Rotor diameter"),
        Cell::new(format!("{:.1}", parameters.rotor_diameter())),
    ]);
    table.add_row(vec![
        Cell::new("Swept area"),
        Cell::new(format!("{:.0}", estimator.swept_area())),
    ]);
    table.add_row(vec![
        Cell::new("Air density"),
        Cell::new(format!("{:.3}", parameters.air_density())),
    ]);
    table.add_row(vec![
        Cell::new("Power coefficient"),
        Cell::new(format!("{:.2}", parameters.power_coefficient())),
    ]);
    table.add_row(vec![
        Cell::new("Cut-in / rated / cut-out"),
        Cell::new(format!(
            "{:.1} / {:.1} / {:.1}",
            parameters.cut_in_speed(),
            parameters.rated_speed(),
            parameters.cut_out_speed(),
        )),
    ]);
    table.add_row(vec![
        Cell::new("Power curve"),
        Cell::new(match parameters.power_curve() {
            PowerCurve::Aerodynamic => "Aerodynamic",
            PowerCurve::CubicRamp { .. } => "Cubic ramp",
        }),
    ]);
    table.add_row(vec![
        Cell::new("Rated power").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}", Kilowatts::from(estimator.rated_power())))
            .add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_curve_table(curve: &[(MetersPerSecond, Watts)], rated_power: Watts) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Wind", "Power", "Rated"]);
    for (wind_speed, power) in curve {
        table.add_row(vec![
            Cell::new(format!("{wind_speed:.1}")).set_alignment(CellAlignment::Right),
            power_cell(*power, rated_power),
            Cell::new(optional_percentage(
                (rated_power > Watts::ZERO).then(|| *power / rated_power),
            ))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_series_table(
    samples: &WindSamples,
    power_series: &PowerSeries,
    rated_power: Watts,
) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Date", "Time", "Wind", "Power"]);
    for ((timestamp, wind_speed), (_, power)) in samples.iter().zip(power_series) {
        table.add_row(vec![
            Cell::new(timestamp.format("%b %d")).add_attribute(Attribute::Dim),
            Cell::new(timestamp.format("%H:%M:%S")),
            Cell::new(format!("{wind_speed:.1}")).set_alignment(CellAlignment::Right),
            power_cell(*power, rated_power),
        ]);
    }
    table
}

pub fn build_summary_table(summary: &SeriesSummary) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Summary", ""]);
    table.add_row(vec![Cell::new("Samples"), Cell::new(summary.n_samples)]);
    table.add_row(vec![Cell::new("Duration"), Cell::new(format!("{:.2}", summary.duration))]);
    table.add_row(vec![
        Cell::new("Total energy").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}", KilowattHours::from(summary.total_energy)))
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Mean power"),
        Cell::new(summary.mean_power.map_or_else(
            || "n/a".to_string(),
            |mean_power| format!("{:.1}", Kilowatts::from(mean_power)),
        )),
    ]);
    table.add_row(vec![
        Cell::new("Capacity factor"),
        Cell::new(optional_percentage(summary.capacity_factor)),
    ]);
    table
}

pub fn build_annual_yield_table(site: Option<&str>, annual_yield: &AnnualYield) -> Table {
    let mut table = new_table();
    table.set_header(vec![site.unwrap_or("Site"), ""]);
    table.add_row(vec![
        Cell::new("Mean wind speed"),
        Cell::new(format!("{:.2}", annual_yield.mean_wind_speed)),
    ]);
    table.add_row(vec![
        Cell::new("Wind power density"),
        Cell::new(format!("{:.0}", annual_yield.wind_power_density)),
    ]);
    table.add_row(vec![
        Cell::new("Expected power"),
        Cell::new(format!("{:.1}", Kilowatts::from(annual_yield.expected_power))),
    ]);
    table.add_row(vec![
        Cell::new("Annual energy").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1} MWh", annual_yield.annual_energy.0 / 1000.0))
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Capacity factor"),
        Cell::new(optional_percentage(annual_yield.capacity_factor)),
    ]);
    table
}
