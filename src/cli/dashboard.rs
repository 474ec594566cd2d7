use super::ui;
use crate::core::{
    AggregateResult, AssetRecord, AssetSource, ChartPoint, Dashboard, DashboardState,
    DashboardView,
};
use anyhow::{Context, Result, bail};
use comfy_table::{Cell, CellAlignment, Table};
use indicatif::ProgressBar;
use std::io::Write;

const BAR_WIDTH: f64 = 30.0;

/// Mounts the dashboard once and renders it to stdout.
pub async fn run(source: &dyn AssetSource, currency: &str, json: bool) -> Result<()> {
    let dashboard = Dashboard::new(source);
    let pb = ui::new_spinner("Fetching assets...");

    if json {
        let mut view = SpinnerView::new(pb, JsonView::new(std::io::stdout()));
        dashboard.mount(&mut view).await
    } else {
        let mut view = SpinnerView::new(pb, TerminalView::stdout(currency));
        dashboard.mount(&mut view).await
    }
}

/// Clears the spinner before handing the state to the wrapped view.
struct SpinnerView<V: DashboardView> {
    pb: ProgressBar,
    inner: V,
}

impl<V: DashboardView> SpinnerView<V> {
    fn new(pb: ProgressBar, inner: V) -> Self {
        Self { pb, inner }
    }
}

impl<V: DashboardView> DashboardView for SpinnerView<V> {
    fn update(&mut self, state: &DashboardState) -> Result<()> {
        self.pb.finish_and_clear();
        self.inner.update(state)
    }
}

/// Renders the dashboard as styled text on a terminal.
pub struct TerminalView<W: Write> {
    out: W,
    currency: String,
}

impl TerminalView<std::io::Stdout> {
    pub fn stdout(currency: &str) -> Self {
        Self::new(std::io::stdout(), currency)
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, currency: &str) -> Self {
        Self {
            out,
            currency: currency.to_string(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&self, state: &DashboardState) -> String {
        match state {
            DashboardState::Loaded(result) => self.render_loaded(result),
            DashboardState::Failed {
                message,
                recoverable,
            } => {
                let mut output = format!(
                    "{}\n",
                    ui::style_text(
                        &format!("Could not load assets: {message}"),
                        ui::StyleType::Error
                    )
                );
                if *recoverable {
                    output.push_str(&ui::style_text(
                        "Run the dashboard again to retry.",
                        ui::StyleType::Subtle,
                    ));
                    output.push('\n');
                }
                output
            }
        }
    }

    fn render_loaded(&self, result: &AggregateResult) -> String {
        let mut output = invested_value_box(result.invested_value, &self.currency);
        output.push('\n');
        output.push_str(&distribution_chart(&result.chart_series));
        output.push('\n');

        for (i, asset) in result.buy_assets.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&investment_card(asset).to_string());
            output.push('\n');
        }
        output
    }
}

impl<W: Write> DashboardView for TerminalView<W> {
    fn update(&mut self, state: &DashboardState) -> Result<()> {
        let rendered = self.render(state);
        writeln!(self.out, "{rendered}").context("Failed to write dashboard")?;
        self.out.flush().context("Failed to flush dashboard output")
    }
}

fn invested_value_box(value: f64, currency: &str) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("INVESTED VALUE")]);
    table.add_row(vec![
        Cell::new(ui::style_text(
            &format!("{value} {currency}"),
            ui::StyleType::TotalValue,
        ))
        .set_alignment(CellAlignment::Center),
    ]);
    table.to_string()
}

fn distribution_chart(series: &[ChartPoint]) -> String {
    let mut output = format!(
        "{}\n\n",
        ui::style_text("Portfolio Distribution", ui::StyleType::Title)
    );

    if series.is_empty() {
        output.push_str(&ui::style_text(
            "No buy assets to chart",
            ui::StyleType::Subtle,
        ));
        output.push('\n');
        return output;
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Asset type"),
        ui::header_cell("Percentage"),
        ui::header_cell(""),
    ]);

    for (i, point) in series.iter().enumerate() {
        let color = ui::series_color(i);
        let bar_len = (point.value / 100.0 * BAR_WIDTH).round() as usize;
        table.add_row(vec![
            Cell::new(&point.label).fg(color),
            ui::percentage_cell(point.value),
            Cell::new("█".repeat(bar_len)).fg(color),
        ]);
    }

    output.push_str(&table.to_string());
    output.push('\n');
    output
}

/// A card for a single buy asset. The two actions are placeholders.
fn investment_card(asset: &AssetRecord) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Investment card")]);
    for line in [
        format!("Name: {}", asset.name),
        format!("Type of Asset: {}", asset.asset_type),
        format!("Value: {}", asset.value()),
    ] {
        table.add_row(vec![Cell::new(ui::style_text(
            &line,
            ui::StyleType::Subtle,
        ))]);
    }
    table.add_row(vec![Cell::new(ui::style_text(
        "[Buy/Sell]  [Transaction History]",
        ui::StyleType::TotalLabel,
    ))]);
    table
}

/// Writes the aggregate as JSON, the raw contract other consumers bind to.
pub struct JsonView<W: Write> {
    out: W,
}

impl<W: Write> JsonView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DashboardView for JsonView<W> {
    fn update(&mut self, state: &DashboardState) -> Result<()> {
        match state {
            DashboardState::Loaded(result) => {
                serde_json::to_writer_pretty(&mut self.out, result)
                    .context("Failed to serialize dashboard")?;
                writeln!(self.out).context("Failed to write dashboard")?;
                Ok(())
            }
            DashboardState::Failed { message, .. } => {
                bail!("Could not load assets: {message}")
            }
        }
    }
}
