use crate::chart::generate_y_axis;
use crate::dashboard::CardData;
use crate::error::Result;
use crate::formatting::{format_currency, format_date_to_local};
use crate::pagination::{generate_pagination, has_next_page, has_previous_page, page_position};
use crate::types::{
    DashboardSnapshot, Invoice, InvoiceStatus, Locale, PageItem, PagePosition, Revenue,
};
use colored::*;

// Width of the longest revenue bar, in characters
const CHART_WIDTH: u64 = 40;

/// Render the whole snapshot as a terminal report
pub fn render_snapshot(snapshot: &DashboardSnapshot) -> Result<String> {
    let locale = Locale::resolve(snapshot.locale.as_deref())?;
    let mut sections = vec![render_cards(&CardData::from_invoices(&snapshot.invoices))];

    if !snapshot.revenue.is_empty() {
        sections.push(render_revenue_chart(&snapshot.revenue)?);
    }

    if !snapshot.invoices.is_empty() {
        sections.push(render_invoices(&snapshot.invoices, locale)?);
    }

    sections.push(render_pagination(snapshot.current_page, snapshot.total_pages)?);

    Ok(sections.join("\n\n"))
}

pub fn render_cards(cards: &CardData) -> String {
    format!(
        "💰 Collected {}  ⏳ Pending {}  🧾 Invoices {}  👤 Customers {}",
        cards.total_paid.to_string().green(),
        cards.total_pending.to_string().yellow(),
        cards.invoice_count,
        cards.customer_count,
    )
}

/// Axis labels on the first line, one bar per month below
pub fn render_revenue_chart(revenue: &[Revenue]) -> Result<String> {
    let axis = generate_y_axis(revenue)?;
    let mut lines = Vec::with_capacity(revenue.len() + 1);

    lines.push(format!("📈 {}", axis.y_axis_labels.join(" ").dimmed()));

    for point in revenue {
        let value = point.revenue.max(0).unsigned_abs();
        let width = if axis.top_label == 0 {
            0
        } else {
            value.saturating_mul(CHART_WIDTH) / axis.top_label
        };

        lines.push(format!(
            "{:>4} {} {}",
            point.month,
            "█".repeat(width as usize).cyan(),
            format_currency(point.revenue.saturating_mul(100)),
        ));
    }

    Ok(lines.join("\n"))
}

pub fn render_invoices(invoices: &[Invoice], locale: Locale) -> Result<String> {
    let mut lines = Vec::with_capacity(invoices.len());

    for invoice in invoices {
        let date = format_date_to_local(&invoice.date, Some(locale.as_str()))?;
        let status = match invoice.status {
            InvoiceStatus::Paid => "paid".green(),
            InvoiceStatus::Pending => "pending".yellow(),
        };

        lines.push(format!(
            "{} {} {} {} {}",
            invoice.name.bold(),
            invoice.email.dimmed(),
            invoice.amount,
            date,
            status,
        ));
    }

    Ok(lines.join("\n"))
}

/// Pagination line with the current page highlighted, e.g. "‹ 1 ... 4 5 6 ... 10 ›"
pub fn render_pagination(current_page: u32, total_pages: u32) -> Result<String> {
    let items = generate_pagination(current_page, total_pages)?;

    let numbers: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            page_label(item, page_position(&items, index), current_page).to_string()
        })
        .collect();

    Ok(format!(
        "{} {} {}",
        arrow("‹", has_previous_page(current_page)),
        numbers.join(" "),
        arrow("›", has_next_page(current_page, total_pages)),
    ))
}

// Arrows without a page to move to are dimmed
fn arrow(symbol: &str, enabled: bool) -> ColoredString {
    if enabled {
        symbol.normal()
    } else {
        symbol.dimmed()
    }
}

// Current page reversed, outer edges bold, ellipses dimmed
fn page_label(item: &PageItem, position: PagePosition, current_page: u32) -> ColoredString {
    let label = item.to_string();
    let styled = match item {
        PageItem::Ellipsis => return label.dimmed(),
        PageItem::Page(n) if *n == current_page => label.reversed(),
        PageItem::Page(_) => label.normal(),
    };

    match position {
        PagePosition::First | PagePosition::Last | PagePosition::Single => styled.bold(),
        PagePosition::Middle => styled,
    }
}
